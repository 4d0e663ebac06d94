// admin-console/src/client/role.rs

use serde_json::json;

use crate::api::dto::role_dto::{DeleteRolesResponse, RoleRequest};
use crate::client::{ApiClient, ClientError};
use crate::domain::menu_model::MenuTreeNode;
use crate::domain::role_model::Role;
use crate::domain::status::Status;
use crate::schema::table::FetchDataResult;

/// ロール一覧の検索条件
#[derive(Debug, Clone, Default)]
pub struct RoleQuery {
    pub page: u32,
    pub page_size: u32,
    pub name: Option<String>,
    pub status: Option<Status>,
}

impl RoleQuery {
    fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("page", self.page.max(1).to_string()),
            ("pageSize", self.page_size.max(1).to_string()),
        ];
        if let Some(name) = &self.name {
            pairs.push(("name", name.clone()));
        }
        if let Some(status) = self.status {
            pairs.push(("status", status.as_str().to_string()));
        }
        pairs
    }
}

impl ApiClient {
    pub async fn list_roles(
        &self,
        query: &RoleQuery,
    ) -> Result<FetchDataResult<Role>, ClientError> {
        self.get_with_query(&["system", "role", "list"], &query.to_pairs())
            .await
    }

    pub async fn create_role(&self, request: &RoleRequest) -> Result<Role, ClientError> {
        self.post(&["system", "role"], request).await
    }

    pub async fn update_role(&self, id: &str, request: &RoleRequest) -> Result<Role, ClientError> {
        self.put(&["system", "role", id], request).await
    }

    /// まとめて削除（いずれかが存在しなければ何も削除されない）
    pub async fn delete_roles(&self, ids: &[&str]) -> Result<usize, ClientError> {
        let joined = ids.join(",");
        let response: DeleteRolesResponse =
            self.delete(&["system", "role", joined.as_str()]).await?;
        Ok(response.deleted_count)
    }

    pub async fn role_permissions(&self, role_id: &str) -> Result<Vec<String>, ClientError> {
        self.get(&["system", "role", role_id, "permissions"])
            .await
    }

    pub async fn update_role_permissions(
        &self,
        role_id: &str,
        menu_ids: &[&str],
    ) -> Result<(), ClientError> {
        self.put(
            &["system", "role", role_id, "permissions"],
            &json!({ "menuIds": menu_ids }),
        )
        .await
    }

    pub async fn menu_tree(&self) -> Result<Vec<MenuTreeNode>, ClientError> {
        self.get(&["system", "menu", "tree"]).await
    }
}
