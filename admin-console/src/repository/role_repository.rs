// admin-console/src/repository/role_repository.rs

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::role_model::{seed_roles, Role};
use crate::error::AppError;
use crate::utils::error_helper::{conflict_error, not_found_error};

#[derive(Debug, Default)]
struct RoleState {
    roles: Vec<Role>,
    /// role_id -> 付与済みメニューID
    permissions: HashMap<String, Vec<String>>,
}

impl RoleState {
    fn position(&self, id: &str) -> Option<usize> {
        self.roles.iter().position(|role| role.id == id)
    }

    fn code_taken(&self, code: &str, except_id: Option<&str>) -> bool {
        self.roles
            .iter()
            .any(|role| role.code == code && Some(role.id.as_str()) != except_id)
    }
}

/// プロセス内のロールストア
#[derive(Clone)]
pub struct RoleRepository {
    state: Arc<RwLock<RoleState>>,
}

impl Default for RoleRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl RoleRepository {
    /// 初期データ入りで作成
    pub fn new() -> Self {
        let mut state = RoleState::default();
        for (role, menu_ids) in seed_roles() {
            state.permissions.insert(role.id.clone(), menu_ids);
            state.roles.push(role);
        }
        Self {
            state: Arc::new(RwLock::new(state)),
        }
    }

    /// 空のストア
    pub fn empty() -> Self {
        Self {
            state: Arc::new(RwLock::new(RoleState::default())),
        }
    }

    pub async fn find_all(&self) -> Vec<Role> {
        self.state.read().await.roles.clone()
    }

    pub async fn find_by_id(&self, id: &str) -> Option<Role> {
        let state = self.state.read().await;
        state.position(id).map(|index| state.roles[index].clone())
    }

    /// コードの一意性を確認して追加
    pub async fn create(&self, role: Role) -> Result<Role, AppError> {
        let mut state = self.state.write().await;
        if state.code_taken(&role.code, None) {
            return Err(conflict_error(
                &format!("Role code {} already exists", role.code),
                "role_repository::create",
            ));
        }
        state.permissions.insert(role.id.clone(), Vec::new());
        state.roles.push(role.clone());
        Ok(role)
    }

    /// コードの一意性を確認してその場で更新
    pub async fn update_with<F>(&self, id: &str, new_code: &str, apply: F) -> Result<Role, AppError>
    where
        F: FnOnce(&mut Role),
    {
        let mut state = self.state.write().await;
        let index = state
            .position(id)
            .ok_or_else(|| not_found_error("Role", id, "role_repository::update_with"))?;
        if state.code_taken(new_code, Some(id)) {
            return Err(conflict_error(
                &format!("Role code {} already exists", new_code),
                "role_repository::update_with",
            ));
        }
        let role = &mut state.roles[index];
        apply(role);
        Ok(role.clone())
    }

    /// まとめて削除（一件でも存在しなければ何も削除しない）
    pub async fn delete_many(&self, ids: &[String]) -> Result<usize, AppError> {
        let mut state = self.state.write().await;
        if let Some(missing) = ids.iter().find(|id| state.position(id).is_none()) {
            return Err(not_found_error("Role", missing, "role_repository::delete_many"));
        }

        let before = state.roles.len();
        state.roles.retain(|role| !ids.contains(&role.id));
        for id in ids {
            state.permissions.remove(id);
        }
        Ok(before - state.roles.len())
    }

    pub async fn find_permissions(&self, id: &str) -> Option<Vec<String>> {
        let state = self.state.read().await;
        state.position(id)?;
        Some(state.permissions.get(id).cloned().unwrap_or_default())
    }

    pub async fn replace_permissions(
        &self,
        id: &str,
        menu_ids: Vec<String>,
    ) -> Result<(), AppError> {
        let mut state = self.state.write().await;
        if state.position(id).is_none() {
            return Err(not_found_error(
                "Role",
                id,
                "role_repository::replace_permissions",
            ));
        }
        state.permissions.insert(id.to_string(), menu_ids);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::status::Status;

    fn role(id: &str, code: &str) -> Role {
        Role {
            id: id.to_string(),
            name: format!("{} role", code),
            code: code.to_string(),
            status: Status::Enable,
            sort: 0,
            remark: None,
            create_time: "2024-01-01 00:00:00".to_string(),
        }
    }

    #[tokio::test]
    async fn test_seeded_store() {
        let repo = RoleRepository::new();

        assert_eq!(repo.find_all().await.len(), 2);
        assert_eq!(repo.find_by_id("1").await.unwrap().code, "ADMIN");
        assert_eq!(
            repo.find_permissions("2").await.unwrap(),
            vec!["home", "table"]
        );
        assert!(repo.find_permissions("9").await.is_none());
    }

    #[tokio::test]
    async fn test_empty_store_create_and_conflict() {
        let repo = RoleRepository::empty();
        assert!(repo.find_all().await.is_empty());

        repo.create(role("a", "AUDITOR")).await.unwrap();
        assert_eq!(repo.find_permissions("a").await.unwrap(), Vec::<String>::new());

        let duplicate = repo.create(role("b", "AUDITOR")).await;
        assert!(matches!(duplicate, Err(AppError::Conflict(_))));
        assert!(repo.find_by_id("b").await.is_none());
    }

    #[tokio::test]
    async fn test_delete_many_is_all_or_nothing() {
        let repo = RoleRepository::new();

        let result = repo
            .delete_many(&["1".to_string(), "x".to_string()])
            .await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
        assert!(repo.find_by_id("1").await.is_some());

        assert_eq!(repo.delete_many(&["1".to_string()]).await.unwrap(), 1);
        assert!(repo.find_permissions("1").await.is_none());
    }
}
