// admin-console/src/service/role_service.rs

use uuid::Uuid;

use crate::domain::department_model::now_create_time;
use crate::domain::menu_model::{menu_tree, MenuTreeNode};
use crate::domain::role_model::Role;
use crate::domain::status::Status;
use crate::error::AppResult;
use crate::log_with_context;
use crate::repository::role_repository::RoleRepository;
use crate::service::latency::MockLatency;
use crate::shared::types::PageResult;
use crate::utils::error_helper::{bad_request_error, not_found_error};
use crate::utils::tree::find_node;

/// ロール API の疑似遅延（ミリ秒）
const ROLE_LATENCY_MS: u64 = 300;

/// ロール一覧の検索条件
#[derive(Debug, Clone, Default)]
pub struct RoleFilter {
    pub name: Option<String>,
    pub status: Option<Status>,
}

/// ロール作成・更新の入力
#[derive(Debug, Clone)]
pub struct RoleInput {
    pub name: String,
    pub code: String,
    pub status: Status,
    pub sort: i32,
    pub remark: Option<String>,
}

pub struct RoleService {
    repo: RoleRepository,
    latency: MockLatency,
}

impl RoleService {
    pub fn new(repo: RoleRepository, latency: MockLatency) -> Self {
        Self { repo, latency }
    }

    /// ロール一覧（名称の部分一致・状態で絞り込み、sort → createTime 順）
    pub async fn list_roles(
        &self,
        filter: &RoleFilter,
        page: u32,
        page_size: u32,
    ) -> PageResult<Role> {
        self.latency.wait(ROLE_LATENCY_MS).await;

        let keyword = filter
            .name
            .as_deref()
            .map(str::trim)
            .filter(|keyword| !keyword.is_empty());

        let mut roles: Vec<Role> = self
            .repo
            .find_all()
            .await
            .into_iter()
            .filter(|role| keyword.map_or(true, |k| role.name_contains(k)))
            .filter(|role| filter.status.map_or(true, |status| role.status == status))
            .collect();
        roles.sort_by(|a, b| {
            a.sort
                .cmp(&b.sort)
                .then_with(|| a.create_time.cmp(&b.create_time))
        });

        log_with_context!(
            tracing::Level::DEBUG,
            "Roles listed",
            "matched" => roles.len(),
            "page" => page,
            "page_size" => page_size
        );

        PageResult::paginate(roles, page, page_size)
    }

    pub async fn create_role(&self, input: RoleInput) -> AppResult<Role> {
        self.latency.wait(ROLE_LATENCY_MS).await;

        let role = Role {
            id: Uuid::new_v4().to_string(),
            name: input.name,
            code: input.code,
            status: input.status,
            sort: input.sort,
            remark: input.remark,
            create_time: now_create_time(),
        };
        let role = self.repo.create(role).await?;

        log_with_context!(
            tracing::Level::INFO,
            "Role created",
            "role_id" => &role.id,
            "code" => &role.code
        );

        Ok(role)
    }

    pub async fn update_role(&self, id: &str, input: RoleInput) -> AppResult<Role> {
        self.latency.wait(ROLE_LATENCY_MS).await;

        let code = input.code.clone();
        let role = self
            .repo
            .update_with(id, &code, |role| {
                role.name = input.name;
                role.code = input.code;
                role.status = input.status;
                role.sort = input.sort;
                role.remark = input.remark;
            })
            .await?;

        log_with_context!(
            tracing::Level::INFO,
            "Role updated",
            "role_id" => id
        );

        Ok(role)
    }

    /// カンマ区切りのIDでまとめて削除
    pub async fn delete_roles(&self, ids: &str) -> AppResult<usize> {
        self.latency.wait(ROLE_LATENCY_MS).await;

        let ids = parse_id_list(ids);
        if ids.is_empty() {
            return Err(bad_request_error(
                "At least one role id is required",
                "role_service::delete_roles",
            ));
        }

        let deleted = self.repo.delete_many(&ids).await?;

        log_with_context!(
            tracing::Level::INFO,
            "Roles deleted",
            "ids" => &ids,
            "deleted" => deleted
        );

        Ok(deleted)
    }

    pub async fn get_permissions(&self, role_id: &str) -> AppResult<Vec<String>> {
        self.latency.wait(ROLE_LATENCY_MS).await;

        self.repo
            .find_permissions(role_id)
            .await
            .ok_or_else(|| not_found_error("Role", role_id, "role_service::get_permissions"))
    }

    /// 付与メニューを置き換える（未知のメニューIDは 400）
    pub async fn update_permissions(&self, role_id: &str, menu_ids: Vec<String>) -> AppResult<()> {
        self.latency.wait(ROLE_LATENCY_MS).await;

        let tree = menu_tree();
        let unknown: Vec<&str> = menu_ids
            .iter()
            .map(String::as_str)
            .filter(|id| find_node(tree, id).is_none())
            .collect();
        if !unknown.is_empty() {
            return Err(bad_request_error(
                &format!("Unknown menu ids: {}", unknown.join(",")),
                "role_service::update_permissions",
            ));
        }

        let mut granted: Vec<String> = Vec::with_capacity(menu_ids.len());
        for id in menu_ids {
            if !granted.contains(&id) {
                granted.push(id);
            }
        }

        let count = granted.len();
        self.repo.replace_permissions(role_id, granted).await?;

        log_with_context!(
            tracing::Level::INFO,
            "Role permissions updated",
            "role_id" => role_id,
            "menu_count" => count
        );

        Ok(())
    }

    /// 権限設定用のメニューツリー
    pub async fn menu_tree(&self) -> Vec<MenuTreeNode> {
        self.latency.wait(ROLE_LATENCY_MS).await;
        menu_tree().to_vec()
    }
}

/// "1, 2,,3" -> ["1", "2", "3"]
fn parse_id_list(ids: &str) -> Vec<String> {
    ids.split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .collect()
}
