// admin-console/src/service/department_service.rs

use uuid::Uuid;

use crate::domain::department_model::{now_create_time, Department};
use crate::domain::status::Status;
use crate::error::AppResult;
use crate::log_with_context;
use crate::repository::department_repository::{DepartmentRepository, Placement};
use crate::service::latency::MockLatency;
use crate::utils::error_helper::not_found_error;

/// 部門 API の疑似遅延（ミリ秒）
const DEPARTMENT_LATENCY_MS: u64 = 300;

/// 部門作成の入力
#[derive(Debug, Clone)]
pub struct CreateDepartmentInput {
    pub parent_id: Option<String>,
    pub name: String,
    pub code: String,
    pub leader: String,
    pub status: Status,
    pub sort: i32,
    pub description: Option<String>,
}

/// 部門更新の入力（`None` の項目は変更しない）
#[derive(Debug, Clone, Default)]
pub struct UpdateDepartmentInput {
    pub parent_id: Option<Option<String>>,
    pub name: Option<String>,
    pub code: Option<String>,
    pub leader: Option<String>,
    pub status: Option<Status>,
    pub sort: Option<i32>,
    pub description: Option<Option<String>>,
}

impl UpdateDepartmentInput {
    pub fn has_updates(&self) -> bool {
        self.parent_id.is_some()
            || self.name.is_some()
            || self.code.is_some()
            || self.leader.is_some()
            || self.status.is_some()
            || self.sort.is_some()
            || self.description.is_some()
    }

    /// 指定された項目だけを上書きする（id / createTime / children は対象外）
    pub fn merge_into(self, department: &mut Department) {
        if let Some(parent_id) = self.parent_id {
            department.parent_id = parent_id;
        }
        if let Some(name) = self.name {
            department.name = name;
        }
        if let Some(code) = self.code {
            department.code = code;
        }
        if let Some(leader) = self.leader {
            department.leader = leader;
        }
        if let Some(status) = self.status {
            department.status = status;
        }
        if let Some(sort) = self.sort {
            department.sort = sort;
        }
        if let Some(description) = self.description {
            department.description = description;
        }
    }
}

pub struct DepartmentService {
    repo: DepartmentRepository,
    latency: MockLatency,
}

impl DepartmentService {
    pub fn new(repo: DepartmentRepository, latency: MockLatency) -> Self {
        Self { repo, latency }
    }

    /// 部門フォレスト全体を取得
    pub async fn list_departments(&self) -> Vec<Department> {
        self.latency.wait(DEPARTMENT_LATENCY_MS).await;
        self.repo.find_all().await
    }

    /// 部門を作成
    ///
    /// 親が見つからない場合も失敗せず、最上位に追加する。
    pub async fn create_department(&self, input: CreateDepartmentInput) -> Department {
        self.latency.wait(DEPARTMENT_LATENCY_MS).await;

        let department = Department {
            id: Uuid::new_v4().to_string(),
            parent_id: input.parent_id,
            name: input.name,
            code: input.code,
            leader: input.leader,
            status: input.status,
            sort: input.sort,
            create_time: now_create_time(),
            description: input.description,
            children: None,
        };

        let placement = self
            .repo
            .insert(department.parent_id.as_deref(), department.clone())
            .await;

        if placement == Placement::Root && department.parent_id.is_some() {
            log_with_context!(
                tracing::Level::WARN,
                "Parent department not found, appended to root",
                "department_id" => &department.id,
                "parent_id" => &department.parent_id
            );
        }

        log_with_context!(
            tracing::Level::INFO,
            "Department created",
            "department_id" => &department.id,
            "code" => &department.code,
            "placement" => placement
        );

        department
    }

    /// 部門情報を更新
    pub async fn update_department(
        &self,
        id: &str,
        input: UpdateDepartmentInput,
    ) -> AppResult<Department> {
        self.latency.wait(DEPARTMENT_LATENCY_MS).await;

        log_with_context!(
            tracing::Level::DEBUG,
            "Updating department",
            "department_id" => id,
            "has_updates" => input.has_updates()
        );

        let updated = self
            .repo
            .update_with(id, |department| input.merge_into(department))
            .await
            .ok_or_else(|| {
                not_found_error("Department", id, "department_service::update_department")
            })?;

        log_with_context!(
            tracing::Level::INFO,
            "Department updated",
            "department_id" => id
        );

        Ok(updated)
    }

    /// 部門を削除（子部門も一緒に削除される）
    pub async fn delete_department(&self, id: &str) -> AppResult<()> {
        self.latency.wait(DEPARTMENT_LATENCY_MS).await;

        let removed = self.repo.remove(id).await.ok_or_else(|| {
            not_found_error("Department", id, "department_service::delete_department")
        })?;

        log_with_context!(
            tracing::Level::INFO,
            "Department deleted",
            "department_id" => id,
            "children_removed" => removed.children.as_ref().map_or(0, Vec::len)
        );

        Ok(())
    }
}
