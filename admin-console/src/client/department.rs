// admin-console/src/client/department.rs

use crate::api::dto::department_dto::{CreateDepartmentRequest, UpdateDepartmentRequest};
use crate::client::{ApiClient, ClientError};
use crate::domain::department_model::Department;

impl ApiClient {
    pub async fn list_departments(&self) -> Result<Vec<Department>, ClientError> {
        self.get(&["system", "dept", "list"]).await
    }

    pub async fn create_department(
        &self,
        request: &CreateDepartmentRequest,
    ) -> Result<Department, ClientError> {
        self.post(&["system", "dept"], request).await
    }

    pub async fn update_department(
        &self,
        id: &str,
        request: &UpdateDepartmentRequest,
    ) -> Result<Department, ClientError> {
        self.put(&["system", "dept", id], request).await
    }

    pub async fn delete_department(&self, id: &str) -> Result<(), ClientError> {
        self.delete(&["system", "dept", id]).await
    }
}
