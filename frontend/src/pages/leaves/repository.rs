use crate::api::{ApiClient, ApiError, EmployeeRef, LeaveDraft, LeaveRecord};
use std::rc::Rc;

#[derive(Clone)]
pub struct LeavesRepository {
    client: Rc<ApiClient>,
}

impl Default for LeavesRepository {
    fn default() -> Self {
        Self::new(ApiClient::new())
    }
}

impl LeavesRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    pub async fn fetch_directory(&self) -> Result<Vec<EmployeeRef>, ApiError> {
        self.client.list_employees().await
    }

    pub async fn submit_leave(&self, draft: LeaveDraft) -> Result<(), ApiError> {
        self.client.save_leave(&draft).await
    }

    pub async fn list_history(&self, emp_id: &str) -> Result<Vec<LeaveRecord>, ApiError> {
        self.client.list_employee_leaves(emp_id).await
    }

    pub async fn export_history(&self, emp_id: &str) -> Result<Vec<u8>, ApiError> {
        self.client.download_leaves_excel(emp_id).await
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use crate::api::EXCEL_CONTENT_TYPE;
    use serde_json::json;

    fn repo(server: &MockServer) -> LeavesRepository {
        LeavesRepository::new(ApiClient::new_with_base_url(server.url("/api")))
    }

    #[tokio::test]
    async fn leaves_repository_calls_api() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/emp/all");
            then.status(200)
                .json_body(json!([{ "empId": "E1", "empName": "Alice" }]));
        });
        server.mock(|when, then| {
            when.method(POST).path("/api/leaves/save");
            then.status(200);
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/leaves/employee/E1");
            then.status(200).json_body(json!([]));
        });
        server.mock(|when, then| {
            when.method(GET)
                .path("/api/leaves/employee/E1/download-excel");
            then.status(200).bytes_body(EXCEL_CONTENT_TYPE, vec![1, 2, 3]);
        });

        let repo = repo(&server);
        let directory = repo.fetch_directory().await.unwrap();
        assert_eq!(directory, vec![EmployeeRef::new("E1", "Alice")]);
        repo.submit_leave(LeaveDraft::default()).await.unwrap();
        assert!(repo.list_history("E1").await.unwrap().is_empty());
        assert_eq!(repo.export_history("E1").await.unwrap(), vec![1, 2, 3]);

        assert_eq!(server.hits(GET, "/api/emp/all"), 1);
        assert_eq!(server.hits(POST, "/api/leaves/save"), 1);
        assert_eq!(server.hits(GET, "/api/leaves/employee/E1"), 1);
    }

    #[tokio::test]
    async fn directory_failure_is_reported() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/emp/all");
            then.network_error("connection refused");
        });

        let err = repo(&server).fetch_directory().await.unwrap_err();
        assert_eq!(err.code, "REQUEST_FAILED");
    }
}
