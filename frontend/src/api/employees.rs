use super::{
    client::ApiClient,
    types::{ApiError, EmployeeRef},
};

impl ApiClient {
    pub async fn list_employees(&self) -> Result<Vec<EmployeeRef>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(self.http_client().get(format!("{}/emp/all", base_url)))
            .await?;
        Self::map_json_response(response).await
    }
}
