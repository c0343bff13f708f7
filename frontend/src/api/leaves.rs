use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use super::{
    client::ApiClient,
    types::{ApiError, LeaveDraft, LeaveRecord},
};

pub const EXCEL_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

fn employee_leaves_path(base_url: &str, emp_id: &str) -> String {
    format!(
        "{}/leaves/employee/{}",
        base_url,
        utf8_percent_encode(emp_id, PATH_SEGMENT)
    )
}

impl ApiClient {
    /// Posts the draft; the response body is ignored.
    pub async fn save_leave(&self, draft: &LeaveDraft) -> Result<(), ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .post(format!("{}/leaves/save", base_url))
                    .headers(Self::json_headers())
                    .json(draft),
            )
            .await?;
        Self::ensure_success(response).map(|_| ())
    }

    pub async fn list_employee_leaves(&self, emp_id: &str) -> Result<Vec<LeaveRecord>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .get(employee_leaves_path(&base_url, emp_id)),
            )
            .await?;
        Self::map_json_response(response).await
    }

    pub async fn download_leaves_excel(&self, emp_id: &str) -> Result<Vec<u8>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .get(format!(
                        "{}/download-excel",
                        employee_leaves_path(&base_url, emp_id)
                    ))
                    .header(reqwest::header::ACCEPT, EXCEL_CONTENT_TYPE),
            )
            .await?;
        let bytes = Self::ensure_success(response)?
            .bytes()
            .await
            .map_err(|e| ApiError::unknown(format!("Failed to read spreadsheet: {}", e)))?;
        Ok(bytes.to_vec())
    }
}
