use leptos::*;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Employee id/name pair as served by `/emp/all`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRef {
    #[serde(default)]
    pub emp_id: String,
    #[serde(default)]
    pub emp_name: String,
}

impl EmployeeRef {
    pub fn new(emp_id: impl Into<String>, emp_name: impl Into<String>) -> Self {
        Self {
            emp_id: emp_id.into(),
            emp_name: emp_name.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.emp_id.is_empty() && self.emp_name.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LeaveType {
    Paid,
    WithoutPay,
    Sick,
    Casual,
    Maternity,
    Wedding,
    Holiday,
}

impl LeaveType {
    pub const ALL: [LeaveType; 7] = [
        LeaveType::Paid,
        LeaveType::WithoutPay,
        LeaveType::Sick,
        LeaveType::Casual,
        LeaveType::Maternity,
        LeaveType::Wedding,
        LeaveType::Holiday,
    ];

    pub fn code(self) -> &'static str {
        match self {
            LeaveType::Paid => "PL",
            LeaveType::WithoutPay => "LWP",
            LeaveType::Sick => "SL",
            LeaveType::Casual => "CL",
            LeaveType::Maternity => "ML",
            LeaveType::Wedding => "WL",
            LeaveType::Holiday => "HDL",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LeaveType::Paid => "Paid Leave",
            LeaveType::WithoutPay => "Leave Without Pay",
            LeaveType::Sick => "Sick Leave",
            LeaveType::Casual => "Casual Leave",
            LeaveType::Maternity => "Maternity Leave",
            LeaveType::Wedding => "Wedding Leave",
            LeaveType::Holiday => "Holiday",
        }
    }

    /// Label for a code received from the backend; unknown codes are shown raw.
    pub fn display_code(code: &str) -> String {
        code.parse::<LeaveType>()
            .map(|kind| kind.label().to_string())
            .unwrap_or_else(|_| code.to_string())
    }
}

impl fmt::Display for LeaveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for LeaveType {
    type Err = ApiError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        LeaveType::ALL
            .into_iter()
            .find(|kind| kind.code().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ApiError::validation(format!("Unknown leave type: {}", value)))
    }
}

/// Empty string on the wire stands for "not selected yet".
mod leave_type_code {
    use super::*;

    pub fn serialize<S>(value: &Option<LeaveType>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(value.map(LeaveType::code).unwrap_or(""))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<LeaveType>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?.unwrap_or_default();
        if raw.trim().is_empty() {
            return Ok(None);
        }
        raw.parse::<LeaveType>()
            .map(Some)
            .map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    LeaveStartDate,
    LeaveEndDate,
    LeaveReason,
}

impl DraftField {
    pub fn name(self) -> &'static str {
        match self {
            DraftField::LeaveStartDate => "leaveStartDate",
            DraftField::LeaveEndDate => "leaveEndDate",
            DraftField::LeaveReason => "leaveReason",
        }
    }
}

impl FromStr for DraftField {
    type Err = ApiError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "leaveStartDate" => Ok(DraftField::LeaveStartDate),
            "leaveEndDate" => Ok(DraftField::LeaveEndDate),
            "leaveReason" => Ok(DraftField::LeaveReason),
            other => Err(ApiError::validation(format!("Unknown form field: {}", other))),
        }
    }
}

/// In-progress leave request, posted as-is to `/leaves/save`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveDraft {
    #[serde(rename = "employeeRequest", alias = "employeeRef", default)]
    pub employee: EmployeeRef,
    #[serde(default)]
    pub leave_start_date: String,
    #[serde(default)]
    pub leave_end_date: String,
    #[serde(with = "leave_type_code", default)]
    pub leave_type: Option<LeaveType>,
    #[serde(default)]
    pub leave_reason: String,
}

impl LeaveDraft {
    /// Looks `emp_id` up in `directory`; an unknown id leaves the selection untouched.
    pub fn select_employee(&mut self, directory: &[EmployeeRef], emp_id: &str) -> bool {
        match directory.iter().find(|emp| emp.emp_id == emp_id) {
            Some(emp) => {
                self.employee = emp.clone();
                true
            }
            None => false,
        }
    }

    pub fn edit_field(&mut self, field: DraftField, value: impl Into<String>) {
        let value = value.into();
        match field {
            DraftField::LeaveStartDate => self.leave_start_date = value,
            DraftField::LeaveEndDate => self.leave_end_date = value,
            DraftField::LeaveReason => self.leave_reason = value,
        }
    }

    pub fn field(&self, field: DraftField) -> &str {
        match field {
            DraftField::LeaveStartDate => &self.leave_start_date,
            DraftField::LeaveEndDate => &self.leave_end_date,
            DraftField::LeaveReason => &self.leave_reason,
        }
    }

    /// Empty input clears the type; anything else must be one of the fixed codes.
    pub fn select_leave_type(&mut self, raw: &str) -> Result<(), ApiError> {
        if raw.trim().is_empty() {
            self.leave_type = None;
            return Ok(());
        }
        self.leave_type = Some(raw.parse()?);
        Ok(())
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Historical leave entry from `/leaves/employee/{empId}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveRecord {
    #[serde(
        rename = "employeeResponse",
        alias = "employeeRequest",
        alias = "employeeRef",
        default
    )]
    pub employee: EmployeeRef,
    #[serde(default)]
    pub leave_start_date: String,
    #[serde(default)]
    pub leave_end_date: String,
    #[serde(default)]
    pub leave_type: String,
    #[serde(default)]
    pub leave_reason: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub applied_date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, thiserror::Error)]
#[error("{error}")]
pub struct ApiError {
    pub error: String,
    pub code: String,
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.error.into_view()
    }
}

impl ApiError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "VALIDATION_ERROR".to_string(),
        }
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "UNKNOWN".to_string(),
        }
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "REQUEST_FAILED".to_string(),
        }
    }

    /// Non-success response; `error` carries the status text.
    pub fn http_status(status: u16, status_text: impl Into<String>) -> Self {
        Self {
            error: status_text.into(),
            code: format!("HTTP_{}", status),
        }
    }
}
