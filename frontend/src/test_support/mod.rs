#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod helpers {
    use crate::api::{EmployeeRef, LeaveRecord};

    pub fn directory() -> Vec<EmployeeRef> {
        vec![
            EmployeeRef::new("E1", "Alice"),
            EmployeeRef::new("E2", "Bob"),
        ]
    }

    pub fn leave_record(emp_id: &str, start: &str, leave_type: &str) -> LeaveRecord {
        LeaveRecord {
            employee: EmployeeRef::new(emp_id, "Alice"),
            leave_start_date: start.into(),
            leave_end_date: start.into(),
            leave_type: leave_type.into(),
            leave_reason: "personal".into(),
            applied_date: None,
        }
    }

    pub async fn wait_until(mut condition: impl FnMut() -> bool) -> bool {
        for _ in 0..100 {
            if condition() {
                return true;
            }
            tokio::time::sleep(std::time::Duration::from_millis(10)).await;
        }
        false
    }
}
