pub mod employee_select;
pub mod history;
pub mod leave_form;
