pub mod client;
mod employees;
mod leaves;
pub mod types;

pub use client::*;
pub use leaves::EXCEL_CONTENT_TYPE;
pub use types::*;

#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod test_support;
