pub mod leaves;

pub use leaves::*;
