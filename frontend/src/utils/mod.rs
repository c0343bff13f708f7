pub mod download;

pub use download::trigger_blob_download;
