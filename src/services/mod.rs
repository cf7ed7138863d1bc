pub mod upload;

pub use upload::{UploadController, UploadState};
