pub mod cli;
pub mod clients;
pub mod config;
pub mod error;
pub mod intake;
pub mod models;
pub mod render;
pub mod services;
pub mod utils;
pub mod validator;

pub use clients::{AnalysisClient, HttpAnalysisClient};
pub use error::{Error, ErrorKind, NetworkError, Result, ShapeError};
pub use models::{AnalysisResult, ReviewRecord};
pub use services::{UploadController, UploadState};
pub use validator::validate;
