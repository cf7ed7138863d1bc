mod review;
mod response;

pub use review::{AnalyzeRequest, ReviewRecord};
pub use response::{AnalysisResult, ServiceErrorBody};
