use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One entry of the uploaded review file.
///
/// Field values are kept as raw JSON: the service accepts any rating type, and keys
/// other than `Review_Text` and `Rating` are forwarded untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewRecord {
    #[serde(rename = "Review_Text")]
    pub review_text: Value,
    #[serde(rename = "Rating")]
    pub rating: Value,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ReviewRecord {
    pub fn new(review_text: impl Into<Value>, rating: impl Into<Value>) -> Self {
        Self {
            review_text: review_text.into(),
            rating: rating.into(),
            extra: Map::new(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AnalyzeRequest<'a> {
    pub reviews: &'a [ReviewRecord],
}
