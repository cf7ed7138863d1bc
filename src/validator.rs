//! Client-side shape check for review files.
//!
//! Everything here is pure: the whole batch is accepted or the whole batch is
//! rejected, and nothing is sent until it is accepted.

use serde_json::Value;
use tracing::debug;

use crate::error::{Result, ShapeError};
use crate::models::ReviewRecord;

pub fn validate(text: &str) -> Result<Vec<ReviewRecord>> {
    let parsed: Value = serde_json::from_str(text)?;

    let Value::Array(items) = parsed else {
        return Err(ShapeError::NotAnArray.into());
    };

    let mut reviews = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        match into_record(item) {
            Some(review) => reviews.push(review),
            None => {
                debug!(index = index, "Review is missing 'Review_Text' or 'Rating'");
                return Err(ShapeError::MissingFields { index }.into());
            }
        }
    }

    debug!(count = reviews.len(), "Review file validated");
    Ok(reviews)
}

fn into_record(item: Value) -> Option<ReviewRecord> {
    let Value::Object(mut fields) = item else {
        return None;
    };

    let review_text = fields.remove("Review_Text").filter(is_truthy)?;
    // Any present rating counts, null included.
    let rating = fields.remove("Rating")?;

    Some(ReviewRecord {
        review_text,
        rating,
        extra: fields,
    })
}

/// JavaScript truthiness over JSON values.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
