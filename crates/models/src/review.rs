use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

/// Author recorded on every review; there is no user identity.
pub const ANONYMOUS_AUTHOR: &str = "Anonymous User";
pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: u64,
    pub business_id: u64,
    pub rating: u8,
    #[serde(default)]
    pub comment: String,
    pub author: String,
    pub date: String,
}

impl Review {
    pub fn new(id: u64, business_id: u64, rating: u8, comment: String, date: NaiveDate) -> Result<Self, ModelError> {
        validate_rating(rating)?;
        Ok(Self {
            id,
            business_id,
            rating,
            comment,
            author: ANONYMOUS_AUTHOR.to_string(),
            date: format_review_date(date),
        })
    }
}

pub fn validate_rating(rating: u8) -> Result<(), ModelError> {
    if !(MIN_RATING..=MAX_RATING).contains(&rating) {
        return Err(ModelError::Validation(format!(
            "rating must be between {MIN_RATING} and {MAX_RATING}, got {rating}"
        )));
    }
    Ok(())
}

/// Month/day/year without zero padding, e.g. `3/7/2025`.
pub fn format_review_date(date: NaiveDate) -> String {
    format!("{}/{}/{}", date.month(), date.day(), date.year())
}
