use serde::{Deserialize, Serialize};

use crate::errors::{require_present, ModelError};
use crate::labels::{Category, Location};
use crate::rating::ReviewStats;

/// A listed business. `rating` and `review_count` are derived from reviews
/// and only change through [`Business::apply_stats`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Business {
    pub id: u64,
    pub name: String,
    pub category: Category,
    pub location: Location,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub hours: String,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub review_count: u32,
}

/// Registration input; id and derived fields are assigned by the store.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessInput {
    pub name: String,
    pub category: Category,
    pub location: Location,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub hours: String,
}

impl BusinessInput {
    pub fn validate(&self) -> Result<(), ModelError> {
        require_present("name", &self.name)
    }
}

impl Business {
    /// Build a freshly registered business with no reviews.
    pub fn register(id: u64, input: BusinessInput) -> Result<Self, ModelError> {
        input.validate()?;
        Ok(Self {
            id,
            name: input.name,
            category: input.category,
            location: input.location,
            description: input.description,
            phone: input.phone,
            hours: input.hours,
            rating: 0.0,
            review_count: 0,
        })
    }

    /// Case-insensitive substring match on name or description.
    /// `needle` must already be lowercased; an empty needle matches everything.
    pub fn matches_term(&self, needle: &str) -> bool {
        needle.is_empty()
            || self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }

    /// Absent filters act as wildcards.
    pub fn matches_filter(&self, location: Option<&Location>, category: Option<&Category>) -> bool {
        location.map_or(true, |l| &self.location == l) && category.map_or(true, |c| &self.category == c)
    }

    pub fn apply_stats(&mut self, stats: ReviewStats) {
        self.rating = stats.average;
        self.review_count = stats.count;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str) -> BusinessInput {
        BusinessInput {
            name: name.into(),
            category: Category::Retail,
            location: Location::Miami,
            description: "Vintage Records and Tapes".into(),
            phone: String::new(),
            hours: String::new(),
        }
    }

    #[test]
    fn register_starts_without_reviews() {
        let b = Business::register(7, input("Spin Shop")).unwrap();
        assert_eq!(b.id, 7);
        assert_eq!(b.rating, 0.0);
        assert_eq!(b.review_count, 0);
    }

    #[test]
    fn blank_name_is_rejected() {
        assert!(matches!(Business::register(1, input("   ")), Err(ModelError::Validation(_))));
        assert!(matches!(Business::register(1, input("")), Err(ModelError::Validation(_))));
    }

    #[test]
    fn term_matches_name_or_description() {
        let b = Business::register(1, input("Spin Shop")).unwrap();
        assert!(b.matches_term("spin"));
        assert!(b.matches_term("tapes"));
        assert!(b.matches_term(""));
        assert!(!b.matches_term("pizza"));
    }

    #[test]
    fn filters_are_conjunctive_wildcards() {
        let b = Business::register(1, input("Spin Shop")).unwrap();
        assert!(b.matches_filter(None, None));
        assert!(b.matches_filter(Some(&Location::Miami), Some(&Category::Retail)));
        assert!(!b.matches_filter(Some(&Location::Miami), Some(&Category::Service)));
        assert!(!b.matches_filter(Some(&Location::Chicago), None));
    }

    #[test]
    fn json_uses_camel_case_field_names() {
        let mut b = Business::register(3, input("Spin Shop")).unwrap();
        b.apply_stats(ReviewStats { count: 2, average: 4.5 });
        let value = serde_json::to_value(&b).unwrap();
        assert_eq!(value["reviewCount"], 2);
        assert_eq!(value["rating"], 4.5);
        assert_eq!(value["location"], "miami");
    }

    #[test]
    fn missing_optional_fields_default() {
        let b: Business = serde_json::from_str(
            r#"{"id":9,"name":"Corner Deli","category":"restaurant","location":"chicago"}"#,
        )
        .unwrap();
        assert_eq!(b.description, "");
        assert_eq!(b.review_count, 0);
        assert_eq!(b.rating, 0.0);
    }
}
