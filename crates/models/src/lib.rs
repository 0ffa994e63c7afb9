//! Domain records for the business directory: businesses, reviews, their
//! display labels, and rating aggregation.

pub mod errors;
pub mod labels;
pub mod rating;
pub mod business;
pub mod review;
pub mod contact;

pub use business::{Business, BusinessInput};
pub use labels::{Category, Location};
pub use rating::{ReviewStats, StarRating};
pub use review::Review;
