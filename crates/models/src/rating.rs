//! Rating aggregation and star display.

use std::fmt;

/// Number of glyphs in a rendered star rating.
pub const MAX_STARS: u8 = 5;

pub const FULL_STAR: char = '★';
pub const HALF_STAR: char = '½';
pub const EMPTY_STAR: char = '☆';

/// Round to one decimal place, halves away from zero, computed on the binary
/// value of `value * 10`. A mean such as 81/20 therefore becomes 4.1.
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Aggregate over the reviews of a single business.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ReviewStats {
    pub count: u32,
    /// Mean rating rounded to one decimal; `0.0` without reviews.
    pub average: f64,
}

impl ReviewStats {
    pub fn from_ratings<I>(ratings: I) -> Self
    where
        I: IntoIterator<Item = u8>,
    {
        let (count, sum) = ratings
            .into_iter()
            .fold((0u32, 0u64), |(n, s), r| (n + 1, s + u64::from(r)));
        if count == 0 {
            return Self::default();
        }
        Self { count, average: round_to_tenth(sum as f64 / f64::from(count)) }
    }
}

/// Glyph breakdown of a rating; `full + half + empty` is always [`MAX_STARS`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StarRating {
    pub full: u8,
    pub half: bool,
    pub empty: u8,
}

impl StarRating {
    /// Ratings outside `[0, 5]` (and NaN) are clamped first.
    pub fn from_rating(rating: f64) -> Self {
        let max = f64::from(MAX_STARS);
        let rating = if rating.is_nan() { 0.0 } else { rating.clamp(0.0, max) };
        let full = rating.floor() as u8;
        let half = full < MAX_STARS && rating.fract() >= 0.5;
        let empty = MAX_STARS - full - u8::from(half);
        Self { full, half, empty }
    }

    pub fn glyphs(&self) -> u8 {
        self.full + u8::from(self.half) + self.empty
    }
}

impl fmt::Display for StarRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for _ in 0..self.full {
            write!(f, "{FULL_STAR}")?;
        }
        if self.half {
            write!(f, "{HALF_STAR}")?;
        }
        for _ in 0..self.empty {
            write!(f, "{EMPTY_STAR}")?;
        }
        Ok(())
    }
}
