//! Pure listing predicates. Search and filter only drop entries, so applying
//! them in either order yields the same result.

use models::{Business, Category, Location};
use serde::{Deserialize, Serialize};

/// Combined search + filter request as issued by the listing view.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryQuery {
    #[serde(default)]
    pub term: String,
    #[serde(default)]
    pub location: Option<Location>,
    #[serde(default)]
    pub category: Option<Category>,
}

impl DirectoryQuery {
    pub fn search(term: impl Into<String>) -> Self {
        Self { term: term.into(), ..Self::default() }
    }

    pub fn filter(location: Option<Location>, category: Option<Category>) -> Self {
        Self { term: String::new(), location, category }
    }

    /// Run against `businesses`, keeping their order.
    pub fn apply<'a, I>(&self, businesses: I) -> Vec<Business>
    where
        I: IntoIterator<Item = &'a Business>,
    {
        let filtered = filter(businesses, self.location.as_ref(), self.category.as_ref());
        search(&filtered, &self.term)
    }
}

fn normalize_term(term: &str) -> String {
    term.trim().to_lowercase()
}

pub fn search<'a, I>(businesses: I, term: &str) -> Vec<Business>
where
    I: IntoIterator<Item = &'a Business>,
{
    let needle = normalize_term(term);
    businesses.into_iter().filter(|b| b.matches_term(&needle)).cloned().collect()
}

pub fn filter<'a, I>(businesses: I, location: Option<&Location>, category: Option<&Category>) -> Vec<Business>
where
    I: IntoIterator<Item = &'a Business>,
{
    businesses
        .into_iter()
        .filter(|b| b.matches_filter(location, category))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::seed::demo_businesses;

    fn ids(list: &[Business]) -> Vec<u64> {
        list.iter().map(|b| b.id).collect()
    }

    #[test]
    fn blank_term_keeps_everything() {
        let all = demo_businesses();
        assert_eq!(ids(&search(&all, "")), vec![1, 2, 3]);
        assert_eq!(ids(&search(&all, "   ")), vec![1, 2, 3]);
    }

    #[test]
    fn search_is_case_insensitive_on_name_and_description() {
        let all = demo_businesses();
        assert_eq!(ids(&search(&all, "PIZZA")), vec![1]);
        assert_eq!(ids(&search(&all, "computer")), vec![2]);
        assert_eq!(ids(&search(&all, "  Coffee ")), vec![3]);
        assert!(search(&all, "sushi").is_empty());
    }

    #[test]
    fn filter_matches_each_provided_field() {
        let all = demo_businesses();
        assert_eq!(ids(&filter(&all, None, Some(&Category::Restaurant))), vec![1, 3]);
        assert_eq!(ids(&filter(&all, Some(&Location::Chicago), Some(&Category::Restaurant))), vec![3]);
        assert!(filter(&all, Some(&Location::Miami), None).is_empty());
        assert_eq!(ids(&filter(&all, None, None)), vec![1, 2, 3]);
    }

    #[test]
    fn search_and_filter_commute() {
        let all = demo_businesses();
        let terms = ["", "a", "pizza", "services", "zzz"];
        let locations = [None, Some(Location::NewYork), Some(Location::Chicago), Some(Location::from("paris"))];
        let categories = [None, Some(Category::Restaurant), Some(Category::Service)];
        for term in terms {
            for loc in &locations {
                for cat in &categories {
                    let a = filter(&search(&all, term), loc.as_ref(), cat.as_ref());
                    let b = search(&filter(&all, loc.as_ref(), cat.as_ref()), term);
                    assert_eq!(a, b, "term={term:?} loc={loc:?} cat={cat:?}");
                    let q = DirectoryQuery { term: term.into(), location: loc.clone(), category: cat.clone() };
                    assert_eq!(q.apply(&all), a);
                }
            }
        }
    }
}
