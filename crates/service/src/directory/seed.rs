use models::{Business, Category, Location};

/// Demonstration listings written on first start. Their `rating` and
/// `review_count` are fixed showcase values, not derived from reviews.
pub fn demo_businesses() -> Vec<Business> {
    vec![
        Business {
            id: 1,
            name: "Joe's Pizza".into(),
            category: Category::Restaurant,
            location: Location::NewYork,
            description: "Authentic New York style pizza since 1985.".into(),
            phone: "(555) 123-4567".into(),
            hours: "11 AM - 10 PM, Daily".into(),
            rating: 4.5,
            review_count: 125,
        },
        Business {
            id: 2,
            name: "Tech Solutions Inc.".into(),
            category: Category::Service,
            location: Location::LosAngeles,
            description: "Professional IT services and computer repairs.".into(),
            phone: "(555) 987-6543".into(),
            hours: "9 AM - 6 PM, Mon-Fri".into(),
            rating: 4.2,
            review_count: 89,
        },
        Business {
            id: 3,
            name: "Green Leaf Cafe".into(),
            category: Category::Restaurant,
            location: Location::Chicago,
            description: "Healthy organic food and coffee.".into(),
            phone: "(555) 456-7890".into(),
            hours: "7 AM - 8 PM, Daily".into(),
            rating: 4.7,
            review_count: 203,
        },
    ]
}
