//! Default categories every new user starts with.
//!
//! The income side includes the names event settlement looks up, so a
//! seeded user can settle every event type without further setup.

use finagenda_shared::types::{CategoryId, UserId};

use super::types::{Category, CategoryType, TransactionType};

struct SeedGroup {
    name: &'static str,
    color: &'static str,
    /// Category name and whether it counts as essential spending.
    categories: &'static [(&'static str, bool)],
}

const EXPENSE_GROUPS: &[SeedGroup] = &[
    SeedGroup {
        name: "Food",
        color: "#f97316",
        categories: &[
            ("Groceries", true),
            ("Restaurants", false),
            ("Delivery", false),
            ("Coffee", false),
        ],
    },
    SeedGroup {
        name: "Housing",
        color: "#8b5cf6",
        categories: &[
            ("Rent", true),
            ("Utilities", true),
            ("Internet", true),
            ("Home Maintenance", false),
        ],
    },
    SeedGroup {
        name: "Transport",
        color: "#3b82f6",
        categories: &[
            ("Fuel", true),
            ("Public Transport", true),
            ("Ride Apps", false),
            ("Parking", false),
            ("Vehicle Maintenance", true),
        ],
    },
    SeedGroup {
        name: "Health",
        color: "#ef4444",
        categories: &[
            ("Health Insurance", true),
            ("Pharmacy", true),
            ("Doctor", true),
            ("Gym", false),
        ],
    },
    SeedGroup {
        name: "Education",
        color: "#14b8a6",
        categories: &[("Courses", false), ("Books", false)],
    },
    SeedGroup {
        name: "Leisure",
        color: "#ec4899",
        categories: &[
            ("Streaming", false),
            ("Travel", false),
            ("Hobbies", false),
            ("Bars", false),
        ],
    },
    SeedGroup {
        name: "Shopping",
        color: "#f59e0b",
        categories: &[("Clothing", false), ("Electronics", false), ("Gifts", false)],
    },
    SeedGroup {
        name: "Work & Music",
        color: "#6366f1",
        categories: &[
            ("Instruments", false),
            ("Music Accessories", false),
            ("Instrument Maintenance", false),
            ("Software & Plugins", false),
            ("Sound Equipment", false),
            ("Marketing", false),
            ("Work Transport", false),
        ],
    },
    SeedGroup {
        name: "Finance",
        color: "#64748b",
        categories: &[
            ("Bank Fees", true),
            ("Interest & Fines", false),
            ("Loans", true),
            ("Taxes", true),
        ],
    },
    SeedGroup {
        name: "Other",
        color: "#94a3b8",
        categories: &[
            ("Pets", false),
            ("Donations", false),
            ("Subscriptions", false),
            ("Other", false),
        ],
    },
];

const INCOME_GROUPS: &[SeedGroup] = &[
    SeedGroup {
        name: "Work",
        color: "#22c55e",
        categories: &[
            ("Salary", true),
            ("Gig Fees", true),
            ("Private Lessons", true),
            ("Freelance", true),
            ("Bonuses", false),
        ],
    },
    SeedGroup {
        name: "Investments",
        color: "#10b981",
        categories: &[
            ("Dividends", false),
            ("Interest Received", false),
            ("Rent Received", false),
        ],
    },
    SeedGroup {
        name: "Other",
        color: "#34d399",
        categories: &[
            ("Sales", false),
            ("Refunds", false),
            ("Gifts Received", false),
            ("Other", false),
        ],
    },
];

fn seed(user_id: UserId, category_type: CategoryType, groups: &[SeedGroup]) -> Vec<Category> {
    groups
        .iter()
        .flat_map(|group| {
            group.categories.iter().map(move |&(name, is_essential)| Category {
                id: CategoryId::new(),
                user_id,
                name: name.to_string(),
                category_type,
                color: group.color.to_string(),
                group: group.name.to_string(),
                is_essential,
            })
        })
        .collect()
}

/// Fresh default expense and income categories for `user_id`.
#[must_use]
pub fn default_categories(user_id: UserId) -> Vec<Category> {
    let mut categories = seed(user_id, TransactionType::Expense, EXPENSE_GROUPS);
    categories.extend(seed(user_id, TransactionType::Income, INCOME_GROUPS));
    categories
}
