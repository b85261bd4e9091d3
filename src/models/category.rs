//! Expense categories
//!
//! Categories are a fixed lookup table; expenses reference them by id.

use std::fmt;

/// A spending category from the fixed lookup table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    /// Stable identifier stored on expenses
    pub id: &'static str,

    /// Display name
    pub name: &'static str,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// All categories an expense may be filed under, in display order
pub const CATEGORIES: &[Category] = &[
    Category { id: "savings", name: "Savings" },
    Category { id: "food", name: "Food" },
    Category { id: "home", name: "Home" },
    Category { id: "misc", name: "Miscellaneous" },
    Category { id: "leisure", name: "Leisure" },
    Category { id: "health", name: "Health" },
    Category { id: "subscriptions", name: "Subscriptions" },
];

/// Look up a category by id (case-insensitive)
pub fn find_category(id: &str) -> Option<&'static Category> {
    let id = id.trim();
    CATEGORIES.iter().find(|c| c.id.eq_ignore_ascii_case(id))
}

/// Display name for a category id, falling back to the raw id
pub fn category_name(id: &str) -> &str {
    find_category(id).map(|c| c.name).unwrap_or(id)
}
