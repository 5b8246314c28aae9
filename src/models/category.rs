//! Category catalogue
//!
//! Categories are plain names. The catalogue lists the names offered to the
//! user, in display order, with the colour each one is charted in. Nothing
//! rejects a name outside the catalogue.

/// Name of the category used for income
pub const INCOME_CATEGORY: &str = "Income";

/// Fallback category
pub const OTHER_CATEGORY: &str = "Other";

/// A known category and its chart colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryInfo {
    pub name: &'static str,
    pub color: &'static str,
}

/// The known categories in display order
pub const CATEGORIES: [CategoryInfo; 10] = [
    CategoryInfo {
        name: "Food & Dining",
        color: "#EF4444",
    },
    CategoryInfo {
        name: "Shopping",
        color: "#F97316",
    },
    CategoryInfo {
        name: "Transportation",
        color: "#EAB308",
    },
    CategoryInfo {
        name: "Entertainment",
        color: "#22C55E",
    },
    CategoryInfo {
        name: "Bills & Utilities",
        color: "#3B82F6",
    },
    CategoryInfo {
        name: "Healthcare",
        color: "#8B5CF6",
    },
    CategoryInfo {
        name: "Education",
        color: "#EC4899",
    },
    CategoryInfo {
        name: "Travel",
        color: "#06B6D4",
    },
    CategoryInfo {
        name: INCOME_CATEGORY,
        color: "#10B981",
    },
    CategoryInfo {
        name: OTHER_CATEGORY,
        color: "#6B7280",
    },
];

/// Names of all known categories
pub fn category_names() -> impl Iterator<Item = &'static str> {
    CATEGORIES.iter().map(|c| c.name)
}

/// Categories a budget can be declared for (everything except income)
pub fn budget_categories() -> impl Iterator<Item = &'static str> {
    category_names().filter(|name| *name != INCOME_CATEGORY)
}

/// Check if a name is in the catalogue (exact match)
pub fn is_known_category(name: &str) -> bool {
    category_names().any(|known| known == name)
}

/// Look up the chart colour for a category
pub fn category_color(name: &str) -> Option<&'static str> {
    CATEGORIES.iter().find(|c| c.name == name).map(|c| c.color)
}

/// Resolve user input to a catalogue name, ignoring case
///
/// Unknown names are returned unchanged.
pub fn normalize_category(input: &str) -> String {
    let trimmed = input.trim();
    category_names()
        .find(|known| known.eq_ignore_ascii_case(trimmed))
        .unwrap_or(trimmed)
        .to_string()
}
