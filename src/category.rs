use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Beverages,
    Breakfast,
    Lunch,
    Snacks,
    Desserts,
    SouthIndian,
    NorthIndian,
    Chinese,
    FastFood,
    Miscellaneous,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Beverages => "beverages",
            Category::Breakfast => "breakfast",
            Category::Lunch => "lunch",
            Category::Snacks => "snacks",
            Category::Desserts => "desserts",
            Category::SouthIndian => "south_indian",
            Category::NorthIndian => "north_indian",
            Category::Chinese => "chinese",
            Category::FastFood => "fast_food",
            Category::Miscellaneous => "miscellaneous",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered keyword sets. Keyword sets overlap ("dosa" is both breakfast and
/// south_indian); the earlier entry wins.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTable {
    entries: Vec<(Category, Vec<String>)>,
}

impl CategoryTable {
    pub fn new(entries: Vec<(Category, Vec<String>)>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[(Category, Vec<String>)] {
        &self.entries
    }
}

impl Default for CategoryTable {
    fn default() -> Self {
        let table: [(Category, &[&str]); 9] = [
            (
                Category::Beverages,
                &["coffee", "tea", "juice", "drink", "shake", "lassi", "soda"],
            ),
            (
                Category::Breakfast,
                &["dosa", "idli", "upma", "poha", "paratha", "bread"],
            ),
            (
                Category::Lunch,
                &["rice", "dal", "curry", "sabzi", "thali", "meal"],
            ),
            (
                Category::Snacks,
                &["samosa", "pakoda", "bhel", "chaat", "sandwich", "burger"],
            ),
            (
                Category::Desserts,
                &["ice cream", "kulfi", "sweet", "halwa", "kheer"],
            ),
            (
                Category::SouthIndian,
                &["dosa", "idli", "vada", "uttapam", "sambhar"],
            ),
            (
                Category::NorthIndian,
                &["roti", "naan", "curry", "paneer", "dal"],
            ),
            (
                Category::Chinese,
                &["noodles", "fried rice", "manchurian", "chowmein"],
            ),
            (
                Category::FastFood,
                &["burger", "pizza", "sandwich", "wrap", "fries"],
            ),
        ];

        Self::new(
            table
                .iter()
                .map(|(category, keywords)| {
                    (*category, keywords.iter().map(|k| k.to_string()).collect())
                })
                .collect(),
        )
    }
}

/// First category with a keyword contained in the lower-cased name, else miscellaneous.
pub fn categorize(name: &str, table: &CategoryTable) -> Category {
    let lower = name.to_lowercase();
    for (category, keywords) in table.entries() {
        if keywords.iter().any(|keyword| lower.contains(keyword.as_str())) {
            return *category;
        }
    }
    Category::Miscellaneous
}
