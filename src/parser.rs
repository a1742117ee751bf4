use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::category::{Category, categorize};
use crate::classifier::is_candidate_line;
use crate::confidence::calculate_confidence;
use crate::config::ParserConfig;
use crate::name::{extract_item_name, title_case};
use crate::price::extract_price;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,
    pub price: f64,
    /// Always empty here; descriptions are filled in by whoever edits the menu.
    pub description: String,
    pub category: Category,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParseOutcome {
    pub items: Vec<MenuItem>,
    pub confidence: f64,
}

/// Turns OCR text into menu items. Holds no per-request state, so one
/// instance can serve any number of concurrent callers.
#[derive(Debug, Clone, Default)]
pub struct MenuParser {
    config: ParserConfig,
}

impl MenuParser {
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    pub fn is_candidate_line(&self, line: &str) -> bool {
        is_candidate_line(line, &self.config.noise_words)
    }

    pub fn extract_price(&self, line: &str) -> Option<f64> {
        extract_price(line, &self.config.price_patterns)
    }

    pub fn extract_item_name(&self, line: &str) -> Option<String> {
        extract_item_name(line, &self.config.price_patterns)
    }

    pub fn categorize(&self, name: &str) -> Category {
        categorize(name, &self.config.categories)
    }

    pub fn confidence(&self, items: &[MenuItem]) -> f64 {
        calculate_confidence(items, &self.config.thresholds)
    }

    /// Runs a single line through classify, price, name and category.
    /// Any stage that comes up empty drops the line.
    pub fn parse_line(&self, line: &str) -> Option<MenuItem> {
        let line = line.trim();
        if !self.is_candidate_line(line) {
            debug!(line, "skipping non-item line");
            return None;
        }

        let Some(price) = self.extract_price(line) else {
            debug!(line, "no price found");
            return None;
        };

        let Some(name) = self.extract_item_name(line) else {
            debug!(line, price, "price found but no usable name");
            return None;
        };

        Some(MenuItem {
            category: self.categorize(&name),
            name: title_case(&name),
            price,
            description: String::new(),
        })
    }

    /// Items in the order their lines appear in `text`.
    pub fn parse_menu_items(&self, text: &str) -> Vec<MenuItem> {
        text.lines().filter_map(|line| self.parse_line(line)).collect()
    }

    pub fn parse(&self, text: &str) -> ParseOutcome {
        let items = self.parse_menu_items(text);
        let confidence = self.confidence(&items);
        ParseOutcome { items, confidence }
    }
}
