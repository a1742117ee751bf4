use regex::Regex;
use std::sync::LazyLock;

use crate::price::{PricePattern, strip_prices};

// Leader characters used to line prices up in a column: "Idli ........ 30/-"
static LEADER_DOTS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\.{3,}").unwrap());
static LEADER_DASHES_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-{2,}").unwrap());
static LEADER_UNDERSCORES_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"_{2,}").unwrap());
static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

const MIN_NAME_CHARS: usize = 3;

/// Pulls the item name out of a line that is known to carry a price.
///
/// Returns `None` when what is left after removing prices and leaders is two
/// characters or fewer.
pub fn extract_item_name(line: &str, patterns: &[PricePattern]) -> Option<String> {
    let cleaned = strip_prices(line, patterns);
    let cleaned = LEADER_DOTS_RE.replace_all(&cleaned, "");
    let cleaned = LEADER_DASHES_RE.replace_all(&cleaned, "");
    let cleaned = LEADER_UNDERSCORES_RE.replace_all(&cleaned, "");

    let name = WHITESPACE_RE.replace_all(cleaned.trim(), " ").into_owned();
    if name.chars().count() < MIN_NAME_CHARS {
        return None;
    }
    Some(name)
}

/// Upper-cases the first letter of every run of letters and lower-cases the rest.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_is_letter = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if prev_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(c);
            prev_is_letter = false;
        }
    }
    out
}
