//! Price detection for OCR'd menu lines.
//!
//! Prices are located with a short, ordered list of notations. The order is a
//! strict priority: the first notation that matches anywhere in the line wins,
//! regardless of where in the line a later notation would have matched.

use regex::Regex;
use std::sync::LazyLock;

/// Price writing conventions found on menus, listed in lookup priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceNotation {
    /// `₹ 60`, `₹60.50`
    SymbolPrefix,
    /// `Rs 60`, `DosaRs.60`, `rs.60`, `RS. 60.00`
    ///
    /// `Rs` is accepted anywhere; other casings only at the start of a word,
    /// so "Burgers 50/-" keeps its name.
    RupeePrefix,
    /// `60₹`, `60.50 ₹`
    SymbolSuffix,
    /// `60/-`
    SlashDash,
}

impl PriceNotation {
    pub const PRIORITY: [PriceNotation; 4] = [
        PriceNotation::SymbolPrefix,
        PriceNotation::RupeePrefix,
        PriceNotation::SymbolSuffix,
        PriceNotation::SlashDash,
    ];

    pub fn pattern(self) -> &'static str {
        match self {
            PriceNotation::SymbolPrefix => r"₹\s*(\d+(?:\.\d{2})?)",
            PriceNotation::RupeePrefix => r"(?:Rs|\b(?i:rs))\.?\s*(\d+(?:\.\d{2})?)",
            PriceNotation::SymbolSuffix => r"(\d+(?:\.\d{2})?)\s*₹",
            PriceNotation::SlashDash => r"(\d+(?:\.\d{2})?)\s*/-",
        }
    }
}

#[derive(Debug, Clone)]
pub struct PricePattern {
    pub notation: PriceNotation,
    regex: Regex,
}

impl PricePattern {
    /// Parses the amount from the leftmost match of this pattern, if any.
    pub fn find(&self, line: &str) -> Option<f64> {
        let caps = self.regex.captures(line)?;
        parse_amount(caps.get(1)?.as_str())
    }
}

static DECIMAL_DIGIT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\A\d\z").unwrap());

fn is_decimal_digit(c: char) -> bool {
    let mut buf = [0u8; 4];
    DECIMAL_DIGIT_RE.is_match(c.encode_utf8(&mut buf))
}

/// Value of any Unicode decimal digit (`٥` -> 5, `४` -> 4).
///
/// Decimal digits are encoded as contiguous runs of 0..=9, so the value is the
/// distance back to the start of the run, modulo ten.
fn decimal_value(c: char) -> Option<u32> {
    if let Some(d) = c.to_digit(10) {
        return Some(d);
    }
    if !is_decimal_digit(c) {
        return None;
    }
    let mut steps = 0;
    let mut code = c as u32;
    while let Some(prev) = code.checked_sub(1).and_then(char::from_u32) {
        if !is_decimal_digit(prev) {
            break;
        }
        steps += 1;
        code -= 1;
    }
    Some(steps % 10)
}

/// Parses a captured amount, folding non-ASCII digits to ASCII first.
/// Amounts too large to be finite are not prices.
fn parse_amount(raw: &str) -> Option<f64> {
    let ascii: String = raw
        .chars()
        .map(|c| match c {
            '.' => Some('.'),
            _ => decimal_value(c).and_then(|d| char::from_digit(d, 10)),
        })
        .collect::<Option<_>>()?;
    ascii.parse::<f64>().ok().filter(|price| price.is_finite())
}

static DEFAULT_PATTERNS: LazyLock<Vec<PricePattern>> = LazyLock::new(|| {
    PriceNotation::PRIORITY
        .iter()
        .map(|&notation| PricePattern {
            notation,
            regex: Regex::new(notation.pattern()).unwrap(),
        })
        .collect()
});

/// The built-in patterns, in priority order.
pub fn default_price_patterns() -> Vec<PricePattern> {
    DEFAULT_PATTERNS.clone()
}

/// Returns the price from the highest priority pattern that matches and parses.
///
/// A structural match whose amount does not parse to a finite number does not
/// end the search; the next pattern is tried.
pub fn extract_price(line: &str, patterns: &[PricePattern]) -> Option<f64> {
    for pattern in patterns {
        if let Some(price) = pattern.find(line) {
            return Some(price);
        }
    }
    None
}

/// Removes every price-looking substring, applying the patterns in order.
pub fn strip_prices(line: &str, patterns: &[PricePattern]) -> String {
    patterns.iter().fold(line.to_string(), |acc, pattern| {
        pattern.regex.replace_all(&acc, "").into_owned()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn price(line: &str) -> Option<f64> {
        extract_price(line, &default_price_patterns())
    }

    #[test]
    fn patterns_are_in_priority_order() {
        let notations: Vec<_> = default_price_patterns()
            .iter()
            .map(|p| p.notation)
            .collect();
        assert_eq!(notations, PriceNotation::PRIORITY.to_vec());
    }

    #[test]
    fn reads_each_notation() {
        assert_eq!(price("Filter Coffee ₹ 30"), Some(30.0));
        assert_eq!(price("Masala Dosa Rs.60"), Some(60.0));
        assert_eq!(price("Masala Dosa rs 60.50"), Some(60.5));
        assert_eq!(price("Masala Dosa RS. 75"), Some(75.0));
        assert_eq!(price("Lassi 40 ₹"), Some(40.0));
        assert_eq!(price("Veg Thali 120/-"), Some(120.0));
        assert_eq!(price("Veg Thali 120 /-"), Some(120.0));
    }

    #[test]
    fn no_price_without_notation() {
        assert_eq!(price("Paneer Butter Masala 180"), None);
        assert_eq!(price("Chef's choice"), None);
    }

    #[test]
    fn single_decimal_is_not_part_of_the_amount() {
        // Only two-digit fractions are captured.
        assert_eq!(price("Tea ₹12.5"), Some(12.0));
    }

    #[test]
    fn priority_beats_position() {
        // Rs prefix outranks the /- suffix even though /- comes first in the line.
        assert_eq!(price("Veg Thali 120/- Rs. 80"), Some(80.0));
        // Symbol prefix outranks Rs.
        assert_eq!(price("Rs 20 Masala Chai ₹15"), Some(15.0));
        // Rs outranks the symbol suffix.
        assert_eq!(price("Lime Soda 25 ₹ Rs 30"), Some(30.0));
    }

    #[test]
    fn word_ending_in_rs_is_not_a_rupee_prefix() {
        assert_eq!(price("Burgers 50/-"), Some(50.0));
        let stripped = strip_prices("Burgers 50/-", &default_price_patterns());
        assert_eq!(stripped.trim(), "Burgers");
    }

    #[test]
    fn glued_rs_prefix_is_read() {
        assert_eq!(price("Masala DosaRs.60"), Some(60.0));
        assert_eq!(price("Upma____Rs 35"), Some(35.0));
        assert_eq!(price("Chai(Rs.10)"), Some(10.0));
        // Lower-case glued forms still need a word boundary.
        assert_eq!(price("Burgers 50/-"), Some(50.0));
    }

    #[test]
    fn non_ascii_digits_are_read() {
        assert_eq!(price("Masala Chai ₹٥٠"), Some(50.0));
        assert_eq!(price("Masala Chai ₹٥٠ 20/-"), Some(50.0));
        assert_eq!(price("Samosa Rs ४५"), Some(45.0));
        assert_eq!(price("Lassi ₹١٢.٥٠"), Some(12.5));
    }

    #[test]
    fn overflowing_amount_falls_through_to_next_pattern() {
        let huge = "9".repeat(400);
        assert_eq!(price(&format!("Tea ₹{huge} 20/-")), Some(20.0));
        assert_eq!(price(&format!("Tea ₹{huge}")), None);
    }

    #[test]
    fn strips_all_occurrences() {
        let stripped = strip_prices(
            "Tea ₹10 / Coffee ₹20 Rs 5 7/-",
            &default_price_patterns(),
        );
        let words: Vec<_> = stripped.split_whitespace().collect();
        assert_eq!(words, ["Tea", "/", "Coffee"]);
    }
}
