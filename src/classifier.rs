/// Whole-line texts that show up on printed menus but never name a dish.
pub const DEFAULT_NOISE_WORDS: &[&str] = &[
    "menu",
    "price",
    "rate",
    "list",
    "today",
    "special",
    "offer",
    "thank you",
    "welcome",
    "address",
    "phone",
    "contact",
];

const MIN_LINE_CHARS: usize = 3;

/// Returns true when a raw OCR line is worth running through price and name extraction.
///
/// Noise words are compared against the whole trimmed, lower-cased line, so
/// "Today's Special Thali 90/-" is still a candidate.
pub fn is_candidate_line<S: AsRef<str>>(line: &str, noise_words: &[S]) -> bool {
    let trimmed = line.trim();
    if trimmed.chars().count() < MIN_LINE_CHARS {
        return false;
    }

    let lower = trimmed.to_lowercase();
    if noise_words.iter().any(|word| word.as_ref() == lower) {
        return false;
    }

    // Table numbers, page numbers and the like.
    if trimmed.chars().all(|c| c.is_numeric() || c.is_whitespace()) {
        return false;
    }

    // Needs at least one word character (`\w`) to be anything but decoration.
    trimmed.chars().any(|c| c.is_alphanumeric() || c == '_')
}
