//! Small helpers shared by the normalizer, the join layer and the linkers

/// Numeric value of a collector number, built from its ASCII digits
///
/// `"★12"` → 12, `"15a"` → 15, `"S"` → `None`.
pub fn numeric_number(number: &str) -> Option<u64> {
    let mut digits = number.chars().filter(char::is_ascii_digit).peekable();
    digits.peek()?;
    digits.try_fold(0u64, |acc, c| {
        acc.checked_mul(10)?
            .checked_add(u64::from(c.to_digit(10)?))
    })
}

/// Sort key ordering collector numbers numerically, then by raw string
pub fn number_sort_key(number: &str) -> (u64, &str) {
    (numeric_number(number).unwrap_or(u64::MAX), number)
}

/// Name form used for marketplace matching
///
/// Only the first face of a `" // "` name counts; punctuation is dropped,
/// case folded and whitespace collapsed.
pub fn normalize_name(name: &str) -> String {
    let first = name.split(" // ").next().unwrap_or(name);
    let cleaned: String = first
        .chars()
        .filter(|c| !c.is_ascii_punctuation())
        .flat_map(char::to_lowercase)
        .collect();
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Collector number with non-alphanumerics and leading zeros removed
pub fn strip_number(number: &str) -> String {
    let alnum: String = number.chars().filter(|c| c.is_alphanumeric()).collect();
    let trimmed = alnum.trim_start_matches('0');
    if trimmed.is_empty() && !alnum.is_empty() {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Map a Scryfall language code to its published language name
pub fn language_name(code: &str) -> String {
    let name = match code.to_lowercase().as_str() {
        "en" => "English",
        "es" => "Spanish",
        "fr" => "French",
        "de" => "German",
        "it" => "Italian",
        "pt" => "Portuguese (Brazil)",
        "ja" => "Japanese",
        "ko" => "Korean",
        "ru" => "Russian",
        "zhs" => "Chinese Simplified",
        "zht" => "Chinese Traditional",
        "he" => "Hebrew",
        "la" => "Latin",
        "grc" => "Ancient Greek",
        "ar" => "Arabic",
        "sa" => "Sanskrit",
        "ph" => "Phyrexian",
        "qya" => "Quenya",
        _ => return code.to_string(),
    };
    name.to_string()
}
