//! Shared aliases and label helpers for monetary records.

/// Monetary amount expressed in the smallest currency denomination (cents, kobo).
pub type MinorUnits = i64;

/// Normalizes a free-form label for enum matching: lowercase, separators dropped.
pub fn normalize_label(label: &str) -> String {
    label
        .trim()
        .chars()
        .filter(|ch| !matches!(ch, '_' | '-' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::normalize_label;

    #[test]
    fn normalize_label_drops_separators_and_case() {
        assert_eq!(normalize_label(" Credit_Note "), "creditnote");
        assert_eq!(normalize_label("credit-note"), "creditnote");
        assert_eq!(normalize_label("PAID"), "paid");
    }
}
