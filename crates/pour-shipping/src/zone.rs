//! # Zone Normalization
//!
//! The provider's `zone` field expects a canonical South African province
//! name (e.g. `Gauteng`, `Western Cape`). The storefront's address form
//! offers labels like `"Gauteng (GP)"`, and some callers send the bare short
//! code. This module reconciles all of those through one fixed table.

/// The 9 South African provinces and their short codes.
const PROVINCES: &[(&str, &str)] = &[
    ("Gauteng", "GP"),
    ("Western Cape", "WC"),
    ("KwaZulu-Natal", "KZN"),
    ("Eastern Cape", "EC"),
    ("Free State", "FS"),
    ("Limpopo", "LP"),
    ("Mpumalanga", "MP"),
    ("North West", "NW"),
    ("Northern Cape", "NC"),
];

/// Canonical province name for a short code, if the code is known.
pub fn province_for_code(code: &str) -> Option<&'static str> {
    PROVINCES
        .iter()
        .find(|(_, c)| c.eq_ignore_ascii_case(code))
        .map(|(name, _)| *name)
}

/// Short code for a canonical province name, if the name is known.
///
/// The quote path only needs the name direction; this one exists for
/// callers rendering the address form's `"Name (CODE)"` labels from the
/// same table.
pub fn code_for_province(name: &str) -> Option<&'static str> {
    PROVINCES
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name))
        .map(|(_, code)| *code)
}

/// Normalizes a free-text province label to the provider's zone name.
///
/// - `"Gauteng (GP)"` → `"Gauteng"` (parenthesized code suffix stripped)
/// - `"GP"` → `"Gauteng"` (bare short code mapped)
/// - `""` → `"Gauteng"` (storefront default origin province)
/// - anything else passes through trimmed — providers tolerate free-text
///   zone names, so unrecognized input is not rejected
pub fn normalize_zone(province: &str) -> String {
    let trimmed = province.trim();
    if trimmed.is_empty() {
        return "Gauteng".to_string();
    }

    let base = match trimmed.split_once(" (") {
        Some((prefix, _)) => prefix.trim(),
        None => trimmed,
    };

    match province_for_code(base) {
        Some(name) => name.to_string(),
        None => base.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_parenthesized_code() {
        assert_eq!(normalize_zone("Gauteng (GP)"), "Gauteng");
        assert_eq!(normalize_zone("KwaZulu-Natal (KZN)"), "KwaZulu-Natal");
    }

    #[test]
    fn test_maps_bare_short_code() {
        assert_eq!(normalize_zone("GP"), "Gauteng");
        assert_eq!(normalize_zone("wc"), "Western Cape");
        assert_eq!(normalize_zone("KZN"), "KwaZulu-Natal");
    }

    #[test]
    fn test_empty_defaults_to_gauteng() {
        assert_eq!(normalize_zone(""), "Gauteng");
        assert_eq!(normalize_zone("   "), "Gauteng");
    }

    #[test]
    fn test_unrecognized_passes_through() {
        assert_eq!(normalize_zone("Atlantis"), "Atlantis");
        assert_eq!(normalize_zone("  Western Cape  "), "Western Cape");
    }

    #[test]
    fn test_table_is_bidirectional() {
        for (name, code) in [("Gauteng", "GP"), ("Northern Cape", "NC")] {
            assert_eq!(province_for_code(code), Some(name));
            assert_eq!(code_for_province(name), Some(code));
        }
    }
}
