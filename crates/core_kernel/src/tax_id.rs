//! Tax identifier format checks
//!
//! VAT numbers are accepted on shape alone: an optional `IT` country prefix,
//! then exactly 11 decimal digits. This deliberately does NOT run the
//! check-digit algorithm of a real partita IVA; the check rejects obviously
//! malformed input and nothing more. Callers that need checksum validation
//! must layer it on top rather than change this function.
//!
//! The 16-character personal fiscal code check is an opt-in extra; no
//! default validation path uses it.

/// Canonical form used by both checks and by uniqueness comparisons:
/// whitespace removed, uppercased, leading `IT` stripped.
pub fn normalize_tax_id(raw: &str) -> String {
    let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    let upper = compact.to_uppercase();
    upper
        .strip_prefix("IT")
        .map(str::to_string)
        .unwrap_or(upper)
}

/// Shape check for an 11-digit VAT number, with or without the `IT` prefix.
pub fn is_valid_vat_number(raw: &str) -> bool {
    let normalized = normalize_tax_id(raw);
    normalized.len() == 11 && normalized.chars().all(|c| c.is_ascii_digit())
}

/// Shape check for a 16-character personal fiscal code
/// (6 letters, 2 digits, 1 letter, 2 digits, 1 letter, 3 alphanumerics,
/// 1 letter). Shape only, no checksum.
pub fn is_valid_fiscal_code(raw: &str) -> bool {
    let compact: String = raw
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_uppercase();
    if compact.len() != 16 {
        return false;
    }
    let b = compact.as_bytes();
    let letter = |i: usize| b[i].is_ascii_uppercase();
    let digit = |i: usize| b[i].is_ascii_digit();
    let alnum = |i: usize| b[i].is_ascii_uppercase() || b[i].is_ascii_digit();

    (0..6).all(letter)
        && digit(6)
        && digit(7)
        && letter(8)
        && digit(9)
        && digit(10)
        && letter(11)
        && (12..15).all(alnum)
        && letter(15)
}
