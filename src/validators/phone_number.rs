use std::collections::HashMap;

use lazy_static::lazy_static;
use regex::Regex;

use crate::validators::Validator;

/// An Irish phone number in any of the usual written forms: international
/// (`+353` or `00353`), national with the trunk zero, or a bare local
/// number when the caller does not require an area code.
pub struct PhoneNumber;

impl Validator for PhoneNumber {
    fn is_valid(&self, input: &str) -> bool {
        is_valid(input, true)
    }
}

lazy_static! {
    /// Non geographic special rate prefixes, each taking exactly six
    /// subscriber digits.
    static ref SPECIAL_RATE_PATTERNS: HashMap<&'static str, Regex> = HashMap::from([
        ("1800", Regex::new(r"^1800[0-9]{6}$").unwrap()),
        ("1850", Regex::new(r"^1850[0-9]{6}$").unwrap()),
        ("1890", Regex::new(r"^1890[0-9]{6}$").unwrap()),
    ]);
    /// Mobile prefixes with seven subscriber digits.
    static ref MOBILE_PATTERNS: HashMap<&'static str, Regex> = HashMap::from([
        ("83", Regex::new(r"^083[0-9]{7}$").unwrap()),
        ("85", Regex::new(r"^085[0-9]{7}$").unwrap()),
        ("86", Regex::new(r"^086[0-9]{7}$").unwrap()),
        ("87", Regex::new(r"^087[0-9]{7}$").unwrap()),
        ("88", Regex::new(r"^088[0-9]{7}$").unwrap()),
        ("89", Regex::new(r"^089[0-9]{7}$").unwrap()),
    ]);
    /// Dialling a 5 between the mobile prefix and the subscriber digits
    /// goes straight to voicemail.
    static ref MOBILE_VOICEMAIL_PATTERNS: HashMap<&'static str, Regex> = HashMap::from([
        ("83", Regex::new(r"^0835[0-9]{7}$").unwrap()),
        ("85", Regex::new(r"^0855[0-9]{7}$").unwrap()),
        ("86", Regex::new(r"^0865[0-9]{7}$").unwrap()),
        ("87", Regex::new(r"^0875[0-9]{7}$").unwrap()),
        ("88", Regex::new(r"^0885[0-9]{7}$").unwrap()),
        ("89", Regex::new(r"^0895[0-9]{7}$").unwrap()),
    ]);
    /// Landline area codes. `None` means the default length rule applies;
    /// a few codes carry their own pattern.
    static ref LANDLINE_PATTERNS: HashMap<&'static str, Option<Regex>> = {
        let mut table: HashMap<&'static str, Option<Regex>> = HashMap::new();
        for prefix in [
            "21", "22", "23", "24", "25", "242", "225", "26", "27", "28", "29", "402", "404",
            "405", "41", "42", "43", "44", "45", "46", "47", "49", "51", "52", "53", "54", "55",
            "56", "57", "502", "504", "506", "509", "61", "62", "63", "64", "65", "66", "67",
            "68", "69", "71", "74", "90", "91", "92", "93", "94", "95", "96", "97", "98", "99",
        ] {
            table.insert(prefix, None);
        }
        table.insert("1", Some(Regex::new(r"^01\d{7}$").unwrap()));
        // direct dial to Northern Ireland
        table.insert("48", Some(Regex::new(r"^048[0-9]{8}$").unwrap()));
        table.insert("58", Some(Regex::new(r"^058[0-9]{5}$").unwrap()));
        table.insert("59", Some(Regex::new(r"^059[0-9]{7}$").unwrap()));
        table.insert("505", Some(Regex::new(r"^0505[0-9]{5}$").unwrap()));
        table.insert("818", Some(Regex::new(r"^0818[0-9]{6}$").unwrap()));
        table
    };
    /// Landlines run 7 to 10 digits including the trunk zero, depending on
    /// the area code length.
    static ref LANDLINE_DEFAULT_PATTERN: Regex = Regex::new(r"^\d{7,10}$").unwrap();
    static ref TRUNK_OR_SPECIAL_RATE: Regex = Regex::new(r"^[01][0-9]*$").unwrap();
    /// Local numbers without an area code do not start with a zero and run
    /// 5 to 8 digits depending on how long the area code would have been.
    static ref LOCAL_NUMBER_PATTERN: Regex = Regex::new(r"^[1-9]\d{4,7}$").unwrap();
}

/// Canonicalize a raw phone number into digit-only national form.
///
/// The international `00` escape becomes `+`, grouping characters are
/// stripped, and a leading `353` country code collapses back to the trunk
/// zero, since a country code implies the area code is present. No
/// validation happens here; stray characters survive and are rejected by
/// the classifier.
pub fn normalize(raw: &str) -> String {
    let number = match raw.strip_prefix("00") {
        Some(rest) => format!("+{}", rest),
        None => raw.to_string(),
    };
    let number: String = number
        .chars()
        .filter(|c| !matches!(c, '(' | ')' | '-' | '+' | '.' | ' '))
        .collect();
    match number.strip_prefix("353") {
        Some(rest) => format!("0{}", rest),
        None => number,
    }
}

/// Validate a phone number, normalizing it first.
///
/// With `require_area_code` the number must start with the trunk zero or a
/// special rate `1`; without it, a bare local number is accepted instead.
pub fn is_valid(raw: &str, require_area_code: bool) -> bool {
    let number = normalize(raw);

    if number.is_empty() || !number.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }
    if require_area_code && !TRUNK_OR_SPECIAL_RATE.is_match(&number) {
        return false;
    }
    // A special rate verdict is final, there is no fallthrough to the
    // geographic rules.
    if require_area_code && number.starts_with('1') {
        return is_special_rate(&number);
    }

    let len = number.len();
    // Ten digits with a mobile prefix is a mobile phone.
    if require_area_code && len == 10 && is_mobile(&number) {
        return true;
    }
    // Eleven digits leaves room for a direct-to-voicemail prefix.
    if require_area_code && len == 11 && is_mobile_voicemail(&number) {
        return true;
    }

    if !require_area_code {
        return LOCAL_NUMBER_PATTERN.is_match(&number);
    }
    is_landline(&number)
}

/// A non geographic special rate line: 1800, 1850 or 1890 plus six digits.
/// Expects a normalized number.
pub fn is_special_rate(number: &str) -> bool {
    match SPECIAL_RATE_PATTERNS.get(clamped_slice(number, 0, 4)) {
        Some(pattern) => pattern.is_match(number),
        None => false,
    }
}

/// A mobile number: 08x prefix and seven subscriber digits. Expects a
/// normalized number.
pub fn is_mobile(number: &str) -> bool {
    match MOBILE_PATTERNS.get(clamped_slice(number, 1, 2)) {
        Some(pattern) => pattern.is_match(number),
        None => false,
    }
}

/// A mobile number with the voicemail 5 dialled after the prefix. Expects a
/// normalized number.
pub fn is_mobile_voicemail(number: &str) -> bool {
    match MOBILE_VOICEMAIL_PATTERNS.get(clamped_slice(number, 1, 2)) {
        Some(pattern) => pattern.is_match(number),
        None => false,
    }
}

/// A geographic landline number. Area codes are matched longest first: the
/// first prefix length (3, then 2, then 1 digits after the trunk zero) with
/// a table entry decides the verdict, and a failed pattern at that length
/// does not fall back to a shorter prefix.
pub fn is_landline(number: &str) -> bool {
    for prefix_len in (1..=3).rev() {
        let prefix = clamped_slice(number, 1, prefix_len);
        if let Some(entry) = LANDLINE_PATTERNS.get(prefix) {
            return match entry {
                Some(pattern) => pattern.is_match(number),
                None => LANDLINE_DEFAULT_PATTERN.is_match(number),
            };
        }
    }
    false
}

/// Take up to `len` characters starting at `start`, tolerating short input
/// and never panicking on a char boundary.
fn clamped_slice(number: &str, start: usize, len: usize) -> &str {
    let end = number.len().min(start.saturating_add(len));
    number.get(start..end).unwrap_or("")
}
