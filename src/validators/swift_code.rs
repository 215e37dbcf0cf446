use lazy_static::lazy_static;
use regex::Regex;

use crate::validators::Validator;

/// An Irish SWIFT/BIC code: four characters of bank code, the `IE` country
/// code, and a two character location code.
pub struct SwiftCode;

impl Validator for SwiftCode {
    fn is_valid(&self, input: &str) -> bool {
        is_valid(input)
    }
}

lazy_static! {
    static ref SWIFT_LAYOUT: Regex = Regex::new(r"(?i)^[a-z0-9]{4}IE[a-z0-9]{2}$").unwrap();
}

pub fn is_valid(code: &str) -> bool {
    SWIFT_LAYOUT.is_match(code)
}
