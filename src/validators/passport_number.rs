use lazy_static::lazy_static;
use regex::Regex;

use crate::validators::Validator;

/// An Irish passport number: two letters followed by seven digits.
pub struct PassportNumber;

impl Validator for PassportNumber {
    fn is_valid(&self, input: &str) -> bool {
        is_valid(input)
    }
}

lazy_static! {
    static ref PASSPORT_LAYOUT: Regex = Regex::new(r"^[a-z]{2}[0-9]{7}$").unwrap();
}

pub fn is_valid(passport: &str) -> bool {
    PASSPORT_LAYOUT.is_match(&passport.to_lowercase())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_valid_passport_numbers() {
        let valid = vec!["PD1234567", "pd1234567", "Xn0000001"];
        for passport in valid {
            assert!(is_valid(passport), "{}", passport);
        }
    }

    #[test]
    fn test_invalid_passport_numbers() {
        let invalid = vec!["P1234567", "PDX123456", "PD123456", "PD12345678", "1234567PD", ""];
        for passport in invalid {
            assert!(!is_valid(passport), "{}", passport);
        }
    }
}
