use lazy_static::lazy_static;
use regex::Regex;

use crate::validators::mod23_checksum::check_mod23;
use crate::validators::Validator;

/// Irish VAT registration number: `IE` plus seven digits and a check
/// letter, or the older style with a letter in the second position.
pub struct VatNumber;

impl Validator for VatNumber {
    fn is_valid(&self, input: &str) -> bool {
        is_valid(input)
    }
}

lazy_static! {
    static ref VAT_LAYOUT: Regex = Regex::new(r"(?i)^IE\d{7}[a-z]$").unwrap();
    static ref VAT_LAYOUT_OLD: Regex = Regex::new(r"(?i)^IE\d[a-z]\d{5}[a-z]$").unwrap();
}

pub fn is_valid(vat: &str) -> bool {
    if VAT_LAYOUT.is_match(vat) {
        return check_mod23(&vat[2..]);
    }
    // The older style puts a letter in the second position. Its digits are
    // reordered into the modern layout before the checksum runs.
    if VAT_LAYOUT_OLD.is_match(vat) {
        let tail = &vat[2..];
        let reordered = format!("0{}{}{}", &tail[2..7], &tail[0..1], &tail[7..8]);
        return check_mod23(&reordered);
    }
    false
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_valid_vat_numbers() {
        let valid = vec![
            "IE6433435F",
            "IE1234567T",
            "ie6433435f",
            // old style: digits reorder to 0335418, check letter G
            "IE8W33541G",
        ];
        for vat in valid {
            assert!(is_valid(vat), "{}", vat);
        }
    }

    #[test]
    fn test_invalid_vat_numbers() {
        let invalid = vec![
            // wrong check letter
            "IE6433435E",
            "IE8W33541W",
            // missing or wrong country prefix
            "6433435F",
            "GB6433435F",
            // structurally wrong
            "IE64334350",
            "IE643343F",
            "IE64334355F",
            "",
        ];
        for vat in invalid {
            assert!(!is_valid(vat), "{}", vat);
        }
    }
}
