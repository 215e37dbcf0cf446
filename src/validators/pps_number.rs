use lazy_static::lazy_static;
use regex::Regex;

use crate::validators::mod23_checksum::check_mod23;
use crate::validators::Validator;

/// Personal Public Service Number: seven digits and one or two check
/// characters. Ireland has no separate social security number; the PPSN
/// fills that role as well as identifying taxpayers.
pub struct PpsNumber;

impl Validator for PpsNumber {
    fn is_valid(&self, input: &str) -> bool {
        is_valid(input)
    }
}

lazy_static! {
    static ref PPS_LAYOUT: Regex = Regex::new(r"^[0-9]{7}[A-Z]{1,2}$").unwrap();
    // Older numbers carried a trailing space, W, T or X after the check
    // letter.
    static ref PPS_LAYOUT_SUFFIXED: Regex = Regex::new(r"^[0-9]{7}[A-Z][ WTX]?$").unwrap();
}

pub fn is_valid(pps: &str) -> bool {
    if PPS_LAYOUT.is_match(pps) {
        return check_mod23(pps);
    }
    if PPS_LAYOUT_SUFFIXED.is_match(pps) {
        return check_mod23(pps);
    }
    false
}
