use lazy_static::lazy_static;
use regex::Regex;

use crate::validators::Validator;

/// An Irish driving licence number: nine digits, usually printed in groups
/// of three.
pub struct DrivingLicence;

impl Validator for DrivingLicence {
    fn is_valid(&self, input: &str) -> bool {
        is_valid(input)
    }
}

lazy_static! {
    static ref LICENCE_LAYOUT: Regex = Regex::new(r"^[0-9]{3}[0-9]{3}[0-9]{3}$").unwrap();
}

pub fn is_valid(licence: &str) -> bool {
    let digits: String = licence
        .chars()
        .filter(|c| !matches!(c, ' ' | '-'))
        .collect();
    LICENCE_LAYOUT.is_match(&digits)
}
