use lazy_static::lazy_static;
use regex::Regex;

use crate::validators::Validator;

/// An Irish bank sort code: six digits starting with a 9, written without
/// dashes or whitespace.
pub struct SortCode;

impl Validator for SortCode {
    fn is_valid(&self, input: &str) -> bool {
        is_valid(input)
    }
}

lazy_static! {
    static ref SORT_CODE_LAYOUT: Regex = Regex::new(r"^9[0-9]{5}$").unwrap();
}

pub fn is_valid(sort_code: &str) -> bool {
    SORT_CODE_LAYOUT.is_match(sort_code)
}
