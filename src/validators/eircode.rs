use std::path::Path;

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::ReferenceDataError;
use crate::reference_data::{ReferenceCategory, ReferenceSet};
use crate::validators::Validator;

/// An eircode: a three character routing key from the published list,
/// followed by a four character unique identifier.
pub struct Eircode;

impl Validator for Eircode {
    fn is_valid(&self, input: &str) -> bool {
        is_valid(input, None).unwrap_or(false)
    }
}

lazy_static! {
    // The unique identifier alphabet excludes the visually ambiguous
    // letters B, G, I, J, L, M, O, Q, S, U and Z.
    static ref UNIQUE_IDENTIFIER: Regex = Regex::new(r"^[AC-FHKNPRTV-Y0-9]{4}$").unwrap();
}

/// Validate an eircode, reading the routing key list from `dir` when one
/// is given. Formatting characters are ignored: `A65 F4E2` and `a65f4e2`
/// are the same code.
pub fn is_valid(eircode: &str, dir: Option<&Path>) -> Result<bool, ReferenceDataError> {
    let code: String = eircode
        .to_uppercase()
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .collect();
    if code.len() != 7 {
        return Ok(false);
    }
    let (routing, identifier) = code.split_at(3);
    let routing_keys = ReferenceSet::load(ReferenceCategory::EircodeRoutingKeys, dir)?;
    if !routing_keys.contains(routing) {
        return Ok(false);
    }
    Ok(UNIQUE_IDENTIFIER.is_match(identifier))
}
