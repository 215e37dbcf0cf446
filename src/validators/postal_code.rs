use std::path::Path;

use crate::error::ReferenceDataError;
use crate::reference_data::{ReferenceCategory, ReferenceSet};
use crate::validators::Validator;

/// A Dublin postal district code, validated against the published district
/// list. Districts predate eircodes and remain in everyday use for
/// addressing within the city.
pub struct PostalCode;

impl Validator for PostalCode {
    fn is_valid(&self, input: &str) -> bool {
        // The packaged list is compiled in, so the default lookup cannot
        // fail to load.
        is_valid(input, None).unwrap_or(false)
    }
}

/// Validate a postal district code, reading the district list from `dir`
/// when one is given.
///
/// Input is canonicalized before the lookup: upper cased, spaces removed,
/// and the written-out `DUBLIN` collapsed to `D`, so that `Dublin 6W` and
/// `D6W` are the same district.
pub fn is_valid(code: &str, dir: Option<&Path>) -> Result<bool, ReferenceDataError> {
    let code = code
        .trim()
        .to_uppercase()
        .replace(' ', "")
        .replace("DUBLIN", "D");
    let districts = ReferenceSet::load(ReferenceCategory::PostalDistricts, dir)?;
    Ok(districts.contains(&code))
}
