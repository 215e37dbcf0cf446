pub mod bank_account;
pub mod driving_licence;
pub mod eircode;
pub mod iban;
pub mod license_plate;
pub mod mod23_checksum;
pub mod passport_number;
pub mod phone_number;
pub mod postal_code;
pub mod pps_number;
pub mod sort_code;
pub mod swift_code;
pub mod vat_number;

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::error::ReferenceDataError;

/// A validator decides whether an input string is a well formed instance of
/// one identifier class. Validators hold no state and never panic on
/// malformed input.
pub trait Validator: Send + Sync {
    fn is_valid(&self, input: &str) -> bool;
}

/// The identifier classes this crate knows how to validate.
#[derive(
    Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Display, EnumString, EnumIter,
)]
pub enum IrishIdentifier {
    SwiftCode,
    Iban,
    PhoneNumber,
    PostalCode,
    Eircode,
    PassportNumber,
    DrivingLicence,
    LicensePlate,
    SortCode,
    BankAccount,
    PpsNumber,
    VatNumber,
}

/// Per call options for [`validate`]. The defaults match the common case:
/// phone numbers carry an area code, account numbers include the sort code,
/// and reference lists come from the packaged copies.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ValidationOptions {
    /// Phone numbers must carry an area code (or a special rate prefix).
    #[serde(default = "default_require_area_code")]
    pub require_area_code: bool,
    /// Cross check the IBAN against this bank identifier code.
    #[serde(default)]
    pub bic: Option<String>,
    /// Directory holding override reference lists for the postal district
    /// and eircode routing key lookups.
    #[serde(default)]
    pub reference_data_dir: Option<PathBuf>,
    /// The account number is written without its sort code.
    #[serde(default)]
    pub no_sort_code: bool,
}

fn default_require_area_code() -> bool {
    true
}

impl Default for ValidationOptions {
    fn default() -> Self {
        ValidationOptions {
            require_area_code: true,
            bic: None,
            reference_data_dir: None,
            no_sort_code: false,
        }
    }
}

/// Validate `input` as an instance of `kind`.
///
/// Verdicts are plain booleans and malformed input is never an error. The
/// only error case is reference data that cannot be loaded, which can occur
/// for the postal code and eircode kinds when an override directory is set.
pub fn validate(
    kind: IrishIdentifier,
    input: &str,
    options: &ValidationOptions,
) -> Result<bool, ReferenceDataError> {
    let dir = options.reference_data_dir.as_deref();
    let verdict = match kind {
        IrishIdentifier::SwiftCode => swift_code::is_valid(input),
        IrishIdentifier::Iban => iban::is_valid(input, options.bic.as_deref()),
        IrishIdentifier::PhoneNumber => phone_number::is_valid(input, options.require_area_code),
        IrishIdentifier::PostalCode => postal_code::is_valid(input, dir)?,
        IrishIdentifier::Eircode => eircode::is_valid(input, dir)?,
        IrishIdentifier::PassportNumber => passport_number::is_valid(input),
        IrishIdentifier::DrivingLicence => driving_licence::is_valid(input),
        IrishIdentifier::LicensePlate => license_plate::is_valid(input),
        IrishIdentifier::SortCode => sort_code::is_valid(input),
        IrishIdentifier::BankAccount => bank_account::is_valid(input, options.no_sort_code),
        IrishIdentifier::PpsNumber => pps_number::is_valid(input),
        IrishIdentifier::VatNumber => vat_number::is_valid(input),
    };
    Ok(verdict)
}

impl Validator for IrishIdentifier {
    fn is_valid(&self, input: &str) -> bool {
        match self {
            IrishIdentifier::SwiftCode => swift_code::SwiftCode.is_valid(input),
            IrishIdentifier::Iban => iban::Iban.is_valid(input),
            IrishIdentifier::PhoneNumber => phone_number::PhoneNumber.is_valid(input),
            IrishIdentifier::PostalCode => postal_code::PostalCode.is_valid(input),
            IrishIdentifier::Eircode => eircode::Eircode.is_valid(input),
            IrishIdentifier::PassportNumber => passport_number::PassportNumber.is_valid(input),
            IrishIdentifier::DrivingLicence => driving_licence::DrivingLicence.is_valid(input),
            IrishIdentifier::LicensePlate => license_plate::LicensePlate.is_valid(input),
            IrishIdentifier::SortCode => sort_code::SortCode.is_valid(input),
            IrishIdentifier::BankAccount => bank_account::BankAccount.is_valid(input),
            IrishIdentifier::PpsNumber => pps_number::PpsNumber.is_valid(input),
            IrishIdentifier::VatNumber => vat_number::VatNumber.is_valid(input),
        }
    }
}

#[cfg(test)]
mod test {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn default_options_match_the_common_case() {
        let options = ValidationOptions::default();
        assert!(options.require_area_code);
        assert!(options.bic.is_none());
        assert!(options.reference_data_dir.is_none());
        assert!(!options.no_sort_code);
    }

    #[test]
    fn options_deserialize_with_defaults() {
        let options: ValidationOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, ValidationOptions::default());

        let options: ValidationOptions =
            serde_json::from_str(r#"{"require_area_code": false, "no_sort_code": true}"#).unwrap();
        assert!(!options.require_area_code);
        assert!(options.no_sort_code);
    }

    #[test]
    fn every_kind_dispatches() {
        // Nonsense input must come back as a clean `false` verdict for every
        // kind, through both entry points.
        let options = ValidationOptions::default();
        for kind in IrishIdentifier::iter() {
            assert_eq!(validate(kind, "!!not-an-identifier!!", &options).unwrap(), false);
            assert!(!kind.is_valid("!!not-an-identifier!!"));
        }
    }

    #[test]
    fn kind_names_round_trip() {
        use std::str::FromStr;

        for kind in IrishIdentifier::iter() {
            assert_eq!(IrishIdentifier::from_str(&kind.to_string()).unwrap(), kind);
        }
    }
}
