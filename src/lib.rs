// This blocks accidental use of `println`. If one is actually needed, you can
// override with `#[allow(clippy::print_stdout)]`.
#![deny(clippy::print_stdout)]

mod error;
mod reference_data;
pub mod validators;

// This is the public API of the library
pub use error::ReferenceDataError;
pub use reference_data::{ReferenceCategory, ReferenceSet};
pub use validators::{validate, IrishIdentifier, ValidationOptions, Validator};
pub use validators::{
    bank_account::BankAccount, driving_licence::DrivingLicence, eircode::Eircode, iban::Iban,
    license_plate::LicensePlate, mod23_checksum::check_mod23, passport_number::PassportNumber,
    phone_number::PhoneNumber, postal_code::PostalCode, pps_number::PpsNumber,
    sort_code::SortCode, swift_code::SwiftCode, vat_number::VatNumber,
};
