use crate::validators::Validator;

/// An Irish IBAN. Structural and checksum validation is delegated to the
/// `iban` crate; only the country gate and the optional cross check against
/// a bank identifier code live here.
pub struct Iban;

impl Validator for Iban {
    fn is_valid(&self, input: &str) -> bool {
        is_valid(input, None)
    }
}

/// Validate an IBAN, optionally cross checking the bank code.
///
/// When `bic` is given, its first four characters must equal characters
/// 4 to 8 of the IBAN (the bank code of an Irish IBAN). Only `IE` prefixed
/// IBANs are accepted.
pub fn is_valid(value: &str, bic: Option<&str>) -> bool {
    if let Some(bic) = bic {
        let bank_code = bic.get(..4.min(bic.len())).unwrap_or("");
        let iban_bank_code = value.get(4..8.min(value.len())).unwrap_or("");
        if iban_bank_code != bank_code {
            return false;
        }
    }
    if !value.starts_with("IE") {
        return false;
    }
    value.parse::<iban::Iban>().is_ok()
}
