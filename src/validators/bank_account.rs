use lazy_static::lazy_static;
use regex::Regex;

use crate::validators::Validator;

/// An Irish bank account number: eight digits, or fourteen when the sort
/// code is written as part of the number.
pub struct BankAccount;

impl Validator for BankAccount {
    fn is_valid(&self, input: &str) -> bool {
        is_valid(input, false)
    }
}

lazy_static! {
    static ref WITH_SORT_CODE: Regex = Regex::new(r"^\d{14}$").unwrap();
    static ref WITHOUT_SORT_CODE: Regex = Regex::new(r"^\d{8}$").unwrap();
}

pub fn is_valid(account: &str, no_sort_code: bool) -> bool {
    let digits: String = account
        .chars()
        .filter(|c| !matches!(c, '-' | ' '))
        .collect();
    if no_sort_code {
        WITHOUT_SORT_CODE.is_match(&digits)
    } else {
        WITH_SORT_CODE.is_match(&digits)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_with_sort_code() {
        let valid = vec!["93115212345678", "931152-12345678", "93 11 52 12345678"];
        for account in valid {
            assert!(is_valid(account, false), "{}", account);
        }
        let invalid = vec!["12345678", "9311521234567", "931152123456789", ""];
        for account in invalid {
            assert!(!is_valid(account, false), "{}", account);
        }
    }

    #[test]
    fn test_without_sort_code() {
        let valid = vec!["12345678", "1234-5678", "1234 5678"];
        for account in valid {
            assert!(is_valid(account, true), "{}", account);
        }
        let invalid = vec!["1234567", "123456789", "93115212345678", "1234567a", ""];
        for account in invalid {
            assert!(!is_valid(account, true), "{}", account);
        }
    }
}
