/// Verify the modulus 23 check letter shared by PPS and VAT numbers.
///
/// The first seven characters are digits weighted 8 down to 2. A ninth
/// character, when present, contributes its alphabet position times 9
/// (`W` is 23, so a `W` suffix never shifts the result). The sum modulo 23
/// picks the check letter, `A` = 1 through `W` = 23 with a remainder of
/// zero mapping to `W`, and the letter is compared case insensitively
/// against the eighth character.
///
/// Callers are expected to have applied a structural pattern first: a non
/// digit among the first seven characters simply counts as zero, and a
/// space in the ninth position drives the sum negative so that no letter
/// can match.
pub fn check_mod23(value: &str) -> bool {
    let bytes = value.as_bytes();
    if bytes.len() < 8 {
        return false;
    }

    let mut total: i32 = 0;
    for (i, b) in bytes.iter().take(7).enumerate() {
        total += (*b as char).to_digit(10).unwrap_or(0) as i32 * (8 - i as i32);
    }
    if bytes.len() == 9 {
        total += (bytes[8] as i32 - 64) * 9;
    }

    let mut rem = total % 23;
    if rem == 0 {
        rem = 23;
    }
    (64 + rem) as u8 as char == (bytes[7] as char).to_ascii_uppercase()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_valid_check_letters() {
        let valid = vec![
            "1234567T",
            "1234567t",
            "6433435F",
            "8765432S",
            "0000000W",
            // the ninth character contributes alphabet-position * 9
            "1234567FA",
            "1084633RB",
            // W in ninth position is 23 * 9, a multiple of 23
            "1234567TW",
            "3141592SW",
        ];
        for value in valid {
            assert!(check_mod23(value), "{}", value);
        }
    }

    #[test]
    fn test_invalid_check_letters() {
        let invalid = vec![
            // wrong letter
            "6335315A",
            "1234567A",
            "1084633WW",
            // too short for a check letter
            "1234567",
            "",
        ];
        for value in invalid {
            assert!(!check_mod23(value), "{}", value);
        }
    }

    #[test]
    fn space_in_ninth_position_scores_negative() {
        // ord(' ') - 64 is -32, so the weighted sum usually falls below zero
        // and no letter can match.
        assert!(!check_mod23("1234567T "));
        // Large digit sums can climb back into letter range: 9999999 weighs
        // 315, minus 288 leaves 27, and 27 mod 23 picks the letter D.
        assert!(check_mod23("9999999D "));
    }
}
