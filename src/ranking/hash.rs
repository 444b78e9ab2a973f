/// 32-bit running hash (`h * 31 + c`, wrapping) over UTF-16 code units,
/// returned as its absolute value. `i32::MIN` maps to `2^31`.
pub fn string_hash(value: &str) -> u32 {
    let mut hash: i32 = 0;
    for unit in value.encode_utf16() {
        hash = hash.wrapping_mul(31).wrapping_add(i32::from(unit));
    }
    hash.unsigned_abs()
}

/// Sum of the leading UTF-16 code unit of every character in the handle.
pub fn handle_seed(handle: &str) -> u64 {
    handle
        .chars()
        .map(|ch| {
            let mut buf = [0u16; 2];
            u64::from(ch.encode_utf16(&mut buf)[0])
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_matches_known_values() {
        assert_eq!(string_hash(""), 0);
        assert_eq!(string_hash("a"), 97);
        assert_eq!(string_hash("abc"), 96_354);
        assert_eq!(string_hash("Day in the Life"), 181_462_174);
    }

    #[test]
    fn hash_wraps_and_takes_absolute_value() {
        assert_eq!(string_hash("Day in the Life2940"), 1_202_073_957);
        assert_eq!(string_hash("Tutorial2940"), 772_224_897);
    }

    #[test]
    fn seed_sums_character_codes() {
        assert_eq!(handle_seed(""), 0);
        assert_eq!(handle_seed("abc"), 294);
        assert_eq!(handle_seed("cba"), handle_seed("abc"));
    }

    #[test]
    fn seed_uses_high_surrogate_for_astral_characters() {
        assert_eq!(handle_seed("😀"), 0xD83D);
        assert_eq!(handle_seed("héllo😀"), 56_021);
    }
}
