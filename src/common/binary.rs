use crate::error;
use crate::error::Result as Result;

/// Nibble value of a single hex digit, case-insensitive.
pub fn hex_nibble(c: char) -> Option<u8> {
    match c {
        '0'..='9' => Some(c as u8 - b'0'),
        'a'..='f' => Some(c as u8 - b'a' + 10),
        'A'..='F' => Some(c as u8 - b'A' + 10),
        _ => None,
    }
}

/// Decodes exactly `N * 2` hex digits into `N` bytes, high nibble first.
///
/// Characters for which `skip` returns true are dropped before counting, so digit
/// positions reported in errors are relative to the filtered sequence.
pub(crate) fn decode_hex_digits<const N: usize>(s: &str, skip: impl Fn(char) -> bool) -> Result<[u8; N]> {
    let digits = || s.chars().filter(|c| !skip(*c));

    let len = digits().count();
    if len != N * 2 {
        return Err(error::malformed_length(len,
                                           Some(format!("expected {} hex digits", N * 2))));
    }

    let mut out = [0u8; N];
    for (pos, c) in digits().enumerate() {
        let nibble = hex_nibble(c)
            .ok_or_else(|| error::invalid_digit(c, pos))?;

        out[pos >> 1] |= if pos & 1 == 0 { nibble << 4 } else { nibble };
    }

    Ok(out)
}

pub fn fmt_bin_vec_to_hex(vec: &[u8]) -> String {
    hex::encode(vec)
}

#[cfg(test)]
mod tests {
    use crate::common::binary::{decode_hex_digits, fmt_bin_vec_to_hex, hex_nibble};
    use crate::error::Kind;

    #[test]
    fn hex_nibble_test() {
        let digits = "0123456789abcdef";
        for (i, c) in digits.chars().enumerate() {
            assert_eq!(hex_nibble(c), Some(i as u8));
            assert_eq!(hex_nibble(c.to_ascii_uppercase()), Some(i as u8));
        }

        assert_eq!(hex_nibble('g'), None);
        assert_eq!(hex_nibble('G'), None);
        assert_eq!(hex_nibble('-'), None);
        assert_eq!(hex_nibble(' '), None);
        assert_eq!(hex_nibble('é'), None);
    }

    #[test]
    fn decode_hex_digits_test() {
        let bytes: [u8; 4] = decode_hex_digits("de:AD:be:EF", |c| c == ':')
            .expect("failed to decode");
        assert_eq!(bytes, [0xde, 0xad, 0xbe, 0xef]);
    }

    #[test]
    fn decode_hex_digits_errors_test() {
        let err = decode_hex_digits::<2>("abc", |_| false).unwrap_err();
        assert_eq!(*err.kind(), Kind::MalformedLength { len: 3 });

        // Multi-byte characters count once.
        let err = decode_hex_digits::<2>("ab€", |_| false).unwrap_err();
        assert_eq!(*err.kind(), Kind::MalformedLength { len: 3 });

        let err = decode_hex_digits::<2>("a-b-x-d", |c| c == '-').unwrap_err();
        assert_eq!(*err.kind(), Kind::InvalidDigit { digit: 'x', position: 2 });
    }

    #[test]
    fn fmt_bin_vec_to_hex_test() {
        assert_eq!(fmt_bin_vec_to_hex(&[0x00, 0x0f, 0xa0, 0xff]), "000fa0ff");
        assert_eq!(fmt_bin_vec_to_hex(&[]), "");
    }
}
