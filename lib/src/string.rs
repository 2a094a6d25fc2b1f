//! Byte-level text helpers with C library semantics.

pub fn isspace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r' | b'\x0c' | b'\x0b')
}

pub fn isdigit(byte: u8) -> bool {
    byte.is_ascii_digit()
}

/// `atoi` without the undefined behaviour.
///
/// Skips leading whitespace, accepts one optional sign, then consumes decimal
/// digits up to the first non-digit; anything after that is ignored. Returns
/// `None` when no digit was seen or the value does not fit an `i32`.
pub fn atoi(text: &[u8]) -> Option<i32> {
    let mut cursor = 0usize;
    while cursor < text.len() && isspace(text[cursor]) {
        cursor += 1;
    }

    let mut negative = false;
    if let Some(&sign @ (b'+' | b'-')) = text.get(cursor) {
        negative = sign == b'-';
        cursor += 1;
    }

    let mut value: i64 = 0;
    let mut seen_digit = false;
    while cursor < text.len() && isdigit(text[cursor]) {
        seen_digit = true;
        value = value
            .saturating_mul(10)
            .saturating_add((text[cursor] - b'0') as i64);
        cursor += 1;
    }

    if !seen_digit {
        return None;
    }
    if negative {
        value = -value;
    }
    i32::try_from(value).ok()
}

/// Number of `u16` units before the first NUL, or the slice length if none.
pub fn wide_len(text: &[u16]) -> usize {
    text.iter().position(|&unit| unit == 0).unwrap_or(text.len())
}
