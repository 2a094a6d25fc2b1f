//! UTF-8 host code page.
//!
//! Malformed input is replaced rather than rejected: invalid UTF-8 widens to
//! U+FFFD and unpaired surrogates narrow to `?`.

use paltest_abi::CodePage;

pub const DEFAULT_CHAR: char = '?';

#[derive(Clone, Copy, Debug, Default)]
pub struct Utf8CodePage;

fn until_nul<T: Copy + Default + PartialEq>(src: &[T]) -> &[T] {
    let nul = T::default();
    match src.iter().position(|&unit| unit == nul) {
        Some(end) => &src[..end],
        None => src,
    }
}

impl CodePage for Utf8CodePage {
    fn multi_byte_to_wide(&self, src: &[u8], dst: Option<&mut [u16]>) -> Option<usize> {
        let text = String::from_utf8_lossy(until_nul(src));
        let units = text.encode_utf16().count() + 1;
        let Some(dst) = dst else {
            return Some(units);
        };
        if dst.len() < units {
            return None;
        }
        for (out, unit) in dst.iter_mut().zip(text.encode_utf16()) {
            *out = unit;
        }
        dst[units - 1] = 0;
        Some(units)
    }

    fn wide_to_multi_byte(&self, src: &[u16], dst: Option<&mut [u8]>) -> Option<usize> {
        let chars = || {
            char::decode_utf16(until_nul(src).iter().copied())
                .map(|decoded| decoded.unwrap_or(DEFAULT_CHAR))
        };
        let bytes = chars().map(char::len_utf8).sum::<usize>() + 1;
        let Some(dst) = dst else {
            return Some(bytes);
        };
        if dst.len() < bytes {
            return None;
        }
        let mut pos = 0;
        for ch in chars() {
            pos += ch.encode_utf8(&mut dst[pos..]).len();
        }
        dst[pos] = 0;
        Some(bytes)
    }
}
