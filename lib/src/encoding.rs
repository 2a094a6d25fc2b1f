//! Narrow <-> wide string conversion through the runtime's code page.
//!
//! Both directions ask the facility for the converted size first, allocate
//! exactly that much, then convert into the buffer. A buffer is only handed
//! back when both calls succeeded and agree on the length.

use std::ffi::CStr;

use paltest_abi::CodePage;

use crate::error::{Direction, HarnessError, HarnessResult};

/// Convert a narrow string to a NUL-terminated wide buffer.
pub fn to_wide(facility: &dyn CodePage, narrow: &CStr) -> HarnessResult<Vec<u16>> {
    let src = narrow.to_bytes_with_nul();
    let direction = Direction::NarrowToWide;

    let size = match facility.multi_byte_to_wide(src, None) {
        Some(size) if size > 0 => size,
        _ => return Err(HarnessError::ConversionSizeQuery { direction }),
    };

    let mut buffer = alloc_zeroed::<u16>(size)?;
    let written = facility
        .multi_byte_to_wide(src, Some(&mut buffer))
        .unwrap_or(0);
    check_fill(direction, size, written)?;
    Ok(buffer)
}

/// Convert a wide string (read up to its first NUL) to a NUL-terminated
/// narrow buffer.
pub fn to_narrow(facility: &dyn CodePage, wide: &[u16]) -> HarnessResult<Vec<u8>> {
    let direction = Direction::WideToNarrow;

    let size = match facility.wide_to_multi_byte(wide, None) {
        Some(size) if size > 0 => size,
        _ => return Err(HarnessError::ConversionSizeQuery { direction }),
    };

    let mut buffer = alloc_zeroed::<u8>(size)?;
    let written = facility
        .wide_to_multi_byte(wide, Some(&mut buffer))
        .unwrap_or(0);
    check_fill(direction, size, written)?;
    Ok(buffer)
}

fn alloc_zeroed<T: Copy + Default>(len: usize) -> HarnessResult<Vec<T>> {
    let mut buffer = Vec::new();
    buffer.try_reserve_exact(len)?;
    buffer.resize(len, T::default());
    Ok(buffer)
}

fn check_fill(direction: Direction, expected: usize, written: usize) -> HarnessResult<()> {
    if written == expected {
        Ok(())
    } else {
        Err(HarnessError::ConversionFill {
            direction,
            expected,
            written,
        })
    }
}
