//! Byte-order helpers.
//!
//! The host byte order is resolved once, at build time, into
//! [`BIG_ENDIAN_TARGET`]; the conditional helpers branch on that constant only.

/// `true` when compiled for a big-endian target.
pub const BIG_ENDIAN_TARGET: bool = cfg!(target_endian = "big");

/// Byte-reverse a 32-bit value on big-endian targets, identity elsewhere.
#[inline(always)]
pub const fn swap_if_big_endian_32(value: u32) -> u32 {
    if BIG_ENDIAN_TARGET {
        ((value & 0xFF00_0000) >> 24)
            | ((value & 0x00FF_0000) >> 8)
            | ((value & 0x0000_FF00) << 8)
            | ((value & 0x0000_00FF) << 24)
    } else {
        value
    }
}

/// Swap the two bytes of a 16-bit value, whatever the host order.
#[inline(always)]
pub const fn swap16_for_wire(value: u16) -> u16 {
    value.rotate_left(8)
}

/// Host-order 16-bit value to network order (`htons`).
///
/// Unlike [`swap16_for_wire`] this is a no-op on big-endian hosts.
#[inline(always)]
pub const fn host_to_wire16(value: u16) -> u16 {
    if BIG_ENDIAN_TARGET {
        value
    } else {
        swap16_for_wire(value)
    }
}
