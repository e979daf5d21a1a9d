// src/varbit.rs

//! Fixed-width integers wider (or narrower) than any native register.

use smallvec::SmallVec;
use std::fmt;

/// A fixed-width arbitrary-precision integer.
///
/// Stored as little-endian two's complement, `ceil(bits / 8)` bytes long
/// (one zero byte for width 0).
/// Bits above `bit_width` in the last byte are kept sign-extended.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VarBit {
    bits: u32,
    bytes: SmallVec<[u8; 16]>,
}

impl VarBit {
    fn byte_len(bits: u32) -> usize {
        bits.div_ceil(8).max(1) as usize
    }

    /// Sign-extend `value` to `bits` bits.
    pub fn from_i64(bits: u32, value: i64) -> Self {
        let len = Self::byte_len(bits);
        let fill = if value < 0 { 0xff } else { 0x00 };
        let mut bytes: SmallVec<[u8; 16]> = SmallVec::from_elem(fill, len);
        for (dst, src) in bytes.iter_mut().zip(value.to_le_bytes()) {
            *dst = src;
        }
        let mut v = Self { bits, bytes };
        v.normalize();
        v
    }

    /// Build from little-endian bytes. Missing high bytes are zero; extra
    /// bytes beyond the width are dropped.
    pub fn from_le_bytes(bits: u32, le: &[u8]) -> Self {
        let len = Self::byte_len(bits);
        let mut bytes: SmallVec<[u8; 16]> = SmallVec::from_elem(0, len);
        for (dst, src) in bytes.iter_mut().zip(le) {
            *dst = *src;
        }
        let mut v = Self { bits, bytes };
        v.normalize();
        v
    }

    // Sign-extend the unused top bits of the last byte. A zero-width value
    // holds no bits, so its single storage byte is cleared.
    fn normalize(&mut self) {
        if self.bits == 0 {
            self.bytes.fill(0);
            return;
        }
        let used = self.bits % 8;
        if used == 0 {
            return;
        }
        if let Some(last) = self.bytes.last_mut() {
            let sign = (*last >> (used - 1)) & 1;
            let mask = 0xffu8 << used;
            if sign == 1 {
                *last |= mask;
            } else {
                *last &= !mask;
            }
        }
    }

    pub fn bit_width(&self) -> u32 {
        self.bits
    }

    pub fn as_le_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn is_negative(&self) -> bool {
        self.bytes.last().is_some_and(|b| b & 0x80 != 0)
    }

    /// The low 64 bits, sign-extended when the value is narrower.
    pub fn to_i64_truncated(&self) -> i64 {
        let fill = if self.is_negative() { 0xff } else { 0x00 };
        let mut buf = [fill; 8];
        for (dst, src) in buf.iter_mut().zip(self.bytes.iter()) {
            *dst = *src;
        }
        i64::from_le_bytes(buf)
    }
}

impl fmt::Display for VarBit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "i{} 0x", self.bits)?;
        for byte in self.bytes.iter().rev() {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}
