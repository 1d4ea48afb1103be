//! Helper module with the code units accepted by the decoder.
//!
//! The decoder reads UTF-8 one code unit at a time. Usually those units are
//! raw bytes. But when a host's strings store each byte of an encoding as a
//! separate scalar value or 16-bit unit, the same algorithm applies as long as
//! every unit carries a byte value. [`CodeUnit`] abstracts over the difference.

/// A code unit that may hold one byte of a UTF-8 encoding.
pub trait CodeUnit: Copy {
    /// Get the byte value of this unit.
    ///
    /// This method returns `None` if the unit's value exceeds `0xFF`. Such a
    /// unit is never part of a valid encoding.
    fn byte(self) -> Option<u8>;

    /// Determine whether this unit may start an encoding.
    ///
    /// Units without byte value are treated as starts, since they are never
    /// continuation bytes.
    #[inline]
    fn is_start(self) -> bool {
        self.byte().map_or(true, crate::rune_start)
    }
}

impl CodeUnit for u8 {
    #[inline]
    fn byte(self) -> Option<u8> {
        Some(self)
    }
}

impl CodeUnit for u16 {
    #[inline]
    fn byte(self) -> Option<u8> {
        u8::try_from(self).ok()
    }
}

impl CodeUnit for char {
    #[inline]
    fn byte(self) -> Option<u8> {
        u8::try_from(self).ok()
    }
}
