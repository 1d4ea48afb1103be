//! Helper module with the lead byte classification and accept range tables.
//!
//! UTF-8 does not constrain continuation bytes uniformly. While the third and
//! fourth byte of an encoding may take on any value in `0x80..=0xBF`, the
//! second byte's legal range depends on the lead byte. Narrower ranges exclude
//! overlong three- and four-byte forms, the surrogates, and code points beyond
//! [`MAX_RUNE`](crate::MAX_RUNE). Per [RFC 3629](https://tools.ietf.org/html/rfc3629):
//!
//! ```text
//! UTF8-1      = %x00-7F
//! UTF8-2      = %xC2-DF UTF8-tail
//! UTF8-3      = %xE0 %xA0-BF UTF8-tail / %xE1-EC 2( UTF8-tail ) /
//!               %xED %x80-9F UTF8-tail / %xEE-EF 2( UTF8-tail )
//! UTF8-4      = %xF0 %x90-BF 2( UTF8-tail ) / %xF1-F3 3( UTF8-tail ) /
//!               %xF4 %x80-8F 2( UTF8-tail )
//! ```
//!
//! This module captures that grammar in two tables. [`classify`] maps each of
//! the 256 possible first bytes to a [`Class`], which names the encoding's
//! length and the [`Accept`] class for the second byte. [`Accept::range`] then
//! produces the corresponding [`AcceptRange`].
//!
//! # Example
//!
//! ```
//! # use prettyrune::table::{classify, Accept, Class};
//! assert_eq!(classify(b'a'), Class::Ascii);
//! assert_eq!(classify(0xc0), Class::Invalid);
//! assert_eq!(classify(0xed), Class::Lead { size: 3, accept: Accept::BelowSurrogates });
//!
//! let range = Accept::BelowSurrogates.range();
//! assert!(range.contains(0x9f));
//! assert!(!range.contains(0xa0));
//! ```

/// An inclusive range of legal values for a continuation byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AcceptRange {
    /// The lowest legal value.
    pub lo: u8,
    /// The highest legal value.
    pub hi: u8,
}

impl AcceptRange {
    /// The generic range for continuation bytes.
    pub const TAIL: AcceptRange = AcceptRange { lo: 0x80, hi: 0xbf };

    /// Determine whether the byte falls into this range.
    #[inline]
    pub const fn contains(&self, byte: u8) -> bool {
        self.lo <= byte && byte <= self.hi
    }
}

/// The class of legal values for the second byte of an encoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Accept {
    /// Any continuation byte, i.e., `0x80..=0xBF`.
    Tail = 0,
    /// `0xA0..=0xBF` after `0xE0`, which excludes overlong three-byte forms.
    AboveOverlong3 = 1,
    /// `0x80..=0x9F` after `0xED`, which excludes the surrogates.
    BelowSurrogates = 2,
    /// `0x90..=0xBF` after `0xF0`, which excludes overlong four-byte forms.
    AboveOverlong4 = 3,
    /// `0x80..=0x8F` after `0xF4`, which excludes code points beyond
    /// `0x10FFFF`.
    BelowMaxRune = 4,
}

impl Accept {
    /// Get the accept range for this class.
    #[inline]
    pub const fn range(self) -> AcceptRange {
        ACCEPT_RANGES[self as usize]
    }
}

const ACCEPT_RANGES: [AcceptRange; 5] = [
    AcceptRange::TAIL,
    AcceptRange { lo: 0xa0, hi: 0xbf },
    AcceptRange { lo: 0x80, hi: 0x9f },
    AcceptRange { lo: 0x90, hi: 0xbf },
    AcceptRange { lo: 0x80, hi: 0x8f },
];

/// The classification of a first byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Class {
    /// An ASCII character, which encodes itself.
    Ascii,
    /// A byte that never starts a valid encoding, i.e., a continuation byte,
    /// `0xC0`, `0xC1`, or `0xF5..=0xFF`.
    Invalid,
    /// The lead byte of a multi-byte encoding with `size` bytes in total.
    Lead { size: u8, accept: Accept },
}

impl Class {
    /// Get the number of bytes covered by this class.
    ///
    /// ASCII characters and invalid bytes both span a single byte, the latter
    /// because decoding resolves them to a one-byte error.
    #[inline]
    pub const fn size(self) -> usize {
        match self {
            Self::Ascii | Self::Invalid => 1,
            Self::Lead { size, .. } => size as usize,
        }
    }
}

/// Get the mask for the payload bits of a lead byte of an encoding with
/// `size` bytes.
#[inline]
pub(crate) const fn lead_mask(size: u8) -> u8 {
    match size {
        2 => 0x1f,
        3 => 0x0f,
        _ => 0x07,
    }
}

const fn lead(size: u8, accept: Accept) -> Class {
    Class::Lead { size, accept }
}

const fn derive(byte: u8) -> Class {
    use self::Accept::*;

    match byte {
        0x00..=0x7f => Class::Ascii,
        0x80..=0xc1 => Class::Invalid,
        0xc2..=0xdf => lead(2, Tail),
        0xe0 => lead(3, AboveOverlong3),
        0xe1..=0xec | 0xee..=0xef => lead(3, Tail),
        0xed => lead(3, BelowSurrogates),
        0xf0 => lead(4, AboveOverlong4),
        0xf1..=0xf3 => lead(4, Tail),
        0xf4 => lead(4, BelowMaxRune),
        0xf5..=0xff => Class::Invalid,
    }
}

static CLASSES: [Class; 256] = {
    let mut table = [Class::Invalid; 256];
    let mut index = 0;
    while index < table.len() {
        table[index] = derive(index as u8);
        index += 1;
    }
    table
};

/// Classify the first byte of an encoding.
#[inline]
pub fn classify(byte: u8) -> Class {
    CLASSES[byte as usize]
}

// ================================================================================================

#[cfg(test)]
mod test {
    use super::{classify, lead_mask, Accept, AcceptRange, Class};
    use core::mem::size_of;

    #[test]
    fn test_size() {
        assert_eq!(size_of::<Class>(), 2);
    }

    #[test]
    fn test_classes() {
        for byte in 0x00..=0x7f {
            assert_eq!(classify(byte), Class::Ascii);
        }
        for byte in 0x80..=0xc1 {
            assert_eq!(classify(byte), Class::Invalid, "byte {:02x}", byte);
        }
        for byte in 0xc2..=0xdf {
            assert_eq!(classify(byte).size(), 2);
        }
        for byte in 0xf5..=0xff {
            assert_eq!(classify(byte), Class::Invalid, "byte {:02x}", byte);
        }

        let expected = [
            (0xe0, 3, Accept::AboveOverlong3),
            (0xe1, 3, Accept::Tail),
            (0xec, 3, Accept::Tail),
            (0xed, 3, Accept::BelowSurrogates),
            (0xee, 3, Accept::Tail),
            (0xef, 3, Accept::Tail),
            (0xf0, 4, Accept::AboveOverlong4),
            (0xf1, 4, Accept::Tail),
            (0xf3, 4, Accept::Tail),
            (0xf4, 4, Accept::BelowMaxRune),
        ];
        for (byte, size, accept) in expected {
            assert_eq!(classify(byte), Class::Lead { size, accept }, "byte {:02x}", byte);
        }
    }

    #[test]
    fn test_ranges() {
        assert_eq!(Accept::Tail.range(), AcceptRange::TAIL);
        assert_eq!(Accept::AboveOverlong3.range(), AcceptRange { lo: 0xa0, hi: 0xbf });
        assert_eq!(Accept::BelowSurrogates.range(), AcceptRange { lo: 0x80, hi: 0x9f });
        assert_eq!(Accept::AboveOverlong4.range(), AcceptRange { lo: 0x90, hi: 0xbf });
        assert_eq!(Accept::BelowMaxRune.range(), AcceptRange { lo: 0x80, hi: 0x8f });

        assert!(!AcceptRange::TAIL.contains(0x7f));
        assert!(AcceptRange::TAIL.contains(0x80));
        assert!(AcceptRange::TAIL.contains(0xbf));
        assert!(!AcceptRange::TAIL.contains(0xc0));
    }

    #[test]
    fn test_masks() {
        assert_eq!(lead_mask(2), 0x1f);
        assert_eq!(lead_mask(3), 0x0f);
        assert_eq!(lead_mask(4), 0x07);
        assert_eq!(0xc3 & lead_mask(2), 0x03);
        assert_eq!(0xf4 & lead_mask(4), 0x04);
    }
}
