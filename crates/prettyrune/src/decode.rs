use crate::err::Error;
use crate::table::{classify, lead_mask, AcceptRange, Class};
use crate::unit::CodeUnit;
use crate::{Rune, RUNE_ERROR, RUNE_SELF, UTF_MAX};

/// The outcome of walking the first encoding of a sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Step {
    /// The sequence is empty.
    Empty,
    /// A complete and well-formed encoding of the rune with the given size.
    Rune(Rune, usize),
    /// A well-formed prefix that is too short, with the given number of
    /// available units.
    Truncated(usize),
    /// A malformed encoding.
    Malformed,
}

impl Step {
    /// Convert this step into the sentinel result of [`decode_rune`].
    #[inline]
    pub(crate) const fn into_pair(self) -> (Rune, usize) {
        match self {
            Self::Empty => (RUNE_ERROR, 0),
            Self::Rune(rune, size) => (rune, size),
            Self::Truncated(1) | Self::Malformed => (RUNE_ERROR, 1),
            Self::Truncated(_) => (RUNE_ERROR, 0),
        }
    }
}

/// Walk the first encoding of the given units.
///
/// The walk takes at most [`UTF_MAX`] steps: It classifies the lead, checks
/// the second unit against the lead's accept range, and checks the third and
/// fourth units against the generic continuation range. It stops with
/// [`Step::Truncated`] upon running out of units and with [`Step::Malformed`]
/// upon the first out-of-range unit.
pub(crate) fn step<U: CodeUnit>(units: &[U]) -> Step {
    let Some(&first) = units.first() else {
        return Step::Empty;
    };
    let Some(lead) = first.byte() else {
        return Step::Malformed;
    };
    if lead < RUNE_SELF {
        return Step::Rune(lead as Rune, 1);
    }

    let Class::Lead { size, accept } = classify(lead) else {
        return Step::Malformed;
    };
    let mut rune = (lead & lead_mask(size)) as Rune;
    let size = size as usize;

    for index in 1..size {
        let Some(unit) = units.get(index) else {
            return Step::Truncated(units.len());
        };
        let range = if index == 1 {
            accept.range()
        } else {
            AcceptRange::TAIL
        };
        match unit.byte() {
            Some(byte) if range.contains(byte) => {
                rune = (rune << 6) | (byte & 0x3f) as Rune;
            }
            _ => return Step::Malformed,
        }
    }

    Step::Rune(rune, size)
}

// ------------------------------------------------------------------------------------------------

/// Determine whether the units begin with a full encoding of a rune.
///
/// The units are treated as a prefix of a longer stream. An invalid encoding
/// is considered full, since it decodes to an error of width 1.
pub fn full_rune_of<U: CodeUnit>(units: &[U]) -> bool {
    let Some(&first) = units.first() else {
        return false;
    };
    let Some(lead) = first.byte() else {
        return true;
    };

    let class = classify(lead);
    if class.size() <= units.len() {
        // ASCII, invalid, or complete.
        return true;
    }

    // Must be short or invalid.
    let Class::Lead { accept, .. } = class else {
        return true;
    };
    let out_of = |index: usize, range: AcceptRange| {
        units
            .get(index)
            .is_some_and(|unit| !unit.byte().is_some_and(|byte| range.contains(byte)))
    };

    out_of(1, accept.range()) || out_of(2, AcceptRange::TAIL)
}

/// Determine whether the bytes begin with a full UTF-8 encoding of a rune.
///
/// # Example
///
/// ```
/// # use prettyrune::full_rune;
/// assert!(full_rune(b"\xe0\xa0\x80"));
/// assert!(!full_rune(b"\xe0\xa0"));
/// // An overlong lead resolves to a one-byte error.
/// assert!(full_rune(b"\xc0"));
/// ```
#[inline]
pub fn full_rune(bytes: &[u8]) -> bool {
    full_rune_of(bytes)
}

/// Determine whether the byte-valued scalars begin with a full UTF-8 encoding
/// of a rune.
#[inline]
pub fn full_rune_in_chars(chars: &[char]) -> bool {
    full_rune_of(chars)
}

// ------------------------------------------------------------------------------------------------

/// Decode the first rune of the units.
///
/// This function returns the rune and the number of units it spans. Upon
/// error, it returns [`RUNE_ERROR`] together with a size that tells the caller
/// how to proceed:
///
///   * A size of 1 indicates malformed input. The caller should skip one unit
///     and retry.
///   * A size of 0 indicates that the units are empty or a well-formed but
///     incomplete prefix. The caller should read more input.
///
/// As an exception, a lone lead byte also decodes with size 1, even though
/// [`full_rune_of`] reports it as incomplete.
#[inline]
pub fn decode_rune_of<U: CodeUnit>(units: &[U]) -> (Rune, usize) {
    step(units).into_pair()
}

/// Decode the first rune of the bytes.
///
/// # Example
///
/// ```
/// # use prettyrune::{decode_rune, RUNE_ERROR};
/// assert_eq!(decode_rune(b"\xe2\x98\x83!"), (0x2603, 3));
/// assert_eq!(decode_rune(b"\xed\xa0\x80"), (RUNE_ERROR, 1));
/// assert_eq!(decode_rune(b"\xe0\xa0"), (RUNE_ERROR, 0));
/// ```
#[inline]
pub fn decode_rune(bytes: &[u8]) -> (Rune, usize) {
    decode_rune_of(bytes)
}

/// Decode the first rune of the byte-valued scalars.
#[inline]
pub fn decode_rune_in_chars(chars: &[char]) -> (Rune, usize) {
    decode_rune_of(chars)
}

// ------------------------------------------------------------------------------------------------

/// Decode the last rune of the units.
///
/// This function scans back at most [`UTF_MAX`] units for the start of an
/// encoding. If the encoding starting there does not end exactly with the
/// units, the last unit is malformed and this function returns
/// `(RUNE_ERROR, 1)`. Empty units produce `(RUNE_ERROR, 0)`.
pub fn decode_last_rune_of<U: CodeUnit>(units: &[U]) -> (Rune, usize) {
    let end = units.len();
    let Some(&last) = units.last() else {
        return (RUNE_ERROR, 0);
    };
    if let Some(byte) = last.byte().filter(|byte| *byte < RUNE_SELF) {
        return (byte as Rune, 1);
    }

    let limit = end.saturating_sub(UTF_MAX);
    let mut start = end - 1;
    while limit < start && !units[start].is_start() {
        start -= 1;
    }

    match step(&units[start..]) {
        Step::Rune(rune, size) if start + size == end => (rune, size),
        _ => (RUNE_ERROR, 1),
    }
}

/// Decode the last rune of the bytes.
///
/// # Example
///
/// ```
/// # use prettyrune::{decode_last_rune, RUNE_ERROR};
/// assert_eq!(decode_last_rune(b"a\xe2\x98\x83"), (0x2603, 3));
/// assert_eq!(decode_last_rune(b"a\xe2\x98"), (RUNE_ERROR, 1));
/// ```
#[inline]
pub fn decode_last_rune(bytes: &[u8]) -> (Rune, usize) {
    decode_last_rune_of(bytes)
}

/// Decode the last rune of the byte-valued scalars.
#[inline]
pub fn decode_last_rune_in_chars(chars: &[char]) -> (Rune, usize) {
    decode_last_rune_of(chars)
}

// ------------------------------------------------------------------------------------------------

/// Determine whether the units consist entirely of complete and well-formed
/// encodings.
pub fn valid_of<U: CodeUnit>(mut units: &[U]) -> bool {
    loop {
        match step(units) {
            Step::Empty => return true,
            Step::Rune(_, size) => units = &units[size..],
            Step::Truncated(_) | Step::Malformed => return false,
        }
    }
}

/// Determine whether the bytes are valid UTF-8.
///
/// # Example
///
/// ```
/// # use prettyrune::valid;
/// assert!(valid(b"snow \xe2\x98\x83 man"));
/// assert!(!valid(b"snow \xe2\x98 man"));
/// ```
#[inline]
pub fn valid(bytes: &[u8]) -> bool {
    valid_of(bytes)
}

/// Determine whether the byte-valued scalars are valid UTF-8.
#[inline]
pub fn valid_in_chars(chars: &[char]) -> bool {
    valid_of(chars)
}

// ------------------------------------------------------------------------------------------------

/// Decode the first rune of the units as a character.
///
/// Unlike [`decode_rune_of`], this function reports failure as an [`Error`]
/// that retains the number of units to skip.
pub fn try_decode_rune_of<U: CodeUnit>(units: &[U]) -> Result<(char, usize), Error> {
    let result = match step(units) {
        // Accept ranges already exclude surrogates and runes beyond MAX_RUNE.
        Step::Rune(rune, size) => char::from_u32(rune)
            .map(|c| (c, size))
            .ok_or(Error::malformed()),
        Step::Empty => Err(Error::incomplete(0)),
        Step::Truncated(available) => Err(Error::incomplete(usize::from(available == 1))),
        Step::Malformed => Err(Error::malformed()),
    };

    #[cfg(feature = "tracing")]
    if let Err(ref error) = result {
        tracing::trace!(
            kind = error.kind().as_str(),
            skip = error.skip(),
            available = units.len(),
            "rejected UTF-8 input"
        );
    }

    result
}

/// Decode the first rune of the bytes as a character.
///
/// # Example
///
/// ```
/// # use prettyrune::try_decode_rune;
/// # use prettyrune::err::ErrorKind;
/// assert_eq!(try_decode_rune(b"\xc3\xa9t\xc3\xa9").unwrap(), ('é', 2));
///
/// let error = try_decode_rune(b"\xf0\x9f\x98").unwrap_err();
/// assert_eq!(error.kind(), ErrorKind::Incomplete);
/// assert_eq!(error.skip(), 0);
/// ```
#[inline]
pub fn try_decode_rune(bytes: &[u8]) -> Result<(char, usize), Error> {
    try_decode_rune_of(bytes)
}

/// Decode the first rune of the byte-valued scalars as a character.
#[inline]
pub fn try_decode_rune_in_chars(chars: &[char]) -> Result<(char, usize), Error> {
    try_decode_rune_of(chars)
}

// ------------------------------------------------------------------------------------------------

/// Determine whether the byte may start an encoding.
///
/// Second and later bytes of multi-byte encodings have the form `0b10xx_xxxx`.
#[inline]
pub const fn rune_start(byte: u8) -> bool {
    byte & 0xc0 != 0x80
}

/// Determine whether the value is a Unicode scalar value.
#[inline]
pub const fn valid_rune(rune: Rune) -> bool {
    matches!(rune, 0..=0xd7ff | 0xe000..=crate::MAX_RUNE)
}

// ================================================================================================
