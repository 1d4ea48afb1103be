#![cfg_attr(not(feature = "std"), no_std)]

//! # Pretty 🌸 Rune
//!
//! \[  [**Docs.rs**](https://docs.rs/prettyrune/latest/prettyrune/)
//! | [**Rust Crate**](https://crates.io/crates/prettyrune)
//! | [**Repository**](https://github.com/apparebit/prettypretty)
//! \]
//!
//! This crate provides **table-driven, allocation-free decoding of UTF-8**, one
//! rune at a time. It suits code that consumes UTF-8 byte by byte, such as
//! scanners for terminal input, and does not want to pull in a full text
//! processing library. It has no required dependencies and supports `no_std`.
//!
//! The two central functions are:
//!
//!   * [`full_rune`] determines whether a buffer, which may be a truncated
//!     prefix of a longer stream, already holds one complete rune.
//!   * [`decode_rune`] decodes the buffer's first rune and returns it together
//!     with the number of bytes it spans.
//!
//! Both have variants for sequences of byte-valued scalars ([`full_rune_in_chars`],
//! [`decode_rune_in_chars`]) as well as generic variants for any [`CodeUnit`].
//! In addition, [`decode_last_rune`] decodes a buffer's final rune, [`valid`]
//! checks entire buffers, and [`try_decode_rune`] reports failure as an
//! [`Error`](err::Error).
//!
//! Decoding performs a single lookup in the [`table`] of first bytes,
//! followed by at most three range checks. Notably, the legal range for the
//! second byte depends on the first byte, which excludes overlong encodings,
//! surrogates, and code points beyond [`MAX_RUNE`].
//!
//!
//! # Errors
//!
//! Decoding signals errors in-band by returning [`RUNE_ERROR`]. The
//! accompanying size tells the caller how to proceed:
//!
//!   * With size 1, the input is malformed. Skip one byte and try again.
//!   * With size 0, the input is empty or a well-formed prefix that is too short.
//!     Read more bytes and try again.
//!
//! A lone lead byte is the one exception; it decodes with size 1.
//!
//!
//! # Example
//!
//! A scanner that feeds chunks of bytes into [`decode_rune`] checks for a
//! [`full_rune`] first and carries over the bytes of an incomplete rune:
//!
//! ```
//! # use prettyrune::{decode_rune, full_rune, RUNE_ERROR};
//! let chunks: [&[u8]; 2] = [b"Gr\xc3\xbc\xc3", b"\x9fe"];
//! let mut pending = Vec::new();
//! let mut runes = Vec::new();
//!
//! for chunk in chunks {
//!     pending.extend_from_slice(chunk);
//!     let mut bytes = pending.as_slice();
//!     while full_rune(bytes) {
//!         let (rune, size) = decode_rune(bytes);
//!         runes.push(rune);
//!         bytes = &bytes[size..];
//!     }
//!     pending = bytes.to_vec();
//! }
//!
//! assert_eq!(runes, [0x47, 0x72, 0xfc, 0xdf, 0x65]);
//! assert!(!runes.contains(&RUNE_ERROR));
//! ```
//!
//!
//! # Features
//!
//!   - **`std`** (default) enables conversions from [`Error`](err::Error) to
//!     [`std::io::Error`]. Without it, the crate is `no_std`.
//!   - **`tracing`** emits a trace event whenever [`try_decode_rune`] or its
//!     variants reject input.

mod decode;
pub mod err;
pub mod table;
mod unit;

pub use decode::{
    decode_last_rune, decode_last_rune_in_chars, decode_last_rune_of, decode_rune,
    decode_rune_in_chars, decode_rune_of, full_rune, full_rune_in_chars, full_rune_of,
    rune_start, try_decode_rune, try_decode_rune_in_chars, try_decode_rune_of, valid,
    valid_in_chars, valid_of, valid_rune,
};
pub use unit::CodeUnit;

/// A Unicode scalar value.
pub type Rune = u32;

/// The error rune, i.e., the Unicode replacement character.
pub const RUNE_ERROR: Rune = 0xfffd;

/// The bound on single-byte runes, which are represented as themselves.
pub const RUNE_SELF: u8 = 0x80;

/// The maximum Unicode code point.
pub const MAX_RUNE: Rune = 0x10ffff;

/// The maximum number of bytes of a UTF-8 encoded rune.
pub const UTF_MAX: usize = 4;
