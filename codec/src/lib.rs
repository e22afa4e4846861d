//! Conversions between the three encodings of a 32-bit ARGB color: four 8-bit channels, a
//! packed integer and an `#AARRGGBB` hex string.

#![warn(
    anonymous_parameters,
    bare_trait_objects,
    clippy::branches_sharing_code,
    clippy::map_unwrap_or,
    clippy::match_wildcard_for_single_variants,
    // clippy::missing_errors_doc,
    clippy::must_use_candidate,
    clippy::needless_for_each,
    clippy::redundant_closure_for_method_calls,
    clippy::semicolon_if_nothing_returned,
    clippy::unreadable_literal,
    clippy::unwrap_used,
    clippy::expect_used,
    deprecated_in_future,
    ellipsis_inclusive_range_patterns,
    future_incompatible,
    missing_copy_implementations,
    missing_debug_implementations,
    // missing_docs,
    nonstandard_style,
    rust_2018_compatibility,
    rust_2018_idioms,
    rust_2021_compatibility,
    rustdoc::bare_urls,
    rustdoc::broken_intra_doc_links,
    rustdoc::invalid_html_tags,
    rustdoc::invalid_rust_codeblocks,
    rustdoc::private_intra_doc_links,
    single_use_lifetimes,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unused,
    variant_size_differences
)]

use std::num::ParseIntError;

pub mod color;
pub mod hex;
pub mod input;
pub mod preset;

/// Results that can be returned from this library.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can be returned from this library.
///
/// Every variant describes malformed user input. Callers holding on to a valid color are
/// expected to keep it and ignore the edit.
#[allow(variant_size_differences)]
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("hex color must have 8 digits, found {0}")]
    InvalidHexLength(usize),
    #[error("invalid hex digit `{digit}` at position {position}")]
    InvalidHexDigit { digit: char, position: usize },
    #[error("invalid integer `{text}`: {source}")]
    InvalidInteger { text: String, source: ParseIntError },
    #[error("channel value {0} is outside 0..=255")]
    ChannelOutOfRange(i64),
    #[error("unknown channel `{0}`")]
    UnknownChannel(String),
    #[error("unknown preset `{0}`")]
    UnknownPreset(String),
}

pub mod prelude {
    //! Most commonly used exports.

    pub use crate::{
        color::{argb_to_u32, u32_to_argb, ArgbColor, Channel},
        hex::{from_hex, to_hex},
        input::{parse_channel, parse_integer, IntegerInput},
        preset::Preset,
        Error, Result,
    };
}
