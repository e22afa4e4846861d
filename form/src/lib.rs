//! A synchronized ARGB color form.
//!
//! The form keeps four channel fields, a packed integer field and a hex field in agreement.
//! Edits arrive as [FormEvent](event::FormEvent)s, are validated, applied to the canonical
//! color, and the remaining fields are re-derived before the presentation layer is notified.

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

use std::io;

pub mod config;
pub mod context;
pub mod core;
pub mod event;
pub mod form;

/// Results that can be returned from this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can be returned from this crate.
///
/// Malformed input never reaches here, the form swallows it. These are failures of the
/// presentation layer.
#[allow(variant_size_differences)]
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub mod prelude {
    //! Most commonly used exports for setting up a form.

    pub use crate::{
        config::{Config, IntegerFormat},
        context::Context,
        core::{Engine, OnUpdate},
        event::FormEvent,
        form::{ColorForm, FormView},
    };
    pub use argb_codec::{
        color::{ArgbColor, Channel},
        preset::Preset,
    };
}
