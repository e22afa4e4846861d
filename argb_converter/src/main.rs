//! Convert between integer and hexadecimal ARGB color values from the terminal.

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

use anyhow::{Context as _, Result};
use argb_form::prelude::*;
use command::Command;
use std::io::{self, Write};
use terminal::Terminal;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

mod command;
mod terminal;
mod trace;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let _trace = trace::initialize();
    run_application().await
}

async fn run_application() -> Result<()> {
    let config = Config::new();
    tracing::info!("application started with {config:?}");

    let engine = Engine::start(config, Terminal::new(io::stdout()))?;
    let _ = run_session(engine, BufReader::new(tokio::io::stdin())).await?;
    tracing::info!("application shutting down");
    Ok(())
}

/// Feed `input` to the form line by line until it ends or the user quits.
///
/// Lines are decoded lossily, bytes that are not UTF-8 become U+FFFD and fail to parse as a
/// command like any other typo.
async fn run_session<R, W>(mut engine: Engine<Terminal<W>>, mut input: R) -> Result<Terminal<W>>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut buf = Vec::new();
    while engine.is_running() {
        engine.app_mut().prompt()?;
        buf.clear();
        let read = input
            .read_until(b'\n', &mut buf)
            .await
            .context("failed to read input")?;
        if read == 0 {
            break;
        }
        let line = String::from_utf8_lossy(&buf);
        handle_line(&mut engine, &line)?;
    }
    Ok(engine.stop())
}

fn handle_line<W: Write>(engine: &mut Engine<Terminal<W>>, line: &str) -> Result<()> {
    let command = match command::parse(line) {
        Ok(Some(command)) => command,
        Ok(None) => return Ok(()),
        Err(err) => {
            tracing::debug!("invalid command {line:?}: {err}");
            engine.app_mut().print_line(err)?;
            return Ok(());
        }
    };

    match command {
        Command::Edit(event) => engine.dispatch(event)?,
        Command::Presets => engine.app_mut().print_presets()?,
        Command::Show => {
            let view = engine.context().view();
            engine.app_mut().print_view(&view)?;
        }
        Command::Json => {
            let view = engine.context().view();
            engine.app_mut().print_json(&view)?;
        }
        Command::Help => engine.app_mut().print_line(command::HELP)?,
    }
    Ok(())
}
