//! # CLI Behavior
//!
//! This is one client for textorium, not the application itself. It is the
//! only place that knows about terminal I/O, exit codes and output formatting.
//!
//! ### Naked Execution (`textorium`)
//!
//! Running `textorium` with no arguments lists snippets using the configured
//! sort order.
//!
//! ### Selecting Snippets
//!
//! Commands that take ids accept the full id (`id-k3x9q2m7a`)
//! or any prefix that matches exactly one snippet, with or without `id-`.
//!
//! ### Logging
//!
//! Diagnostics go to stderr through `tracing`. The default filter is
//! `textorium=warn`; `-v` raises it to `debug` and `RUST_LOG` overrides both.
//!
//! ## Module Structure
//!
//! - `commands`: dispatch from parsed arguments to the API
//! - `render`: output formatting (lists, full snippets, messages)
//! - `setup`: argument parsing via clap
//! - `styles`: terminal styling

mod commands;
mod render;
pub mod setup;
mod styles;

pub use commands::run;
