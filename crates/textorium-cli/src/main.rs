//! # Textorium CLI
//!
//! The binary is thin on purpose: the CLI lives in `src/cli/`, and this file
//! only calls `cli::run()` and turns an error into an exit code.
//!
//! ## Workspace Structure
//!
//! - `crates/textorium/`: the library, with the snippet engine, storage,
//!   commands and the API facade
//! - `crates/textorium-cli/`: this binary, which depends on the library
//!
//! ## Layering
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/textorium-cli/src/cli/)                  │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Dispatch and context wiring (commands.rs)                │
//! │  - Terminal rendering (render.rs, styles.rs)                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (crates/textorium/src/api.rs)                    │
//! │  - Dispatches to command modules                            │
//! │  - Returns structured `CmdResult` values                    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything from `api.rs` inward is UI agnostic. Argument parsing, logging
//! setup, rendering and exit codes belong here.
//!
//! ## Testing Approach
//!
//! - Library commands carry the behavior tests.
//! - `render.rs` has unit tests for formatting.
//! - `tests/cli_e2e.rs` drives the real binary against a temporary data
//!   directory with `assert_cmd`.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
