//! # Textorium
//!
//! Textorium keeps a library of short text snippets: store them, tag them,
//! search and sort them, mark favorites, export the collection and import it
//! back, merging records that already exist.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (textorium-cli)                                        │
//! │  - Parses arguments, renders output, owns stdout/stderr     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API (api.rs)                                               │
//! │  - Thin facade over commands, threads configuration through │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Commands (commands/*.rs)                                   │
//! │  - Load, call the engine, save, report a CmdResult          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌──────────────────────────────┬──────────────────────────────┐
//! │  Engine (pure)               │  Storage (store/)            │
//! │  validation, tags, filter,   │  SnippetStore trait,         │
//! │  sort, merge, state          │  FileStore, InMemoryStore    │
//! └──────────────────────────────┴──────────────────────────────┘
//! ```
//!
//! ## The Engine Never Fails on Data
//!
//! Filtering, sorting, merging and catalog building take whatever the
//! collection holds and always produce an answer. Bad import records are
//! counted, not raised. Errors ([`error::TextoriumError`]) come only from I/O,
//! unparseable JSON, configuration and unknown ids.
//!
//! ## No Shared State
//!
//! Nothing here keeps module-level state. The current search, filters and
//! sort order live in a [`state::ViewState`] owned by the caller.
//!
//! ## Module Overview
//!
//! - [`model`]: `Snippet`, `Tag`, id generation, the lenient loader
//! - [`validation`]: import validation and normalization
//! - [`tags`]: tag normalization, tag keys and the tag catalog
//! - [`filter`]: search, favorite and tag filters
//! - [`sort`]: sort keys and ordering
//! - [`merge`]: record reconciliation and import merging
//! - [`state`]: the host's view state
//! - [`store`]: storage abstraction and implementations
//! - [`commands`]: host operations
//! - [`api`]: the facade
//! - [`config`]: configuration
//! - [`init`]: wiring configuration, data directory and store together
//! - [`error`]: error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod filter;
pub mod init;
pub mod merge;
pub mod model;
pub mod sort;
pub mod state;
pub mod store;
pub mod tags;
pub mod validation;

pub use api::TextoriumApi;
pub use error::{Result, TextoriumError};
pub use filter::{filter_snippets, FilterOptions};
pub use merge::{
    merge_imported_snippets, merge_snippets, ImportReport, MergeStrategy, Overlay, Reconcile,
};
pub use model::{get_snippet_tags, Snippet, Tag};
pub use sort::{sort_snippets, SortKey};
pub use state::ViewState;
pub use tags::{build_tag_filter_options, TagOption};
pub use validation::{
    is_valid_imported_snippet, normalize_imported_snippet, validate_imported_snippet,
    ImportLimits, ValidationError,
};
