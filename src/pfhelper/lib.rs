//! # pfhelper Architecture
//!
//! pfhelper edits Postfix lookup-table text files (alias and user maps)
//! without destroying the comments and formatting humans put in them.
//! It is a library with a CLI client, not a CLI that happens to export
//! functions — keep the layers apart when extending it.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (args.rs, wired by main.rs)                      │
//! │  - Parses arguments, prints listings and messages           │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Returns structured Result<CmdResult> values              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Alias business logic over the three Postfix tables       │
//! │  - Writes files and runs postmap on --save                  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Table Core (table/, model.rs)                              │
//! │  - Parser and serializer for the lookup-table text format   │
//! │  - Pure in-memory transforms, no I/O                        │
//! │  - Per-path cache of live tables (table/store.rs)           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Table Format
//!
//! A table file is line oriented: `KEY  VALUE` entries, `# text`
//! comments that attach to the entry below them, `#-- KEY VALUE`
//! soft-deleted records and generated `#== ...` section headers. The
//! parser keeps all of it in the mapping (see [`model`]), so a
//! programmatic edit followed by a save reproduces the hand-written
//! parts of the file byte for byte.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade — entry point for all operations
//! - [`commands`]: Business logic for each CLI command
//! - [`table`]: The table core: parser, serializer, per-path store
//! - [`model`]: `TableEntry` and the reserved pseudo-keys
//! - [`config`]: YAML configuration and path resolution
//! - [`postmap`]: External map-compiler invocation
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod postmap;
pub mod table;
