//! # abook Architecture
//!
//! abook is a small address book: contact records kept in a flat
//! comma-separated file, edited through an interactive terminal loop.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Command loop, prompts, rendering, exit codes             │
//! │  - The ONLY place that knows about stdin/stdout             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over the repository                          │
//! │  - Returns structured CmdResult values                      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Repository (repository.rs)                                 │
//! │  - Sole mutator of the AddressBook                          │
//! │  - Saves the whole book after every change                  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract Storage trait                                   │
//! │  - CsvStore (production), InMemoryStore (testing)           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! From `api.rs` inward, code never writes to stdout/stderr and never exits
//! the process. Diagnostics go through `tracing`.
//!
//! ## Module Overview
//!
//! - [`api`]: the facade used by the command loop
//! - [`repository`]: add / delete / find over the book
//! - [`store`]: persistence abstraction and implementations
//! - [`model`]: `Record`, `RecordFields`, `AddressBook`
//! - [`message`]: `CmdResult` and user-facing messages
//! - [`config`]: startup settings
//! - [`logging`]: tracing subscriber setup
//! - [`error`]: error types

pub mod api;
pub mod config;
pub mod error;
pub mod logging;
pub mod message;
pub mod model;
pub mod repository;
pub mod store;
