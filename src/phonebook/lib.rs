//! # Phonebook Architecture
//!
//! Phonebook is a **UI-agnostic contact library** with a CLI client on top.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, validates raw input, prints results    │
//! │  - Owns startup: data directory, config, logging subscriber │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Loads the store once, dispatches, saves after mutations  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One operation each, returns `CmdResult` with messages    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (model.rs, store/)                                    │
//! │  - `Contact`: validated fields plus append-only history     │
//! │  - `ContactStore`: ids, import, search, sort, group         │
//! │  - `StorageBackend`: JSON file (production) or memory       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No I/O Assumptions in Core
//!
//! From `api.rs` inward nothing writes to stdout/stderr or exits the process.
//! The library emits `tracing` events; installing a subscriber is the binary's job.
//!
//! ## "Not Found" Is Not Fatal
//!
//! Looking up, updating, viewing or deleting an unknown id produces a warning
//! message in the `CmdResult`, never an aborted session. At the store level the
//! same case is `PhonebookError::ContactNotFound`, so library callers can match it.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: One module per operation
//! - [`store`]: `ContactStore` and storage backends
//! - [`model`]: `Contact`, `ContactUpdate`, `ChangeRecord`, `SortField`
//! - [`validation`]: Phone, email and name validators
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
pub mod validation;
