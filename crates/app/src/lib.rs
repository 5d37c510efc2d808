//! # shoewash-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **port trait** that storage adapters must implement:
//!   - `ItemRepository`: insert, filtered list, get, partial update, delete
//! - Define the **driving/inbound** use-case struct:
//!   - `ItemService`: validate, delegate to the repository, map "no row" to
//!     not-found
//!
//! ## Dependency rule
//! Depends on `shoewash-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
