//! # shoewash-adapter-storage-postgrest
//!
//! Persistence adapter for a [PostgREST](https://postgrest.org) endpoint, as
//! exposed by Supabase, using [reqwest](https://docs.rs/reqwest).
//!
//! ## Responsibilities
//! - Implement the repository port trait defined in `shoewash-app::ports::storage`
//! - Hold the configured store handle (endpoint, access key, table)
//! - Translate each repository call into exactly one PostgREST request
//! - Map PostgREST error objects into [`StoreError`]
//!
//! ## Dependency rule
//! Depends on `shoewash-app` (for port traits) and `shoewash-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

pub mod client;
pub mod config;
pub mod error;
pub mod item_repo;

pub use client::PostgrestClient;
pub use config::Config;
pub use error::StoreError;
pub use item_repo::PostgrestItemRepository;
