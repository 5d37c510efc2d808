//! # shoewash-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **items JSON API** (`/items`, `/items/{id}`) plus a plain-text
//!   liveness banner at `/` and `/health`
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results and errors into HTTP responses with a uniform
//!   `{"error": "..."}` body
//!
//! ## Dependency rule
//! Depends on `shoewash-app` (for the port trait and service) and
//! `shoewash-domain` (for types used in request/response mapping). Never
//! leaks axum types into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
