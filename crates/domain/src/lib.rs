//! # shoewash-domain
//!
//! Pure domain model for the shoewash service.
//!
//! ## Responsibilities
//! - Foundational types: item identifiers, error conventions
//! - Define **Items** (one shoe-cleaning job each) and the payloads used to
//!   create, change, and filter them
//! - Enforce the creation invariants (required fields, initial status)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod item;
