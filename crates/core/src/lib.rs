//! Domain logic for the resource manager backend.
//!
//! This crate has no IO: everything here is pure and shared by the `db`
//! and `api` crates.

pub mod business_days;
pub mod error;
pub mod export;
pub mod phase;
pub mod types;
pub mod validation;
