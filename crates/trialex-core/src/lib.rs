//! Core types and trait definitions for the Trialex clinical trial registry.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! All other crates depend on it; it depends on nothing proprietary.

pub mod error;
pub mod query;
pub mod service;
pub mod store;
pub mod trial;

pub use error::{Error, Result};
