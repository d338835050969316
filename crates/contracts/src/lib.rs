//! Shared types and content of the Northbridge school site.
//!
//! Everything here is plain Rust with no browser dependencies, so the frontend
//! and the static host share one route table and the catalogs can be tested
//! on the host.

pub mod domain;
pub mod school;
pub mod shared;
pub mod site;
