//! # Crewboard Shared
//!
//! Configuration and common types shared across the Crewboard backend crates.

pub mod config;
pub mod types;
