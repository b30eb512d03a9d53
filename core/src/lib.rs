//! # Crewboard Core
//!
//! Core business logic and domain layer for the Crewboard backend.
//! This crate contains the domain entities, the auth services (access-token
//! codec, refresh-token manager, auth orchestration), repository interfaces,
//! and error types. It has no dependency on any particular user directory or
//! storage technology; those live behind the traits in [`repositories`].

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;
