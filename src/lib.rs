//! Roster Backend Library
//!
//! This library provides the user collection and the HTTP API that exposes it.

pub mod api;
pub mod user;
