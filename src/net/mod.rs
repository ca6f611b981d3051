//! Networking modules for the REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls and the auth-service seam, and `types` defines
//! the shared wire schema.

pub mod api;
pub mod types;
