//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `gate`, `catalog`) so individual
//! components can depend on small focused models. `session_store` is the only
//! module that touches the reactive runtime.

pub mod catalog;
pub mod gate;
pub mod session;
pub mod session_store;
