//! UI component modules used by catalog pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components are page-agnostic building blocks. The gate decision and text
//! formatting they rely on live in `state` and `util`.

pub mod anime_list;
pub mod login_required_dialog;
pub mod user_provider;
