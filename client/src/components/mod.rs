//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components provide and consume the session context and wrap routes in the
//! access gates; pages compose them.

pub mod gate;
pub mod nav_bar;
pub mod session_provider;
