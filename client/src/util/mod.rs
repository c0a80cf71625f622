//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules keep decision logic free of browser and Leptos concerns so
//! it can be tested natively.

pub mod gate;
