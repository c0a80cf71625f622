//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, persisted stores, redirect memory)
//! so components depend on small focused models. Every store is an explicit
//! value provided through Leptos context rather than an ambient singleton.

pub mod biometric;
pub mod company;
pub mod persist;
pub mod redirect;
pub mod session;
pub mod user_snapshot;
