//! Networking modules for the backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls (including the image upload proxy) and `types`
//! defines the shared wire schema.

pub mod api;
pub mod types;
