//! Networking for the backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues requests and maps failures to [`api::ApiError`]; `types`
//! defines the backend's JSON schema.

pub mod api;
pub mod types;
