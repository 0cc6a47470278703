//! Web rendering layer for the browser-facing form.
//!
//! Uses Askama templates for server-side rendering. This layer carries only
//! the client-safe baseline constraints, mirrored into the markup as native
//! input attributes; nothing under it references the burner-domain lookup.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering handlers

pub mod handlers;
