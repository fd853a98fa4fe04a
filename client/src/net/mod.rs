//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps the identity provider and card data API over HTTP, and
//! `types` defines their wire shapes.

pub mod api;
pub mod types;
