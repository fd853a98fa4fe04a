//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` owns the raw identity-provider state; `auth` projects it into
//! the small view that guards and status displays consume.

pub mod auth;
pub mod session;
