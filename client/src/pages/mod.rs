//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`.

pub mod collection;
pub mod home;
pub mod login;
pub mod not_found;
pub mod password_confirm;
pub mod password_reset;
pub mod profile;
pub mod set;
