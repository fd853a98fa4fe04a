//! Reusable UI components.
//!
//! ARCHITECTURE
//! ============
//! Components here are route-agnostic: guards, bridges and status widgets
//! that pages compose.

pub mod pending;
pub mod route_gate;
pub mod segment_bridge;
pub mod site_header;
pub mod user_status;
