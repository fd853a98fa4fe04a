//! Routing for a statically exported site.
//!
//! ARCHITECTURE
//! ============
//! `static_params` and `table` describe what exists at build time;
//! `live_param` describes what the browser actually visited.

pub mod live_param;
pub mod static_params;
pub mod table;

pub use static_params::{ParamPolicy, Resolution, RouteError, RouteParams, RouteTemplate, Segment, StaticParamSet};
