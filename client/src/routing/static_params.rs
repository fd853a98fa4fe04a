//! Build-time placeholder parameters for dynamic routes.
//!
//! SYSTEM CONTEXT
//! ==============
//! The site is exported as static files, so a dynamic route only exists at a
//! concrete URL if a shell was rendered for it. Each template declares a
//! non-empty, ordered placeholder set and a policy for values outside it:
//!
//! - `Closed`: only the declared values have shells; anything else is
//!   not-found.
//! - `Open`: the shell is generic and the real value is resolved in the
//!   browser, whichever placeholder produced the shell.

#[cfg(test)]
#[path = "static_params_test.rs"]
mod static_params_test;

use std::collections::BTreeMap;

use serde::Serialize;

/// Dynamic segment name to value.
pub type RouteParams = BTreeMap<String, String>;

/// What happens to runtime values that were not enumerated at build time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamPolicy {
    Closed,
    Open,
}

/// Invalid route template or placeholder set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    #[error("route pattern `{pattern}` must start with `/`")]
    InvalidPattern { pattern: String },
    #[error("route `{pattern}` has no dynamic segments")]
    NotDynamic { pattern: String },
    #[error("route `{pattern}` declares no placeholder parameters")]
    EmptyParamSet { pattern: String },
    #[error("placeholder #{index} for `{pattern}` must bind exactly {expected:?}")]
    SegmentMismatch { pattern: String, index: usize, expected: Vec<String> },
    #[error("placeholder #{index} for `{pattern}` has an unusable value for `{segment}`")]
    InvalidValue { pattern: String, index: usize, segment: String },
}

/// One piece of a route pattern.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Segment {
    Static(String),
    Param(String),
}

/// Outcome of checking a runtime value against a template.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// A pre-rendered shell exists at this path.
    Shell(String),
    /// Served by the generic shell at `shell`; the browser resolves the value.
    ClientResolved { shell: String },
    NotFound,
}

/// Ordered, non-empty placeholder records for one template.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StaticParamSet(Vec<RouteParams>);

impl StaticParamSet {
    pub fn iter(&self) -> impl Iterator<Item = &RouteParams> {
        self.0.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false` for a constructed set; present for API symmetry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn contains(&self, params: &RouteParams) -> bool {
        self.0.iter().any(|p| p == params)
    }

    #[must_use]
    pub fn first(&self) -> &RouteParams {
        // Construction rejects empty sets.
        &self.0[0]
    }
}

/// A dynamic route pattern with its placeholder set and policy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteTemplate {
    pattern: String,
    segments: Vec<Segment>,
    policy: ParamPolicy,
    params: StaticParamSet,
}

fn parse_pattern(pattern: &str) -> Result<Vec<Segment>, RouteError> {
    let Some(rest) = pattern.strip_prefix('/') else {
        return Err(RouteError::InvalidPattern { pattern: pattern.to_owned() });
    };
    rest.split('/')
        .filter(|s| !s.is_empty())
        .map(|s| match s.strip_prefix(':') {
            Some("") => Err(RouteError::InvalidPattern { pattern: pattern.to_owned() }),
            Some(name) => Ok(Segment::Param(name.to_owned())),
            None => Ok(Segment::Static(s.to_owned())),
        })
        .collect()
}

/// A value can stand in for a path segment if it is non-empty and has no
/// characters that would change the path's shape.
fn usable_segment_value(value: &str) -> bool {
    !value.is_empty() && value != "." && value != ".." && !value.contains(['/', '?', '#', '%'])
}

impl RouteTemplate {
    /// Build and validate a template.
    ///
    /// # Errors
    ///
    /// Returns a [`RouteError`] if the pattern is malformed or has no dynamic
    /// segments, if `placeholders` is empty, or if any record does not bind
    /// exactly the pattern's dynamic segments to usable values.
    pub fn new(pattern: &str, policy: ParamPolicy, placeholders: &[&[(&str, &str)]]) -> Result<Self, RouteError> {
        let segments = parse_pattern(pattern)?;
        let expected: Vec<String> = segments
            .iter()
            .filter_map(|s| match s {
                Segment::Param(name) => Some(name.clone()),
                Segment::Static(_) => None,
            })
            .collect();
        if expected.is_empty() {
            return Err(RouteError::NotDynamic { pattern: pattern.to_owned() });
        }
        if placeholders.is_empty() {
            return Err(RouteError::EmptyParamSet { pattern: pattern.to_owned() });
        }

        let mut records = Vec::with_capacity(placeholders.len());
        for (index, record) in placeholders.iter().enumerate() {
            let params: RouteParams = record.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
            let binds_expected = params.len() == record.len()
                && params.len() == expected.len()
                && expected.iter().all(|name| params.contains_key(name));
            if !binds_expected {
                return Err(RouteError::SegmentMismatch { pattern: pattern.to_owned(), index, expected });
            }
            if let Some((segment, _)) = params.iter().find(|(_, v)| !usable_segment_value(v)) {
                return Err(RouteError::InvalidValue { pattern: pattern.to_owned(), index, segment: segment.clone() });
            }
            records.push(params);
        }

        Ok(Self { pattern: pattern.to_owned(), segments, policy, params: StaticParamSet(records) })
    }

    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    #[must_use]
    pub fn policy(&self) -> ParamPolicy {
        self.policy
    }

    /// The build-time generator hook: placeholder records in declared order.
    #[must_use]
    pub fn static_params(&self) -> &StaticParamSet {
        &self.params
    }

    /// Concrete path for `params`, or `None` if a segment is unbound.
    #[must_use]
    pub fn render_path(&self, params: &RouteParams) -> Option<String> {
        let mut path = String::new();
        for segment in &self.segments {
            path.push('/');
            match segment {
                Segment::Static(s) => path.push_str(s),
                Segment::Param(name) => path.push_str(params.get(name)?),
            }
        }
        Some(path)
    }

    /// Every path the export writes a shell for, in placeholder order.
    #[must_use]
    pub fn shell_paths(&self) -> Vec<String> {
        self.params.iter().filter_map(|p| self.render_path(p)).collect()
    }

    /// Extract params from a concrete path, if it has this template's shape.
    #[must_use]
    pub fn match_path(&self, path: &str) -> Option<RouteParams> {
        let parts: Vec<&str> = path.trim_end_matches('/').split('/').filter(|s| !s.is_empty()).collect();
        if parts.len() != self.segments.len() {
            return None;
        }
        let mut params = RouteParams::new();
        for (segment, part) in self.segments.iter().zip(parts) {
            match segment {
                Segment::Static(s) if s == part => {}
                Segment::Static(_) => return None,
                Segment::Param(name) => {
                    params.insert(name.clone(), part.to_owned());
                }
            }
        }
        Some(params)
    }

    /// Decide how a runtime value is served.
    #[must_use]
    pub fn resolve(&self, runtime: &RouteParams) -> Resolution {
        let Some(path) = self.render_path(runtime) else {
            return Resolution::NotFound;
        };
        match self.policy {
            ParamPolicy::Closed if self.params.contains(runtime) => Resolution::Shell(path),
            ParamPolicy::Closed => Resolution::NotFound,
            ParamPolicy::Open => match self.render_path(self.params.first()) {
                Some(shell) => Resolution::ClientResolved { shell },
                None => Resolution::NotFound,
            },
        }
    }
}
