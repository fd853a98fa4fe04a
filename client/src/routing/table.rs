//! Route table for the exported site.
//!
//! Static pages carry an access level; dynamic templates carry their
//! placeholder sets. The export tool walks this table to decide which shells
//! to write, and pages consult it to decide what a runtime value means.

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;

use super::static_params::{ParamPolicy, Resolution, RouteError, RouteParams, RouteTemplate};

pub const HOME_PATH: &str = "/";
pub const SIGN_IN_PATH: &str = "/login";
pub const PROFILE_PATH: &str = "/profile";
pub const PASSWORD_RESET_PATH: &str = "/password/reset";
/// Rendered into `404.html`; deliberately matches no route.
pub const NOT_FOUND_PATH: &str = "/404";

pub const COLLECTION_PATTERN: &str = "/collections/:id";
pub const SET_PATTERN: &str = "/sets/:setId";
pub const PASSWORD_CONFIRM_PATTERN: &str = "/password/confirm/:id/:token";

/// Collection ids that receive a pre-rendered shell.
pub const COLLECTION_IDS: [&str; 5] = ["1", "2", "3", "4", "5"];
/// Placeholder set ids; the real id is read in the browser.
pub const SET_PLACEHOLDER_IDS: [&str; 5] = ["1", "2", "3", "4", "5"];

/// Whether a page sits behind the route gate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Public,
    Protected,
}

/// A page without dynamic segments.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageRoute {
    pub path: &'static str,
    pub access: Access,
}

/// Every static page. The sign-in page must stay `Public`, otherwise the
/// gate would redirect to itself.
pub const STATIC_PAGES: [PageRoute; 4] = [
    PageRoute { path: HOME_PATH, access: Access::Public },
    PageRoute { path: SIGN_IN_PATH, access: Access::Public },
    PageRoute { path: PROFILE_PATH, access: Access::Protected },
    PageRoute { path: PASSWORD_RESET_PATH, access: Access::Public },
];

/// Access level of a static page path, if it is one.
#[must_use]
pub fn page_access(path: &str) -> Option<Access> {
    STATIC_PAGES.iter().find(|p| p.path == path).map(|p| p.access)
}

/// `/collections/:id`: closed set, every reachable id redirects to the profile.
///
/// # Errors
///
/// Returns a [`RouteError`] if the placeholder set is invalid.
pub fn collection_route() -> Result<RouteTemplate, RouteError> {
    let records: Vec<[(&str, &str); 1]> = COLLECTION_IDS.iter().map(|id| [("id", *id)]).collect();
    let refs: Vec<&[(&str, &str)]> = records.iter().map(<[_; 1]>::as_slice).collect();
    RouteTemplate::new(COLLECTION_PATTERN, ParamPolicy::Closed, &refs)
}

/// `/sets/:setId`: open set, resolved in the browser.
///
/// # Errors
///
/// Returns a [`RouteError`] if the placeholder set is invalid.
pub fn set_route() -> Result<RouteTemplate, RouteError> {
    let records: Vec<[(&str, &str); 1]> = SET_PLACEHOLDER_IDS.iter().map(|id| [("setId", *id)]).collect();
    let refs: Vec<&[(&str, &str)]> = records.iter().map(<[_; 1]>::as_slice).collect();
    RouteTemplate::new(SET_PATTERN, ParamPolicy::Open, &refs)
}

/// `/password/confirm/:id/:token`: one generic shell, token handled by the
/// client-mounted form.
///
/// # Errors
///
/// Returns a [`RouteError`] if the placeholder set is invalid.
pub fn password_confirm_route() -> Result<RouteTemplate, RouteError> {
    RouteTemplate::new(PASSWORD_CONFIRM_PATTERN, ParamPolicy::Open, &[&[("id", "1"), ("token", "placeholder")]])
}

/// All dynamic templates, in export order.
///
/// # Errors
///
/// Returns the first [`RouteError`] from any template.
pub fn dynamic_routes() -> Result<Vec<RouteTemplate>, RouteError> {
    Ok(vec![collection_route()?, set_route()?, password_confirm_route()?])
}

/// Resolve a runtime collection id. An invalid table fails closed.
#[must_use]
pub fn resolve_collection(id: &str) -> Resolution {
    match collection_route() {
        Ok(route) => {
            let mut params = RouteParams::new();
            params.insert("id".to_owned(), id.to_owned());
            route.resolve(&params)
        }
        Err(_) => Resolution::NotFound,
    }
}

/// Where the route gate sends signed-out visitors. `return_to` is kept only
/// if it is a safe same-site path.
#[must_use]
pub fn sign_in_location(return_to: &str) -> String {
    match safe_return_path(return_to) {
        Some(path) if path != SIGN_IN_PATH => format!("{SIGN_IN_PATH}?next={path}"),
        _ => SIGN_IN_PATH.to_owned(),
    }
}

/// Accept only absolute same-site paths made of plain path characters, so the
/// value can be placed in a query string without encoding and can never
/// point at another origin.
#[must_use]
pub fn safe_return_path(raw: &str) -> Option<&str> {
    let plain = raw
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '/' | '-' | '_' | '.'));
    (raw.starts_with('/') && !raw.starts_with("//") && plain).then_some(raw)
}
