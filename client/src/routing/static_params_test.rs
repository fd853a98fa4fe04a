use super::*;

fn params(pairs: &[(&str, &str)]) -> RouteParams {
    pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect()
}

fn closed_collections() -> RouteTemplate {
    RouteTemplate::new(
        "/collections/:id",
        ParamPolicy::Closed,
        &[&[("id", "1")], &[("id", "2")], &[("id", "3")]],
    )
    .unwrap()
}

// =============================================================
// Validation
// =============================================================

#[test]
fn empty_placeholder_set_is_rejected() {
    let err = RouteTemplate::new("/sets/:setId", ParamPolicy::Open, &[]).unwrap_err();
    assert_eq!(err, RouteError::EmptyParamSet { pattern: "/sets/:setId".to_owned() });
}

#[test]
fn static_pattern_is_rejected() {
    let err = RouteTemplate::new("/profile", ParamPolicy::Open, &[&[]]).unwrap_err();
    assert!(matches!(err, RouteError::NotDynamic { .. }));
}

#[test]
fn relative_pattern_is_rejected() {
    let err = RouteTemplate::new("sets/:setId", ParamPolicy::Open, &[&[("setId", "1")]]).unwrap_err();
    assert!(matches!(err, RouteError::InvalidPattern { .. }));
}

#[test]
fn placeholder_must_bind_every_segment() {
    let err = RouteTemplate::new("/password/confirm/:id/:token", ParamPolicy::Open, &[&[("id", "1")]]).unwrap_err();
    assert_eq!(
        err,
        RouteError::SegmentMismatch {
            pattern: "/password/confirm/:id/:token".to_owned(),
            index: 0,
            expected: vec!["id".to_owned(), "token".to_owned()],
        }
    );
}

#[test]
fn placeholder_with_unknown_segment_is_rejected() {
    let err = RouteTemplate::new("/sets/:setId", ParamPolicy::Open, &[&[("id", "1")]]).unwrap_err();
    assert!(matches!(err, RouteError::SegmentMismatch { index: 0, .. }));
}

#[test]
fn placeholder_with_duplicate_segment_is_rejected() {
    let err = RouteTemplate::new("/sets/:setId", ParamPolicy::Open, &[&[("setId", "1"), ("setId", "2")]]).unwrap_err();
    assert!(matches!(err, RouteError::SegmentMismatch { .. }));
}

#[test]
fn placeholder_values_cannot_reshape_the_path() {
    for bad in ["", "a/b", "..", "x?y", "50%"] {
        let err = RouteTemplate::new("/sets/:setId", ParamPolicy::Open, &[&[("setId", bad)]]).unwrap_err();
        assert!(matches!(err, RouteError::InvalidValue { .. }), "accepted {bad:?}");
    }
}

// =============================================================
// Paths
// =============================================================

#[test]
fn shell_paths_follow_placeholder_order() {
    assert_eq!(closed_collections().shell_paths(), vec!["/collections/1", "/collections/2", "/collections/3"]);
}

#[test]
fn static_params_are_deterministic() {
    assert_eq!(closed_collections().static_params(), closed_collections().static_params());
    assert_eq!(closed_collections().static_params().len(), 3);
}

#[test]
fn match_path_extracts_params() {
    let template =
        RouteTemplate::new("/password/confirm/:id/:token", ParamPolicy::Open, &[&[("id", "1"), ("token", "t")]])
            .unwrap();
    assert_eq!(
        template.match_path("/password/confirm/42/abc/"),
        Some(params(&[("id", "42"), ("token", "abc")]))
    );
    assert_eq!(template.match_path("/password/reset/42/abc"), None);
    assert_eq!(template.match_path("/password/confirm/42"), None);
}

// =============================================================
// Resolution
// =============================================================

#[test]
fn closed_set_serves_declared_values() {
    assert_eq!(
        closed_collections().resolve(&params(&[("id", "2")])),
        Resolution::Shell("/collections/2".to_owned())
    );
}

#[test]
fn closed_set_fails_closed_for_other_values() {
    assert_eq!(closed_collections().resolve(&params(&[("id", "9")])), Resolution::NotFound);
    assert_eq!(closed_collections().resolve(&RouteParams::new()), Resolution::NotFound);
}

#[test]
fn open_set_uses_generic_shell_for_any_value() {
    let template =
        RouteTemplate::new("/sets/:setId", ParamPolicy::Open, &[&[("setId", "1")], &[("setId", "2")]]).unwrap();
    let expected = Resolution::ClientResolved { shell: "/sets/1".to_owned() };
    assert_eq!(template.resolve(&params(&[("setId", "base1")])), expected);
    assert_eq!(template.resolve(&params(&[("setId", "2")])), expected);
}
