use super::*;
use crate::app::render_static_shell;
use leptos::config::LeptosOptions;

fn options() -> LeptosOptions {
    LeptosOptions::builder().output_name("cardbinder").build()
}

#[test]
fn shell_is_identical_for_any_id_and_token() {
    let a = render_static_shell("/password/confirm/1/placeholder", &options());
    let b = render_static_shell("/password/confirm/9041/9f86d081884c7d659a2feaa0c55ad015", &options());
    assert_eq!(a, b);
}

#[test]
fn shell_always_contains_the_mount_point() {
    for path in ["/password/confirm/1/placeholder", "/password/confirm/x/expired-token"] {
        let html = render_static_shell(path, &options());
        assert!(html.contains(&format!("id=\"{MOUNT_POINT_ID}\"")), "no mount point for {path}");
        assert!(!html.contains("expired-token"));
    }
}
