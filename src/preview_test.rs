use super::*;
use crate::export::{Rewrite, write_site};

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("cardbinder-preview-{name}-{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

fn sample_manifest() -> RouteManifest {
    RouteManifest {
        shells: vec!["/".to_owned(), "/collections/1".to_owned(), "/sets/1".to_owned()],
        closed: vec!["/collections/:id".to_owned()],
        rewrites: vec![Rewrite { pattern: "/sets/:setId".to_owned(), shell: "/sets/1".to_owned() }],
    }
}

async fn spawn_preview(dir: &Path) -> String {
    let manifest = load_manifest(dir).unwrap();
    let app = router(dir, &manifest);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    format!("http://{addr}")
}

#[test]
fn axum_pattern_converts_params() {
    assert_eq!(axum_pattern("/sets/:setId"), "/sets/{setId}");
    assert_eq!(axum_pattern("/password/confirm/:id/:token"), "/password/confirm/{id}/{token}");
    assert_eq!(axum_pattern("/profile"), "/profile");
}

#[test]
fn load_manifest_reports_missing_file() {
    let dir = scratch_dir("missing");
    assert!(matches!(load_manifest(&dir), Err(PreviewError::Read { .. })));
}

#[tokio::test]
async fn preview_serves_shells_rewrites_and_404() {
    let dir = scratch_dir("serve");
    write_site(&dir, &sample_manifest(), |path| format!("shell:{path}")).unwrap();
    let base = spawn_preview(&dir).await;
    let http = reqwest::Client::new();

    let home = http.get(format!("{base}/")).send().await.unwrap();
    assert_eq!(home.status(), reqwest::StatusCode::OK);
    assert_eq!(home.text().await.unwrap(), "shell:/");

    // Open route: any set id gets the generic placeholder shell.
    let set = http.get(format!("{base}/sets/base1")).send().await.unwrap();
    assert_eq!(set.status(), reqwest::StatusCode::OK);
    assert_eq!(set.text().await.unwrap(), "shell:/sets/1");

    // Closed route: ids without a shell are not found.
    let missing = http.get(format!("{base}/collections/9")).send().await.unwrap();
    assert_eq!(missing.status(), reqwest::StatusCode::NOT_FOUND);
    assert_eq!(missing.text().await.unwrap(), "shell:/404");

    let _ = std::fs::remove_dir_all(&dir);
}
