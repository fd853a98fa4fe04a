use super::*;

#[test]
fn card_set_reads_api_shape() {
    let body = r#"{"data":{"id":"base1","name":"Base","series":"Base","total":102,"releaseDate":"1999/01/09","images":{}}}"#;
    let envelope: DataEnvelope<CardSet> = serde_json::from_str(body).unwrap();
    assert_eq!(
        envelope.data,
        CardSet {
            id: "base1".to_owned(),
            name: "Base".to_owned(),
            series: "Base".to_owned(),
            total: 102,
            release_date: Some("1999/01/09".to_owned()),
        }
    );
}

#[test]
fn card_set_tolerates_missing_optional_fields() {
    let set: CardSet = serde_json::from_str(r#"{"id":"x","name":"X"}"#).unwrap();
    assert_eq!(set.total, 0);
    assert!(set.series.is_empty());
    assert!(set.release_date.is_none());
}

#[test]
fn password_confirm_request_serializes_all_fields() {
    let body = PasswordConfirmRequest { id: "12", token: "tok", password: "hunter22" };
    assert_eq!(
        serde_json::to_value(&body).unwrap(),
        serde_json::json!({ "id": "12", "token": "tok", "password": "hunter22" })
    );
}

// =============================================================
// Auth form bodies
// =============================================================

#[test]
fn credentials_form_carries_csrf_token_and_escapes_values() {
    let body = CredentialsRequest { email: "ash+1@example.com", password: "p&ss word", csrf_token: "abc123" };
    assert_eq!(body.to_form(), "email=ash%2B1%40example.com&password=p%26ss%20word&csrfToken=abc123&json=true");
}

#[test]
fn sign_out_form_carries_csrf_token() {
    assert_eq!(sign_out_form("tok"), "csrfToken=tok&json=true");
}

#[test]
fn csrf_response_reads_provider_shape() {
    let csrf: CsrfResponse = serde_json::from_str(r#"{"csrfToken":"f00d"}"#).unwrap();
    assert_eq!(csrf.csrf_token, "f00d");
}

#[test]
fn redirect_to_error_page_means_rejected() {
    let rejected: RedirectResponse =
        serde_json::from_str(r#"{"url":"https://id.example.com/api/auth/error?error=CredentialsSignin"}"#).unwrap();
    assert!(rejected.is_error());
    let accepted: RedirectResponse = serde_json::from_str(r#"{"url":"https://id.example.com/profile"}"#).unwrap();
    assert!(!accepted.is_error());
    assert!(!RedirectResponse::default().is_error());
}
