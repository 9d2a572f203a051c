use super::*;

#[test]
fn from_form_trims_username_and_keeps_password() {
    assert_eq!(
        LoginRequest::from_form("  admin  ", " pw "),
        Ok(LoginRequest { username: "admin".to_owned(), password: " pw ".to_owned() })
    );
}

#[test]
fn from_form_requires_both_fields() {
    let expected = Err(ApiError::InvalidInput("Enter both username and password."));
    assert_eq!(LoginRequest::from_form("", "pw"), expected);
    assert_eq!(LoginRequest::from_form("admin", "   "), expected);
}

#[test]
fn login_request_serializes_field_names() {
    let body = serde_json::to_value(LoginRequest { username: "a".to_owned(), password: "b".to_owned() });
    assert_eq!(body.ok(), Some(serde_json::json!({ "username": "a", "password": "b" })));
}

#[test]
fn login_response_defaults_token_type() {
    let parsed: Result<LoginResponse, _> = serde_json::from_str(r#"{"access_token":"jwt"}"#);
    assert_eq!(
        parsed.ok(),
        Some(LoginResponse { access_token: "jwt".to_owned(), token_type: "bearer".to_owned() })
    );
}

#[test]
fn login_response_becomes_session() {
    let resp = LoginResponse { access_token: "jwt".to_owned(), token_type: "bearer".to_owned() };
    assert_eq!(AdminSession::from(resp), AdminSession::new("jwt"));
}

#[test]
fn status_error_messages() {
    assert_eq!(ApiError::Status(401).to_string(), "login failed: invalid credentials");
    assert_eq!(ApiError::Status(500).to_string(), "login failed: status 500");
}

