use super::*;

fn token_with(payload: &serde_json::Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let body = URL_SAFE_NO_PAD.encode(payload.to_string());
    format!("{header}.{body}.sig")
}

#[test]
fn decode_reads_short_claim_names() {
    let token = token_with(&serde_json::json!({
        "nameid": "42",
        "unique_name": "alice",
        "role": ["Admin", "User"],
        "exp": 1_900_000_000u64
    }));
    let claims = decode(&token).unwrap();
    assert_eq!(claims.user_id, Some(42));
    assert_eq!(claims.username.as_deref(), Some("alice"));
    assert_eq!(claims.roles.iter().cloned().collect::<Vec<_>>(), vec!["Admin", "User"]);
    assert_eq!(claims.exp, Some(1_900_000_000));
}

#[test]
fn decode_reads_schema_uri_claims() {
    let token = token_with(&serde_json::json!({
        "http://schemas.xmlsoap.org/ws/2005/05/identity/claims/nameidentifier": 7,
        "http://schemas.xmlsoap.org/ws/2005/05/identity/claims/name": "bob",
        "http://schemas.microsoft.com/ws/2008/06/identity/claims/role": "Leader"
    }));
    let claims = decode(&token).unwrap();
    assert_eq!(claims.user_id, Some(7));
    assert_eq!(claims.username.as_deref(), Some("bob"));
    assert!(claims.roles.contains("Leader"));
    assert_eq!(claims.roles.len(), 1);
    assert_eq!(claims.exp, None);
}

#[test]
fn decode_merges_and_dedupes_role_claims() {
    let token = token_with(&serde_json::json!({
        "role": "User",
        "roles": ["User", "Leader", ""]
    }));
    let claims = decode(&token).unwrap();
    assert_eq!(claims.roles.len(), 2);
    assert!(claims.roles.contains("Leader"));
}

#[test]
fn decode_ignores_non_numeric_user_id() {
    let token = token_with(&serde_json::json!({ "sub": "alice@example.com" }));
    assert_eq!(decode(&token).unwrap().user_id, None);
}

#[test]
fn decode_rejects_wrong_segment_count() {
    assert_eq!(decode("only.two"), Err(ClaimsError::Malformed));
    assert_eq!(decode("a.b.c.d"), Err(ClaimsError::Malformed));
}

#[test]
fn decode_rejects_bad_base64() {
    assert!(matches!(decode("h.!!!.s"), Err(ClaimsError::Encoding(_))));
}

#[test]
fn decode_rejects_non_object_payload() {
    let body = URL_SAFE_NO_PAD.encode("[1,2,3]");
    assert_eq!(decode(&format!("h.{body}.s")), Err(ClaimsError::Payload));
}

#[test]
fn is_expired_compares_exp_to_now() {
    let claims = TokenClaims { exp: Some(100), ..TokenClaims::default() };
    assert!(claims.is_expired(100));
    assert!(claims.is_expired(150));
    assert!(!claims.is_expired(99));
    assert!(!TokenClaims::default().is_expired(u64::MAX));
}
