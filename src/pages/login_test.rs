use super::*;

#[test]
fn login_payload_carries_credentials() {
    let payload = login_payload("mina@example.com", "s3cret");
    assert_eq!(payload["email"], "mina@example.com");
    assert_eq!(payload["password"], "s3cret");
}

#[test]
fn login_failed_message_formats_status() {
    assert_eq!(login_failed_message(403), "login failed: 403");
    assert_eq!(login_failed_message(500), "login failed: 500");
}
