use acme_negotiate::NegotiationError;

#[test]
fn error_display_unsupported_media_type() {
    let err = NegotiationError::UnsupportedMediaType("text/plain".into());
    assert!(format!("{err}").contains("unsupported media type"));
    assert!(format!("{err}").contains("text/plain"));
}

#[test]
fn error_display_not_acceptable() {
    let err = NegotiationError::NotAcceptable("application/pdf".into());
    assert!(format!("{err}").contains("not acceptable"));
    assert!(format!("{err}").contains("application/pdf"));
}

#[test]
fn error_display_malformed_payload() {
    let err = NegotiationError::MalformedPayload("missing field `age`".into());
    assert!(format!("{err}").contains("malformed payload"));
}

#[test]
fn status_codes() {
    assert_eq!(NegotiationError::UnsupportedMediaType(String::new()).status_code(), 415);
    assert_eq!(NegotiationError::NotAcceptable(String::new()).status_code(), 406);
    assert_eq!(NegotiationError::MalformedPayload(String::new()).status_code(), 400);
    assert_eq!(NegotiationError::Encode(String::new()).status_code(), 500);
}

#[test]
fn client_errors() {
    assert!(NegotiationError::MalformedPayload(String::new()).is_client_error());
    assert!(NegotiationError::NotAcceptable(String::new()).is_client_error());
    assert!(!NegotiationError::Encode(String::new()).is_client_error());
}

#[test]
fn error_is_debug() {
    let err = NegotiationError::Encode("test".into());
    let _ = format!("{err:?}");
}
