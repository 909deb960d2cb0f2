use acme_negotiate::{AcceptHeader, ContentType, MediaDescriptor};
use pretty_assertions::assert_eq;

// ── Content-Type ─────────────────────────────────────────────────

#[test]
fn content_type_without_parameters() {
    let ct = ContentType::parse("application/json");
    assert_eq!(ct.media_type, "application/json");
    assert_eq!(ct.charset(), None);
}

#[test]
fn content_type_with_charset() {
    let ct = ContentType::parse("application/xml; charset=ISO-8859-1");
    assert_eq!(ct.media_type, "application/xml");
    assert_eq!(ct.charset(), Some("ISO-8859-1"));
}

#[test]
fn content_type_charset_name_is_case_insensitive_and_quoted_value_unwrapped() {
    let ct = ContentType::parse("application/xml;CharSet=\"utf-8\"");
    assert_eq!(ct.charset(), Some("utf-8"));
}

#[test]
fn content_type_ignores_other_parameters() {
    let ct = ContentType::parse("application/json; profile=x; charset=utf-8");
    assert_eq!(ct.media_type, "application/json");
    assert_eq!(ct.charset(), Some("utf-8"));
}

#[test]
fn content_type_empty_charset_is_absent() {
    let ct = ContentType::parse("application/json; charset=");
    assert_eq!(ct.charset(), None);
}

#[test]
fn content_type_empty_header() {
    let ct = ContentType::parse("");
    assert_eq!(ct.media_type, "");
    assert_eq!(ct.charset(), None);
}

// ── Accept parsing ───────────────────────────────────────────────

#[test]
fn accept_parses_ranges_and_quality() {
    let accept = AcceptHeader::parse("application/xml;q=0.5, application/json");
    let ranges = accept.ranges();
    assert_eq!(ranges.len(), 2);
    assert_eq!(ranges[0].main_type, "application");
    assert_eq!(ranges[0].sub_type, "xml");
    assert_eq!(ranges[0].quality, 0.5);
    assert_eq!(ranges[1].quality, 1.0);
}

#[test]
fn accept_lowercases_ranges() {
    let accept = AcceptHeader::parse("Application/JSON");
    assert_eq!(accept.ranges()[0].sub_type, "json");
}

#[test]
fn accept_skips_invalid_entries() {
    let accept = AcceptHeader::parse("garbage, */json, application/json;q=2, application/xml;q=abc, text/plain");
    assert_eq!(accept.ranges().len(), 1);
    assert_eq!(accept.ranges()[0].sub_type, "plain");
}

#[test]
fn empty_accept_means_anything() {
    assert_eq!(AcceptHeader::parse("   "), AcceptHeader::any());
}

// ── Quality lookup ───────────────────────────────────────────────

#[test]
fn quality_of_exact_match() {
    let accept = AcceptHeader::parse("application/vnd.acme.v1+xml;q=0.7");
    assert_eq!(accept.quality(MediaDescriptor::XML_V1), 0.7);
    assert_eq!(accept.quality(MediaDescriptor::XML), 0.0);
}

#[test]
fn quality_of_wildcards() {
    let accept = AcceptHeader::parse("application/*;q=0.4");
    for descriptor in MediaDescriptor::ALL {
        assert_eq!(accept.quality(descriptor), 0.4);
    }
    assert_eq!(AcceptHeader::any().quality(MediaDescriptor::JSON), 1.0);
}

#[test]
fn most_specific_range_wins() {
    let accept = AcceptHeader::parse("*/*;q=0.1, application/*;q=0.5, application/json;q=0");
    assert_eq!(accept.quality(MediaDescriptor::JSON), 0.0);
    assert_eq!(accept.quality(MediaDescriptor::XML), 0.5);
}

#[test]
fn unrelated_ranges_give_zero() {
    let accept = AcceptHeader::parse("text/*, image/png");
    assert_eq!(accept.quality(MediaDescriptor::JSON), 0.0);
}
