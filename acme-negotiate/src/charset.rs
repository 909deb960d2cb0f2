//! Byte-to-text decoding under a declared charset.

use crate::error::{NegotiationError, NegotiationResult};
use encoding_rs::{Encoding, UTF_8};
use std::borrow::Cow;

/// Decode `bytes` as text in `charset`, defaulting to UTF-8.
///
/// Labels are resolved through the WHATWG label table, so aliases such
/// as `utf8` or `latin1` work. Decoding is strict: any malformed
/// sequence fails rather than producing replacement characters.
pub fn decode_text<'a>(bytes: &'a [u8], charset: Option<&str>) -> NegotiationResult<Cow<'a, str>> {
    let encoding = resolve(charset)?;
    encoding
        .decode_without_bom_handling_and_without_replacement(bytes)
        .ok_or_else(|| {
            NegotiationError::malformed(format!("payload is not valid {} text", encoding.name()))
        })
}

fn resolve(charset: Option<&str>) -> NegotiationResult<&'static Encoding> {
    match charset.map(str::trim) {
        None | Some("") => Ok(UTF_8),
        Some(label) => Encoding::for_label(label.as_bytes()).ok_or_else(|| {
            NegotiationError::UnsupportedMediaType(format!("unknown charset {label:?}"))
        }),
    }
}
