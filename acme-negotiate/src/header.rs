//! Parsing of the `Content-Type` and `Accept` header values handed over
//! by the transport layer.

use crate::media::MediaDescriptor;
use tracing::debug;

/// A `Content-Type` value split into its essence and charset parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentType {
    pub media_type: String,
    pub charset: Option<String>,
}

impl ContentType {
    /// Split a raw header value such as `application/xml; charset=ISO-8859-1`.
    ///
    /// Never fails: an unknown or empty media type is rejected later by
    /// the decoder chain, which owns that decision.
    pub fn parse(header: &str) -> Self {
        let mut parts = header.split(';');
        let media_type = parts.next().unwrap_or_default().trim().to_string();
        let charset = parts.find_map(|param| {
            let (name, value) = param.split_once('=')?;
            if !name.trim().eq_ignore_ascii_case("charset") {
                return None;
            }
            let value = unquote(value.trim());
            (!value.is_empty()).then(|| value.to_string())
        });
        Self {
            media_type,
            charset,
        }
    }

    pub fn charset(&self) -> Option<&str> {
        self.charset.as_deref()
    }
}

fn unquote(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value)
}

/// One media range of an `Accept` header.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaRange {
    pub main_type: String,
    pub sub_type: String,
    pub quality: f32,
}

impl MediaRange {
    fn parse(raw: &str) -> Option<Self> {
        let mut parts = raw.split(';');
        let (main_type, sub_type) = parts.next()?.trim().split_once('/')?;
        let (main_type, sub_type) = (main_type.trim(), sub_type.trim());
        if main_type.is_empty() || sub_type.is_empty() || (main_type == "*" && sub_type != "*") {
            return None;
        }

        let mut quality = 1.0;
        for param in parts {
            let Some((name, value)) = param.split_once('=') else {
                continue;
            };
            if name.trim().eq_ignore_ascii_case("q") {
                quality = value.trim().parse::<f32>().ok()?;
                if !(0.0..=1.0).contains(&quality) {
                    return None;
                }
            }
        }

        Some(Self {
            main_type: main_type.to_ascii_lowercase(),
            sub_type: sub_type.to_ascii_lowercase(),
            quality,
        })
    }

    /// Match rank against a concrete media type: 3 exact, 2 `type/*`,
    /// 1 `*/*`, `None` when the range does not cover it.
    fn specificity(&self, media_type: &str) -> Option<u8> {
        let (main, sub) = media_type.split_once('/')?;
        match (self.main_type.as_str(), self.sub_type.as_str()) {
            ("*", "*") => Some(1),
            (m, "*") if m.eq_ignore_ascii_case(main) => Some(2),
            (m, s) if m.eq_ignore_ascii_case(main) && s.eq_ignore_ascii_case(sub) => Some(3),
            _ => None,
        }
    }
}

/// A parsed `Accept` header.
#[derive(Debug, Clone, PartialEq)]
pub struct AcceptHeader {
    ranges: Vec<MediaRange>,
}

impl AcceptHeader {
    /// Parse a comma-separated list of media ranges.
    ///
    /// Entries that are not `type/subtype` or carry an invalid `q` are
    /// skipped. An empty header accepts everything.
    pub fn parse(header: &str) -> Self {
        if header.trim().is_empty() {
            return Self::any();
        }
        let ranges = header
            .split(',')
            .filter(|raw| !raw.trim().is_empty())
            .filter_map(|raw| {
                let range = MediaRange::parse(raw);
                if range.is_none() {
                    debug!("Ignoring invalid Accept media range {:?}", raw.trim());
                }
                range
            })
            .collect();
        Self { ranges }
    }

    /// `*/*`
    pub fn any() -> Self {
        Self {
            ranges: vec![MediaRange {
                main_type: "*".into(),
                sub_type: "*".into(),
                quality: 1.0,
            }],
        }
    }

    pub fn ranges(&self) -> &[MediaRange] {
        &self.ranges
    }

    /// Quality the client assigns to `descriptor`: the `q` of the most
    /// specific covering range, or 0 when no range covers it.
    pub fn quality(&self, descriptor: MediaDescriptor) -> f32 {
        let media_type = descriptor.media_type();
        self.ranges
            .iter()
            .filter_map(|r| r.specificity(media_type).map(|rank| (rank, r.quality)))
            .fold(None, |best: Option<(u8, f32)>, (rank, q)| match best {
                Some((best_rank, _)) if best_rank >= rank => best,
                _ => Some((rank, q)),
            })
            .map_or(0.0, |(_, q)| q)
    }
}
