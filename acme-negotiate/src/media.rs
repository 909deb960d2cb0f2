//! Media descriptors: the six registered (format, version) combinations.

use acme_model::SchemaVersion;
use std::fmt;

/// Wire serialization format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Json,
    Xml,
}

impl Format {
    pub fn as_str(self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Xml => "xml",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Version marker carried by a media type.
///
/// `Unversioned` is the plain `application/json` / `application/xml`
/// type and always behaves as the latest schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Version {
    Unversioned,
    V1,
    V2,
}

impl Version {
    /// The schema this marker resolves to.
    pub fn schema(self) -> SchemaVersion {
        match self {
            Version::Unversioned => SchemaVersion::LATEST,
            Version::V1 => SchemaVersion::V1,
            Version::V2 => SchemaVersion::V2,
        }
    }
}

/// A registered `(format, version)` pair and its media type string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MediaDescriptor {
    pub format: Format,
    pub version: Version,
}

impl MediaDescriptor {
    pub const JSON: MediaDescriptor = MediaDescriptor::new(Format::Json, Version::Unversioned);
    pub const JSON_V1: MediaDescriptor = MediaDescriptor::new(Format::Json, Version::V1);
    pub const JSON_V2: MediaDescriptor = MediaDescriptor::new(Format::Json, Version::V2);
    pub const XML: MediaDescriptor = MediaDescriptor::new(Format::Xml, Version::Unversioned);
    pub const XML_V1: MediaDescriptor = MediaDescriptor::new(Format::Xml, Version::V1);
    pub const XML_V2: MediaDescriptor = MediaDescriptor::new(Format::Xml, Version::V2);

    /// Every registered descriptor. Each maps to a distinct media type.
    pub const ALL: [MediaDescriptor; 6] = [
        MediaDescriptor::JSON,
        MediaDescriptor::JSON_V1,
        MediaDescriptor::JSON_V2,
        MediaDescriptor::XML,
        MediaDescriptor::XML_V1,
        MediaDescriptor::XML_V2,
    ];

    pub const fn new(format: Format, version: Version) -> Self {
        Self { format, version }
    }

    /// The registered media type, lowercase.
    pub fn media_type(self) -> &'static str {
        match (self.format, self.version) {
            (Format::Json, Version::Unversioned) => "application/json",
            (Format::Json, Version::V1) => "application/vnd.acme.v1+json",
            (Format::Json, Version::V2) => "application/vnd.acme.v2+json",
            (Format::Xml, Version::Unversioned) => "application/xml",
            (Format::Xml, Version::V1) => "application/vnd.acme.v1+xml",
            (Format::Xml, Version::V2) => "application/vnd.acme.v2+xml",
        }
    }

    pub fn schema(self) -> SchemaVersion {
        self.version.schema()
    }

    /// Whether `media_type` names this descriptor.
    ///
    /// Compares the essence only: parameters after `;` are ignored and
    /// type/subtype are matched case-insensitively.
    pub fn matches(self, media_type: &str) -> bool {
        essence(media_type).eq_ignore_ascii_case(self.media_type())
    }

    /// Look up the descriptor registered for `media_type`.
    pub fn from_media_type(media_type: &str) -> Option<MediaDescriptor> {
        Self::ALL.into_iter().find(|d| d.matches(media_type))
    }
}

impl fmt::Display for MediaDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.media_type())
    }
}

/// Strip parameters and surrounding whitespace from a media type.
fn essence(media_type: &str) -> &str {
    media_type
        .split_once(';')
        .map_or(media_type, |(head, _)| head)
        .trim()
}
