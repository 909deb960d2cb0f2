//! Inbound side: the ordered decoder chain.

use crate::charset::decode_text;
use crate::error::{NegotiationError, NegotiationResult};
use crate::media::{Format, MediaDescriptor};
use crate::xml::XmlElement;
use acme_model::{Person, PersonV1, PersonV2, SchemaVersion, VersionedPerson};
use serde::de::DeserializeOwned;
use tracing::debug;

/// Decoder priority. The chain stops at the first entry whose media type
/// matches; later entries are never consulted.
pub const DECODER_ORDER: [MediaDescriptor; 6] = [
    MediaDescriptor::XML,
    MediaDescriptor::XML_V1,
    MediaDescriptor::XML_V2,
    MediaDescriptor::JSON,
    MediaDescriptor::JSON_V1,
    MediaDescriptor::JSON_V2,
];

/// A single registered decoder, tagged by the descriptor it serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decoder {
    descriptor: MediaDescriptor,
}

impl Decoder {
    pub const fn new(descriptor: MediaDescriptor) -> Self {
        Self { descriptor }
    }

    pub fn descriptor(&self) -> MediaDescriptor {
        self.descriptor
    }

    /// Whether this decoder handles the declared media type.
    pub fn accepts(&self, media_type: &str) -> bool {
        self.descriptor.matches(media_type)
    }

    /// Decode a single person.
    pub fn decode(&self, bytes: &[u8], charset: Option<&str>) -> NegotiationResult<Person> {
        let text = decode_text(bytes, charset)?;
        let schema = self.descriptor.schema();
        match self.descriptor.format {
            Format::Json => person_from_json(&text, schema),
            Format::Xml => person_from_xml(&XmlElement::parse(&text)?, schema),
        }
    }

    /// Decode an ordered collection: a JSON array, or an XML root whose
    /// child elements are each a person.
    pub fn decode_collection(
        &self,
        bytes: &[u8],
        charset: Option<&str>,
    ) -> NegotiationResult<Vec<Person>> {
        let text = decode_text(bytes, charset)?;
        let schema = self.descriptor.schema();
        match self.descriptor.format {
            Format::Json => match schema {
                SchemaVersion::V1 => parse_json::<Vec<PersonV1>>(&text)
                    .map(|people| people.into_iter().map(Person::from).collect()),
                SchemaVersion::V2 => parse_json::<Vec<PersonV2>>(&text)
                    .map(|people| people.into_iter().map(Person::from).collect()),
            },
            Format::Xml => XmlElement::parse(&text)?
                .elements()
                .map(|element| person_from_xml(element, schema))
                .collect(),
        }
    }
}

/// The fixed, ordered list of decoders.
#[derive(Debug, Clone)]
pub struct DecoderChain {
    decoders: Vec<Decoder>,
}

impl DecoderChain {
    /// Build the chain in [`DECODER_ORDER`].
    pub fn new() -> Self {
        Self {
            decoders: DECODER_ORDER.into_iter().map(Decoder::new).collect(),
        }
    }

    pub fn decoders(&self) -> &[Decoder] {
        &self.decoders
    }

    /// The first decoder accepting `media_type`.
    pub fn select(&self, media_type: &str) -> NegotiationResult<&Decoder> {
        match self.decoders.iter().find(|d| d.accepts(media_type)) {
            Some(decoder) => {
                debug!("Decoding {} payload", decoder.descriptor());
                Ok(decoder)
            }
            None => {
                debug!("No decoder registered for {:?}", media_type);
                Err(NegotiationError::UnsupportedMediaType(media_type.to_string()))
            }
        }
    }

    pub fn decode(
        &self,
        bytes: &[u8],
        media_type: &str,
        charset: Option<&str>,
    ) -> NegotiationResult<Person> {
        self.select(media_type)?.decode(bytes, charset)
    }

    pub fn decode_collection(
        &self,
        bytes: &[u8],
        media_type: &str,
        charset: Option<&str>,
    ) -> NegotiationResult<Vec<Person>> {
        self.select(media_type)?.decode_collection(bytes, charset)
    }
}

impl Default for DecoderChain {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_json<T: DeserializeOwned>(text: &str) -> NegotiationResult<T> {
    serde_json::from_str(text)
        .map_err(|e| NegotiationError::malformed(format!("invalid JSON payload: {e}")))
}

fn person_from_json(text: &str, schema: SchemaVersion) -> NegotiationResult<Person> {
    match schema {
        SchemaVersion::V1 => parse_json::<PersonV1>(text).map(Person::from),
        SchemaVersion::V2 => parse_json::<PersonV2>(text).map(Person::from),
    }
}

/// Extract one person from an element by tag name. A missing tag reads as
/// `""`, which is a valid name but fails the numeric and boolean fields.
fn person_from_xml(element: &XmlElement, schema: SchemaVersion) -> NegotiationResult<Person> {
    let name = element.find_text("name");
    let age = parse_age(&element.find_text("age"))?;
    let versioned = match schema {
        SchemaVersion::V1 => VersionedPerson::V1(PersonV1 { name, age }),
        SchemaVersion::V2 => VersionedPerson::V2(PersonV2 {
            name,
            age,
            married: parse_married(&element.find_text("married"))?,
        }),
    };
    Ok(versioned.into_canonical())
}

fn parse_age(raw: &str) -> NegotiationResult<i32> {
    raw.trim()
        .parse()
        .map_err(|_| NegotiationError::malformed(format!("age is not an integer: {raw:?}")))
}

fn parse_married(raw: &str) -> NegotiationResult<bool> {
    match raw.trim() {
        v if v.eq_ignore_ascii_case("true") => Ok(true),
        v if v.eq_ignore_ascii_case("false") => Ok(false),
        _ => Err(NegotiationError::malformed(format!(
            "married is not a boolean: {raw:?}"
        ))),
    }
}
