//! Outbound side: the encoder table keyed by media type.

use crate::error::{NegotiationError, NegotiationResult};
use crate::header::AcceptHeader;
use crate::media::{Format, MediaDescriptor};
use crate::xml::write_text_element;
use acme_model::{Person, VersionedPerson};
use serde::Serialize;
use tracing::debug;

/// Encoder declaration order. Exact lookups take the first match; header
/// negotiation breaks quality ties in this order.
pub const ENCODER_ORDER: [MediaDescriptor; 6] = [
    MediaDescriptor::JSON,
    MediaDescriptor::JSON_V1,
    MediaDescriptor::JSON_V2,
    MediaDescriptor::XML,
    MediaDescriptor::XML_V1,
    MediaDescriptor::XML_V2,
];

const XML_ENTITY_TAG: &str = "person";
const XML_COLLECTION_TAG: &str = "persons";

/// A fully rendered response body and the content type to send with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoded {
    pub body: Vec<u8>,
    pub descriptor: MediaDescriptor,
}

impl Encoded {
    /// The exact registered media type of the encoder that produced the body.
    pub fn content_type(&self) -> &'static str {
        self.descriptor.media_type()
    }

    /// `Content-Type` header value. XML output is always UTF-8 and says so.
    pub fn header_value(&self) -> String {
        match self.descriptor.format {
            Format::Json => self.content_type().to_string(),
            Format::Xml => format!("{}; charset=UTF-8", self.content_type()),
        }
    }
}

/// A single registered encoder, tagged by the descriptor it produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Encoder {
    descriptor: MediaDescriptor,
}

impl Encoder {
    pub const fn new(descriptor: MediaDescriptor) -> Self {
        Self { descriptor }
    }

    pub fn descriptor(&self) -> MediaDescriptor {
        self.descriptor
    }

    /// Whether this encoder produces the requested media type.
    pub fn produces(&self, media_type: &str) -> bool {
        self.descriptor.matches(media_type)
    }

    fn versioned(&self, person: &Person) -> VersionedPerson {
        VersionedPerson::from_canonical(self.descriptor.schema(), person)
    }

    pub fn encode(&self, person: &Person) -> NegotiationResult<Encoded> {
        let versioned = self.versioned(person);
        let body = match self.descriptor.format {
            Format::Json => to_json(&versioned)?,
            Format::Xml => {
                let mut out = String::new();
                write_person_xml(&mut out, &versioned);
                out.into_bytes()
            }
        };
        Ok(self.wrap(body))
    }

    /// Encode people in order inside a JSON array or a `<persons>` element.
    pub fn encode_collection(&self, people: &[Person]) -> NegotiationResult<Encoded> {
        let versioned: Vec<VersionedPerson> = people.iter().map(|p| self.versioned(p)).collect();
        let body = match self.descriptor.format {
            Format::Json => to_json(&versioned)?,
            Format::Xml => {
                let mut out = String::new();
                out.push_str(&format!("<{XML_COLLECTION_TAG}>"));
                for person in &versioned {
                    write_person_xml(&mut out, person);
                }
                out.push_str(&format!("</{XML_COLLECTION_TAG}>"));
                out.into_bytes()
            }
        };
        Ok(self.wrap(body))
    }

    fn wrap(&self, body: Vec<u8>) -> Encoded {
        Encoded {
            body,
            descriptor: self.descriptor,
        }
    }
}

/// The fixed encoder table.
#[derive(Debug, Clone)]
pub struct EncoderTable {
    encoders: Vec<Encoder>,
}

impl EncoderTable {
    /// Build the table in [`ENCODER_ORDER`].
    pub fn new() -> Self {
        Self {
            encoders: ENCODER_ORDER.into_iter().map(Encoder::new).collect(),
        }
    }

    pub fn encoders(&self) -> &[Encoder] {
        &self.encoders
    }

    /// The first encoder producing exactly `media_type`.
    pub fn select(&self, media_type: &str) -> NegotiationResult<&Encoder> {
        match self.encoders.iter().find(|e| e.produces(media_type)) {
            Some(encoder) => {
                debug!("Encoding as {}", encoder.descriptor());
                Ok(encoder)
            }
            None => {
                debug!("No encoder registered for {:?}", media_type);
                Err(NegotiationError::NotAcceptable(media_type.to_string()))
            }
        }
    }

    /// The encoder with the highest non-zero quality under `accept`.
    /// Equal qualities resolve to the earlier table entry.
    pub fn negotiate(&self, accept: &AcceptHeader) -> NegotiationResult<&Encoder> {
        let mut best: Option<(&Encoder, f32)> = None;
        for encoder in &self.encoders {
            let quality = accept.quality(encoder.descriptor());
            if quality > 0.0 && best.is_none_or(|(_, q)| quality > q) {
                best = Some((encoder, quality));
            }
        }
        match best {
            Some((encoder, quality)) => {
                debug!("Negotiated {} (q={})", encoder.descriptor(), quality);
                Ok(encoder)
            }
            None => {
                let requested = accept
                    .ranges()
                    .iter()
                    .map(|r| format!("{}/{}", r.main_type, r.sub_type))
                    .collect::<Vec<_>>()
                    .join(", ");
                debug!("No encoder acceptable for [{}]", requested);
                Err(NegotiationError::NotAcceptable(requested))
            }
        }
    }
}

impl Default for EncoderTable {
    fn default() -> Self {
        Self::new()
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> NegotiationResult<Vec<u8>> {
    serde_json::to_vec(value).map_err(|e| NegotiationError::Encode(e.to_string()))
}

fn write_person_xml(out: &mut String, person: &VersionedPerson) {
    out.push_str(&format!("<{XML_ENTITY_TAG}>"));
    write_text_element(out, "name", person.name());
    write_text_element(out, "age", &person.age().to_string());
    if let Some(married) = person.married() {
        write_text_element(out, "married", if married { "true" } else { "false" });
    }
    out.push_str(&format!("</{XML_ENTITY_TAG}>"));
}
