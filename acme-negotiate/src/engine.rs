//! The negotiation facade handed to transport code.

use crate::decoder::DecoderChain;
use crate::encoder::{Encoded, EncoderTable};
use crate::error::NegotiationResult;
use crate::header::{AcceptHeader, ContentType};
use crate::media::MediaDescriptor;
use acme_model::Person;

/// Combines the decoder chain and encoder table behind one entry point.
///
/// Both tables are built once in [`NegotiationEngine::new`] and never
/// mutated, so a single engine can be shared by reference across threads.
#[derive(Debug, Clone, Default)]
pub struct NegotiationEngine {
    decoders: DecoderChain,
    encoders: EncoderTable,
}

impl NegotiationEngine {
    pub fn new() -> Self {
        Self {
            decoders: DecoderChain::new(),
            encoders: EncoderTable::new(),
        }
    }

    pub fn decoders(&self) -> &DecoderChain {
        &self.decoders
    }

    pub fn encoders(&self) -> &EncoderTable {
        &self.encoders
    }

    /// Decode a request body declared as `media_type` with an optional charset.
    pub fn decode(
        &self,
        bytes: &[u8],
        media_type: &str,
        charset: Option<&str>,
    ) -> NegotiationResult<Person> {
        self.decoders.decode(bytes, media_type, charset)
    }

    /// Decode using a raw `Content-Type` header value.
    pub fn decode_with_content_type(
        &self,
        bytes: &[u8],
        content_type: &str,
    ) -> NegotiationResult<Person> {
        let content_type = ContentType::parse(content_type);
        self.decode(bytes, &content_type.media_type, content_type.charset())
    }

    pub fn decode_collection(
        &self,
        bytes: &[u8],
        media_type: &str,
        charset: Option<&str>,
    ) -> NegotiationResult<Vec<Person>> {
        self.decoders.decode_collection(bytes, media_type, charset)
    }

    /// Encode for an exact requested media type.
    pub fn encode(&self, person: &Person, media_type: &str) -> NegotiationResult<Encoded> {
        self.encoders.select(media_type)?.encode(person)
    }

    pub fn encode_collection(
        &self,
        people: &[Person],
        media_type: &str,
    ) -> NegotiationResult<Encoded> {
        self.encoders.select(media_type)?.encode_collection(people)
    }

    /// Pick the registered media type a full `Accept` header prefers.
    pub fn negotiate(&self, accept: &str) -> NegotiationResult<MediaDescriptor> {
        self.encoders
            .negotiate(&AcceptHeader::parse(accept))
            .map(|encoder| encoder.descriptor())
    }

    pub fn encode_for_accept(&self, person: &Person, accept: &str) -> NegotiationResult<Encoded> {
        self.encoders
            .negotiate(&AcceptHeader::parse(accept))?
            .encode(person)
    }

    pub fn encode_collection_for_accept(
        &self,
        people: &[Person],
        accept: &str,
    ) -> NegotiationResult<Encoded> {
        self.encoders
            .negotiate(&AcceptHeader::parse(accept))?
            .encode_collection(people)
    }
}
