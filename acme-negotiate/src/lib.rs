//! Versioned content negotiation for the acme person entity.
//!
//! Translates between the canonical [`Person`](acme_model::Person) and six
//! wire encodings (JSON and XML, each unversioned, v1 and v2), chosen by
//! media type:
//! - [`DecoderChain`] — ordered decoders, first media-type match wins
//! - [`EncoderTable`] — encoders keyed by the requested media type
//! - [`NegotiationEngine`] — the facade transport code calls
//!
//! The engine is stateless after construction. Transport concerns such as
//! reading bodies and writing status codes stay with the caller; see
//! [`NegotiationError::status_code`] for the status mapping.

mod charset;
mod decoder;
mod encoder;
mod engine;
mod error;
mod header;
mod media;
mod xml;

pub use charset::decode_text;
pub use decoder::{DECODER_ORDER, Decoder, DecoderChain};
pub use encoder::{ENCODER_ORDER, Encoded, Encoder, EncoderTable};
pub use engine::NegotiationEngine;
pub use error::{NegotiationError, NegotiationResult};
pub use header::{AcceptHeader, ContentType, MediaRange};
pub use media::{Format, MediaDescriptor, Version};
pub use xml::{XmlElement, XmlNode};
