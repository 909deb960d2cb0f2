//! Person model for the acme content negotiation engine.
//!
//! Defines the types every wire codec maps to and from:
//! - [`Person`] — the canonical, version-agnostic entity
//! - [`PersonV1`] / [`PersonV2`] — the field sets of each published schema version
//! - [`SchemaVersion`] and [`VersionedPerson`] — version-tagged dispatch over the schemas
//!
//! Versioned values only exist while a payload is being decoded or encoded.
//! Everything past the codec boundary works with [`Person`].

mod person;
mod schema;

pub use person::Person;
pub use schema::{PersonV1, PersonV2, SchemaVersion, VersionedPerson};
