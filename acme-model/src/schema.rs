use crate::Person;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A published revision of the person wire schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaVersion {
    /// `name` and `age` only.
    V1,
    /// Adds `married`.
    V2,
}

impl SchemaVersion {
    /// The newest schema. Unversioned media types resolve to this.
    pub const LATEST: SchemaVersion = SchemaVersion::V2;

    /// Whether payloads of this version carry the `married` field.
    pub fn has_married(self) -> bool {
        matches!(self, SchemaVersion::V2)
    }
}

impl fmt::Display for SchemaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaVersion::V1 => f.write_str("v1"),
            SchemaVersion::V2 => f.write_str("v2"),
        }
    }
}

/// Version 1 of the person schema. Has no notion of marital status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonV1 {
    pub name: String,
    pub age: i32,
}

/// Version 2 of the person schema. Field-for-field identical to [`Person`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonV2 {
    pub name: String,
    pub age: i32,
    pub married: bool,
}

impl From<PersonV1> for Person {
    /// V1 never recorded marital status, so it is always `false`.
    fn from(v1: PersonV1) -> Self {
        Self {
            name: v1.name,
            age: v1.age,
            married: false,
        }
    }
}

impl From<PersonV2> for Person {
    fn from(v2: PersonV2) -> Self {
        Self {
            name: v2.name,
            age: v2.age,
            married: v2.married,
        }
    }
}

impl From<&Person> for PersonV1 {
    fn from(person: &Person) -> Self {
        Self {
            name: person.name.clone(),
            age: person.age,
        }
    }
}

impl From<&Person> for PersonV2 {
    fn from(person: &Person) -> Self {
        Self {
            name: person.name.clone(),
            age: person.age,
            married: person.married,
        }
    }
}

/// A person in one of the versioned wire schemas.
///
/// Serializes untagged, so the JSON form is exactly the inner schema's object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum VersionedPerson {
    V1(PersonV1),
    V2(PersonV2),
}

impl VersionedPerson {
    /// Project a canonical person onto the given schema version.
    /// Dropping `married` for V1 is expected, not an error.
    pub fn from_canonical(version: SchemaVersion, person: &Person) -> Self {
        match version {
            SchemaVersion::V1 => VersionedPerson::V1(person.into()),
            SchemaVersion::V2 => VersionedPerson::V2(person.into()),
        }
    }

    pub fn version(&self) -> SchemaVersion {
        match self {
            VersionedPerson::V1(_) => SchemaVersion::V1,
            VersionedPerson::V2(_) => SchemaVersion::V2,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            VersionedPerson::V1(p) => &p.name,
            VersionedPerson::V2(p) => &p.name,
        }
    }

    pub fn age(&self) -> i32 {
        match self {
            VersionedPerson::V1(p) => p.age,
            VersionedPerson::V2(p) => p.age,
        }
    }

    /// `None` for schema versions without the field.
    pub fn married(&self) -> Option<bool> {
        match self {
            VersionedPerson::V1(_) => None,
            VersionedPerson::V2(p) => Some(p.married),
        }
    }

    pub fn into_canonical(self) -> Person {
        match self {
            VersionedPerson::V1(p) => p.into(),
            VersionedPerson::V2(p) => p.into(),
        }
    }
}

impl From<VersionedPerson> for Person {
    fn from(versioned: VersionedPerson) -> Self {
        versioned.into_canonical()
    }
}
