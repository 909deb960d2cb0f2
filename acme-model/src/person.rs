use serde::{Deserialize, Serialize};

/// The canonical person entity.
///
/// Every decoded payload ends up here regardless of the wire format or
/// schema version it arrived in. `married` is always present; schema
/// versions that do not carry it map to `false`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub age: i32,
    pub married: bool,
}

impl Person {
    pub fn new(name: impl Into<String>, age: i32, married: bool) -> Self {
        Self {
            name: name.into(),
            age,
            married,
        }
    }
}
