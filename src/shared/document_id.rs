use std::fmt;
use std::str::FromStr;

use mongodb::bson::oid::ObjectId;

/// Identifier the store assigns on insert, exposed to clients as 24 hex chars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DocumentId(ObjectId);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("`{0}` is not a valid document id")]
pub struct InvalidDocumentId(pub String);

impl DocumentId {
    pub fn parse(raw: &str) -> Result<Self, InvalidDocumentId> {
        ObjectId::parse_str(raw)
            .map(Self)
            .map_err(|_| InvalidDocumentId(raw.to_string()))
    }

    pub fn object_id(&self) -> ObjectId {
        self.0
    }
}

impl From<ObjectId> for DocumentId {
    fn from(oid: ObjectId) -> Self {
        Self(oid)
    }
}

impl FromStr for DocumentId {
    type Err = InvalidDocumentId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_object_id() {
        let id = DocumentId::parse("507f1f77bcf86cd799439011").unwrap();
        assert_eq!(id.to_string(), "507f1f77bcf86cd799439011");
    }

    #[test]
    fn rejects_malformed_ids() {
        for raw in ["", "123", "not-an-id", "507f1f77bcf86cd79943901g", "507f1f77bcf86cd7994390111"] {
            assert_eq!(
                DocumentId::parse(raw),
                Err(InvalidDocumentId(raw.to_string())),
                "{raw}"
            );
        }
    }

    #[test]
    fn round_trips_through_object_id() {
        let oid = ObjectId::new();
        let id = DocumentId::from(oid);
        assert_eq!(id.object_id(), oid);
        assert_eq!(id.to_string().parse::<DocumentId>().unwrap(), id);
    }
}
