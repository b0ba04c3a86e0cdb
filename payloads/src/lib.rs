mod api_client;
pub mod requests;

pub use api_client::{APIClient, ClientError, ok_body, ok_empty};
pub use requests::{DraftError, PropertyDraft, PropertyField};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Server-assigned identifier of a property listing.
///
/// Displays as the bare number so it can be spliced into request paths.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(transparent)]
pub struct PropertyId(pub i64);

/// A rental listing without its identifier.
///
/// This is the body of both create and update requests. Numeric fields are
/// always sent as JSON numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyDetails {
    pub name: String,
    /// Monthly rent
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub location: String,
    pub bedrooms: u32,
    pub bathrooms: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// A listing as stored by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: PropertyId,
    #[serde(flatten)]
    pub details: PropertyDetails,
}

/// Whether a submission creates a new listing or updates an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(PropertyId),
}

impl FormMode {
    pub fn editing_id(&self) -> Option<PropertyId> {
        match self {
            Self::Create => None,
            Self::Edit(id) => Some(*id),
        }
    }
}

impl From<Option<PropertyId>> for FormMode {
    fn from(id: Option<PropertyId>) -> Self {
        id.map_or(Self::Create, Self::Edit)
    }
}

impl std::ops::Deref for Property {
    type Target = PropertyDetails;

    fn deref(&self) -> &Self::Target {
        &self.details
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::dec;

    #[test]
    fn property_reads_flat_server_json() {
        let json = r#"{"id":1,"name":"Lakeview","price":1200,
            "location":"Lakeside","bedrooms":2,"bathrooms":1}"#;
        let property: Property = serde_json::from_str(json).unwrap();
        assert_eq!(property.id, PropertyId(1));
        assert_eq!(property.name, "Lakeview");
        assert_eq!(property.price, dec!(1200));
        assert_eq!(property.image_url, None);
    }

    #[test]
    fn details_serialize_numbers_not_strings() {
        let details = PropertyDetails {
            name: "Loft".into(),
            price: dec!(1450.5),
            location: "Downtown".into(),
            bedrooms: 3,
            bathrooms: 2,
            image_url: None,
        };
        let value = serde_json::to_value(&details).unwrap();
        assert!(value["price"].is_number());
        assert_eq!(value["bedrooms"], serde_json::json!(3));
        assert_eq!(value["bathrooms"], serde_json::json!(2));
        assert!(value.get("image_url").is_none());
        assert!(value.get("id").is_none());
    }

    #[test]
    fn id_displays_as_path_segment() {
        assert_eq!(PropertyId(42).to_string(), "42");
    }
}
