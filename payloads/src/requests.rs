use crate::{Property, PropertyDetails};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use std::str::FromStr;

/// The editable fields of a property, keyed by their form input names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyField {
    Name,
    Price,
    Location,
    Bedrooms,
    Bathrooms,
    ImageUrl,
}

impl PropertyField {
    pub const ALL: [PropertyField; 6] = [
        Self::Name,
        Self::Price,
        Self::Location,
        Self::Bedrooms,
        Self::Bathrooms,
        Self::ImageUrl,
    ];

    /// The `name` attribute of the matching form input.
    pub fn input_name(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Price => "price",
            Self::Location => "location",
            Self::Bedrooms => "bedrooms",
            Self::Bathrooms => "bathrooms",
            Self::ImageUrl => "image_url",
        }
    }

    pub fn from_input_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.input_name() == name)
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Price | Self::Bedrooms | Self::Bathrooms)
    }
}

/// Reason a draft cannot be turned into a request body.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    #[error("{} is required", .0.input_name())]
    Missing(PropertyField),
    #[error("price must be at least 1")]
    PriceTooLow,
}

/// The form's local, not yet submitted copy of a property.
///
/// Every field keeps the text exactly as typed so re-rendering never
/// rewrites an input. Numbers are coerced when the draft is read.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyDraft {
    pub name: String,
    pub price: String,
    pub location: String,
    pub bedrooms: String,
    pub bathrooms: String,
    pub image_url: String,
}

impl PropertyDraft {
    fn field_mut(&mut self, field: PropertyField) -> &mut String {
        match field {
            PropertyField::Name => &mut self.name,
            PropertyField::Price => &mut self.price,
            PropertyField::Location => &mut self.location,
            PropertyField::Bedrooms => &mut self.bedrooms,
            PropertyField::Bathrooms => &mut self.bathrooms,
            PropertyField::ImageUrl => &mut self.image_url,
        }
    }

    /// Apply one input edit.
    pub fn set(&mut self, field: PropertyField, raw: &str) {
        *self.field_mut(field) = raw.to_string();
    }

    /// Builder form of [`PropertyDraft::set`].
    pub fn with(mut self, field: PropertyField, raw: &str) -> Self {
        self.set(field, raw);
        self
    }

    /// Text to show in the input for `field`.
    pub fn value(&self, field: PropertyField) -> String {
        match field {
            PropertyField::Name => self.name.clone(),
            PropertyField::Price => self.price.clone(),
            PropertyField::Location => self.location.clone(),
            PropertyField::Bedrooms => self.bedrooms.clone(),
            PropertyField::Bathrooms => self.bathrooms.clone(),
            PropertyField::ImageUrl => self.image_url.clone(),
        }
    }

    /// Monthly rent, or `None` while the input is empty or not a number.
    pub fn price(&self) -> Option<Decimal> {
        parse_number(&self.price)
    }

    pub fn bedrooms(&self) -> Option<u32> {
        parse_count(&self.bedrooms)
    }

    pub fn bathrooms(&self) -> Option<u32> {
        parse_count(&self.bathrooms)
    }

    /// Convert to a request body, checking the same constraints the form
    /// inputs declare (required fields, price of at least 1).
    pub fn to_details(&self) -> Result<PropertyDetails, DraftError> {
        if self.name.trim().is_empty() {
            return Err(DraftError::Missing(PropertyField::Name));
        }
        let price =
            self.price().ok_or(DraftError::Missing(PropertyField::Price))?;
        if price < Decimal::ONE {
            return Err(DraftError::PriceTooLow);
        }
        if self.location.trim().is_empty() {
            return Err(DraftError::Missing(PropertyField::Location));
        }
        let bedrooms = self
            .bedrooms()
            .ok_or(DraftError::Missing(PropertyField::Bedrooms))?;
        let bathrooms = self
            .bathrooms()
            .ok_or(DraftError::Missing(PropertyField::Bathrooms))?;
        let image_url = match self.image_url.trim() {
            "" => None,
            url => Some(url.to_string()),
        };

        Ok(PropertyDetails {
            name: self.name.clone(),
            price,
            location: self.location.clone(),
            bedrooms,
            bathrooms,
            image_url,
        })
    }
}

impl From<&Property> for PropertyDraft {
    fn from(property: &Property) -> Self {
        Self {
            name: property.name.clone(),
            price: property.price.normalize().to_string(),
            location: property.location.clone(),
            bedrooms: property.bedrooms.to_string(),
            bathrooms: property.bathrooms.to_string(),
            image_url: property.image_url.clone().unwrap_or_default(),
        }
    }
}

/// Plain or scientific notation, as a number input accepts it.
fn parse_number(raw: &str) -> Option<Decimal> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .ok()
}

/// Room counts are non-negative whole numbers, so `2.0` reads as 2.
fn parse_count(raw: &str) -> Option<u32> {
    let count = parse_number(raw)?;
    if count.is_sign_negative() && !count.is_zero() {
        return None;
    }
    if !count.fract().is_zero() {
        return None;
    }
    count.to_u32()
}
