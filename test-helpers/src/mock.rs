//! Demo listings for the development server
//!
//! The dataset mirrors a small rental portfolio across several cities so the
//! dashboard table, edit form and delete flow all have something to act on.

use crate::TestApp;
use anyhow::Result;
use payloads::{Property, PropertyDetails};
use rust_decimal::Decimal;

const DEMO_LISTINGS: [(&str, &str, i64, u32, u32, &str); 10] = [
    ("Cozy Apartment", "New York", 1200, 2, 1, "photo-1522708323590-d24dbb6b0267"),
    ("Luxury Villa", "Los Angeles", 5000, 5, 4, "photo-1600596542815-ffad4c1539a9"),
    ("Modern Condo", "Chicago", 2000, 3, 2, "photo-1567496898669-ee935f5f647a"),
    ("Beach House", "Miami", 3500, 4, 3, "photo-1499793983690-e29da59ef1c2"),
    ("Suburban Home", "Austin", 1800, 3, 2, "photo-1564013799919-ab600027ffc6"),
    ("Downtown Loft", "San Francisco", 2500, 2, 2, "photo-1560448204-e02f11c3d0e2"),
    ("Country Cottage", "Nashville", 1500, 2, 1, "photo-1518709268805-4e9042af9f23"),
    ("Penthouse Suite", "Seattle", 8000, 4, 3, "photo-1502672260266-1c1ef2d93688"),
    ("Historic Brownstone", "Boston", 3000, 3, 2, "photo-1600047509807-ba8f99d2cdde"),
    ("Urban Studio", "Portland", 1000, 1, 1, "photo-1554995207-c18c203602cb"),
];

pub fn demo_listings() -> Vec<PropertyDetails> {
    DEMO_LISTINGS
        .iter()
        .map(|(name, location, price, bedrooms, bathrooms, photo)| {
            PropertyDetails {
                name: name.to_string(),
                price: Decimal::from(*price),
                location: location.to_string(),
                bedrooms: *bedrooms,
                bathrooms: *bathrooms,
                image_url: Some(format!(
                    "https://images.unsplash.com/{photo}?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=60"
                )),
            }
        })
        .collect()
}

/// Listings created through the API so ids come from the server.
pub struct DevDataset {
    pub properties: Vec<Property>,
}

impl DevDataset {
    pub async fn create(app: &TestApp) -> Result<Self> {
        let mut properties = Vec::new();
        for details in demo_listings() {
            properties.push(app.client.create_property(&details).await?);
        }
        Ok(Self { properties })
    }

    pub fn print_summary(&self) {
        tracing::info!("📋 {} demo listings:", self.properties.len());
        for property in &self.properties {
            tracing::info!(
                "   #{} {} ({}) ${}/mo",
                property.id,
                property.name,
                property.location,
                property.price
            );
        }
    }
}
