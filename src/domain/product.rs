use serde::{Deserialize, Serialize};

/// A stored product. `id == 0` marks an entity that has not been persisted
/// yet; the repository is the only place identifiers are assigned.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(default)]
    pub id: i32,
    pub manufacturer: String,
    pub sku: String,
    pub upc: String,
    /// Decimal-formatted price, kept as a string end to end so the exact
    /// representation survives the store round-trip.
    pub price_per_unit: String,
    pub quantity_on_hand: i32,
    pub name: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewProduct {
    pub manufacturer: String,
    pub sku: String,
    pub upc: String,
    pub price_per_unit: String,
    pub quantity_on_hand: i32,
    pub name: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct UpdateProduct {
    pub manufacturer: String,
    pub sku: String,
    pub upc: String,
    pub price_per_unit: String,
    pub quantity_on_hand: i32,
    pub name: String,
}

impl From<&Product> for NewProduct {
    fn from(product: &Product) -> Self {
        Self {
            manufacturer: product.manufacturer.clone(),
            sku: product.sku.clone(),
            upc: product.upc.clone(),
            price_per_unit: product.price_per_unit.clone(),
            quantity_on_hand: product.quantity_on_hand,
            name: product.name.clone(),
        }
    }
}

impl From<&Product> for UpdateProduct {
    fn from(product: &Product) -> Self {
        Self {
            manufacturer: product.manufacturer.clone(),
            sku: product.sku.clone(),
            upc: product.upc.clone(),
            price_per_unit: product.price_per_unit.clone(),
            quantity_on_hand: product.quantity_on_hand,
            name: product.name.clone(),
        }
    }
}
