use diesel::prelude::*;

use crate::domain::product::{
    NewProduct as DomainNewProduct, Product as DomainProduct,
    UpdateProduct as DomainUpdateProduct,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::products)]
/// Diesel model for [`crate::domain::product::Product`].
pub struct Product {
    pub id: i32,
    pub manufacturer: String,
    pub sku: String,
    pub upc: String,
    pub price_per_unit: String,
    pub quantity_on_hand: i32,
    pub name: String,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::products)]
/// Insertable form of [`Product`]. Carries no id; the store assigns one.
pub struct NewProduct<'a> {
    pub manufacturer: &'a str,
    pub sku: &'a str,
    pub upc: &'a str,
    pub price_per_unit: &'a str,
    pub quantity_on_hand: i32,
    pub name: &'a str,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::products)]
/// Full-row overwrite used when updating a [`Product`] record.
pub struct UpdateProduct<'a> {
    pub manufacturer: &'a str,
    pub sku: &'a str,
    pub upc: &'a str,
    pub price_per_unit: &'a str,
    pub quantity_on_hand: i32,
    pub name: &'a str,
}

impl From<Product> for DomainProduct {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            manufacturer: product.manufacturer,
            sku: product.sku,
            upc: product.upc,
            price_per_unit: product.price_per_unit,
            quantity_on_hand: product.quantity_on_hand,
            name: product.name,
        }
    }
}

impl<'a> From<&'a DomainNewProduct> for NewProduct<'a> {
    fn from(product: &'a DomainNewProduct) -> Self {
        Self {
            manufacturer: product.manufacturer.as_str(),
            sku: product.sku.as_str(),
            upc: product.upc.as_str(),
            price_per_unit: product.price_per_unit.as_str(),
            quantity_on_hand: product.quantity_on_hand,
            name: product.name.as_str(),
        }
    }
}

impl<'a> From<&'a DomainUpdateProduct> for UpdateProduct<'a> {
    fn from(product: &'a DomainUpdateProduct) -> Self {
        Self {
            manufacturer: product.manufacturer.as_str(),
            sku: product.sku.as_str(),
            upc: product.upc.as_str(),
            price_per_unit: product.price_per_unit.as_str(),
            quantity_on_hand: product.quantity_on_hand,
            name: product.name.as_str(),
        }
    }
}
