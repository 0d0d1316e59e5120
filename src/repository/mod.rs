use crate::domain::product::{NewProduct, Product, UpdateProduct};
use crate::repository::errors::RepositoryResult;

pub mod errors;
pub mod product;

/// Number of rows returned by the "top products" report when the caller
/// does not ask for a different cutoff.
pub const DEFAULT_TOP_PRODUCTS: i64 = 10;

/// Substring filters applied to a product search. Each non-empty field
/// becomes a case-insensitive `LIKE` condition; the conditions are AND-ed
/// in the order name, manufacturer, sku. With no fields set the search
/// selects every row.
#[derive(Debug, Clone, Default)]
pub struct ProductSearchQuery {
    pub name: Option<String>,
    pub manufacturer: Option<String>,
    pub sku: Option<String>,
}

impl ProductSearchQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into()).filter(|s| !s.is_empty());
        self
    }

    pub fn manufacturer(mut self, manufacturer: impl Into<String>) -> Self {
        self.manufacturer = Some(manufacturer.into()).filter(|s| !s.is_empty());
        self
    }

    pub fn sku(mut self, sku: impl Into<String>) -> Self {
        self.sku = Some(sku.into()).filter(|s| !s.is_empty());
        self
    }
}

pub trait ProductReader {
    fn get_by_id(&self, id: i32) -> RepositoryResult<Option<Product>>;
    fn list(&self) -> RepositoryResult<Vec<Product>>;
    fn top_by_quantity(&self, limit: i64) -> RepositoryResult<Vec<Product>>;
    fn search(&self, query: ProductSearchQuery) -> RepositoryResult<Vec<Product>>;
}

pub trait ProductWriter {
    fn create(&self, new_product: &NewProduct) -> RepositoryResult<Product>;
    fn update(&self, product_id: i32, updates: &UpdateProduct) -> RepositoryResult<Product>;
    fn delete(&self, product_id: i32) -> RepositoryResult<()>;
}
