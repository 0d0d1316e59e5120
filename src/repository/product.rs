use diesel::prelude::*;

use crate::db::DbPool;
use crate::domain::product::{NewProduct, Product, UpdateProduct};
use crate::repository::errors::RepositoryResult;
use crate::repository::{ProductReader, ProductSearchQuery, ProductWriter};

/// Diesel implementation of [`ProductReader`] and [`ProductWriter`].
pub struct DieselProductRepository<'a> {
    pool: &'a DbPool,
}

impl<'a> DieselProductRepository<'a> {
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }
}

impl ProductReader for DieselProductRepository<'_> {
    fn get_by_id(&self, id: i32) -> RepositoryResult<Option<Product>> {
        use crate::models::product::Product as DbProduct;
        use crate::schema::products;

        let mut conn = self.pool.get()?;
        let product = products::table
            .find(id)
            .first::<DbProduct>(&mut conn)
            .optional()?;

        Ok(product.map(Into::into))
    }

    fn list(&self) -> RepositoryResult<Vec<Product>> {
        use crate::models::product::Product as DbProduct;
        use crate::schema::products;

        let mut conn = self.pool.get()?;
        let items = products::table
            .load::<DbProduct>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(items)
    }

    fn top_by_quantity(&self, limit: i64) -> RepositoryResult<Vec<Product>> {
        use crate::models::product::Product as DbProduct;
        use crate::schema::products;

        let mut conn = self.pool.get()?;
        let items = products::table
            .order(products::quantity_on_hand.desc())
            .limit(limit)
            .load::<DbProduct>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(items)
    }

    fn search(&self, query: ProductSearchQuery) -> RepositoryResult<Vec<Product>> {
        use crate::models::product::Product as DbProduct;
        use crate::schema::products;

        let mut conn = self.pool.get()?;

        // SQLite LIKE is case-insensitive for ASCII, so the patterns need
        // no explicit lowering. An entirely empty query keeps the statement
        // unfiltered and selects every row.
        let mut statement = products::table.into_boxed();
        if let Some(name) = &query.name {
            statement = statement.filter(products::name.like(format!("%{name}%")));
        }
        if let Some(manufacturer) = &query.manufacturer {
            statement =
                statement.filter(products::manufacturer.like(format!("%{manufacturer}%")));
        }
        if let Some(sku) = &query.sku {
            statement = statement.filter(products::sku.like(format!("%{sku}%")));
        }

        let items = statement
            .load::<DbProduct>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(items)
    }
}

impl ProductWriter for DieselProductRepository<'_> {
    fn create(&self, new_product: &NewProduct) -> RepositoryResult<Product> {
        use crate::models::product::{NewProduct as DbNewProduct, Product as DbProduct};
        use crate::schema::products;

        let mut conn = self.pool.get()?;
        let insertable: DbNewProduct = new_product.into();
        let created = diesel::insert_into(products::table)
            .values(&insertable)
            .get_result::<DbProduct>(&mut conn)?;

        Ok(created.into())
    }

    fn update(&self, product_id: i32, updates: &UpdateProduct) -> RepositoryResult<Product> {
        use crate::models::product::{Product as DbProduct, UpdateProduct as DbUpdateProduct};
        use crate::schema::products;

        let mut conn = self.pool.get()?;
        let db_updates: DbUpdateProduct = updates.into();

        // Zero matched rows surfaces as NotFound rather than succeeding
        // silently.
        let updated = diesel::update(products::table.find(product_id))
            .set(&db_updates)
            .get_result::<DbProduct>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete(&self, product_id: i32) -> RepositoryResult<()> {
        use crate::schema::products;

        let mut conn = self.pool.get()?;

        // Rows-affected is not inspected; deleting an id that was never
        // stored is a no-op.
        diesel::delete(products::table.find(product_id)).execute(&mut conn)?;
        Ok(())
    }
}
