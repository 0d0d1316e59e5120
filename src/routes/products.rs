use actix_web::{web, HttpResponse, Responder};
use log::error;

use crate::db::DbPool;
use crate::domain::product::{NewProduct, Product, UpdateProduct};
use crate::repository::errors::RepositoryError;
use crate::repository::product::DieselProductRepository;
use crate::repository::{ProductReader, ProductWriter};

/// GET on the collection route: every stored product as a JSON array.
pub async fn list_products(pool: web::Data<DbPool>) -> impl Responder {
    let repo = DieselProductRepository::new(&pool);

    match repo.list() {
        Ok(products) => HttpResponse::Ok().json(products),
        Err(e) => {
            error!("Failed to list products: {e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// POST on the collection route. The store is the only authority for
/// identifiers, so a payload that carries a non-zero id is rejected before
/// anything touches the pool.
pub async fn create_product(
    pool: web::Data<DbPool>,
    product: web::Json<Product>,
) -> impl Responder {
    if product.id != 0 {
        return HttpResponse::BadRequest().finish();
    }

    let repo = DieselProductRepository::new(&pool);
    let new_product: NewProduct = (&*product).into();

    match repo.create(&new_product) {
        Ok(_) => HttpResponse::Created().finish(),
        Err(e) => {
            error!("Failed to create product: {e}");
            HttpResponse::BadRequest().finish()
        }
    }
}

/// GET on the item route.
pub async fn get_product(pool: web::Data<DbPool>, id: web::Path<String>) -> impl Responder {
    let Some(product_id) = parse_product_id(&id) else {
        return HttpResponse::NotFound().finish();
    };

    let repo = DieselProductRepository::new(&pool);

    match repo.get_by_id(product_id) {
        Ok(Some(product)) => HttpResponse::Ok().json(product),
        Ok(None) => HttpResponse::NotFound().finish(),
        Err(e) => {
            error!("Failed to get product {product_id}: {e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// PUT on the item route: full-row overwrite. The path id addresses the
/// entity; the payload id must agree with it.
pub async fn update_product(
    pool: web::Data<DbPool>,
    id: web::Path<String>,
    product: web::Json<Product>,
) -> impl Responder {
    let Some(product_id) = parse_product_id(&id) else {
        return HttpResponse::NotFound().finish();
    };

    let repo = DieselProductRepository::new(&pool);

    match repo.get_by_id(product_id) {
        Ok(Some(_)) => {}
        Ok(None) => return HttpResponse::NotFound().finish(),
        Err(e) => {
            error!("Failed to get product {product_id}: {e}");
            return HttpResponse::InternalServerError().finish();
        }
    }

    if product.id != product_id {
        return HttpResponse::BadRequest().finish();
    }

    let updates: UpdateProduct = (&*product).into();

    match repo.update(product_id, &updates) {
        Ok(_) => HttpResponse::Ok().finish(),
        Err(RepositoryError::NotFound) => HttpResponse::NotFound().finish(),
        Err(e) => {
            error!("Failed to update product {product_id}: {e}");
            HttpResponse::BadRequest().finish()
        }
    }
}

/// DELETE on the item route. Removing an id that was never stored still
/// answers 200; only a store failure is surfaced.
pub async fn delete_product(pool: web::Data<DbPool>, id: web::Path<String>) -> impl Responder {
    let Some(product_id) = parse_product_id(&id) else {
        return HttpResponse::NotFound().finish();
    };

    let repo = DieselProductRepository::new(&pool);

    match repo.delete(product_id) {
        Ok(()) => HttpResponse::Ok().finish(),
        Err(e) => {
            error!("Failed to delete product {product_id}: {e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// OPTIONS on either product route: accepted with an empty 200 whether or
/// not the request is a CORS preflight. Preflights never reach this
/// handler; the CORS middleware answers them itself.
pub async fn accept_options() -> impl Responder {
    HttpResponse::Ok().finish()
}

/// Catch-all for paths with extra segments after the item id.
pub async fn reject_nested_path() -> impl Responder {
    HttpResponse::BadRequest().finish()
}

/// A trailing path segment that does not parse as an integer addresses no
/// resource, so the caller gets 404 rather than the extractor's usual 400.
fn parse_product_id(segment: &str) -> Option<i32> {
    segment.parse::<i32>().ok()
}
