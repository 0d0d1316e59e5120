pub mod product;
pub mod receipt;
