pub mod products;
pub mod receipts;
