pub mod quote;

pub use quote::QuoteRecord;
