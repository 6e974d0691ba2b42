//! Catalog domain: filter parsing, SQL building, row shaping and the
//! cache-first read coordinator.

pub mod filter;
pub mod query;
pub mod service;
pub mod shape;
pub mod store;

pub use filter::ProductFilter;
pub use service::CatalogService;
pub use shape::{CategoryFacets, PagedResult, ProductRecord};
pub use store::{PgProductStore, ProductStore};
