pub mod array_field;
pub mod venue_catalog;

pub use venue_catalog::VenueCatalogService;
