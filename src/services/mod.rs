pub mod catalog;
pub mod genres;
pub mod moods;
pub mod pagination;
pub mod providers;
pub mod query;

pub use catalog::CatalogService;
