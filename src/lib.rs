pub mod data;
pub mod display;
pub mod export;
pub mod types;

pub use data::{archived, catalog};
pub use types::{Catalog, Project};
