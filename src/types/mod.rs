pub use self::catalog::Catalog;
pub use self::project::Project;

mod catalog;
mod project;
