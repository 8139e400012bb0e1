pub mod builder;
pub mod normalize;
pub mod types;

pub use builder::CatalogQueryBuilder;
pub use normalize::{hash_query, normalize_query};
pub use types::*;
