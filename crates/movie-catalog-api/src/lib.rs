pub mod error;
pub mod tmdb;
pub mod traits;

pub use error::CatalogError;
pub use tmdb::{pick_trailer, MovieBundle, TmdbClient};
pub use traits::MovieCatalog;
