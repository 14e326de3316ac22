use async_trait::async_trait;
use movie_catalog_models::{Credits, ListCategory, MovieDetails, MovieId, MovieSummary, Page, VideoList};

use crate::error::CatalogError;

/// Read-only view of the external movie catalog. The CLI consumes the
/// catalog through this trait so views can be driven by a stub in tests.
#[async_trait]
pub trait MovieCatalog: Send + Sync {
    /// One page of a category rail.
    async fn list(&self, category: ListCategory, page: u32) -> Result<Page<MovieSummary>, CatalogError>;

    /// One page of free-text search results.
    async fn search(&self, query: &str, page: u32) -> Result<Page<MovieSummary>, CatalogError>;

    async fn details(&self, id: MovieId) -> Result<MovieDetails, CatalogError>;

    async fn credits(&self, id: MovieId) -> Result<Credits, CatalogError>;

    /// Video listing; `language` of None means the configured language.
    async fn videos(&self, id: MovieId, language: Option<&str>) -> Result<VideoList, CatalogError>;
}
