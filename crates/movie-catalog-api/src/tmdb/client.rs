use std::sync::Arc;

use async_trait::async_trait;
use movie_catalog_config::TmdbConfig;
use movie_catalog_models::{
    Credits, ListCategory, MovieDetails, MovieId, MovieSummary, Page, Video, VideoList,
};
use reqwest::Client;
use tracing::debug;

use crate::error::CatalogError;
use crate::tmdb::api;
use crate::tmdb::trailer::pick_trailer;
use crate::traits::MovieCatalog;

/// Language used for the second-chance trailer lookup when the configured
/// language has none.
const FALLBACK_LANGUAGE: &str = "en-US";

/// Everything the detail view needs, fetched as one joined bundle.
#[derive(Debug, Clone)]
pub struct MovieBundle {
    pub details: MovieDetails,
    pub credits: Credits,
    pub trailer: Option<Video>,
}

#[derive(Clone)]
pub struct TmdbClient {
    client: Arc<Client>,
    api_base: String,
    image_base: String,
    api_key: String,
    language: String,
}

impl TmdbClient {
    pub fn new(config: &TmdbConfig, api_key: String) -> Self {
        Self {
            client: Arc::new(Client::new()),
            api_base: config.api_base.trim_end_matches('/').to_string(),
            image_base: config.image_base.trim_end_matches('/').to_string(),
            api_key,
            language: config.language.clone(),
        }
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// Fetch details, credits, and videos concurrently; all three must
    /// succeed or the first failure aborts the bundle. Trailer selection
    /// falls back to the en-US listing when the configured language has no
    /// trailer.
    pub async fn detail_bundle(&self, id: MovieId) -> Result<MovieBundle, CatalogError> {
        let (details, credits, videos) =
            tokio::try_join!(self.details(id), self.credits(id), self.videos(id, None))?;

        let trailer = match pick_trailer(&videos.results, Some(&self.language)) {
            Some(video) => Some(video.clone()),
            None => {
                debug!(%id, "no trailer for configured language, trying fallback listing");
                let fallback = self.videos(id, Some(FALLBACK_LANGUAGE)).await?;
                pick_trailer(&fallback.results, None).cloned()
            }
        };

        Ok(MovieBundle { details, credits, trailer })
    }

    pub fn poster_url(&self, path: Option<&str>) -> Option<String> {
        self.image_url("w500", path)
    }

    pub fn profile_url(&self, path: Option<&str>) -> Option<String> {
        self.image_url("w185", path)
    }

    pub fn backdrop_url(&self, path: Option<&str>) -> Option<String> {
        self.image_url("original", path)
    }

    // A missing path means the catalog has no artwork; rendering a
    // placeholder is the caller's decision.
    fn image_url(&self, size: &str, path: Option<&str>) -> Option<String> {
        path.map(|p| format!("{}/{}{}", self.image_base, size, p))
    }
}

#[async_trait]
impl MovieCatalog for TmdbClient {
    async fn list(&self, category: ListCategory, page: u32) -> Result<Page<MovieSummary>, CatalogError> {
        api::list_movies(&self.client, &self.api_base, &self.api_key, &self.language, category, page).await
    }

    async fn search(&self, query: &str, page: u32) -> Result<Page<MovieSummary>, CatalogError> {
        api::search_movies(&self.client, &self.api_base, &self.api_key, &self.language, query, page).await
    }

    async fn details(&self, id: MovieId) -> Result<MovieDetails, CatalogError> {
        api::get_movie(&self.client, &self.api_base, &self.api_key, &self.language, id).await
    }

    async fn credits(&self, id: MovieId) -> Result<Credits, CatalogError> {
        api::get_credits(&self.client, &self.api_base, &self.api_key, &self.language, id).await
    }

    async fn videos(&self, id: MovieId, language: Option<&str>) -> Result<VideoList, CatalogError> {
        let language = language.unwrap_or(&self.language);
        api::get_videos(&self.client, &self.api_base, &self.api_key, language, id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client() -> TmdbClient {
        let config = TmdbConfig {
            api_base: "http://127.0.0.1:1/3/".to_string(),
            image_base: "https://image.tmdb.org/t/p/".to_string(),
            language: "fr-FR".to_string(),
        };
        TmdbClient::new(&config, "secret".to_string())
    }

    #[test]
    fn image_urls_join_base_size_and_path() {
        let client = test_client();
        assert_eq!(
            client.poster_url(Some("/abc.jpg")).as_deref(),
            Some("https://image.tmdb.org/t/p/w500/abc.jpg")
        );
        assert_eq!(
            client.profile_url(Some("/p.jpg")).as_deref(),
            Some("https://image.tmdb.org/t/p/w185/p.jpg")
        );
        assert_eq!(
            client.backdrop_url(Some("/b.jpg")).as_deref(),
            Some("https://image.tmdb.org/t/p/original/b.jpg")
        );
        assert_eq!(client.poster_url(None), None);
    }

    #[test]
    fn trailing_slashes_are_normalized() {
        let client = test_client();
        assert_eq!(client.api_base, "http://127.0.0.1:1/3");
        assert_eq!(client.image_base, "https://image.tmdb.org/t/p");
    }
}
