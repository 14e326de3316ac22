use movie_catalog_models::{Credits, ListCategory, MovieDetails, MovieId, MovieSummary, Page, VideoList};
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::CatalogError;

async fn get_json<T: DeserializeOwned>(
    client: &Client,
    url: &str,
    operation: &'static str,
) -> Result<T, CatalogError> {
    debug!(%operation, "catalog request");
    let response = client
        .get(url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|source| CatalogError::Transport { operation, source })?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(CatalogError::Status { operation, status, body });
    }

    response
        .json()
        .await
        .map_err(|source| CatalogError::Decode { operation, source })
}

/// One page of a category rail (`/movie/{now_playing|popular|top_rated|upcoming}`).
pub async fn list_movies(
    client: &Client,
    api_base: &str,
    api_key: &str,
    language: &str,
    category: ListCategory,
    page: u32,
) -> Result<Page<MovieSummary>, CatalogError> {
    let url = format!(
        "{}/movie/{}?api_key={}&language={}&page={}",
        api_base,
        category.as_path_segment(),
        api_key,
        language,
        page
    );
    get_json(client, &url, "list movies").await
}

/// One page of free-text search results (`/search/movie`).
pub async fn search_movies(
    client: &Client,
    api_base: &str,
    api_key: &str,
    language: &str,
    query: &str,
    page: u32,
) -> Result<Page<MovieSummary>, CatalogError> {
    let url = format!(
        "{}/search/movie?api_key={}&language={}&query={}&page={}",
        api_base,
        api_key,
        language,
        urlencoding::encode(query),
        page
    );
    get_json(client, &url, "search movies").await
}

/// Single-movie detail record (`/movie/{id}`).
pub async fn get_movie(
    client: &Client,
    api_base: &str,
    api_key: &str,
    language: &str,
    id: MovieId,
) -> Result<MovieDetails, CatalogError> {
    let url = format!("{}/movie/{}?api_key={}&language={}", api_base, id, api_key, language);
    get_json(client, &url, "get movie").await
}

/// Cast list for a movie (`/movie/{id}/credits`).
pub async fn get_credits(
    client: &Client,
    api_base: &str,
    api_key: &str,
    language: &str,
    id: MovieId,
) -> Result<Credits, CatalogError> {
    let url = format!(
        "{}/movie/{}/credits?api_key={}&language={}",
        api_base, id, api_key, language
    );
    get_json(client, &url, "get credits").await
}

/// Video/trailer listing for a movie (`/movie/{id}/videos`).
pub async fn get_videos(
    client: &Client,
    api_base: &str,
    api_key: &str,
    language: &str,
    id: MovieId,
) -> Result<VideoList, CatalogError> {
    let url = format!(
        "{}/movie/{}/videos?api_key={}&language={}",
        api_base, id, api_key, language
    );
    get_json(client, &url, "get videos").await
}
