use serde::{Deserialize, Serialize};

/// One page of a paginated catalog response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Page<T> {
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default)]
    pub results: Vec<T>,
    #[serde(default = "default_page")]
    pub total_pages: u32,
    #[serde(default)]
    pub total_results: u64,
}

fn default_page() -> u32 {
    1
}

impl<T> Page<T> {
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::movie::{MovieId, MovieSummary};

    #[test]
    fn page_decodes_from_catalog_payload() {
        let payload = r#"{
            "page": 1,
            "results": [
                {"id": 603, "title": "The Matrix", "poster_path": "/f89U3ADr1oiB1s9GkdPOEpXUk5H.jpg",
                 "release_date": "1999-03-31", "vote_average": 8.2, "vote_count": 24000,
                 "overview": "Set in the 22nd century..."}
            ],
            "total_pages": 9817,
            "total_results": 196322
        }"#;
        let page: Page<MovieSummary> = serde_json::from_str(payload).unwrap();
        assert_eq!(page.page, 1);
        assert_eq!(page.results[0].id, MovieId(603));
        assert_eq!(page.results[0].release_year(), Some(1999));
        assert_eq!(page.total_pages, 9817);
    }

    #[test]
    fn page_tolerates_missing_fields() {
        let page: Page<MovieSummary> = serde_json::from_str("{}").unwrap();
        assert!(page.is_empty());
        assert_eq!(page.page, 1);
        assert_eq!(page.total_pages, 1);
    }
}
