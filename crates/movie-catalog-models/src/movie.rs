use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Catalog-assigned movie identifier. Meaning is owned entirely by the
/// external API; locally it is just a positive integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovieId(pub u64);

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for MovieId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u64>().map(MovieId)
    }
}

impl From<u64> for MovieId {
    fn from(raw: u64) -> Self {
        MovieId(raw)
    }
}

/// A movie as it appears in list and search responses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MovieSummary {
    pub id: MovieId,
    pub title: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub vote_count: u64,
}

impl MovieSummary {
    pub fn release_year(&self) -> Option<i32> {
        release_year(self.release_date.as_deref())
    }
}

/// Full single-movie record from the detail endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MovieDetails {
    pub id: MovieId,
    pub title: String,
    #[serde(default)]
    pub tagline: Option<String>,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub runtime: Option<u32>,
    #[serde(default)]
    pub genres: Vec<Genre>,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub vote_count: u64,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub original_language: Option<String>,
}

impl MovieDetails {
    pub fn release_year(&self) -> Option<i32> {
        release_year(self.release_date.as_deref())
    }

    /// Runtime formatted as "2h 19min". None when the catalog has no runtime
    /// (or reports zero, which it does for unreleased titles).
    pub fn runtime_display(&self) -> Option<String> {
        match self.runtime {
            Some(minutes) if minutes > 0 => Some(format!("{}h {}min", minutes / 60, minutes % 60)),
            _ => None,
        }
    }

    /// Tagline with empty strings normalized away.
    pub fn tagline_display(&self) -> Option<&str> {
        self.tagline.as_deref().filter(|t| !t.is_empty())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Genre {
    pub id: u64,
    pub name: String,
}

// The catalog sends release dates as "YYYY-MM-DD", but also sends empty
// strings for titles without a date.
fn release_year(date: Option<&str>) -> Option<i32> {
    let date = date.filter(|d| !d.is_empty())?;
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .ok()
        .map(|d| chrono::Datelike::year(&d))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn movie_id_parses_and_displays() {
        let id: MovieId = "550".parse().unwrap();
        assert_eq!(id, MovieId(550));
        assert_eq!(id.to_string(), "550");
        assert!("fight club".parse::<MovieId>().is_err());
    }

    #[test]
    fn movie_id_serializes_as_bare_integer() {
        let encoded = serde_json::to_string(&vec![MovieId(550), MovieId(551)]).unwrap();
        assert_eq!(encoded, "[550,551]");
        let decoded: Vec<MovieId> = serde_json::from_str("[550,551]").unwrap();
        assert_eq!(decoded, vec![MovieId(550), MovieId(551)]);
    }

    #[test]
    fn release_year_handles_empty_and_missing_dates() {
        assert_eq!(release_year(Some("1999-10-15")), Some(1999));
        assert_eq!(release_year(Some("")), None);
        assert_eq!(release_year(Some("not-a-date")), None);
        assert_eq!(release_year(None), None);
    }

    #[test]
    fn runtime_display_formats_hours_and_minutes() {
        let mut details = sample_details();
        details.runtime = Some(139);
        assert_eq!(details.runtime_display().as_deref(), Some("2h 19min"));

        details.runtime = Some(0);
        assert_eq!(details.runtime_display(), None);

        details.runtime = None;
        assert_eq!(details.runtime_display(), None);
    }

    #[test]
    fn tagline_display_drops_empty_strings() {
        let mut details = sample_details();
        assert_eq!(details.tagline_display(), Some("Mischief. Mayhem. Soap."));

        details.tagline = Some(String::new());
        assert_eq!(details.tagline_display(), None);
    }

    #[test]
    fn details_decode_from_catalog_payload() {
        let payload = r#"{
            "id": 550,
            "title": "Fight Club",
            "tagline": "Mischief. Mayhem. Soap.",
            "overview": "A ticking-time-bomb insomniac...",
            "poster_path": "/pB8BM7pdSp6B6Ih7QZ4DrQ3PmJK.jpg",
            "backdrop_path": null,
            "release_date": "1999-10-15",
            "runtime": 139,
            "genres": [{"id": 18, "name": "Drama"}],
            "vote_average": 8.433,
            "vote_count": 26280,
            "status": "Released",
            "original_language": "en"
        }"#;
        let details: MovieDetails = serde_json::from_str(payload).unwrap();
        assert_eq!(details.id, MovieId(550));
        assert_eq!(details.release_year(), Some(1999));
        assert_eq!(details.genres[0].name, "Drama");
    }

    fn sample_details() -> MovieDetails {
        MovieDetails {
            id: MovieId(550),
            title: "Fight Club".to_string(),
            tagline: Some("Mischief. Mayhem. Soap.".to_string()),
            overview: String::new(),
            poster_path: None,
            backdrop_path: None,
            release_date: Some("1999-10-15".to_string()),
            runtime: Some(139),
            genres: Vec::new(),
            vote_average: 8.4,
            vote_count: 26280,
            status: Some("Released".to_string()),
            original_language: Some("en".to_string()),
        }
    }
}
