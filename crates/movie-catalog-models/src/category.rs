use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The four catalog rails the list endpoint exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListCategory {
    NowPlaying,
    Popular,
    TopRated,
    Upcoming,
}

impl ListCategory {
    pub const ALL: [ListCategory; 4] = [
        ListCategory::NowPlaying,
        ListCategory::Popular,
        ListCategory::TopRated,
        ListCategory::Upcoming,
    ];

    /// Path segment used by the list endpoint (`/movie/{segment}`).
    pub fn as_path_segment(self) -> &'static str {
        match self {
            ListCategory::NowPlaying => "now_playing",
            ListCategory::Popular => "popular",
            ListCategory::TopRated => "top_rated",
            ListCategory::Upcoming => "upcoming",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ListCategory::NowPlaying => "Now playing",
            ListCategory::Popular => "Popular",
            ListCategory::TopRated => "Top rated",
            ListCategory::Upcoming => "Upcoming",
        }
    }
}

impl Default for ListCategory {
    fn default() -> Self {
        ListCategory::Popular
    }
}

impl fmt::Display for ListCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_path_segment())
    }
}

impl FromStr for ListCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "now_playing" => Ok(ListCategory::NowPlaying),
            "popular" => Ok(ListCategory::Popular),
            "top_rated" => Ok(ListCategory::TopRated),
            "upcoming" => Ok(ListCategory::Upcoming),
            other => Err(format!(
                "Unknown category: {}. Use 'now-playing', 'popular', 'top-rated', or 'upcoming'",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_round_trip_through_strings() {
        for category in ListCategory::ALL {
            let parsed: ListCategory = category.as_path_segment().parse().unwrap();
            assert_eq!(parsed, category);
        }
    }

    #[test]
    fn from_str_accepts_dashes() {
        assert_eq!("now-playing".parse::<ListCategory>().unwrap(), ListCategory::NowPlaying);
        assert_eq!("TOP-RATED".parse::<ListCategory>().unwrap(), ListCategory::TopRated);
        assert!("trending".parse::<ListCategory>().is_err());
    }
}
