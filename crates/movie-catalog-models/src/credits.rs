use serde::{Deserialize, Serialize};

use crate::movie::MovieId;

/// Credits response for a single movie. Crew is not consumed anywhere, so
/// only the cast list is decoded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Credits {
    pub id: MovieId,
    #[serde(default)]
    pub cast: Vec<CastMember>,
}

impl Credits {
    /// Billing-ordered cast, truncated to `limit` entries.
    pub fn top_billed(&self, limit: usize) -> &[CastMember] {
        &self.cast[..self.cast.len().min(limit)]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CastMember {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub character: Option<String>,
    #[serde(default)]
    pub profile_path: Option<String>,
    #[serde(default)]
    pub order: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_billed_truncates_but_never_panics() {
        let credits = Credits {
            id: MovieId(550),
            cast: (0..3)
                .map(|n| CastMember {
                    id: n,
                    name: format!("Actor {}", n),
                    character: None,
                    profile_path: None,
                    order: n as u32,
                })
                .collect(),
        };
        assert_eq!(credits.top_billed(10).len(), 3);
        assert_eq!(credits.top_billed(2).len(), 2);
        assert_eq!(credits.top_billed(0).len(), 0);
    }

    #[test]
    fn credits_decode_with_missing_optional_fields() {
        let payload = r#"{
            "id": 550,
            "cast": [
                {"id": 819, "name": "Edward Norton", "character": "The Narrator", "order": 0},
                {"id": 287, "name": "Brad Pitt", "profile_path": "/kU3B75TyRiCgE270EyZnHjfivoq.jpg", "order": 1}
            ]
        }"#;
        let credits: Credits = serde_json::from_str(payload).unwrap();
        assert_eq!(credits.cast.len(), 2);
        assert_eq!(credits.cast[1].character, None);
    }
}
