use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Summary card of a published brew as returned by the vault search.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct BrewSummary {
    pub title: String,
    pub authors: Vec<String>,
    pub description: String,
    /// Public identifier used in share links.
    pub share_id: Option<String>,
    /// Renderer the brew targets, `V3` or `legacy`.
    pub renderer: Option<String>,
    pub lang: Option<String>,
    pub tags: Vec<String>,
    pub systems: Vec<String>,
    pub views: u64,
    pub page_count: Option<u32>,
    pub thumbnail: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub last_viewed: Option<DateTime<Utc>>,
}

impl BrewSummary {
    /// Authors joined for display, `-` when the brew lists none.
    pub fn author_line(&self) -> String {
        if self.authors.is_empty() {
            "-".to_string()
        } else {
            self.authors.join(", ")
        }
    }

    /// Whether the brew is rendered with the legacy renderer.
    pub fn is_legacy(&self) -> bool {
        self.renderer
            .as_deref()
            .is_some_and(|renderer| renderer.eq_ignore_ascii_case("legacy"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_camel_case_payload_with_missing_fields() {
        let brew: BrewSummary = serde_json::from_str(
            r#"{
                "title": "Dragon Lairs",
                "authors": ["alice", "bob"],
                "shareId": "abc123",
                "renderer": "legacy",
                "pageCount": 12,
                "updatedAt": "2024-02-01T10:00:00Z",
                "unknownField": true
            }"#,
        )
        .unwrap();

        assert_eq!(brew.title, "Dragon Lairs");
        assert_eq!(brew.share_id.as_deref(), Some("abc123"));
        assert_eq!(brew.page_count, Some(12));
        assert_eq!(brew.views, 0);
        assert!(brew.description.is_empty());
        assert!(brew.updated_at.is_some());
        assert!(brew.is_legacy());
        assert_eq!(brew.author_line(), "alice, bob");
    }

    #[test]
    fn author_line_handles_missing_authors() {
        assert_eq!(BrewSummary::default().author_line(), "-");
    }
}
