//! News preview selection and bookmarks

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::time::Duration;

/// How long the bookmark confirmation stays visible
pub const BOOKMARK_ALERT_DURATION: Duration = Duration::from_secs(3);

/// Secondary cards shown next to the featured story
const SECONDARY_ITEMS: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsItem {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub date: String,
    pub image_url: Option<String>,
    pub link: String,
}

#[derive(Debug, Clone, Default)]
pub struct NewsPreview {
    items: Vec<NewsItem>,
    bookmarked: BTreeSet<String>,
}

impl NewsPreview {
    pub fn new(items: Vec<NewsItem>) -> Self {
        Self {
            items,
            bookmarked: BTreeSet::new(),
        }
    }

    pub fn featured(&self) -> Option<&NewsItem> {
        self.items.first()
    }

    pub fn others(&self) -> &[NewsItem] {
        let end = self.items.len().min(1 + SECONDARY_ITEMS);
        self.items.get(1..end).unwrap_or(&[])
    }

    pub fn is_bookmarked(&self, id: &str) -> bool {
        self.bookmarked.contains(id)
    }

    /// Flip the bookmark for `id` and return the confirmation text
    pub fn toggle_bookmark(&mut self, id: &str, title: &str) -> String {
        if self.bookmarked.remove(id) {
            format!("\"{}\" removed from your bookmarks", title)
        } else {
            self.bookmarked.insert(id.to_string());
            format!("\"{}\" added to your bookmarks", title)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str) -> NewsItem {
        NewsItem {
            id: id.to_string(),
            title: format!("Story {}", id),
            description: String::new(),
            category: "Threats".to_string(),
            date: "2025-03-01".to_string(),
            image_url: None,
            link: format!("/news/{}", id),
        }
    }

    #[test]
    fn test_featured_and_two_others() {
        let preview = NewsPreview::new(vec![item("1"), item("2"), item("3"), item("4")]);
        assert_eq!(preview.featured().map(|n| n.id.as_str()), Some("1"));
        let others: Vec<_> = preview.others().iter().map(|n| n.id.as_str()).collect();
        assert_eq!(others, vec!["2", "3"]);
    }

    #[test]
    fn test_short_lists() {
        assert!(NewsPreview::new(Vec::new()).featured().is_none());
        assert!(NewsPreview::new(Vec::new()).others().is_empty());
        assert!(NewsPreview::new(vec![item("1")]).others().is_empty());
        assert_eq!(NewsPreview::new(vec![item("1"), item("2")]).others().len(), 1);
    }

    #[test]
    fn test_bookmark_toggle_messages() {
        let mut preview = NewsPreview::new(vec![item("1")]);

        let added = preview.toggle_bookmark("1", "Grid attacks");
        assert_eq!(added, "\"Grid attacks\" added to your bookmarks");
        assert!(preview.is_bookmarked("1"));

        let removed = preview.toggle_bookmark("1", "Grid attacks");
        assert_eq!(removed, "\"Grid attacks\" removed from your bookmarks");
        assert!(!preview.is_bookmarked("1"));
    }
}
