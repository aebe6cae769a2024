//! Placeholder news stories for the home page preview

use tf_core::NewsItem;

pub fn news_items() -> Vec<NewsItem> {
    [
        (
            "ot-isolation",
            "Why Air-Gapped OT Networks Still Need Data Diodes",
            "Physical isolation alone no longer stops threats that ride in on maintenance laptops and USB media.",
            "Industrial Security",
            "March 12, 2025",
        ),
        (
            "grid-attacks",
            "Lessons From Recent Attacks on Power Transmission",
            "A look at how unidirectional gateways keep control systems reachable for monitoring but closed to intrusion.",
            "Critical Infrastructure",
            "February 27, 2025",
        ),
        (
            "rail-signalling",
            "Securing Railway Signalling With One-Way Transfer",
            "Hardware-enforced data flow lets operators export telemetry without opening a return path.",
            "Transportation",
            "February 3, 2025",
        ),
    ]
    .into_iter()
    .map(|(id, title, description, category, date)| NewsItem {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        category: category.to_string(),
        date: date.to_string(),
        image_url: Some(format!("/assets/images/news/{}.jpg", id)),
        link: format!("/news/{}", id),
    })
    .collect()
}
