//! State behind the home page showcase widgets

pub mod carousel;
pub mod content;
pub mod news;

pub use carousel::{Carousel, CAROUSEL_INTERVAL};
pub use content::{certifications, features, Certification, Feature};
pub use news::{NewsItem, NewsPreview, BOOKMARK_ALERT_DURATION};
