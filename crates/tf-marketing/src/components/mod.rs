//! Marketing site components

mod nav;
mod footer;
mod cards;
mod fields;
mod showcase;

pub use nav::MarketingNav;
pub use footer::Footer;
pub use cards::*;
pub use fields::{SelectField, TextAreaField, TextField};
pub use showcase::{CertificationCarousel, NewsPreviewSection};
