//! Marketing site pages

mod home;
mod contact;

pub use home::HomePage;
pub use contact::ContactPage;
