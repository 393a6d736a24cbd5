//! Dashboard views

pub mod home;
pub mod lists;

pub use home::{compose_home, render_home_view, HomeScreen};
