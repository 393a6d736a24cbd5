//! Reusable UI components for the dashboard

pub mod modals;
pub mod sidebar;
pub mod summary_card;

pub use modals::{render_project_modal, render_user_modal};
pub use sidebar::render_sidebar;
pub use summary_card::{CardLayout, SummaryCard};
