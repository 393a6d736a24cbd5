//! Dashboard UI Module
//!
//! The tracker home screen: a side menu and three summary cards for assigned
//! issues, projects and collaborators, fed from the application store.

pub mod app;
pub mod components;
pub mod reveal;
pub mod routes;
pub mod state;
pub mod theme;
pub mod views;
