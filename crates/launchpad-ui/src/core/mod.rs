//! Core, DOM-free primitives and helpers for the launcher shell.
pub mod auth;
pub mod config;
pub mod icons;
pub mod menu;
pub mod preferences;
pub mod store;
pub mod theme;
pub mod ui;
