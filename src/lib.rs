//! Page shell renderer for the Meninas.grid website.

pub mod application;
pub mod config;
pub mod domain;
pub mod infra;
pub mod presentation;
