//! ogview - Open Graph preview mockups
//!
//! Server that shows how a link's Open Graph preview will look across
//! messaging platforms: it scrapes a page's OG metadata, samples the
//! preview image's dominant color, and renders platform mockups tinted
//! with adaptive background/text/subtext colors.
//! This library exposes modules for integration testing.

pub mod api;
pub mod assets;
pub mod error;
pub mod models;
pub mod server;
pub mod services;
pub mod utils;
