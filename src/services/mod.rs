pub mod color_service;
pub mod image_loader;
pub mod og_scraper;
pub mod template_service;

pub use color_service::{ColorService, PreviewPalette};
pub use image_loader::{ImageLoader, LoadedImage};
pub use og_scraper::OgScraper;
pub use template_service::{TemplateError, TemplateService};
