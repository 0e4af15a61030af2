pub mod colors;
pub mod mockup;
pub mod preview;

pub use colors::{handle_colors, __path_handle_colors};
pub use mockup::{handle_mockup, __path_handle_mockup};
pub use preview::{handle_preview, PreviewResponse, __path_handle_preview};
