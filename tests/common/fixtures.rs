//! Fixture builders: encoded images and OG pages.

use image::{DynamicImage, ImageFormat, RgbImage};
use std::io::Cursor;

/// Encode a solid-color 16x16 PNG.
pub fn solid_png(r: u8, g: u8, b: u8) -> Vec<u8> {
    let img = RgbImage::from_pixel(16, 16, image::Rgb([r, g, b]));
    let mut out = Cursor::new(Vec::new());
    DynamicImage::ImageRgb8(img)
        .write_to(&mut out, ImageFormat::Png)
        .expect("PNG encode failed");
    out.into_inner()
}

/// Build an HTML page carrying Open Graph tags.
pub fn og_page(title: &str, description: &str, image_url: Option<&str>) -> String {
    let image_tag = image_url
        .map(|u| format!(r#"<meta property="og:image" content="{u}">"#))
        .unwrap_or_default();

    format!(
        r#"<html><head>
<meta property="og:title" content="{title}">
<meta property="og:description" content="{description}">
<meta property="og:site_name" content="Example Corp">
<meta property="og:type" content="website">
{image_tag}
<title>{title}</title>
</head><body><h1>{title}</h1></body></html>"#
    )
}
