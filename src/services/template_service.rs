//! Mockup template rendering with Tera.

use std::collections::HashMap;
use std::sync::Arc;

use tera::{Context, Tera};

use crate::assets::AssetLoader;
use crate::models::Platform;
use crate::utils::text;

/// Error type for template rendering
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    #[error("Template error: {0}")]
    Tera(#[from] tera::Error),

    #[error("Template not found: {0}")]
    NotFound(String),
}

/// Service for rendering platform mockup templates
pub struct TemplateService {
    assets: Arc<AssetLoader>,
}

impl TemplateService {
    /// Create a new template service
    pub fn new(assets: Arc<AssetLoader>) -> Self {
        let template_count = AssetLoader::list_embedded_templates().len();
        tracing::info!(templates = template_count, "Template service initialized");

        Self { assets }
    }

    /// Register custom Tera filters
    fn register_filters(tera: &mut Tera) {
        // truncate filter with custom length
        tera.register_filter(
            "truncate",
            |value: &tera::Value, args: &HashMap<String, tera::Value>| {
                let s = tera::try_get_value!("truncate", "value", String, value);
                let len = args.get("length").and_then(|v| v.as_u64()).unwrap_or(50) as usize;
                Ok(tera::Value::String(text::truncate(&s, len)))
            },
        );
    }

    /// Render a platform mockup with the given data
    /// Templates are always loaded fresh so external overrides apply live
    pub fn render(
        &self,
        platform: Platform,
        data: &serde_json::Value,
    ) -> Result<String, TemplateError> {
        let name = platform.template_name();

        let template_content = self
            .assets
            .read_template_string(name)
            .map_err(|_| TemplateError::NotFound(name.to_string()))?;

        let mut tera = Tera::default();
        tera.add_raw_template(name, &template_content)?;
        Self::register_filters(&mut tera);

        let context = Context::from_serialize(data)?;
        let html = tera.render(name, &context)?;

        Ok(html)
    }
}
