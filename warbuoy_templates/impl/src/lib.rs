use std::sync::Arc;

use anyhow::Context;
use tera::Tera;
use warbuoy_templates_contracts::{Template, TemplateService, TEMPLATES};

#[derive(Debug, Clone)]
pub struct TemplateServiceImpl {
    tera: Arc<Tera>,
}

impl TemplateServiceImpl {
    pub fn new() -> anyhow::Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_templates(TEMPLATES.iter().copied())
            .context("Failed to load email templates")?;
        Ok(Self { tera: tera.into() })
    }
}

impl TemplateService for TemplateServiceImpl {
    fn render<T: Template>(&self, template: &T) -> anyhow::Result<String> {
        let context = tera::Context::from_serialize(template)?;
        self.tera
            .render(T::NAME, &context)
            .with_context(|| format!("Failed to render {}", T::NAME))
    }
}
