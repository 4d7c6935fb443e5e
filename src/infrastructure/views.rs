use std::path::Path;

use tera::{Context, Tera};

use crate::domain::models::ReportView;

pub const INDEX_TEMPLATE: &str = "index.html";
pub const REPORT_TEMPLATE: &str = "report.html";

pub struct Views {
    tera: Tera,
}

impl Views {
    /// Parses every `*.html` file under `dir`. A template that fails to parse
    /// aborts startup; a template that is simply absent fails at render time.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self, tera::Error> {
        let pattern = dir.as_ref().join("**").join("*.html");
        let tera = Tera::new(&pattern.to_string_lossy())?;
        Ok(Self { tera })
    }

    pub fn from_raw(templates: &[(&str, &str)]) -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        tera.add_raw_templates(templates.iter().copied())?;
        Ok(Self { tera })
    }

    pub fn render_index(&self) -> Result<String, tera::Error> {
        self.tera.render(INDEX_TEMPLATE, &Context::new())
    }

    pub fn render_report(&self, view: &ReportView) -> Result<String, tera::Error> {
        let mut context = Context::new();
        context.insert("report_number", &view.report_number);
        context.insert("data", &view.data);
        context.insert("raw_data", &view.raw_data);
        context.insert("fields", &view.fields);
        context.insert("error_message", &view.error_message);
        self.tera.render(REPORT_TEMPLATE, &context)
    }
}
