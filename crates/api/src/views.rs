//! Page templates.
//!
//! Templates are compiled into the binary and registered once at startup.
//! Each page wraps its content in the `base` layout via a partial block
//! (`{{#> base}} ... {{/base}}`).

use axum::response::Html;
use handlebars::{Handlebars, RenderError, TemplateError};
use serde::Serialize;

const TEMPLATES: [(&str, &str); 10] = [
    ("base", include_str!("../templates/base.hbs")),
    ("book_list", include_str!("../templates/book_list.hbs")),
    ("book_detail", include_str!("../templates/book_detail.hbs")),
    ("book_form", include_str!("../templates/book_form.hbs")),
    ("book_delete", include_str!("../templates/book_delete.hbs")),
    ("statistics", include_str!("../templates/statistics.hbs")),
    ("authors", include_str!("../templates/authors.hbs")),
    ("genres", include_str!("../templates/genres.hbs")),
    ("login", include_str!("../templates/login.hbs")),
    ("error", include_str!("../templates/error.hbs")),
];

/// The template registry shared by all handlers.
pub struct Views {
    registry: Handlebars<'static>,
}

/// Context handed to every template: the page title, the logged-in user
/// (for the navigation bar) and the page-specific fields.
#[derive(Debug, Serialize)]
pub struct Page<'a, T: Serialize> {
    pub title: &'a str,
    pub user: Option<&'a str>,
    #[serde(flatten)]
    pub body: T,
}

impl Views {
    /// Compile every page template.
    ///
    /// Strict mode stays off so optional fields (a book without a genre or
    /// cover) render as empty instead of failing.
    pub fn new() -> Result<Self, TemplateError> {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(false);
        for (name, source) in TEMPLATES {
            registry.register_template_string(name, source)?;
        }
        Ok(Self { registry })
    }

    /// Render a named template with `data` as its context.
    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<Html<String>, RenderError> {
        self.registry.render(name, data).map(Html)
    }

    /// Render a page inside the `base` layout.
    pub fn page<T: Serialize>(
        &self,
        name: &str,
        title: &str,
        user: Option<&str>,
        body: T,
    ) -> Result<Html<String>, RenderError> {
        self.render(name, &Page { title, user, body })
    }
}
