use crate::application::error::HttpError;
use askama::{Error as AskamaError, Template};
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

#[derive(Debug, Error)]
#[error("{public_message}")]
pub struct TemplateRenderError {
    pub(crate) source: &'static str,
    pub(crate) public_message: &'static str,
    #[source]
    pub(crate) error: AskamaError,
}

impl TemplateRenderError {
    pub fn new(source: &'static str, public_message: &'static str, error: AskamaError) -> Self {
        Self {
            source,
            public_message,
            error,
        }
    }
}

impl From<TemplateRenderError> for HttpError {
    fn from(err: TemplateRenderError) -> Self {
        let TemplateRenderError {
            source,
            public_message,
            error,
        } = err;

        HttpError::from_error(
            source,
            StatusCode::INTERNAL_SERVER_ERROR,
            public_message,
            &error,
        )
    }
}

pub fn render_to_string<T: Template>(
    template: &T,
    source: &'static str,
) -> Result<String, TemplateRenderError> {
    template
        .render()
        .map_err(|err| TemplateRenderError::new(source, "Template rendering failed", err))
}

pub fn render_template<T: Template>(template: T) -> Result<Html<String>, HttpError> {
    render_to_string(&template, "presentation::views::render_template")
        .map(Html)
        .map_err(HttpError::from)
}

pub fn render_template_response<T: Template>(template: T, status: StatusCode) -> Response {
    match render_template(template) {
        Ok(html) => (status, html).into_response(),
        Err(err) => err.into_response(),
    }
}

#[derive(Clone, Debug)]
pub struct NavigationView {
    pub entries: Vec<NavigationLinkView>,
}

#[derive(Clone, Debug)]
pub struct NavigationLinkView {
    pub label: String,
    pub href: String,
}

/// Two-part logo; the dot between the parts is styled separately.
#[derive(Clone, Debug)]
pub struct BrandView {
    pub primary: String,
    pub secondary: String,
    pub href: String,
}

#[derive(Clone, Debug)]
pub struct PageMetaView {
    pub lang: String,
    pub title: String,
    pub stylesheet_href: String,
    pub favicon_href: String,
    pub favicon_type: String,
}

#[derive(Clone, Debug)]
pub struct LayoutChrome {
    pub brand: BrandView,
    pub navigation: NavigationView,
    pub meta: PageMetaView,
}

#[derive(Clone, Debug)]
pub struct LayoutContext<T> {
    pub brand: BrandView,
    pub navigation: NavigationView,
    pub meta: PageMetaView,
    pub content: T,
}

impl<T> LayoutContext<T> {
    pub fn new(chrome: LayoutChrome, content: T) -> Self {
        Self {
            brand: chrome.brand,
            navigation: chrome.navigation,
            meta: chrome.meta,
            content,
        }
    }
}

/// Page-specific markup placed inside `<main>`. Rendered without escaping.
#[derive(Clone, Debug, Default)]
pub struct DocumentBody {
    pub html: String,
}

/// Opening markup only: doctype through the open `<main>` tag.
#[derive(Template)]
#[template(path = "shell.html")]
pub struct ShellTemplate {
    pub view: LayoutChrome,
}

/// Shell, page body and the closing footer.
#[derive(Template)]
#[template(path = "document.html")]
pub struct DocumentTemplate {
    pub view: LayoutContext<DocumentBody>,
}
