//! Page shell rendering.
//!
//! Every page of the site opens with the same markup: head metadata, the
//! two-part logo and the three-link navigation bar, ending with an open
//! `<main>`. [`ShellService::render_shell`] produces exactly that prefix;
//! [`ShellService::render_document`] wraps caller-supplied body markup with
//! the shell and the closing footer.

use metrics::counter;
use tracing::debug;

use crate::application::chrome::ChromeService;
use crate::domain::site::PageTitle;
use crate::presentation::views::{
    DocumentBody, DocumentTemplate, LayoutContext, ShellTemplate, TemplateRenderError,
    render_to_string,
};

pub const RENDER_TOTAL_METRIC: &str = "meninas_grid_render_total";

#[derive(Clone, Debug, Default)]
pub struct ShellService {
    chrome: ChromeService,
}

impl ShellService {
    pub fn new(chrome: ChromeService) -> Self {
        Self { chrome }
    }

    pub fn shell_template(&self, title: &PageTitle) -> ShellTemplate {
        ShellTemplate {
            view: self.chrome.load(title),
        }
    }

    pub fn document_template(&self, title: &PageTitle, body_html: &str) -> DocumentTemplate {
        let body = DocumentBody {
            html: body_html.to_string(),
        };
        DocumentTemplate {
            view: LayoutContext::new(self.chrome.load(title), body),
        }
    }

    /// Render the opening markup of a page, up to and including `<main>`.
    pub fn render_shell(&self, title: &PageTitle) -> Result<String, TemplateRenderError> {
        let html = render_to_string(
            &self.shell_template(title),
            "application::shell::ShellService::render_shell",
        )?;

        counter!(RENDER_TOTAL_METRIC, "kind" => "shell").increment(1);
        debug!(
            target = "meninas_grid::shell",
            title = title.as_str(),
            bytes = html.len(),
            "rendered page shell"
        );
        Ok(html)
    }

    /// Render a complete page. `body_html` is trusted markup and is not escaped.
    pub fn render_document(
        &self,
        title: &PageTitle,
        body_html: &str,
    ) -> Result<String, TemplateRenderError> {
        let html = render_to_string(
            &self.document_template(title, body_html),
            "application::shell::ShellService::render_document",
        )?;

        counter!(RENDER_TOTAL_METRIC, "kind" => "document").increment(1);
        debug!(
            target = "meninas_grid::shell",
            title = title.as_str(),
            body_bytes = body_html.len(),
            bytes = html.len(),
            "rendered page document"
        );
        Ok(html)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> ShellService {
        ShellService::new(ChromeService::new())
    }

    #[test]
    fn shell_starts_with_doctype_and_ends_inside_main() {
        let html = service()
            .render_shell(&PageTitle::new("Sobre"))
            .expect("render shell");

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.trim_end().ends_with("<main>"));
        assert!(html.contains("<title>Meninas.grid - Sobre</title>"));
        assert!(!html.contains("</main>"));
    }

    #[test]
    fn empty_title_renders_site_name_only() {
        let html = service()
            .render_shell(&PageTitle::default())
            .expect("render shell");
        assert!(html.contains("<title>Meninas.grid - </title>"));
    }

    #[test]
    fn document_wraps_body_between_shell_and_footer() {
        let html = service()
            .render_document(&PageTitle::new("Contatos"), "<p>Olá</p>")
            .expect("render document");

        let main_open = html.find("<main>").expect("main open");
        let body = html.find("<p>Olá</p>").expect("body present");
        let main_close = html.find("</main>").expect("main close");
        assert!(main_open < body && body < main_close);
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn shell_is_a_prefix_of_the_document() {
        let service = service();
        let title = PageTitle::new("Início");
        let shell = service.render_shell(&title).expect("render shell");
        let document = service
            .render_document(&title, "")
            .expect("render document");
        assert!(document.starts_with(shell.trim_end()));
    }
}
