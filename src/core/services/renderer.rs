//! Page renderer
//!
//! Pure function from a [`PageModel`] to an HTML [`Document`]. Both the
//! redirecting and the plain variant share the same head; only the refresh
//! directive and the body differ.

use crate::core::models::{Document, PageModel};

/// Render a page model to HTML
#[must_use]
pub fn render(model: &PageModel) -> Document {
    let doc_url = escape_html(&model.doc_url);
    let repo_root = escape_html(&model.go_import.repo_root);

    let mut html = String::with_capacity(512);
    html.push_str("<!DOCTYPE html>\n<html>\n\t<head>\n\t\t<meta charset=\"utf-8\">\n");
    html.push_str(&format!(
        "\t\t<meta name=\"go-import\" content=\"{}\">\n",
        escape_html(&model.go_import.content())
    ));
    if model.redirect {
        html.push_str(&format!("\t\t<meta http-equiv=\"refresh\" content=\"0; url='{doc_url}'\">\n"));
    }
    html.push_str("\t</head>\n\t<body>\n");

    if model.redirect {
        html.push_str(&format!("\t\tRedirecting to <a href=\"{doc_url}\">{doc_url}</a>\n"));
    } else {
        html.push_str(&format!("\t\tRepository: <a href=\"{repo_root}\">{repo_root}</a>\n"));
        html.push_str("\t\t<br>\n");
        html.push_str(&format!("\t\tGodoc: <a href=\"{doc_url}\">{doc_url}</a>\n"));
    }

    html.push_str("\t</body>\n</html>\n");
    Document::new(html)
}

/// Escape text for use in HTML attributes and element content
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&#34;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
