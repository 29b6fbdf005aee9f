//! Tests for page building and rendering

use modvanity::core::models::{DOC_BASE_URL, INDEX_FILE, ModulePath};
use modvanity::core::services::{PageSettings, build_page, render};

fn page_html(module: &str, redirect: bool) -> String {
    let settings = PageSettings::new("go.elastic.co/apm", "https://github.com/elastic/apm-agent-go")
        .with_redirect(redirect);
    let page = build_page(&ModulePath::new(module).unwrap(), &settings).unwrap();
    render(&page.model).as_str().to_string()
}

#[test]
fn test_constants() {
    assert_eq!(DOC_BASE_URL, "https://pkg.go.dev/");
    assert_eq!(INDEX_FILE, "index.html");
}

#[test]
fn test_import_prefix_is_repository_root_not_module() {
    let html = page_html("go.elastic.co/apm/module/apmgin", true);
    assert!(html.contains(
        r#"content="go.elastic.co/apm git https://github.com/elastic/apm-agent-go""#
    ));
    assert!(html.contains("https://pkg.go.dev/go.elastic.co/apm/module/apmgin"));
}

#[test]
fn test_document_is_well_formed_in_both_variants() {
    for redirect in [true, false] {
        let html = page_html("go.elastic.co/apm", redirect);
        assert!(html.starts_with("<!DOCTYPE html>\n<html>\n"));
        assert!(html.ends_with("</html>\n"));
        assert_eq!(html.matches("<head>").count(), 1);
        assert_eq!(html.matches("</head>").count(), 1);
        assert_eq!(html.matches("<body>").count(), 1);
        assert_eq!(html.matches("</body>").count(), 1);
        assert_eq!(html.matches("<a ").count(), html.matches("</a>").count());
    }
}

#[test]
fn test_plain_variant_has_two_links() {
    let html = page_html("go.elastic.co/apm", false);
    assert_eq!(html.matches("<a ").count(), 2);
    assert!(html.contains("<br>"));
}

#[test]
fn test_redirect_variant_has_one_link() {
    let html = page_html("go.elastic.co/apm", true);
    assert_eq!(html.matches("<a ").count(), 1);
    assert!(html.contains("Redirecting to"));
}
