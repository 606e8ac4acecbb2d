//! Markdown to HTML rendering.

use pulldown_cmark::{html, Options, Parser};

/// Render a markdown document to an HTML fragment.
///
/// Pure and deterministic: identical input always yields identical output.
/// All parser extensions (tables, strikethrough, footnotes, task lists) are
/// enabled. Content is internally authored, so the output is embedded into
/// pages unsanitized.
pub fn render(markdown: &str) -> String {
    let parser = Parser::new_ext(markdown, Options::all());
    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_headings() {
        let out = render("# Title");
        assert!(out.contains("<h1>Title</h1>"), "got: {out}");
    }

    #[test]
    fn renders_tables() {
        let out = render("| a | b |\n|---|---|\n| 1 | 2 |\n");
        assert!(out.contains("<table>"), "got: {out}");
    }

    #[test]
    fn renders_links_and_lists() {
        let out = render("- [docs](https://example.com)\n- second\n");
        assert!(out.contains("<ul>"));
        assert!(out.contains(r#"<a href="https://example.com">docs</a>"#));
    }

    #[test]
    fn is_deterministic() {
        let input = "# Title\n\nSome *text* with a [link](/x).\n";
        assert_eq!(render(input), render(input));
    }

    #[test]
    fn empty_input_renders_empty() {
        assert_eq!(render(""), "");
    }
}
