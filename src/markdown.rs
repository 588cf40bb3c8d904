//! Markdown Rendering
//!
//! Long-form body copy (blog excerpts, brochure intros) is authored as
//! markdown and rendered to HTML with pulldown-cmark.

use pulldown_cmark::{html::push_html, Options, Parser};

fn get_options() -> Options {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_SMART_PUNCTUATION);
    options
}

/// Parse markdown to an HTML fragment
pub fn render_markdown(text: &str) -> String {
    let parser = Parser::new_ext(text, get_options());
    let mut html_output = String::new();
    push_html(&mut html_output, parser);
    html_output
}

/// Parse markdown for inline use (strips the outer <p> tags)
pub fn render_markdown_inline(text: &str) -> String {
    let html = render_markdown(text);

    html.trim()
        .strip_prefix("<p>")
        .and_then(|s| s.strip_suffix("</p>"))
        .map(|s| s.to_string())
        .unwrap_or(html)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paragraphs_are_wrapped() {
        let html = render_markdown("Hand-built cabinetry, fitted to the millimetre.");
        assert!(html.starts_with("<p>"));
        assert!(html.trim_end().ends_with("</p>"));
    }

    #[test]
    fn emphasis_is_rendered() {
        let html = render_markdown("Established in *1888*.");
        assert!(html.contains("<em>1888</em>"));
    }

    #[test]
    fn inline_variant_strips_the_outer_paragraph() {
        let html = render_markdown_inline("Every project starts with a **free** design visit.");
        assert!(!html.starts_with("<p>"));
        assert!(html.contains("<strong>free</strong>"));
    }

    #[test]
    fn inline_variant_keeps_inner_paragraph_boundaries() {
        let html = render_markdown_inline("First paragraph.\n\nSecond paragraph.");
        assert!(html.contains("</p>\n<p>"));
    }
}
