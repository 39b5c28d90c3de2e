//! Model answers are Markdown. The page shows them as HTML, so the text is
//! rendered and then sanitized before it leaves the server.

use pulldown_cmark::{html, Options, Parser};

/// Renders Markdown (tables and strikethrough enabled) and strips anything
/// outside ammonia's default allow-list: scripts, event handlers,
/// `javascript:` links and the like.
pub fn render_markdown(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(markdown, options);
    let mut html_output = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut html_output, parser);

    ammonia::clean(&html_output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headings_and_emphasis() {
        let html = render_markdown("## Strengths\n\n- **Rust** and *Go*\n");
        assert!(html.contains("<h2>Strengths</h2>"), "got {html}");
        assert!(html.contains("<li><strong>Rust</strong> and <em>Go</em></li>"), "got {html}");
    }

    #[test]
    fn test_tables_are_rendered() {
        let md = "| Skill | Match |\n|---|---|\n| Rust | Yes |\n";
        let html = render_markdown(md);
        assert!(html.contains("<table>"), "got {html}");
        assert!(html.contains("<th>Skill</th>"), "got {html}");
        assert!(html.contains("<td>Rust</td>"), "got {html}");
    }

    #[test]
    fn test_script_tags_are_removed() {
        let html = render_markdown("Score: 80\n\n<script>alert('x')</script>\n");
        assert!(!html.contains("<script"), "got {html}");
        assert!(!html.contains("alert"), "got {html}");
        assert!(html.contains("Score: 80"));
    }

    #[test]
    fn test_event_handlers_and_js_links_are_removed() {
        let html = render_markdown(
            "<img src=\"x.png\" onerror=\"steal()\">\n\n[click](javascript:steal())\n",
        );
        assert!(!html.contains("onerror"), "got {html}");
        assert!(!html.contains("javascript:"), "got {html}");
    }
}
