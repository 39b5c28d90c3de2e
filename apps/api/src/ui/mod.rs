//! The form page: job description, resume upload, one button per action.
//!
//! A single static document; buttons are generated from the dispatch table so
//! the page and the API never disagree about which actions exist.

use axum::response::Html;

use crate::analysis::actions::AnalysisAction;

const INDEX_TEMPLATE: &str = include_str!("index.html");

/// GET /
pub async fn index_handler() -> Html<String> {
    Html(render_index())
}

fn render_index() -> String {
    INDEX_TEMPLATE.replace("{action_buttons}", &action_buttons())
}

fn action_buttons() -> String {
    AnalysisAction::ALL
        .into_iter()
        .map(|action| {
            format!(
                r#"<button type="button" data-action="{id}" data-download="{download}">{label}</button>"#,
                id = action.as_str(),
                download = action.download_file_name().unwrap_or(""),
                label = action.label(),
            )
        })
        .collect::<Vec<_>>()
        .join("\n        ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_is_filled() {
        let html = render_index();
        assert!(!html.contains("{action_buttons}"));
        assert_eq!(html.matches("data-action=").count(), AnalysisAction::ALL.len());
    }

    #[test]
    fn test_page_title() {
        assert!(render_index().contains("<title>Resume Analyzer</title>"));
    }

    #[test]
    fn test_cover_letter_button_carries_file_name() {
        assert!(action_buttons().contains(
            r#"data-action="cover-letter" data-download="cover_letter.txt""#
        ));
    }
}
