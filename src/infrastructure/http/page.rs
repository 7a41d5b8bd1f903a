//! The single page

use axum::response::Html;

use crate::domain::value_objects::SUGGESTED_INTERESTS;

const PAGE: &str = include_str!("page.html");

pub async fn index() -> Html<String> {
    Html(render_page())
}

fn render_page() -> String {
    let options: String = SUGGESTED_INTERESTS
        .iter()
        .map(|tag| format!("<option value=\"{tag}\">{tag}</option>"))
        .collect::<Vec<_>>()
        .join("\n          ");
    PAGE.replace("{{INTEREST_OPTIONS}}", &options)
}
