//! Landing page handler.

use axum::{extract::State, response::Html};

use crate::state::AppState;

const INDEX_HTML: &str = include_str!("../../static/index.html");

/// Serve the landing page with the maps embed key substituted in.
///
/// GET /
pub async fn landing_page(State(state): State<AppState>) -> Html<String> {
    Html(INDEX_HTML.replace("{{GOOGLE_MAPS_KEY}}", &state.google_maps_key))
}
