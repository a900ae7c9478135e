//! Page handlers.

use axum::{
    extract::{Query, State},
    response::Html,
};
use serde::Deserialize;

use super::super::AppState;
use crate::models::Page;

/// Query params for page selection.
#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
}

/// Render the page selected by `?page=`.
pub async fn show_page(State(state): State<AppState>, Query(query): Query<PageQuery>) -> Html<String> {
    let page = Page::from_query(query.page.as_deref());
    Html(state.render(page).await)
}

pub async fn home_page(State(state): State<AppState>) -> Html<String> {
    Html(state.render(Page::Home).await)
}

pub async fn projects_page(State(state): State<AppState>) -> Html<String> {
    Html(state.render(Page::Projects).await)
}

pub async fn resume_page(State(state): State<AppState>) -> Html<String> {
    Html(state.render(Page::Resume).await)
}
