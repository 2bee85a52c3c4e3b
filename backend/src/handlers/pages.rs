//! HTTP handlers for sidebar navigation and static pages

use axum::{extract::Path, Json};
use shared::{navigation, page_content, NavEntry, Page, PageContent};

use crate::error::{AppError, AppResult};

/// List sidebar entries
pub async fn list_pages() -> Json<Vec<NavEntry>> {
    Json(navigation())
}

/// Get a page's title and body
pub async fn get_page(Path(slug): Path<String>) -> AppResult<Json<PageContent>> {
    let page: Page = slug
        .parse()
        .map_err(|_| AppError::NotFound(format!("Page {}", slug)))?;
    Ok(Json(page_content(page)))
}
