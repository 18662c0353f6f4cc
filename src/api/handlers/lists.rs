//! List page handlers.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use tracing::{info, instrument};

use super::found;
use crate::api::views::ListPage;
use crate::api::{AppState, HandlerError, ListTarget};
use crate::db::{Database, ItemRepository, ListRepository, TodoList, ensure_defaults};

/// Show the today list
///
/// An empty today list is seeded with placeholder items and the browser is
/// sent back here to load them.
#[utoipa::path(
    get,
    path = "/",
    tag = "lists",
    responses(
        (status = 200, description = "Today's list", body = String, content_type = "text/html"),
        (status = 302, description = "Placeholders were seeded, reload the page"),
        (status = 500, description = "Internal server error", body = String)
    )
)]
#[instrument(skip(state))]
pub async fn show_today<D: Database>(
    State(state): State<AppState<D>>,
) -> Result<Response, HandlerError> {
    let items = state.db().items().list().await?;

    if items.is_empty() {
        ensure_defaults(state.db()).await?;
        info!("Today list was empty, redirecting after seeding");
        return Ok(found(&ListTarget::Today.redirect_path()));
    }

    Ok(ListPage::new(state.today_title(), items)
        .into_html()?
        .into_response())
}

/// Show a custom list, creating it on first visit
#[utoipa::path(
    get,
    path = "/{name}",
    tag = "lists",
    params(("name" = String, Path, description = "List name, matched case-insensitively on the first letter")),
    responses(
        (status = 200, description = "The custom list", body = String, content_type = "text/html"),
        (status = 302, description = "Blank name, redirect to the today list"),
        (status = 500, description = "Internal server error", body = String)
    )
)]
#[instrument(skip(state))]
pub async fn show_list<D: Database>(
    State(state): State<AppState<D>>,
    Path(name): Path<String>,
) -> Result<Response, HandlerError> {
    let name = TodoList::normalize_name(&name);
    if name.is_empty() {
        return Ok(found(&ListTarget::Today.redirect_path()));
    }

    let seed = ensure_defaults(state.db()).await?;
    let list = state.db().lists().find_or_create(&name, &seed).await?;

    Ok(ListPage::new(list.name, list.items)
        .into_html()?
        .into_response())
}
