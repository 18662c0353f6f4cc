//! Item mutation handlers.
//!
//! Every handler resolves the submitted list name with [`ListTarget`] and
//! answers with a redirect to the page of the list it touched.

use axum::{
    Form,
    extract::State,
    response::Response,
};
use serde::Deserialize;
use tracing::{debug, instrument};
use utoipa::ToSchema;

use super::found;
use crate::api::{AppState, HandlerError, ListTarget};
use crate::db::{Database, Item, ItemRepository, ListRepository};

// =============================================================================
// Forms
// =============================================================================

/// Add item form
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct NewItemForm {
    /// Text of the new item
    #[serde(default, rename = "newItem")]
    #[schema(example = "Buy milk")]
    pub new_item: String,
    /// Title of the list the item goes into
    #[serde(default)]
    #[schema(example = "Groceries")]
    pub list: String,
}

/// Rename item form
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct EditItemForm {
    #[serde(default, rename = "updatedItemId")]
    pub item_id: String,
    /// New text of the item
    #[serde(default, rename = "updatedItemTitle")]
    #[schema(example = "Buy oat milk")]
    pub title: String,
    /// Title of the list holding the item
    #[serde(default, rename = "customeListName")]
    pub list_name: String,
}

/// Delete item form
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct DeleteItemForm {
    /// Title of the list holding the item
    #[serde(default, rename = "listName")]
    pub list_name: String,
    /// Id of the checked item
    #[serde(default, rename = "checkbox")]
    pub item_id: String,
}

/// Trim a required field, rejecting blank values.
fn required<'a>(value: &'a str, field: &str) -> Result<&'a str, HandlerError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(HandlerError::bad_request(format!("{} is required", field)));
    }
    Ok(value)
}

// =============================================================================
// Handlers
// =============================================================================

/// Add an item to a list
#[utoipa::path(
    post,
    path = "/",
    tag = "items",
    request_body(content = NewItemForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 302, description = "Item added, redirect to its list"),
        (status = 400, description = "Blank field or unknown list", body = String),
        (status = 500, description = "Internal server error", body = String)
    )
)]
#[instrument(skip(state))]
pub async fn add_item<D: Database>(
    State(state): State<AppState<D>>,
    Form(form): Form<NewItemForm>,
) -> Result<Response, HandlerError> {
    let name = required(&form.new_item, "newItem")?;
    let list = required(&form.list, "list")?;

    let item = Item::new(name);
    let target = ListTarget::resolve(list, &state.today_title());

    match &target {
        ListTarget::Today => state.db().items().create(&item).await?,
        ListTarget::Custom(list_name) => {
            let list = state
                .db()
                .lists()
                .find_by_name(list_name)
                .await?
                .ok_or_else(|| {
                    HandlerError::bad_request(format!("List '{}' not found", list_name))
                })?;
            state.db().lists().push_item(&list.id, &item).await?;
        }
    }

    Ok(found(&target.redirect_path()))
}

/// Rename an item
///
/// An unknown item id is not an error; nothing changes and the browser is
/// redirected as usual.
#[utoipa::path(
    post,
    path = "/edit",
    tag = "items",
    request_body(content = EditItemForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 302, description = "Redirect to the item's list"),
        (status = 400, description = "Missing item id or title", body = String),
        (status = 500, description = "Internal server error", body = String)
    )
)]
#[instrument(skip(state))]
pub async fn edit_item<D: Database>(
    State(state): State<AppState<D>>,
    Form(form): Form<EditItemForm>,
) -> Result<Response, HandlerError> {
    let item_id = required(&form.item_id, "updatedItemId")?;
    let title = required(&form.title, "updatedItemTitle")?;
    let target = ListTarget::resolve(&form.list_name, &state.today_title());

    let matched = match &target {
        ListTarget::Today => state.db().items().rename(item_id, title).await?,
        ListTarget::Custom(list_name) => {
            state
                .db()
                .lists()
                .rename_item(list_name, item_id, title)
                .await?
        }
    };

    if !matched {
        debug!(item_id, ?target, "No item matched rename");
    }

    Ok(found(&target.redirect_path()))
}

/// Delete an item
///
/// Deleting an unknown id leaves the list unchanged.
#[utoipa::path(
    post,
    path = "/delete",
    tag = "items",
    request_body(content = DeleteItemForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 302, description = "Redirect to the item's list"),
        (status = 500, description = "Internal server error", body = String)
    )
)]
#[instrument(skip(state))]
pub async fn delete_item<D: Database>(
    State(state): State<AppState<D>>,
    Form(form): Form<DeleteItemForm>,
) -> Result<Response, HandlerError> {
    let item_id = form.item_id.trim();
    let target = ListTarget::resolve(&form.list_name, &state.today_title());

    let matched = match &target {
        ListTarget::Today => state.db().items().delete(item_id).await?,
        ListTarget::Custom(list_name) => state.db().lists().pull_item(list_name, item_id).await?,
    };

    if !matched {
        debug!(item_id, ?target, "No item matched delete");
    }

    Ok(found(&target.redirect_path()))
}
