//! Server-rendered pages.

use askama::Template;
use axum::response::Html;

use super::error::HandlerError;
use crate::db::Item;

/// A list page: the today list or a custom list.
///
/// `title` is both the heading and the value forms submit as the list name.
#[derive(Template, Debug)]
#[template(path = "list.html")]
pub struct ListPage {
    pub title: String,
    pub items: Vec<Item>,
}

impl ListPage {
    pub fn new(title: impl Into<String>, items: Vec<Item>) -> Self {
        Self {
            title: title.into(),
            items,
        }
    }

    pub fn into_html(self) -> Result<Html<String>, HandlerError> {
        Ok(Html(self.render()?))
    }
}
