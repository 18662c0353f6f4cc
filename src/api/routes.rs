//! Route configuration.

use axum::Router;
use axum::routing::{get, post};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use super::handlers::{self, DeleteItemForm, EditItemForm, HealthResponse, NewItemForm};
use super::state::AppState;
use crate::db::Database;

/// Build routes with generic database type.
///
/// This macro reduces boilerplate when registering handlers that are generic
/// over the Database trait. It applies the turbofish operator automatically.
/// Registering two methods on one path merges them.
macro_rules! routes {
    ($D:ty => {
        $($method:ident $path:literal => $($handler:ident)::+),* $(,)?
    }) => {{
        let router = Router::new();
        $(
            let router = router.route($path, $method($($handler)::+::<$D>));
        )*
        router
    }};
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "todolist",
        version = "0.1.0",
        description = "Multi-list to-do application",
        license(name = "GPL-2.0")
    ),
    paths(
        handlers::health,
        handlers::show_today,
        handlers::show_list,
        handlers::add_item,
        handlers::edit_item,
        handlers::delete_item,
    ),
    components(schemas(HealthResponse, NewItemForm, EditItemForm, DeleteItemForm)),
    tags(
        (name = "system", description = "System health and status endpoints"),
        (name = "lists", description = "List pages"),
        (name = "items", description = "Item form submissions")
    )
)]
pub struct ApiDoc;

/// Create the router with OpenAPI documentation
///
/// Static paths (`/health`, `/docs`, `/edit`, `/delete`) take precedence
/// over the `/{name}` list route.
pub fn create_router<D: Database>(state: AppState<D>) -> Router {
    let api = ApiDoc::openapi();

    let system_routes = Router::new().route("/health", get(handlers::health));

    let list_routes = routes!(D => {
        get "/" => handlers::show_today,
        get "/{name}" => handlers::show_list,
    });

    let item_routes = routes!(D => {
        post "/" => handlers::add_item,
        post "/edit" => handlers::edit_item,
        post "/delete" => handlers::delete_item,
    });

    system_routes
        .merge(list_routes)
        .merge(item_routes)
        .merge(Scalar::with_url("/docs", api))
        .with_state(state)
}
