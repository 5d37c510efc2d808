//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod items;

use axum::Router;
use axum::routing::get;

use shoewash_app::ports::ItemRepository;

use crate::state::AppState;

/// Build the items API router.
pub fn routes<R>() -> Router<AppState<R>>
where
    R: ItemRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/items", get(items::list::<R>).post(items::create::<R>))
        .route(
            "/items/{id}",
            get(items::get::<R>)
                .put(items::update::<R>)
                .delete(items::delete::<R>),
        )
}
