//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod users;

use axum::Router;
use axum::routing::get;

use roster_app::ports::UserRepository;

use crate::state::AppState;

/// Build the user API sub-router.
///
/// Every route also answers `OPTIONS` with the methods it allows.
pub fn routes<R>() -> Router<AppState<R>>
where
    R: UserRepository + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/user",
            get(users::list::<R>)
                .post(users::create::<R>)
                .options(users::collection_options),
        )
        .route(
            "/user/{id}",
            get(users::get::<R>)
                .put(users::update::<R>)
                .delete(users::delete::<R>)
                .options(users::item_options),
        )
}
