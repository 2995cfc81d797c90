use axum::{
    Router,
    routing::{get, post},
};

pub mod auth;
pub mod categories;
pub mod dashboard;
pub mod products;
pub mod system;

/// Routes reachable without a token.
pub fn public_router() -> Router {
    Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
}

/// Routes behind the bearer-token middleware. Role checks happen per handler.
pub fn protected_router() -> Router {
    Router::new()
        .route("/logout", post(auth::logout))
        .route("/me", get(auth::me))
        .route(
            "/categories",
            get(categories::index).post(categories::store),
        )
        .route(
            "/categories/:id",
            get(categories::show)
                .put(categories::update)
                .delete(categories::destroy),
        )
        .route("/products", get(products::index).post(products::store))
        .route(
            "/products/:id",
            get(products::show)
                .put(products::update)
                .delete(products::destroy),
        )
        .route("/dashboard/stats", get(dashboard::stats))
}
