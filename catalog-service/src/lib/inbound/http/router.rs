use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use axum::body::Body;
use axum::extract::Request;
use axum::http::HeaderValue;
use axum::http::Response;
use axum::middleware;
use axum::middleware::Next;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::AllowOrigin;
use tower_http::cors::Any;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::categories::create_category;
use super::handlers::categories::delete_category;
use super::handlers::categories::get_category;
use super::handlers::categories::list_categories;
use super::handlers::categories::update_category;
use super::handlers::movies::create_movie;
use super::handlers::movies::delete_movie;
use super::handlers::movies::get_movie;
use super::handlers::movies::list_movies;
use super::handlers::movies::movies_in_category;
use super::handlers::movies::search_movies;
use super::handlers::movies::update_movie;
use super::handlers::users::get_user;
use super::handlers::users::list_users;
use super::handlers::users::login;
use super::handlers::users::register;
use super::middleware::authenticate as auth_middleware;
use super::middleware::require_role;
use crate::config::CorsConfig;
use crate::domain::category::service::CategoryService;
use crate::domain::movie::service::MovieService;
use crate::domain::user::models::Role;
use crate::domain::user::service::UserService;
use crate::outbound::repositories::category::PostgresCategoryRepository;
use crate::outbound::repositories::movie::PostgresMovieRepository;
use crate::outbound::repositories::user::PostgresUserRepository;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService<PostgresUserRepository>>,
    pub category_service: Arc<CategoryService<PostgresCategoryRepository>>,
    pub movie_service: Arc<MovieService<PostgresMovieRepository>>,
    pub authenticator: Arc<Authenticator>,
}

pub fn create_router(
    user_service: Arc<UserService<PostgresUserRepository>>,
    category_service: Arc<CategoryService<PostgresCategoryRepository>>,
    movie_service: Arc<MovieService<PostgresMovieRepository>>,
    authenticator: Arc<Authenticator>,
    cors: &CorsConfig,
) -> Router {
    let state = AppState {
        user_service,
        category_service,
        movie_service,
        authenticator,
    };

    // The whole movie surface is anonymous; categories and user listing
    // are the protected routes.
    let public_routes = Router::new()
        .route("/api/usuarios/registro", post(register))
        .route("/api/usuarios/login", post(login))
        .route("/api/peliculas", get(list_movies).post(create_movie))
        .route("/api/peliculas/buscar", get(search_movies))
        .route(
            "/api/peliculas/categoria/:categoria_id",
            get(movies_in_category),
        )
        .route(
            "/api/peliculas/:pelicula_id",
            get(get_movie).patch(update_movie).delete(delete_movie),
        );

    // Any authenticated principal may manage categories.
    let category_routes = Router::new()
        .route("/api/categorias", get(list_categories).post(create_category))
        .route(
            "/api/categorias/:categoria_id",
            get(get_category)
                .patch(update_category)
                .put(update_category)
                .delete(delete_category),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    // User listing is restricted to the Admin role. Layers run outside-in:
    // authenticate first, then the role check.
    let admin_routes = Router::new()
        .route("/api/usuarios", get(list_users))
        .route("/api/usuarios/:usuario_id", get(get_user))
        .route_layer(middleware::from_fn(|req: Request, next: Next| {
            require_role(Role::Admin, req, next)
        }))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(category_routes)
        .merge(admin_routes)
        .layer(trace_layer)
        .layer(build_cors_layer(cors))
        .with_state(state)
}

/// Build the CORS layer from the configured allowed origins; `"*"` means
/// any origin.
fn build_cors_layer(cors: &CorsConfig) -> CorsLayer {
    if cors.allowed_origins.iter().any(|origin| origin == "*") {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = cors
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}
