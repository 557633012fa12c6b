mod auth;
mod config;
mod database;
mod db;
mod error;
mod middleware;
mod models;
mod routes;
mod service;

#[cfg(test)]
pub mod test_utils;

pub use config::Config;
pub use db::run_migrations;

use crate::db::stage_db;
use crate::middleware::RequestLogger;
use crate::routes as app_routes;
use rocket::{Build, Rocket, catchers, http::Method};
use rocket_cors::{AllowedOrigins, Cors, CorsOptions};
use tracing_subscriber::EnvFilter;

/// Install the global subscriber. Later calls (tests building several
/// instances) keep the first one.
pub fn init_tracing(log_level: &str, json_format: bool) {
    // RUST_LOG overrides the configured level, e.g. RUST_LOG=info,bakery_works::service=debug
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::fmt().with_env_filter(filter).with_target(true).with_line_number(true);

    let _ = if json_format { subscriber.json().try_init() } else { subscriber.try_init() };
}

fn build_cors(cors_config: &config::CorsConfig) -> Result<Cors, rocket_cors::Error> {
    let is_wildcard = cors_config.allowed_origins.len() == 1 && cors_config.allowed_origins[0] == "*";

    if is_wildcard && cors_config.allow_credentials {
        return Err(rocket_cors::Error::CredentialsWithWildcardOrigin);
    }

    let allowed_origins = if cors_config.allowed_origins.is_empty() {
        AllowedOrigins::some_exact::<&str>(&[])
    } else if is_wildcard {
        AllowedOrigins::all()
    } else {
        AllowedOrigins::some_exact(&cors_config.allowed_origins.iter().map(String::as_str).collect::<Vec<_>>())
    };

    CorsOptions {
        allowed_origins,
        allowed_methods: vec![Method::Get, Method::Post, Method::Put, Method::Delete, Method::Options, Method::Head]
            .into_iter()
            .map(From::from)
            .collect(),
        allowed_headers: rocket_cors::AllowedHeaders::some(&["Content-Type", "Authorization", "Accept"]),
        allow_credentials: cors_config.allow_credentials,
        ..Default::default()
    }
    .to_cors()
}

fn normalize_base_path(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return config::DEFAULT_API_BASE_PATH.to_string();
    }

    let mut normalized = if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    };

    while normalized.ends_with('/') && normalized.len() > 1 {
        normalized.pop();
    }

    normalized
}

fn join_base_path(base_path: &str, path: &str) -> String {
    let base = base_path.trim_end_matches('/');
    let suffix = path.trim_start_matches('/');

    if suffix.is_empty() {
        if base.is_empty() { "/".to_string() } else { base.to_string() }
    } else {
        format!("{}/{}", base, suffix)
    }
}

struct RouteSpec {
    path: &'static str,
    routes: Vec<rocket::Route>,
}

fn collect_route_specs() -> Vec<RouteSpec> {
    vec![
        RouteSpec {
            path: "/",
            routes: app_routes::user::auth_routes(),
        },
        RouteSpec {
            path: "/users",
            routes: app_routes::user::routes(),
        },
        RouteSpec {
            path: "/users",
            routes: app_routes::contact::routes(),
        },
        RouteSpec {
            path: "/emails",
            routes: app_routes::contact::email_routes(),
        },
        RouteSpec {
            path: "/sessions",
            routes: app_routes::session::routes(),
        },
        RouteSpec {
            path: "/inventory",
            routes: app_routes::inventory::routes(),
        },
        RouteSpec {
            path: "/recipes",
            routes: app_routes::recipe::routes(),
        },
        RouteSpec {
            path: "/cook-steps",
            routes: app_routes::cook_step::routes(),
        },
        RouteSpec {
            path: "/ingredients",
            routes: app_routes::ingredient::routes(),
        },
        RouteSpec {
            path: "/cooked-goods",
            routes: app_routes::cooked_good::routes(),
        },
        RouteSpec {
            path: "/health",
            routes: app_routes::health::routes(),
        },
    ]
}

fn mount_api_routes(mut rocket: Rocket<Build>, base_path: &str) -> Rocket<Build> {
    for spec in collect_route_specs() {
        rocket = rocket.mount(join_base_path(base_path, spec.path), spec.routes);
    }

    rocket.register(
        base_path,
        catchers![
            app_routes::error::bad_request,
            app_routes::error::forbidden,
            app_routes::error::not_found,
            app_routes::error::unprocessable_entity,
            app_routes::error::internal_error
        ],
    )
}

pub fn build_rocket(mut config: Config) -> Result<Rocket<Build>, rocket_cors::Error> {
    init_tracing(&config.logging.level, config.logging.json_format);

    let cors = build_cors(&config.cors)?;
    config.api.base_path = normalize_base_path(&config.api.base_path);

    let figment = rocket::Config::figment()
        .merge(("address", config.server.address.clone()))
        .merge(("port", config.server.port));

    let rocket = rocket::custom(figment)
        .attach(cors)
        .attach(RequestLogger)
        .attach(stage_db(config.database.clone()));

    let base_path = config.api.base_path.clone();
    Ok(mount_api_routes(rocket, &base_path).manage(config))
}
