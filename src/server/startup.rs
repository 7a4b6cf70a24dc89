//! Startup wiring: database, HTTP client, CORS policy and the bootstrap administrator.

use std::time::Duration;

use axum::http::{header, HeaderValue, Method};
use sea_orm::DatabaseConnection;
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::server::{
    config::Settings,
    data::{permission::PermissionRepository, user::UserRepository},
    error::AppError,
    model::{role::Role, user::CreateUserParam},
    service::user::UserService,
};

/// Connects to the database and runs pending migrations.
///
/// Pool limits come from `database.max_open_conns`, `database.max_idle_conns` and
/// `database.conn_max_lifetime`; zero leaves the pool default in place.
///
/// # Arguments
/// - `settings` - Loaded settings providing the connection string and pool limits
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect or to run migrations
pub async fn connect_to_database(settings: &Settings) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(settings.database_url());
    opt.sqlx_logging(false);

    if settings.database.max_open_conns > 0 {
        opt.max_connections(settings.database.max_open_conns);
    }
    if settings.database.max_idle_conns > 0 {
        opt.min_connections(settings.database.max_idle_conns);
    }
    if settings.database.conn_max_lifetime > 0 {
        opt.max_lifetime(Duration::from_secs(settings.database.conn_max_lifetime));
    }

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    tracing::info!("Database connected and migrations applied");

    Ok(db)
}

/// Builds the shared HTTP client used for the text generation API.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(10))
        .build()?;

    Ok(client)
}

/// Builds the CORS policy.
///
/// Listed origins are allowed with credentials. With no origins configured the policy
/// mirrors any origin outside production and allows no cross-origin requests in production.
pub fn cors_layer(settings: &Settings) -> CorsLayer {
    if settings.app.allowed_origins.is_empty() {
        if settings.is_production() {
            tracing::warn!("app.allowed_origins is empty, cross-origin requests are blocked");
            return CorsLayer::new();
        }
        return CorsLayer::very_permissive();
    }

    let origins: Vec<HeaderValue> = settings
        .app
        .allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin '{}'", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .allow_credentials(true)
}

/// Creates the configured administrator when no user exists yet.
///
/// Does nothing when users already exist or no `[bootstrap]` section is configured; in the
/// latter case a warning is logged since nobody could log in.
pub async fn bootstrap_admin(db: &DatabaseConnection, settings: &Settings) -> Result<(), AppError> {
    if UserRepository::new(db).count().await? > 0 {
        return Ok(());
    }

    let Some(bootstrap) = &settings.bootstrap else {
        tracing::warn!("No users exist and no [bootstrap] admin is configured");
        return Ok(());
    };

    let admin_type = PermissionRepository::new(db)
        .find_user_type_by_name(Role::Admin.as_str())
        .await?
        .ok_or_else(|| AppError::InternalError("admin user type is missing".to_string()))?;

    let admin = UserService::new(db)
        .create(CreateUserParam {
            email: bootstrap.admin_email.trim().to_string(),
            name: bootstrap.admin_name.trim().to_string(),
            password: bootstrap.admin_password.clone(),
            sector_id: None,
            type_ids: vec![admin_type.id],
        })
        .await?;

    tracing::info!("Created bootstrap administrator {}", admin.email);

    Ok(())
}
