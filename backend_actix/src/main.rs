pub mod modules;
pub use modules::{auth, comment, reply, thread};
pub mod api;
pub mod config;
pub mod health;
pub mod shared;

use crate::api::openapi::ApiDoc;
use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::adapter::outgoing::security::argon2_hasher::Argon2Hasher;
use crate::auth::adapter::outgoing::token_repository_redis::RedisTokenRepository;
use crate::auth::adapter::outgoing::user_query_postgres::UserQueryPostgres;
use crate::auth::adapter::outgoing::user_repository_postgres::UserRepositoryPostgres;
use crate::auth::application::ports::outgoing::TokenProvider;
use crate::auth::application::use_cases::{
    create_user::{CreateUserUseCase, ICreateUserUseCase},
    login_user::{ILoginUserUseCase, LoginUserUseCase},
    logout_user::{ILogoutUseCase, LogoutUseCase},
    refresh_token::{IRefreshTokenUseCase, RefreshTokenUseCase},
};
use crate::comment::adapter::outgoing::CommentRepositoryPostgres;
use crate::comment::application::ports::incoming::use_cases::{
    AddCommentUseCase, DeleteCommentUseCase,
};
use crate::comment::application::services::{AddCommentService, DeleteCommentService};
use crate::config::{load_dotenv, AppConfig, ConfigError};
use crate::reply::adapter::outgoing::ReplyRepositoryPostgres;
use crate::reply::application::ports::incoming::use_cases::{AddReplyUseCase, DeleteReplyUseCase};
use crate::reply::application::services::{AddReplyService, DeleteReplyService};
use crate::shared::api::{custom_json_config, custom_path_config};
use crate::shared::id_generator::{IdGenerator, UuidV4Generator};
use crate::thread::adapter::outgoing::ThreadRepositoryPostgres;
use crate::thread::application::ports::incoming::use_cases::{
    AddThreadUseCase, GetThreadDetailUseCase,
};
use crate::thread::application::services::{AddThreadService, GetThreadDetailService};

use actix_web::{middleware::Logger, web, App, HttpServer};
use deadpool_redis::{Config as RedisConfig, CreatePoolError, Runtime};
use mockable::{Clock, DefaultClock};
use sea_orm::{ConnectOptions, Database, DbErr};
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub create_user_use_case: Arc<dyn ICreateUserUseCase + Send + Sync>,
    pub login_user_use_case: Arc<dyn ILoginUserUseCase + Send + Sync>,
    pub refresh_token_use_case: Arc<dyn IRefreshTokenUseCase + Send + Sync>,
    pub logout_user_use_case: Arc<dyn ILogoutUseCase + Send + Sync>,
    pub add_thread_use_case: Arc<dyn AddThreadUseCase + Send + Sync>,
    pub get_thread_detail_use_case: Arc<dyn GetThreadDetailUseCase + Send + Sync>,
    pub add_comment_use_case: Arc<dyn AddCommentUseCase + Send + Sync>,
    pub delete_comment_use_case: Arc<dyn DeleteCommentUseCase + Send + Sync>,
    pub add_reply_use_case: Arc<dyn AddReplyUseCase + Send + Sync>,
    pub delete_reply_use_case: Arc<dyn DeleteReplyUseCase + Send + Sync>,
}

#[derive(Debug, Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to connect to database: {0}")]
    Database(#[from] DbErr),

    #[error("Failed to create Redis pool: {0}")]
    Redis(#[from] CreatePoolError),

    #[error("Server error: {0}")]
    Io(#[from] std::io::Error),
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> Result<(), StartupError> {
    load_dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting forum API...");

    let config = AppConfig::from_env()?;
    let server_url = config.server_url();

    // Database connection
    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(config.db_pool.max_connections)
        .min_connections(config.db_pool.min_connections)
        .connect_timeout(config.db_pool.connect_timeout)
        .acquire_timeout(config.db_pool.connect_timeout)
        .idle_timeout(config.db_pool.idle_timeout)
        .sqlx_logging(false);

    let db_arc = Arc::new(Database::connect(opt).await?);

    // Redis connection
    let redis_pool = RedisConfig::from_url(&config.redis_url).create_pool(Some(Runtime::Tokio1))?;
    let redis_arc = Arc::new(redis_pool);

    let ids: Arc<dyn IdGenerator> = Arc::new(UuidV4Generator);
    let clock: Arc<dyn Clock> = Arc::new(DefaultClock);

    let jwt_service = JwtTokenService::new(JwtConfig::from_env()?);
    let token_provider: Arc<dyn TokenProvider> = Arc::new(jwt_service.clone());
    let password_hasher = Arc::new(Argon2Hasher::from_env()?);

    // Auth
    let user_repo =
        UserRepositoryPostgres::new(Arc::clone(&db_arc), Arc::clone(&ids), Arc::clone(&clock));
    let user_query = UserQueryPostgres::new(Arc::clone(&db_arc));
    let token_repo = RedisTokenRepository::new(Arc::clone(&redis_arc));

    let create_user_use_case =
        CreateUserUseCase::new(user_query.clone(), user_repo, password_hasher.clone());
    let login_user_use_case = LoginUserUseCase::new(
        user_query.clone(),
        token_repo.clone(),
        password_hasher,
        Arc::clone(&token_provider),
    );
    let refresh_token_use_case =
        RefreshTokenUseCase::new(token_repo.clone(), Arc::clone(&token_provider));
    let logout_user_use_case = LogoutUseCase::new(token_repo);

    // Forum
    let threads =
        ThreadRepositoryPostgres::new(Arc::clone(&db_arc), Arc::clone(&ids), Arc::clone(&clock));
    let comments =
        CommentRepositoryPostgres::new(Arc::clone(&db_arc), Arc::clone(&ids), Arc::clone(&clock));
    let replies =
        ReplyRepositoryPostgres::new(Arc::clone(&db_arc), Arc::clone(&ids), Arc::clone(&clock));

    let state = AppState {
        create_user_use_case: Arc::new(create_user_use_case),
        login_user_use_case: Arc::new(login_user_use_case),
        refresh_token_use_case: Arc::new(refresh_token_use_case),
        logout_user_use_case: Arc::new(logout_user_use_case),
        add_thread_use_case: Arc::new(AddThreadService::new(threads.clone())),
        get_thread_detail_use_case: Arc::new(GetThreadDetailService::new(
            threads.clone(),
            comments.clone(),
            replies.clone(),
            user_query,
        )),
        add_comment_use_case: Arc::new(AddCommentService::new(threads.clone(), comments.clone())),
        delete_comment_use_case: Arc::new(DeleteCommentService::new(
            threads.clone(),
            comments.clone(),
        )),
        add_reply_use_case: Arc::new(AddReplyService::new(
            threads.clone(),
            comments.clone(),
            replies.clone(),
        )),
        delete_reply_use_case: Arc::new(DeleteReplyService::new(threads, comments, replies)),
    };

    let extractor_token_provider: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service);
    let openapi = ApiDoc::openapi();

    info!(%server_url, "Server listening");

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&extractor_token_provider)))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .app_data(web::Data::new(Arc::clone(&redis_arc)))
            .app_data(custom_json_config())
            .app_data(custom_path_config())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi.clone()),
            )
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::register_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::login_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::refresh_token_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::logout_user_handler);
    // Threads
    cfg.service(crate::thread::adapter::incoming::web::routes::add_thread_handler);
    cfg.service(crate::thread::adapter::incoming::web::routes::get_thread_detail_handler);
    // Comments
    cfg.service(crate::comment::adapter::incoming::web::routes::add_comment_handler);
    cfg.service(crate::comment::adapter::incoming::web::routes::delete_comment_handler);
    // Replies
    cfg.service(crate::reply::adapter::incoming::web::routes::add_reply_handler);
    cfg.service(crate::reply::adapter::incoming::web::routes::delete_reply_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        error!(error = %e, "Error starting app");
        eprintln!("Error starting app: {e}");
        std::process::exit(1);
    }
}
