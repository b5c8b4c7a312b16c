/// Reel Server - Multi-user playlist curation server
use clap::{Parser, Subcommand};
use reel_core::types::User;
use reel_server::{
    api,
    config::ServerConfig,
    services::{AuthService, CurationService},
    state::AppState,
};
use reel_youtube::{MetadataResolver, YouTubeClient, YouTubeConfig};
use std::{net::SocketAddr, sync::Arc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "reel-server")]
#[command(about = "Reel playlist curation server", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Configuration file path
        #[arg(short, long)]
        config: Option<String>,
    },
    /// Create a new user account
    AddUser {
        /// Email address (login key)
        #[arg(short, long)]
        email: String,
        /// Display name
        #[arg(short, long)]
        username: String,
        /// Password
        #[arg(short, long)]
        password: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "reel_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config } => {
            serve(config.as_deref()).await?;
        }
        Commands::AddUser {
            email,
            username,
            password,
        } => {
            add_user(&email, &username, &password).await?;
        }
    }

    Ok(())
}

async fn serve(config_path: Option<&str>) -> anyhow::Result<()> {
    let config = ServerConfig::load(config_path)?;
    config.validate()?;

    tracing::info!("Starting Reel Server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);

    // Initialize database
    let pool = reel_storage::create_pool(&config.storage.database_url).await?;
    reel_storage::run_migrations(&pool).await?;
    tracing::info!("Database connected");

    // Initialize the metadata provider
    let mut youtube_config = YouTubeConfig::new(config.youtube.api_key.clone());
    youtube_config.timeout_secs = config.youtube.timeout_secs;
    let youtube = YouTubeClient::new(youtube_config)?;
    let resolver = MetadataResolver::new(Arc::new(youtube));
    tracing::info!("YouTube client initialized");

    // Initialize services
    let auth_service = Arc::new(AuthService::new(
        config.auth.jwt_secret.clone(),
        config.auth.jwt_expiration_hours,
        config.auth.jwt_refresh_expiration_days,
    ));
    let curation = Arc::new(CurationService::new(pool.clone(), resolver));

    // Build application state and router
    let app_state = AppState::new(pool, auth_service, curation);
    let app = api::create_router(app_state);

    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn add_user(email: &str, username: &str, password: &str) -> anyhow::Result<()> {
    anyhow::ensure!(email.contains('@'), "invalid email address: {email}");
    anyhow::ensure!(
        password.len() >= 8,
        "password must be at least 8 characters"
    );

    let config = ServerConfig::load(None)?;
    let pool = reel_storage::create_pool(&config.storage.database_url).await?;
    reel_storage::run_migrations(&pool).await?;

    let auth_service = AuthService::new(
        config.auth.jwt_secret.clone(),
        config.auth.jwt_expiration_hours,
        config.auth.jwt_refresh_expiration_days,
    );

    let user = User::new(email, username);
    reel_storage::users::create(&pool, &user).await?;

    let password_hash = auth_service.hash_password(password)?;
    reel_storage::users::set_password_hash(&pool, &user.id, &password_hash).await?;

    println!("Created user {} <{}> with id {}", username, email, user.id);

    Ok(())
}
