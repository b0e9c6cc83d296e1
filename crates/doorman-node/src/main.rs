//! Doorman Node - serves the user status panel pages.
//!
//! This is the main entry point for running a Doorman server.

use axum::{response::IntoResponse, routing::get, Json};
use clap::Parser;
use doorman_auth::{AuthStore, DEFAULT_SESSION_TTL_SECS};
use doorman_web::{web_routes, WebConfig, WebState};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Doorman - session-aware user status panel server
#[derive(Parser, Debug)]
#[command(name = "doorman-node")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Listen address
    #[arg(long, default_value = "127.0.0.1:8080")]
    addr: SocketAddr,

    /// Path of the sign-in page
    #[arg(long, default_value = "/signin")]
    sign_in_path: String,

    /// Redirect target after signing out
    #[arg(long, default_value = "/")]
    post_sign_out_redirect: String,

    /// Session lifetime in seconds
    #[arg(long, default_value_t = DEFAULT_SESSION_TTL_SECS)]
    session_ttl_secs: u64,

    /// Set the Secure flag on session cookies (requires TLS)
    #[arg(long)]
    cookie_secure: bool,

    /// Seed account in NAME:PASSWORD form (repeatable)
    #[arg(long = "seed-user", value_name = "NAME:PASSWORD")]
    seed_users: Vec<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

/// Split a `NAME:PASSWORD` seed argument.
fn parse_seed(raw: &str) -> Option<(&str, &str)> {
    let (name, password) = raw.split_once(':')?;
    if name.is_empty() || password.is_empty() {
        return None;
    }
    Some((name, password))
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!(
                    "doorman_node={l},doorman_web={l},doorman_auth={l},tower_http=debug,axum::rejection=trace",
                    l = args.log_level
                )
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting Doorman node");

    let auth = Arc::new(AuthStore::new());
    for raw in &args.seed_users {
        let Some((name, password)) = parse_seed(raw) else {
            tracing::error!(seed = %raw, "seed user must be NAME:PASSWORD");
            std::process::exit(1);
        };
        match auth.create_user(name.to_owned(), None, password) {
            Ok(user) => tracing::info!(username = %user.username, "seeded user"),
            Err(e) => {
                tracing::error!(username = %name, error = %e, "failed to seed user");
                std::process::exit(1);
            }
        }
    }

    let config = WebConfig {
        sign_in_path: args.sign_in_path,
        post_sign_out_redirect: args.post_sign_out_redirect,
        session_ttl_secs: args.session_ttl_secs,
        cookie_secure: args.cookie_secure,
    };

    tracing::info!(
        addr = %args.addr,
        sign_in_path = %config.sign_in_path,
        session_ttl_secs = config.session_ttl_secs,
        cookie_secure = config.cookie_secure,
        "Node configuration"
    );

    let state = WebState {
        auth,
        config: config.clone(),
    };
    let app = web_routes(&config)
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let listener = match tokio::net::TcpListener::bind(args.addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(error = %e, addr = %args.addr, "Failed to bind listen address");
            std::process::exit(1);
        }
    };

    tracing::info!(addr = %args.addr, "Doorman node is ready");
    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "Server failed");
        std::process::exit(1);
    }
}

/// Health check endpoint.
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
