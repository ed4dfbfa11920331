use std::sync::Arc;

use axum::http::HeaderValue;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    services::ServeDir,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use chef_chat_backend::{
    config::Config,
    routes,
    services::{
        chatbot::ChatService,
        llm_client::{LlmClient, OpenAiClient},
        session_manager::SessionManager,
    },
    state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cfg = Config::from_env();

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&cfg.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt().with_env_filter(env_filter);
    if cfg.log_json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    let llm: Option<Arc<dyn LlmClient>> = match &cfg.openai_api_key {
        Some(key) => Some(Arc::new(OpenAiClient::with_base_url(
            key.clone(),
            cfg.openai_base_url.clone(),
        ))),
        None => {
            warn!("OPENAI_API_KEY not set; replies will ask for configuration");
            None
        }
    };

    let chat = ChatService::new(SessionManager::new(), llm, cfg.chat.clone());
    let state = Arc::new(AppState::new(chat));

    let app = routes::create_router()
        .fallback_service(ServeDir::new(&cfg.static_dir))
        .with_state(state)
        .layer(cors_layer(&cfg.cors_origins));

    let addr = cfg.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(%addr, model = %cfg.chat.model, "chef chat backend running");
    axum::serve(listener, app).await?;
    Ok(())
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        return CorsLayer::very_permissive();
    }
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|o| match o.parse() {
            Ok(v) => Some(v),
            Err(_) => {
                warn!(origin = %o, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    CorsLayer::very_permissive().allow_origin(AllowOrigin::list(allowed))
}
