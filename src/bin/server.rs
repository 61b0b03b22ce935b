//! Reference server binary.
//!
//! Serves the viewer's upstream HTTP boundary from a references directory and
//! an optional entity seed file. Configuration comes from the environment:
//! `NEXUS_REFERENCES_DIR`, `NEXUS_ENTITIES_FILE`, `NEXUS_AGENT_URL`, `PORT`.

use anyhow::Context;
use entity_nexus::api::{create_router, AppState};
use entity_nexus::store::{EntityStore, ReferenceStore};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "entity_nexus=info,tower_http=debug".to_string()),
        )
        .init();

    dotenvy::dotenv().ok();

    let references_dir =
        std::env::var("NEXUS_REFERENCES_DIR").unwrap_or_else(|_| "references".to_string());
    let references = ReferenceStore::new(&references_dir);
    info!(
        dir = %references_dir,
        modules = references.modules().len(),
        "reference store ready"
    );

    let entities = match std::env::var("NEXUS_ENTITIES_FILE") {
        Ok(path) => match EntityStore::from_file(&path) {
            Ok(store) => {
                info!(%path, entities = store.entity_count(), "entity store loaded");
                store
            }
            Err(e) => {
                warn!(%path, %e, "entity seed unreadable, serving empty store");
                EntityStore::default()
            }
        },
        Err(_) => EntityStore::default(),
    };

    let agent_upstream = std::env::var("NEXUS_AGENT_URL").ok();
    let app = create_router(AppState::new(references, entities, agent_upstream));

    let port = std::env::var("PORT")
        .unwrap_or_else(|_| "8000".to_string())
        .parse::<u16>()
        .unwrap_or(8000);
    let addr = format!("0.0.0.0:{}", port);
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}
