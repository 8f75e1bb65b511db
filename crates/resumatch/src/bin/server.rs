//! Resumatch server binary
//!
//! Run with: cargo run -p resumatch --bin resumatch-server

use resumatch::{config::ResumatchConfig, server::ResumatchServer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "resumatch=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!(
        r#"
╔═══════════════════════════════════════════════════════════╗
║                         Resumatch                         ║
║        Resume Ingestion and Skill Tagging Service         ║
╚═══════════════════════════════════════════════════════════╝
"#
    );

    // Load configuration
    let config = match std::env::var("RESUMATCH_CONFIG") {
        Ok(path) => ResumatchConfig::from_file(&path)?,
        Err(_) => ResumatchConfig::default(),
    };

    tracing::info!("Configuration loaded");
    tracing::info!("  - Data directory: {}", config.storage.data_dir.display());
    tracing::info!("  - Chunk size: {} tokens", config.chunking.chunk_size_tokens);
    tracing::info!("  - Chunk overlap: {} tokens", config.chunking.overlap_tokens);
    tracing::info!("  - Max skill tags: {}", config.tagging.max_tags);

    // Create and start server
    let server = ResumatchServer::new(config)?;

    println!("\nServer starting...");
    println!("  API: http://{}", server.address());
    println!("  Health: http://{}/health", server.address());
    println!("  API Info: http://{}/api/info", server.address());
    println!("\nEndpoints:");
    println!("  POST   /api/resumes/upload   - Upload a resume");
    println!("  GET    /api/resumes          - List resumes");
    println!("  GET    /api/resumes/:id      - Resume details");
    println!("  DELETE /api/resumes/:id      - Delete a resume");
    println!("  GET    /api/resumes/:id/file - Download original file");
    println!("  POST   /api/match            - Match against a job description");
    println!("\nPress Ctrl+C to stop\n");

    server.start().await?;

    Ok(())
}
