use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use ogview::api;
use ogview::assets::AssetLoader;
use ogview::models::PreviewColors;
use ogview::server;

#[derive(Parser)]
#[command(name = "ogview")]
#[command(about = "Open Graph preview mockups with adaptive colors")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Scrape a URL and print its metadata and colors as JSON
    Preview {
        /// Page URL (scheme optional)
        #[arg(short, long)]
        url: String,
    },
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "ogview API",
        description = "Open Graph preview mockups with adaptive colors",
        version = "0.3.0",
        license(name = "MIT")
    ),
    paths(api::handle_preview, api::handle_colors, api::handle_mockup),
    components(schemas(
        api::PreviewResponse,
        ogview::models::OgData,
        ogview::models::PreviewColors,
    )),
    tags(
        (name = "Preview", description = "Metadata scraping and color computation"),
        (name = "Mockup", description = "Rendered platform mockups")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Serve) => run_server().await,
        Some(Commands::Preview { url }) => run_preview_command(&url).await,
        None => {
            run_status_command();
            Ok(())
        }
    }
}

/// Create an asset loader from the optional override env vars.
fn asset_loader_from_env() -> Arc<AssetLoader> {
    let templates_dir = std::env::var("TEMPLATES_DIR").ok().map(PathBuf::from);
    let config_file = std::env::var("CONFIG_FILE").ok().map(PathBuf::from);
    Arc::new(AssetLoader::new(templates_dir, config_file))
}

async fn run_server() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ogview=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let asset_loader = asset_loader_from_env();
    let state = server::create_app_state(asset_loader)?;
    let bind_addr = state.config.listen.clone();

    // Build router: shared API routes plus OpenAPI documentation
    let app = server::build_router(state)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "ogview server listening");

    axum::serve(listener, app).await?;

    Ok(())
}

/// One-shot scrape: print metadata and colors to stdout (no server needed)
async fn run_preview_command(url: &str) -> anyhow::Result<()> {
    // Minimal logging for CLI
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ogview=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let state = server::create_app_state(asset_loader_from_env())?;

    let og = state.scraper.fetch(url).await?;
    let (palette, _) = api::preview::resolve_palette(&og, &state).await;

    let output = serde_json::json!({
        "og": og,
        "colors": PreviewColors::from(&palette),
    });
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}

/// Display status and configuration information
fn run_status_command() {
    println!("ogview {} - Open Graph preview mockups", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Commands:");
    println!("  serve               Start the HTTP server");
    println!("  preview --url URL   Print metadata and colors for a URL");
    println!();
    println!("Embedded mockup templates:");
    for name in AssetLoader::list_embedded_templates() {
        println!("  {name}");
    }
    println!();
    println!("Environment:");
    println!("  TEMPLATES_DIR       Override embedded mockup templates");
    println!("  CONFIG_FILE         Override embedded config.yaml");
    println!("  RUST_LOG            Tracing filter (default: ogview=debug)");
}
