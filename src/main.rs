use anyhow::Context;
use clap::{Parser, Subcommand};
use outfit_color::{verdict_message, OutfitChecker};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use outfit_match::api;
use outfit_match::models::{AppConfig, Favorite};
use outfit_match::server;

#[derive(Parser)]
#[command(name = "outfit-match")]
#[command(about = "Outfit Match - check whether clothing colors go together")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Compare two garment images by hue/saturation histogram
    Compare {
        /// First garment image (JPEG or PNG)
        first: PathBuf,

        /// Second garment image (JPEG or PNG)
        second: PathBuf,

        /// Similarity percentage the pair must exceed
        #[arg(short, long)]
        threshold: Option<f64>,
    },
    /// Print the dominant color of one or more images
    Color {
        /// Images to analyze (JPEG or PNG)
        #[arg(required = true)]
        images: Vec<PathBuf>,
    },
    /// Name two base pieces and score them, plus any accessories
    Outfit {
        /// First base piece, e.g. the top
        first: PathBuf,

        /// Second base piece, e.g. the bottom
        second: PathBuf,

        /// Accessory image (repeatable)
        #[arg(short, long = "accessory")]
        accessories: Vec<PathBuf>,
    },
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Outfit Match API",
        description = "Clothing color match checker",
        version = "0.1.0",
        license(name = "MIT")
    ),
    paths(
        api::handle_compare,
        api::handle_colors,
        api::handle_outfit,
        api::handle_create_session,
        api::handle_end_session,
        api::handle_list_favorites,
        api::handle_add_favorite,
        api::handle_delete_favorite,
    ),
    components(schemas(
        api::CompareRequest,
        api::CompareResponse,
        api::ColorRequest,
        api::ColorInfo,
        api::OutfitRequest,
        api::OutfitResponse,
        api::PairVerdict,
        api::AccessoryVerdict,
        api::SessionResponse,
        api::FavoriteRequest,
        api::FavoritesResponse,
        Favorite,
    )),
    tags(
        (name = "Matching", description = "Color extraction and match checks"),
        (name = "Session", description = "Session lifecycle"),
        (name = "Favorites", description = "Session-scoped saved outfits")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Serve) => run_server().await,
        Some(Commands::Compare {
            first,
            second,
            threshold,
        }) => run_compare_command(&first, &second, threshold),
        Some(Commands::Color { images }) => run_color_command(&images),
        Some(Commands::Outfit {
            first,
            second,
            accessories,
        }) => run_outfit_command(&first, &second, &accessories),
        None => {
            run_status_command();
            Ok(())
        }
    }
}

/// Minimal logging for one-shot commands
fn init_cli_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "outfit_match=warn,outfit_color=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();
}

fn config_path() -> Option<PathBuf> {
    std::env::var("CONFIG_FILE").ok().map(PathBuf::from)
}

fn read_image(path: &Path) -> anyhow::Result<Vec<u8>> {
    std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Compare two images from disk (no server needed)
fn run_compare_command(first: &Path, second: &Path, threshold: Option<f64>) -> anyhow::Result<()> {
    init_cli_logging();

    let config = AppConfig::load(config_path().as_deref());
    let threshold = threshold.unwrap_or(config.similarity_threshold);

    let checker = OutfitChecker::new();
    let result = checker
        .compare_images_with(&read_image(first)?, &read_image(second)?, threshold)
        .with_context(|| format!("Failed to compare {} and {}", first.display(), second.display()))?;

    println!(
        "Similarity: {:.2}% (threshold {:.2}%)",
        result.similarity, result.threshold
    );
    println!("{}", verdict_message(result.matches));

    Ok(())
}

/// Print dominant colors of images from disk
fn run_color_command(images: &[PathBuf]) -> anyhow::Result<()> {
    init_cli_logging();

    let checker = OutfitChecker::new();
    for path in images {
        let reading = checker
            .read_color(&read_image(path)?)
            .with_context(|| format!("Failed to analyze {}", path.display()))?;
        println!(
            "{}: {} {} {}",
            path.display(),
            reading.rgb,
            reading.rgb.to_hex(),
            reading.name
        );
    }

    Ok(())
}

/// Score an outfit from images on disk
fn run_outfit_command(first: &Path, second: &Path, accessories: &[PathBuf]) -> anyhow::Result<()> {
    init_cli_logging();

    let accessory_bytes = accessories
        .iter()
        .map(|path| read_image(path))
        .collect::<anyhow::Result<Vec<_>>>()?;

    let report = OutfitChecker::new()
        .evaluate_outfit(&read_image(first)?, &read_image(second)?, &accessory_bytes)
        .context("Failed to evaluate outfit")?;

    println!("First:  {} {}", report.first.name, report.first.rgb);
    println!("Second: {} {}", report.second.name, report.second.rgb);
    match report.pair.compatibility {
        Some(score) => println!("Compatibility: {score}/100"),
        None => println!("Compatibility: no rule for this pair"),
    }
    println!("{}", verdict_message(report.pair.matches));

    for (path, accessory) in accessories.iter().zip(&report.accessories) {
        println!(
            "Accessory {}: {} (score {}/100)",
            path.display(),
            accessory.reading.name,
            accessory.score
        );
    }

    Ok(())
}

/// Display status and configuration information
fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let bind_addr = std::env::var("BIND_ADDR").ok();
    let config_file = std::env::var("CONFIG_FILE").ok();

    println!("Outfit Match v{VERSION}");
    println!("Clothing color match checker\n");

    println!("Environment Variables:");
    println!(
        "  BIND_ADDR   = {}",
        bind_addr.as_deref().unwrap_or("0.0.0.0:3000 (default)")
    );
    println!(
        "  CONFIG_FILE = {}",
        config_file.as_deref().unwrap_or("(not set)")
    );

    let config_source = match config_file {
        Some(ref path) if Path::new(path).exists() => path.to_string(),
        Some(_) => "defaults (file not found)".to_string(),
        None => "defaults".to_string(),
    };
    println!("\nConfig: {config_source}");

    println!("\nCommands:");
    println!("  outfit-match serve     Start the HTTP server");
    println!("  outfit-match compare   Compare two images by histogram");
    println!("  outfit-match color     Print dominant colors");
    println!("  outfit-match outfit    Score an outfit by named colors");
    println!("\nRun 'outfit-match --help' for more details.");
}

/// Run the HTTP server
async fn run_server() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "outfit_match=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut config = AppConfig::load(config_path().as_deref());
    if let Ok(bind_addr) = std::env::var("BIND_ADDR") {
        config.bind_addr = bind_addr;
    }
    let bind_addr = config.bind_addr.clone();

    let state = server::create_app_state(config)?;

    let app = server::build_router(state)
        // OpenAPI documentation (production only)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "Outfit Match server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
