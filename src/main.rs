use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use bead_quant::{render_chart, render_preview, FilterStyle, Vendor};
use beadgrid::api;
use beadgrid::assets::{AssetCategory, AssetLoader};
use beadgrid::models::{AppConfig, GridQuery, GridRequest};
use beadgrid::server;
use beadgrid::services::{GridService, PaletteStore};

#[derive(Parser)]
#[command(name = "beadgrid")]
#[command(about = "Turn images into fuse-bead patterns")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Convert an image file into a bead chart
    Convert {
        /// Input image (PNG, JPEG, GIF or WebP)
        image: PathBuf,

        /// Grid side length (defaults to the configured size)
        #[arg(short, long)]
        size: Option<u32>,

        /// Palette style: none, candy or grayscale
        #[arg(long)]
        style: Option<String>,

        /// Scale policy: contain or stretch
        #[arg(long)]
        scale: Option<String>,

        /// Vendor whose codes are printed (e.g. mard, coco, manman, panpan, mixiaowo)
        #[arg(short, long, default_value = "mard")]
        vendor: Vendor,

        /// Write the grid as JSON to this file instead of printing a chart
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Write a PNG preview to this file
        #[arg(short, long)]
        preview: Option<PathBuf>,

        /// Preview pixels per bead (1-128)
        #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..=128))]
        cell_px: u32,
    },
    /// List the bead palette
    Palette {
        /// Only list colors kept by this style
        #[arg(long, default_value = "none")]
        style: FilterStyle,
    },
    /// Extract embedded assets to filesystem for customization
    Init {
        /// Extract palette.json
        #[arg(long)]
        palette: bool,

        /// Extract config.yaml
        #[arg(long)]
        config: bool,

        /// Extract all assets
        #[arg(long)]
        all: bool,

        /// Overwrite existing files
        #[arg(long, short)]
        force: bool,

        /// List embedded assets without extracting
        #[arg(long)]
        list: bool,
    },
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "beadgrid API",
        description = "Turn images into fuse-bead patterns with per-vendor color codes",
        version = "0.1.0",
        license(name = "MIT")
    ),
    paths(api::handle_generate, api::handle_edit, api::handle_palette),
    components(schemas(
        api::GridResponse,
        api::EditRequest,
        api::EditResponse,
        api::PaletteResponse,
    )),
    tags(
        (name = "Grid", description = "Grid generation and editing"),
        (name = "Palette", description = "Bead palette listing")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Convert {
            image,
            size,
            style,
            scale,
            vendor,
            output,
            preview,
            cell_px,
        }) => {
            let query = GridQuery { size, style, scale };
            run_convert_command(&image, &query, vendor, output.as_deref(), preview.as_deref(), cell_px)
        }
        Some(Commands::Palette { style }) => run_palette_command(style),
        Some(Commands::Init {
            palette,
            config,
            all,
            force,
            list,
        }) => run_init_command(palette, config, all, force, list),
        Some(Commands::Serve) => run_server().await,
        None => {
            run_status_command();
            Ok(())
        }
    }
}

/// Minimal logging for CLI commands
fn init_cli_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "beadgrid=warn,bead_quant=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();
}

/// Convert an image file to a chart, JSON grid and/or preview (no server needed)
fn run_convert_command(
    image: &Path,
    query: &GridQuery,
    vendor: Vendor,
    output: Option<&Path>,
    preview: Option<&Path>,
    cell_px: u32,
) -> anyhow::Result<()> {
    init_cli_tracing();

    let loader = AssetLoader::from_env();
    let config = AppConfig::load_from_assets(&loader);
    let palette = std::sync::Arc::new(PaletteStore::load_from_assets(&loader));
    let service = GridService::new(palette, config.tone);

    let request = GridRequest::resolve(query, &config.grid)?;
    let bytes = std::fs::read(image)?;
    let grid = service.generate_blocking(&bytes, request)?;

    if let Some(path) = output {
        std::fs::write(path, serde_json::to_vec_pretty(&grid)?)?;
        println!("Wrote {}x{} grid to {}", grid.size(), grid.size(), path.display());
    } else {
        print!("{}", render_chart(&grid, vendor));
    }

    if let Some(path) = preview {
        render_preview(&grid, cell_px)?.save(path)?;
        println!("Wrote preview to {}", path.display());
    }

    println!("\nBeads ({vendor}):");
    for count in grid.bead_counts() {
        let code = count.codes.get(vendor).unwrap_or("?");
        println!("  {code:<6} {:<8} x{}", count.hex, count.count);
    }

    Ok(())
}

/// Print the palette, optionally narrowed by a style
fn run_palette_command(style: FilterStyle) -> anyhow::Result<()> {
    init_cli_tracing();

    let palette = PaletteStore::load_from_assets(&AssetLoader::from_env());
    let entries = palette.filtered(style);

    print!("{:<8}", "HEX");
    for vendor in Vendor::ALL {
        print!(" {:<6}", vendor.alias());
    }
    println!();

    for entry in entries.iter() {
        print!("{:<8}", entry.hex);
        for vendor in Vendor::ALL {
            print!(" {:<6}", entry.codes.get(vendor).unwrap_or("-"));
        }
        println!();
    }

    println!("\n{} of {} colors ({style})", entries.len(), palette.len());
    Ok(())
}

/// Extract embedded assets to filesystem
fn run_init_command(
    palette: bool,
    config: bool,
    all: bool,
    force: bool,
    list: bool,
) -> anyhow::Result<()> {
    if list {
        println!("Embedded assets:\n");
        println!("Palette:");
        for f in AssetLoader::list_embedded(AssetCategory::Palette) {
            println!("  {f}");
        }
        println!("\nConfig:");
        for f in AssetLoader::list_embedded(AssetCategory::Config) {
            println!("  {f}");
        }
        return Ok(());
    }

    // Determine which categories to extract
    let mut categories = Vec::new();
    if all || palette {
        categories.push(AssetCategory::Palette);
    }
    if all || config {
        categories.push(AssetCategory::Config);
    }

    if categories.is_empty() {
        eprintln!("No categories specified. Use --all, --palette, or --config");
        eprintln!("\nRun 'beadgrid init --list' to see embedded assets.");
        std::process::exit(1);
    }

    let report = AssetLoader::from_env().init(&categories, force)?;

    if !report.written.is_empty() {
        println!("Extracted {} files:", report.written.len());
        for f in &report.written {
            println!("  + {f}");
        }
    }

    if !report.skipped.is_empty() {
        println!(
            "\nSkipped {} existing files (use --force to overwrite):",
            report.skipped.len()
        );
        for f in &report.skipped {
            println!("  - {f}");
        }
    }

    Ok(())
}

/// Display status and configuration information
fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let bind_addr = std::env::var("BIND_ADDR").ok();
    let config_file = std::env::var("CONFIG_FILE").ok();
    let palette_file = std::env::var("PALETTE_FILE").ok();

    println!("beadgrid v{VERSION}");
    println!("Fuse-bead pattern generator\n");

    println!("Environment Variables:");
    println!(
        "  BIND_ADDR    = {}",
        bind_addr.as_deref().unwrap_or("0.0.0.0:3000 (default)")
    );
    println!(
        "  CONFIG_FILE  = {}",
        config_file.as_deref().unwrap_or("(not set)")
    );
    println!(
        "  PALETTE_FILE = {}",
        palette_file.as_deref().unwrap_or("(not set)")
    );

    let loader = AssetLoader::from_env();
    let palette = PaletteStore::load_from_assets(&loader);

    println!("\nAsset Sources:");
    println!("  Config:  {}", loader.source(AssetCategory::Config));
    println!(
        "  Palette: {} ({} colors)",
        loader.source(AssetCategory::Palette),
        palette.len()
    );

    println!("\nCommands:");
    println!("  beadgrid serve     Start the HTTP server");
    println!("  beadgrid convert   Convert an image to a bead chart");
    println!("  beadgrid palette   List palette colors");
    println!("  beadgrid init      Extract embedded assets");
    println!("\nRun 'beadgrid --help' for more details.");
}

/// Run the HTTP server
async fn run_server() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "beadgrid=debug,bead_quant=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let asset_loader = AssetLoader::from_env();

    tracing::info!(
        config = %asset_loader.source(AssetCategory::Config),
        palette = %asset_loader.source(AssetCategory::Palette),
        "Asset sources configured"
    );

    let state = server::create_app_state(&asset_loader);

    // Build router: start with shared API routes, add production-only routes
    let app = server::build_router(state)
        // OpenAPI documentation (production only)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "beadgrid server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
