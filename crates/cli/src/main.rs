use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use serde::Serialize;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use catalog_loader::{JsonFileSource, Product, ProductId};
use catalog_service::{CatalogService, QueryError, health};
use pipeline::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE, PagedResult, SearchCriteria};

/// Product catalog queries over a JSON catalog file
#[derive(Parser)]
#[command(name = "catalog")]
#[command(about = "Query a product catalog: list, fetch by id, compare", long_about = None)]
struct Cli {
    /// Path to the JSON product catalog
    #[arg(short, long, env = "CATALOG_DATA_FILE", default_value = "data/productos.json")]
    data_file: PathBuf,

    /// Print raw JSON instead of formatted output
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List products with optional filters and pagination
    List {
        /// Name substring (case-insensitive)
        #[arg(long)]
        name: Option<String>,

        /// Exact category (case-insensitive)
        #[arg(long)]
        category: Option<String>,

        /// Inclusive minimum price
        #[arg(long)]
        price_min: Option<f64>,

        /// Inclusive maximum price
        #[arg(long)]
        price_max: Option<f64>,

        /// Zero-based page index
        #[arg(long, default_value_t = DEFAULT_PAGE)]
        page: usize,

        /// Products per page
        #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
        page_size: NonZeroUsize,
    },

    /// Show a single product
    Get {
        /// Product ID
        id: ProductId,
    },

    /// Show several products side by side
    Compare {
        /// Product IDs, comma or space separated
        #[arg(value_delimiter = ',', allow_hyphen_values = true)]
        ids: Vec<String>,
    },

    /// Check that the catalog can be read
    Health,
}

fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            match err.downcast_ref::<QueryError>() {
                Some(query_err) => {
                    eprintln!("{}: {}", query_err.title().red().bold(), query_err)
                }
                None => eprintln!("{} {:#}", "error:".red().bold(), err),
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    tracing::debug!("Using product catalog at {}", cli.data_file.display());
    let source = Arc::new(JsonFileSource::new(cli.data_file.clone()));
    let service = CatalogService::new(source);

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::List {
            name,
            category,
            price_min,
            price_max,
            page,
            page_size,
        } => {
            let criteria = SearchCriteria {
                name,
                category,
                price_min,
                price_max,
                page,
                page_size,
            };
            handle_list(&service, &criteria, cli.json)?
        }
        Commands::Get { id } => handle_get(&service, id, cli.json)?,
        Commands::Compare { ids } => handle_compare(&service, &ids, cli.json)?,
        Commands::Health => return handle_health(&service, cli.json),
    }

    Ok(ExitCode::SUCCESS)
}

/// Handle the 'list' command
fn handle_list(service: &CatalogService, criteria: &SearchCriteria, json: bool) -> Result<()> {
    let result = service.list_products(criteria)?;
    if json {
        return print_json(&result);
    }
    print_page(&result);
    Ok(())
}

/// Handle the 'get' command
fn handle_get(service: &CatalogService, id: ProductId, json: bool) -> Result<()> {
    let product = service.get_product(id)?;
    if json {
        return print_json(&product);
    }
    print_product_details(&product);
    Ok(())
}

/// Handle the 'compare' command
///
/// Ids that do not parse as integers are passed on as absent so the
/// service reports them like any other invalid id.
fn handle_compare(service: &CatalogService, raw_ids: &[String], json: bool) -> Result<()> {
    let ids: Vec<Option<ProductId>> = raw_ids
        .iter()
        .flat_map(|raw| raw.split_whitespace())
        .map(|raw| raw.parse().ok())
        .collect();

    let products = service.get_products_by_ids(Some(ids.as_slice()))?;
    if json {
        return print_json(&products);
    }

    println!("{}", format!("Comparing {} products:", products.len()).bold().blue());
    for product in &products {
        print_product_details(product);
        println!();
    }
    Ok(())
}

/// Handle the 'health' command
fn handle_health(service: &CatalogService, json: bool) -> Result<ExitCode> {
    let report = health::check(service.source());
    if json {
        print_json(&report)?;
    } else {
        let status = if report.is_up() {
            "UP".green().bold()
        } else {
            "DOWN".red().bold()
        };
        println!("{} {} ({} products)", status, report.source, report.total_products);
        if let Some(detail) = &report.detail {
            println!("  {}", detail);
        }
    }

    Ok(if report.is_up() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("Failed to render JSON output")?;
    println!("{}", rendered);
    Ok(())
}

fn print_page(result: &PagedResult<Product>) {
    println!(
        "{}",
        format!(
            "Page {} of {} ({} matching products)",
            result.page + 1,
            result.total_pages,
            result.total_elements
        )
        .bold()
        .blue()
    );
    for product in &result.elements {
        println!(
            "{:>5}  {}  [{}]  ${:.2}  ★ {:.1}",
            product.id.to_string().green(),
            product.name,
            product.category,
            product.price,
            product.rating
        );
    }
}

fn print_product_details(product: &Product) {
    println!("{}", format!("{} (#{})", product.name, product.id).bold());
    println!("{}Price: ${:.2}", "• ".green(), product.price);
    println!("{}Rating: {:.1}", "• ".green(), product.rating);
    println!("{}Category: {}", "• ".green(), product.category);
    if !product.brand.is_empty() {
        println!("{}Brand: {}", "• ".green(), product.brand);
    }
    if !product.description.is_empty() {
        println!("{}{}", "• ".cyan(), product.description);
    }
    for line in &product.specifications {
        println!("    - {}", line);
    }
}
