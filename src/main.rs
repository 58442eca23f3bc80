use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};

use apivault::catalog::{categories, upload, Catalog};
use apivault::filter::{matching, FilterQuery};
use apivault::harness::{build_invoker, run_test, ParamMap};
use apivault::history::History;

#[derive(Parser)]
#[command(
    name = "apivault",
    about = "Typed catalog and test harness for external service API endpoints",
    version,
    long_about = None
)]
struct Cli {
    /// Config file path
    #[arg(long, default_value = "apivault.toml", global = true)]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the daemon (API server over the catalog and harness)
    Serve {
        /// Bind address
        #[arg(long, default_value = "0.0.0.0:8080")]
        bind: String,
    },

    /// List catalog endpoints, optionally filtered
    List {
        /// Case-insensitive search over name, description, and category
        #[arg(long)]
        search: Option<String>,

        /// Exact category id
        #[arg(long)]
        category: Option<String>,

        /// JSON output for machine parsing
        #[arg(long)]
        json: bool,
    },

    /// Show one endpoint in full
    Show {
        /// Endpoint id
        id: String,

        /// JSON output for machine parsing
        #[arg(long)]
        json: bool,
    },

    /// List the category definitions with endpoint counts
    Categories {
        /// JSON output for machine parsing
        #[arg(long)]
        json: bool,
    },

    /// Invoke an endpoint through the configured harness
    Invoke {
        /// Endpoint id
        id: String,

        /// Parameter as name=value (repeatable)
        #[arg(long = "param", short = 'p')]
        params: Vec<String>,

        /// JSON output for machine parsing
        #[arg(long)]
        json: bool,
    },

    /// Validate a descriptor file and merge it into the catalog
    Import {
        /// JSON file containing an array of descriptors
        file: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = apivault::config::load(&cli.config)?;

    match cli.command {
        Commands::Serve { bind } => {
            tracing::info!(%bind, "Starting apivault daemon");
            apivault::serve(&bind, &cli.config).await?;
        }
        Commands::List {
            search,
            category,
            json,
        } => {
            let catalog = apivault::build_catalog(&config)?;
            let hits = matching(&catalog.get_all(), &FilterQuery { search, category });
            if json {
                println!("{}", serde_json::to_string_pretty(&hits)?);
            } else if hits.is_empty() {
                println!("No endpoints match.");
            } else {
                println!("{:<28} | {:<6} | {:<22} | Name", "ID", "Method", "Category");
                println!("{:-<28}-|-{:-<6}-|-{:-<22}-|-{:-<30}", "", "", "", "");
                for e in &hits {
                    println!("{:<28} | {:<6} | {:<22} | {}", e.id, e.method, e.category, e.name);
                }
                println!("\n{} endpoint(s).", hits.len());
            }
        }
        Commands::Show { id, json } => {
            let catalog = apivault::build_catalog(&config)?;
            let endpoint = catalog.get_by_id(&id)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&endpoint)?);
            } else {
                println!("\n{} ({})", endpoint.name, endpoint.id);
                println!("  {}", endpoint.description);
                println!("  {} {}", endpoint.method, endpoint.path);
                println!("  Category: {} / {}", endpoint.category, endpoint.subcategory);
                if !endpoint.required_params.is_empty() {
                    println!("  Required:");
                    for p in &endpoint.required_params {
                        println!("    {:<24} {:?} -- {}", p.name, p.param_type, p.description);
                    }
                }
                if !endpoint.optional_params.is_empty() {
                    println!("  Optional:");
                    for p in &endpoint.optional_params {
                        println!("    {:<24} {:?} -- {}", p.name, p.param_type, p.description);
                    }
                }
                if let Some(pricing) = &endpoint.pricing {
                    println!("  Pricing: {} {}", pricing.cost, pricing.unit);
                }
                if let Some(docs) = &endpoint.documentation {
                    println!("  Docs: {docs}");
                }
                println!();
            }
        }
        Commands::Categories { json } => {
            let catalog = apivault::build_catalog(&config)?;
            let all = catalog.get_all();
            let defs = categories::defaults();
            if json {
                let rows: Vec<_> = defs
                    .iter()
                    .map(|d| {
                        serde_json::json!({
                            "id": d.id,
                            "name": d.name,
                            "endpoint_count": categories::count_for_category(&d.id, &all)
                        })
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else {
                println!("{:<26} | {:<6} | Description", "Category", "Count");
                println!("{:-<26}-|-{:-<6}-|-{:-<40}", "", "", "");
                for d in &defs {
                    let count = categories::count_for_category(&d.id, &all);
                    println!("{:<26} | {:<6} | {}", d.id, count, d.description);
                }
            }
        }
        Commands::Invoke { id, params, json } => {
            let catalog = apivault::build_catalog(&config)?;
            let endpoint = catalog.get_by_id(&id)?;
            let parameters = parse_params(&params)?;
            let invoker = build_invoker(&config)?;
            let history = History::new();

            let result = run_test(invoker.as_ref(), &endpoint, parameters, &history).await;
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!("\n=== Invocation Result ===");
                println!("Endpoint: {}", result.endpoint_id);
                println!("Status:   {}", if result.success { "PASS" } else { "FAIL" });
                println!("Duration: {} ms", result.duration_ms);
                if let Some(response) = &result.response {
                    println!("Response:\n{}", serde_json::to_string_pretty(response)?);
                }
                if let Some(error) = &result.error {
                    println!("Error:    {error}");
                }
                println!("=========================\n");
            }
        }
        Commands::Import { file } => {
            let raw = std::fs::read_to_string(&file)?;
            let candidates = upload::parse(&raw)?;
            let catalog = Catalog::new();
            let before = catalog.len();
            let outcome = catalog.merge(candidates);
            println!(
                "Accepted {} descriptor(s), discarded {} (catalog: {} -> {}).",
                outcome.accepted,
                outcome.discarded,
                before,
                catalog.len()
            );
        }
    }

    Ok(())
}

/// Parse repeated `name=value` flags into a parameter map. Values that
/// parse as JSON are kept typed; everything else is a string.
fn parse_params(raw: &[String]) -> Result<ParamMap> {
    let mut map = ParamMap::new();
    for entry in raw {
        let (name, value) = entry
            .split_once('=')
            .ok_or_else(|| anyhow!("parameter '{entry}' is not name=value"))?;
        let parsed = serde_json::from_str(value)
            .unwrap_or_else(|_| serde_json::Value::String(value.to_string()));
        map.insert(name.to_string(), parsed);
    }
    Ok(map)
}
