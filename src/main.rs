use anyhow::{bail, Result};
use clap::{Args, Parser, Subcommand};
use listing_scout::format::{format_price, result_summary};
use listing_scout::sources::{BuiltinSource, CatalogSource, JsonFileSource};
use listing_scout::{Catalog, FilterController, Listing};
use serde_json::json;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Search and browse the property catalog
#[derive(Parser)]
#[command(name = "listing-scout")]
#[command(version)]
struct Cli {
    /// JSON catalog to load instead of the built-in listings
    #[arg(long, global = true, env = "LISTING_SCOUT_CATALOG")]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Filter the catalog
    Search(SearchArgs),
    /// Show one listing and a few others to look at next
    Show {
        id: String,
        /// How many other listings to suggest
        #[arg(long, default_value = "3")]
        similar: usize,
    },
    /// List featured listings
    Featured {
        #[arg(long, default_value = "3")]
        limit: usize,
    },
    /// List every tag in the catalog
    Tags,
}

#[derive(Args)]
struct SearchArgs {
    /// Text to look for in title, location or description
    #[arg(short, long)]
    search: Option<String>,

    /// Numeric filters accept any text; unparseable values are ignored
    #[arg(long)]
    min_price: Option<String>,

    #[arg(long)]
    max_price: Option<String>,

    #[arg(long)]
    min_beds: Option<String>,

    #[arg(long)]
    min_baths: Option<String>,

    /// Toggle a tag; repeat for several
    #[arg(short, long = "tag")]
    tags: Vec<String>,

    /// Page query string to seed from, e.g. "type=Pool"
    #[arg(long)]
    query: Option<String>,

    /// Print the active filters and matches as JSON
    #[arg(long)]
    json: bool,

    /// Also save the JSON output to this file
    #[arg(long)]
    out: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let source: Box<dyn CatalogSource> = match &cli.catalog {
        Some(path) => Box::new(JsonFileSource::new(path)),
        None => Box::new(BuiltinSource::new()),
    };
    let catalog = Arc::new(Catalog::load(&*source).await?);

    match cli.command {
        Command::Search(args) => search(catalog, args).await,
        Command::Show { id, similar } => show(&catalog, &id, similar),
        Command::Featured { limit } => {
            for (i, listing) in catalog.featured(limit).iter().enumerate() {
                print_listing(i + 1, listing);
            }
            Ok(())
        }
        Command::Tags => {
            for tag in catalog.tags() {
                println!("{}", tag);
            }
            Ok(())
        }
    }
}

async fn search(catalog: Arc<Catalog>, args: SearchArgs) -> Result<()> {
    let mut controller = match &args.query {
        Some(query) => FilterController::with_query(catalog, query),
        None => FilterController::new(catalog),
    };

    if let Some(term) = args.search {
        controller.set_search_term(term);
    }
    if let Some(input) = &args.min_price {
        controller.set_min_price(input);
    }
    if let Some(input) = &args.max_price {
        controller.set_max_price(input);
    }
    if let Some(input) = &args.min_beds {
        controller.set_min_beds(input);
    }
    if let Some(input) = &args.min_baths {
        controller.set_min_baths(input);
    }
    for tag in &args.tags {
        controller.toggle_tag(tag);
    }

    let results = controller.results();

    if args.json || args.out.is_some() {
        let json = serde_json::to_string_pretty(&json!({
            "filters": controller.state(),
            "count": results.len(),
            "results": results,
        }))?;

        if let Some(path) = &args.out {
            tokio::fs::write(path, &json).await?;
            info!("💾 Saved {} listings to {}", results.len(), path.display());
        }
        if args.json {
            println!("{}", json);
            return Ok(());
        }
    }

    if controller.has_active_filters() {
        println!(
            "Active filters: {}",
            controller.state().active_filter_labels().join(" | ")
        );
    }
    println!(
        "Showing {} of {}",
        result_summary(results.len()),
        controller.catalog().len()
    );
    println!();

    if results.is_empty() {
        println!("No properties found");
        println!("Try adjusting your search or run again without filters to clear them.");
        return Ok(());
    }

    for (i, listing) in results.iter().enumerate() {
        print_listing(i + 1, listing);
    }

    Ok(())
}

fn show(catalog: &Catalog, id: &str, similar: usize) -> Result<()> {
    let Some(listing) = catalog.get(id) else {
        bail!("No listing with id {}", id);
    };

    print_listing(1, listing);
    println!("   {}", listing.description);
    println!();

    let others = catalog.similar_to(id, similar);
    if !others.is_empty() {
        println!("Similar properties:");
        for other in others {
            println!("   {} - {} ({})", other.title, other.location, format_price(other.price));
        }
    }

    Ok(())
}

fn print_listing(n: usize, listing: &Listing) {
    let mut badges = Vec::new();
    if listing.is_featured {
        badges.push("Featured");
    }
    if listing.is_new_listing {
        badges.push("New");
    }

    println!("{}. {} ({})", n, listing.title, format_price(listing.price));
    println!(
        "   {} beds, {} baths, {} sqft",
        listing.beds, listing.baths, listing.sqft
    );
    println!("   Location: {}", listing.location);
    println!("   ID: {}", listing.id);
    println!("   Tags: {}", listing.tags.join(", "));
    if !badges.is_empty() {
        println!("   {}", badges.join(", "));
    }
    println!();
}
