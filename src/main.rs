//! CLI entry point for bloguu-rs

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bloguu_rs::commands::new::NewPostOptions;

#[derive(Parser)]
#[command(name = "bloguu-rs")]
#[command(version)]
#[command(about = "Content tooling for the blog: validate front matter, scaffold posts", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new post, prompting for title and description
    New {
        /// Content collection to write into (e.g. blog, films)
        #[arg(short = 't', long = "type")]
        r#type: Option<String>,

        /// Title of the new post (skips the prompt)
        #[arg(long)]
        title: Option<String>,

        /// Description of the new post (skips the prompt)
        #[arg(long)]
        description: Option<String>,

        /// Overwrite an existing file for the same date
        #[arg(long)]
        force: bool,
    },

    /// Validate every content file's front matter
    #[command(alias = "validate")]
    Check,

    /// List site content (post, tag, type)
    List {
        #[arg(default_value = "post")]
        r#type: String,
    },

    /// Print the content schema as JSON for the CMS configuration
    Schema,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "bloguu_rs=debug,info"
    } else {
        "bloguu_rs=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::New {
            r#type,
            title,
            description,
            force,
        } => {
            let blog = bloguu_rs::Blog::new(&base_dir)?;
            let collection = r#type.unwrap_or_else(|| blog.config.default_collection.clone());
            tracing::info!("Creating new post in collection: {}", collection);
            bloguu_rs::commands::new::run(
                &blog,
                NewPostOptions {
                    collection,
                    title,
                    description,
                    force,
                },
            )?;
        }

        Commands::Check => {
            let blog = bloguu_rs::Blog::new(&base_dir)?;
            tracing::info!("Validating content in {:?}", blog.content_dir);
            bloguu_rs::commands::check::run(&blog)?;
        }

        Commands::List { r#type } => {
            let blog = bloguu_rs::Blog::new(&base_dir)?;
            bloguu_rs::commands::list::run(&blog, &r#type)?;
        }

        Commands::Schema => {
            bloguu_rs::commands::schema::run()?;
        }
    }

    Ok(())
}
