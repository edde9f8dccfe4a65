//! linguablog CLI - query the multilingual blog database
//!
//! Thin front-end over `linguablog-db` for the site generator and for
//! poking at the schema during development. Each subcommand runs one
//! query and prints the rows as JSON.

use std::process::ExitCode;

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use linguablog_db::{create_pool, CategoryRepo, DbConfig, LanguageRepo, PostRepo};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "linguablog",
    author,
    version,
    about = "Query the multilingual blog database",
    long_about = "Read-only queries against the translation-table blog schema. \
                  Connection settings come from DB_HOST, DB_USER, DB_PASS and \
                  DB_NAME (a .env file is honored)."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List all supported languages
    Languages,
    /// List categories translated into a language
    Categories {
        /// Language code, e.g. "en"
        #[arg(long)]
        lang: String,
    },
    /// List posts translated into a language, newest first
    Posts {
        /// Language code, e.g. "en"
        #[arg(long)]
        lang: String,
    },
    /// Show one post by slug (prints null and exits 1 if not found)
    Post {
        /// Post slug
        slug: String,
        /// Language code, e.g. "en"
        #[arg(long)]
        lang: String,
    },
    /// List posts in a category translated into a language, newest first
    CategoryPosts {
        /// Category slug
        slug: String,
        /// Language code, e.g. "en"
        #[arg(long)]
        lang: String,
    },
}

fn init_tracing() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok();
    init_tracing().ok();
    let cli = Cli::parse();

    let config = DbConfig::from_env();
    debug!(?config, "connecting");
    let pool = create_pool(&config);

    match cli.command {
        Commands::Languages => {
            let rows = LanguageRepo::new(&pool).list().await?;
            print_json(&rows)?;
        }
        Commands::Categories { lang } => {
            let rows = CategoryRepo::new(&pool).list_by_language(&lang).await?;
            print_json(&rows)?;
        }
        Commands::Posts { lang } => {
            let rows = PostRepo::new(&pool).list_by_language(&lang).await?;
            print_json(&rows)?;
        }
        Commands::Post { slug, lang } => {
            let post = PostRepo::new(&pool).get_by_slug(&slug, &lang).await?;
            print_json(&post)?;
            if post.is_none() {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::CategoryPosts { slug, lang } => {
            let rows = PostRepo::new(&pool).list_by_category(&slug, &lang).await?;
            print_json(&rows)?;
        }
    }
    Ok(ExitCode::SUCCESS)
}
