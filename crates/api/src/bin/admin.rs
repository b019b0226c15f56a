//! `bookshelf-admin`: maintenance commands run against the catalog database.
//!
//! ```text
//! bookshelf-admin seed
//! bookshelf-admin create-user --username alice --password 'correct horse'
//! bookshelf-admin deactivate-user --username alice
//! bookshelf-admin stats
//! ```

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bookshelf_api::auth::password::{hash_password, validate_password_strength, MIN_PASSWORD_LENGTH};
use bookshelf_api::config::DEFAULT_DATABASE_URL;
use bookshelf_db::models::user::CreateUser;
use bookshelf_db::repositories::{StatsRepo, UserRepo};
use bookshelf_db::seed::{SeedOutcome, Seeder};
use bookshelf_db::DbPool;

#[derive(Parser, Debug)]
#[command(name = "bookshelf-admin")]
#[command(about = "Maintenance commands for the bookshelf catalog")]
struct Cli {
    /// SQLite database to operate on.
    #[arg(long, env = "DATABASE_URL", default_value = DEFAULT_DATABASE_URL)]
    database_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load the sample catalog if it holds fewer than five books.
    Seed,
    /// Create a staff account that can add, edit and delete books.
    CreateUser {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
    },
    /// Block a staff account from logging in. Existing sessions run until
    /// they expire.
    DeactivateUser {
        #[arg(long)]
        username: String,
    },
    /// Allow a deactivated account to log in again.
    ActivateUser {
        #[arg(long)]
        username: String,
    },
    /// Print book, author and genre counts.
    Stats,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bookshelf_db=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let pool = bookshelf_db::create_pool(&cli.database_url)
        .await
        .with_context(|| format!("opening {}", cli.database_url))?;
    bookshelf_db::run_migrations(&pool)
        .await
        .context("running migrations")?;

    match cli.command {
        Command::Seed => match Seeder::seed_if_sparse(&pool).await? {
            SeedOutcome::Skipped { existing_books } => {
                println!("Catalog already has {existing_books} books; nothing to do.");
            }
            SeedOutcome::Seeded(report) => {
                println!(
                    "Created {} authors, {} genres, {} books.",
                    report.authors_created, report.genres_created, report.books_created
                );
            }
        },

        Command::CreateUser { username, password } => {
            let username = username.trim().to_string();
            if username.is_empty() {
                bail!("username must not be empty");
            }
            if let Err(msg) = validate_password_strength(&password, MIN_PASSWORD_LENGTH) {
                bail!(msg);
            }
            if UserRepo::find_by_username(&pool, &username).await?.is_some() {
                bail!("user '{username}' already exists");
            }

            let password_hash =
                hash_password(&password).map_err(|e| anyhow::anyhow!("hashing password: {e}"))?;
            let user = UserRepo::create(
                &pool,
                &CreateUser {
                    username,
                    password_hash,
                },
            )
            .await
            .context("creating user")?;
            println!("Created user '{}' (id {}).", user.username, user.id);
        }

        Command::DeactivateUser { username } => set_active(&pool, &username, false).await?,

        Command::ActivateUser { username } => set_active(&pool, &username, true).await?,

        Command::Stats => {
            let stats = StatsRepo::counts(&pool).await?;
            println!("books:   {}", stats.books);
            println!("authors: {}", stats.authors);
            println!("genres:  {}", stats.genres);
        }
    }

    pool.close().await;
    Ok(())
}

async fn set_active(pool: &DbPool, username: &str, active: bool) -> anyhow::Result<()> {
    if !UserRepo::set_active(pool, username, active).await? {
        bail!("no user named '{username}'");
    }
    let state = if active { "activated" } else { "deactivated" };
    println!("User '{username}' {state}.");
    Ok(())
}
