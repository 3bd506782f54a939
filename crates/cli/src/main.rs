mod interactive;
mod render;

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;

use api_client::{ClientConfig, DEFAULT_BASE_URL, RecommenderApi, RecommenderClient};
use model::{GenreId, MovieQuery};
use session::{LoadOutcome, Session};

/// ReelPicker - pick a genre, get a movie
#[derive(Parser)]
#[command(name = "reel-picker")]
#[command(about = "Genre-based movie recommendations from a remote engine", long_about = None)]
struct Cli {
    /// Base URL of the recommendation backend
    #[arg(long, env = "REEL_PICKER_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Log at debug level (RUST_LOG takes precedence)
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the available genres
    Genres,

    /// Ask for one recommendation
    Recommend {
        /// Genre to use instead of the first one in the list
        #[arg(long)]
        genre: Option<String>,
    },

    /// Browse the public movie listing
    Browse {
        #[arg(long, default_value = "1")]
        page: u32,

        #[arg(long, default_value_t = MovieQuery::DEFAULT_PER_PAGE)]
        per_page: u32,

        /// Substring to match against title or director
        #[arg(long)]
        search: Option<String>,

        #[arg(long)]
        genre: Option<String>,
    },

    /// Pick genres and request recommendations from a prompt
    Interactive,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize tracing
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();

    let config = ClientConfig::new(&cli.base_url).context("Invalid backend URL")?;
    let api: Arc<dyn RecommenderApi> =
        Arc::new(RecommenderClient::new(config).context("Failed to create HTTP client")?);

    // Dispatch to appropriate command handler
    let code = match cli.command {
        Commands::Genres => handle_genres(api).await,
        Commands::Recommend { genre } => handle_recommend(api, genre).await?,
        Commands::Browse {
            page,
            per_page,
            search,
            genre,
        } => {
            let query = MovieQuery {
                page,
                per_page,
                search,
                genre: genre.map(GenreId::from),
            };
            handle_browse(api, query).await?
        }
        Commands::Interactive => {
            interactive::run(api).await?;
            ExitCode::SUCCESS
        }
    };

    Ok(code)
}

/// Handle the 'genres' command
async fn handle_genres(api: Arc<dyn RecommenderApi>) -> ExitCode {
    let (session, task) = Session::mount(api);
    let outcome = task.finished().await;

    print!("{}", render::select(&session.view().select));
    match outcome {
        LoadOutcome::Loaded { .. } => ExitCode::SUCCESS,
        LoadOutcome::Failed | LoadOutcome::Unmounted => ExitCode::FAILURE,
    }
}

/// Handle the 'recommend' command
async fn handle_recommend(api: Arc<dyn RecommenderApi>, genre: Option<String>) -> Result<ExitCode> {
    let (session, task) = Session::mount(api);
    task.finished().await;

    if let Some(genre) = genre {
        session
            .select_genre(GenreId::new(genre))
            .context("Cannot use that genre")?;
    }

    let code = match session.request_recommendation().await {
        Ok(Ok(_)) => ExitCode::SUCCESS,
        Ok(Err(_)) => ExitCode::FAILURE,
        Err(rejected) => {
            println!("{}", rejected.to_string().yellow());
            return Ok(ExitCode::FAILURE);
        }
    };

    print!("{}", render::view(&session.view()));
    Ok(code)
}

/// Handle the 'browse' command
async fn handle_browse(api: Arc<dyn RecommenderApi>, query: MovieQuery) -> Result<ExitCode> {
    let page = api
        .list_movies(&query)
        .await
        .context("Failed to load the movie listing")?;

    print!("{}", render::movie_page(&page));
    Ok(ExitCode::SUCCESS)
}
