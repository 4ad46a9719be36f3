mod script;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use review_filter::{FilterParams, FilterState, ListingStatus, ListingSummary, ReviewQuery};
use review_model::{ReplyDraft, Review, Sentiment, Snapshot};
use search::{SearchBackend, SearchResultSet, SnapshotBackend};
use search_client::HttpSearchBackend;
use search_session::{SearchConfig, SearchDriver, SearchView};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

use crate::script::{parse_script, Step};

/// repdash - review dashboard from the terminal
#[derive(Parser)]
#[command(name = "repdash")]
#[command(about = "Filter, sort and search customer reviews", long_about = None)]
struct Cli {
    /// Directory holding reviews.json, sources.json and competitors.json
    #[arg(short, long, default_value = "data")]
    data_dir: PathBuf,

    /// TOML file with search settings (debounce, caps, timeout)
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List reviews with filters and sorting applied
    Reviews {
        /// google, instagram, yelp, tripadvisor, facebook or all
        #[arg(long, default_value = "all")]
        platform: String,

        /// positive, negative, neutral or all
        #[arg(long, default_value = "all")]
        sentiment: String,

        /// Exact star rating (1-5) or all
        #[arg(long, default_value = "all")]
        rating: String,

        /// replied, unreplied or all
        #[arg(long, default_value = "all")]
        reply: String,

        /// newest, oldest, highest or lowest
        #[arg(long, default_value = "newest")]
        sort: String,

        /// Free text matched against author, body and topics
        #[arg(long, default_value = "")]
        query: String,

        /// Ignore every other filter flag and show the cleared listing
        #[arg(long)]
        clear: bool,
    },

    /// Run one search lookup
    Search {
        /// Query text (at least 2 characters)
        query: String,

        /// Search a hosted dashboard instead of the local data
        #[arg(long)]
        endpoint: Option<String>,

        /// Session token for the hosted dashboard
        #[arg(long, requires = "endpoint")]
        token: Option<String>,

        /// Search the local data without a signed-in account
        #[arg(long, conflicts_with = "endpoint")]
        anonymous: bool,
    },

    /// Feed a keystroke script through the debounced search box
    Replay {
        /// Script file, one step per line (type, wait, blur, focus, select, clear, submit)
        script: PathBuf,
    },

    /// Validate a reply draft for a review
    Reply {
        #[arg(long)]
        review_id: String,

        #[arg(long)]
        text: String,
    },
}

const LOCAL_ACCOUNT: &str = "local";

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
    let config = load_config(cli.config.as_deref())?;

    // Remote searches need no local data
    if let Commands::Search {
        query,
        endpoint: Some(endpoint),
        token,
        ..
    } = &cli.command
    {
        let mut backend = HttpSearchBackend::new(endpoint.as_str())
            .with_limits(config.limits)
            .with_timeout(config.lookup_timeout());
        if let Some(token) = token {
            backend = backend.with_bearer_token(token.as_str());
        }
        return handle_search(&backend, query, &config).await;
    }

    println!("Loading reviews from {}...", cli.data_dir.display());
    let start = Instant::now();
    let snapshot = Arc::new(
        Snapshot::load_from_dir(&cli.data_dir).context("Failed to load review data")?,
    );
    let (reviews, sources, competitors) = snapshot.counts();
    println!(
        "{} Loaded {} reviews, {} sources, {} competitors in {:?}",
        "✓".green(),
        reviews,
        sources,
        competitors,
        start.elapsed()
    );

    match cli.command {
        Commands::Reviews {
            platform,
            sentiment,
            rating,
            reply,
            sort,
            query,
            clear,
        } => {
            let state = if clear {
                let (state, route) = FilterState::cleared();
                println!("Filters cleared, back to {}", route);
                state
            } else {
                FilterState::from_params(&FilterParams {
                    platform,
                    sentiment,
                    rating,
                    reply,
                    sort,
                    query,
                })
            };
            handle_reviews(&snapshot, &state);
        }
        Commands::Search {
            query, anonymous, ..
        } => {
            let backend = if anonymous {
                SnapshotBackend::anonymous(snapshot.clone())
            } else {
                SnapshotBackend::new(snapshot.clone(), LOCAL_ACCOUNT)
            };
            let backend = backend.with_limits(config.limits);
            handle_search(&backend, &query, &config).await?;
        }
        Commands::Replay { script } => {
            let backend = SnapshotBackend::new(snapshot.clone(), LOCAL_ACCOUNT)
                .with_limits(config.limits);
            handle_replay(Arc::new(backend), &script, config).await?;
        }
        Commands::Reply { review_id, text } => handle_reply(&snapshot, &review_id, &text)?,
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<SearchConfig> {
    let Some(path) = path else {
        return Ok(SearchConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let config: SearchConfig = toml::from_str(&text)
        .with_context(|| format!("Failed to parse config {}", path.display()))?;
    debug!("Loaded search config {:?}", config);
    Ok(config)
}

/// Handle the 'reviews' command
fn handle_reviews(snapshot: &Snapshot, state: &FilterState) {
    let all = snapshot.reviews();
    let shown = ReviewQuery::new(state).run(all);
    let summary = ListingSummary::new(all, &shown, state);

    match summary.status() {
        ListingStatus::NoReviews => {
            println!("{}", "No reviews yet. Connect a source to start collecting them.".yellow());
            return;
        }
        ListingStatus::NoMatches => {
            println!("{}", "No reviews match these filters.".yellow());
            return;
        }
        ListingStatus::Showing => {}
    }

    println!(
        "{}",
        format!("Showing {} of {} reviews", summary.shown, summary.total)
            .bold()
            .blue()
    );
    if summary.unreplied > 0 {
        println!("{}", format!("{} need a reply", summary.unreplied).red());
    }
    if let Some(query) = &summary.query {
        println!("Matching \"{}\"", query);
    }
    println!();

    for review in &shown {
        print_review(review);
    }
}

/// Handle the 'search' command
async fn handle_search(backend: &dyn SearchBackend, query: &str, config: &SearchConfig) -> Result<()> {
    if !search::is_searchable(query, config.min_query_len) {
        println!(
            "{}",
            format!("Type at least {} characters to search.", config.min_query_len).yellow()
        );
        return Ok(());
    }

    info!("Searching {:?} with {}", query, backend.name());
    let lookup = tokio::time::timeout(config.lookup_timeout(), backend.lookup(query)).await;
    let results = match lookup {
        Ok(Ok(results)) => results,
        Ok(Err(err)) => {
            debug!("Lookup failed, showing no results: {}", err);
            SearchResultSet::empty(query)
        }
        Err(_) => {
            debug!("Lookup timed out, showing no results");
            SearchResultSet::empty(query)
        }
    };
    print_results(&results);
    Ok(())
}

/// Handle the 'replay' command
async fn handle_replay(backend: Arc<dyn SearchBackend>, script: &Path, config: SearchConfig) -> Result<()> {
    let text = std::fs::read_to_string(script)
        .with_context(|| format!("Failed to read script {}", script.display()))?;
    let steps = parse_script(&text)?;
    let (handle, mut routes, task) = SearchDriver::spawn(backend, config);

    for step in steps {
        match step {
            Step::Type(text) => {
                println!("{} {:?}", "type".cyan(), text);
                handle.input(text);
            }
            Step::Wait(duration) => {
                tokio::time::sleep(duration).await;
                print_view(&handle.view());
            }
            Step::Blur => handle.blur(),
            Step::Focus => handle.focus(),
            Step::Select(family) => handle.select(family),
            Step::Clear => handle.clear(),
            Step::Submit => handle.submit(),
        }
        // Let the driver apply the step before looking at routes
        tokio::task::yield_now().await;
        while let Ok(route) = routes.try_recv() {
            println!("{} {}", "→".green(), route);
        }
    }

    drop(handle);
    task.await.context("Search driver panicked")?;
    while let Ok(route) = routes.try_recv() {
        println!("{} {}", "→".green(), route);
    }
    Ok(())
}

/// Handle the 'reply' command
fn handle_reply(snapshot: &Snapshot, review_id: &str, text: &str) -> Result<()> {
    let review = snapshot
        .get_review(review_id)
        .ok_or_else(|| anyhow!("Review {} not found", review_id))?;
    let draft = ReplyDraft::new(review_id, text)?;

    if review.replied {
        println!("{}", "This review already has a reply; it will be replaced.".yellow());
    }
    println!("{}", serde_json::to_string_pretty(&draft)?);
    Ok(())
}

fn print_review(review: &Review) {
    let stars = format!(
        "{}{}",
        "★".repeat(review.rating as usize),
        "☆".repeat(5usize.saturating_sub(review.rating as usize))
    );
    let sentiment = match review.sentiment {
        Sentiment::Positive => review.sentiment.as_str().green(),
        Sentiment::Negative => review.sentiment.as_str().red(),
        Sentiment::Neutral => review.sentiment.as_str().normal(),
    };
    let replied = if review.replied {
        "replied".green()
    } else {
        "awaiting reply".yellow()
    };

    println!(
        "{} {} {} {} [{}] ({})",
        review.date,
        review.platform.as_str().bold(),
        stars.yellow(),
        review.author,
        sentiment,
        replied
    );
    if !review.text.is_empty() {
        println!("   {}", review.text);
    }
    if !review.topics.is_empty() {
        println!("   {}", review.topics.join(", ").dimmed());
    }
    if let Some(reply) = &review.reply_text {
        println!("   {} {}", "↳".cyan(), reply);
    }
}

fn print_results(results: &SearchResultSet) {
    if results.is_empty() {
        println!("{}", format!("No results for '{}'", results.query).yellow());
        return;
    }
    println!("{}", format!("Search results for '{}':", results.query).bold().blue());

    if !results.reviews.is_empty() {
        println!("{}", "Reviews".bold());
        for review in &results.reviews {
            println!("  {} ({}★, {}): {}", review.author, review.rating, review.platform, review.text);
        }
    }
    if !results.sources.is_empty() {
        println!("{}", "Sources".bold());
        for source in &results.sources {
            println!(
                "  {} [{}] avg {:.1} ({} reviews, {})",
                source.name, source.platform, source.avg_rating, source.review_count, source.status
            );
        }
    }
    if !results.competitors.is_empty() {
        println!("{}", "Competitors".bold());
        for competitor in &results.competitors {
            println!("  {} [{}]", competitor.name, competitor.platform);
        }
    }
}

fn print_view(view: &SearchView) {
    let summary = match view.visible_results() {
        Some(results) => {
            let counts = results
                .counts()
                .iter()
                .map(|(family, count)| format!("{:?}: {}", family, count))
                .collect::<Vec<_>>()
                .join(", ");
            format!("open ({})", counts)
        }
        None if view.loading => "loading".to_string(),
        None => "closed".to_string(),
    };
    println!(
        "  {} {:?} [{:?}] {}",
        "view".dimmed(),
        view.input,
        view.phase,
        summary
    );
}
