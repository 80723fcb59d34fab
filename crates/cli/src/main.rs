use anyhow::{Context, Result, bail};
use catalog::{CanonicalMovie, GenreId, genre_id_for_name, language_code_for_name};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use discovery::{MoviePage, MovieService, MovieStore};
use omdb_client::OmdbConfig;
use pipeline::{FilterSelection, SortKey, SortOrder};
use std::time::Instant;
use tracing::debug;

/// Movie Discovery - browse, search and filter OMDb titles
#[derive(Parser)]
#[command(name = "movie-discovery")]
#[command(about = "Browse, search and filter movies from OMDb", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Movies from the current year
    Popular(ListArgs),

    /// Current-year movies rated 7.0 or higher
    TopRated(ListArgs),

    /// Movies scheduled for next year
    Upcoming(ListArgs),

    /// Search movies by title
    Search {
        /// Search term
        query: String,

        #[command(flatten)]
        list: ListArgs,
    },

    /// Show the full record for one IMDb id
    Details {
        /// IMDb id, e.g. tt1375666
        id: String,
    },
}

#[derive(Args)]
struct ListArgs {
    /// Result page to fetch (1-based)
    #[arg(long, default_value = "1", value_parser = clap::value_parser!(u32).range(1..))]
    page: u32,

    /// Number of pages to fetch and merge before filtering
    #[arg(long, default_value = "1", value_parser = clap::value_parser!(u32).range(1..))]
    pages: u32,

    #[command(flatten)]
    filters: FilterArgs,
}

#[derive(Args)]
struct FilterArgs {
    /// Genre name or id; repeat to allow several
    #[arg(long = "genre")]
    genres: Vec<String>,

    /// Language name or code; repeat to allow several
    #[arg(long = "language")]
    languages: Vec<String>,

    /// Release year; repeat to allow several
    #[arg(long = "year")]
    years: Vec<i32>,

    /// popularity, release_date, vote_average, title or unsorted
    #[arg(long, default_value = "popularity")]
    sort: SortKey,

    /// asc or desc
    #[arg(long, default_value = "desc")]
    order: SortOrder,
}

impl FilterArgs {
    fn to_selection(&self) -> Result<FilterSelection> {
        let mut selection = FilterSelection::new().sorted_by(self.sort, self.order);

        for genre in &self.genres {
            let id: GenreId = match genre.parse() {
                Ok(id) => id,
                Err(_) => genre_id_for_name(genre)
                    .with_context(|| format!("Unknown genre '{}'", genre))?,
            };
            selection = selection.with_genre(id);
        }

        for language in &self.languages {
            let code = language_code_for_name(language)
                .with_context(|| format!("Unknown language '{}'", language))?;
            selection = selection.with_language(code);
        }

        for &year in &self.years {
            selection = selection.with_year(year);
        }

        Ok(selection)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let config = OmdbConfig::from_env().context("Failed to read OMDb configuration")?;
    if !config.is_valid() {
        bail!("OMDB_API_KEY is not set; export it or add it to a .env file");
    }
    debug!("Using {:?}", config);

    let service = MovieService::from_config(&config).context("Failed to create OMDb client")?;
    let service = &service;

    match cli.command {
        Commands::Popular(list) => {
            handle_list("Popular", &list, move |page| service.popular(page)).await?
        }
        Commands::TopRated(list) => {
            handle_list("Top rated", &list, move |page| service.top_rated(page)).await?
        }
        Commands::Upcoming(list) => {
            handle_list("Upcoming", &list, move |page| service.upcoming(page)).await?
        }
        Commands::Search { query, list } => {
            let title = format!("Search results for '{}'", query);
            let query = query.as_str();
            handle_list(&title, &list, move |page| service.search(query, page)).await?
        }
        Commands::Details { id } => handle_details(service, &id).await?,
    }

    Ok(())
}

/// Fetch `pages` pages starting at `page`, then filter and print them
async fn handle_list<F, Fut>(heading: &str, list: &ListArgs, fetch: F) -> Result<()>
where
    F: Fn(u32) -> Fut,
    Fut: std::future::Future<Output = discovery::Result<MoviePage>>,
{
    let selection = list.filters.to_selection()?;
    let mut store = MovieStore::new();
    store.set_selection(selection);

    let start = Instant::now();
    let mut total_results = 0;
    for page in page_range(list.page, list.pages) {
        let fetched = fetch(page).await.with_context(|| format!("Failed to fetch page {}", page))?;
        total_results = fetched.total_results;
        let has_next = fetched.has_next_page();
        store.append_page(fetched);
        if !has_next {
            break;
        }
    }
    println!(
        "{} Fetched {} movies ({} upstream results) in {:?}",
        "✓".green(),
        store.movies().len(),
        total_results,
        start.elapsed()
    );

    print_view(heading, &store);
    Ok(())
}

/// `count` consecutive pages starting at `first`, clamped at `u32::MAX`
fn page_range(first: u32, count: u32) -> std::ops::RangeInclusive<u32> {
    first..=first.saturating_add(count.max(1) - 1)
}

/// Handle the 'details' command
async fn handle_details(service: &MovieService, id: &str) -> Result<()> {
    let movie = service.details(id).await?;

    println!("{}", format!("{} ({})", movie.title, movie.year_label()).bold().blue());
    if let Some(tagline) = &movie.tagline {
        println!("{}", tagline.italic());
    }
    println!("{}Id: {}", "• ".green(), movie.id);
    println!("{}Released: {}", "• ".green(), movie.release_date);
    println!(
        "{}Rating: {:.1} ({} votes)",
        "• ".green(),
        movie.vote_average,
        movie.vote_count
    );
    println!("{}Genres: {}", "• ".green(), genre_names(&movie));
    println!("{}Language: {}", "• ".green(), movie.original_language);
    if movie.has_poster() {
        println!("{}Poster: {}", "• ".green(), movie.poster_path);
    }
    if !movie.overview.is_empty() {
        println!();
        println!("{}", movie.overview);
    }
    Ok(())
}

fn print_view(heading: &str, store: &MovieStore) {
    println!("{}", format!("{}:", heading).bold().blue());
    println!(
        "{}Filters: {} ({} active)",
        "• ".cyan(),
        store.summary(),
        store.filter_count()
    );
    println!(
        "{}Showing {} of {} movies",
        "• ".cyan(),
        store.filtered_count(),
        store.movies().len()
    );

    let view = store.view();
    if view.is_empty() {
        println!("{}", "No movies match the current filters".yellow());
    }
    for (rank, movie) in view.iter().enumerate() {
        println!(
            "{}. {} ({}) [{}] - {:.1} - {}",
            (rank + 1).to_string().green(),
            movie.title,
            movie.year_label(),
            genre_names(movie),
            movie.vote_average,
            movie.id.dimmed()
        );
    }

    let genres: Vec<_> = store.available_genres().into_iter().map(|g| g.name).collect();
    let languages: Vec<_> = store.available_languages().into_iter().map(|l| l.name).collect();
    let years: Vec<_> = store.available_years().iter().map(i32::to_string).collect();

    println!("{}", "Available filters:".bold());
    println!("  Genres: {}", join_or_dash(&genres));
    println!("  Languages: {}", join_or_dash(&languages));
    println!("  Years: {}", join_or_dash(&years));
}

fn genre_names(movie: &CanonicalMovie) -> String {
    let known = catalog::default_genres();
    let names: Vec<String> = movie
        .genre_ids
        .iter()
        .map(|id| {
            known
                .iter()
                .find(|facet| facet.code == *id)
                .map(|facet| facet.name.clone())
                .unwrap_or_else(|| id.to_string())
        })
        .collect();
    join_or_dash(&names)
}

fn join_or_dash(values: &[String]) -> String {
    if values.is_empty() {
        "-".to_string()
    } else {
        values.join(", ")
    }
}
