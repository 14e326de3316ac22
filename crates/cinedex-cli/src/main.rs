use clap::{ArgAction, Parser, Subcommand};
use commands::{browse, config, detail, wishlist};
use movie_catalog_models::ListCategory;

mod commands;
mod logging;
mod output;

#[derive(Parser)]
#[command(name = "cinedex")]
#[command(about = "cinedex - Browse the movie catalog, keep a wishlist")]
#[command(version)]
struct Cli {
    /// Enable verbose output (use multiple times for more verbosity: -v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_enum)]
    output: output::OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse or search the movie catalog
    #[command(long_about = "List one page of a category rail (now-playing, popular, top-rated, upcoming), or search the catalog by title. With --interactive, starts a search-as-you-type loop with debounced queries and pagination commands.")]
    Browse {
        /// Category rail to list
        #[arg(long, value_parser = parse_category, default_value = "popular")]
        category: ListCategory,

        /// Page number
        #[arg(long, default_value_t = 1)]
        page: u32,

        /// Search the catalog instead of listing a category
        #[arg(long)]
        query: Option<String>,

        /// Interactive loop: type to search, /next and /prev to paginate
        #[arg(long, action = ArgAction::SetTrue)]
        interactive: bool,
    },

    /// Show a movie's details, cast, and trailer
    #[command(long_about = "Fetch the detail record, cast list, and trailer for one movie by its catalog ID. The three requests run concurrently; the first failure aborts the view.")]
    Detail {
        /// Catalog movie ID
        id: u64,
    },

    /// Manage the local wishlist
    #[command(long_about = "List, add to, or remove from the locally persisted wishlist. 'list' fetches fresh catalog data for every saved movie; 'ids' prints the raw ID sequence without touching the network.")]
    Wishlist {
        #[command(subcommand)]
        cmd: Option<WishlistCommands>,
    },

    /// Configure credentials and settings
    #[command(long_about = "Manage configuration and the catalog API key. The key can also be supplied through the CINEDEX_API_KEY environment variable, which takes precedence over the stored one.")]
    Config {
        #[command(subcommand)]
        cmd: Option<ConfigCommands>,
    },
}

#[derive(Subcommand)]
enum WishlistCommands {
    /// List saved movies with fresh catalog data
    List {
        /// Keep only titles containing this text (case-insensitive)
        #[arg(long)]
        filter: Option<String>,
    },

    /// Add a movie by catalog ID
    Add {
        /// Catalog movie ID
        id: u64,
    },

    /// Remove a movie by catalog ID
    Remove {
        /// Catalog movie ID
        id: u64,
    },

    /// Print the saved ID sequence without fetching anything
    Ids,
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show current configuration (masks the API key)
    Show,

    /// Store the catalog API key (prompts with masked input if not provided)
    Tmdb {
        /// Catalog API key (if not provided, will prompt)
        #[arg(long)]
        api_key: Option<String>,
    },

    /// Set the language tag sent with every catalog request
    Language {
        /// BCP 47 tag, e.g. en-US or fr-FR
        tag: Option<String>,
    },
}

fn parse_category(raw: &str) -> Result<ListCategory, String> {
    raw.parse()
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    logging::init_logging(cli.verbose, cli.quiet)
        .map_err(|e| color_eyre::eyre::eyre!("{}", e))?;

    let output = output::Output::new(cli.output, cli.quiet);

    match cli.command {
        Commands::Browse {
            category,
            page,
            query,
            interactive,
        } => browse::run_browse(category, page, query, interactive, &output).await,
        Commands::Detail { id } => detail::run_detail(id, &output).await,
        Commands::Wishlist { cmd } => {
            let cmd = cmd.unwrap_or(WishlistCommands::List { filter: None });
            wishlist::run_wishlist(cmd, &output).await
        }
        Commands::Config { cmd } => {
            let cmd = cmd.unwrap_or(ConfigCommands::Show);
            config::run_config(cmd, &output).await
        }
    }
}
