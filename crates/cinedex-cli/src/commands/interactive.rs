use std::time::Duration;

use color_eyre::eyre::{eyre, Result};
use movie_catalog_api::{CatalogError, MovieCatalog, TmdbClient};
use movie_catalog_core::{BrowseSelection, Debouncer, RequestGuard, RequestToken, Wishlist};
use movie_catalog_models::{ListCategory, MovieSummary, Page};
use owo_colors::OwoColorize;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::{debug, error};

use crate::commands::browse::render_movie_rows;
use crate::commands::context::AppContext;
use crate::output::Output;

type FetchOutcome = (RequestToken, Result<Page<MovieSummary>, CatalogError>);

/// Search-as-you-type browse loop.
///
/// Plain input is fed through the debouncer, so a request fires only once
/// typing settles. Every fetch carries a staleness token; switching query,
/// category, or page supersedes outstanding tokens, and superseded responses
/// are discarded instead of overwriting the current view. A failed fetch is
/// rendered as its own state with `/retry`, never as an empty result.
pub async fn run(ctx: &mut AppContext, output: &Output) -> Result<()> {
    if !output.is_human() {
        return Err(eyre!("--interactive requires human output"));
    }

    let quiet_period = Duration::from_millis(ctx.config.browse.debounce_ms);
    let (debouncer, mut settled_queries) = Debouncer::<String>::new(quiet_period);
    let guard = RequestGuard::new();
    let (outcome_tx, mut outcomes) = mpsc::unbounded_channel::<FetchOutcome>();

    let mut selection = BrowseSelection::new(ListCategory::Popular, ctx.config.browse.page_cap);
    let mut rows: Vec<MovieSummary> = Vec::new();
    let mut wishlist_changes = ctx.wishlist.subscribe();

    print_help(ctx.wishlist.len());
    spawn_fetch(&ctx.catalog, &guard, &selection, &outcome_tx);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match parse_command(&line) {
                    Command::Quit => break,
                    Command::Help => print_help(ctx.wishlist.len()),
                    Command::NextPage => {
                        if selection.next_page() {
                            spawn_fetch(&ctx.catalog, &guard, &selection, &outcome_tx);
                        } else {
                            println!("Already on the last page.");
                        }
                    }
                    Command::PrevPage => {
                        if selection.prev_page() {
                            spawn_fetch(&ctx.catalog, &guard, &selection, &outcome_tx);
                        } else {
                            println!("Already on the first page.");
                        }
                    }
                    Command::Category(parsed) => match parsed {
                        Ok(category) => {
                            selection.set_category(category);
                            spawn_fetch(&ctx.catalog, &guard, &selection, &outcome_tx);
                        }
                        Err(message) => println!("{}", message),
                    },
                    Command::Favorite(Some(index)) => {
                        toggle_row(&mut ctx.wishlist, &rows, index)?;
                    }
                    Command::Favorite(None) => println!("Usage: /fav <row number>"),
                    Command::Retry => spawn_fetch(&ctx.catalog, &guard, &selection, &outcome_tx),
                    Command::Unknown(cmd) => println!("Unknown command {}. Type /help.", cmd),
                    Command::Typing(text) => debouncer.update(text),
                }
            }
            Some(query) = settled_queries.recv() => {
                selection.set_query(query);
                spawn_fetch(&ctx.catalog, &guard, &selection, &outcome_tx);
            }
            Some((token, outcome)) = outcomes.recv() => {
                if !token.is_current() {
                    debug!("discarding response for a superseded selection");
                    continue;
                }
                match outcome {
                    Ok(listing) => {
                        selection.apply_total_pages(listing.total_pages);
                        rows = listing.results;
                        render_listing(&selection, &rows, &ctx.wishlist);
                    }
                    Err(e) => {
                        error!(operation = e.operation(), error = %e, "catalog fetch failed");
                        output.error("Failed to load results (the request failed, the catalog is not empty). Type /retry.");
                    }
                }
            }
            changed = wishlist_changes.changed() => {
                if changed.is_err() {
                    continue;
                }
                let count = wishlist_changes.borrow_and_update().len();
                println!("{} {} on wishlist", "♥".red(), count);
            }
        }
    }

    Ok(())
}

fn spawn_fetch(
    catalog: &TmdbClient,
    guard: &RequestGuard,
    selection: &BrowseSelection,
    outcomes: &mpsc::UnboundedSender<FetchOutcome>,
) {
    let token = guard.issue();
    let catalog = catalog.clone();
    let query = selection.query().map(str::to_string);
    let category = selection.category();
    let page = selection.page();
    let outcomes = outcomes.clone();

    tokio::spawn(async move {
        let outcome = match query.as_deref() {
            Some(q) => catalog.search(q, page).await,
            None => catalog.list(category, page).await,
        };
        let _ = outcomes.send((token, outcome));
    });
}

fn toggle_row(wishlist: &mut Wishlist, rows: &[MovieSummary], index: usize) -> Result<()> {
    let Some(movie) = index.checked_sub(1).and_then(|i| rows.get(i)) else {
        println!("No row {} on this page.", index);
        return Ok(());
    };
    let added = wishlist.toggle(movie.id).map_err(|e| eyre!("{}", e))?;
    if added {
        println!("Added {} to the wishlist.", movie.title);
    } else {
        println!("Removed {} from the wishlist.", movie.title);
    }
    Ok(())
}

fn render_listing(selection: &BrowseSelection, rows: &[MovieSummary], wishlist: &Wishlist) {
    println!();
    match selection.query() {
        Some(q) => println!("{}", format!("Results for \"{}\"", q).bold()),
        None => println!("{}", selection.category().label().bold()),
    }

    if rows.is_empty() {
        match selection.query() {
            Some(q) => println!("No movies found for \"{}\".", q),
            None => println!("No movies available."),
        }
    } else {
        render_movie_rows(rows, wishlist);
    }

    println!(
        "Page {} of {} - /next /prev /fav <n> /help",
        selection.page(),
        selection.total_pages()
    );
}

fn print_help(saved: usize) {
    println!("Type a title to search - the request fires once you stop typing.");
    println!("An empty line goes back to the category rail.");
    println!("Commands: /cat <now-playing|popular|top-rated|upcoming>  /next  /prev  /fav <n>  /retry  /quit");
    println!("{} {} on wishlist", "♥".red(), saved);
}

enum Command {
    Quit,
    Help,
    NextPage,
    PrevPage,
    Category(std::result::Result<ListCategory, String>),
    Favorite(Option<usize>),
    Retry,
    Unknown(String),
    Typing(String),
}

fn parse_command(line: &str) -> Command {
    let trimmed = line.trim();
    if !trimmed.starts_with('/') {
        // Includes the empty line, which settles into "show the category rail".
        return Command::Typing(trimmed.to_string());
    }

    let mut parts = trimmed.splitn(2, ' ');
    let head = parts.next().unwrap_or_default();
    let rest = parts.next().unwrap_or_default().trim();

    match head {
        "/quit" | "/q" | "/exit" => Command::Quit,
        "/help" | "/h" => Command::Help,
        "/next" | "/n" => Command::NextPage,
        "/prev" | "/p" => Command::PrevPage,
        "/retry" | "/r" => Command::Retry,
        "/cat" | "/category" => Command::Category(rest.parse()),
        "/fav" | "/f" => Command::Favorite(rest.parse().ok()),
        other => Command::Unknown(other.to_string()),
    }
}
