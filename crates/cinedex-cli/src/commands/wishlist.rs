use color_eyre::eyre::{eyre, Result};
use movie_catalog_api::MovieCatalog;
use movie_catalog_models::{MovieDetails, MovieId};
use owo_colors::OwoColorize;
use serde_json::json;

use crate::commands::context::AppContext;
use crate::commands::ui;
use crate::output::Output;
use crate::WishlistCommands;

pub async fn run_wishlist(cmd: WishlistCommands, output: &Output) -> Result<()> {
    let mut ctx = AppContext::init()?;

    match cmd {
        WishlistCommands::List { filter } => list_wishlist(&ctx, filter.as_deref(), output).await,
        WishlistCommands::Add { id } => {
            let id = MovieId(id);
            if ctx.wishlist.contains(id) {
                output.warn(format!("{} is already on the wishlist", id));
                return Ok(());
            }
            ctx.wishlist.add(id).map_err(|e| eyre!("{}", e))?;
            output.success(format!("Added {} - {} saved", id, ctx.wishlist.len()));
            Ok(())
        }
        WishlistCommands::Remove { id } => {
            let id = MovieId(id);
            if !ctx.wishlist.contains(id) {
                output.warn(format!("{} is not on the wishlist", id));
                return Ok(());
            }
            ctx.wishlist.remove(id).map_err(|e| eyre!("{}", e))?;
            output.success(format!("Removed {} - {} saved", id, ctx.wishlist.len()));
            Ok(())
        }
        WishlistCommands::Ids => {
            if output.is_human() {
                for id in ctx.wishlist.ids() {
                    println!("{}", id);
                }
            } else {
                output.json(&json!(ctx.wishlist.ids()));
            }
            Ok(())
        }
    }
}

async fn list_wishlist(ctx: &AppContext, filter: Option<&str>, output: &Output) -> Result<()> {
    if ctx.wishlist.is_empty() {
        if output.is_human() {
            output.info("Your wishlist is empty.");
            output.info("Browse the catalog and save movies with 'cinedex wishlist add <id>'.");
        } else {
            output.json(&json!({ "count": 0, "movies": [] }));
        }
        return Ok(());
    }

    // Every saved movie is re-fetched; the requests run joined and the first
    // failure aborts the view rather than rendering a partial list.
    let spinner = ui::fetch_spinner(
        format!("Fetching {} saved movies...", ctx.wishlist.len()),
        output.is_quiet() || !output.is_human(),
    );
    let fetches = ctx.wishlist.ids().iter().map(|id| ctx.catalog.details(*id));
    let result = futures::future::try_join_all(fetches).await;
    spinner.finish_and_clear();
    let movies = result?;

    let shown: Vec<&MovieDetails> = match filter {
        Some(needle) => {
            let needle = needle.to_lowercase();
            movies
                .iter()
                .filter(|movie| movie.title.to_lowercase().contains(&needle))
                .collect()
        }
        None => movies.iter().collect(),
    };

    if !output.is_human() {
        output.json(&json!({ "count": shown.len(), "movies": shown }));
        return Ok(());
    }

    output.heading(format!("Your wishlist - {} saved", ctx.wishlist.len()));

    if shown.is_empty() {
        // Only reachable with a filter: the unfiltered list is non-empty here.
        output.info(format!(
            "No saved titles match \"{}\". Try another search term.",
            filter.unwrap_or_default()
        ));
        return Ok(());
    }

    for (index, movie) in shown.iter().enumerate() {
        let year = movie
            .release_year()
            .map(|y| format!(" ({})", y))
            .unwrap_or_default();
        println!(
            "{:>2}. {} {}{}  ★ {:.1}  [{}]",
            index + 1,
            "♥".red(),
            movie.title,
            year,
            movie.vote_average,
            movie.id
        );
    }
    Ok(())
}
