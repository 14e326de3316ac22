use color_eyre::Result;
use movie_catalog_api::MovieCatalog;
use movie_catalog_core::Wishlist;
use movie_catalog_models::{ListCategory, MovieSummary};
use owo_colors::OwoColorize;
use serde_json::json;

use crate::commands::context::AppContext;
use crate::commands::{interactive, ui};
use crate::output::Output;

pub async fn run_browse(
    category: ListCategory,
    page: u32,
    query: Option<String>,
    interactive_mode: bool,
    output: &Output,
) -> Result<()> {
    let mut ctx = AppContext::init()?;

    if interactive_mode {
        return interactive::run(&mut ctx, output).await;
    }

    let page_cap = ctx.config.browse.page_cap;
    let page = page.clamp(1, page_cap);
    let query = query.as_deref().map(str::trim).filter(|q| !q.is_empty());

    let spinner = ui::fetch_spinner("Fetching movies...", output.is_quiet() || !output.is_human());
    let result = match query {
        Some(q) => ctx.catalog.search(q, page).await,
        None => ctx.catalog.list(category, page).await,
    };
    spinner.finish_and_clear();

    let listing = result?;
    let total_pages = listing.total_pages.clamp(1, page_cap);

    if !output.is_human() {
        output.json(&json!({
            "page": listing.page,
            "total_pages": total_pages,
            "total_results": listing.total_results,
            "results": listing.results,
        }));
        return Ok(());
    }

    match query {
        Some(q) => output.heading(format!("Results for \"{}\"", q)),
        None => output.heading(category.label()),
    }

    if listing.results.is_empty() {
        match query {
            Some(q) => output.info(format!("No movies found for \"{}\".", q)),
            None => output.info("No movies available."),
        }
        return Ok(());
    }

    render_movie_rows(&listing.results, &ctx.wishlist);
    output.info(format!(
        "Page {} of {} - {} {} on wishlist",
        listing.page,
        total_pages,
        "♥".red(),
        ctx.wishlist.len()
    ));
    Ok(())
}

/// Shared row renderer for the list, search, and wishlist views.
pub(crate) fn render_movie_rows(rows: &[MovieSummary], wishlist: &Wishlist) {
    for (index, movie) in rows.iter().enumerate() {
        let heart = if wishlist.contains(movie.id) {
            "♥".red().to_string()
        } else {
            " ".to_string()
        };
        let year = movie
            .release_year()
            .map(|y| format!(" ({})", y))
            .unwrap_or_default();
        println!(
            "{:>2}. {} {}{}  ★ {:.1}  [{}]",
            index + 1,
            heart,
            movie.title,
            year,
            movie.vote_average,
            movie.id
        );
    }
}
