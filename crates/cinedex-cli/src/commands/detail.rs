use color_eyre::Result;
use movie_catalog_api::MovieBundle;
use movie_catalog_models::MovieId;
use owo_colors::OwoColorize;
use serde_json::json;

use crate::commands::context::AppContext;
use crate::commands::ui;
use crate::output::Output;

pub async fn run_detail(id: u64, output: &Output) -> Result<()> {
    let ctx = AppContext::init()?;
    let id = MovieId(id);

    let spinner = ui::fetch_spinner(
        "Fetching movie details...",
        output.is_quiet() || !output.is_human(),
    );
    let bundle = ctx.catalog.detail_bundle(id).await;
    spinner.finish_and_clear();
    let bundle = bundle?;

    let cast_limit = ctx.config.browse.cast_limit;

    if output.is_human() {
        render_human(&ctx, &bundle, cast_limit);
    } else {
        output.json(&detail_json(&ctx, &bundle, cast_limit));
    }
    Ok(())
}

fn render_human(ctx: &AppContext, bundle: &MovieBundle, cast_limit: usize) {
    let details = &bundle.details;

    let year = details
        .release_year()
        .map(|y| format!(" ({})", y))
        .unwrap_or_default();
    println!("{}{}", details.title.bold(), year);

    if let Some(tagline) = details.tagline_display() {
        println!("\"{}\"", tagline.italic());
    }

    if ctx.wishlist.contains(details.id) {
        println!("{} On your wishlist", "♥".red());
    }

    println!(
        "★ {:.1} ({} votes)",
        details.vote_average, details.vote_count
    );

    if !details.genres.is_empty() {
        let genres: Vec<&str> = details.genres.iter().map(|g| g.name.as_str()).collect();
        println!("{}", genres.join(" · "));
    }

    let mut facts: Vec<String> = Vec::new();
    if let Some(date) = details.release_date.as_deref().filter(|d| !d.is_empty()) {
        facts.push(format!("Released {}", date));
    }
    if let Some(runtime) = details.runtime_display() {
        facts.push(runtime);
    }
    if let Some(status) = details.status.as_deref() {
        facts.push(status.to_string());
    }
    if let Some(language) = details.original_language.as_deref() {
        facts.push(language.to_uppercase());
    }
    if !facts.is_empty() {
        println!("{}", facts.join(" - "));
    }

    println!();
    println!("{}", "Synopsis".bold());
    if details.overview.is_empty() {
        println!("No synopsis available.");
    } else {
        println!("{}", details.overview);
    }

    let cast = bundle.credits.top_billed(cast_limit);
    if !cast.is_empty() {
        println!();
        println!("{}", "Cast".bold());
        for member in cast {
            match member.character.as_deref().filter(|c| !c.is_empty()) {
                Some(character) => println!("  {} as {}", member.name, character),
                None => println!("  {}", member.name),
            }
        }
    }

    println!();
    match &bundle.trailer {
        Some(trailer) => println!("{} {}", "Trailer:".bold(), trailer.youtube_url()),
        None => println!("{} unavailable", "Trailer:".bold()),
    }

    if let Some(poster) = ctx.catalog.poster_url(details.poster_path.as_deref()) {
        println!("{} {}", "Poster:".bold(), poster);
    }
}

fn detail_json(ctx: &AppContext, bundle: &MovieBundle, cast_limit: usize) -> serde_json::Value {
    json!({
        "movie": bundle.details,
        "cast": bundle.credits.top_billed(cast_limit),
        "trailer_url": bundle.trailer.as_ref().map(|t| t.youtube_url()),
        "poster_url": ctx.catalog.poster_url(bundle.details.poster_path.as_deref()),
        "backdrop_url": ctx.catalog.backdrop_url(bundle.details.backdrop_path.as_deref()),
        "in_wishlist": ctx.wishlist.contains(bundle.details.id),
    })
}
