use anyhow::{Result, bail};
use colored::Colorize;
use pawwalk_core::geo::NearbyWalker;
use pawwalk_core::walker::Walker;

use super::context::AppContext;
use super::display;

pub async fn list(ctx: &AppContext, nearby: bool, favorites: bool, json: bool) -> Result<()> {
    if nearby {
        // A one-shot process has no location until it asks for one.
        if let Err(e) = ctx.store.get_user_location(false).await {
            bail!("{}", e);
        }
    }

    let snapshot = ctx.store.snapshot();
    let mut rows: Vec<NearbyWalker> = if nearby {
        snapshot
            .nearby_walkers(ctx.config.nearby_radius_km)
            .unwrap_or_default()
    } else {
        Vec::new()
    };
    let mut walkers: Vec<Walker> = if nearby {
        rows.iter().map(|row| row.walker.clone()).collect()
    } else {
        snapshot.walkers.clone()
    };
    if favorites {
        rows.retain(|row| row.walker.favorite);
        walkers.retain(|walker| walker.favorite);
    }

    if json {
        let out = if nearby {
            serde_json::to_string_pretty(&rows)?
        } else {
            serde_json::to_string_pretty(&walkers)?
        };
        println!("{}", out);
        return Ok(());
    }

    if walkers.is_empty() {
        println!("{}", "No walkers match.".bright_black());
    }
    if nearby {
        for row in &rows {
            println!("{}", display::walker_line(&row.walker, Some(row.distance_km)));
        }
        if snapshot.is_far_from_service_area(ctx.config.service_area_km) {
            println!(
                "{}",
                "You're far from our service area; showing what's closest.".yellow()
            );
        }
    } else {
        for walker in &walkers {
            println!("{}", display::walker_line(walker, None));
        }
    }
    Ok(())
}

pub async fn show(ctx: &AppContext, walker_id: &str) -> Result<()> {
    let Some(walker) = ctx.store.walker_by_id(walker_id) else {
        bail!("No walker with id {}", walker_id);
    };
    ctx.store.mark_selected_walker(walker_id).await;
    display::walker_detail(&walker);
    Ok(())
}

pub fn recent(ctx: &AppContext) -> Result<()> {
    let snapshot = ctx.store.snapshot();
    match snapshot.last_selected_walker() {
        Some(walker) => display::walker_detail(walker),
        None => println!("{}", "No walker viewed yet.".bright_black()),
    }
    Ok(())
}

pub async fn favorite(ctx: &AppContext, walker_id: &str) -> Result<()> {
    if ctx.store.walker_by_id(walker_id).is_none() {
        bail!("No walker with id {}", walker_id);
    }
    ctx.store.toggle_favorite(walker_id).await;

    if let Some(walker) = ctx.store.walker_by_id(walker_id) {
        let verb = if walker.favorite { "Added" } else { "Removed" };
        println!("{} {} {} favorites", verb.green(), walker.name, if walker.favorite { "to" } else { "from" });
    }
    Ok(())
}

pub async fn availability(ctx: &AppContext, walker_id: &str, available: bool) -> Result<()> {
    if ctx.store.walker_by_id(walker_id).is_none() {
        bail!("No walker with id {}", walker_id);
    }
    ctx.store.set_availability(walker_id, available).await;

    if let Some(walker) = ctx.store.walker_by_id(walker_id) {
        println!("{}", display::walker_line(&walker, None));
    }
    Ok(())
}
