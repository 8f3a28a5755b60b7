use anyhow::{Result, bail};
use colored::Colorize;

use super::context::AppContext;
use super::display;

pub async fn locate(ctx: &AppContext, with_address: bool) -> Result<()> {
    let location = match ctx.store.get_user_location(with_address).await {
        Ok(location) => location,
        Err(e) => bail!("{} Set [home] in config.toml to share a location.", e),
    };

    let coords = location.coords;
    match &location.place {
        Some(place) => println!("{} ({:.4}, {:.4})", place.label().bold(), coords.lat, coords.lng),
        None => println!("({:.4}, {:.4})", coords.lat, coords.lng),
    }

    let snapshot = ctx.store.snapshot();
    let nearby = snapshot
        .nearby_walkers(ctx.config.nearby_radius_km)
        .unwrap_or_default();
    if nearby.is_empty() {
        println!(
            "{}",
            format!("No walkers within {} km.", ctx.config.nearby_radius_km).bright_black()
        );
    }
    for row in &nearby {
        println!("{}", display::walker_line(&row.walker, Some(row.distance_km)));
    }
    if snapshot.is_far_from_service_area(ctx.config.service_area_km) {
        println!("{}", "You're far from our service area.".yellow());
    }
    Ok(())
}
