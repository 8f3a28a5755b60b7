//! Terminal rendering.

use chrono::Local;
use colored::Colorize;
use pawwalk_core::booking::Booking;
use pawwalk_core::walker::Walker;

pub fn walker_line(walker: &Walker, distance_km: Option<f64>) -> String {
    let star = if walker.favorite { "★".yellow() } else { " ".normal() };
    let status = if walker.is_available {
        "available".green()
    } else {
        "busy".bright_black()
    };
    let distance = distance_km
        .map(|km| format!("  {:.1} km", km))
        .unwrap_or_default();

    format!(
        "{} {:<4} {:<8} {:.1}  {:>4} walks  ${:.0}/h  {}{}",
        star,
        walker.id.bright_black(),
        walker.name.bold(),
        walker.rating,
        walker.walks_completed,
        walker.price_per_hour,
        status,
        distance
    )
}

pub fn walker_detail(walker: &Walker) {
    println!("{}", walker_line(walker, None));
    if !walker.bio.is_empty() {
        println!("  {}", walker.bio);
    }
    println!("  {}", walker.photo_url.bright_black());
}

pub fn booking_line(booking: &Booking) -> String {
    format!(
        "{}  {}  {} min with {} for {}  ${:.2}",
        booking.id.bright_black(),
        booking.start_time.with_timezone(&Local).format("%Y-%m-%d %H:%M"),
        booking.duration_minutes,
        booking.walker_name.bold(),
        booking.dog_name,
        booking.estimated_cost()
    )
}

pub fn booking_detail(booking: &Booking) {
    println!("{}", booking_line(booking));
    let end = booking.end_time().with_timezone(&Local);
    println!("  ends {}", end.format("%H:%M"));
    if !booking.notes.is_empty() {
        println!("  notes: {}", booking.notes);
    }
}
