use anyhow::{Result, bail};
use chrono::{Duration, Local};
use colored::Colorize;
use pawwalk_core::booking::{BookingPatch, NewBooking};

use super::context::AppContext;
use super::{display, input};

pub struct BookRequest {
    pub walker_id: String,
    pub date: String,
    pub time: String,
    pub duration: u32,
    pub dog: String,
    pub notes: Option<String>,
    pub remind: bool,
}

pub struct UpdateRequest {
    pub date: Option<String>,
    pub time: Option<String>,
    pub duration: Option<u32>,
    pub dog: Option<String>,
    pub notes: Option<String>,
}

pub async fn book(ctx: &AppContext, request: BookRequest) -> Result<()> {
    let Some(walker) = ctx.store.walker_by_id(&request.walker_id) else {
        bail!("No walker with id {}", request.walker_id);
    };
    if !walker.is_available {
        println!("{}", format!("{} is marked busy; booking anyway.", walker.name).yellow());
    }

    let start_time = input::start_time(&request.date, &request.time)?;
    let booking_id = ctx
        .store
        .create_booking(NewBooking {
            walker_id: walker.id.clone(),
            walker_name: walker.name.clone(),
            price_per_hour: walker.price_per_hour,
            start_time,
            duration_minutes: request.duration,
            dog_name: request.dog,
            notes: request.notes,
        })
        .await?;

    let Some(booking) = ctx.store.get_booking_by_id(&booking_id) else {
        bail!("Booking {} vanished after creation", booking_id);
    };
    println!("{}", "Booked!".green().bold());
    display::booking_detail(&booking);

    if request.remind {
        let lead = Duration::minutes(ctx.config.reminder_lead_minutes);
        match ctx.reminders.schedule_booking_reminder(&booking, lead).await {
            Ok(_) => println!(
                "Reminder set for {} minutes before the walk.",
                ctx.config.reminder_lead_minutes
            ),
            Err(e) => println!("{}", format!("No reminder: {}", e).yellow()),
        }
    }
    Ok(())
}

pub fn list(ctx: &AppContext) {
    let snapshot = ctx.store.snapshot();
    if snapshot.bookings.is_empty() {
        println!("{}", "No bookings yet.".bright_black());
        return;
    }
    for booking in &snapshot.bookings {
        println!("{}", display::booking_line(booking));
    }
}

pub fn show(ctx: &AppContext, booking_id: &str) -> Result<()> {
    match ctx.store.get_booking_by_id(booking_id) {
        Some(booking) => {
            display::booking_detail(&booking);
            Ok(())
        }
        None => bail!("No booking with id {}", booking_id),
    }
}

pub async fn update(ctx: &AppContext, booking_id: &str, request: UpdateRequest) -> Result<()> {
    let Some(existing) = ctx.store.get_booking_by_id(booking_id) else {
        bail!("No booking with id {}", booking_id);
    };

    // Either half of the start time may change; the other half comes from the booking.
    let start_time = if request.date.is_some() || request.time.is_some() {
        let local = existing.start_time.with_timezone(&Local);
        let date = request
            .date
            .unwrap_or_else(|| local.format("%Y-%m-%d").to_string());
        let time = request
            .time
            .unwrap_or_else(|| local.format("%H:%M").to_string());
        Some(input::start_time(&date, &time)?)
    } else {
        None
    };

    let patch = BookingPatch {
        start_time,
        duration_minutes: request.duration,
        dog_name: request.dog,
        notes: request.notes,
        ..Default::default()
    };
    ctx.store.update_booking(booking_id, patch).await?;

    if let Some(booking) = ctx.store.get_booking_by_id(booking_id) {
        println!("{}", "Updated.".green());
        display::booking_detail(&booking);
    }
    Ok(())
}

pub async fn cancel(ctx: &AppContext, booking_id: &str) -> Result<()> {
    if ctx.store.get_booking_by_id(booking_id).is_none() {
        bail!("No booking with id {}", booking_id);
    }
    ctx.store.delete_booking(booking_id).await;
    println!("{} {}", "Cancelled".green(), booking_id);
    Ok(())
}
