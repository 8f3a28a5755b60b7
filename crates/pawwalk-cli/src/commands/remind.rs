use anyhow::Result;
use colored::Colorize;
use pawwalk_core::notification::NotificationContent;

use super::context::AppContext;
use super::input;

pub async fn in_seconds(
    ctx: &AppContext,
    seconds: u64,
    title: Option<String>,
    body: Option<String>,
) -> Result<()> {
    let id = ctx
        .reminders
        .schedule_in_seconds(seconds, NotificationContent { title, body })
        .await?;
    println!("{} {}", "Scheduled".green(), id.bright_black());
    Ok(())
}

pub async fn at(
    ctx: &AppContext,
    date: &str,
    time: &str,
    title: Option<String>,
    body: Option<String>,
) -> Result<()> {
    let target = input::start_time(date, time)?;
    let id = ctx
        .reminders
        .schedule_at(target, NotificationContent { title, body })
        .await?;
    println!("{} {}", "Scheduled".green(), id.bright_black());
    Ok(())
}
