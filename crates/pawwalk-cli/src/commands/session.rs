use anyhow::{Result, bail};
use colored::Colorize;
use pawwalk_core::user::{Credentials, Registration};

use super::context::AppContext;

pub async fn login(ctx: &AppContext, email: String, password: String) -> Result<()> {
    let credentials = Credentials::new(email, password);
    if !credentials.can_submit() {
        bail!("Enter a valid email and a password");
    }

    let user = ctx.store.login(credentials).await;
    println!("{} {}", "Welcome,".green(), user.name.bold());
    Ok(())
}

pub async fn register(
    ctx: &AppContext,
    name: String,
    email: String,
    password: String,
    dog: Option<String>,
) -> Result<()> {
    let registration = Registration {
        name,
        email,
        password,
        dog_name: dog,
    };
    if !registration.can_submit() {
        bail!("Enter your name, a valid email and a password of at least 4 characters");
    }

    let user = ctx.store.register(registration).await;
    println!("{} {}", "Welcome,".green(), user.name.bold());
    Ok(())
}

pub async fn logout(ctx: &AppContext) {
    ctx.store.logout().await;
    println!("{}", "Logged out.".bright_black());
}

pub fn whoami(ctx: &AppContext) {
    let snapshot = ctx.store.snapshot();
    match &snapshot.user {
        Some(user) => {
            println!("{} <{}>", user.name.bold(), user.email);
            if let Some(dog) = &user.dog_name {
                println!("  dog: {}", dog);
            }
        }
        None => println!("{}", "Not logged in.".bright_black()),
    }
}
