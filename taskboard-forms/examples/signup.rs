//! Registration walkthrough
//!
//! Binds two sign-up submissions against a seeded in-memory user store:
//! one that trips several rules at once, then a clean one.
//!
//! Run with: `cargo run -p taskboard-forms --example signup`

use std::sync::Arc;

use log::LevelFilter;
use simplelog::Config;
use simplelog::SimpleLogger;
use taskboard_forms::forms::RegistrationForm;
use taskboard_forms::model::FormData;
use taskboard_forms::store::InMemoryUserStore;
use taskboard_forms::store::UserRecord;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    SimpleLogger::init(LevelFilter::Debug, Config::default())?;

    let users = Arc::new(InMemoryUserStore::seeded([UserRecord::new(
        "nina",
        "nina@example.com",
    )]));

    // Taken username, malformed email, mismatched confirmation.
    let bad = FormData::new()
        .set("username", "nina")
        .set("email", "not-an-email")
        .set("password", "hunter2")
        .set("confirm_password", "hunter3");

    let form = RegistrationForm::bind(bad, users.clone());
    let report = form.validate().await?;

    println!("First attempt:");
    for state in &report {
        for error in &state.errors {
            println!("  {}: {}", state.field, error);
        }
    }

    // Fixed up.
    let good = FormData::new()
        .set("username", "marek")
        .set("email", "marek@example.com")
        .set("password", "hunter2")
        .set("confirm_password", "hunter2");

    let form = RegistrationForm::bind(good, users);
    let report = form.validate().await?;

    println!("\nSecond attempt:");
    if report.is_valid() {
        println!(
            "  welcome, {}!",
            form.username().unwrap_or("(unnamed)")
        );
    }

    Ok(())
}
