mod api;
mod config;
mod ddns;
mod error;
mod ip;

#[cfg(test)]
mod tests;

use anyhow::{Context, Result};
use api::Route53Client;
use clap::Parser;
use config::{Cli, Config};
use ddns::{Outcome, Route53Ddns};
use log::info;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from(Cli::parse()).validated()?;

    let client = Route53Client::new(&config.region, config.profile.as_deref()).await;
    let ddns = Route53Ddns::new(config, client).context("Failed to set up DDNS updater")?;

    match ddns.update_record().await? {
        Outcome::UpToDate { ip } => {
            info!("{} is current", ip);
            println!("IP is already up to date");
        }
        Outcome::WouldUpdate { ip } => println!("IP would be updated to {}", ip),
        Outcome::Updated { ip, change } => {
            info!("Record updated to {}", ip);
            println!("{}", serde_json::to_string_pretty(&change)?);
        }
    }

    Ok(())
}
