use std::time::Duration;

use clap::{Args, Subcommand};

use crate::config::{AppConfig, LatencyProfile};
use crate::error::AppResult;

#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommand {
    /// Show the resolved configuration.
    Show,
}

pub fn run(config: &AppConfig, command: ConfigCommand) -> AppResult<()> {
    match command {
        ConfigCommand::Show => run_show(config),
    }
}

fn run_show(config: &AppConfig) -> AppResult<()> {
    println!("Content root: {}", config.content_root.display());
    println!(
        "Tickets document: {}{}",
        config.data_path.display(),
        if config.data_path.exists() {
            ""
        } else {
            " (missing, sample tickets will be used)"
        }
    );
    println!("Simulated latency: {}", describe_latency(&config.latency));
    Ok(())
}

fn describe_latency(latency: &LatencyProfile) -> String {
    if latency.is_disabled() {
        return "off".to_string();
    }
    format!(
        "list {}, get {}, update {}",
        millis(latency.list),
        millis(latency.get),
        millis(latency.update)
    )
}

fn millis(duration: Duration) -> String {
    format!("{}ms", duration.as_millis())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describes_latency_profiles() {
        assert_eq!(
            describe_latency(&LatencyProfile::default()),
            "list 300ms, get 200ms, update 400ms"
        );
        assert_eq!(describe_latency(&LatencyProfile::none()), "off");
    }
}
