use clap::Args;

use crate::config::AppConfig;
use crate::context::AppContext;
use crate::domain::ticket::Ticket;
use crate::error::AppResult;
use crate::workflow::ticket::{change_status, find_ticket};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    /// Print JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

pub async fn list(ctx: &AppContext, output: OutputArgs) -> AppResult<()> {
    let tickets = ctx.tickets.list_tickets().await;

    if output.json {
        println!("{}", serde_json::to_string_pretty(&tickets)?);
        return Ok(());
    }

    if tickets.is_empty() {
        println!("{}", empty_listing(&ctx.config));
    }
    for ticket in &tickets {
        println!("{}", summary_line(ticket));
    }
    Ok(())
}

pub async fn show(ctx: &AppContext, id: i32, output: OutputArgs) -> AppResult<()> {
    let ticket = find_ticket(ctx, id).await?;

    if output.json {
        println!("{}", serde_json::to_string_pretty(&ticket)?);
    } else {
        println!("{}", detail(&ticket));
    }
    Ok(())
}

pub async fn set_status(ctx: &AppContext, id: i32, status: &str) -> AppResult<()> {
    let change = change_status(ctx, id, status).await?;
    println!("Ticket {}: {} -> {}", change.id, change.from, change.to);
    Ok(())
}

fn empty_listing(config: &AppConfig) -> String {
    format!("No tickets in {}.", config.data_path.display())
}

fn summary_line(ticket: &Ticket) -> String {
    format!(
        "#{:<4} {:<12} {}  ({})",
        ticket.id,
        ticket.status.as_str(),
        ticket.title,
        ticket.created_at.format(TIMESTAMP_FORMAT)
    )
}

fn detail(ticket: &Ticket) -> String {
    format!(
        "Ticket #{}\nTitle: {}\nStatus: {}\nCreated: {}\n\n{}",
        ticket.id,
        ticket.title,
        ticket.status,
        ticket.created_at.format(TIMESTAMP_FORMAT),
        ticket.description
    )
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::config::LatencyProfile;
    use crate::domain::sample::sample_tickets;

    #[test]
    fn empty_listing_names_the_document() {
        let config = AppConfig {
            content_root: PathBuf::from("/srv/app"),
            data_path: PathBuf::from("/srv/app/Data/tickets.json"),
            latency: LatencyProfile::none(),
        };
        assert_eq!(
            empty_listing(&config),
            "No tickets in /srv/app/Data/tickets.json."
        );
    }

    #[test]
    fn formats_summary_line() {
        let ticket = &sample_tickets()[1];
        assert_eq!(
            summary_line(ticket),
            "#2    En progreso  Impresora de la oficina sin conexión  (2024-01-16 11:05)"
        );
    }

    #[test]
    fn formats_detail() {
        let ticket = &sample_tickets()[4];
        let text = detail(ticket);
        assert!(text.starts_with("Ticket #5\nTitle: Restablecer contraseña de la VPN\n"));
        assert!(text.contains("Status: Cerrado\nCreated: 2024-01-19 10:00"));
        assert!(text.ends_with(&ticket.description));
    }
}
