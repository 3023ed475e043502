use crate::context::AppContext;
use crate::domain::ticket::{Ticket, TicketStatus};
use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusChange {
    pub id: i32,
    pub from: TicketStatus,
    pub to: TicketStatus,
}

pub async fn find_ticket(ctx: &AppContext, id: i32) -> AppResult<Ticket> {
    ctx.tickets
        .get_ticket(id)
        .await
        .ok_or(AppError::NotFound(id))
}

pub async fn change_status(ctx: &AppContext, id: i32, status: &str) -> AppResult<StatusChange> {
    let current = find_ticket(ctx, id).await?;

    if !ctx.tickets.update_ticket_status(id, status).await {
        let reason = match TicketStatus::from_str(status) {
            None => format!(
                "invalid status '{status}' (expected one of: {})",
                TicketStatus::ALL.map(|s| s.as_str()).join(", ")
            ),
            Some(_) => format!("ticket {id} no longer exists"),
        };
        return Err(AppError::Rejected(reason));
    }

    let updated = find_ticket(ctx, id).await?;

    Ok(StatusChange {
        id,
        from: current.status,
        to: updated.status,
    })
}
