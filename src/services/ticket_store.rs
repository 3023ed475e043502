use async_trait::async_trait;

use crate::domain::ticket::Ticket;

/// Read access plus the single status mutation. Failures never cross this
/// boundary: absence is `None`, a rejected update is `false`.
#[async_trait]
pub trait TicketStore: Send + Sync {
    async fn list_tickets(&self) -> Vec<Ticket>;
    async fn get_ticket(&self, id: i32) -> Option<Ticket>;
    async fn update_ticket_status(&self, id: i32, new_status: &str) -> bool;
}
