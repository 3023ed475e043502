use std::path::Path;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use tokio::time::sleep;
use tracing::{error, info, warn};

use crate::config::LatencyProfile;
use crate::domain::sample::sample_tickets;
use crate::domain::ticket::{Ticket, TicketStatus};
use crate::infra::json_file::{DocumentError, read_document};
use crate::services::TicketStore;

/// Process-lifetime ticket collection, loaded once at construction.
///
/// Each operation takes the lock only after its simulated delay and releases
/// it before returning. Concurrent updates on the same id are last write wins.
pub struct InMemoryTicketStore {
    tickets: RwLock<Vec<Ticket>>,
    latency: LatencyProfile,
}

impl InMemoryTicketStore {
    /// Loads the document at `path`, substituting the sample dataset when it is
    /// missing or cannot be parsed. Never fails.
    pub fn load(path: &Path, latency: LatencyProfile) -> Self {
        let tickets = match read_document(path) {
            Ok(Some(tickets)) => {
                info!(
                    count = tickets.len(),
                    path = %path.display(),
                    "loaded tickets from document"
                );
                tickets
            }
            Ok(None) => {
                // Parsed but empty: no fallback here, unlike the failure cases.
                warn!(path = %path.display(), "tickets document is null, starting with no tickets");
                Vec::new()
            }
            Err(err @ DocumentError::Missing { .. }) => {
                warn!(error = %err, "using sample tickets");
                sample_tickets()
            }
            Err(err) => {
                error!(error = %err, "failed to load tickets, using sample tickets");
                sample_tickets()
            }
        };

        Self::from_tickets(tickets, latency)
    }

    pub fn from_tickets(tickets: Vec<Ticket>, latency: LatencyProfile) -> Self {
        Self {
            tickets: RwLock::new(tickets),
            latency,
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<Ticket>> {
        self.tickets.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Ticket>> {
        self.tickets.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl TicketStore for InMemoryTicketStore {
    async fn list_tickets(&self) -> Vec<Ticket> {
        sleep(self.latency.list).await;
        self.read().clone()
    }

    async fn get_ticket(&self, id: i32) -> Option<Ticket> {
        sleep(self.latency.get).await;
        self.read().iter().find(|ticket| ticket.id == id).cloned()
    }

    async fn update_ticket_status(&self, id: i32, new_status: &str) -> bool {
        sleep(self.latency.update).await;

        let mut tickets = self.write();
        let Some(ticket) = tickets.iter_mut().find(|ticket| ticket.id == id) else {
            warn!(id, "ticket not found");
            return false;
        };

        let Some(status) = TicketStatus::from_str(new_status) else {
            warn!(id, status = new_status, "invalid ticket status");
            return false;
        };

        let previous = ticket.status;
        ticket.set_status(status);
        info!(id, from = %previous, to = %status, "ticket status updated");
        true
    }
}
