use tokio::sync::{mpsc, watch};
use tracing::{debug, error, info, instrument};

use crate::clients::SessionClient;
use crate::domain::ConfirmedOrder;
use crate::error::SessionError;
use crate::messages::{ServiceResponse, SessionRequest};
use crate::session::{OrderSession, SessionPhase, SessionView};

/// Runs an [`OrderSession`] behind a channel.
///
/// The receive loop is the only place the session is touched, so events are
/// applied strictly in arrival order. After every event the current phase is
/// published on a watch channel.
pub struct SessionService {
    receiver: mpsc::Receiver<SessionRequest>,
    session: OrderSession,
    phase_tx: watch::Sender<SessionPhase>,
}

impl SessionService {
    pub fn new(buffer_size: usize, session: OrderSession) -> (Self, SessionClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let (phase_tx, phase_rx) = watch::channel(session.phase());
        let service = Self {
            receiver,
            session,
            phase_tx,
        };
        let client = SessionClient::new(sender, phase_rx);
        (service, client)
    }

    #[instrument(name = "session_service", skip(self))]
    pub async fn run(mut self) {
        info!("SessionService starting");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                SessionRequest::Open { respond_to } => {
                    let result = self.handle_open();
                    self.respond(respond_to, result);
                }
                SessionRequest::Increment { item, respond_to } => {
                    let result = self.handle_increment(item);
                    self.respond(respond_to, result);
                }
                SessionRequest::Decrement { item, respond_to } => {
                    let result = self.handle_decrement(item);
                    self.respond(respond_to, result);
                }
                SessionRequest::SetCustomerName { name, respond_to } => {
                    let result = self.session.set_customer_name(name);
                    self.respond(respond_to, result);
                }
                SessionRequest::SetCustomerAddress { address, respond_to } => {
                    let result = self.session.set_customer_address(address);
                    self.respond(respond_to, result);
                }
                SessionRequest::View { respond_to } => {
                    let result = self.handle_view();
                    self.respond(respond_to, result);
                }
                SessionRequest::Submit { respond_to } => {
                    let result = self.handle_submit();
                    self.respond(respond_to, result);
                }
                SessionRequest::Close { respond_to } => {
                    let result = self.handle_close();
                    self.respond(respond_to, result);
                }
                SessionRequest::Shutdown => {
                    info!("SessionService shutting down");
                    break;
                }
            }
        }

        info!("SessionService stopped");
    }

    /// Publishes the phase before replying, so a caller that awaited the
    /// reply never reads a stale phase.
    fn respond<T>(&self, respond_to: ServiceResponse<T, SessionError>, result: Result<T, SessionError>) {
        self.publish_phase();
        let _ = respond_to.send(result);
    }

    fn publish_phase(&self) {
        let phase = self.session.phase();
        let changed = self.phase_tx.send_if_modified(|current| {
            if *current == phase {
                return false;
            }
            *current = phase;
            true
        });
        if changed {
            debug!(phase = %phase, "Phase changed");
        }
    }

    #[instrument(skip(self))]
    fn handle_open(&mut self) -> Result<(), SessionError> {
        debug!("Processing open request");
        self.session.open()
    }

    #[instrument(fields(item = %item), skip(self, item))]
    fn handle_increment(&mut self, item: String) -> Result<u32, SessionError> {
        debug!("Processing increment request");
        self.session.increment(&item)
    }

    #[instrument(fields(item = %item), skip(self, item))]
    fn handle_decrement(&mut self, item: String) -> Result<u32, SessionError> {
        debug!("Processing decrement request");
        self.session.decrement(&item)
    }

    #[instrument(skip(self))]
    fn handle_view(&self) -> Result<SessionView, SessionError> {
        Ok(self.session.view()?)
    }

    #[instrument(skip(self))]
    fn handle_submit(&mut self) -> Result<ConfirmedOrder, SessionError> {
        debug!("Processing submit request");
        let result = self.session.submit();
        match &result {
            Ok(order) => info!(total = %order.total(), items = order.items().item_count(), "Order confirmed"),
            Err(SessionError::Lookup(e)) => error!(error = %e, "Draft is inconsistent with the catalog"),
            Err(e) => info!(error = %e, "Order rejected"),
        }
        result
    }

    #[instrument(skip(self))]
    fn handle_close(&mut self) -> Result<bool, SessionError> {
        debug!("Processing close request");
        Ok(self.session.close())
    }
}
