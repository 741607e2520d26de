use tokio::sync::{mpsc, oneshot, watch};
use tracing::{debug, instrument};

use crate::domain::ConfirmedOrder;
use crate::error::SessionError;
use crate::messages::{ServiceResponse, SessionRequest};
use crate::session::{SessionPhase, SessionView};

/// Handle for sending UI events to the session actor.
#[derive(Clone)]
pub struct SessionClient {
    sender: mpsc::Sender<SessionRequest>,
    phase: watch::Receiver<SessionPhase>,
}

impl SessionClient {
    pub fn new(sender: mpsc::Sender<SessionRequest>, phase: watch::Receiver<SessionPhase>) -> Self {
        Self { sender, phase }
    }

    async fn request<T>(
        &self,
        build: impl FnOnce(ServiceResponse<T, SessionError>) -> SessionRequest,
    ) -> Result<T, SessionError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| SessionError::ActorCommunicationError("Actor closed".to_string()))?;
        response
            .await
            .map_err(|_| SessionError::ActorCommunicationError("Actor dropped".to_string()))?
    }

    /// Receiver that changes whenever the session moves between phases.
    ///
    /// A change to [`SessionPhase::Closed`] tells the UI to unmount the order modal.
    pub fn subscribe_phase(&self) -> watch::Receiver<SessionPhase> {
        self.phase.clone()
    }

    /// Last phase published by the actor.
    pub fn phase(&self) -> SessionPhase {
        *self.phase.borrow()
    }

    // Customer fields stay out of the span.

    #[instrument(skip_all)]
    pub async fn set_customer_name(&self, name: String) -> Result<(), SessionError> {
        debug!("Sending request");
        self.request(|respond_to| SessionRequest::SetCustomerName { name, respond_to })
            .await
    }

    #[instrument(skip_all)]
    pub async fn set_customer_address(&self, address: String) -> Result<(), SessionError> {
        debug!("Sending request");
        self.request(|respond_to| SessionRequest::SetCustomerAddress { address, respond_to })
            .await
    }

    #[instrument(skip(self))]
    pub async fn shutdown(&self) -> Result<(), SessionError> {
        debug!("Sending shutdown");
        self.sender
            .send(SessionRequest::Shutdown)
            .await
            .map_err(|_| SessionError::ActorCommunicationError("Actor closed".to_string()))
    }
}

client_method!(SessionClient => fn open() -> () as SessionRequest::Open);
client_method!(SessionClient => fn increment(item: String) -> u32 as SessionRequest::Increment);
client_method!(SessionClient => fn decrement(item: String) -> u32 as SessionRequest::Decrement);
client_method!(SessionClient => fn view() -> SessionView as SessionRequest::View);
client_method!(SessionClient => fn submit() -> ConfirmedOrder as SessionRequest::Submit);
client_method!(SessionClient => fn close() -> bool as SessionRequest::Close);
