use tokio::sync::oneshot;

use crate::domain::ConfirmedOrder;
use crate::error::SessionError;
use crate::session::SessionView;

/// Generic type aliases for service communication
pub type ServiceResult<T, E> = std::result::Result<T, E>;
pub type ServiceResponse<T, E> = oneshot::Sender<ServiceResult<T, E>>;

/// One message per UI event. Each variant carries its parameters and a
/// oneshot channel for the reply.
#[derive(Debug)]
pub enum SessionRequest {
    Open {
        respond_to: ServiceResponse<(), SessionError>,
    },
    Increment {
        item: String,
        respond_to: ServiceResponse<u32, SessionError>,
    },
    Decrement {
        item: String,
        respond_to: ServiceResponse<u32, SessionError>,
    },
    SetCustomerName {
        name: String,
        respond_to: ServiceResponse<(), SessionError>,
    },
    SetCustomerAddress {
        address: String,
        respond_to: ServiceResponse<(), SessionError>,
    },
    View {
        respond_to: ServiceResponse<SessionView, SessionError>,
    },
    Submit {
        respond_to: ServiceResponse<ConfirmedOrder, SessionError>,
    },
    Close {
        respond_to: ServiceResponse<bool, SessionError>,
    },
    Shutdown,
}
