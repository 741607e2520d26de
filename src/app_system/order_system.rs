use std::sync::Arc;

use tracing::{error, info, instrument};

use super::AppConfig;
use crate::catalog::Catalog;
use crate::clients::SessionClient;
use crate::error::CatalogError;
use crate::hours::{BusinessHours, Clock};
use crate::session::OrderSession;
use crate::session_actor::SessionService;

/// Owns the running pizzeria: the catalog, business hours, clock and the
/// session actor.
pub struct PizzeriaSystem {
    pub session_client: SessionClient,
    pub catalog: Arc<Catalog>,
    pub hours: BusinessHours,
    clock: Arc<dyn Clock>,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl PizzeriaSystem {
    /// Loads the catalog and starts the session actor. Must run inside a tokio runtime.
    #[instrument(name = "pizzeria_system", skip_all)]
    pub fn start(config: &AppConfig, clock: Arc<dyn Clock>) -> Result<Self, CatalogError> {
        info!("Starting pizzeria system");

        let catalog = match &config.catalog_path {
            Some(path) => Catalog::load(path)?,
            None => Catalog::pizza_menu(),
        };
        let catalog = Arc::new(catalog);

        let session = OrderSession::new(Arc::clone(&catalog), config.hours, Arc::clone(&clock));
        let (service, session_client) = SessionService::new(config.channel_capacity, session);
        let handles = vec![tokio::spawn(service.run())];

        info!(
            item_count = catalog.len(),
            open_hour = config.hours.open_hour,
            close_hour = config.hours.close_hour,
            "Pizzeria system started"
        );

        Ok(Self {
            session_client,
            catalog,
            hours: config.hours,
            clock,
            handles,
        })
    }

    pub fn current_hour(&self) -> u32 {
        self.clock.current_hour()
    }

    pub fn is_open(&self) -> bool {
        self.hours.is_open(self.clock.as_ref())
    }

    #[instrument(skip(self))]
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down pizzeria system");

        if let Err(e) = self.session_client.shutdown().await {
            error!(error = %e, "Session actor already stopped");
        }

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = ?e, "Service shutdown error");
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("Pizzeria system shutdown complete");
        Ok(())
    }
}
