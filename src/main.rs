mod app_system;
mod catalog;
mod clients;
mod domain;
mod error;
mod hours;
mod messages;
mod pricing;
mod render;
mod session;
mod session_actor;
mod submission;


use std::sync::Arc;

use tokio::sync::watch;
use tracing::{error, info, Instrument};

use crate::app_system::{setup_tracing, AppConfig, PizzeriaSystem};
use crate::error::SessionError;
use crate::hours::SystemClock;
use crate::session::SessionPhase;

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    let config = AppConfig::from_env().map_err(|e| e.to_string())?;
    let system = PizzeriaSystem::start(&config, Arc::new(SystemClock)).map_err(|e| e.to_string())?;

    println!("{}", render::menu(&system.catalog));
    println!("{}", render::footer(&system.hours, system.current_hour()));

    if !system.is_open() {
        info!(current_hour = system.current_hour(), "Closed, no order taken");
        system.shutdown().await?;
        return Ok(());
    }

    let modal = tokio::spawn(watch_modal(system.session_client.subscribe_phase()));

    let span = tracing::info_span!("order_session");
    let result = place_demo_order(&system).instrument(span).await;
    match result {
        Ok(()) => info!("Demo order completed"),
        Err(e) => error!(error = %e, "Demo order failed"),
    }

    system.shutdown().await?;
    modal.await.map_err(|e| e.to_string())?;

    info!("Application completed successfully");
    Ok(())
}

/// Stands in for the UI: mounts and unmounts the order modal as the phase changes.
async fn watch_modal(mut phase: watch::Receiver<SessionPhase>) {
    while phase.changed().await.is_ok() {
        let current = *phase.borrow_and_update();
        match current {
            SessionPhase::Closed => info!("Order modal unmounted"),
            SessionPhase::Editing => info!("Order modal mounted"),
            SessionPhase::Confirmed => info!("Showing confirmation"),
        }
    }
}

async fn place_demo_order(system: &PizzeriaSystem) -> Result<(), SessionError> {
    let client = &system.session_client;

    client.open().await?;
    for item in ["Focaccia", "Focaccia", "Pizza Margherita", "Pizza Margherita", "Pizza Salamino"] {
        client.increment(item.to_string()).await?;
    }
    let left = client.decrement("Pizza Margherita".to_string()).await?;
    info!(item = "Pizza Margherita", quantity = left, "Removed one");

    // Submitting without customer details is refused and keeps the draft.
    if let Err(e) = client.submit().await {
        info!(error = %e, "Submission refused");
    }

    client.set_customer_name("Ada".to_string()).await?;
    client.set_customer_address("1 Main St".to_string()).await?;

    let view = client.view().await?;
    println!("{}", render::order_form(&system.catalog, &view));

    let order = client.submit().await?;
    println!("{}", render::confirmation(&system.catalog, &order));

    client.close().await?;
    info!(phase = %client.phase(), "Order session finished");
    Ok(())
}
