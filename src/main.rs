//! Restaurant Booking - command-line driver.
//!
//! Reads one JSON reservation request per line from stdin, submits it to the
//! scheduler and writes one JSON decision per line to stdout. Logs go to stderr.

use anyhow::Result;
use restaurant_booking::{
    BookingScheduler, Confirmation, Config, HttpNotificationGateway, LoggingNotificationGateway,
    NotificationClient, NotificationGateway, ReservationRequest,
};
use serde::Serialize;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// One output line.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
enum Decision {
    Accepted(Confirmation),
    Rejected { kind: &'static str, reason: String },
    Invalid { reason: String },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = Config::from_env();

    let level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let gateway: Arc<dyn NotificationGateway> = match NotificationClient::from_config(&config) {
        Some(client) => {
            info!(
                "Sending notifications via {}",
                config.notify_api_url.as_deref().unwrap_or_default()
            );
            Arc::new(HttpNotificationGateway::new(client))
        }
        None => {
            info!("No notification service configured, notifications will be logged only");
            Arc::new(LoggingNotificationGateway)
        }
    };

    let scheduler = BookingScheduler::with_system_clock(config.capacity_per_hour, gateway);
    info!(
        "Booking scheduler ready with capacity {} per hour",
        config.capacity_per_hour
    );

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let decision = process_line(&scheduler, &line).await;
        let mut out = serde_json::to_string(&decision)?;
        out.push('\n');
        stdout.write_all(out.as_bytes()).await?;
    }
    stdout.flush().await?;

    // stderr regardless of LOG_LEVEL
    eprintln!("Input closed: {}", scheduler.metrics().summary());
    Ok(())
}

async fn process_line(scheduler: &BookingScheduler, line: &str) -> Decision {
    let request: ReservationRequest = match serde_json::from_str(line) {
        Ok(request) => request,
        Err(e) => {
            return Decision::Invalid {
                reason: format!("Malformed request: {}", e),
            }
        }
    };

    let reservation = match request.into_reservation() {
        Ok(reservation) => reservation,
        Err(e) => {
            return Decision::Invalid {
                reason: e.to_string(),
            }
        }
    };

    match scheduler.submit(reservation).await {
        Ok(confirmation) => Decision::Accepted(confirmation),
        Err(rejection) => Decision::Rejected {
            kind: rejection.kind(),
            reason: rejection.to_string(),
        },
    }
}
