use super::ApplicationStateToClose;
use tokio_cron_scheduler::JobScheduler;

pub async fn close(state: ApplicationStateToClose, mut scheduler: JobScheduler) {
    tracing::info!("stopping scheduler");
    if let Err(err) = scheduler.shutdown().await {
        tracing::error!(%err, "cannot stop scheduler");
    }

    tracing::info!("closing connection with database");
    state.db_client.shutdown().await;
}

pub async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("starting shutdown");
}
