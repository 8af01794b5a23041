use anyhow::Result;
use o2c_client::clients::checkout_client::CheckoutClient;
use o2c_client::clients::order_client::OrderClient;
use o2c_client::clients::payment_client::PaymentClient;
use o2c_client::config::AppConfig;
use o2c_client::domain::order::ListOrdersParams;
use o2c_client::http::client::HttpClient;
use o2c_client::poll::scheduler::{PollConfig, PollScheduler};
use o2c_client::service::order_board::OrderBoard;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cfg = AppConfig::from_env();
    let timeout = Duration::from_millis(cfg.request_timeout_ms);

    let board = OrderBoard::new(
        Arc::new(OrderClient {
            http: HttpClient::new(cfg.order_base_url.clone(), timeout),
        }),
        Arc::new(CheckoutClient {
            http: HttpClient::new(cfg.checkout_base_url.clone(), timeout),
        }),
        Arc::new(PaymentClient {
            http: HttpClient::new(cfg.payment_base_url.clone(), timeout),
        }),
        chrono::Duration::milliseconds(cfg.source_cooldown_ms as i64),
        1,
    );
    let board = Arc::new(Mutex::new(board));

    let poll_config = PollConfig {
        interval: Duration::from_millis(cfg.poll_interval_ms),
        error_backoff_base: Duration::from_millis(cfg.error_backoff_ms),
        error_backoff_max: Duration::from_millis(cfg.max_error_backoff_ms),
    };

    let scheduler = PollScheduler::start(poll_config, move || {
        let board = board.clone();
        async move {
            let mut board = board.lock().await;
            board.load(&ListOrdersParams::default()).await?;
            for row in board.rows() {
                tracing::info!(
                    order_id = %row.order_id,
                    customer_id = %row.customer_id,
                    status = %row.aggregated,
                    "order"
                );
            }
            Ok(())
        }
    });

    tokio::signal::ctrl_c().await?;
    tracing::info!("shutting down");
    scheduler.shutdown().await;
    Ok(())
}
