use crate::clients::checkout_client::CheckoutApi;
use crate::clients::order_client::OrderApi;
use crate::clients::payment_client::PaymentApi;
use crate::domain::checkout::CheckoutStatusDto;
use crate::domain::order::{ListOrdersParams, OrderSummary};
use crate::domain::payment::PaymentStatusDto;
use crate::poll::cooldown::SourceCooldown;
use crate::status::aggregate::{aggregate_raw, AggregatedStatus};
use anyhow::Result;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct OrderRow {
    pub order_id: String,
    pub customer_id: String,
    pub created_at: String,
    pub aggregated: AggregatedStatus,
}

/// Orders-list view over the three upstream services. Holds the last-known
/// status maps so a failing source degrades to stale data instead of blanks,
/// with a per-source cooldown suppressing re-fetches of a known-down
/// dependency while the others keep polling.
pub struct OrderBoard {
    orders_api: Arc<dyn OrderApi>,
    checkout_api: Arc<dyn CheckoutApi>,
    payment_api: Arc<dyn PaymentApi>,
    checkout_cooldown: SourceCooldown,
    payment_cooldown: SourceCooldown,
    orders: Vec<OrderSummary>,
    checkout_by_order: HashMap<String, CheckoutStatusDto>,
    payment_by_order: HashMap<String, PaymentStatusDto>,
}

impl OrderBoard {
    pub fn new(
        orders_api: Arc<dyn OrderApi>,
        checkout_api: Arc<dyn CheckoutApi>,
        payment_api: Arc<dyn PaymentApi>,
        cooldown: chrono::Duration,
        cooldown_failure_threshold: u32,
    ) -> Self {
        Self {
            orders_api,
            checkout_api,
            payment_api,
            checkout_cooldown: SourceCooldown::new(cooldown, cooldown_failure_threshold),
            payment_cooldown: SourceCooldown::new(cooldown, cooldown_failure_threshold),
            orders: Vec::new(),
            checkout_by_order: HashMap::new(),
            payment_by_order: HashMap::new(),
        }
    }

    /// Fetch the orders list, then refresh both status feeds. A failing
    /// orders fetch propagates (the poll loop turns it into backoff) while
    /// the previously loaded orders stay visible.
    pub async fn load(&mut self, params: &ListOrdersParams) -> Result<()> {
        self.orders = self.orders_api.list_orders(params).await?;
        self.refresh_statuses().await;
        Ok(())
    }

    /// Fan out checkout and payment status fetches and fold the results in.
    /// Either source failing is logged and recorded against its cooldown;
    /// the other source and the cached data are unaffected.
    pub async fn refresh_statuses(&mut self) {
        let order_ids: Vec<String> = self
            .orders
            .iter()
            .map(|o| o.order_id.clone())
            .filter(|id| !id.is_empty())
            .collect();
        if order_ids.is_empty() {
            return;
        }

        let now = Utc::now();
        let fetch_checkout = !self.checkout_cooldown.is_open(now);
        let fetch_payment = !self.payment_cooldown.is_open(now);

        let checkout_api = self.checkout_api.clone();
        let payment_api = self.payment_api.clone();

        let (checkout, payment) = tokio::join!(
            async {
                if fetch_checkout {
                    Some(checkout_api.statuses(&order_ids).await)
                } else {
                    None
                }
            },
            async {
                if fetch_payment {
                    Some(payment_api.statuses(&order_ids).await)
                } else {
                    None
                }
            },
        );

        match checkout {
            Some(Ok(map)) => {
                self.checkout_cooldown.record_success();
                self.checkout_by_order = map;
            }
            Some(Err(e)) => {
                tracing::warn!(error = %e, "checkout status refresh failed");
                self.checkout_cooldown.record_failure(Utc::now());
            }
            None => tracing::debug!("checkout source in cooldown, skipping fetch"),
        }

        match payment {
            Some(Ok(map)) => {
                self.payment_cooldown.record_success();
                self.payment_by_order = map;
            }
            Some(Err(e)) => {
                tracing::warn!(error = %e, "payment status refresh failed");
                self.payment_cooldown.record_failure(Utc::now());
            }
            None => tracing::debug!("payment source in cooldown, skipping fetch"),
        }
    }

    pub fn rows(&self) -> Vec<OrderRow> {
        self.orders
            .iter()
            .map(|order| {
                let checkout = self
                    .checkout_by_order
                    .get(&order.order_id)
                    .map(|dto| dto.status.as_str());
                let payment = self
                    .payment_by_order
                    .get(&order.order_id)
                    .map(|dto| dto.status.as_str());

                OrderRow {
                    order_id: order.order_id.clone(),
                    customer_id: order.customer_id.clone(),
                    created_at: order.created_at.clone(),
                    aggregated: aggregate_raw(&order.status, checkout, payment),
                }
            })
            .collect()
    }

    pub fn orders(&self) -> &[OrderSummary] {
        &self.orders
    }
}
