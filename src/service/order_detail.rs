use crate::clients::checkout_client::CheckoutApi;
use crate::clients::order_client::OrderApi;
use crate::clients::payment_client::PaymentApi;
use crate::domain::checkout::{CheckoutStatusDto, CheckoutTimelineEventDto};
use crate::domain::order::OrderSummary;
use crate::domain::payment::{PaymentStatusDto, PaymentTimelineEventDto};
use crate::http::client::ApiError;
use crate::poll::cooldown::SourceCooldown;
use crate::status::aggregate::{aggregate_raw, AggregatedStatus};
use crate::timeline::merge::{latest_checkout_status, latest_payment_status, merge, TimelineItem};
use chrono::Utc;
use std::sync::Arc;

/// Everything the detail page needs for one refresh cycle.
#[derive(Debug, Clone)]
pub struct OrderView {
    pub order: OrderSummary,
    pub checkout_status: Option<String>,
    pub payment_status: Option<String>,
    pub payment_failure_reason: Option<String>,
    pub aggregated: AggregatedStatus,
    pub timeline: Vec<TimelineItem>,
}

/// Detail view for a single order: fans out to both status feeds and both
/// timelines on every refresh. The order fetch is the primary signal and its
/// failure propagates; checkout/payment failures fall back to the last-known
/// data and put that source into cooldown.
pub struct OrderDetail {
    order_id: String,
    orders_api: Arc<dyn OrderApi>,
    checkout_api: Arc<dyn CheckoutApi>,
    payment_api: Arc<dyn PaymentApi>,
    checkout_cooldown: SourceCooldown,
    payment_cooldown: SourceCooldown,
    checkout_status: Option<CheckoutStatusDto>,
    payment_status: Option<PaymentStatusDto>,
    checkout_events: Vec<CheckoutTimelineEventDto>,
    payment_events: Vec<PaymentTimelineEventDto>,
}

impl OrderDetail {
    pub fn new(
        order_id: impl Into<String>,
        orders_api: Arc<dyn OrderApi>,
        checkout_api: Arc<dyn CheckoutApi>,
        payment_api: Arc<dyn PaymentApi>,
        cooldown: chrono::Duration,
        cooldown_failure_threshold: u32,
    ) -> Self {
        Self {
            order_id: order_id.into(),
            orders_api,
            checkout_api,
            payment_api,
            checkout_cooldown: SourceCooldown::new(cooldown, cooldown_failure_threshold),
            payment_cooldown: SourceCooldown::new(cooldown, cooldown_failure_threshold),
            checkout_status: None,
            payment_status: None,
            checkout_events: Vec::new(),
            payment_events: Vec::new(),
        }
    }

    pub async fn refresh(&mut self) -> Result<OrderView, ApiError> {
        let order = self.orders_api.get_order(&self.order_id).await?;

        let now = Utc::now();
        let fetch_checkout = !self.checkout_cooldown.is_open(now);
        let fetch_payment = !self.payment_cooldown.is_open(now);

        let checkout_api = self.checkout_api.clone();
        let payment_api = self.payment_api.clone();
        let order_ids = vec![self.order_id.clone()];
        let order_id = self.order_id.clone();

        let (checkout, payment) = tokio::join!(
            async {
                if !fetch_checkout {
                    return None;
                }
                let fetched: Result<_, ApiError> = async {
                    let mut statuses = checkout_api.statuses(&order_ids).await?;
                    let events = checkout_api.timeline(&order_id).await?;
                    Ok((statuses.remove(&order_id), events))
                }
                .await;
                Some(fetched)
            },
            async {
                if !fetch_payment {
                    return None;
                }
                let fetched: Result<_, ApiError> = async {
                    let mut statuses = payment_api.statuses(&order_ids).await?;
                    let events = payment_api.timeline(&order_id).await?;
                    Ok((statuses.remove(&order_id), events))
                }
                .await;
                Some(fetched)
            },
        );

        match checkout {
            Some(Ok((status, events))) => {
                self.checkout_cooldown.record_success();
                self.checkout_status = status;
                self.checkout_events = events;
            }
            Some(Err(e)) => {
                tracing::warn!(error = %e, order_id = %self.order_id, "checkout refresh failed");
                self.checkout_cooldown.record_failure(Utc::now());
            }
            None => tracing::debug!("checkout source in cooldown, skipping fetch"),
        }

        match payment {
            Some(Ok((status, events))) => {
                self.payment_cooldown.record_success();
                self.payment_status = status;
                self.payment_events = events;
            }
            Some(Err(e)) => {
                tracing::warn!(error = %e, order_id = %self.order_id, "payment refresh failed");
                self.payment_cooldown.record_failure(Utc::now());
            }
            None => tracing::debug!("payment source in cooldown, skipping fetch"),
        }

        Ok(self.view(order))
    }

    fn view(&self, order: OrderSummary) -> OrderView {
        // Prefer the status endpoint; when it never answered, fall back to
        // the newest status visible in the timeline feed.
        let checkout_status = self
            .checkout_status
            .as_ref()
            .map(|dto| dto.status.clone())
            .or_else(|| latest_checkout_status(&self.checkout_events));
        let payment_status = self
            .payment_status
            .as_ref()
            .map(|dto| dto.status.clone())
            .or_else(|| latest_payment_status(&self.payment_events));
        let payment_failure_reason = self
            .payment_status
            .as_ref()
            .and_then(|dto| dto.failure_reason.clone())
            .or_else(|| {
                self.payment_events
                    .iter()
                    .rev()
                    .find_map(|ev| ev.failure_reason.clone())
            });

        let aggregated = aggregate_raw(
            &order.status,
            checkout_status.as_deref(),
            payment_status.as_deref(),
        );
        let timeline = merge(&order, &self.checkout_events, &self.payment_events);

        OrderView {
            order,
            checkout_status,
            payment_status,
            payment_failure_reason,
            aggregated,
            timeline,
        }
    }
}
