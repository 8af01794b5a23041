use crate::status::normalize::{CheckoutStatus, OrderStatus, PaymentStatus};
use serde::{Deserialize, Serialize};

/// Single derived lifecycle state summarizing order + checkout + payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AggregatedStatus {
    Failed,
    Completed,
    PaymentPending,
    CheckoutPending,
    Processing,
}

impl AggregatedStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, AggregatedStatus::Completed | AggregatedStatus::Failed)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AggregatedStatus::Failed => "FAILED",
            AggregatedStatus::Completed => "COMPLETED",
            AggregatedStatus::PaymentPending => "PAYMENT_PENDING",
            AggregatedStatus::CheckoutPending => "CHECKOUT_PENDING",
            AggregatedStatus::Processing => "PROCESSING",
        }
    }
}

impl std::fmt::Display for AggregatedStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Deterministic aggregation for eventually-consistent status feeds.
/// Priority-ordered, first match wins:
/// 1. any source Failed -> Failed (failure is irreversible)
/// 2. payment Completed -> Completed (checkout success is a prerequisite
///    that already happened, so payment alone decides terminal success)
/// 3. checkout Completed, payment absent or Pending -> PaymentPending
/// 4. order still active, checkout absent or Pending -> CheckoutPending
/// 5. anything else, including Unknown inputs -> Processing
pub fn aggregate(
    order: OrderStatus,
    checkout: Option<CheckoutStatus>,
    payment: Option<PaymentStatus>,
) -> AggregatedStatus {
    if order == OrderStatus::Failed
        || checkout == Some(CheckoutStatus::Failed)
        || payment == Some(PaymentStatus::Failed)
    {
        return AggregatedStatus::Failed;
    }

    if payment == Some(PaymentStatus::Completed) {
        return AggregatedStatus::Completed;
    }

    if checkout == Some(CheckoutStatus::Completed)
        && matches!(payment, None | Some(PaymentStatus::Pending))
    {
        return AggregatedStatus::PaymentPending;
    }

    if order.is_active() && matches!(checkout, None | Some(CheckoutStatus::Pending)) {
        return AggregatedStatus::CheckoutPending;
    }

    AggregatedStatus::Processing
}

/// Convenience entry point for callers holding raw wire strings.
pub fn aggregate_raw(
    order: &str,
    checkout: Option<&str>,
    payment: Option<&str>,
) -> AggregatedStatus {
    aggregate(
        OrderStatus::from_raw(order),
        checkout.map(CheckoutStatus::from_raw),
        payment.map(PaymentStatus::from_raw),
    )
}
