use serde::{Deserialize, Serialize};

/// Order lifecycle statuses as reported by the order service. Anything the
/// backend sends outside this set maps to `Unknown`, never to a success or
/// failure value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Created,
    Confirmed,
    Active,
    Completed,
    Failed,
    Unknown,
}

impl OrderStatus {
    pub fn from_raw(raw: &str) -> OrderStatus {
        match raw {
            "CREATED" => OrderStatus::Created,
            "CONFIRMED" => OrderStatus::Confirmed,
            "ACTIVE" => OrderStatus::Active,
            "COMPLETED" => OrderStatus::Completed,
            "FAILED" => OrderStatus::Failed,
            _ => OrderStatus::Unknown,
        }
    }

    /// True while the order is still progressing through checkout.
    pub fn is_active(self) -> bool {
        matches!(
            self,
            OrderStatus::Created | OrderStatus::Confirmed | OrderStatus::Active
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CheckoutStatus {
    Pending,
    Completed,
    Failed,
    Unknown,
}

impl CheckoutStatus {
    pub fn from_raw(raw: &str) -> CheckoutStatus {
        match raw {
            "PENDING" => CheckoutStatus::Pending,
            "COMPLETED" => CheckoutStatus::Completed,
            "FAILED" => CheckoutStatus::Failed,
            _ => CheckoutStatus::Unknown,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Pending,
    Completed,
    Failed,
    Unknown,
}

impl PaymentStatus {
    /// `SUCCEEDED` is the wire-level synonym for terminal success and folds
    /// into `Completed` here, before any aggregation runs.
    pub fn from_raw(raw: &str) -> PaymentStatus {
        match raw {
            "PENDING" => PaymentStatus::Pending,
            "SUCCEEDED" | "COMPLETED" => PaymentStatus::Completed,
            "FAILED" => PaymentStatus::Failed,
            _ => PaymentStatus::Unknown,
        }
    }
}

/// Absence (`None`) stays absent; only present-but-unrecognized values become
/// the `Unknown` sentinel.
pub fn normalize_order(raw: Option<&str>) -> Option<OrderStatus> {
    raw.map(OrderStatus::from_raw)
}

pub fn normalize_checkout(raw: Option<&str>) -> Option<CheckoutStatus> {
    raw.map(CheckoutStatus::from_raw)
}

pub fn normalize_payment(raw: Option<&str>) -> Option<PaymentStatus> {
    raw.map(PaymentStatus::from_raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn succeeded_folds_into_completed() {
        assert_eq!(PaymentStatus::from_raw("SUCCEEDED"), PaymentStatus::Completed);
        assert_eq!(PaymentStatus::from_raw("COMPLETED"), PaymentStatus::Completed);
    }

    #[test]
    fn unrecognized_values_become_unknown() {
        assert_eq!(OrderStatus::from_raw("REFUNDED"), OrderStatus::Unknown);
        assert_eq!(CheckoutStatus::from_raw(""), CheckoutStatus::Unknown);
        assert_eq!(PaymentStatus::from_raw("succeeded"), PaymentStatus::Unknown);
    }

    #[test]
    fn absence_is_not_unknown() {
        assert_eq!(normalize_order(None), None);
        assert_eq!(normalize_checkout(None), None);
        assert_eq!(normalize_payment(None), None);
        assert_eq!(normalize_payment(Some("??")), Some(PaymentStatus::Unknown));
        assert_eq!(normalize_order(Some("ACTIVE")), Some(OrderStatus::Active));
        assert_eq!(
            normalize_checkout(Some("PENDING")),
            Some(CheckoutStatus::Pending)
        );
    }
}
