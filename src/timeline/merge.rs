use crate::domain::checkout::CheckoutTimelineEventDto;
use crate::domain::order::OrderSummary;
use crate::domain::payment::PaymentTimelineEventDto;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Order,
    Checkout,
    Payment,
}

impl Source {
    pub fn as_str(self) -> &'static str {
        match self {
            Source::Order => "order",
            Source::Checkout => "checkout",
            Source::Payment => "payment",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineItem {
    pub source: Source,
    pub event_type: String,
    pub status: String,
    /// Parsed event time; `None` when the wire value was missing or invalid.
    pub occurred_at: Option<DateTime<Utc>>,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure_reason: Option<String>,
}

fn parse_at(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|t| t.with_timezone(&Utc))
}

/// "PAYMENT_ATTEMPT_2" -> "Payment attempt 2". Empty tokens yield an empty
/// string, which callers replace with a source+status fallback.
fn humanize(event_type: &str) -> String {
    let lowered = event_type.to_lowercase().replace('_', " ");
    let mut chars = lowered.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

fn label_for(source: Source, event_type: &str, status: &str) -> String {
    let label = humanize(event_type);
    if label.is_empty() {
        format!("{} {}", humanize(source.as_str()), status.to_lowercase())
    } else {
        label
    }
}

/// Timelines are rendered standalone, so the SUCCEEDED synonym is folded
/// here too, independent of the aggregator. Other raw values pass through.
fn display_payment_status(raw: &str) -> String {
    if raw == "SUCCEEDED" {
        "COMPLETED".to_string()
    } else {
        raw.to_string()
    }
}

/// Merges the three per-service event feeds into one chronological view.
///
/// Synthesizes ORDER_CREATED from the order record (and ORDER_UPDATED when
/// `updated_at` is present and differs), then appends every checkout and
/// payment event with a derived label. Ordering is ascending by time, oldest
/// first; events whose timestamp is missing or unparseable sort to the end in
/// insertion order. The merged sequence is rebuilt from scratch on every call.
pub fn merge(
    order: &OrderSummary,
    checkout_events: &[CheckoutTimelineEventDto],
    payment_events: &[PaymentTimelineEventDto],
) -> Vec<TimelineItem> {
    let mut items = Vec::with_capacity(checkout_events.len() + payment_events.len() + 2);

    items.push(TimelineItem {
        source: Source::Order,
        event_type: "ORDER_CREATED".to_string(),
        status: order.status.clone(),
        occurred_at: parse_at(&order.created_at),
        label: label_for(Source::Order, "ORDER_CREATED", &order.status),
        failure_reason: None,
    });

    if let Some(updated_at) = order.updated_at.as_deref() {
        if updated_at != order.created_at {
            items.push(TimelineItem {
                source: Source::Order,
                event_type: "ORDER_UPDATED".to_string(),
                status: order.status.clone(),
                occurred_at: parse_at(updated_at),
                label: label_for(Source::Order, "ORDER_UPDATED", &order.status),
                failure_reason: None,
            });
        }
    }

    for ev in checkout_events {
        items.push(TimelineItem {
            source: Source::Checkout,
            event_type: ev.event_type.clone(),
            status: ev.status.clone(),
            occurred_at: parse_at(&ev.at),
            label: label_for(Source::Checkout, &ev.event_type, &ev.status),
            failure_reason: None,
        });
    }

    for ev in payment_events {
        items.push(TimelineItem {
            source: Source::Payment,
            event_type: ev.event_type.clone(),
            status: display_payment_status(&ev.status),
            occurred_at: parse_at(&ev.at),
            label: label_for(Source::Payment, &ev.event_type, &ev.status),
            failure_reason: ev.failure_reason.clone(),
        });
    }

    // Stable sort keeps insertion order for ties and unparseable timestamps.
    items.sort_by(|a, b| match (a.occurred_at, b.occurred_at) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });

    items
}

fn latest_status<'a>(
    events: impl Iterator<Item = (Option<DateTime<Utc>>, &'a str)>,
) -> Option<String> {
    events
        .filter(|(_, status)| !status.is_empty())
        .max_by(|(a, _), (b, _)| match (a, b) {
            (Some(x), Some(y)) => x.cmp(y),
            (Some(_), None) => Ordering::Greater,
            (None, Some(_)) => Ordering::Less,
            (None, None) => Ordering::Equal,
        })
        .map(|(_, status)| status.to_string())
}

/// Latest reported checkout status across a timeline feed, used when the
/// dedicated status endpoint was unavailable and the timeline is the only
/// signal left.
pub fn latest_checkout_status(events: &[CheckoutTimelineEventDto]) -> Option<String> {
    latest_status(events.iter().map(|e| (parse_at(&e.at), e.status.as_str())))
}

pub fn latest_payment_status(events: &[PaymentTimelineEventDto]) -> Option<String> {
    latest_status(events.iter().map(|e| (parse_at(&e.at), e.status.as_str())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn humanizes_type_tokens() {
        assert_eq!(humanize("PAYMENT_ATTEMPT_2"), "Payment attempt 2");
        assert_eq!(humanize("CHECKOUT_COMPLETED"), "Checkout completed");
    }

    #[test]
    fn empty_type_falls_back_to_source_and_status() {
        assert_eq!(label_for(Source::Checkout, "", "PENDING"), "Checkout pending");
    }

    #[test]
    fn succeeded_displays_as_completed() {
        assert_eq!(display_payment_status("SUCCEEDED"), "COMPLETED");
        assert_eq!(display_payment_status("PENDING"), "PENDING");
    }
}
