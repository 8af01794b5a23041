use o2c_client::domain::checkout::CheckoutTimelineEventDto;
use o2c_client::domain::order::OrderSummary;
use o2c_client::domain::payment::PaymentTimelineEventDto;
use o2c_client::timeline::merge::{merge, Source};

fn order(status: &str, created_at: &str, updated_at: Option<&str>) -> OrderSummary {
    OrderSummary {
        order_id: "o-1".to_string(),
        customer_id: "c-1".to_string(),
        status: status.to_string(),
        total_amount: 49.90,
        currency: "EUR".to_string(),
        created_at: created_at.to_string(),
        updated_at: updated_at.map(ToString::to_string),
    }
}

fn checkout_event(event_type: &str, status: &str, at: &str) -> CheckoutTimelineEventDto {
    CheckoutTimelineEventDto {
        event_type: event_type.to_string(),
        status: status.to_string(),
        at: at.to_string(),
    }
}

fn payment_event(
    event_type: &str,
    status: &str,
    at: &str,
    failure_reason: Option<&str>,
) -> PaymentTimelineEventDto {
    PaymentTimelineEventDto {
        event_type: event_type.to_string(),
        status: status.to_string(),
        at: at.to_string(),
        failure_reason: failure_reason.map(ToString::to_string),
    }
}

#[test]
fn merges_three_feeds_in_ascending_time_order() {
    let order = order("CONFIRMED", "2026-08-01T10:00:00Z", None);
    let checkout = vec![
        checkout_event("CHECKOUT_CREATED", "PENDING", "2026-08-01T10:00:05Z"),
        checkout_event("CHECKOUT_COMPLETED", "COMPLETED", "2026-08-01T10:00:20Z"),
    ];
    let payment = vec![payment_event(
        "PAYMENT_SUCCEEDED",
        "SUCCEEDED",
        "2026-08-01T10:00:40Z",
        None,
    )];

    let items = merge(&order, &checkout, &payment);

    assert_eq!(items.len(), 4);
    assert_eq!(items[0].event_type, "ORDER_CREATED");
    assert_eq!(items[1].event_type, "CHECKOUT_CREATED");
    assert_eq!(items[2].event_type, "CHECKOUT_COMPLETED");
    assert_eq!(items[3].event_type, "PAYMENT_SUCCEEDED");

    let times: Vec<_> = items.iter().map(|i| i.occurred_at.unwrap()).collect();
    let mut sorted = times.clone();
    sorted.sort();
    assert_eq!(times, sorted);
}

#[test]
fn payment_succeeded_displays_as_completed() {
    let order = order("CONFIRMED", "2026-08-01T10:00:00Z", None);
    let payment = vec![payment_event(
        "PAYMENT_SUCCEEDED",
        "SUCCEEDED",
        "2026-08-01T10:00:40Z",
        None,
    )];

    let items = merge(&order, &[], &payment);
    let payment_item = items.iter().find(|i| i.source == Source::Payment).unwrap();
    assert_eq!(payment_item.status, "COMPLETED");
    assert_eq!(payment_item.label, "Payment succeeded");
}

#[test]
fn invalid_timestamps_sort_to_the_end_without_panicking() {
    let order = order("CREATED", "2026-08-01T10:00:00Z", None);
    let checkout = vec![
        checkout_event("CHECKOUT_CREATED", "PENDING", "not-a-timestamp"),
        checkout_event("CHECKOUT_COMPLETED", "COMPLETED", "2026-08-01T10:00:20Z"),
    ];
    let payment = vec![payment_event("PAYMENT_CREATED", "PENDING", "", None)];

    let items = merge(&order, &checkout, &payment);

    assert_eq!(items.len(), 4);
    assert!(items[0].occurred_at.is_some());
    assert!(items[1].occurred_at.is_some());
    // Unparseable events come last, in insertion order.
    assert_eq!(items[2].event_type, "CHECKOUT_CREATED");
    assert!(items[2].occurred_at.is_none());
    assert_eq!(items[3].event_type, "PAYMENT_CREATED");
    assert!(items[3].occurred_at.is_none());
}

#[test]
fn merge_is_idempotent_over_the_same_inputs() {
    let order = order("CONFIRMED", "2026-08-01T10:00:00Z", None);
    let checkout = vec![
        checkout_event("CHECKOUT_CREATED", "PENDING", "2026-08-01T10:00:05Z"),
        checkout_event("CHECKOUT_COMPLETED", "COMPLETED", "bogus"),
    ];
    let payment = vec![payment_event(
        "PAYMENT_CREATED",
        "PENDING",
        "2026-08-01T10:00:10Z",
        None,
    )];

    let first = merge(&order, &checkout, &payment);
    let second = merge(&order, &checkout, &payment);

    let first_types: Vec<_> = first.iter().map(|i| i.event_type.clone()).collect();
    let second_types: Vec<_> = second.iter().map(|i| i.event_type.clone()).collect();
    assert_eq!(first_types, second_types);
}

#[test]
fn synthesizes_order_updated_when_timestamps_differ() {
    let order = order(
        "COMPLETED",
        "2026-08-01T10:00:00Z",
        Some("2026-08-01T10:05:00Z"),
    );

    let items = merge(&order, &[], &[]);
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].event_type, "ORDER_CREATED");
    assert_eq!(items[0].label, "Order created");
    assert_eq!(items[1].event_type, "ORDER_UPDATED");
    assert_eq!(items[1].label, "Order updated");
}

#[test]
fn no_order_updated_when_timestamps_match() {
    let order = order(
        "CREATED",
        "2026-08-01T10:00:00Z",
        Some("2026-08-01T10:00:00Z"),
    );
    let items = merge(&order, &[], &[]);
    assert_eq!(items.len(), 1);
}

#[test]
fn unknown_event_types_get_humanized_labels() {
    let order = order("CONFIRMED", "2026-08-01T10:00:00Z", None);
    let payment = vec![payment_event(
        "PAYMENT_ATTEMPT_2",
        "PENDING",
        "2026-08-01T10:00:40Z",
        None,
    )];

    let items = merge(&order, &[], &payment);
    let attempt = items.iter().find(|i| i.source == Source::Payment).unwrap();
    assert_eq!(attempt.label, "Payment attempt 2");
}

#[test]
fn failure_reason_is_carried_through() {
    let order = order("CONFIRMED", "2026-08-01T10:00:00Z", None);
    let payment = vec![payment_event(
        "PAYMENT_FAILED",
        "FAILED",
        "2026-08-01T10:00:40Z",
        Some("card declined"),
    )];

    let items = merge(&order, &[], &payment);
    let failed = items.iter().find(|i| i.source == Source::Payment).unwrap();
    assert_eq!(failed.failure_reason.as_deref(), Some("card declined"));
}
