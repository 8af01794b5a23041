pub mod config;
pub mod clients {
    pub mod checkout_client;
    pub mod order_client;
    pub mod payment_client;
}
pub mod domain {
    pub mod checkout;
    pub mod order;
    pub mod payment;
}
pub mod http {
    pub mod client;
}
pub mod poll {
    pub mod cooldown;
    pub mod scheduler;
}
pub mod service {
    pub mod order_board;
    pub mod order_detail;
}
pub mod status {
    pub mod aggregate;
    pub mod normalize;
}
pub mod timeline {
    pub mod merge;
}
