pub mod expiry;
pub mod message_log;
pub mod new_subscriber;
pub mod service_type;
pub mod subscriber;
pub mod subscriber_email;
pub mod subscriber_name;
pub mod subscriber_phone;
pub mod subscriber_status;
pub mod update_subscriber;
