mod messages;
mod stats;
mod subscribers;
