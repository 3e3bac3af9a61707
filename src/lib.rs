pub mod config;
pub mod domain;
pub mod repository;
pub mod routes;
pub mod startup;
pub mod storage;
pub mod telemetry;
