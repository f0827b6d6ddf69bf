pub mod config;
pub mod engine;
pub mod errors;
pub mod model;
pub mod report;
pub mod seed;
pub mod storage;
pub mod strategy_api;
pub mod timing;
