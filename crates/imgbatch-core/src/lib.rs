pub mod config;
pub mod logging;

pub mod batch;
pub mod codes;
pub mod fetch;
pub mod sheet;
pub mod storage;
pub mod url_model;
pub mod variant;
