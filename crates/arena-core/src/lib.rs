//! Core arena client library (config, session, REST client, flows).

pub mod api;
pub mod config;
pub mod flows;
pub mod format;
pub mod logging;
pub mod session;
pub mod validate;
