//! # Integration Flows
//!
//! - `flows`: request → sign → verify → register through the append gate
//! - `http`: the same flows through the axum router

pub mod flows;
pub mod http;
