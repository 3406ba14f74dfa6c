//! epiwatch-web — JSON API for Epiwatch
//! Exposes:
//!   - Outbreak-risk assessment endpoint
//!   - Region dashboard aggregation
//!   - Recent assessment queries
//!   - Model/system status
//!   - SSE event stream

pub mod config;
pub mod handlers;
pub mod router;
pub mod sse;
pub mod state;
