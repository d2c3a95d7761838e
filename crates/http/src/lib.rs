//! HTTP base service for the JobBoard API client
//!
//! This crate owns the pieces every service client shares: the request
//! builder that attaches the bearer credential to outgoing calls, the
//! session-scoped token store, and the single-flight refresh coordinator
//! that renews an expired token once and replays the requests that were
//! parked behind it.

mod client;
mod error;
mod refresh;
mod token;

pub use client::{ApiClient, RequestBuilder};
pub use error::{ApiError, ErrorBody};
pub use refresh::{RefreshCoordinator, RefreshOutcome, RefreshTicket};
pub use token::TokenStore;
