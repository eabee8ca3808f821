//! # Request Handlers
//!
//! Routes enveloped requests to the node. A transport decodes a
//! `CallEnvelope<FundRequest>`, authenticates the caller, calls `dispatch`,
//! and encodes the returned `CallEnvelope<FundResponse>`.

pub mod dispatch;

pub use dispatch::{dispatch, FundRequest, FundResponse};
