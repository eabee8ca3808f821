//! # `CallEnvelope` Envelope
//!
//! Wrapper for every request and response crossing the dispatch boundary.
//!
//! ## Properties
//!
//! - **Versioning**: All envelopes include a `version` field for forward compatibility.
//! - **Correlation**: Responses reuse the `correlation_id` of their request.
//! - **Envelope Authority**: `caller` is the sole source of truth for identity.

use crate::entities::Principal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Envelope pairing an authenticated caller with a payload.
///
/// The transport that builds the envelope is responsible for authenticating
/// `caller`; subsystems trust it as given and never read identity from the
/// payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallEnvelope<T> {
    /// Protocol version.
    pub version: u16,

    /// Correlates a response with its request.
    pub correlation_id: Uuid,

    /// Identity of the caller the operation runs as.
    pub caller: Principal,

    /// The request or response payload.
    pub payload: T,
}

impl<T> CallEnvelope<T> {
    /// Current protocol version.
    pub const CURRENT_VERSION: u16 = 1;

    /// Wraps a new request with a fresh correlation id.
    pub fn new(caller: Principal, payload: T) -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            correlation_id: Uuid::new_v4(),
            caller,
            payload,
        }
    }

    /// Builds the response envelope for this request.
    pub fn reply<R>(&self, payload: R) -> CallEnvelope<R> {
        CallEnvelope {
            version: CallEnvelope::<R>::CURRENT_VERSION,
            correlation_id: self.correlation_id,
            caller: self.caller.clone(),
            payload,
        }
    }
}
