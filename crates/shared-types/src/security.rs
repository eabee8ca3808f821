//! # Administrator Authorization
//!
//! The single fixed identity allowed to resolve cases and gate investment
//! pools. It is established once when the node starts and handed by value to
//! each subsystem that runs an admin-gated operation; nothing can change it
//! afterwards.

use crate::entities::Principal;
use crate::errors::LedgerError;
use serde::{Deserialize, Serialize};

/// The configured administrator identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Administrator(Principal);

impl Administrator {
    /// Creates the administrator credential.
    pub fn new(principal: Principal) -> Self {
        Self(principal)
    }

    /// Returns true if `caller` is the administrator.
    pub fn is_administrator(&self, caller: &Principal) -> bool {
        &self.0 == caller
    }

    /// Authorization guard shared by all admin-gated operations.
    ///
    /// # Errors
    /// - `Unauthorized` if `caller` is not the administrator
    pub fn authorize(&self, caller: &Principal) -> Result<(), LedgerError> {
        if self.is_administrator(caller) {
            Ok(())
        } else {
            tracing::warn!(caller = %caller, "Rejected admin-gated call");
            Err(LedgerError::Unauthorized {
                caller: caller.clone(),
            })
        }
    }
}
