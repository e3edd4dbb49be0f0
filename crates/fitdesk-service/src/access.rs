//! Actor gating for privileged operations.

use fitdesk_core::{Actor, MemberId};

use crate::error::{Result, ServiceError};

pub(crate) fn require_admin(actor: &Actor) -> Result<()> {
    if actor.is_admin() {
        Ok(())
    } else {
        Err(ServiceError::AdminRequired)
    }
}

pub(crate) fn require_self_or_admin(actor: &Actor, member: &MemberId) -> Result<()> {
    if actor.is_admin() || actor.is_member(member) {
        Ok(())
    } else {
        Err(ServiceError::AccessDenied)
    }
}
