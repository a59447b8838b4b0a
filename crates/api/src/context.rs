//! Request-scoped context injected by the auth middleware.

use cartshare_core::UserId;

/// The authenticated identity acting in this request.
///
/// Every operation behind the auth middleware trusts this as the actor.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    user_id: UserId,
}

impl CurrentUser {
    pub fn new(user_id: UserId) -> Self {
        Self { user_id }
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }
}
