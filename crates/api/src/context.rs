use stockroom_core::UserId;

/// Principal context for a request (the authenticated user).
///
/// Inserted by the auth middleware and passed explicitly into every service
/// operation; no global request state is threaded through.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PrincipalContext {
    user_id: UserId,
}

impl PrincipalContext {
    pub fn new(user_id: UserId) -> Self {
        Self { user_id }
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }
}
