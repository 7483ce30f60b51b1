use ferrobank_core::EmailAddress;

/// Principal context for a request (the authenticated user's identity).
///
/// Inserted by the auth middleware; must be present for all account routes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrincipalContext {
    email: EmailAddress,
}

impl PrincipalContext {
    pub fn new(email: EmailAddress) -> Self {
        Self { email }
    }

    pub fn email(&self) -> &EmailAddress {
        &self.email
    }
}
