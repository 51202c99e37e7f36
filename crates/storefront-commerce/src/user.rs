//! Shopper identity and cart ownership.

use crate::cart::Cart;
use crate::error::StorefrontError;
use serde::{Deserialize, Serialize};

/// The shopper. An empty email means signed out.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct User {
    /// Email address, empty when signed out.
    pub email: String,
    /// Cart owned by this user.
    pub cart: Cart,
}

impl User {
    /// Create a signed-out user with an empty cart.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Create a signed-in user with an empty cart.
    pub fn signed_in(email: impl Into<String>) -> Result<Self, StorefrontError> {
        let mut user = Self::default();
        user.sign_in(email)?;
        Ok(user)
    }

    /// Check if the user is signed in.
    pub fn is_signed_in(&self) -> bool {
        !self.email.is_empty()
    }

    /// Record the signed-in email. The cart is kept.
    pub fn sign_in(&mut self, email: impl Into<String>) -> Result<(), StorefrontError> {
        let email = email.into();
        let trimmed = email.trim();
        if trimmed.is_empty() {
            return Err(StorefrontError::InvalidEmail(email));
        }
        self.email = trimmed.to_string();
        Ok(())
    }

    /// Sign out and drop the cart.
    pub fn sign_out(&mut self) {
        *self = Self::default();
    }
}
