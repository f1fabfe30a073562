//! JSON types shared with the backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend wraps auth responses in a `{success, data, message}` envelope
//! and returns bare JSON for catalog/admin endpoints. Everything here is a
//! plain serde type; no business logic lives on the wire structs beyond the
//! role-code mapping, which is deliberately resolved at this boundary.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Account role, mapped from the backend's legacy string codes.
///
/// The backend stores roles as `"000"`/`"001"`/`"002"`. Unknown or missing
/// codes degrade to `User` so a bad row can never grant elevated access.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Role {
    Admin,
    Manager,
    #[default]
    User,
}

impl Role {
    /// Map a legacy role code to the closed enum.
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        match code {
            "000" => Self::Admin,
            "001" => Self::Manager,
            _ => Self::User,
        }
    }

    /// Whether this role may enter the admin back-office.
    #[must_use]
    pub fn is_back_office(self) -> bool {
        matches!(self, Self::Admin | Self::Manager)
    }

    /// Display label used in admin tables.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Admin => "관리자",
            Self::Manager => "매니저",
            Self::User => "일반",
        }
    }
}

/// Authenticated account identity.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "rolesCode")]
    pub roles_code: Option<String>,
}

impl User {
    /// Resolved role; missing codes mean an ordinary user.
    #[must_use]
    pub fn role(&self) -> Role {
        self.roles_code.as_deref().map_or(Role::User, Role::from_code)
    }

    /// Name to show in the header, falling back to the email.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name.as_deref().filter(|n| !n.is_empty()).unwrap_or(&self.email)
    }
}

/// `{success, data, message}` wrapper used by the auth endpoints.
#[derive(Clone, Debug, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

impl<T> Envelope<T> {
    /// Unwrap the envelope into either the payload or the server's message.
    ///
    /// # Errors
    ///
    /// Returns the server-provided message (or `fallback`) when the call was
    /// not successful or carried no data.
    pub fn into_result(self, fallback: &str) -> Result<T, String> {
        match (self.success, self.data) {
            (true, Some(data)) => Ok(data),
            (_, _) => Err(self.message.unwrap_or_else(|| fallback.to_owned())),
        }
    }

    /// Unwrap an envelope whose payload is irrelevant. Gates only on
    /// `success`: several endpoints answer `{success: true}` with no
    /// `data` at all, and that is still a success.
    ///
    /// # Errors
    ///
    /// Returns the server-provided message (or `fallback`) when the call
    /// was not successful.
    pub fn into_unit_result(self, fallback: &str) -> Result<(), String> {
        if self.success {
            Ok(())
        } else {
            Err(self.message.unwrap_or_else(|| fallback.to_owned()))
        }
    }
}

/// Payload of a successful credential login.
#[derive(Clone, Debug, Deserialize)]
pub struct LoginData {
    #[serde(rename = "accessToken")]
    pub access_token: String,
    #[serde(rename = "refreshToken")]
    pub refresh_token: String,
    pub user: User,
}

/// Payload of a successful token refresh. The backend may rotate the
/// refresh token; when it does not, the old one stays valid.
#[derive(Clone, Debug, Deserialize)]
pub struct RefreshData {
    #[serde(rename = "accessToken")]
    pub access_token: String,
    #[serde(default, rename = "refreshToken")]
    pub refresh_token: Option<String>,
}

/// Payload of a completed social signup: a fresh token pair for the new
/// account (no user record; the caller fetches it with the access token).
#[derive(Clone, Debug, Deserialize)]
pub struct OauthSignupData {
    #[serde(rename = "accessToken")]
    pub access_token: String,
    #[serde(rename = "refreshToken")]
    pub refresh_token: String,
}

/// A purchasable product from the catalog.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Product {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// A price plan scoped to a single product.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PricePlan {
    pub id: i64,
    pub name: String,
    pub price: i64,
    pub currency: String,
}

/// Editable profile fields from `/api/users/me`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub company: Option<String>,
}

/// Backend response to a confirmed payment.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ConfirmData {
    #[serde(default, rename = "orderName")]
    pub order_name: Option<String>,
    #[serde(default, rename = "licenseKey")]
    pub license_key: Option<String>,
    #[serde(default, rename = "licenseValidUntil")]
    pub license_valid_until: Option<String>,
}

/// Rows of the admin user table.
#[derive(Clone, Debug, Deserialize)]
pub struct AdminUser {
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default, rename = "rolesCode")]
    pub roles_code: Option<String>,
    #[serde(default, rename = "countryCode")]
    pub country_code: Option<String>,
    #[serde(default, rename = "createdAt")]
    pub created_at: Option<String>,
}

/// Rows of the admin price-plan table.
#[derive(Clone, Debug, Deserialize)]
pub struct AdminPricePlan {
    pub id: i64,
    #[serde(rename = "productCode")]
    pub product_code: String,
    pub name: String,
    pub price: i64,
    pub currency: String,
    #[serde(default, rename = "isActive")]
    pub is_active: bool,
}

/// Rows of the admin license table.
#[derive(Clone, Debug, Deserialize)]
pub struct AdminLicense {
    pub id: String,
    #[serde(rename = "licenseKey")]
    pub license_key: String,
    #[serde(default, rename = "ownerId")]
    pub owner_id: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, rename = "validUntil")]
    pub valid_until: Option<String>,
}

/// Rows of the admin payment table.
#[derive(Clone, Debug, Deserialize)]
pub struct AdminPayment {
    pub id: i64,
    #[serde(default, rename = "userEmail")]
    pub user_email: Option<String>,
    #[serde(rename = "orderId")]
    pub order_id: String,
    pub amount: i64,
    pub currency: String,
    #[serde(default)]
    pub status: Option<String>,
}
