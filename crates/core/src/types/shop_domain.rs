//! Shop domain type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`ShopDomain`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum ShopDomainError {
    /// The input string is empty.
    #[error("shop domain cannot be empty")]
    Empty,
    /// The input string is too long.
    #[error("shop domain must be at most {max} characters")]
    TooLong {
        /// Maximum allowed length.
        max: usize,
    },
    /// The input does not contain a dot.
    #[error("shop domain must contain a dot")]
    MissingDot,
    /// The input contains a character outside `[a-z0-9.-]`.
    #[error("shop domain contains invalid character {0:?}")]
    InvalidCharacter(char),
    /// A dot-separated label is empty (leading, trailing, or doubled dot).
    #[error("shop domain has an empty label")]
    EmptyLabel,
}

/// A merchant's shop domain, e.g. `acme.myshopify.com`.
///
/// The shop domain is the unique identifier for a merchant's storefront
/// instance and the key under which all per-shop configuration is stored.
/// It is resolved by the platform's session-validation collaborator and
/// trusted as-is; this type only guards against structurally invalid input.
///
/// ## Constraints
///
/// - Length: 1-254 characters
/// - Characters: lowercase ASCII letters, digits, `-`, `.`
/// - Must contain at least one dot, with no empty labels
///
/// ## Examples
///
/// ```
/// use thankly_core::ShopDomain;
///
/// assert!(ShopDomain::parse("acme.myshopify.com").is_ok());
/// assert!(ShopDomain::parse("shop-2.example.dev").is_ok());
///
/// assert!(ShopDomain::parse("").is_err());            // empty
/// assert!(ShopDomain::parse("no-dot").is_err());      // missing dot
/// assert!(ShopDomain::parse("Acme.Shop.com").is_err()); // uppercase
/// assert!(ShopDomain::parse("acme..com").is_err());   // empty label
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct ShopDomain(String);

impl ShopDomain {
    /// Maximum length of a shop domain (DNS hostname limit).
    pub const MAX_LENGTH: usize = 254;

    /// Parse a `ShopDomain` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input:
    /// - Is empty
    /// - Is longer than 254 characters
    /// - Does not contain a dot
    /// - Contains characters outside `[a-z0-9.-]`
    /// - Has an empty dot-separated label
    pub fn parse(s: &str) -> Result<Self, ShopDomainError> {
        if s.is_empty() {
            return Err(ShopDomainError::Empty);
        }

        if s.len() > Self::MAX_LENGTH {
            return Err(ShopDomainError::TooLong {
                max: Self::MAX_LENGTH,
            });
        }

        if let Some(c) = s
            .chars()
            .find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-' || *c == '.'))
        {
            return Err(ShopDomainError::InvalidCharacter(c));
        }

        if !s.contains('.') {
            return Err(ShopDomainError::MissingDot);
        }

        if s.split('.').any(str::is_empty) {
            return Err(ShopDomainError::EmptyLabel);
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the shop domain as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `ShopDomain` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ShopDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ShopDomain {
    type Err = ShopDomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for ShopDomain {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// SQLx support (with postgres feature)
#[cfg(feature = "postgres")]
impl sqlx::Type<sqlx::Postgres> for ShopDomain {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <String as sqlx::Type<sqlx::Postgres>>::type_info()
    }

    fn compatible(ty: &sqlx::postgres::PgTypeInfo) -> bool {
        <String as sqlx::Type<sqlx::Postgres>>::compatible(ty)
    }
}

#[cfg(feature = "postgres")]
impl<'r> sqlx::Decode<'r, sqlx::Postgres> for ShopDomain {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let s = <String as sqlx::Decode<sqlx::Postgres>>::decode(value)?;
        // Database values are assumed valid
        Ok(Self(s))
    }
}

#[cfg(feature = "postgres")]
impl sqlx::Encode<'_, sqlx::Postgres> for ShopDomain {
    fn encode_by_ref(
        &self,
        buf: &mut sqlx::postgres::PgArgumentBuffer,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <String as sqlx::Encode<sqlx::Postgres>>::encode_by_ref(&self.0, buf)
    }
}
