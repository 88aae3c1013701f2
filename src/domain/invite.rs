use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::errors::{DomainError, DomainResult};

/// Whether an invite admits someone to the league (founding a new team) or
/// to one specific team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "invite_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum InviteType {
    League,
    Team,
}

/// Invite code value object.
///
/// Codes are 6-12 uppercase alphanumerics; parsing normalizes case so that
/// codes survive being read aloud or retyped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InviteCode(String);

const CODE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const CODE_LENGTH: usize = 8;

impl InviteCode {
    /// Validates and normalizes a user-supplied code.
    pub fn parse(code: &str) -> DomainResult<Self> {
        let cleaned = code.trim().to_uppercase();
        let valid_shape = (6..=12).contains(&cleaned.len())
            && cleaned.bytes().all(|b| b.is_ascii_uppercase() || b.is_ascii_digit());
        if !valid_shape {
            return Err(DomainError::validation(
                "Invite code must be 6-12 alphanumeric characters",
            ));
        }
        Ok(Self(cleaned))
    }

    /// Generates a fresh 8-character code from the supplied RNG.
    pub fn generate<R: Rng>(rng: &mut R) -> Self {
        let code = (0..CODE_LENGTH)
            .map(|_| CODE_ALPHABET[rng.gen_range(0..CODE_ALPHABET.len())] as char)
            .collect();
        Self(code)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for InviteCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A redeemable invitation into a league or team.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Invite {
    pub id: Uuid,
    pub league_id: Uuid,
    pub invite_type: InviteType,
    pub team_id: Option<Uuid>,
    pub code: String,
    pub multi_use: bool,
    pub uses: i32,
    pub max_uses: Option<i32>,
    pub expires_at: Option<DateTime<Utc>>,
    pub created_by: Uuid,
    pub created_at: DateTime<Utc>,
}

impl Invite {
    /// Checks expiry and usage limits; `Conflict` when the code is spent.
    pub fn check_redeemable(&self, now: DateTime<Utc>) -> DomainResult<()> {
        if let Some(expires_at) = self.expires_at {
            if now > expires_at {
                return Err(DomainError::conflict("Invite code expired"));
            }
        }
        if !self.multi_use && self.uses >= 1 {
            return Err(DomainError::conflict("Invite code already used"));
        }
        if let Some(max_uses) = self.max_uses {
            if self.uses >= max_uses {
                return Err(DomainError::conflict("Invite code usage limit reached"));
            }
        }
        Ok(())
    }
}
