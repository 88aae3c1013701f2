use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::DomainResult;
use crate::domain::user::value_objects::Email;

/// Account data for persistence.
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub email: Email,
    pub password_hash: String,
    pub display_name: String,
    pub is_active: bool,
}

/// Repository contract for user accounts.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Create a new user; conflicts on duplicate email.
    async fn create(&self, user: &User) -> DomainResult<Uuid>;

    /// Find a user by ID.
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<User>>;

    /// Find a user by email address.
    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>>;

    /// Stamp the user's last successful login.
    async fn update_last_login(&self, user_id: Uuid) -> DomainResult<()>;
}
