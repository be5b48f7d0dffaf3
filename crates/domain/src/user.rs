use derive_more::Deref;
use uuid::Uuid;

use crate::{DeleteError, Name, ReadError};

#[allow(async_fn_in_trait)]
pub trait UserService {
    async fn get_user(&self) -> Result<User, ReadError>;
    /// Deletes the account and cascades to all records owned by the user.
    async fn delete_user(&self, id: UserID) -> Result<UserID, DeleteError>;
}

#[allow(async_fn_in_trait)]
pub trait UserRepository {
    async fn read_user(&self) -> Result<User, ReadError>;
    async fn delete_user(&self, id: UserID) -> Result<UserID, DeleteError>;
}

/// Identity anchor supplied by the external session provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserID,
    pub name: Name,
    pub email: String,
    pub image: Option<String>,
}

#[derive(Deref, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct UserID(Uuid);

impl UserID {
    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for UserID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for UserID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}
