//! User service - profile reads, updates, and deletion.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{Password, User};
use crate::errors::{AppError, AppResult};
use crate::infra::UserRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Get user by ID
    async fn get_user(&self, id: i64) -> AppResult<User>;

    /// Update the supplied profile fields; a supplied password is re-hashed
    async fn update_user(
        &self,
        id: i64,
        username: Option<String>,
        email: Option<String>,
        password: Option<String>,
    ) -> AppResult<()>;

    /// Delete user by ID
    async fn delete_user(&self, id: i64) -> AppResult<()>;
}

/// Concrete implementation of UserService over the user repository.
pub struct UserManager {
    users: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn get_user(&self, id: i64) -> AppResult<User> {
        self.users.find_by_id(id).await?.ok_or(AppError::NotFound)
    }

    async fn update_user(
        &self,
        id: i64,
        username: Option<String>,
        email: Option<String>,
        password: Option<String>,
    ) -> AppResult<()> {
        let user = self.users.find_by_id(id).await?.ok_or(AppError::NotFound)?;

        if username.is_none() && email.is_none() && password.is_none() {
            return Err(AppError::validation("No fields provided to update"));
        }

        // A new email must not belong to a different account
        if let Some(ref new_email) = email {
            if let Some(existing) = self.users.find_by_email(new_email).await? {
                if existing.id != user.id {
                    return Err(AppError::conflict("Email"));
                }
            }
        }

        let password_hash = match password {
            Some(plain) => Some(Password::new(&plain)?.into_string()),
            None => None,
        };

        self.users.update(id, username, email, password_hash).await?;
        Ok(())
    }

    async fn delete_user(&self, id: i64) -> AppResult<()> {
        if self.users.find_by_id(id).await?.is_none() {
            return Err(AppError::NotFound);
        }

        self.users.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::MockUserRepository;
    use chrono::Utc;

    fn test_user(id: i64, email: &str) -> User {
        let now = Utc::now();
        User {
            id,
            username: "alice".to_string(),
            email: email.to_string(),
            password_hash: "hash".to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn get_unknown_user_is_not_found() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_id().returning(|_| Ok(None));

        let service = UserManager::new(Arc::new(users));
        let result = service.get_user(42).await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound));
    }

    #[tokio::test]
    async fn update_unknown_user_is_not_found() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_id().returning(|_| Ok(None));

        let service = UserManager::new(Arc::new(users));
        let result = service
            .update_user(42, Some("bob".to_string()), None, None)
            .await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound));
    }

    #[tokio::test]
    async fn update_without_fields_is_rejected() {
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_id()
            .returning(|id| Ok(Some(test_user(id, "a@x.com"))));

        let service = UserManager::new(Arc::new(users));
        let result = service.update_user(1, None, None, None).await;

        assert!(matches!(result.unwrap_err(), AppError::Validation(_)));
    }

    #[tokio::test]
    async fn update_to_email_of_other_user_conflicts() {
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_id()
            .returning(|id| Ok(Some(test_user(id, "a@x.com"))));
        users
            .expect_find_by_email()
            .returning(|email| Ok(Some(test_user(2, email))));

        let service = UserManager::new(Arc::new(users));
        let result = service
            .update_user(1, None, Some("b@x.com".to_string()), None)
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn update_keeping_own_email_is_allowed() {
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_id()
            .returning(|id| Ok(Some(test_user(id, "a@x.com"))));
        users
            .expect_find_by_email()
            .returning(|email| Ok(Some(test_user(1, email))));
        users
            .expect_update()
            .returning(|id, _, _, _| Ok(test_user(id, "a@x.com")));

        let service = UserManager::new(Arc::new(users));
        let result = service
            .update_user(1, None, Some("a@x.com".to_string()), None)
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn update_rehashes_supplied_password() {
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_id()
            .returning(|id| Ok(Some(test_user(id, "a@x.com"))));
        users
            .expect_update()
            .withf(|_, _, _, hash| match hash {
                Some(h) => h.as_str() != "newpass1" && h.starts_with("$argon2"),
                None => false,
            })
            .returning(|id, _, _, _| Ok(test_user(id, "a@x.com")));

        let service = UserManager::new(Arc::new(users));
        let result = service
            .update_user(1, None, None, Some("newpass1".to_string()))
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn delete_unknown_user_is_not_found() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_id().returning(|_| Ok(None));

        let service = UserManager::new(Arc::new(users));
        let result = service.delete_user(42).await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound));
    }

    #[tokio::test]
    async fn delete_existing_user_succeeds() {
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_id()
            .returning(|id| Ok(Some(test_user(id, "a@x.com"))));
        users.expect_delete().returning(|_| Ok(()));

        let service = UserManager::new(Arc::new(users));
        let result = service.delete_user(1).await;

        assert!(result.is_ok());
    }
}
