use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::{hospital::HospitalRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::user::User,
    service::access::AccessPolicy,
};

/// Capabilities that can be checked before any request-specific lookup.
///
/// Checks that depend on a loaded blood request (matching, status updates) are
/// made by the services that load it.
pub enum Permission {
    CreateRequest,
    /// Manage stock at the given hospital.
    ManageInventory(i32),
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Resolves the session user and checks every permission in order.
    ///
    /// # Returns
    /// - `Ok(User)` - The authenticated user holding all permissions
    /// - `Err(AuthError::UserNotInSession)` - Nobody is logged in
    /// - `Err(AuthError::UserNotInDatabase)` - Session user no longer exists
    /// - `Err(AuthError::AccessDenied)` - First permission the user lacks
    /// - `Err(AppError::NotFound)` - A permission names a missing hospital
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = user_repo.find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        for permission in permissions {
            match permission {
                Permission::CreateRequest => {
                    if !AccessPolicy::can_create_request(&user) {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            "User attempted to create a blood request but their role may not"
                                .to_string(),
                        )
                        .into());
                    }
                }
                Permission::ManageInventory(hospital_id) => {
                    let Some(hospital) = HospitalRepository::new(self.db)
                        .find_by_id(*hospital_id)
                        .await?
                    else {
                        return Err(AppError::NotFound(format!(
                            "Hospital {} not found",
                            hospital_id
                        )));
                    };

                    if !AccessPolicy::can_manage_inventory(&user, &hospital) {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            format!(
                                "User attempted to manage inventory of hospital {} without being its admin",
                                hospital_id
                            ),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }
}
