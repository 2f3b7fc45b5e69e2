//! User service - account creation with a starter profile
//!
//! A new user gets a placeholder health card and a profile pointing at it,
//! so `GET /profile/:user_id` works immediately after creation.

use crate::error::ApiError;
use crate::repositories::{CreateProfile, HealthCardRepository, ProfileRepository, UserRepository};
use chrono::NaiveDate;
use resqlink_shared::{CreateUserRequest, CreateUserResponse, HealthCardInput};
use sqlx::{PgConnection, PgPool};
use tracing::{debug, info};

pub const DEFAULT_BLOOD_GROUP: &str = "Unknown";
pub const DEFAULT_ALLERGIES: &str = "None";
pub const DEFAULT_MEDICAL_CONDITIONS: &str = "None";
pub const DEFAULT_EMERGENCY_CONTACT: &str = "0000000000";
pub const DEFAULT_BIO: &str = "No bio yet";
pub const DEFAULT_AVATAR_URL: &str = "";
pub const DEFAULT_GENDER: &str = "Other";

/// 2000-01-01
pub fn default_date_of_birth() -> NaiveDate {
    NaiveDate::from_ymd_opt(2000, 1, 1).unwrap_or_default()
}

/// Health card every new user starts with
pub fn default_health_card() -> HealthCardInput {
    HealthCardInput {
        blood_group: Some(DEFAULT_BLOOD_GROUP.to_string()),
        allergies: Some(DEFAULT_ALLERGIES.to_string()),
        medical_conditions: Some(DEFAULT_MEDICAL_CONDITIONS.to_string()),
        emergency_contact: Some(DEFAULT_EMERGENCY_CONTACT.to_string()),
    }
}

/// User service for account creation
pub struct UserService;

impl UserService {
    /// Create a user, a default health card and a default profile
    ///
    /// The three inserts run in order. Unless `atomic` is set each one
    /// commits on its own: a failure after the first leaves a user without
    /// a profile, a failure after the second leaves an unreferenced card.
    pub async fn create_user(
        db: &PgPool,
        atomic: bool,
        req: CreateUserRequest,
    ) -> Result<CreateUserResponse, ApiError> {
        let created = if atomic {
            let mut tx = db.begin().await?;
            let created = Self::insert_user_with_defaults(&mut tx, &req).await?;
            tx.commit().await?;
            created
        } else {
            let mut conn = db.acquire().await?;
            Self::insert_user_with_defaults(&mut conn, &req).await?
        };

        info!(user_id = %created.user_id, "User created");
        Ok(created)
    }

    async fn insert_user_with_defaults(
        conn: &mut PgConnection,
        req: &CreateUserRequest,
    ) -> Result<CreateUserResponse, ApiError> {
        let user = UserRepository::create(&mut *conn, req.name.as_deref(), req.email.as_deref())
            .await
            .map_err(ApiError::Internal)?;

        let health_card = HealthCardRepository::create(&mut *conn, &default_health_card())
            .await
            .map_err(ApiError::Internal)?;
        debug!(user_id = %user.id, health_card_id = %health_card.id, "Default health card inserted");

        let profile = CreateProfile {
            user_id: user.id,
            health_card_id: health_card.id,
            bio: DEFAULT_BIO.to_string(),
            avatar_url: DEFAULT_AVATAR_URL.to_string(),
            date_of_birth: default_date_of_birth(),
            gender: DEFAULT_GENDER.to_string(),
        };
        ProfileRepository::create(&mut *conn, &profile)
            .await
            .map_err(ApiError::Internal)?;

        Ok(CreateUserResponse {
            user_id: user.id,
            health_card_id: health_card.id,
        })
    }
}
