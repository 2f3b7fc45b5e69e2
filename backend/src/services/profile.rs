//! Profile service - reads and upserts user profiles

use crate::error::ApiError;
use crate::repositories::{HealthCardRepository, ProfileRepository, UpsertProfile};
use resqlink_shared::{Profile, ProfileWithHealthCard, UpsertProfileRequest};
use sqlx::{PgConnection, PgPool};
use tracing::debug;

/// Message returned when a user has no profile row
pub const PROFILE_NOT_FOUND: &str = "Profile not found";

/// Profile service for user profile operations
pub struct ProfileService;

impl ProfileService {
    /// Get a profile with its health card expanded
    ///
    /// A dangling or absent card reference yields `health_card: null`.
    pub async fn get_profile(db: &PgPool, user_id: &str) -> Result<ProfileWithHealthCard, ApiError> {
        let profile = ProfileRepository::find_by_user_id(db, user_id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound(PROFILE_NOT_FOUND.to_string()))?;

        let health_card = match profile.health_card_id {
            Some(card_id) => HealthCardRepository::find_by_id(db, card_id)
                .await
                .map_err(ApiError::Internal)?,
            None => None,
        };

        Ok(ProfileWithHealthCard {
            profile: profile.into(),
            health_card: health_card.map(Into::into),
        })
    }

    /// Create or overwrite the profile for `req.user_id`
    ///
    /// A supplied health card is always inserted as a new row. The card the
    /// profile pointed at before is left in place, unreferenced.
    ///
    /// With `atomic` unset the two statements commit independently, so a
    /// failing upsert still leaves the new card behind.
    pub async fn upsert_profile(
        db: &PgPool,
        atomic: bool,
        req: UpsertProfileRequest,
    ) -> Result<Profile, ApiError> {
        if atomic {
            let mut tx = db.begin().await?;
            let profile = Self::write_profile(&mut tx, req).await?;
            tx.commit().await?;
            Ok(profile)
        } else {
            let mut conn = db.acquire().await?;
            Self::write_profile(&mut conn, req).await
        }
    }

    async fn write_profile(conn: &mut PgConnection, req: UpsertProfileRequest) -> Result<Profile, ApiError> {
        let health_card_id = match &req.health_card {
            Some(card) => {
                let record = HealthCardRepository::create(&mut *conn, card)
                    .await
                    .map_err(ApiError::Internal)?;
                debug!(health_card_id = %record.id, "Inserted health card for profile upsert");
                Some(record.id)
            }
            None => None,
        };

        let input = UpsertProfile {
            user_id: req.user_id,
            bio: req.bio,
            avatar_url: req.avatar_url,
            date_of_birth: req.date_of_birth,
            gender: req.gender,
            health_card_id,
        };

        let profile = ProfileRepository::upsert(&mut *conn, &input)
            .await
            .map_err(ApiError::Internal)?;
        debug!(user_id = %profile.user_id, profile_id = %profile.id, "Profile upserted");

        Ok(profile.into())
    }
}
