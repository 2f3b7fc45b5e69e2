//! Profile repository for database operations

use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use resqlink_shared::Profile;
use sqlx::postgres::PgExecutor;
use uuid::Uuid;

/// Profile record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ProfileRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<String>,
    pub health_card_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl From<ProfileRecord> for Profile {
    fn from(record: ProfileRecord) -> Self {
        Self {
            id: record.id,
            user_id: record.user_id,
            bio: record.bio,
            avatar_url: record.avatar_url,
            date_of_birth: record.date_of_birth,
            gender: record.gender,
            health_card_id: record.health_card_id,
            created_at: record.created_at,
        }
    }
}

/// Input for the profile upsert
///
/// `user_id` and `date_of_birth` are text cast by the store.
#[derive(Debug, Clone, Default)]
pub struct UpsertProfile {
    pub user_id: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub date_of_birth: Option<String>,
    pub gender: Option<String>,
    pub health_card_id: Option<Uuid>,
}

/// Input for inserting a brand new profile
#[derive(Debug, Clone)]
pub struct CreateProfile {
    pub user_id: Uuid,
    pub health_card_id: Uuid,
    pub bio: String,
    pub avatar_url: String,
    pub date_of_birth: NaiveDate,
    pub gender: String,
}

/// Profile repository for database operations
pub struct ProfileRepository;

impl ProfileRepository {
    /// Find the profile belonging to a user
    pub async fn find_by_user_id<'e, E>(executor: E, user_id: &str) -> Result<Option<ProfileRecord>>
    where
        E: PgExecutor<'e>,
    {
        let profile = sqlx::query_as::<_, ProfileRecord>(
            r#"
            SELECT id, user_id, bio, avatar_url, date_of_birth, gender, health_card_id, created_at
            FROM profile
            WHERE user_id = $1::uuid
            "#,
        )
        .bind(user_id)
        .fetch_optional(executor)
        .await?;

        Ok(profile)
    }

    /// Insert or overwrite the profile for `user_id`
    ///
    /// On conflict every mutable column takes the new value, including a
    /// null `health_card_id`. `id` and `created_at` keep their first values.
    pub async fn upsert<'e, E>(executor: E, input: &UpsertProfile) -> Result<ProfileRecord>
    where
        E: PgExecutor<'e>,
    {
        let profile = sqlx::query_as::<_, ProfileRecord>(
            r#"
            INSERT INTO profile (user_id, bio, avatar_url, date_of_birth, gender, health_card_id, created_at)
            VALUES ($1::uuid, $2, $3, $4::date, $5, $6, NOW())
            ON CONFLICT (user_id) DO UPDATE SET
                bio = EXCLUDED.bio,
                avatar_url = EXCLUDED.avatar_url,
                date_of_birth = EXCLUDED.date_of_birth,
                gender = EXCLUDED.gender,
                health_card_id = EXCLUDED.health_card_id
            RETURNING id, user_id, bio, avatar_url, date_of_birth, gender, health_card_id, created_at
            "#,
        )
        .bind(&input.user_id)
        .bind(&input.bio)
        .bind(&input.avatar_url)
        .bind(&input.date_of_birth)
        .bind(&input.gender)
        .bind(input.health_card_id)
        .fetch_one(executor)
        .await?;

        Ok(profile)
    }

    /// Insert a profile, failing if the user already has one
    pub async fn create<'e, E>(executor: E, input: &CreateProfile) -> Result<ProfileRecord>
    where
        E: PgExecutor<'e>,
    {
        let profile = sqlx::query_as::<_, ProfileRecord>(
            r#"
            INSERT INTO profile (user_id, health_card_id, bio, avatar_url, date_of_birth, gender, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, NOW())
            RETURNING id, user_id, bio, avatar_url, date_of_birth, gender, health_card_id, created_at
            "#,
        )
        .bind(input.user_id)
        .bind(input.health_card_id)
        .bind(&input.bio)
        .bind(&input.avatar_url)
        .bind(input.date_of_birth)
        .bind(&input.gender)
        .fetch_one(executor)
        .await?;

        Ok(profile)
    }
}
