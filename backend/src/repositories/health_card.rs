//! Health card repository for database operations
//!
//! Health cards are insert-only: there is no update statement, and nothing
//! here removes a card once a profile stops pointing at it.

use anyhow::Result;
use chrono::{DateTime, Utc};
use resqlink_shared::{HealthCard, HealthCardInput};
use sqlx::postgres::PgExecutor;
use uuid::Uuid;

/// Health card record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct HealthCardRecord {
    pub id: Uuid,
    pub blood_group: Option<String>,
    pub allergies: Option<String>,
    pub medical_conditions: Option<String>,
    pub emergency_contact: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<HealthCardRecord> for HealthCard {
    fn from(record: HealthCardRecord) -> Self {
        Self {
            id: record.id,
            blood_group: record.blood_group,
            allergies: record.allergies,
            medical_conditions: record.medical_conditions,
            emergency_contact: record.emergency_contact,
            created_at: record.created_at,
        }
    }
}

/// Health card repository for database operations
pub struct HealthCardRepository;

impl HealthCardRepository {
    /// Insert a new health card and return it with its generated id
    pub async fn create<'e, E>(executor: E, input: &HealthCardInput) -> Result<HealthCardRecord>
    where
        E: PgExecutor<'e>,
    {
        let record = sqlx::query_as::<_, HealthCardRecord>(
            r#"
            INSERT INTO health_card (blood_group, allergies, medical_conditions, emergency_contact, created_at)
            VALUES ($1, $2, $3, $4, NOW())
            RETURNING id, blood_group, allergies, medical_conditions, emergency_contact, created_at
            "#,
        )
        .bind(&input.blood_group)
        .bind(&input.allergies)
        .bind(&input.medical_conditions)
        .bind(&input.emergency_contact)
        .fetch_one(executor)
        .await?;

        Ok(record)
    }

    /// Find health card by ID
    pub async fn find_by_id<'e, E>(executor: E, id: Uuid) -> Result<Option<HealthCardRecord>>
    where
        E: PgExecutor<'e>,
    {
        let record = sqlx::query_as::<_, HealthCardRecord>(
            r#"
            SELECT id, blood_group, allergies, medical_conditions, emergency_contact, created_at
            FROM health_card
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(executor)
        .await?;

        Ok(record)
    }
}
