//! Data models for the ResQLink profile service

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Medical metadata attached to a profile by reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthCard {
    pub id: Uuid,
    pub blood_group: Option<String>,
    pub allergies: Option<String>,
    pub medical_conditions: Option<String>,
    pub emergency_contact: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Per-user profile row
///
/// `health_card_id` is a plain reference: replacing it abandons the
/// previous card instead of deleting it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: Uuid,
    pub user_id: Uuid,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<String>,
    pub health_card_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

/// Profile with its health card expanded inline
///
/// The card is always serialized, as `null` when the profile has none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileWithHealthCard {
    #[serde(flatten)]
    pub profile: Profile,
    pub health_card: Option<HealthCard>,
}
