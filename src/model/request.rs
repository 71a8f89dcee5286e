use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateBloodRequestDto {
    pub hospital_id: i32,
    /// One of `A+`, `A-`, `B+`, `B-`, `O+`, `O-`, `AB+`, `AB-`.
    pub blood_type: String,
    /// Requested volume in millilitres.
    pub quantity: i32,
    /// `low`, `medium`, `high` or `critical`; defaults to `medium`.
    pub urgency: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct BloodRequestDto {
    pub id: i32,
    pub recipient_id: i32,
    pub hospital_id: i32,
    pub blood_type: String,
    pub quantity: i32,
    pub urgency: String,
    pub status: String,
    /// Matched donors, closest first.
    pub matched_donor_ids: Vec<i32>,
    pub version: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct MatchResultDto {
    pub request: BloodRequestDto,
    pub matched_donors_count: usize,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdateRequestStatusDto {
    /// Target status: `fulfilled` or `cancelled`.
    pub status: String,
}
