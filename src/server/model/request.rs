//! Blood request domain models, parameters and status transition rules.
//!
//! The status lifecycle is `pending → matched → fulfilled`, with `cancelled`
//! reachable from either non-terminal state. `fulfilled` and `cancelled` are
//! terminal. Entering `matched` is reserved to the matching engine, so
//! [`validate_transition`] rejects it as a direct target.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{BloodType, RequestStatus, Urgency};
use sea_orm::ActiveEnum;

use crate::{
    model::request::{BloodRequestDto, CreateBloodRequestDto, MatchResultDto},
    server::{
        error::{request::RequestError, AppError},
        model::user::Donor,
        util::parse::parse_active_enum,
    },
};

/// Blood request with its ranked matched-donor list.
#[derive(Debug, Clone, PartialEq)]
pub struct BloodRequest {
    pub id: i32,
    pub recipient_id: i32,
    pub hospital_id: i32,
    pub blood_type: BloodType,
    pub quantity: i32,
    pub urgency: Urgency,
    pub status: RequestStatus,
    /// Concurrency token observed when the request was read.
    pub version: i32,
    /// Matched donor ids, closest first.
    pub matched_donor_ids: Vec<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BloodRequest {
    /// Converts entity models to a domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The blood request entity
    /// - `matches` - Match rows for the request in any order
    pub fn from_entity(
        entity: entity::blood_request::Model,
        mut matches: Vec<entity::blood_request_match::Model>,
    ) -> Self {
        matches.sort_by_key(|m| m.rank);

        Self {
            id: entity.id,
            recipient_id: entity.recipient_id,
            hospital_id: entity.hospital_id,
            blood_type: entity.blood_type,
            quantity: entity.quantity,
            urgency: entity.urgency,
            status: entity.status,
            version: entity.version,
            matched_donor_ids: matches.into_iter().map(|m| m.donor_id).collect(),
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn is_terminal(&self) -> bool {
        is_terminal(self.status)
    }

    pub fn into_dto(self) -> BloodRequestDto {
        BloodRequestDto {
            id: self.id,
            recipient_id: self.recipient_id,
            hospital_id: self.hospital_id,
            blood_type: self.blood_type.to_value(),
            quantity: self.quantity,
            urgency: self.urgency.to_value(),
            status: self.status.to_value(),
            matched_donor_ids: self.matched_donor_ids,
            version: self.version,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Parameters for creating a blood request on behalf of a recipient.
#[derive(Debug, Clone)]
pub struct CreateBloodRequestParams {
    pub recipient_id: i32,
    pub hospital_id: i32,
    pub blood_type: BloodType,
    pub quantity: i32,
    pub urgency: Urgency,
}

impl CreateBloodRequestParams {
    /// Converts the API payload, parsing enum labels.
    ///
    /// # Returns
    /// - `Ok(CreateBloodRequestParams)` - Parsed parameters, urgency defaulting to medium
    /// - `Err(AppError::BadRequest)` - Unknown blood type or urgency label
    pub fn from_dto(recipient_id: i32, dto: CreateBloodRequestDto) -> Result<Self, AppError> {
        let urgency = match dto.urgency.as_deref() {
            Some(value) => parse_active_enum(value, "urgency")?,
            None => Urgency::Medium,
        };

        Ok(Self {
            recipient_id,
            hospital_id: dto.hospital_id,
            blood_type: parse_active_enum(&dto.blood_type, "blood_type")?,
            quantity: dto.quantity,
            urgency,
        })
    }
}

/// Result of a matching run.
#[derive(Debug, Clone)]
pub struct MatchOutcome {
    /// The request as persisted after the run.
    pub request: BloodRequest,
    /// Selected donors, closest first. Empty when nobody qualified.
    pub matched_donors: Vec<Donor>,
}

impl MatchOutcome {
    pub fn into_dto(self) -> MatchResultDto {
        MatchResultDto {
            matched_donors_count: self.matched_donors.len(),
            request: self.request.into_dto(),
        }
    }
}

pub fn is_terminal(status: RequestStatus) -> bool {
    matches!(status, RequestStatus::Fulfilled | RequestStatus::Cancelled)
}

/// Checks a direct status change requested through the state machine.
///
/// # Returns
/// - `Ok(())` - `matched → fulfilled`, or `pending|matched → cancelled`
/// - `Err(RequestError::InvalidTransition)` - Every other pair
pub fn validate_transition(from: RequestStatus, to: RequestStatus) -> Result<(), RequestError> {
    let allowed = matches!(
        (from, to),
        (RequestStatus::Matched, RequestStatus::Fulfilled)
            | (RequestStatus::Pending, RequestStatus::Cancelled)
            | (RequestStatus::Matched, RequestStatus::Cancelled)
    );

    if allowed {
        Ok(())
    } else {
        Err(RequestError::InvalidTransition { from, to })
    }
}

/// Parses a status label such as `"fulfilled"`.
pub fn parse_status(value: &str) -> Result<RequestStatus, RequestError> {
    RequestStatus::try_from_value(&value.to_string())
        .map_err(|_| RequestError::InvalidStatus(value.to_string()))
}
