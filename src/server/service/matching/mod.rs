//! Donor matching for blood requests.
//!
//! A run resolves the request and its hospital, checks that the actor may match,
//! derives search radius and recency window from the request's urgency, fetches
//! same-type candidates near the hospital, keeps the eligible ones, ranks them by
//! distance and records the closest [`MAX_MATCHED_DONORS`](policy::MAX_MATCHED_DONORS).
//! Matched donors then receive a `potential_match` notification.

pub mod eligibility;
pub mod policy;
pub mod ranking;

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{NotificationKind, RequestStatus};
use sea_orm::{ActiveEnum, DatabaseConnection};

use crate::server::{
    data::{hospital::HospitalRepository, request::BloodRequestRepository, user::UserRepository},
    error::{auth::AuthError, request::RequestError, AppError},
    model::{
        request::MatchOutcome,
        user::{Donor, User},
    },
    service::{
        access::AccessPolicy,
        notification::{NotificationGateway, Notifier},
    },
};

use self::{eligibility::is_eligible, policy::MatchPolicy, ranking::rank};

pub struct MatchingService<'a> {
    db: &'a DatabaseConnection,
    notifier: Notifier<'a>,
    access: AccessPolicy,
}

impl<'a> MatchingService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        gateway: &'a dyn NotificationGateway,
        access: AccessPolicy,
    ) -> Self {
        Self {
            db,
            notifier: Notifier::new(gateway),
            access,
        }
    }

    /// Matches eligible nearby donors to a blood request.
    ///
    /// Finding nobody is a successful, empty result: the request is returned as it
    /// is stored and nothing is written. Otherwise the ranked donor list replaces
    /// any previous one and the request moves to `matched`.
    ///
    /// # Arguments
    /// - `request_id` - Request to match
    /// - `actor` - User triggering the run
    /// - `now` - Reference time for the donation recency window
    ///
    /// # Returns
    /// - `Ok(MatchOutcome)` - Persisted request and the selected donors, closest first
    /// - `Err(AppError::NotFound)` - Request or its hospital does not exist
    /// - `Err(AppError::AuthErr(AccessDenied))` - Actor may not match this request
    /// - `Err(AppError::RequestErr(InvalidTransition))` - Request is fulfilled or cancelled
    /// - `Err(AppError::RequestErr(ConcurrentModification))` - Request changed during the run
    pub async fn match_donors(
        &self,
        request_id: i32,
        actor: &User,
        now: DateTime<Utc>,
    ) -> Result<MatchOutcome, AppError> {
        let request_repo = BloodRequestRepository::new(self.db);

        let Some(request) = request_repo.find_by_id(request_id).await? else {
            return Err(AppError::NotFound(format!(
                "Blood request {} not found",
                request_id
            )));
        };

        let Some(hospital) = HospitalRepository::new(self.db)
            .find_by_id(request.hospital_id)
            .await?
        else {
            return Err(AppError::NotFound(format!(
                "Hospital {} not found",
                request.hospital_id
            )));
        };

        if !self.access.can_match(actor, &request, &hospital) {
            return Err(AuthError::AccessDenied(
                actor.id,
                format!("User is not allowed to match donors for request {}", request.id),
            )
            .into());
        }

        if request.is_terminal() {
            return Err(RequestError::InvalidTransition {
                from: request.status,
                to: RequestStatus::Matched,
            }
            .into());
        }

        let policy = MatchPolicy::for_urgency(request.urgency);

        let candidates = UserRepository::new(self.db)
            .find_donor_candidates(&hospital.location, policy.radius_km, request.blood_type)
            .await?;

        let eligible: Vec<Donor> = candidates
            .into_iter()
            .filter(|donor| donor.id != request.recipient_id)
            .filter(|donor| is_eligible(donor, request.blood_type, policy.min_interval, now))
            .collect();

        let mut matched_donors = rank(eligible, &hospital.location);
        matched_donors.truncate(policy.max_donors);

        if matched_donors.is_empty() {
            tracing::info!(
                "No donors found for request {} ({} within {} km)",
                request.id,
                request.blood_type.to_value(),
                policy.radius_km
            );

            return Ok(MatchOutcome {
                request,
                matched_donors,
            });
        }

        let donor_ids: Vec<i32> = matched_donors.iter().map(|d| d.id).collect();

        if !request_repo
            .record_match(request.id, request.version, &donor_ids, now)
            .await?
        {
            return Err(RequestError::ConcurrentModification(request.id).into());
        }

        let request = request_repo
            .find_by_id(request.id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Blood request {} not found", request_id)))?;

        tracing::info!(
            "Matched {} donor(s) to request {}",
            matched_donors.len(),
            request.id
        );

        for donor in &matched_donors {
            self.notifier
                .send(
                    donor.id,
                    format!(
                        "You have been matched for a blood donation request at {} for blood type {}. Please check the app for details.",
                        hospital.name,
                        request.blood_type.to_value()
                    ),
                    NotificationKind::PotentialMatch,
                )
                .await;
        }

        Ok(MatchOutcome {
            request,
            matched_donors,
        })
    }
}
