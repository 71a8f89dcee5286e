//! Blood request lifecycle.
//!
//! Direct transitions go through [`RequestService::update_status`]; entering
//! `matched` belongs to the matching service. Every transition into a terminal
//! state notifies the recipient, the hospital's first admin and each matched donor.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{NotificationKind, RequestStatus, Role};
use sea_orm::{ActiveEnum, DatabaseConnection};

use crate::server::{
    data::{hospital::HospitalRepository, request::BloodRequestRepository, user::UserRepository},
    error::{auth::AuthError, request::RequestError, AppError},
    model::{
        hospital::Hospital,
        request::{parse_status, validate_transition, BloodRequest, CreateBloodRequestParams},
        user::User,
    },
    service::{
        access::AccessPolicy,
        notification::{NotificationGateway, Notifier},
    },
};

pub struct RequestService<'a> {
    db: &'a DatabaseConnection,
    notifier: Notifier<'a>,
}

impl<'a> RequestService<'a> {
    pub fn new(db: &'a DatabaseConnection, gateway: &'a dyn NotificationGateway) -> Self {
        Self {
            db,
            notifier: Notifier::new(gateway),
        }
    }

    /// Opens a pending request and tells the hospital's first admin about it.
    ///
    /// # Returns
    /// - `Ok(BloodRequest)` - The stored request
    /// - `Err(AppError::RequestErr(InvalidQuantity))` - Quantity is not positive
    /// - `Err(AppError::NotFound)` - Recipient or hospital does not exist
    pub async fn create(
        &self,
        params: CreateBloodRequestParams,
        now: DateTime<Utc>,
    ) -> Result<BloodRequest, AppError> {
        if params.quantity <= 0 {
            return Err(RequestError::InvalidQuantity(params.quantity).into());
        }

        let Some(recipient) = UserRepository::new(self.db)
            .find_by_id(params.recipient_id)
            .await?
        else {
            return Err(AppError::NotFound(format!(
                "User {} not found",
                params.recipient_id
            )));
        };

        let hospital = self.find_hospital(params.hospital_id).await?;

        let request = BloodRequestRepository::new(self.db)
            .create(params, now)
            .await?;

        tracing::info!(
            "Blood request {} created by user {} at hospital {}",
            request.id,
            recipient.id,
            hospital.id
        );

        match hospital.first_admin() {
            Some(admin_id) => {
                self.notifier
                    .send(
                        admin_id,
                        format!(
                            "New blood request for {} ({}ml) with {} urgency from {} at your hospital.",
                            request.blood_type.to_value(),
                            request.quantity,
                            request.urgency.to_value(),
                            recipient.full_name
                        ),
                        NotificationKind::NewRequest,
                    )
                    .await;
            }
            None => tracing::warn!(
                "Hospital {} has no admins to notify about request {}",
                hospital.id,
                request.id
            ),
        }

        Ok(request)
    }

    /// Loads a request with its ranked donor list on behalf of `actor`.
    ///
    /// # Returns
    /// - `Ok(BloodRequest)` - The request
    /// - `Err(AppError::NotFound)` - Request or hospital does not exist
    /// - `Err(AppError::AuthErr(AccessDenied))` - Actor may not view this request
    pub async fn get_details(
        &self,
        request_id: i32,
        actor: &User,
    ) -> Result<BloodRequest, AppError> {
        let request = self.find_request(request_id).await?;
        let hospital = self.find_hospital(request.hospital_id).await?;

        if !AccessPolicy::can_view_request(actor, &request, &hospital) {
            return Err(AuthError::AccessDenied(
                actor.id,
                format!("User is not allowed to view request {}", request.id),
            )
            .into());
        }

        Ok(request)
    }

    /// Lists the requests visible to `user`, newest first.
    ///
    /// Recipients see their own requests, hospital admins the requests at their
    /// hospitals, donors the requests they are matched to and system admins all.
    pub async fn list_for(&self, user: &User) -> Result<Vec<BloodRequest>, AppError> {
        let repo = BloodRequestRepository::new(self.db);

        let requests = match user.role {
            Role::Recipient => repo.list_by_recipient(user.id).await?,
            Role::Donor => repo.list_by_donor(user.id).await?,
            Role::SystemAdmin => repo.list_all().await?,
            Role::HospitalAdmin => {
                let hospital_ids = HospitalRepository::new(self.db)
                    .hospital_ids_for_admin(user.id)
                    .await?;

                repo.list_by_hospitals(&hospital_ids).await?
            }
        };

        Ok(requests)
    }

    /// Moves a request to `fulfilled` or `cancelled`.
    ///
    /// # Arguments
    /// - `request_id` - Request to update
    /// - `status` - Target status label
    /// - `actor` - User asking for the change
    /// - `now` - Timestamp recorded as `updated_at`
    ///
    /// # Returns
    /// - `Ok(BloodRequest)` - The request after the transition
    /// - `Err(AppError::RequestErr(InvalidStatus))` - Unknown status label
    /// - `Err(AppError::NotFound)` - Request or hospital does not exist
    /// - `Err(AppError::AuthErr(AccessDenied))` - Actor may not update this request
    /// - `Err(AppError::RequestErr(InvalidTransition))` - Transition not allowed from the current status
    /// - `Err(AppError::RequestErr(ConcurrentModification))` - Request changed since it was read
    pub async fn update_status(
        &self,
        request_id: i32,
        status: &str,
        actor: &User,
        now: DateTime<Utc>,
    ) -> Result<BloodRequest, AppError> {
        let target = parse_status(status)?;
        let repo = BloodRequestRepository::new(self.db);

        let request = self.find_request(request_id).await?;
        let hospital = self.find_hospital(request.hospital_id).await?;

        if !AccessPolicy::can_update_status(actor, &request, &hospital) {
            return Err(AuthError::AccessDenied(
                actor.id,
                format!("User is not allowed to update request {}", request.id),
            )
            .into());
        }

        validate_transition(request.status, target)?;

        if !repo
            .transition_status(request.id, request.version, target, now)
            .await?
        {
            return Err(RequestError::ConcurrentModification(request.id).into());
        }

        tracing::info!(
            "Blood request {} moved from {} to {} by user {}",
            request.id,
            request.status.to_value(),
            target.to_value(),
            actor.id
        );

        let updated = self.find_request(request.id).await?;
        self.notify_transition(&updated, &hospital).await;

        Ok(updated)
    }

    async fn find_request(&self, request_id: i32) -> Result<BloodRequest, AppError> {
        BloodRequestRepository::new(self.db)
            .find_by_id(request_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Blood request {} not found", request_id)))
    }

    async fn find_hospital(&self, hospital_id: i32) -> Result<Hospital, AppError> {
        HospitalRepository::new(self.db)
            .find_by_id(hospital_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Hospital {} not found", hospital_id)))
    }

    async fn notify_transition(&self, request: &BloodRequest, hospital: &Hospital) {
        let (recipient, admin, donor) = match request.status {
            RequestStatus::Fulfilled => (
                (
                    "Your blood request has been fulfilled!".to_string(),
                    NotificationKind::RequestFulfilled,
                ),
                (
                    format!("Blood request {} has been fulfilled.", request.id),
                    NotificationKind::RequestFulfilledAdmin,
                ),
                (
                    "A blood donation request you were matched with has been fulfilled."
                        .to_string(),
                    NotificationKind::RequestFulfilledDonor,
                ),
            ),
            RequestStatus::Cancelled => (
                (
                    "Your blood request has been cancelled.".to_string(),
                    NotificationKind::RequestCancelled,
                ),
                (
                    format!("Blood request {} has been cancelled.", request.id),
                    NotificationKind::RequestCancelledAdmin,
                ),
                (
                    "A blood donation request you were matched with has been cancelled."
                        .to_string(),
                    NotificationKind::RequestCancelledDonor,
                ),
            ),
            RequestStatus::Pending | RequestStatus::Matched => return,
        };

        self.notifier
            .send(request.recipient_id, recipient.0, recipient.1)
            .await;

        match hospital.first_admin() {
            Some(admin_id) => {
                self.notifier.send(admin_id, admin.0, admin.1).await;
            }
            None => tracing::warn!("Hospital {} has no admins to notify", hospital.id),
        }

        for donor_id in &request.matched_donor_ids {
            self.notifier.send(*donor_id, donor.0.clone(), donor.1).await;
        }
    }
}
