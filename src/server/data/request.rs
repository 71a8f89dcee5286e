use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::RequestStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, TransactionTrait,
};
use std::collections::HashMap;

use crate::server::model::request::{BloodRequest, CreateBloodRequestParams};

pub struct BloodRequestRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BloodRequestRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a pending request with no matched donors.
    pub async fn create(
        &self,
        params: CreateBloodRequestParams,
        now: DateTime<Utc>,
    ) -> Result<BloodRequest, DbErr> {
        let request = entity::blood_request::ActiveModel {
            recipient_id: ActiveValue::Set(params.recipient_id),
            hospital_id: ActiveValue::Set(params.hospital_id),
            blood_type: ActiveValue::Set(params.blood_type),
            quantity: ActiveValue::Set(params.quantity),
            urgency: ActiveValue::Set(params.urgency),
            status: ActiveValue::Set(RequestStatus::Pending),
            version: ActiveValue::Set(0),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(BloodRequest::from_entity(request, Vec::new()))
    }

    /// Finds a request with its ranked matched-donor list.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<BloodRequest>, DbErr> {
        let Some(request) = entity::prelude::BloodRequest::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let matches = entity::prelude::BloodRequestMatch::find()
            .filter(entity::blood_request_match::Column::RequestId.eq(id))
            .order_by_asc(entity::blood_request_match::Column::Rank)
            .all(self.db)
            .await?;

        Ok(Some(BloodRequest::from_entity(request, matches)))
    }

    /// Every request, newest first.
    pub async fn list_all(&self) -> Result<Vec<BloodRequest>, DbErr> {
        let requests = entity::prelude::BloodRequest::find()
            .order_by_desc(entity::blood_request::Column::CreatedAt)
            .order_by_desc(entity::blood_request::Column::Id)
            .all(self.db)
            .await?;

        self.with_matches(requests).await
    }

    /// Requests created by a recipient, newest first.
    pub async fn list_by_recipient(&self, recipient_id: i32) -> Result<Vec<BloodRequest>, DbErr> {
        let requests = entity::prelude::BloodRequest::find()
            .filter(entity::blood_request::Column::RecipientId.eq(recipient_id))
            .order_by_desc(entity::blood_request::Column::CreatedAt)
            .order_by_desc(entity::blood_request::Column::Id)
            .all(self.db)
            .await?;

        self.with_matches(requests).await
    }

    /// Requests placed at any of the given hospitals, newest first.
    pub async fn list_by_hospitals(&self, hospital_ids: &[i32]) -> Result<Vec<BloodRequest>, DbErr> {
        if hospital_ids.is_empty() {
            return Ok(Vec::new());
        }

        let requests = entity::prelude::BloodRequest::find()
            .filter(entity::blood_request::Column::HospitalId.is_in(hospital_ids.iter().copied()))
            .order_by_desc(entity::blood_request::Column::CreatedAt)
            .order_by_desc(entity::blood_request::Column::Id)
            .all(self.db)
            .await?;

        self.with_matches(requests).await
    }

    /// Requests the donor is currently matched to, newest first.
    pub async fn list_by_donor(&self, donor_id: i32) -> Result<Vec<BloodRequest>, DbErr> {
        let request_ids: Vec<i32> = entity::prelude::BloodRequestMatch::find()
            .filter(entity::blood_request_match::Column::DonorId.eq(donor_id))
            .all(self.db)
            .await?
            .into_iter()
            .map(|m| m.request_id)
            .collect();

        if request_ids.is_empty() {
            return Ok(Vec::new());
        }

        let requests = entity::prelude::BloodRequest::find()
            .filter(entity::blood_request::Column::Id.is_in(request_ids))
            .order_by_desc(entity::blood_request::Column::CreatedAt)
            .order_by_desc(entity::blood_request::Column::Id)
            .all(self.db)
            .await?;

        self.with_matches(requests).await
    }

    /// Replaces the matched-donor list and marks the request matched.
    ///
    /// The write only applies while the request still carries `expected_version` and is
    /// not terminal. Status, version and match rows change in one transaction.
    ///
    /// # Arguments
    /// - `request_id` - Request to update
    /// - `expected_version` - Version observed when the request was read
    /// - `donor_ids` - Donors in rank order, closest first
    /// - `now` - Timestamp recorded as `updated_at`
    ///
    /// # Returns
    /// - `Ok(true)` - Match recorded, version incremented
    /// - `Ok(false)` - Precondition failed, nothing written
    /// - `Err(DbErr)` - Database error; the transaction is rolled back
    pub async fn record_match(
        &self,
        request_id: i32,
        expected_version: i32,
        donor_ids: &[i32],
        now: DateTime<Utc>,
    ) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        let result = entity::prelude::BloodRequest::update_many()
            .set(entity::blood_request::ActiveModel {
                status: ActiveValue::Set(RequestStatus::Matched),
                version: ActiveValue::Set(expected_version + 1),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .filter(entity::blood_request::Column::Id.eq(request_id))
            .filter(entity::blood_request::Column::Version.eq(expected_version))
            .filter(
                entity::blood_request::Column::Status
                    .is_in([RequestStatus::Pending, RequestStatus::Matched]),
            )
            .exec(&txn)
            .await?;

        if result.rows_affected == 0 {
            txn.rollback().await?;
            return Ok(false);
        }

        entity::prelude::BloodRequestMatch::delete_many()
            .filter(entity::blood_request_match::Column::RequestId.eq(request_id))
            .exec(&txn)
            .await?;

        if !donor_ids.is_empty() {
            let rows = donor_ids
                .iter()
                .enumerate()
                .map(|(rank, donor_id)| entity::blood_request_match::ActiveModel {
                    request_id: ActiveValue::Set(request_id),
                    donor_id: ActiveValue::Set(*donor_id),
                    rank: ActiveValue::Set(rank as i32),
                });

            entity::prelude::BloodRequestMatch::insert_many(rows)
                .exec_without_returning(&txn)
                .await?;
        }

        txn.commit().await?;

        Ok(true)
    }

    /// Sets the request status if the stored version still equals `expected_version`.
    ///
    /// # Returns
    /// - `Ok(true)` - Status written, version incremented
    /// - `Ok(false)` - Another writer got there first, nothing written
    pub async fn transition_status(
        &self,
        request_id: i32,
        expected_version: i32,
        status: RequestStatus,
        now: DateTime<Utc>,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::BloodRequest::update_many()
            .set(entity::blood_request::ActiveModel {
                status: ActiveValue::Set(status),
                version: ActiveValue::Set(expected_version + 1),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .filter(entity::blood_request::Column::Id.eq(request_id))
            .filter(entity::blood_request::Column::Version.eq(expected_version))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Loads match rows for a batch of requests in one query.
    async fn with_matches(
        &self,
        requests: Vec<entity::blood_request::Model>,
    ) -> Result<Vec<BloodRequest>, DbErr> {
        if requests.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i32> = requests.iter().map(|r| r.id).collect();
        let mut matches_by_request: HashMap<i32, Vec<entity::blood_request_match::Model>> =
            HashMap::new();

        for m in entity::prelude::BloodRequestMatch::find()
            .filter(entity::blood_request_match::Column::RequestId.is_in(ids))
            .all(self.db)
            .await?
        {
            matches_by_request.entry(m.request_id).or_default().push(m);
        }

        Ok(requests
            .into_iter()
            .map(|request| {
                let matches = matches_by_request.remove(&request.id).unwrap_or_default();
                BloodRequest::from_entity(request, matches)
            })
            .collect())
    }
}
