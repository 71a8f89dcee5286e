use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// ABO/Rh blood group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(3))")]
pub enum BloodType {
    #[sea_orm(string_value = "A+")]
    #[serde(rename = "A+")]
    APositive,
    #[sea_orm(string_value = "A-")]
    #[serde(rename = "A-")]
    ANegative,
    #[sea_orm(string_value = "B+")]
    #[serde(rename = "B+")]
    BPositive,
    #[sea_orm(string_value = "B-")]
    #[serde(rename = "B-")]
    BNegative,
    #[sea_orm(string_value = "O+")]
    #[serde(rename = "O+")]
    OPositive,
    #[sea_orm(string_value = "O-")]
    #[serde(rename = "O-")]
    ONegative,
    #[sea_orm(string_value = "AB+")]
    #[serde(rename = "AB+")]
    AbPositive,
    #[sea_orm(string_value = "AB-")]
    #[serde(rename = "AB-")]
    AbNegative,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    #[sea_orm(string_value = "low")]
    Low,
    #[sea_orm(string_value = "medium")]
    Medium,
    #[sea_orm(string_value = "high")]
    High,
    #[sea_orm(string_value = "critical")]
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "matched")]
    Matched,
    #[sea_orm(string_value = "fulfilled")]
    Fulfilled,
    #[sea_orm(string_value = "cancelled")]
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "snake_case")]
pub enum Role {
    #[sea_orm(string_value = "donor")]
    Donor,
    #[sea_orm(string_value = "recipient")]
    Recipient,
    #[sea_orm(string_value = "hospital_admin")]
    HospitalAdmin,
    #[sea_orm(string_value = "system_admin")]
    SystemAdmin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    #[sea_orm(string_value = "alert")]
    Alert,
    #[sea_orm(string_value = "reminder")]
    Reminder,
    #[sea_orm(string_value = "campaign")]
    Campaign,
    #[sea_orm(string_value = "system")]
    System,
    #[sea_orm(string_value = "new_request")]
    NewRequest,
    #[sea_orm(string_value = "potential_match")]
    PotentialMatch,
    #[sea_orm(string_value = "request_fulfilled")]
    RequestFulfilled,
    #[sea_orm(string_value = "request_fulfilled_admin")]
    RequestFulfilledAdmin,
    #[sea_orm(string_value = "request_fulfilled_donor")]
    RequestFulfilledDonor,
    #[sea_orm(string_value = "request_cancelled")]
    RequestCancelled,
    #[sea_orm(string_value = "request_cancelled_admin")]
    RequestCancelledAdmin,
    #[sea_orm(string_value = "request_cancelled_donor")]
    RequestCancelledDonor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(8))")]
#[serde(rename_all = "snake_case")]
pub enum NotificationStatus {
    #[sea_orm(string_value = "unread")]
    Unread,
    #[sea_orm(string_value = "read")]
    Read,
}
