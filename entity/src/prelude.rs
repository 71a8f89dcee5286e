pub use super::blood_inventory::Entity as BloodInventory;
pub use super::blood_request::Entity as BloodRequest;
pub use super::blood_request_match::Entity as BloodRequestMatch;
pub use super::hospital::Entity as Hospital;
pub use super::hospital_admin::Entity as HospitalAdmin;
pub use super::notification::Entity as Notification;
pub use super::user::Entity as User;
