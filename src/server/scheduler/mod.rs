//! Background jobs run on a cron schedule.

pub mod inventory_expiry;
