pub mod branch;
pub mod discount;
pub mod notification;
pub mod profile;
