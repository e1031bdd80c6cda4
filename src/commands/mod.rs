pub mod branch_cmd;
pub mod dashboard_cmd;
pub mod discount_cmd;
pub mod notification_cmd;
pub mod profile_cmd;
pub mod settings_cmd;
