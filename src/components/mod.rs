pub mod panels;
pub mod sidebar;
pub mod upload_zone;
