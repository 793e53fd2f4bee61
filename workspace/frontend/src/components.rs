pub mod about;
pub mod common;
pub mod dashboard;
pub mod home;
pub mod layout;
pub mod records;
pub mod upload;
