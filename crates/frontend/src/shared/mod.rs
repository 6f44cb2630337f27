pub mod api_utils;
pub mod crud;
pub mod format;
pub mod icons;
pub mod modal_frame;
pub mod notifications;
pub mod page_frame;
pub mod page_standard;
pub mod rest;
