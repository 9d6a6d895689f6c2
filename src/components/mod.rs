pub mod app;
pub mod page_viewer;
pub mod sidebar;
pub mod timeline;
