pub mod timeline_surface;
