pub mod log_viewer_service;
