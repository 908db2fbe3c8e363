//! Log file browsing: entry model, line parser and viewer service.

pub mod dto;
pub mod model;
pub mod parser;
pub mod service;
