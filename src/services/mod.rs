pub mod court_service;

pub use court_service::*;
