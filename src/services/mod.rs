pub mod lifestyle_service;
pub mod property_service;
