pub mod amenity_catalog;
pub mod borough_repo;
pub mod listings_client;
pub mod property_repo;
