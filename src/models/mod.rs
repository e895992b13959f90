pub mod amenity;
pub mod borough;
pub mod listing;
pub mod location;
pub mod property;
