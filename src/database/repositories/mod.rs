pub mod amenity;
pub mod branch;
pub mod game_type;
pub mod venue;

// Re-export all repositories for easy importing
pub use amenity::AmenityRepository;
pub use branch::BranchRepository;
pub use game_type::GameTypeRepository;
pub use venue::VenueRepository;
