pub mod difficulty_engine;
pub mod roll_source;
pub mod tracker_store;

pub use difficulty_engine::IDifficultyEngine;
pub use roll_source::IRollSource;
pub use tracker_store::ITrackerStore;
