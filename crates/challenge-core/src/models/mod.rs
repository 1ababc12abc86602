pub mod counteroffer;
pub mod preference;
pub mod product;
pub mod scoring;
pub mod standards;
pub mod tracker_record;

pub use counteroffer::{CounterofferDecision, CounterofferReason, CounterofferRequest};
pub use preference::PreferenceProfile;
pub use product::ProductAttributes;
pub use scoring::{EnjoymentBreakdown, OfferMultiplier};
pub use standards::StandardsTier;
pub use tracker_record::TrackerRecord;
