pub mod itinerary;
pub mod provider;
pub mod recommendation;
