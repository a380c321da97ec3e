pub mod favorites;
pub mod folders;
pub mod health;
pub mod itinerary;
pub mod recommendations;
pub mod travel_tips;
