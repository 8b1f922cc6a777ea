pub mod events;
pub mod state;
pub mod strip;
