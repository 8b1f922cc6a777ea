pub mod scene;
pub mod strip;
