use std::fmt::Debug;

use super::phenomenon::{IconRef, Phenomenon, PhenomenonKind};

/// Source of the phenomena offered in the selector strip.
pub trait PhenomenonCatalog: Debug + Send {
    fn create_weather_phenomena(&self) -> Vec<Phenomenon>;
}

/// Static catalog with the five built-in phenomena.
#[derive(Debug, Default, Clone, Copy)]
pub struct MockCatalog;

impl PhenomenonCatalog for MockCatalog {
    fn create_weather_phenomena(&self) -> Vec<Phenomenon> {
        vec![
            Phenomenon::new(PhenomenonKind::Rain, IconRef::CloudRain),
            Phenomenon::new(PhenomenonKind::Sun, IconRef::Sun),
            Phenomenon::new(PhenomenonKind::Cloud, IconRef::Cloud),
            Phenomenon::new(PhenomenonKind::Snow, IconRef::CloudSnow),
            Phenomenon::new(PhenomenonKind::Storm, IconRef::CloudBolt),
        ]
    }
}
