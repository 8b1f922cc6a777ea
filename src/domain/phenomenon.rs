use crate::cli::IconMode;

/// Stable identifier of a weather category. Scene dispatch keys on this,
/// never on the localized display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhenomenonKind {
    Rain,
    Sun,
    Cloud,
    Snow,
    Storm,
}

impl PhenomenonKind {
    pub const ALL: [Self; 5] = [Self::Rain, Self::Sun, Self::Cloud, Self::Snow, Self::Storm];

    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Rain => "rain",
            Self::Sun => "sun",
            Self::Cloud => "cloud",
            Self::Snow => "snow",
            Self::Storm => "storm",
        }
    }

    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.key() == key)
    }

    #[must_use]
    pub fn caption_key(self) -> &'static str {
        match self {
            Self::Rain => "rain-label-message",
            Self::Sun => "sun-label-message",
            Self::Cloud => "cloud-label-message",
            Self::Snow => "snow-label-message",
            Self::Storm => "storm-label-message",
        }
    }

    #[must_use]
    pub fn default_icon(self) -> IconRef {
        match self {
            Self::Rain => IconRef::CloudRain,
            Self::Sun => IconRef::Sun,
            Self::Cloud => IconRef::Cloud,
            Self::Snow => IconRef::CloudSnow,
            Self::Storm => IconRef::CloudBolt,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconRef {
    CloudRain,
    Sun,
    Cloud,
    CloudSnow,
    CloudBolt,
}

impl IconRef {
    #[must_use]
    pub fn glyph(self, mode: IconMode) -> &'static str {
        let (ascii, emoji, unicode) = icon_tokens(self);
        match mode {
            IconMode::Ascii => ascii,
            IconMode::Emoji => emoji,
            IconMode::Unicode => unicode,
        }
    }
}

fn icon_tokens(icon: IconRef) -> (&'static str, &'static str, &'static str) {
    match icon {
        IconRef::CloudRain => ("RAN", "🌧️", "☂"),
        IconRef::Sun => ("SUN", "☀️", "☀"),
        IconRef::Cloud => ("CLD", "☁️", "☁"),
        IconRef::CloudSnow => ("SNW", "🌨️", "❄"),
        IconRef::CloudBolt => ("THN", "⛈️", "⚡"),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phenomenon {
    pub kind: PhenomenonKind,
    /// Localization key of the display name.
    pub name_key: &'static str,
    pub icon: IconRef,
}

impl Phenomenon {
    #[must_use]
    pub fn new(kind: PhenomenonKind, icon: IconRef) -> Self {
        Self {
            kind,
            name_key: kind.key(),
            icon,
        }
    }
}
