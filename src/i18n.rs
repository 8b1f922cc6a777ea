#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    En,
    Ru,
}

pub const APP_TITLE_KEY: &str = "app-title";
pub const STRIP_HINT_KEY: &str = "strip-hint";
pub const TOO_SMALL_KEY: &str = "terminal-too-small";

const EN: &[(&str, &str)] = &[
    ("rain", "Rain"),
    ("sun", "Sun"),
    ("cloud", "Clouds"),
    ("snow", "Snow"),
    ("storm", "Storm"),
    ("rain-label-message", "Don't forget your umbrella"),
    ("sun-label-message", "A perfect day for a walk"),
    ("cloud-label-message", "Grey skies, but no rain yet"),
    ("snow-label-message", "Time to build a snowman"),
    ("storm-label-message", "Better stay indoors tonight"),
    (APP_TITLE_KEY, "Weather"),
    (STRIP_HINT_KEY, "←/→ choose · Enter show · q quit"),
    (TOO_SMALL_KEY, "Terminal too small. Resize to at least 40x14."),
];

const RU: &[(&str, &str)] = &[
    ("rain", "Дождь"),
    ("sun", "Солнце"),
    ("cloud", "Облака"),
    ("snow", "Снег"),
    ("storm", "Гроза"),
    ("rain-label-message", "Не забудьте зонтик"),
    ("sun-label-message", "Отличный день для прогулки"),
    ("cloud-label-message", "Пасмурно, но пока без дождя"),
    ("snow-label-message", "Самое время слепить снеговика"),
    ("storm-label-message", "Сегодня лучше остаться дома"),
    (APP_TITLE_KEY, "Погода"),
    (STRIP_HINT_KEY, "←/→ выбор · Enter показать · q выход"),
    (TOO_SMALL_KEY, "Окно слишком маленькое. Нужно минимум 40x14."),
];

/// Maps string keys to display text. Unknown keys are returned unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Localizer {
    locale: Locale,
}

impl Localizer {
    #[must_use]
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    #[must_use]
    pub fn text<'a>(&self, key: &'a str) -> &'a str {
        let table = match self.locale {
            Locale::En => EN,
            Locale::Ru => RU,
        };
        table
            .iter()
            .find_map(|(candidate, text)| (*candidate == key).then_some(*text))
            .unwrap_or(key)
    }
}
