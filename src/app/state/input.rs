use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub(super) fn command_char(key: KeyEvent) -> Option<char> {
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER)
    {
        return None;
    }
    if let KeyCode::Char(ch) = key.code {
        Some(ch.to_ascii_lowercase())
    } else {
        None
    }
}

/// Zero-based strip index for the digit keys `1`..=`9`.
pub(super) fn digit_index(ch: char) -> Option<usize> {
    match ch {
        '1'..='9' => Some((ch as usize) - ('1' as usize)),
        _ => None,
    }
}
