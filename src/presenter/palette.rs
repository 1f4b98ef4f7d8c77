//! Emotion color table
//!
//! Fixed mapping from emotion label to a neon color. Lookup is
//! case-insensitive; labels not in the table get [`DEFAULT_COLOR`].

/// 24-bit color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmotionColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl EmotionColor {
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as u8,
            g: ((hex >> 8) & 0xff) as u8,
            b: (hex & 0xff) as u8,
        }
    }
}

pub const NEON_GREEN: EmotionColor = EmotionColor::from_hex(0x00ff9f);
pub const NEON_BLUE: EmotionColor = EmotionColor::from_hex(0x00f3ff);
pub const NEON_MAGENTA: EmotionColor = EmotionColor::from_hex(0xfd00ff);
pub const NEON_PURPLE: EmotionColor = EmotionColor::from_hex(0xb300ff);
pub const NEON_LIME: EmotionColor = EmotionColor::from_hex(0xd4ff00);
pub const NEON_PINK: EmotionColor = EmotionColor::from_hex(0xff79c6);
pub const NEON_ORANGE: EmotionColor = EmotionColor::from_hex(0xff8000);
pub const NEON_LAVENDER: EmotionColor = EmotionColor::from_hex(0xb8b8ff);
pub const NEON_YELLOW: EmotionColor = EmotionColor::from_hex(0xffff00);
pub const MUTED_BLUE: EmotionColor = EmotionColor::from_hex(0xa8b3cf);

/// Color for labels missing from the table
pub const DEFAULT_COLOR: EmotionColor = NEON_BLUE;

const EMOTION_COLORS: [(&str, EmotionColor); 29] = [
    ("joy", NEON_GREEN),
    ("happiness", NEON_GREEN),
    ("sadness", NEON_BLUE),
    ("anger", NEON_MAGENTA),
    ("fear", NEON_PURPLE),
    ("disgust", NEON_LIME),
    ("surprise", NEON_PINK),
    ("anticipation", NEON_ORANGE),
    ("trust", NEON_BLUE),
    ("love", NEON_MAGENTA),
    ("optimism", NEON_BLUE),
    ("pessimism", NEON_LAVENDER),
    ("neutral", MUTED_BLUE),
    ("excitement", NEON_ORANGE),
    ("gratitude", NEON_LIME),
    ("pride", NEON_YELLOW),
    ("confusion", NEON_PURPLE),
    ("embarrassment", NEON_MAGENTA),
    ("guilt", NEON_ORANGE),
    ("shame", NEON_MAGENTA),
    ("anxiety", NEON_PURPLE),
    ("desire", NEON_MAGENTA),
    ("jealousy", NEON_GREEN),
    ("disappointment", NEON_LAVENDER),
    ("amusement", NEON_BLUE),
    ("contentment", NEON_BLUE),
    ("relief", NEON_GREEN),
    ("boredom", NEON_LAVENDER),
    ("frustration", NEON_MAGENTA),
];

/// Look up the color for an emotion label
pub fn color_for(emotion: &str) -> EmotionColor {
    EMOTION_COLORS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(emotion))
        .map(|(_, color)| *color)
        .unwrap_or(DEFAULT_COLOR)
}
