use crate::syllable::{L_COUNT, T_COUNT, V_COUNT};

pub(super) const DEFAULT_TOML: &str = include_str!("default_tables.toml");

/// Initial consonants ㄱ ㄲ ㄴ ㄷ ㄸ ㄹ ㅁ ㅂ ㅃ ㅅ ㅆ ㅇ ㅈ ㅉ ㅊ ㅋ ㅌ ㅍ ㅎ.
/// ㅇ is silent in initial position.
pub const INITIALS: [&str; L_COUNT] = [
    "г", "кк", "н", "д", "тт", "р", "м", "б", "пп", "с", "сс", "", "ч", "чч", "чх", "к", "т",
    "п", "х",
];

/// Vowels ㅏ ㅐ ㅑ ㅒ ㅓ ㅔ ㅕ ㅖ ㅗ ㅘ ㅙ ㅚ ㅛ ㅜ ㅝ ㅞ ㅟ ㅠ ㅡ ㅢ ㅣ.
pub const VOWELS: [&str; V_COUNT] = [
    "а", "э", "я", "е", "о", "э", "ё", "е", "о", "ва", "вэ", "ве", "ё", "у", "во", "ве", "ви",
    "ю", "ы", "и", "и",
];

/// Finals: none, then ㄱ ㄲ ㄳ ㄴ ㄵ ㄶ ㄷ ㄹ ㄺ ㄻ ㄼ ㄽ ㄾ ㄿ ㅀ ㅁ ㅂ ㅄ ㅅ ㅆ ㅇ ㅈ ㅊ ㅋ ㅌ ㅍ ㅎ.
/// Clusters are spelled out; ㅇ (ng) is approximated as н.
pub const FINALS: [&str; T_COUNT] = [
    "", "к", "к", "кс", "н", "ндж", "нх", "т", "ль", "льк", "льм", "льб", "льс", "льт", "льп",
    "льх", "м", "п", "пс", "т", "т", "н", "т", "т", "к", "т", "п", "т",
];
