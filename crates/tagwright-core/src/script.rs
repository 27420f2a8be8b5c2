//! Weighted writing-script detection.
//!
//! Each letter of a string is assigned to a [`Script`] by Unicode block,
//! and the detector reports the share of letters written in each script. Script identifiers use the first word
//! of the Unicode character names in the block (`LATIN`, `CYRILLIC`, `CJK`,
//! ...), which is also the form accepted in configuration files.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use unicode_normalization::char::is_combining_mark;

use crate::error::Error;

/// A writing script recognised by [`WeightedScriptDetector`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE", try_from = "String")]
pub enum Script {
    Latin,
    Greek,
    Coptic,
    Cyrillic,
    Glagolitic,
    Armenian,
    Georgian,
    Hebrew,
    Samaritan,
    Arabic,
    Syriac,
    Thaana,
    Nko,
    Tifinagh,
    Ethiopic,
    Devanagari,
    Bengali,
    Gurmukhi,
    Gujarati,
    Oriya,
    Tamil,
    Telugu,
    Kannada,
    Malayalam,
    Sinhala,
    Tibetan,
    Limbu,
    Lepcha,
    Ol,
    Meetei,
    Thai,
    Lao,
    Myanmar,
    Khmer,
    Tai,
    Cham,
    Tagalog,
    Buginese,
    Balinese,
    Javanese,
    Sundanese,
    Batak,
    Mongolian,
    Cherokee,
    Canadian,
    Ogham,
    Runic,
    Vai,
    Bamum,
    Yi,
    Bopomofo,
    Hangul,
    Hiragana,
    Katakana,
    Cjk,
    /// A letter outside every listed block.
    Other,
}

/// Inclusive code point ranges per script.
const SCRIPT_RANGES: &[(Script, u32, u32)] = &[
    (Script::Latin, 0x0041, 0x005A),
    (Script::Latin, 0x0061, 0x007A),
    (Script::Latin, 0x00AA, 0x00AA),
    (Script::Latin, 0x00BA, 0x00BA),
    (Script::Latin, 0x00C0, 0x02AF),
    (Script::Latin, 0x1D00, 0x1D7F),
    (Script::Latin, 0x1E00, 0x1EFF),
    (Script::Latin, 0x2C60, 0x2C7F),
    (Script::Latin, 0xA720, 0xA7FF),
    (Script::Latin, 0xAB30, 0xAB6F),
    (Script::Latin, 0xFF21, 0xFF3A),
    (Script::Latin, 0xFF41, 0xFF5A),
    (Script::Greek, 0x0370, 0x03FF),
    (Script::Greek, 0x1F00, 0x1FFF),
    (Script::Coptic, 0x2C80, 0x2CFF),
    (Script::Cyrillic, 0x0400, 0x052F),
    (Script::Cyrillic, 0x1C80, 0x1C8F),
    (Script::Cyrillic, 0x2DE0, 0x2DFF),
    (Script::Cyrillic, 0xA640, 0xA69F),
    (Script::Glagolitic, 0x2C00, 0x2C5F),
    (Script::Armenian, 0x0530, 0x058F),
    (Script::Georgian, 0x10A0, 0x10FF),
    (Script::Georgian, 0x1C90, 0x1CBF),
    (Script::Georgian, 0x2D00, 0x2D2F),
    (Script::Hebrew, 0x0590, 0x05FF),
    (Script::Samaritan, 0x0800, 0x083F),
    (Script::Arabic, 0x0600, 0x06FF),
    (Script::Arabic, 0x0750, 0x077F),
    (Script::Arabic, 0x08A0, 0x08FF),
    (Script::Arabic, 0xFB50, 0xFDFF),
    (Script::Arabic, 0xFE70, 0xFEFF),
    (Script::Syriac, 0x0700, 0x074F),
    (Script::Syriac, 0x0860, 0x086F),
    (Script::Thaana, 0x0780, 0x07BF),
    (Script::Nko, 0x07C0, 0x07FF),
    (Script::Tifinagh, 0x2D30, 0x2D7F),
    (Script::Ethiopic, 0x1200, 0x139F),
    (Script::Ethiopic, 0x2D80, 0x2DDF),
    (Script::Ethiopic, 0xAB00, 0xAB2F),
    (Script::Devanagari, 0x0900, 0x097F),
    (Script::Devanagari, 0xA8E0, 0xA8FF),
    (Script::Bengali, 0x0980, 0x09FF),
    (Script::Gurmukhi, 0x0A00, 0x0A7F),
    (Script::Gujarati, 0x0A80, 0x0AFF),
    (Script::Oriya, 0x0B00, 0x0B7F),
    (Script::Tamil, 0x0B80, 0x0BFF),
    (Script::Telugu, 0x0C00, 0x0C7F),
    (Script::Kannada, 0x0C80, 0x0CFF),
    (Script::Malayalam, 0x0D00, 0x0D7F),
    (Script::Sinhala, 0x0D80, 0x0DFF),
    (Script::Tibetan, 0x0F00, 0x0FFF),
    (Script::Limbu, 0x1900, 0x194F),
    (Script::Lepcha, 0x1C00, 0x1C4F),
    (Script::Ol, 0x1C50, 0x1C7F),
    (Script::Meetei, 0xAAE0, 0xAAFF),
    (Script::Meetei, 0xABC0, 0xABFF),
    (Script::Thai, 0x0E00, 0x0E7F),
    (Script::Lao, 0x0E80, 0x0EFF),
    (Script::Myanmar, 0x1000, 0x109F),
    (Script::Myanmar, 0xA9E0, 0xA9FF),
    (Script::Myanmar, 0xAA60, 0xAA7F),
    (Script::Khmer, 0x1780, 0x17FF),
    (Script::Tai, 0x1950, 0x197F),
    (Script::Tai, 0x1A20, 0x1AAF),
    (Script::Tai, 0xAA80, 0xAADF),
    (Script::Cham, 0xAA00, 0xAA5F),
    (Script::Tagalog, 0x1700, 0x171F),
    (Script::Buginese, 0x1A00, 0x1A1F),
    (Script::Balinese, 0x1B00, 0x1B7F),
    (Script::Javanese, 0xA980, 0xA9DF),
    (Script::Sundanese, 0x1B80, 0x1BBF),
    (Script::Batak, 0x1BC0, 0x1BFF),
    (Script::Mongolian, 0x1800, 0x18AF),
    (Script::Cherokee, 0x13A0, 0x13FF),
    (Script::Cherokee, 0xAB70, 0xABBF),
    (Script::Canadian, 0x1400, 0x167F),
    (Script::Canadian, 0x18B0, 0x18FF),
    (Script::Ogham, 0x1680, 0x169F),
    (Script::Runic, 0x16A0, 0x16FF),
    (Script::Vai, 0xA500, 0xA63F),
    (Script::Bamum, 0xA6A0, 0xA6FF),
    (Script::Yi, 0xA000, 0xA4CF),
    (Script::Bopomofo, 0x3100, 0x312F),
    (Script::Bopomofo, 0x31A0, 0x31BF),
    (Script::Hangul, 0x1100, 0x11FF),
    (Script::Hangul, 0x3130, 0x318F),
    (Script::Hangul, 0xA960, 0xA97F),
    (Script::Hangul, 0xAC00, 0xD7FF),
    (Script::Hiragana, 0x3040, 0x309F),
    (Script::Katakana, 0x30A0, 0x30FF),
    (Script::Katakana, 0x31F0, 0x31FF),
    (Script::Cjk, 0x3400, 0x4DBF),
    (Script::Cjk, 0x4E00, 0x9FFF),
    (Script::Cjk, 0xF900, 0xFAFF),
    (Script::Cjk, 0x2_0000, 0x2_FA1F),
];

const SCRIPT_NAMES: &[(Script, &str)] = &[
    (Script::Latin, "LATIN"),
    (Script::Greek, "GREEK"),
    (Script::Coptic, "COPTIC"),
    (Script::Cyrillic, "CYRILLIC"),
    (Script::Glagolitic, "GLAGOLITIC"),
    (Script::Armenian, "ARMENIAN"),
    (Script::Georgian, "GEORGIAN"),
    (Script::Hebrew, "HEBREW"),
    (Script::Samaritan, "SAMARITAN"),
    (Script::Arabic, "ARABIC"),
    (Script::Syriac, "SYRIAC"),
    (Script::Thaana, "THAANA"),
    (Script::Nko, "NKO"),
    (Script::Tifinagh, "TIFINAGH"),
    (Script::Ethiopic, "ETHIOPIC"),
    (Script::Devanagari, "DEVANAGARI"),
    (Script::Bengali, "BENGALI"),
    (Script::Gurmukhi, "GURMUKHI"),
    (Script::Gujarati, "GUJARATI"),
    (Script::Oriya, "ORIYA"),
    (Script::Tamil, "TAMIL"),
    (Script::Telugu, "TELUGU"),
    (Script::Kannada, "KANNADA"),
    (Script::Malayalam, "MALAYALAM"),
    (Script::Sinhala, "SINHALA"),
    (Script::Tibetan, "TIBETAN"),
    (Script::Limbu, "LIMBU"),
    (Script::Lepcha, "LEPCHA"),
    (Script::Ol, "OL"),
    (Script::Meetei, "MEETEI"),
    (Script::Thai, "THAI"),
    (Script::Lao, "LAO"),
    (Script::Myanmar, "MYANMAR"),
    (Script::Khmer, "KHMER"),
    (Script::Tai, "TAI"),
    (Script::Cham, "CHAM"),
    (Script::Tagalog, "TAGALOG"),
    (Script::Buginese, "BUGINESE"),
    (Script::Balinese, "BALINESE"),
    (Script::Javanese, "JAVANESE"),
    (Script::Sundanese, "SUNDANESE"),
    (Script::Batak, "BATAK"),
    (Script::Mongolian, "MONGOLIAN"),
    (Script::Cherokee, "CHEROKEE"),
    (Script::Canadian, "CANADIAN"),
    (Script::Ogham, "OGHAM"),
    (Script::Runic, "RUNIC"),
    (Script::Vai, "VAI"),
    (Script::Bamum, "BAMUM"),
    (Script::Yi, "YI"),
    (Script::Bopomofo, "BOPOMOFO"),
    (Script::Hangul, "HANGUL"),
    (Script::Hiragana, "HIRAGANA"),
    (Script::Katakana, "KATAKANA"),
    (Script::Cjk, "CJK"),
    (Script::Other, "OTHER"),
];

/// Alphabetic code points that are not letters: letter numerals (Roman,
/// Runic, Hangzhou, ...) and enclosed or squared Latin letters.
const NON_LETTER_ALPHABETIC: &[(u32, u32)] = &[
    (0x16EE, 0x16F0),
    (0x2160, 0x2182),
    (0x2185, 0x2188),
    (0x24B6, 0x24E9),
    (0x3007, 0x3007),
    (0x3021, 0x3029),
    (0x3038, 0x303A),
    (0xA6E6, 0xA6EF),
    (0x1_0140, 0x1_0174),
    (0x1_0341, 0x1_0341),
    (0x1_034A, 0x1_034A),
    (0x1_03D1, 0x1_03D5),
    (0x1_2400, 0x1_246E),
    (0x1_F130, 0x1_F149),
    (0x1_F150, 0x1_F169),
    (0x1_F170, 0x1_F189),
];

/// Whether `c` is a letter (general category `L*`).
///
/// Combining vowel signs and other marks count as alphabetic in Unicode but
/// are not letters.
pub fn is_letter(c: char) -> bool {
    if !c.is_alphabetic() || is_combining_mark(c) {
        return false;
    }
    let cp = u32::from(c);
    !NON_LETTER_ALPHABETIC
        .iter()
        .any(|(lo, hi)| (*lo..=*hi).contains(&cp))
}

impl Script {
    /// Script of a letter, `None` for anything else.
    pub fn of(c: char) -> Option<Self> {
        if !is_letter(c) {
            return None;
        }
        let cp = u32::from(c);
        let script = SCRIPT_RANGES
            .iter()
            .find(|(_, lo, hi)| (*lo..=*hi).contains(&cp))
            .map(|(script, _, _)| *script)
            .unwrap_or(Self::Other);
        Some(script)
    }

    pub fn as_str(self) -> &'static str {
        SCRIPT_NAMES
            .iter()
            .find(|(s, _)| *s == self)
            .map(|(_, name)| *name)
            .unwrap_or("OTHER")
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Script {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SCRIPT_NAMES
            .iter()
            .find(|(_, name)| name.eq_ignore_ascii_case(s))
            .map(|(script, _)| *script)
            .ok_or_else(|| Error::UnknownScript(s.to_string()))
    }
}

impl TryFrom<String> for Script {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Share of letters per script, in first-seen order.
///
/// Weights are in `0.0..=1.0` and sum to `1.0` unless the input had no
/// letters, in which case the set is empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScriptWeights(Vec<(Script, f64)>);

impl ScriptWeights {
    pub fn get(&self, script: Script) -> Option<f64> {
        self.0.iter().find(|(s, _)| *s == script).map(|(_, w)| *w)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Script, f64)> + '_ {
        self.0.iter().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for ScriptWeights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("None");
        }
        for (idx, (script, weight)) in self.0.iter().enumerate() {
            if idx > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{} ({:.1}%)", script, weight * 100.0)?;
        }
        Ok(())
    }
}

/// Reports the writing scripts used in a piece of text.
pub trait ScriptDetector: fmt::Debug {
    fn detect_weighted(&self, text: &str) -> ScriptWeights;
}

/// Block-table script detector.
///
/// Scripts whose share falls below `threshold` are left out of the result.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WeightedScriptDetector {
    pub threshold: f64,
}

impl ScriptDetector for WeightedScriptDetector {
    fn detect_weighted(&self, text: &str) -> ScriptWeights {
        let mut counts: Vec<(Script, u32)> = Vec::new();
        let mut total = 0_u32;
        for script in text.chars().filter_map(Script::of) {
            total += 1;
            match counts.iter_mut().find(|(s, _)| *s == script) {
                Some((_, n)) => *n += 1,
                None => counts.push((script, 1)),
            }
        }
        if total == 0 {
            return ScriptWeights::default();
        }
        let weights = counts
            .into_iter()
            .map(|(script, n)| (script, f64::from(n) / f64::from(total)))
            .filter(|(_, w)| *w >= self.threshold)
            .collect();
        ScriptWeights(weights)
    }
}
