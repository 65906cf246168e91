use std::collections::BTreeMap;

use crate::error::{FramedeckError, FramedeckResult};
use crate::model::{ElementKind, Style, StyleMode, Theme};

/// Opaque sRGB color. Serializes as a `#rrggbb` hex string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn from_hex(s: &str) -> FramedeckResult<Self> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);

        fn hex_byte(pair: &str) -> FramedeckResult<u8> {
            u8::from_str_radix(pair, 16)
                .map_err(|_| FramedeckError::validation(format!("invalid hex byte \"{pair}\"")))
        }

        // Byte offsets below require ASCII; a multi-byte char would split.
        if !s.is_ascii() || s.len() != 6 {
            return Err(FramedeckError::validation(
                "hex color must be #rrggbb (case-insensitive)",
            ));
        }

        Ok(Self {
            r: hex_byte(&s[0..2])?,
            g: hex_byte(&s[2..4])?,
            b: hex_byte(&s[4..6])?,
        })
    }
}

impl serde::Serialize for Rgb {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> serde::Deserialize<'de> for Rgb {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s: String = serde::Deserialize::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// Fully resolved visuals for one element: shape colors plus label styling.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct VisualSpec {
    pub fill: Rgb,
    pub line: Rgb,
    pub font_size_pt: f64,
    pub font_color: Rgb,
}

/// Baseline lowfi/gray palette.
const FILL_NEUTRAL: Rgb = Rgb::new(240, 240, 240);
const FILL_BUTTON: Rgb = Rgb::new(225, 225, 225);
const LINE_NEUTRAL: Rgb = Rgb::new(120, 120, 120);
const FONT_NEUTRAL: Rgb = Rgb::new(30, 30, 30);
const FONT_SIZE_PT: f64 = 14.0;

const fn neutral_spec(fill: Rgb) -> VisualSpec {
    VisualSpec {
        fill,
        line: LINE_NEUTRAL,
        font_size_pt: FONT_SIZE_PT,
        font_color: FONT_NEUTRAL,
    }
}

type StyleKey = (ElementKind, StyleMode, Theme);

/// Immutable rule table mapping `(element kind, mode, theme)` to visuals.
///
/// Resolution is a lookup chain, not a branch ladder: exact key first, then
/// the same kind under the baseline `{lowfi, gray}` rules, then the neutral
/// default. New themes, modes, and kinds extend by inserting rules; callers
/// never change.
#[derive(Clone, Debug)]
pub struct StyleTable {
    rules: BTreeMap<StyleKey, VisualSpec>,
}

impl StyleTable {
    /// The rule set the reference behavior defines: neutral gray everywhere,
    /// with buttons filled slightly darker to stand out from containers.
    pub fn baseline() -> Self {
        let mut rules = BTreeMap::new();
        rules.insert(
            (ElementKind::Button, StyleMode::Lowfi, Theme::Gray),
            neutral_spec(FILL_BUTTON),
        );
        Self { rules }
    }

    /// Add or replace one rule, builder-style.
    #[must_use]
    pub fn with_rule(mut self, key: StyleKey, spec: VisualSpec) -> Self {
        self.rules.insert(key, spec);
        self
    }

    /// Resolve visuals for an element under a page style.
    ///
    /// Total and deterministic for every enum combination: unhandled
    /// mode/theme pairs fall back to the baseline rules for the same kind.
    pub fn resolve(&self, kind: ElementKind, style: Style) -> VisualSpec {
        if let Some(spec) = self.rules.get(&(kind, style.mode, style.theme)) {
            return *spec;
        }
        if let Some(spec) = self.rules.get(&(kind, StyleMode::Lowfi, Theme::Gray)) {
            return *spec;
        }
        neutral_spec(FILL_NEUTRAL)
    }
}

impl Default for StyleTable {
    fn default() -> Self {
        Self::baseline()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_roundtrip() {
        let c = Rgb::new(240, 240, 240);
        assert_eq!(c.to_hex(), "#f0f0f0");
        assert_eq!(Rgb::from_hex("#F0F0F0").unwrap(), c);
        assert_eq!(Rgb::from_hex("1e1e1e").unwrap(), Rgb::new(30, 30, 30));
        assert!(Rgb::from_hex("#f0f").is_err());
        assert!(Rgb::from_hex("#zzzzzz").is_err());
        // Multi-byte chars must be rejected, not sliced mid-character.
        assert!(Rgb::from_hex("aéaé").is_err());
        assert!(Rgb::from_hex("#ffffé").is_err());
    }

    #[test]
    fn rgb_serde_uses_hex_strings() {
        let s = serde_json::to_string(&Rgb::new(225, 225, 225)).unwrap();
        assert_eq!(s, "\"#e1e1e1\"");
        let c: Rgb = serde_json::from_str("\"#787878\"").unwrap();
        assert_eq!(c, Rgb::new(120, 120, 120));
    }

    #[test]
    fn button_fill_differs_from_card_fill() {
        let table = StyleTable::baseline();
        let style = Style::default();
        let button = table.resolve(ElementKind::Button, style);
        let card = table.resolve(ElementKind::Card, style);
        assert_ne!(button.fill, card.fill);
        assert_eq!(button.line, card.line);
    }

    #[test]
    fn non_button_kinds_share_the_default_spec() {
        let table = StyleTable::baseline();
        let style = Style::default();
        let text = table.resolve(ElementKind::Text, style);
        for kind in [ElementKind::Image, ElementKind::Input, ElementKind::Card] {
            assert_eq!(table.resolve(kind, style), text);
        }
        assert_eq!(text.fill, Rgb::new(240, 240, 240));
        assert_eq!(text.line, Rgb::new(120, 120, 120));
        assert_eq!(text.font_size_pt, 14.0);
        assert_eq!(text.font_color, Rgb::new(30, 30, 30));
    }

    #[test]
    fn unhandled_theme_and_mode_fall_back_to_baseline() {
        let table = StyleTable::baseline();
        let baseline = Style::default();
        for mode in [StyleMode::Lowfi, StyleMode::Hifi] {
            for theme in [Theme::Gray, Theme::Light, Theme::Dark] {
                let style = Style { mode, theme };
                assert_eq!(
                    table.resolve(ElementKind::Button, style),
                    table.resolve(ElementKind::Button, baseline)
                );
                assert_eq!(
                    table.resolve(ElementKind::Card, style),
                    table.resolve(ElementKind::Card, baseline)
                );
            }
        }
    }

    #[test]
    fn rules_extend_by_insertion() {
        let dark_button = VisualSpec {
            fill: Rgb::new(40, 40, 48),
            line: Rgb::new(200, 200, 200),
            font_size_pt: 14.0,
            font_color: Rgb::new(235, 235, 235),
        };
        let table = StyleTable::baseline().with_rule(
            (ElementKind::Button, StyleMode::Hifi, Theme::Dark),
            dark_button,
        );

        let dark = Style {
            mode: StyleMode::Hifi,
            theme: Theme::Dark,
        };
        assert_eq!(table.resolve(ElementKind::Button, dark), dark_button);
        // Untouched combinations still resolve through the baseline chain.
        assert_eq!(
            table.resolve(ElementKind::Button, Style::default()).fill,
            Rgb::new(225, 225, 225)
        );
    }
}
