//! Palette records and the fixed seed data

use rand::Rng;
use serde::{Deserialize, Serialize};

/// A stored palette: three hex colors under a title, tagged with a
/// temperature. The id is opaque and is the only lookup/removal key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub id: String,
    pub title: String,
    pub colors: [String; 3],
    pub temperature: Temperature,
}

impl Palette {
    /// Build a new palette with a freshly generated id.
    pub fn new(title: impl Into<String>, colors: [String; 3], temperature: Temperature) -> Self {
        Self {
            id: generate_id(),
            title: title.into(),
            colors,
            temperature,
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Temperature {
    #[default]
    Neutral,
    Cool,
    Warm,
}

impl Temperature {
    pub const ALL: [Temperature; 3] = [Temperature::Neutral, Temperature::Cool, Temperature::Warm];

    /// Lowercase label, matching the stored representation.
    pub fn label(self) -> &'static str {
        match self {
            Temperature::Neutral => "neutral",
            Temperature::Cool => "cool",
            Temperature::Warm => "warm",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Temperature::Neutral => Temperature::Cool,
            Temperature::Cool => Temperature::Warm,
            Temperature::Warm => Temperature::Neutral,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Temperature::Neutral => Temperature::Warm,
            Temperature::Cool => Temperature::Neutral,
            Temperature::Warm => Temperature::Cool,
        }
    }
}

impl std::fmt::Display for Temperature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Random 128-bit id, hyphenated like the ids the seed data carries.
pub fn generate_id() -> String {
    let bytes: [u8; 16] = rand::rng().random();
    let s = hex::encode(bytes);
    format!(
        "{}-{}-{}-{}-{}",
        &s[0..8],
        &s[8..12],
        &s[12..16],
        &s[16..20],
        &s[20..32]
    )
}

/// Parse a `#rrggbb` string into RGB components.
pub fn parse_rgb(color: &str) -> Option<(u8, u8, u8)> {
    let digits = color.strip_prefix('#')?;
    if digits.len() != 6 {
        return None;
    }
    let bytes = hex::decode(digits).ok()?;
    Some((bytes[0], bytes[1], bytes[2]))
}

pub fn is_valid_hex(color: &str) -> bool {
    parse_rgb(color).is_some()
}

/// The three example palettes written into an empty store on first run.
pub fn seed_palettes() -> Vec<Palette> {
    vec![
        Palette {
            id: "5affd4e4-418d-4b62-beeb-1c0f7aaff753".into(),
            title: "Marcy".into(),
            colors: ["#c92929".into(), "#2f5a8b".into(), "#327a5f".into()],
            temperature: Temperature::Neutral,
        },
        Palette {
            id: "32521ef4-d64c-4906-b06d-f3d0d6b16e0f".into(),
            title: "Sleek and Modern".into(),
            colors: ["#3A5199".into(), "#2F2E33".into(), "#D5D6D2".into()],
            temperature: Temperature::Cool,
        },
        Palette {
            id: "8b144d62-faa7-4226-87e1-096d7c1bedc7".into(),
            title: "Winter Reds".into(),
            colors: ["#A10115".into(), "#C0B2B5".into(), "#600A0A".into()],
            temperature: Temperature::Warm,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rgb() {
        assert_eq!(parse_rgb("#c92929"), Some((0xc9, 0x29, 0x29)));
        assert_eq!(parse_rgb("#A10115"), Some((0xa1, 0x01, 0x15)));
        assert_eq!(parse_rgb("c92929"), None);
        assert_eq!(parse_rgb("#c9292"), None);
        assert_eq!(parse_rgb("#c92929ff"), None);
        assert_eq!(parse_rgb("#zzzzzz"), None);
        assert_eq!(parse_rgb(""), None);
    }

    #[test]
    fn test_temperature_cycle() {
        assert_eq!(Temperature::Neutral.next(), Temperature::Cool);
        assert_eq!(Temperature::Warm.next(), Temperature::Neutral);
        assert_eq!(Temperature::Neutral.prev(), Temperature::Warm);
        let mut t = Temperature::Neutral;
        for _ in 0..3 {
            t = t.next();
        }
        assert_eq!(t, Temperature::Neutral);
    }

    #[test]
    fn test_temperature_serde() {
        assert_eq!(
            serde_json::to_string(&Temperature::Cool).unwrap(),
            "\"cool\""
        );
        let t: Temperature = serde_json::from_str("\"warm\"").unwrap();
        assert_eq!(t, Temperature::Warm);
        assert!(serde_json::from_str::<Temperature>("\"tepid\"").is_err());
    }

    #[test]
    fn test_generate_id_shape() {
        let id = generate_id();
        let parts: Vec<&str> = id.split('-').collect();
        assert_eq!(
            parts.iter().map(|p| p.len()).collect::<Vec<_>>(),
            vec![8, 4, 4, 4, 12]
        );
        assert_ne!(generate_id(), generate_id());
    }

    #[test]
    fn test_seed_palettes() {
        let seeds = seed_palettes();
        assert_eq!(seeds.len(), 3);
        assert_eq!(seeds[0].title, "Marcy");
        assert_eq!(seeds[0].temperature, Temperature::Neutral);
        assert_eq!(seeds[1].title, "Sleek and Modern");
        assert_eq!(seeds[1].colors[0], "#3A5199");
        assert_eq!(seeds[2].title, "Winter Reds");
        assert_eq!(seeds[2].temperature, Temperature::Warm);
        // Every seed color must render as a swatch.
        for p in &seeds {
            for c in &p.colors {
                assert!(is_valid_hex(c), "bad seed color {c}");
            }
        }
    }
}
