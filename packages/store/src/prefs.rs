//! Reader font preferences, applied to the document root.

use serde::{Deserialize, Serialize};

use crate::kv::{load_json, persist, KeyValueStore};

const FONT_KEY: &str = "bridal.font";
const MIN_SCALE: f32 = 0.8;
const MAX_SCALE: f32 = 1.4;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontFamily {
    #[default]
    Serif,
    Sans,
    Script,
}

impl FontFamily {
    pub const ALL: [FontFamily; 3] = [FontFamily::Serif, FontFamily::Sans, FontFamily::Script];

    pub fn label(self) -> &'static str {
        match self {
            FontFamily::Serif => "Classic",
            FontFamily::Sans => "Modern",
            FontFamily::Script => "Calligraphy",
        }
    }

    pub fn css(self) -> &'static str {
        match self {
            FontFamily::Serif => "'Playfair Display', Georgia, serif",
            FontFamily::Sans => "'Poppins', 'Segoe UI', sans-serif",
            FontFamily::Script => "'Great Vibes', cursive",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s {
            "sans" => FontFamily::Sans,
            "script" => FontFamily::Script,
            _ => FontFamily::Serif,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            FontFamily::Serif => "serif",
            FontFamily::Sans => "sans",
            FontFamily::Script => "script",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FontPrefs {
    #[serde(default)]
    pub family: FontFamily,
    #[serde(default = "default_scale")]
    pub scale: f32,
}

fn default_scale() -> f32 {
    1.0
}

impl Default for FontPrefs {
    fn default() -> Self {
        Self {
            family: FontFamily::default(),
            scale: default_scale(),
        }
    }
}

impl FontPrefs {
    pub fn load(store: &impl KeyValueStore) -> Self {
        let prefs: Self = load_json(store, FONT_KEY).unwrap_or_default();
        prefs.with_scale(prefs.scale)
    }

    pub fn save(&self, store: &impl KeyValueStore) {
        persist(store, FONT_KEY, self);
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = if scale.is_finite() {
            scale.clamp(MIN_SCALE, MAX_SCALE)
        } else {
            default_scale()
        };
        self
    }

    /// Inline style for the app root.
    pub fn root_style(&self) -> String {
        format!(
            "font-family: {}; font-size: {:.0}%;",
            self.family.css(),
            self.scale * 100.0
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    #[test]
    fn scale_is_clamped() {
        assert_eq!(FontPrefs::default().with_scale(3.0).scale, MAX_SCALE);
        assert_eq!(FontPrefs::default().with_scale(0.1).scale, MIN_SCALE);
        assert_eq!(FontPrefs::default().with_scale(f32::NAN).scale, 1.0);
    }

    #[test]
    fn stored_out_of_range_scale_is_clamped_on_load() {
        let store = MemoryStore::new();
        store.set(FONT_KEY, r#"{"family":"script","scale":9.0}"#).unwrap();
        let prefs = FontPrefs::load(&store);
        assert_eq!(prefs.family, FontFamily::Script);
        assert_eq!(prefs.scale, MAX_SCALE);
        assert_eq!(
            prefs.root_style(),
            "font-family: 'Great Vibes', cursive; font-size: 140%;"
        );
    }
}
