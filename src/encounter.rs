//! Encounter records

/// Marker the watcher sees in front of a shiny species name
const SHINY_MARKER: &str = "Shiny";
/// Marker the watcher sees in front of a legendary species name
const LEGENDARY_MARKER: &str = "Legendary";

/// A single Pokémon encounter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encounter {
    pub name: String,
    pub is_shiny: bool,
    pub is_legendary: bool,
}

impl Encounter {
    /// Create a plain (non-shiny, non-legendary) encounter
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_shiny: false,
            is_legendary: false,
        }
    }

    /// Mark this encounter as shiny
    pub fn shiny(mut self) -> Self {
        self.is_shiny = true;
        self
    }

    /// Mark this encounter as legendary
    pub fn legendary(mut self) -> Self {
        self.is_legendary = true;
        self
    }

    /// Build an encounter from the text a screen or log watcher picked up
    ///
    /// The rarity markers may appear anywhere in the text and are stripped
    /// from the species name. Returns `None` for blank input. The name is not
    /// validated beyond trimming.
    pub fn from_detected_text(text: &str) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let name = text
            .replace(SHINY_MARKER, "")
            .replace(LEGENDARY_MARKER, "")
            .trim()
            .to_string();

        Some(Self {
            name,
            is_shiny: text.contains(SHINY_MARKER),
            is_legendary: text.contains(LEGENDARY_MARKER),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_flags() {
        let enc = Encounter::new("Mewtwo").shiny().legendary();
        assert_eq!(enc.name, "Mewtwo");
        assert!(enc.is_shiny);
        assert!(enc.is_legendary);

        let plain = Encounter::new("Rattata");
        assert!(!plain.is_shiny);
        assert!(!plain.is_legendary);
    }

    #[test]
    fn test_detected_plain() {
        let enc = Encounter::from_detected_text("  Pikachu \n").unwrap();
        assert_eq!(enc, Encounter::new("Pikachu"));
    }

    #[test]
    fn test_detected_markers() {
        let enc = Encounter::from_detected_text("Shiny Zubat").unwrap();
        assert_eq!(enc, Encounter::new("Zubat").shiny());

        let enc = Encounter::from_detected_text("Legendary Shiny Articuno").unwrap();
        assert_eq!(enc.name, "Articuno");
        assert!(enc.is_shiny);
        assert!(enc.is_legendary);
    }

    #[test]
    fn test_detected_blank() {
        assert!(Encounter::from_detected_text("").is_none());
        assert!(Encounter::from_detected_text("   \t").is_none());
    }

    #[test]
    fn test_detected_marker_only_keeps_empty_name() {
        let enc = Encounter::from_detected_text("Shiny").unwrap();
        assert_eq!(enc.name, "");
        assert!(enc.is_shiny);
    }
}
