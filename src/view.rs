//! Display surface used by the counter

/// Two text labels and the auto reset toggle
///
/// The counter only ever sets label text and reads the toggle, so any UI
/// (or a test) can stand in for the real window.
pub trait CounterView {
    fn set_count_text(&mut self, text: &str);

    fn set_shiny_text(&mut self, text: &str);

    /// Current value of the "auto reset on shiny" toggle
    fn auto_reset(&self) -> bool;
}

/// In-memory labels, rendered by an immediate mode UI each frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelView {
    count_text: String,
    shiny_text: String,
    auto_reset: bool,
}

impl LabelView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count_text(&self) -> &str {
        &self.count_text
    }

    pub fn shiny_text(&self) -> &str {
        &self.shiny_text
    }

    /// Toggle binding for a checkbox widget
    pub fn auto_reset_mut(&mut self) -> &mut bool {
        &mut self.auto_reset
    }
}

impl CounterView for LabelView {
    fn set_count_text(&mut self, text: &str) {
        self.count_text.clear();
        self.count_text.push_str(text);
    }

    fn set_shiny_text(&mut self, text: &str) {
        self.shiny_text.clear();
        self.shiny_text.push_str(text);
    }

    fn auto_reset(&self) -> bool {
        self.auto_reset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_view() {
        let mut view = LabelView::new();
        view.set_count_text("Encounters: 4");
        view.set_shiny_text("Latest shiny encounter: Zubat");
        assert_eq!(view.count_text(), "Encounters: 4");
        assert_eq!(view.shiny_text(), "Latest shiny encounter: Zubat");

        assert!(!view.auto_reset());
        *view.auto_reset_mut() = true;
        assert!(view.auto_reset());
    }
}
