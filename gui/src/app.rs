//! Main application state and UI

use eframe::egui;

use encounter_counter::{
    select_notifier, Encounter, EncounterCounter, LabelView, Notifier, NotifierMode,
};

/// Species used by the simulate button until the user types another one
const DEFAULT_SPECIES: &str = "Pikachu";

/// Application state
pub struct CounterApp {
    counter: EncounterCounter<LabelView>,

    // Simulation inputs
    species_input: String,
    simulate_shiny: bool,
    simulate_legendary: bool,
}

impl CounterApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::with_notifier(select_notifier(NotifierMode::Auto))
    }

    pub fn with_notifier(notifier: Box<dyn Notifier>) -> Self {
        Self {
            counter: EncounterCounter::new(LabelView::new(), notifier),
            species_input: DEFAULT_SPECIES.to_string(),
            simulate_shiny: false,
            simulate_legendary: false,
        }
    }

    /// Encounter described by the simulation inputs
    fn simulated_encounter(&self) -> Encounter {
        Encounter {
            name: self.species_input.trim().to_string(),
            is_shiny: self.simulate_shiny,
            is_legendary: self.simulate_legendary,
        }
    }

    fn simulate(&mut self) {
        let encounter = self.simulated_encounter();
        self.counter.record_encounter(&encounter);
    }
}

impl eframe::App for CounterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(5.0);
                ui.heading(self.counter.view().count_text());
                ui.add_space(5.0);
                ui.label(self.counter.view().shiny_text());
                ui.add_space(5.0);
                ui.checkbox(self.counter.view_mut().auto_reset_mut(), "Auto reset on shiny");
            });

            ui.add_space(10.0);
            ui.separator();
            ui.add_space(5.0);

            ui.group(|ui| {
                ui.horizontal(|ui| {
                    ui.label("Species:");
                    ui.add(
                        egui::TextEdit::singleline(&mut self.species_input)
                            .hint_text(DEFAULT_SPECIES)
                            .desired_width(140.0),
                    );
                });
                ui.horizontal(|ui| {
                    ui.checkbox(&mut self.simulate_shiny, "Shiny");
                    ui.checkbox(&mut self.simulate_legendary, "Legendary");
                });

                ui.add_space(5.0);
                if ui
                    .add(egui::Button::new("Simulate Encounter").min_size(egui::vec2(150.0, 30.0)))
                    .clicked()
                {
                    self.simulate();
                }
            });

            ui.add_space(5.0);
            ui.small(format!("Notifications: {}", self.counter.notifier_name()));
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use encounter_counter::NoopNotifier;

    #[test]
    fn test_simulate_default() {
        let mut app = CounterApp::with_notifier(Box::new(NoopNotifier));
        assert_eq!(app.simulated_encounter(), Encounter::new("Pikachu"));

        app.simulate();
        app.simulate();
        assert_eq!(app.counter.view().count_text(), "Encounters: 2");
    }

    #[test]
    fn test_simulate_shiny_with_auto_reset() {
        let mut app = CounterApp::with_notifier(Box::new(NoopNotifier));
        app.simulate();

        app.species_input = " Zubat ".to_string();
        app.simulate_shiny = true;
        *app.counter.view_mut().auto_reset_mut() = true;
        app.simulate();

        assert_eq!(app.counter.view().count_text(), "Encounters: 0");
        assert_eq!(app.counter.view().shiny_text(), "Latest shiny encounter: Zubat");
    }
}
