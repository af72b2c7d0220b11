//! The counter application: state, display and notifier wired together

use crate::counter::{count_text, shiny_text, CounterState, Effect, NotificationCommand};
use crate::encounter::Encounter;
use crate::notifier::Notifier;
use crate::view::CounterView;

/// Tracks encounters and keeps a view and the notifier up to date
pub struct EncounterCounter<V: CounterView> {
    state: CounterState,
    view: V,
    notifier: Box<dyn Notifier>,
}

impl<V: CounterView> EncounterCounter<V> {
    /// Create a counter at zero and paint the initial labels
    pub fn new(view: V, notifier: Box<dyn Notifier>) -> Self {
        let mut counter = Self {
            state: CounterState::new(),
            view,
            notifier,
        };
        counter.state.set_auto_reset(counter.view.auto_reset());
        counter.view.set_count_text(&count_text(counter.state.encounters()));
        counter.view.set_shiny_text(&shiny_text(counter.state.latest_shiny()));
        counter
    }

    pub fn state(&self) -> &CounterState {
        &self.state
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn notifier_name(&self) -> &'static str {
        self.notifier.name()
    }

    /// Record an encounter. Never fails; notification errors are dropped.
    pub fn record_encounter(&mut self, encounter: &Encounter) {
        // The toggle is read at record time, not cached
        self.state.set_auto_reset(self.view.auto_reset());

        let effects = self.state.apply(encounter);
        let counted = counted_at(&effects);
        tracing::debug!(
            name = %encounter.name,
            shiny = encounter.is_shiny,
            legendary = encounter.is_legendary,
            count = counted,
            "encounter recorded"
        );
        if encounter.is_shiny {
            tracing::info!("shiny {} after {} encounters", encounter.name, counted);
        }
        if encounter.is_legendary {
            tracing::info!("legendary {} encountered", encounter.name);
        }

        for effect in effects {
            match effect {
                Effect::ShowCount(n) => self.view.set_count_text(&count_text(n)),
                Effect::ShowShiny(name) => self.view.set_shiny_text(&shiny_text(Some(&name))),
                Effect::Notify(cmd) => self.send(&cmd),
            }
        }
    }

    fn send(&self, cmd: &NotificationCommand) {
        if let Err(e) = self
            .notifier
            .notify(cmd.kind.title(), &cmd.message, cmd.kind.timeout())
        {
            tracing::debug!("{} notifier failed: {}", self.notifier.name(), e);
        }
    }
}

/// Count including `effects`' encounter, before any auto reset
fn counted_at(effects: &[Effect]) -> u64 {
    effects
        .iter()
        .find_map(|e| match e {
            Effect::ShowCount(n) => Some(*n),
            _ => None,
        })
        .unwrap_or(0)
}
