//! Encounter counter state machine
//!
//! `transition` is the whole of the counter's behaviour: it takes the current
//! state and an encounter and returns the next state together with the
//! ordered side effects the caller has to apply (label refreshes and
//! notifications). Nothing in here touches a display or a notification
//! backend, which keeps it testable without a window.

use std::time::Duration;

use crate::encounter::Encounter;

/// Shown in the shiny label before any shiny has been seen
pub const NO_SHINY: &str = "None";

/// Display duration for ordinary encounter notifications
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(3);

/// Display duration for shiny and legendary notifications
pub const RARE_TIMEOUT: Duration = Duration::from_secs(5);

/// Text for the encounter count label
pub fn count_text(encounters: u64) -> String {
    format!("Encounters: {}", encounters)
}

/// Text for the latest shiny label
pub fn shiny_text(latest_shiny: Option<&str>) -> String {
    format!("Latest shiny encounter: {}", latest_shiny.unwrap_or(NO_SHINY))
}

/// Kind of desktop notification emitted for an encounter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Encounter,
    Shiny,
    Legendary,
}

impl NotificationKind {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Encounter => "Pokémon Encountered",
            Self::Shiny => "Shiny Encounter!",
            Self::Legendary => "Legendary Encounter!",
        }
    }

    pub fn timeout(&self) -> Duration {
        match self {
            Self::Encounter => DEFAULT_TIMEOUT,
            Self::Shiny | Self::Legendary => RARE_TIMEOUT,
        }
    }
}

/// A notification to send, message is the species name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationCommand {
    pub kind: NotificationKind,
    pub message: String,
}

/// Side effect produced by a transition, applied in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Refresh the count label with this value
    ShowCount(u64),
    /// Refresh the latest shiny label with this name
    ShowShiny(String),
    /// Emit a notification (best effort)
    Notify(NotificationCommand),
}

/// Counter state owned by the application for the lifetime of the process
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CounterState {
    encounters: u64,
    latest_shiny: Option<String>,
    auto_reset: bool,
}

impl CounterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Encounters since start or since the last auto reset
    pub fn encounters(&self) -> u64 {
        self.encounters
    }

    /// Name of the most recent shiny, if any
    pub fn latest_shiny(&self) -> Option<&str> {
        self.latest_shiny.as_deref()
    }

    pub fn auto_reset(&self) -> bool {
        self.auto_reset
    }

    /// Change the auto reset preference. Never touches the count.
    pub fn set_auto_reset(&mut self, enabled: bool) {
        self.auto_reset = enabled;
    }

    /// Record an encounter in place, returning the effects to apply
    pub fn apply(&mut self, encounter: &Encounter) -> Vec<Effect> {
        let (next, effects) = transition(self, encounter);
        *self = next;
        effects
    }
}

/// Compute the state after `encounter` and the effects, in the order they
/// must be applied
pub fn transition(state: &CounterState, encounter: &Encounter) -> (CounterState, Vec<Effect>) {
    let mut next = state.clone();
    let mut effects = Vec::with_capacity(6);

    next.encounters = next.encounters.saturating_add(1);
    effects.push(Effect::ShowCount(next.encounters));
    effects.push(notify(NotificationKind::Encounter, encounter));

    if encounter.is_shiny {
        effects.push(notify(NotificationKind::Shiny, encounter));
        next.latest_shiny = Some(encounter.name.clone());
        effects.push(Effect::ShowShiny(encounter.name.clone()));

        if next.auto_reset {
            next.encounters = 0;
            effects.push(Effect::ShowCount(0));
        }
    }

    // Independent of the shiny branch, auto reset only follows is_shiny
    if encounter.is_legendary {
        effects.push(notify(NotificationKind::Legendary, encounter));
    }

    (next, effects)
}

fn notify(kind: NotificationKind, encounter: &Encounter) -> Effect {
    Effect::Notify(NotificationCommand {
        kind,
        message: encounter.name.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notified(effects: &[Effect]) -> Vec<NotificationKind> {
        effects
            .iter()
            .filter_map(|e| match e {
                Effect::Notify(cmd) => Some(cmd.kind),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_plain_encounters_count_up() {
        let mut state = CounterState::new();
        for i in 1..=25 {
            state.apply(&Encounter::new("Geodude"));
            assert_eq!(state.encounters(), i);
        }
        assert_eq!(state.latest_shiny(), None);
    }

    #[test]
    fn test_plain_encounter_effects() {
        let (next, effects) = transition(&CounterState::new(), &Encounter::new("Pikachu"));
        assert_eq!(next.encounters(), 1);
        assert_eq!(
            effects,
            vec![
                Effect::ShowCount(1),
                Effect::Notify(NotificationCommand {
                    kind: NotificationKind::Encounter,
                    message: "Pikachu".to_string(),
                }),
            ]
        );
    }

    #[test]
    fn test_transition_leaves_input_untouched() {
        let state = CounterState::new();
        let _ = transition(&state, &Encounter::new("Zubat").shiny());
        assert_eq!(state, CounterState::new());
    }

    #[test]
    fn test_shiny_without_auto_reset() {
        let mut state = CounterState::new();
        state.apply(&Encounter::new("Oddish"));
        let effects = state.apply(&Encounter::new("Zubat").shiny());

        assert_eq!(state.encounters(), 2);
        assert_eq!(state.latest_shiny(), Some("Zubat"));
        assert_eq!(
            notified(&effects),
            vec![NotificationKind::Encounter, NotificationKind::Shiny]
        );
        assert!(!effects.contains(&Effect::ShowCount(0)));
    }

    #[test]
    fn test_shiny_with_auto_reset() {
        let mut state = CounterState::new();
        state.set_auto_reset(true);
        state.apply(&Encounter::new("Oddish"));
        state.apply(&Encounter::new("Oddish"));
        let effects = state.apply(&Encounter::new("Rattata").shiny());

        assert_eq!(state.encounters(), 0);
        assert_eq!(state.latest_shiny(), Some("Rattata"));
        // count refreshed twice: incremented value first, then the reset
        assert_eq!(
            effects,
            vec![
                Effect::ShowCount(3),
                Effect::Notify(NotificationCommand {
                    kind: NotificationKind::Encounter,
                    message: "Rattata".to_string(),
                }),
                Effect::Notify(NotificationCommand {
                    kind: NotificationKind::Shiny,
                    message: "Rattata".to_string(),
                }),
                Effect::ShowShiny("Rattata".to_string()),
                Effect::ShowCount(0),
            ]
        );
    }

    #[test]
    fn test_legendary_only() {
        let mut state = CounterState::new();
        state.set_auto_reset(true);
        let effects = state.apply(&Encounter::new("Moltres").legendary());

        assert_eq!(state.encounters(), 1);
        assert_eq!(state.latest_shiny(), None);
        assert_eq!(
            notified(&effects),
            vec![NotificationKind::Encounter, NotificationKind::Legendary]
        );
    }

    #[test]
    fn test_shiny_legendary_fires_both() {
        let mut state = CounterState::new();
        state.set_auto_reset(true);
        state.apply(&Encounter::new("Pidgey"));
        let effects = state.apply(&Encounter::new("Zapdos").shiny().legendary());

        assert_eq!(state.encounters(), 0);
        assert_eq!(state.latest_shiny(), Some("Zapdos"));
        assert_eq!(
            notified(&effects),
            vec![
                NotificationKind::Encounter,
                NotificationKind::Shiny,
                NotificationKind::Legendary,
            ]
        );
        assert_eq!(effects.last().map(|e| matches!(e, Effect::Notify(_))), Some(true));
    }

    #[test]
    fn test_toggle_keeps_count_and_shiny() {
        let mut state = CounterState::new();
        state.apply(&Encounter::new("Zubat").shiny());
        state.apply(&Encounter::new("Zubat"));

        state.set_auto_reset(true);
        assert_eq!(state.encounters(), 2);
        assert_eq!(state.latest_shiny(), Some("Zubat"));

        state.set_auto_reset(false);
        assert_eq!(state.encounters(), 2);
        assert_eq!(state.latest_shiny(), Some("Zubat"));
    }

    #[test]
    fn test_latest_shiny_survives_plain_encounters() {
        let mut state = CounterState::new();
        state.apply(&Encounter::new("Abra").shiny());
        state.apply(&Encounter::new("Ekans").legendary());
        state.apply(&Encounter::new("Spearow"));
        assert_eq!(state.latest_shiny(), Some("Abra"));
    }

    #[test]
    fn test_count_saturates() {
        let mut state = CounterState {
            encounters: u64::MAX,
            ..CounterState::default()
        };
        state.apply(&Encounter::new("Magikarp"));
        assert_eq!(state.encounters(), u64::MAX);
    }

    #[test]
    fn test_notification_titles_and_timeouts() {
        assert_eq!(NotificationKind::Encounter.title(), "Pokémon Encountered");
        assert_eq!(NotificationKind::Encounter.timeout(), Duration::from_secs(3));
        assert_eq!(NotificationKind::Shiny.title(), "Shiny Encounter!");
        assert_eq!(NotificationKind::Shiny.timeout(), Duration::from_secs(5));
        assert_eq!(NotificationKind::Legendary.title(), "Legendary Encounter!");
        assert_eq!(NotificationKind::Legendary.timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_label_text() {
        assert_eq!(count_text(0), "Encounters: 0");
        assert_eq!(count_text(42), "Encounters: 42");
        assert_eq!(shiny_text(None), "Latest shiny encounter: None");
        assert_eq!(shiny_text(Some("Zubat")), "Latest shiny encounter: Zubat");
    }
}
