//! PokeMMO Encounter Counter Library
//!
//! Counts encounters, remembers the latest shiny, optionally resets the count
//! when a shiny shows up, and sends desktop notifications along the way.

pub mod counter;
pub mod encounter;
pub mod notifier;
pub mod tracker;
pub mod view;

pub use counter::{transition, CounterState, Effect, NotificationCommand, NotificationKind};
pub use encounter::Encounter;
pub use notifier::{
    select_notifier, DesktopNotifier, NoopNotifier, Notifier, NotifierMode, NotifyError,
};
pub use tracker::EncounterCounter;
pub use view::{CounterView, LabelView};

/// Window and notification title
pub const APP_TITLE: &str = "PokeMMO Encounter Counter";
