//! A prayer session: settings, the active bead sequence and the position in it.
//!
//! The session owns the settings store. Settings changes are written through
//! before they take effect, and a change of prayer type swaps the sequence
//! and starts it over.

use rosario_model::{Prayer, Settings};
use rosario_store::{PreferenceStore, SettingsStore};

use crate::beads::generate_beads;
use crate::input::{Command, Gesture, resolve};
use crate::navigation::{BeadNavigator, Step};
use crate::text::PrayerTextResolver;

pub struct PrayerSession<P> {
    store: SettingsStore<P>,
    settings: Settings,
    navigator: BeadNavigator,
}

impl<P: PreferenceStore> PrayerSession<P> {
    /// Load settings from the store and start the stored prayer.
    pub fn open(store: SettingsStore<P>) -> Self {
        let settings = store.read();
        let navigator = BeadNavigator::new(generate_beads(settings.prayer_type));
        tracing::info!(
            prayer_type = %settings.prayer_type,
            steps = navigator.beads().len(),
            "prayer session opened"
        );
        Self {
            store,
            settings,
            navigator,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn navigator(&self) -> &BeadNavigator {
        &self.navigator
    }

    pub fn store(&self) -> &SettingsStore<P> {
        &self.store
    }

    /// Apply and persist new settings.
    ///
    /// Equal settings are a no-op. If persisting fails the previous settings
    /// stay in effect and the error is returned.
    pub fn update_settings(&mut self, settings: Settings) -> rosario_store::Result<()> {
        if settings == self.settings {
            return Ok(());
        }
        self.store.write(&settings)?;
        self.apply_unsaved(settings);
        Ok(())
    }

    /// Apply settings for this session only, without touching the store.
    ///
    /// A change of prayer type swaps the sequence and starts it over.
    pub fn apply_unsaved(&mut self, settings: Settings) {
        let prayer_changed = settings.prayer_type != self.settings.prayer_type;
        self.settings = settings;
        if prayer_changed {
            self.navigator
                .replace_beads(generate_beads(settings.prayer_type));
            tracing::info!(prayer_type = %settings.prayer_type, "prayer type changed");
        }
    }

    pub fn next(&mut self) -> Step {
        self.navigator.next()
    }

    pub fn previous(&mut self) -> Step {
        self.navigator.previous()
    }

    pub fn reset(&mut self, confirmed: bool) -> Step {
        self.navigator.reset(confirmed)
    }

    /// Route raw input through the navigation mode and rewind setting.
    pub fn handle(&mut self, gesture: Gesture) -> Step {
        match resolve(gesture, &self.settings) {
            Some(Command::Next) => self.next(),
            Some(Command::Previous) => self.previous(),
            None => Step::Stayed,
        }
    }

    pub fn restart_requested(&self) -> bool {
        self.navigator.restart_requested()
    }

    pub fn current_prayer(&self) -> Option<Prayer> {
        self.navigator.current_prayer()
    }

    /// 1-based step number, shown only when enabled in settings.
    pub fn caption(&self) -> Option<String> {
        self.settings
            .show_bead_number
            .then(|| (self.navigator.current_index() + 1).to_string())
    }

    /// Heading naming the selected prayer.
    pub fn title(&self, resolver: &impl PrayerTextResolver) -> String {
        resolver.prayer_type_title(self.settings.prayer_type, self.settings.language)
    }

    pub fn current_prayer_text(&self, resolver: &impl PrayerTextResolver) -> Option<String> {
        self.current_prayer()
            .map(|prayer| resolver.prayer_title(prayer, self.settings.language))
    }
}
