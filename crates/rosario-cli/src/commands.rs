use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use rosario_core::beads::physical_bead_count;
use rosario_core::{EnglishTitles, PrayerSession, generate_beads};
use rosario_model::Settings;
use rosario_store::{MemoryPreferences, PreferenceStore, SettingsStore, TomlPreferences};

use rosario_cli::render::{beads_table, plain_listing, settings_table};
use rosario_cli::repl;

use crate::cli::{BeadsArgs, PrayArgs, SetArgs, SettingsCommand};

pub type CliStore = SettingsStore<Box<dyn PreferenceStore>>;

/// Where settings live for this invocation.
pub struct StoreLocation {
    pub store: CliStore,
    pub path: Option<PathBuf>,
}

/// Open the settings store at `config`, the platform default, or in memory.
pub fn open_store(config: Option<&Path>, ephemeral: bool) -> Result<StoreLocation> {
    if ephemeral {
        tracing::debug!("using in-memory settings");
        let backend: Box<dyn PreferenceStore> = Box::new(MemoryPreferences::new());
        return Ok(StoreLocation {
            store: SettingsStore::new(backend),
            path: None,
        });
    }
    let toml = match config {
        Some(path) => TomlPreferences::new(path),
        None => TomlPreferences::at_default_location()
            .context("locate settings file (pass --config to choose one)")?,
    };
    let path = toml.path().to_path_buf();
    tracing::debug!(path = %path.display(), "using settings file");
    let backend: Box<dyn PreferenceStore> = Box::new(toml);
    Ok(StoreLocation {
        store: SettingsStore::new(backend),
        path: Some(path),
    })
}

pub fn run_beads<W: Write>(
    location: &StoreLocation,
    args: &BeadsArgs,
    out: &mut W,
) -> Result<()> {
    let prayer_type = match args.prayer {
        Some(prayer_type) => prayer_type,
        None => location.store.read().prayer_type,
    };
    let beads = generate_beads(prayer_type);
    tracing::info!(%prayer_type, steps = beads.len(), "listing beads");

    if args.plain {
        write!(out, "{}", plain_listing(&beads)).context("write listing")?;
    } else {
        writeln!(
            out,
            "{}: {} steps on {} beads",
            prayer_type.display_name(),
            beads.len(),
            physical_bead_count(&beads)
        )
        .context("write listing")?;
        writeln!(out, "{}", beads_table(&beads)).context("write listing")?;
    }
    Ok(())
}

pub fn run_settings<W: Write>(
    location: &mut StoreLocation,
    command: &SettingsCommand,
    out: &mut W,
) -> Result<()> {
    let settings = match command {
        SettingsCommand::Show => location.store.read(),
        SettingsCommand::Set(args) => {
            let updated = apply_set_args(location.store.read(), args);
            location
                .store
                .write(&updated)
                .context("save settings")?;
            updated
        }
        SettingsCommand::Reset => {
            let defaults = Settings::for_system();
            location
                .store
                .write(&defaults)
                .context("reset settings")?;
            defaults
        }
    };
    writeln!(out, "{}", settings_table(&settings, location.path.as_deref()))
        .context("write settings")?;
    Ok(())
}

/// Run an interactive session, switching prayer first when asked.
///
/// A prayer choice that cannot be saved still applies to this session.
pub fn run_pray<R: BufRead, W: Write>(
    location: StoreLocation,
    args: &PrayArgs,
    input: R,
    out: &mut W,
) -> Result<PrayerSession<Box<dyn PreferenceStore>>> {
    let mut session = PrayerSession::open(location.store);
    if let Some(prayer_type) = args.prayer {
        let settings = session.settings().with_prayer_type(prayer_type);
        if let Err(error) = session.update_settings(settings) {
            tracing::warn!(
                error = ?error,
                %prayer_type,
                "prayer choice not saved, using it for this session"
            );
            writeln!(
                out,
                "warning: could not save the prayer choice; praying the {} this time only",
                prayer_type.display_name()
            )
            .context("write warning")?;
            session.apply_unsaved(settings);
        }
    }
    repl::run(&mut session, &EnglishTitles, input, out).context("prayer session")?;
    tracing::info!(
        position = session.navigator().current_index(),
        "prayer session closed"
    );
    Ok(session)
}

/// Overlay the flags that were given onto `settings`.
pub fn apply_set_args(mut settings: Settings, args: &SetArgs) -> Settings {
    if let Some(language) = args.language {
        settings = settings.with_language(language);
    }
    if let Some(mode) = args.navigation_mode {
        settings = settings.with_navigation_mode(mode);
    }
    if let Some(prayer_type) = args.prayer {
        settings = settings.with_prayer_type(prayer_type);
    }
    if let Some(mode) = args.display_mode {
        settings = settings.with_display_mode(mode);
    }
    if let Some(allow) = args.allow_rewind {
        settings = settings.with_allow_rewind(allow);
    }
    if let Some(location) = args.prayer_location {
        settings = settings.with_prayer_location(location);
    }
    if let Some(show) = args.show_bead_number {
        settings = settings.with_show_bead_number(show);
    }
    settings
}
