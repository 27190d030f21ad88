//! Terminal rendering of bead sequences, settings and session status.

use std::fmt::Write as _;
use std::path::Path;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use rosario_core::{PrayerSession, PrayerTextResolver};
use rosario_model::{Bead, PrayerLocation, Settings};
use rosario_store::PreferenceStore;

/// Table of every step in a sequence.
pub fn beads_table(beads: &[Bead]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Step"),
        header_cell("Bead"),
        header_cell("Type"),
        header_cell("Prayer"),
    ]);
    apply_table_style(&mut table);

    for (step, bead) in beads.iter().enumerate() {
        let prayer = match bead.prayer {
            Some(prayer) => Cell::new(prayer.title()),
            None => dim_cell("-"),
        };
        table.add_row(vec![
            Cell::new(step + 1).set_alignment(CellAlignment::Right),
            Cell::new(bead.index).set_alignment(CellAlignment::Right),
            type_cell(bead),
            prayer,
        ]);
    }
    table
}

/// Borderless listing, one step per line.
pub fn plain_listing(beads: &[Bead]) -> String {
    let mut out = String::new();
    for (step, bead) in beads.iter().enumerate() {
        let prayer = bead.prayer.map_or("-", |prayer| prayer.title());
        let line = format!(
            "{:<4}{:<4}{:<12}{}",
            step + 1,
            bead.index,
            bead.bead_type.as_str(),
            prayer
        );
        let _ = writeln!(out, "{}", line.trim_end());
    }
    out
}

/// Two-column view of the settings, with the file they come from.
pub fn settings_table(settings: &Settings, source: Option<&Path>) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Setting"), header_cell("Value")]);
    apply_table_style(&mut table);

    let rows = [
        ("Language", settings.language.display_name().to_string()),
        (
            "Navigation mode",
            settings.navigation_mode.display_name().to_string(),
        ),
        ("Prayer", settings.prayer_type.display_name().to_string()),
        ("Display mode", settings.display_mode.display_name().to_string()),
        ("Allow rewind", yes_no(settings.allow_rewind).to_string()),
        (
            "Prayer location",
            settings.prayer_location.display_name().to_string(),
        ),
        ("Show bead number", yes_no(settings.show_bead_number).to_string()),
    ];
    for (label, value) in rows {
        table.add_row(vec![Cell::new(label), Cell::new(value)]);
    }
    if let Some(path) = source {
        table.add_row(vec![dim_cell("File"), dim_cell(path.display())]);
    }
    table
}

/// Lines describing the current position: the bead and the prayer to say.
///
/// The prayer line goes above or below the bead line per the prayer location
/// setting.
pub fn status_lines<P: PreferenceStore>(
    session: &PrayerSession<P>,
    resolver: &impl PrayerTextResolver,
) -> Vec<String> {
    let navigator = session.navigator();
    let (done, total) = navigator.progress();
    let bead_name = navigator
        .current_bead()
        .map_or("No bead", |bead| bead.bead_type.display_name());
    let bead_line = match session.caption() {
        Some(caption) => format!("[{done}/{total}] #{caption} {bead_name}"),
        None => format!("[{done}/{total}] {bead_name}"),
    };
    let Some(prayer_line) = session.current_prayer_text(resolver) else {
        return vec![bead_line];
    };
    match session.settings().prayer_location {
        PrayerLocation::Top => vec![prayer_line, bead_line],
        PrayerLocation::Bottom => vec![bead_line, prayer_line],
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn type_cell(bead: &Bead) -> Cell {
    let cell = Cell::new(bead.bead_type.display_name());
    if bead.bead_type.is_large() {
        cell.add_attribute(Attribute::Bold)
    } else if bead.bead_type.is_tail() {
        cell.fg(Color::DarkGrey)
    } else {
        cell
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}
