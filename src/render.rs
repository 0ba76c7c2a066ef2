//! Table rendering shared by the compendium listing and the vial drawer.

use std::{io, ops::Range};

use tabled::{
    builder::Builder,
    grid::config::HorizontalLine,
    settings::{
        Alignment, Color, Style, Theme,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

/// Errors that can occur when writing a rendered view.
#[derive(Debug, Error)]
pub enum RenderError {
    /// IO error
    #[error("Failed to write output: {0}")]
    Io(#[from] io::Error),
}

/// Writes `builder` as a rounded table with a bold header row, right-aligning
/// the columns in `numeric`.
pub(crate) fn write_table(
    out: &mut impl io::Write,
    builder: Builder,
    numeric: Range<usize>,
) -> Result<(), RenderError> {
    let mut table = builder.build();
    let mut theme = Theme::from(Style::modern_rounded());
    let separator = HorizontalLine::new(Some('─'), Some('┼'), Some('├'), Some('┤'));

    theme.remove_horizontal_lines();
    theme.insert_horizontal_line(1, separator);

    table.with(theme);
    table.modify(Rows::first(), Color::BOLD);
    table.modify(Columns::new(numeric), Alignment::right());

    writeln!(out, "{table}")?;

    Ok(())
}
