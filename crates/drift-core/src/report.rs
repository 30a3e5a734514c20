//! Human-readable drift report

use std::io::{self, Write};

use crate::diff::DiffResult;

/// Write the drift report for `file_name`. Empty groups are omitted.
pub fn write_report<W: Write + ?Sized>(out: &mut W, file_name: &str, diff: &DiffResult) -> io::Result<()> {
    writeln!(out, "Your {} file structure is outdated.", file_name)?;
    write_group(out, "Added parameters:", '+', &diff.added)?;
    write_group(out, "Removed parameters:", '-', &diff.removed)?;
    write_group(out, "Modified parameters:", '*', &diff.modified)?;
    Ok(())
}

fn write_group<W: Write + ?Sized>(out: &mut W, header: &str, marker: char, paths: &[String]) -> io::Result<()> {
    if paths.is_empty() {
        return Ok(());
    }
    writeln!(out, "{}", header)?;
    for path in paths {
        writeln!(out, "  {} {}", marker, path)?;
    }
    Ok(())
}

pub fn write_applied<W: Write + ?Sized>(out: &mut W, file_name: &str) -> io::Result<()> {
    writeln!(out, "{} has been updated with the new structure.", file_name)
}

pub fn write_declined<W: Write + ?Sized>(out: &mut W, file_name: &str) -> io::Result<()> {
    writeln!(
        out,
        "{} was not updated. Please manually update your file structure.",
        file_name
    )
}
