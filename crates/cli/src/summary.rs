//! End-of-run report.

use std::io::{self, Write};

use engine::RunStats;
use logging::VerbosityConfig;

/// Writes the report that follows a completed run.
///
/// Nothing is written unless `verbosity` shows the summary. The archive
/// location is added when a zip backup was created and `verbosity` allows it.
pub(crate) fn write_summary<W: Write>(
    out: &mut W,
    stats: &RunStats,
    dry_run: bool,
    verbosity: &VerbosityConfig,
) -> io::Result<()> {
    if verbosity.shows_archive()
        && let Some(archive) = stats.archive_path()
    {
        writeln!(out)?;
        writeln!(out, "Backup archive:\n    {}", archive.display())?;
    }

    if !verbosity.shows_summary() {
        return Ok(());
    }

    writeln!(out)?;
    writeln!(
        out,
        "Modified {}/{} lines, {}/{} files in {} folders, skipped: {}",
        stats.lines_modified,
        stats.lines_processed,
        stats.files_modified,
        stats.files_processed,
        stats.dirs_processed,
        stats.files_skipped,
    )?;
    writeln!(
        out,
        "         {} bytes -> {} bytes ({:+}%), elapsed: {:.3} sec",
        stats.bytes_read,
        stats.bytes_written_if_unmodified,
        stats.compression_percent().trunc() as i64,
        stats.elapsed.as_secs_f64(),
    )?;

    if dry_run {
        writeln!(out, "\n*** Dry-run mode: no files have been modified! ***\n")?;
    }
    Ok(())
}
