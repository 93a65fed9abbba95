//! Printing of collected diagnostics while the walk runs.

use std::io::{self, Write};

use engine::{FileTransform, RunStats, TransformOutcome, TransformRequest};
use logging::DiagnosticEvent;

use crate::defaults::PROGRAM_NAME;

/// Wraps a transform and prints the buffered diagnostics around every file.
///
/// Events queued by the walker before a file and by the transform while it
/// runs are written as soon as the call returns, so long runs report
/// progress file by file. After the first failed write nothing more is
/// printed and [`Self::finish`] reports the failure.
pub(crate) struct FlushingTransform<'a, T, Out, Err> {
    inner: T,
    stdout: &'a mut Out,
    stderr: &'a mut Err,
    write_failed: bool,
}

impl<'a, T, Out, Err> FlushingTransform<'a, T, Out, Err>
where
    Out: Write,
    Err: Write,
{
    pub(crate) fn new(inner: T, stdout: &'a mut Out, stderr: &'a mut Err) -> Self {
        Self {
            inner,
            stdout,
            stderr,
            write_failed: false,
        }
    }

    /// Prints what is left in the buffer and returns `false` if any write
    /// failed during the run.
    pub(crate) fn finish(mut self) -> bool {
        self.flush();
        !self.write_failed
    }

    fn flush(&mut self) {
        let events = logging::drain_events();
        if self.write_failed {
            return;
        }
        if write_events(&events, &mut *self.stdout, &mut *self.stderr).is_err() {
            self.write_failed = true;
        }
    }
}

impl<T, Out, Err> FileTransform for FlushingTransform<'_, T, Out, Err>
where
    T: FileTransform,
    Out: Write,
    Err: Write,
{
    fn apply(
        &mut self,
        request: &TransformRequest<'_>,
        stats: &mut RunStats,
    ) -> io::Result<TransformOutcome> {
        self.flush();
        let outcome = self.inner.apply(request, stats);
        self.flush();
        outcome
    }
}

/// Writes error events to `stderr` with the program prefix and the rest to
/// `stdout`.
pub(crate) fn write_events<Out: Write, Err: Write>(
    events: &[DiagnosticEvent],
    stdout: &mut Out,
    stderr: &mut Err,
) -> io::Result<()> {
    for event in events {
        if event.is_error() {
            writeln!(stderr, "{PROGRAM_NAME}: {}", event.message)?;
        } else {
            writeln!(stdout, "{}", event.message)?;
        }
    }
    stdout.flush()?;
    stderr.flush()
}
