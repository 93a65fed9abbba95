//! Line splitting with per-delimiter accounting.

use crate::options::LineSeparator;

/// Delimiter that terminated a line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LineEnding {
    /// `\r` not followed by `\n`.
    Cr,
    /// `\n` not preceded by `\r`.
    Lf,
    /// `\r\n`.
    CrLf,
    /// Final line without a delimiter.
    None,
}

impl LineEnding {
    /// Maps the ending to a separator. [`LineEnding::None`] has none.
    #[must_use]
    pub const fn separator(self) -> Option<LineSeparator> {
        match self {
            Self::Cr => Some(LineSeparator::Cr),
            Self::Lf => Some(LineSeparator::Lf),
            Self::CrLf => Some(LineSeparator::CrLf),
            Self::None => None,
        }
    }

    /// Returns the delimiter bytes as they appeared in the input.
    #[must_use]
    pub const fn as_bytes(self) -> &'static [u8] {
        match self.separator() {
            Some(separator) => separator.as_bytes(),
            None => b"",
        }
    }
}

/// One line of input, borrowed from the buffer it was split from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Line<'a> {
    content: &'a [u8],
    ending: LineEnding,
}

impl<'a> Line<'a> {
    /// Line bytes without the delimiter.
    #[must_use]
    pub const fn content(&self) -> &'a [u8] {
        self.content
    }

    /// The delimiter that ended the line.
    #[must_use]
    pub const fn ending(&self) -> LineEnding {
        self.ending
    }
}

/// Counts of each delimiter seen in a buffer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LineEndingStats {
    /// Lone `\r` delimiters.
    pub cr: usize,
    /// Lone `\n` delimiters.
    pub lf: usize,
    /// `\r\n` pairs.
    pub crlf: usize,
}

impl LineEndingStats {
    fn record(&mut self, ending: LineEnding) {
        match ending {
            LineEnding::Cr => self.cr += 1,
            LineEnding::Lf => self.lf += 1,
            LineEnding::CrLf => self.crlf += 1,
            LineEnding::None => {}
        }
    }

    /// The buffer's convention when exactly one delimiter kind occurs.
    ///
    /// Returns `None` for a buffer without delimiters and for one that mixes
    /// kinds.
    #[must_use]
    pub const fn detected(&self) -> Option<LineSeparator> {
        match (self.cr > 0, self.lf > 0, self.crlf > 0) {
            (true, false, false) => Some(LineSeparator::Cr),
            (false, true, false) => Some(LineSeparator::Lf),
            (false, false, true) => Some(LineSeparator::CrLf),
            _ => None,
        }
    }

    /// Reports whether more than one delimiter kind occurs.
    #[must_use]
    pub const fn is_mixed(&self) -> bool {
        (self.cr > 0) as u8 + (self.lf > 0) as u8 + (self.crlf > 0) as u8 > 1
    }
}

/// Splits `bytes` into lines in a single pass.
///
/// `\r\n` is one delimiter; a lone `\r` or `\n` is one delimiter each. Trailing
/// bytes after the last delimiter form a final line ending in
/// [`LineEnding::None`]. Empty input yields no lines.
///
/// ```
/// use normalize::{LineEnding, split_lines};
///
/// let (lines, stats) = split_lines(b"a\r\nb\rc");
/// let endings: Vec<_> = lines.iter().map(|line| line.ending()).collect();
/// assert_eq!(endings, [LineEnding::CrLf, LineEnding::Cr, LineEnding::None]);
/// assert_eq!((stats.cr, stats.lf, stats.crlf), (1, 0, 1));
/// ```
#[must_use]
pub fn split_lines(bytes: &[u8]) -> (Vec<Line<'_>>, LineEndingStats) {
    let mut lines = Vec::new();
    let mut stats = LineEndingStats::default();
    let mut start = 0;

    while let Some(offset) = bytes[start..]
        .iter()
        .position(|&byte| byte == b'\r' || byte == b'\n')
    {
        let end = start + offset;
        let (ending, width) = match (bytes[end], bytes.get(end + 1)) {
            (b'\r', Some(b'\n')) => (LineEnding::CrLf, 2),
            (b'\r', _) => (LineEnding::Cr, 1),
            _ => (LineEnding::Lf, 1),
        };
        stats.record(ending);
        lines.push(Line {
            content: &bytes[start..end],
            ending,
        });
        start = end + width;
    }

    if start < bytes.len() {
        lines.push(Line {
            content: &bytes[start..],
            ending: LineEnding::None,
        });
    }

    (lines, stats)
}
