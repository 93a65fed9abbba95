//! Normalisation settings.

use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;

use thiserror::Error;

/// Tab width used when no width is configured.
pub const DEFAULT_TAB_WIDTH: usize = 4;

/// Widest accepted tab width.
pub const MAX_TAB_WIDTH: usize = 256;

/// Distance between tab stops, in columns, within `1..=MAX_TAB_WIDTH`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TabWidth(NonZeroUsize);

/// Error returned for a tab width outside `1..=MAX_TAB_WIDTH`.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("tab size must be between 1 and {}", MAX_TAB_WIDTH)]
pub struct InvalidTabWidth;

impl TabWidth {
    /// Creates a width, rejecting zero and anything above [`MAX_TAB_WIDTH`].
    #[must_use]
    pub const fn new(columns: usize) -> Option<Self> {
        if columns > MAX_TAB_WIDTH {
            return None;
        }
        match NonZeroUsize::new(columns) {
            Some(columns) => Some(Self(columns)),
            None => None,
        }
    }

    /// Returns the width in columns.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for TabWidth {
    fn default() -> Self {
        Self(NonZeroUsize::MIN.saturating_add(DEFAULT_TAB_WIDTH - 1))
    }
}

impl TryFrom<usize> for TabWidth {
    type Error = InvalidTabWidth;

    fn try_from(columns: usize) -> Result<Self, Self::Error> {
        Self::new(columns).ok_or(InvalidTabWidth)
    }
}

/// How leading whitespace is written back.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IndentStyle {
    /// Spaces only.
    #[default]
    Spaces,
    /// As many tabs as fit, then spaces for the remainder.
    Tabs,
}

/// One of the three recognised line delimiters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LineSeparator {
    /// `\r`, classic Mac OS.
    Cr,
    /// `\n`, Unix.
    Lf,
    /// `\r\n`, Windows.
    CrLf,
}

impl LineSeparator {
    /// Accepted spellings, upper case.
    pub const NAMES: [&'static str; 6] = ["CR", "LF", "CRLF", "MAC", "UNIX", "WINDOWS"];

    /// Returns the delimiter bytes.
    #[must_use]
    pub const fn as_bytes(self) -> &'static [u8] {
        match self {
            Self::Cr => b"\r",
            Self::Lf => b"\n",
            Self::CrLf => b"\r\n",
        }
    }

    /// The delimiter of the platform this binary was built for.
    #[must_use]
    pub const fn native() -> Self {
        if cfg!(windows) { Self::CrLf } else { Self::Lf }
    }
}

impl fmt::Display for LineSeparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Cr => "CR",
            Self::Lf => "LF",
            Self::CrLf => "CRLF",
        })
    }
}

/// Error returned for an unknown line-separator name.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("line separator must be one of 'CR', 'LF', 'CRLF', 'MAC', 'UNIX', 'WINDOWS', not '{0}'")]
pub struct ParseLineSeparatorError(String);

impl FromStr for LineSeparator {
    type Err = ParseLineSeparatorError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_uppercase().as_str() {
            "CR" | "MAC" => Ok(Self::Cr),
            "LF" | "UNIX" => Ok(Self::Lf),
            "CRLF" | "WINDOWS" => Ok(Self::CrLf),
            _ => Err(ParseLineSeparatorError(value.to_string())),
        }
    }
}

/// Settings for [`normalize_bytes`](crate::normalize_bytes).
///
/// ```
/// use normalize::{IndentStyle, LineSeparator, NormalizeOptions, TabWidth};
///
/// let options = NormalizeOptions::new()
///     .tab_width(TabWidth::new(8).unwrap())
///     .indent_style(IndentStyle::Tabs)
///     .line_separator(Some(LineSeparator::Lf));
/// assert_eq!(options.input_tab_width_value().get(), 8);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NormalizeOptions {
    tab_width: TabWidth,
    input_tab_width: Option<TabWidth>,
    indent_style: IndentStyle,
    line_separator: Option<LineSeparator>,
}

impl NormalizeOptions {
    /// Spaces, tab width 4, delimiter kept from the input.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the output tab width.
    #[must_use]
    #[doc(alias = "--tab-size")]
    pub const fn tab_width(mut self, width: TabWidth) -> Self {
        self.tab_width = width;
        self
    }

    /// Sets the tab width assumed for input files. `None` means the output
    /// width.
    #[must_use]
    #[doc(alias = "--input-tab-size")]
    pub const fn input_tab_width(mut self, width: Option<TabWidth>) -> Self {
        self.input_tab_width = width;
        self
    }

    /// Selects spaces or tabs for indentation.
    #[must_use]
    #[doc(alias = "--tabbify")]
    pub const fn indent_style(mut self, style: IndentStyle) -> Self {
        self.indent_style = style;
        self
    }

    /// Forces the output delimiter. `None` keeps the input's delimiter.
    #[must_use]
    #[doc(alias = "--line-separator")]
    pub const fn line_separator(mut self, separator: Option<LineSeparator>) -> Self {
        self.line_separator = separator;
        self
    }

    /// Returns the output tab width.
    #[must_use]
    pub const fn tab_width_value(&self) -> TabWidth {
        self.tab_width
    }

    /// Returns the effective input tab width.
    #[must_use]
    pub const fn input_tab_width_value(&self) -> TabWidth {
        match self.input_tab_width {
            Some(width) => width,
            None => self.tab_width,
        }
    }

    /// Returns the indentation style.
    #[must_use]
    pub const fn indent_style_value(&self) -> IndentStyle {
        self.indent_style
    }

    /// Returns the forced delimiter, if any.
    #[must_use]
    pub const fn line_separator_value(&self) -> Option<LineSeparator> {
        self.line_separator
    }
}
