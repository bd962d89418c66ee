use crate::Sequence;
use core::fmt::{Display, Formatter, Result};

#[cfg(feature = "color")]
use anstyle::{AnsiColor, Color, Style};

/// Struct used to adjust the formatting of a [`Sequence`]
///
/// Without color the output is exactly the text the sequence was built from.
#[derive(Debug)]
pub struct SequenceFormatter {
    #[cfg(feature = "color")]
    with_color: bool,
    #[cfg(feature = "color")]
    element: Style,
}

impl SequenceFormatter {
    /// Construct a new formatter
    pub fn new() -> Self {
        Self {
            #[cfg(feature = "color")]
            with_color: false,
            #[cfg(feature = "color")]
            element: Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))),
        }
    }

    /// Enable formatting a sequence with color
    #[cfg(feature = "color")]
    pub fn with_color(mut self) -> Self {
        self.with_color = true;
        self
    }

    /// Style applied to every element when color is enabled
    #[cfg(feature = "color")]
    pub fn set_style(&mut self, style: Style) -> &mut Self {
        self.element = style;
        self
    }

    /// Returns a `Display` impl which can be used to print a Sequence
    pub fn fmt_sequence<'a>(&'a self, sequence: &'a Sequence<'a>) -> impl Display + 'a {
        SequenceDisplay { f: self, sequence }
    }

    #[cfg(feature = "color")]
    fn fmt_element(&self, f: &mut Formatter<'_>, element: &str) -> Result {
        // Elements are styled one at a time so a line separator never carries the style over
        if self.with_color && !element.is_empty() {
            write!(
                f,
                "{}{}{}",
                self.element.render(),
                element,
                self.element.render_reset()
            )
        } else {
            f.write_str(element)
        }
    }

    #[cfg(not(feature = "color"))]
    fn fmt_element(&self, f: &mut Formatter<'_>, element: &str) -> Result {
        f.write_str(element)
    }
}

impl Default for SequenceFormatter {
    fn default() -> Self {
        Self::new()
    }
}

struct SequenceDisplay<'a> {
    f: &'a SequenceFormatter,
    sequence: &'a Sequence<'a>,
}

impl Display for SequenceDisplay<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let separator = self.sequence.kind().separator();

        for (idx, element) in self.sequence.iter().enumerate() {
            if idx > 0 {
                f.write_str(separator)?;
            }
            self.f.fmt_element(f, element)?;
        }

        Ok(())
    }
}
