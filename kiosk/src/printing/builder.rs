//! Plain-text layout builder
//!
//! Fluent API for building fixed-width terminal and file output.

/// Display width of a string (one column per char)
pub fn text_width(s: &str) -> usize {
    s.chars().count()
}

/// Pad a string to `width` columns
///
/// Longer strings are kept whole, so a column can overflow into the next one.
pub fn pad(s: &str, width: usize, align_right: bool) -> String {
    let current = text_width(s);
    if current >= width {
        return s.to_string();
    }
    let spaces = " ".repeat(width - current);
    if align_right {
        format!("{}{}", spaces, s)
    } else {
        format!("{}{}", s, spaces)
    }
}

/// String-based text builder
///
/// Accumulates lines into a `String`; separators span the configured width.
pub struct TextBuilder {
    buf: String,
    width: usize,
}

impl TextBuilder {
    /// Create a new builder with the separator width in characters
    pub fn new(width: usize) -> Self {
        Self {
            buf: String::new(),
            width,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    // === Text Output ===

    /// Write raw text
    pub fn write(&mut self, s: &str) -> &mut Self {
        self.buf.push_str(s);
        self
    }

    /// Write text followed by newline
    pub fn write_line(&mut self, s: &str) -> &mut Self {
        self.buf.push_str(s);
        self.buf.push('\n');
        self
    }

    pub fn newline(&mut self) -> &mut Self {
        self.buf.push('\n');
        self
    }

    /// Left-aligned cell padded to `width`
    pub fn cell(&mut self, s: &str, width: usize) -> &mut Self {
        let padded = pad(s, width, false);
        self.write(&padded)
    }

    /// Right-aligned cell padded to `width`
    pub fn cell_right(&mut self, s: &str, width: usize) -> &mut Self {
        let padded = pad(s, width, true);
        self.write(&padded)
    }

    // === Separators ===

    /// Print a line of '-' characters
    pub fn dash_sep(&mut self) -> &mut Self {
        self.write_line(&"-".repeat(self.width))
    }

    /// Print a line of '*' characters
    pub fn star_sep(&mut self) -> &mut Self {
        self.write_line(&"*".repeat(self.width))
    }

    /// Title between two '*' separators
    pub fn banner(&mut self, title: &str) -> &mut Self {
        self.star_sep();
        self.write_line(title);
        self.star_sep()
    }

    // === Layout Helpers ===

    /// Print left and right text on the same line
    ///
    /// Left text is left-aligned, right text is right-aligned,
    /// with spaces filling the gap.
    pub fn line_lr(&mut self, left: &str, right: &str) -> &mut Self {
        let lw = text_width(left);
        let rw = text_width(right);

        if lw + rw >= self.width {
            self.write(left);
            self.write(" ");
            self.write_line(right)
        } else {
            let spaces = self.width - lw - rw;
            self.write(left);
            self.write(&" ".repeat(spaces));
            self.write_line(right)
        }
    }

    // === Build ===

    pub fn build(self) -> String {
        self.buf
    }
}

impl Default for TextBuilder {
    fn default() -> Self {
        Self::new(42)
    }
}
