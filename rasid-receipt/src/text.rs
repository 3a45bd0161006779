//! Plain-text line builder
//!
//! Provides a fluent-ish API for building fixed-width receipt text.
//! Width is measured in characters; receipts here are ASCII plus the
//! rupee sign, so character count is the display width.

/// Display width of a string in characters.
pub fn text_width(s: &str) -> usize {
    s.chars().count()
}

/// Truncate a string to at most `max_width` characters.
pub fn truncate_width(s: &str, max_width: usize) -> String {
    s.chars().take(max_width).collect()
}

/// Pad (or truncate) a string to exactly `width` characters.
pub fn pad_width(s: &str, width: usize, align_right: bool) -> String {
    let current = text_width(s);
    if current >= width {
        return truncate_width(s, width);
    }
    let spaces = width - current;
    if align_right {
        format!("{}{}", " ".repeat(spaces), s)
    } else {
        format!("{}{}", s, " ".repeat(spaces))
    }
}

/// Fixed-width text builder for receipt output
pub struct TextBuilder {
    buf: String,
    width: usize,
}

impl TextBuilder {
    /// Create a new builder with the paper width in characters
    ///
    /// Common widths:
    /// - 58mm paper: 32 characters
    /// - 80mm paper: 48 characters
    pub fn new(width: usize) -> Self {
        Self {
            buf: String::with_capacity(1024),
            width,
        }
    }

    /// Get the configured paper width
    pub fn width(&self) -> usize {
        self.width
    }

    // === Basic Output ===

    pub fn write(&mut self, s: &str) -> &mut Self {
        self.buf.push_str(s);
        self
    }

    pub fn write_line(&mut self, s: &str) -> &mut Self {
        self.buf.push_str(s);
        self.buf.push('\n');
        self
    }

    pub fn blank_line(&mut self) -> &mut Self {
        self.buf.push('\n');
        self
    }

    // === Separators ===

    /// Print a line of '=' characters
    pub fn eq_sep(&mut self) -> &mut Self {
        let sep = "=".repeat(self.width);
        self.write_line(&sep)
    }

    /// Print a line of '-' characters
    pub fn dash_sep(&mut self) -> &mut Self {
        let sep = "-".repeat(self.width);
        self.write_line(&sep)
    }

    /// Print a line of '_' characters
    pub fn underscore_sep(&mut self) -> &mut Self {
        let sep = "_".repeat(self.width);
        self.write_line(&sep)
    }

    // === Layout Helpers ===

    /// Print text centered in the line width
    pub fn center_line(&mut self, s: &str) -> &mut Self {
        let w = text_width(s);
        if w >= self.width {
            return self.write_line(s);
        }
        let padding = " ".repeat((self.width - w) / 2);
        let line = format!("{padding}{s}");
        self.write_line(&line)
    }

    /// Print left and right text on the same line
    ///
    /// Left text is left-aligned, right text is right-aligned, with
    /// spaces filling the gap. Falls back to a single space between
    /// the two when the line is too long.
    pub fn line_lr(&mut self, left: &str, right: &str) -> &mut Self {
        let lw = text_width(left);
        let rw = text_width(right);
        if lw + rw >= self.width {
            let line = format!("{left} {right}");
            return self.write_line(&line);
        }
        let gap = " ".repeat(self.width - lw - rw);
        let line = format!("{left}{gap}{right}");
        self.write_line(&line)
    }

    /// Print a paragraph wrapped at the line width, breaking on spaces
    pub fn wrapped(&mut self, s: &str) -> &mut Self {
        let mut line = String::new();
        for word in s.split_whitespace() {
            let needed = if line.is_empty() {
                text_width(word)
            } else {
                text_width(&line) + 1 + text_width(word)
            };
            if needed > self.width && !line.is_empty() {
                let flushed = std::mem::take(&mut line);
                self.write_line(&flushed);
            }
            if !line.is_empty() {
                line.push(' ');
            }
            line.push_str(word);
        }
        if !line.is_empty() {
            self.write_line(&line);
        }
        self
    }

    pub fn finalize(self) -> String {
        self.buf
    }
}
