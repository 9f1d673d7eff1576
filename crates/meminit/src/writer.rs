// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! Line-based writer for generated Verilog, indenting with tabs.

/// Accumulates Verilog text, inserting one tab per indentation level at the
/// start of every non-empty line.
#[derive(Debug)]
pub struct VerilogWriter {
    out: String,
    indent: usize,
    at_line_start: bool,
}

impl Default for VerilogWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl VerilogWriter {
    pub fn new() -> Self {
        Self {
            out: String::new(),
            indent: 0,
            at_line_start: true,
        }
    }

    /// Write a string, handling indentation at line starts.
    pub fn write(&mut self, s: &str) {
        for c in s.chars() {
            if c == '\n' {
                self.out.push('\n');
                self.at_line_start = true;
            } else {
                if self.at_line_start {
                    for _ in 0..self.indent {
                        self.out.push('\t');
                    }
                }
                self.at_line_start = false;
                self.out.push(c);
            }
        }
    }

    /// Write a complete line (adds newline at end).
    pub fn line(&mut self, s: &str) {
        self.write(s);
        self.newline();
    }

    /// Convenience method to avoid `w.line(&format!(...))`.
    pub fn line_fmt(&mut self, args: std::fmt::Arguments<'_>) {
        self.line(&args.to_string());
    }

    pub fn newline(&mut self) {
        self.write("\n");
    }

    pub fn indent(&mut self) {
        self.indent += 1;
    }

    pub fn dedent(&mut self) {
        self.indent = self.indent.saturating_sub(1);
    }

    pub fn into_inner(self) -> String {
        self.out
    }
}

pub fn render_to_string<F>(f: F) -> String
where
    F: FnOnce(&mut VerilogWriter),
{
    let mut writer = VerilogWriter::new();
    f(&mut writer);
    writer.into_inner()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indentation_uses_tabs() {
        let out = render_to_string(|w| {
            w.line("begin");
            w.indent();
            w.line("a = 1;");
            w.indent();
            w.line_fmt(format_args!("b = {};", 2));
            w.dedent();
            w.dedent();
            w.write("end");
        });
        assert_eq!(out, "begin\n\ta = 1;\n\t\tb = 2;\nend");
    }

    #[test]
    fn test_blank_lines_are_not_indented() {
        let out = render_to_string(|w| {
            w.indent();
            w.newline();
            w.line("x");
        });
        assert_eq!(out, "\n\tx\n");
    }

    #[test]
    fn test_dedent_saturates() {
        let out = render_to_string(|w| {
            w.dedent();
            w.line("top");
        });
        assert_eq!(out, "top\n");
    }
}
