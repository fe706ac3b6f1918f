use crate::INDENT_STR;
use std::fmt;

// line-oriented text builder, every `line` is prefixed with the current indentation
#[derive(Default)]
pub struct IndentPrinter {
  depth: u32,
  content: String,
}

impl IndentPrinter {
  #[inline(always)]
  pub fn indent(&mut self, f: impl FnOnce(&mut IndentPrinter)) {
    self.depth += 1;
    f(self);
    self.depth -= 1;
  }

  // multi-line text is split, so that each line gets its own indentation
  pub fn line(&mut self, text: impl fmt::Display) {
    for l in text.to_string().lines() {
      for _ in 0..self.depth { self.content += INDENT_STR; }
      self.content += l;
      self.content.push('\n');
    }
  }

  pub fn finish(self) -> String { self.content }
}
