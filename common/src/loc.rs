use serde::Deserialize;
use std::fmt;

// Loc(line, column), counting from 1
// so 0 is invalid for both, and Loc(0, 0) means NO_LOC
// the parser serializes it as a 2-element array, and may omit it entirely
#[derive(Copy, Clone, Eq, PartialEq, Default, Ord, PartialOrd, Hash, Deserialize)]
pub struct Loc(pub u32, pub u32);

pub const NO_LOC: Loc = Loc(0, 0);

impl fmt::Debug for Loc {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "({},{})", self.0, self.1)
  }
}
