use common::Loc;
use serde::Deserialize;
use std::fmt;

// the type as it is written in the source, class names are not checked yet
#[derive(Eq, PartialEq, Deserialize)]
pub enum SynTyKind<'a> {
  Int,
  Bool,
  None,
  Named(#[serde(borrow)] &'a str),
}

#[derive(Eq, PartialEq, Deserialize)]
pub struct SynTy<'a> {
  #[serde(default)]
  pub loc: Loc,
  #[serde(borrow)]
  pub kind: SynTyKind<'a>,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BaseKind { Integer, Boolean, None, Object }

// `None` is only ever the return type of a method, no expression or variable has it
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub enum Ty<'a> {
  Int,
  Bool,
  None,
  Object(&'a str),
}

impl<'a> Ty<'a> {
  pub fn kind(&self) -> BaseKind {
    match self { Ty::Int => BaseKind::Integer, Ty::Bool => BaseKind::Boolean, Ty::None => BaseKind::None, Ty::Object(_) => BaseKind::Object }
  }
}

impl fmt::Debug for Ty<'_> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self {
      Ty::Int => write!(f, "Integer"),
      Ty::Bool => write!(f, "Boolean"),
      Ty::None => write!(f, "None"),
      Ty::Object(c) => write!(f, "Object({})", c),
    }
  }
}
