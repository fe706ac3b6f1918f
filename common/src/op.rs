use serde::Deserialize;

// these 2 enums don't depend on anything in `syntax`, so they live here with `Loc`
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Deserialize)]
pub enum BinOp { Add, Sub, Mul, Div, Lt, Le, Eq, And, Or }

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Deserialize)]
pub enum UnOp { Neg, Not }

impl BinOp {
  // an operator style string, used in error payloads
  pub fn to_op_str(self) -> &'static str {
    use BinOp::*;
    match self { Add => "+", Sub => "-", Mul => "*", Div => "/", Lt => "<", Le => "<=", Eq => "==", And => "and", Or => "or" }
  }
}

impl UnOp {
  pub fn to_op_str(self) -> &'static str {
    match self { UnOp::Neg => "-", UnOp::Not => "not" }
  }
}
