pub mod test_util;

use common::IndentPrinter;
use syntax::Program;
use typeck::TypeCkCfg;
use std::{fmt, process};
use tracing::debug;

pub use test_util::*;

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum Stage { Check, Table }

#[derive(Copy, Clone, Debug)]
pub struct CompileCfg {
  pub stage: Stage,
  pub typeck: TypeCkCfg,
}

impl Default for CompileCfg {
  fn default() -> Self { CompileCfg { stage: Stage::Check, typeck: TypeCkCfg::default() } }
}

// the input is not a well-formed tree at all, or the tree is rejected by typeck
#[derive(derive_more::From)]
pub enum CompileError<'a> {
  Input(serde_json::Error),
  TypeCk(typeck::Error<'a>),
}

impl fmt::Debug for CompileError<'_> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self {
      CompileError::Input(e) => write!(f, "*** Error: malformed input: {}", e),
      CompileError::TypeCk(e) => e.fmt(f),
    }
  }
}

// `code` is the json form of a `syntax::Program`
// on success returns what the stage prints: nothing for `Check`, the class table dump for `Table`
pub fn compile(code: &str, cfg: CompileCfg) -> Result<String, CompileError> {
  let pr: Program = serde_json::from_str(code)?;
  debug!(classes = pr.class.len(), "input parsed");
  let table = typeck::work(&pr, cfg.typeck)?;
  Ok(match cfg.stage {
    Stage::Check => String::new(),
    Stage::Table => {
      let mut p = IndentPrinter::default();
      print::table::class_table(&table, &mut p);
      p.finish()
    }
  })
}

// one line on stderr, then a non-zero exit
pub fn report(e: CompileError) -> ! {
  eprintln!("{:?}", e);
  process::exit(1)
}

#[cfg(test)]
mod tests {
  use super::*;
  use common::{ErrorKind, Loc};
  use syntax::Ty;

  const SIMPLE: &str = r#"{"class": [
    {"name": "Main", "method": [{"name": "main", "ret": {"kind": "None"},
      "body": {"var": [{"name": ["n"], "syn_ty": {"kind": "Int"}}],
               "stmt": [{"loc": [3, 5], "kind": {"Assign": {"dst": {"name": "n"}, "src": {"loc": [3, 9], "kind": {"BoolLit": true}}}}}]}}]}
  ]}"#;

  #[test]
  fn check_stage_prints_nothing() {
    let ok = r#"{"class": [{"name": "Main", "method": [{"name": "main", "ret": {"kind": "None"}}]}]}"#;
    assert_eq!(compile(ok, CompileCfg::default()).unwrap(), "");
    let out = compile(ok, CompileCfg { stage: Stage::Table, ..CompileCfg::default() }).unwrap();
    assert!(out.starts_with("CLASS TABLE:\n    CLASS 'Main', size 0\n"));
  }

  #[test]
  fn typeck_error_passes_through() {
    match compile(SIMPLE, CompileCfg::default()) {
      Err(CompileError::TypeCk(e)) => {
        assert_eq!(e.0, Loc(3, 5));
        assert!(e.1 == ErrorKind::AssignMismatch { l: Ty::Int, r: Ty::Bool });
        assert_eq!(format!("{:?}", e), "*** Error at (3,5): Left and right hand sides of assignment types mismatch.");
      }
      _ => panic!("expect a typeck error"),
    }
  }

  #[test]
  fn malformed_input() {
    let e = compile(r#"{"class": 1}"#, CompileCfg::default()).unwrap_err();
    assert!(matches!(e, CompileError::Input(_)));
    assert!(format!("{:?}", e).starts_with("*** Error: malformed input: "));
  }
}
