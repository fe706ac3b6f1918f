use crate::{loc::{Loc, NO_LOC}, MAIN_CLASS, MAIN_METHOD};
use std::fmt;

// the analysis stops at the first violation, so there is only ever one of these per run
#[derive(Clone, Eq, PartialEq)]
pub struct Error<'a, Ty>(pub Loc, pub ErrorKind<'a, Ty>);

pub type Result<'a, T, Ty> = std::result::Result<T, Error<'a, Ty>>;

// save some typing for `return issue(loc, Xxx)`, the return type is usually deduced
pub fn issue<'a, T, Ty>(loc: Loc, e: ErrorKind<'a, Ty>) -> Result<'a, T, Ty> {
  Err(Error(loc, e))
}

impl<Ty: fmt::Debug> fmt::Debug for Error<'_, Ty> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self.0 {
      NO_LOC => write!(f, "*** Error: {:?}", self.1),
      loc => write!(f, "*** Error at {:?}: {:?}", loc, self.1),
    }
  }
}

// the payloads are for callers that want to inspect the failure, the printed message only depends on the variant
#[derive(Clone, Eq, PartialEq)]
pub enum ErrorKind<'a, Ty> {
  UndefinedVar(&'a str),
  UndefinedMethod(&'a str),
  UndefinedClass(&'a str),
  UndefinedMember(&'a str),
  NotObject { name: &'a str, ty: Ty },
  ExprMismatch { op: &'static str },
  ArgcMismatch { name: &'a str, expect: u32, actual: u32 },
  ArgMismatch { name: &'a str, loc: u32, arg: Ty, param: Ty },
  WhileNotBool(Ty),
  RepeatNotBool(Ty),
  IfNotBool(Ty),
  AssignMismatch { l: Ty, r: Ty },
  ReturnMismatch { func: &'a str },
  ConstructorReturns(&'a str),
  NoMainClass,
  MainHasMembers,
  NoMainMethod,
  MainSignature,
  DuplicateClass(&'a str),
  CyclicInheritance(&'a str),
  NoneVar(&'a str),
}

impl<Ty> ErrorKind<'_, Ty> {
  // a stable name for each category, handy in logs and tests
  pub fn name(&self) -> &'static str {
    use ErrorKind::*;
    match self {
      UndefinedVar(_) => "undefined_variable",
      UndefinedMethod(_) => "undefined_method",
      UndefinedClass(_) => "undefined_class",
      UndefinedMember(_) => "undefined_member",
      NotObject { .. } => "not_object",
      ExprMismatch { .. } => "expression_type_mismatch",
      ArgcMismatch { .. } => "argument_number_mismatch",
      ArgMismatch { .. } => "argument_type_mismatch",
      WhileNotBool(_) => "while_predicate_type_mismatch",
      RepeatNotBool(_) => "repeat_predicate_type_mismatch",
      IfNotBool(_) => "if_predicate_type_mismatch",
      AssignMismatch { .. } => "assignment_type_mismatch",
      ReturnMismatch { .. } => "return_type_mismatch",
      ConstructorReturns(_) => "constructor_returns_type",
      NoMainClass => "no_main_class",
      MainHasMembers => "main_class_members_present",
      NoMainMethod => "no_main_method",
      MainSignature => "main_method_incorrect_signature",
      DuplicateClass(_) => "duplicate_class",
      CyclicInheritance(_) => "cyclic_inheritance",
      NoneVar(_) => "none_variable",
    }
  }
}

impl<Ty> fmt::Debug for ErrorKind<'_, Ty> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    use ErrorKind::*;
    match self {
      UndefinedVar(_) => write!(f, "Undefined variable."),
      UndefinedMethod(_) => write!(f, "Method does not exist."),
      UndefinedClass(_) => write!(f, "Class does not exist."),
      UndefinedMember(_) => write!(f, "Class member does not exist."),
      NotObject { .. } => write!(f, "Variable is not an object."),
      ExprMismatch { .. } => write!(f, "Expression types do not match."),
      ArgcMismatch { .. } => write!(f, "Method called with incorrect number of arguments."),
      ArgMismatch { .. } => write!(f, "Method called with argument of incorrect type."),
      WhileNotBool(_) => write!(f, "Predicate of while loop is not boolean."),
      RepeatNotBool(_) => write!(f, "Predicate of repeat loop is not boolean."),
      IfNotBool(_) => write!(f, "Predicate of if statement is not boolean."),
      AssignMismatch { .. } => write!(f, "Left and right hand sides of assignment types mismatch."),
      ReturnMismatch { .. } => write!(f, "Return statement type does not match declared return type."),
      ConstructorReturns(_) => write!(f, "Class constructor returns a value."),
      NoMainClass => write!(f, "The \"{}\" class was not found.", MAIN_CLASS),
      MainHasMembers => write!(f, "The \"{}\" class has members.", MAIN_CLASS),
      NoMainMethod => write!(f, "The \"{}\" class does not have a \"{}\" method.", MAIN_CLASS, MAIN_METHOD),
      MainSignature => write!(f, "The \"{}\" method of the \"{}\" class has an incorrect signature.", MAIN_METHOD, MAIN_CLASS),
      DuplicateClass(_) => write!(f, "Class is declared more than once."),
      CyclicInheritance(_) => write!(f, "Class inheritance is cyclic."),
      NoneVar(_) => write!(f, "Variable cannot have type None."),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::Loc;

  #[test]
  fn message_ignores_payload() {
    let a: ErrorKind<()> = ErrorKind::UndefinedVar("x");
    let b: ErrorKind<()> = ErrorKind::UndefinedVar("y");
    assert_eq!(format!("{:?}", a), format!("{:?}", b));
    assert_ne!(a, b);
  }

  #[test]
  fn error_line_format() {
    let e: Error<()> = Error(Loc(3, 7), ErrorKind::NoMainMethod);
    assert_eq!(format!("{:?}", e), "*** Error at (3,7): The \"Main\" class does not have a \"main\" method.");
    let e: Error<()> = Error(NO_LOC, ErrorKind::NoMainClass);
    assert_eq!(format!("{:?}", e), "*** Error: The \"Main\" class was not found.");
  }

  #[test]
  fn names_are_distinct() {
    let kinds: Vec<ErrorKind<()>> = vec![ErrorKind::WhileNotBool(()), ErrorKind::RepeatNotBool(()), ErrorKind::IfNotBool(())];
    let names = kinds.iter().map(|k| k.name()).collect::<Vec<_>>();
    assert_eq!(names, ["while_predicate_type_mismatch", "repeat_predicate_type_mismatch", "if_predicate_type_mismatch"]);
  }
}
