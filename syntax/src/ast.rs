use crate::ty::*;
use common::{Loc, BinOp, UnOp};
use serde::Deserialize;
use std::cell::Cell;

// the parser hands the tree over as json, the shape is never changed after that
// all Cell<Option<...>> fields are annotations, they are left empty by the parser and filled in by typeck

#[derive(Deserialize)]
pub struct Program<'a> {
  #[serde(borrow)]
  pub class: Vec<ClassDef<'a>>,
}

#[derive(Deserialize)]
pub struct ClassDef<'a> {
  #[serde(default)]
  pub loc: Loc,
  pub name: &'a str,
  #[serde(borrow, default)]
  pub parent: Option<&'a str>,
  #[serde(borrow, default)]
  pub field: Vec<VarDef<'a>>,
  #[serde(borrow, default)]
  pub method: Vec<MethodDef<'a>>,
}

#[derive(Deserialize)]
pub struct MethodDef<'a> {
  #[serde(default)]
  pub loc: Loc,
  pub name: &'a str,
  #[serde(borrow, default)]
  pub param: Vec<ParamDef<'a>>,
  #[serde(borrow)]
  pub ret: SynTy<'a>,
  #[serde(borrow, default)]
  pub body: MethodBody<'a>,
}

impl MethodDef<'_> {
  // a method named like its class is its constructor
  pub fn is_constructor(&self, class: &str) -> bool { self.name == class }
}

#[derive(Deserialize)]
pub struct ParamDef<'a> {
  #[serde(default)]
  pub loc: Loc,
  pub name: &'a str,
  #[serde(borrow)]
  pub syn_ty: SynTy<'a>,
  #[serde(skip)]
  pub ty: Cell<Option<Ty<'a>>>,
}

// `a, b: Integer;` declares every name in `name` with the same type
#[derive(Deserialize)]
pub struct VarDef<'a> {
  #[serde(default)]
  pub loc: Loc,
  #[serde(borrow)]
  pub name: Vec<&'a str>,
  #[serde(borrow)]
  pub syn_ty: SynTy<'a>,
  #[serde(skip)]
  pub ty: Cell<Option<Ty<'a>>>,
}

// declarations come first, the only return statement comes last
#[derive(Deserialize, Default)]
pub struct MethodBody<'a> {
  #[serde(borrow, default)]
  pub var: Vec<VarDef<'a>>,
  #[serde(borrow, default)]
  pub stmt: Vec<Stmt<'a>>,
  #[serde(borrow, default)]
  pub ret: Option<Return<'a>>,
}

#[derive(Deserialize)]
pub struct Return<'a> {
  #[serde(default)]
  pub loc: Loc,
  #[serde(borrow)]
  pub expr: Expr<'a>,
  #[serde(skip)]
  pub ty: Cell<Option<Ty<'a>>>,
}

#[derive(Deserialize)]
pub struct Stmt<'a> {
  #[serde(default)]
  pub loc: Loc,
  #[serde(borrow)]
  pub kind: StmtKind<'a>,
  // only Assign (type of the target) and Print (type of the printed value) have one
  #[serde(skip)]
  pub ty: Cell<Option<Ty<'a>>>,
}

#[derive(Deserialize)]
pub enum StmtKind<'a> {
  Assign(#[serde(borrow)] Assign<'a>),
  // the grammar only allows a method call here
  ExprEval(#[serde(borrow)] Expr<'a>),
  If(#[serde(borrow)] Box<If<'a>>),
  While(#[serde(borrow)] While<'a>),
  Repeat(#[serde(borrow)] Repeat<'a>),
  Print(#[serde(borrow)] Expr<'a>),
}

#[derive(Deserialize)]
pub struct Assign<'a> {
  #[serde(borrow)]
  pub dst: VarSel<'a>,
  #[serde(borrow)]
  pub src: Expr<'a>,
}

#[derive(Deserialize)]
pub struct If<'a> {
  #[serde(borrow)]
  pub cond: Expr<'a>,
  #[serde(borrow, default)]
  pub on_true: Vec<Stmt<'a>>,
  #[serde(borrow, default)]
  pub on_false: Option<Vec<Stmt<'a>>>,
}

#[derive(Deserialize)]
pub struct While<'a> {
  #[serde(borrow)]
  pub cond: Expr<'a>,
  #[serde(borrow, default)]
  pub body: Vec<Stmt<'a>>,
}

// repeat { body } until (cond);
#[derive(Deserialize)]
pub struct Repeat<'a> {
  #[serde(borrow, default)]
  pub body: Vec<Stmt<'a>>,
  #[serde(borrow)]
  pub cond: Expr<'a>,
}

#[derive(Deserialize)]
pub struct Expr<'a> {
  #[serde(default)]
  pub loc: Loc,
  #[serde(borrow)]
  pub kind: ExprKind<'a>,
  #[serde(skip)]
  pub ty: Cell<Option<Ty<'a>>>,
}

#[derive(derive_more::From, Deserialize)]
pub enum ExprKind<'a> {
  VarSel(#[serde(borrow)] VarSel<'a>),
  Call(#[serde(borrow)] Call<'a>),
  Binary(#[serde(borrow)] Binary<'a>),
  Unary(#[serde(borrow)] Unary<'a>),
  NewClass(#[serde(borrow)] NewClass<'a>),
  IntLit(i32),
  BoolLit(bool),
}

// `name` or `owner.name`, the owner is always a plain identifier in this language
#[derive(Deserialize)]
pub struct VarSel<'a> {
  #[serde(borrow, default)]
  pub owner: Option<&'a str>,
  pub name: &'a str,
  // the class whose field table `name` was found in, None for locals and params
  #[serde(skip)]
  pub class: Cell<Option<&'a str>>,
}

#[derive(Deserialize)]
pub struct Call<'a> {
  #[serde(borrow, default)]
  pub owner: Option<&'a str>,
  pub name: &'a str,
  #[serde(borrow, default)]
  pub arg: Vec<Expr<'a>>,
  // the class that defines the called method
  #[serde(skip)]
  pub class: Cell<Option<&'a str>>,
}

#[derive(Deserialize)]
pub struct Binary<'a> {
  pub op: BinOp,
  #[serde(borrow)]
  pub l: Box<Expr<'a>>,
  #[serde(borrow)]
  pub r: Box<Expr<'a>>,
}

#[derive(Deserialize)]
pub struct Unary<'a> {
  pub op: UnOp,
  #[serde(borrow)]
  pub r: Box<Expr<'a>>,
}

#[derive(Deserialize)]
pub struct NewClass<'a> {
  pub name: &'a str,
}
