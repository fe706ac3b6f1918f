pub mod ast;
pub mod ty;
pub mod symbol;

pub use ast::*;
pub use ty::*;
pub use symbol::*;

// below are some helper functions for whoever builds the tree in rust code instead of reading json

use common::Loc;

// save a little typing than writing "Default::default()"
pub fn dft<T: Default>() -> T { T::default() }

pub fn mk_stmt<'a>(loc: Loc, kind: StmtKind<'a>) -> Stmt<'a> { Stmt { loc, kind, ty: dft() } }

pub fn mk_expr<'a>(loc: Loc, kind: ExprKind<'a>) -> Expr<'a> { Expr { loc, kind, ty: dft() } }

pub fn mk_syn_ty(loc: Loc, kind: SynTyKind) -> SynTy { SynTy { loc, kind } }

#[cfg(test)]
mod tests {
  use super::*;
  use common::BinOp;

  #[test]
  fn program_from_json() {
    let src = r#"{"class": [
      {"name": "A", "field": [{"name": ["b"], "syn_ty": {"kind": "Int"}}],
       "method": [{"loc": [2, 3], "name": "foo", "param": [{"name": "x", "syn_ty": {"kind": "Int"}}], "ret": {"kind": "Int"},
                   "body": {"ret": {"expr": {"kind": {"Binary": {"op": "Add",
                     "l": {"kind": {"VarSel": {"name": "x"}}}, "r": {"kind": {"VarSel": {"name": "b"}}}}}}}}}]},
      {"name": "Main", "parent": "A", "method": [{"name": "main", "ret": {"kind": "None"}}]}
    ]}"#;
    let p: Program = serde_json::from_str(src).unwrap();
    assert_eq!(p.class.len(), 2);
    let (a, main) = (&p.class[0], &p.class[1]);
    assert_eq!((a.name, a.parent, main.parent), ("A", None, Some("A")));
    assert_eq!(a.field[0].name, ["b"]);
    let foo = &a.method[0];
    assert_eq!((foo.loc, foo.param.len()), (Loc(2, 3), 1));
    match &foo.body.ret.as_ref().unwrap().expr.kind {
      ExprKind::Binary(b) => assert_eq!(b.op, BinOp::Add),
      _ => panic!("expect a binary expression"),
    }
    assert!(foo.body.ret.as_ref().unwrap().expr.ty.get().is_none());
    assert!(main.method[0].body.stmt.is_empty() && main.method[0].ret.kind == SynTyKind::None);
  }

  #[test]
  fn constructor_naming() {
    let m = MethodDef { loc: dft(), name: "A", param: vec![], ret: mk_syn_ty(dft(), SynTyKind::None), body: dft() };
    assert!(m.is_constructor("A") && !m.is_constructor("B"));
  }

  #[test]
  fn literal_into_expr_kind() {
    let e = mk_expr(Loc(1, 1), 3i32.into());
    assert!(matches!(e.kind, ExprKind::IntLit(3)));
    let e = mk_expr(Loc(1, 1), true.into());
    assert!(matches!(e.kind, ExprKind::BoolLit(true)));
  }
}
