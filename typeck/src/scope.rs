use common::{VAR_SIZE, MEMBER_BASE, PARAM_BASE, LOCAL_BASE};
use syntax::{ClassInfo, ClassTable, Ty, VarInfo, VarTable};
use std::iter;

// a class scope only holds fields, a method scope holds params and locals
// each kind carries its own offset counter(s)
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub(crate) enum ScopeKind {
  Class { member_off: i32 },
  Method { param_off: i32, local_off: i32 },
}

pub(crate) struct Frame<'a> {
  // the enclosing class, unqualified fields and methods are looked up from it
  pub class: &'a str,
  pub kind: ScopeKind,
  pub vars: VarTable<'a>,
}

impl<'a> Frame<'a> {
  pub fn class(class: &'a str) -> Frame<'a> {
    Frame { class, kind: ScopeKind::Class { member_off: MEMBER_BASE }, vars: VarTable::default() }
  }

  pub fn method(class: &'a str) -> Frame<'a> {
    Frame { class, kind: ScopeKind::Method { param_off: PARAM_BASE, local_off: LOCAL_BASE }, vars: VarTable::default() }
  }

  pub fn declare_param(&mut self, name: &'a str, ty: Ty<'a>) -> VarInfo<'a> {
    let offset = match &mut self.kind {
      ScopeKind::Method { param_off, .. } => {
        let off = *param_off;
        *param_off += VAR_SIZE;
        off
      }
      ScopeKind::Class { .. } => unreachable!("params can only be declared in a method scope"),
    };
    self.insert(name, ty, offset)
  }

  // a field in a class scope, a local in a method scope
  pub fn declare_var(&mut self, name: &'a str, ty: Ty<'a>) -> VarInfo<'a> {
    let offset = match &mut self.kind {
      ScopeKind::Class { member_off } => {
        let off = *member_off;
        *member_off += VAR_SIZE;
        off
      }
      ScopeKind::Method { local_off, .. } => {
        let off = *local_off;
        *local_off -= VAR_SIZE;
        off
      }
    };
    self.insert(name, ty, offset)
  }

  // a redeclared name keeps its position in the table but takes the new type and offset
  fn insert(&mut self, name: &'a str, ty: Ty<'a>, offset: i32) -> VarInfo<'a> {
    let info = VarInfo { ty, offset, size: VAR_SIZE };
    self.vars.insert(name, info);
    info
  }
}

// `name` and then all its ancestors, nearest first
// the inheritance graph must already be checked acyclic, otherwise this never ends
pub(crate) fn chain<'t, 'a: 't>(table: &'t ClassTable<'a>, name: &'a str) -> impl Iterator<Item=(&'a str, &'t ClassInfo<'a>)> + 't {
  let mut cur = Some(name);
  iter::from_fn(move || {
    let name = cur?;
    let info = table.get(name)?;
    cur = info.parent;
    Some((name, info))
  })
}

pub(crate) fn extends<'a>(table: &ClassTable<'a>, sub: &'a str, sup: &str) -> bool {
  chain(table, sub).any(|(c, _)| c == sup)
}
