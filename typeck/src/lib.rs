mod scope;
mod symbol_pass;
mod type_pass;

use common::{ErrorKind::*, issue};
use syntax::{ClassTable, MethodInfo, ParamDef, Program, SynTy, SynTyKind, Ty, VarDef, VarInfo};
use std::ops::{Deref, DerefMut};
use tracing::{debug, trace};
use crate::{symbol_pass::SymbolPass, type_pass::TypePass, scope::{Frame, chain}};

pub type Error<'a> = common::Error<'a, Ty<'a>>;
pub type Result<'a, T> = common::Result<'a, T, Ty<'a>>;

// how an object argument is matched against an object parameter
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum ArgPolicy {
  // the argument's class must be the parameter's class or inherit from it
  Subclass,
  // any object is accepted for any object parameter
  Kind,
}

impl Default for ArgPolicy {
  fn default() -> Self { ArgPolicy::Subclass }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub struct TypeCkCfg {
  pub arg_policy: ArgPolicy,
}

// stops at the first error, on success every expr/stmt in `p` has its type annotated
pub fn work<'a>(p: &Program<'a>, cfg: TypeCkCfg) -> Result<'a, ClassTable<'a>> {
  debug!(classes = p.class.len(), ?cfg, "typeck start");
  let mut s = SymbolPass(TypeCk { table: ClassTable::default(), cfg });
  s.program(p)?;
  let mut t = TypePass(s.0);
  t.program(p)?;
  debug!("typeck done");
  Ok(t.0.table)
}

// the only state shared by the passes, everything scope related is passed down explicitly in a `Frame`
struct TypeCk<'a> {
  table: ClassTable<'a>,
  cfg: TypeCkCfg,
}

impl<'a> TypeCk<'a> {
  fn ty(&self, s: &SynTy<'a>) -> Result<'a, Ty<'a>> {
    Ok(match s.kind {
      SynTyKind::Int => Ty::Int,
      SynTyKind::Bool => Ty::Bool,
      SynTyKind::None => Ty::None,
      SynTyKind::Named(name) => if self.table.contains_key(name) { Ty::Object(name) } else {
        return issue(s.loc, UndefinedClass(name));
      }
    })
  }

  // same as `ty`, but a variable can't be None
  fn var_ty(&self, s: &SynTy<'a>, name: &'a str) -> Result<'a, Ty<'a>> {
    match self.ty(s)? {
      Ty::None => issue(s.loc, NoneVar(name)),
      ty => Ok(ty),
    }
  }

  // declares every name of `v`, using the offset sequence of the frame's kind
  fn var_def(&self, v: &VarDef<'a>, frame: &mut Frame<'a>) -> Result<'a, ()> {
    for &name in &v.name {
      let ty = self.var_ty(&v.syn_ty, name)?;
      v.ty.set(Some(ty));
      let VarInfo { offset, .. } = frame.declare_var(name, ty);
      trace!(class = frame.class, name, offset, "declare variable");
    }
    Ok(())
  }

  fn param_def(&self, p: &ParamDef<'a>, frame: &mut Frame<'a>) -> Result<'a, Ty<'a>> {
    let ty = self.var_ty(&p.syn_ty, p.name)?;
    p.ty.set(Some(ty));
    frame.declare_param(p.name, ty);
    Ok(ty)
  }

  // will recursively lookup in all ancestors of `class`, returns the class where `name` is found
  fn lookup_field(&self, class: &'a str, name: &str) -> Option<(&'a str, VarInfo<'a>)> {
    chain(&self.table, class).find_map(|(c, info)| info.members.get(name).map(|&v| (c, v)))
  }

  fn lookup_method(&self, class: &'a str, name: &str) -> Option<(&'a str, &MethodInfo<'a>)> {
    chain(&self.table, class).find_map(|(c, info)| info.methods.get(name).map(|m| (c, m)))
  }
}

impl<'a> Deref for SymbolPass<'a> {
  type Target = TypeCk<'a>;
  fn deref(&self) -> &Self::Target { &self.0 }
}

impl<'a> DerefMut for SymbolPass<'a> {
  fn deref_mut(&mut self) -> &mut Self::Target { &mut self.0 }
}

impl<'a> Deref for TypePass<'a> {
  type Target = TypeCk<'a>;
  fn deref(&self) -> &Self::Target { &self.0 }
}

impl<'a> DerefMut for TypePass<'a> {
  fn deref_mut(&mut self) -> &mut Self::Target { &mut self.0 }
}
