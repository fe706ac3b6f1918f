use crate::{TypeCk, Result, scope::Frame};
use common::{ErrorKind::*, issue, HashMap, VAR_SIZE, MAIN_CLASS, NO_LOC};
use syntax::{ast::*, ClassInfo, MethodInfo};
use hashbrown::hash_map::Entry;
use tracing::debug;

// registers everything that can be referenced from a method body: classes, fields and method signatures
// bodies are left to TypePass, so a body can refer to a class or method declared after it
pub(crate) struct SymbolPass<'a>(pub TypeCk<'a>);

impl<'a> SymbolPass<'a> {
  pub fn program(&mut self, p: &Program<'a>) -> Result<'a, ()> {
    let mut dup = None;
    for c in &p.class {
      if self.table.contains_key(c.name) {
        dup = dup.or(Some(c));
        continue;
      }
      debug!(class = c.name, parent = ?c.parent, "register class");
      self.table.insert(c.name, ClassInfo::new(c.parent));
    }
    // a missing Main is reported before anything else
    if !self.table.contains_key(MAIN_CLASS) { return issue(NO_LOC, NoMainClass); }
    if let Some(c) = dup { return issue(c.loc, DuplicateClass(c.name)); }
    for c in &p.class {
      if let Some(parent) = c.parent {
        if !self.table.contains_key(parent) { return issue(c.loc, UndefinedClass(parent)); }
      }
    }
    self.check_acyclic(p)?;
    for c in &p.class { self.class_def(c)?; }
    Ok(())
  }

  // every class is walked upwards, marking the visited classes with the index of the walk
  // meeting a class marked by the current walk means a cycle, meeting an older mark means the rest is already known to be fine
  fn check_acyclic(&self, p: &Program<'a>) -> Result<'a, ()> {
    let mut vis = HashMap::new();
    for (idx, c) in p.class.iter().enumerate() {
      let mut cur = c.name;
      loop {
        match vis.entry(cur) {
          Entry::Vacant(v) => {
            v.insert(idx);
            match self.table.get(cur).and_then(|info| info.parent) {
              Some(parent) => cur = parent,
              None => break,
            }
          }
          Entry::Occupied(o) => {
            if *o.get() == idx { return issue(c.loc, CyclicInheritance(cur)); }
            break;
          }
        }
      }
    }
    Ok(())
  }

  fn class_def(&mut self, c: &ClassDef<'a>) -> Result<'a, ()> {
    let mut frame = Frame::class(c.name);
    for v in &c.field { self.var_def(v, &mut frame)?; }
    let info = &mut self.table[c.name];
    info.members_size = VAR_SIZE * frame.vars.len() as i32;
    info.members = frame.vars;
    for m in &c.method {
      let sig = self.method_sig(c.name, m)?;
      debug!(class = c.name, method = m.name, ret = ?sig.ret, param = ?sig.param, "register method");
      // a later method with the same name replaces the earlier one
      self.table[c.name].methods.insert(m.name, sig);
    }
    Ok(())
  }

  // `locals` only holds the params for now, TypePass fills in the rest
  fn method_sig(&self, class: &'a str, m: &MethodDef<'a>) -> Result<'a, MethodInfo<'a>> {
    let ret = self.ty(&m.ret)?;
    let mut frame = Frame::method(class);
    let param = m.param.iter().map(|p| self.param_def(p, &mut frame)).collect::<Result<Vec<_>>>()?;
    Ok(MethodInfo { ret, param, locals: frame.vars, locals_size: 0 })
  }
}
