use crate::{TypeCk, Result, ArgPolicy, scope::{Frame, extends}};
use common::{ErrorKind, ErrorKind::*, issue, Loc, BinOp, UnOp, VAR_SIZE, MAIN_CLASS, MAIN_METHOD, NO_LOC};
use syntax::{ast::*, MethodInfo, Ty};
use tracing::{debug, trace};

pub(crate) struct TypePass<'a>(pub TypeCk<'a>);

impl<'a> TypePass<'a> {
  pub fn program(&mut self, p: &Program<'a>) -> Result<'a, ()> {
    for c in &p.class {
      for m in &c.method {
        let info = self.method_def(c.name, m)?;
        debug!(class = c.name, method = m.name, locals_size = info.locals_size, "method checked");
        self.table[c.name].methods.insert(m.name, info);
      }
    }
    self.main_class(p)
  }

  // the presence of Main is already known, what is left of it can only be checked after all bodies
  fn main_class(&self, p: &Program<'a>) -> Result<'a, ()> {
    let def = p.class.iter().find(|c| c.name == MAIN_CLASS);
    let loc = def.map(|c| c.loc).unwrap_or(NO_LOC);
    let main = &self.table[MAIN_CLASS];
    if !main.members.is_empty() { return issue(loc, MainHasMembers); }
    match main.methods.get(MAIN_METHOD) {
      None => issue(loc, NoMainMethod),
      Some(m) if m.ret != Ty::None => {
        let loc = def.and_then(|c| c.method.iter().rev().find(|m| m.name == MAIN_METHOD)).map(|m| m.loc).unwrap_or(loc);
        issue(loc, MainSignature)
      }
      Some(_) => Ok(()),
    }
  }

  // params get the same offsets as in SymbolPass, the finished MethodInfo replaces the registered signature
  fn method_def(&self, class: &'a str, m: &MethodDef<'a>) -> Result<'a, MethodInfo<'a>> {
    let ret = self.ty(&m.ret)?;
    let mut frame = Frame::method(class);
    let param = m.param.iter().map(|p| self.param_def(p, &mut frame)).collect::<Result<Vec<_>>>()?;
    for v in &m.body.var { self.var_def(v, &mut frame)?; }
    // no more declarations from here on
    let frame = frame;
    self.block(&m.body.stmt, &frame)?;
    let actual = match &m.body.ret {
      Some(r) => {
        let ty = self.expr(&r.expr, &frame)?;
        r.ty.set(Some(ty));
        Some((r.loc, ty))
      }
      None => None,
    };
    self.check_return(class, m, ret, actual)?;
    let locals_size = VAR_SIZE * frame.vars.len().saturating_sub(param.len()) as i32;
    Ok(MethodInfo { ret, param, locals: frame.vars, locals_size })
  }

  fn check_return(&self, class: &'a str, m: &MethodDef<'a>, expect: Ty<'a>, actual: Option<(Loc, Ty<'a>)>) -> Result<'a, ()> {
    if m.is_constructor(class) && expect != Ty::None {
      return issue(m.loc, ConstructorReturns(m.name));
    }
    let mismatch = |loc| issue(loc, ReturnMismatch { func: m.name });
    match actual {
      None if expect != Ty::None => mismatch(m.loc),
      None => Ok(()),
      Some((loc, actual)) => match (expect, actual) {
        (Ty::None, _) => mismatch(loc),
        (e, a) if e.kind() != a.kind() => mismatch(loc),
        (Ty::Object(e), Ty::Object(a)) if e != a => mismatch(loc),
        _ => Ok(()),
      }
    }
  }

  fn block(&self, b: &[Stmt<'a>], frame: &Frame<'a>) -> Result<'a, ()> {
    for s in b { self.stmt(s, frame)?; }
    Ok(())
  }

  fn stmt(&self, s: &Stmt<'a>, frame: &Frame<'a>) -> Result<'a, ()> {
    match &s.kind {
      StmtKind::Assign(a) => {
        let r = self.expr(&a.src, frame)?;
        let l = self.var_sel(&a.dst, s.loc, frame)?;
        s.ty.set(Some(l));
        if l != r { return issue(s.loc, AssignMismatch { l, r }); }
      }
      StmtKind::ExprEval(e) => { self.expr(e, frame)?; }
      // children first in source order, the guard's own type is tested last
      StmtKind::If(i) => {
        let cond = self.expr(&i.cond, frame)?;
        self.block(&i.on_true, frame)?;
        if let Some(of) = &i.on_false { self.block(of, frame)?; }
        check_bool(cond, i.cond.loc, IfNotBool)?;
      }
      StmtKind::While(w) => {
        let cond = self.expr(&w.cond, frame)?;
        self.block(&w.body, frame)?;
        check_bool(cond, w.cond.loc, WhileNotBool)?;
      }
      StmtKind::Repeat(r) => {
        self.block(&r.body, frame)?;
        let cond = self.expr(&r.cond, frame)?;
        check_bool(cond, r.cond.loc, RepeatNotBool)?;
      }
      StmtKind::Print(e) => s.ty.set(Some(self.expr(e, frame)?)),
    }
    Ok(())
  }

  // e.ty is set to the return value
  fn expr(&self, e: &Expr<'a>, frame: &Frame<'a>) -> Result<'a, Ty<'a>> {
    let ty = match &e.kind {
      ExprKind::VarSel(v) => self.var_sel(v, e.loc, frame)?,
      ExprKind::Call(c) => self.call(c, e.loc, frame)?,
      ExprKind::Binary(b) => self.binary(b, e.loc, frame)?,
      ExprKind::Unary(u) => self.unary(u, e.loc, frame)?,
      ExprKind::NewClass(n) => if self.table.contains_key(n.name) { Ty::Object(n.name) } else {
        return issue(e.loc, UndefinedClass(n.name));
      }
      ExprKind::IntLit(_) => Ty::Int,
      ExprKind::BoolLit(_) => Ty::Bool,
    };
    trace!(loc = ?e.loc, ?ty, "expr");
    e.ty.set(Some(ty));
    Ok(ty)
  }

  fn binary(&self, b: &Binary<'a>, loc: Loc, frame: &Frame<'a>) -> Result<'a, Ty<'a>> {
    use BinOp::*;
    let (l, r) = (self.expr(&b.l, frame)?, self.expr(&b.r, frame)?);
    let (ret, ok) = match b.op {
      Add | Sub | Mul | Div => (Ty::Int, l == Ty::Int && r == Ty::Int),
      Lt | Le => (Ty::Bool, l == Ty::Int && r == Ty::Int),
      // objects are never comparable, not even with themselves
      Eq => (Ty::Bool, l == r && (l == Ty::Int || l == Ty::Bool)),
      And | Or => (Ty::Bool, l == Ty::Bool && r == Ty::Bool),
    };
    if ok { Ok(ret) } else { issue(loc, ExprMismatch { op: b.op.to_op_str() }) }
  }

  fn unary(&self, u: &Unary<'a>, loc: Loc, frame: &Frame<'a>) -> Result<'a, Ty<'a>> {
    let r = self.expr(&u.r, frame)?;
    let expect = match u.op { UnOp::Neg => Ty::Int, UnOp::Not => Ty::Bool };
    if r == expect { Ok(r) } else { issue(loc, ExprMismatch { op: u.op.to_op_str() }) }
  }

  // locals and params first, then fields along the class chain
  // the first element is the class whose field table has `name`, None for locals and params
  fn resolve_var(&self, name: &'a str, frame: &Frame<'a>) -> Option<(Option<&'a str>, Ty<'a>)> {
    if let Some(v) = frame.vars.get(name) { return Some((None, v.ty)); }
    let (class, v) = self.lookup_field(frame.class, name)?;
    trace!(name, class, "resolved field");
    Some((Some(class), v.ty))
  }

  // `owner` in `owner.xxx` must be a variable of object type, returns its class
  fn owner_class(&self, owner: &'a str, loc: Loc, frame: &Frame<'a>) -> Result<'a, &'a str> {
    match self.resolve_var(owner, frame) {
      Some((_, Ty::Object(c))) => Ok(c),
      Some((_, ty)) => issue(loc, NotObject { name: owner, ty }),
      None => issue(loc, UndefinedVar(owner)),
    }
  }

  fn var_sel(&self, v: &VarSel<'a>, loc: Loc, frame: &Frame<'a>) -> Result<'a, Ty<'a>> {
    let (class, ty) = match v.owner {
      None => match self.resolve_var(v.name, frame) {
        Some(x) => x,
        None => return issue(loc, UndefinedVar(v.name)),
      },
      Some(owner) => {
        let owner = self.owner_class(owner, loc, frame)?;
        match self.lookup_field(owner, v.name) {
          Some((class, info)) => (Some(class), info.ty),
          None => return issue(loc, UndefinedMember(v.name)),
        }
      }
    };
    v.class.set(class);
    Ok(ty)
  }

  // arguments are checked before the method itself is resolved
  fn call(&self, c: &Call<'a>, loc: Loc, frame: &Frame<'a>) -> Result<'a, Ty<'a>> {
    let arg = c.arg.iter().map(|a| self.expr(a, frame)).collect::<Result<Vec<_>>>()?;
    let owner = match c.owner {
      Some(owner) => self.owner_class(owner, loc, frame)?,
      None => frame.class,
    };
    let (class, m) = match self.lookup_method(owner, c.name) {
      Some(x) => x,
      None => return issue(loc, UndefinedMethod(c.name)),
    };
    trace!(method = c.name, class, "resolved method");
    c.class.set(Some(class));
    if m.param.len() != arg.len() {
      return issue(loc, ArgcMismatch { name: c.name, expect: m.param.len() as u32, actual: arg.len() as u32 });
    }
    for (idx, (&arg, &param)) in arg.iter().zip(m.param.iter()).enumerate() {
      if !self.arg_compatible(arg, param) {
        return issue(c.arg[idx].loc, ArgMismatch { name: c.name, loc: idx as u32 + 1, arg, param });
      }
    }
    Ok(m.ret)
  }

  fn arg_compatible(&self, arg: Ty<'a>, param: Ty<'a>) -> bool {
    match (arg, param) {
      (Ty::Object(a), Ty::Object(p)) if self.cfg.arg_policy == ArgPolicy::Subclass => extends(&self.table, a, p),
      _ => arg.kind() == param.kind(),
    }
  }
}

fn check_bool<'a>(ty: Ty<'a>, loc: Loc, err: fn(Ty<'a>) -> ErrorKind<'a, Ty<'a>>) -> Result<'a, ()> {
  match ty {
    Ty::Bool => Ok(()),
    ty => issue(loc, err(ty)),
  }
}
