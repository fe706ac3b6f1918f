use common::IndentPrinter;
use syntax::{ClassInfo, ClassTable, MethodInfo, VarTable};

fn show_vars(v: &VarTable, p: &mut IndentPrinter) {
  if v.is_empty() { p.line("<empty>"); } else {
    for (name, v) in v { p.line(format_args!("{} : {:?} @ {} ({})", name, v.ty, v.offset, v.size)); }
  }
}

// declaration order is kept everywhere, so the output is stable across runs
pub fn class_table(t: &ClassTable, p: &mut IndentPrinter) {
  p.line("CLASS TABLE:");
  p.indent(|p| if t.is_empty() { p.line("<empty>"); } else { for (name, c) in t { class_info(name, c, p); } });
}

pub fn class_info(name: &str, c: &ClassInfo, p: &mut IndentPrinter) {
  match c.parent {
    Some(parent) => p.line(format_args!("CLASS '{}' : '{}', size {}", name, parent, c.members_size)),
    None => p.line(format_args!("CLASS '{}', size {}", name, c.members_size)),
  }
  p.indent(|p| {
    p.line("FIELDS:");
    p.indent(|p| show_vars(&c.members, p));
    for (name, m) in &c.methods { method_info(name, m, p); }
  });
}

pub fn method_info(name: &str, m: &MethodInfo, p: &mut IndentPrinter) {
  let param = m.param.iter().map(|t| format!("{:?}", t)).collect::<Vec<_>>().join(", ");
  p.line(format_args!("METHOD '{}' : ({}) => {:?}, locals size {}", name, param, m.ret, m.locals_size));
  p.indent(|p| show_vars(&m.locals, p));
}

#[cfg(test)]
mod tests {
  use super::*;
  use syntax::{Ty, VarInfo};

  #[test]
  fn dump_layout() {
    let mut t = ClassTable::default();
    let mut a = ClassInfo::new(None);
    a.members.insert("b", VarInfo { ty: Ty::Int, offset: 0, size: 4 });
    a.members_size = 4;
    let mut locals = VarTable::default();
    locals.insert("x", VarInfo { ty: Ty::Object("A"), offset: 12, size: 4 });
    locals.insert("y", VarInfo { ty: Ty::Bool, offset: -4, size: 4 });
    a.methods.insert("foo", MethodInfo { ret: Ty::Int, param: vec![Ty::Object("A")], locals, locals_size: 4 });
    t.insert("A", a);
    t.insert("B", ClassInfo::new(Some("A")));
    let mut p = IndentPrinter::default();
    class_table(&t, &mut p);
    assert_eq!(p.finish(), "\
CLASS TABLE:
    CLASS 'A', size 4
        FIELDS:
            b : Integer @ 0 (4)
        METHOD 'foo' : (Object(A)) => Integer, locals size 4
            x : Object(A) @ 12 (4)
            y : Boolean @ -4 (4)
    CLASS 'B' : 'A', size 0
        FIELDS:
            <empty>
");
  }

  #[test]
  fn empty_table() {
    let mut p = IndentPrinter::default();
    class_table(&ClassTable::default(), &mut p);
    assert_eq!(p.finish(), "CLASS TABLE:\n    <empty>\n");
  }
}
