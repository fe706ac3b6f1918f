use crate::Ty;
use common::IndexMap;

// these tables are built by typeck and only read afterwards, by the table printer and the code generator
// every map keeps declaration order, a later insertion with the same name overwrites the earlier one in place

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct VarInfo<'a> {
  pub ty: Ty<'a>,
  // for a field: offset from the object pointer; for a param or local: offset from the frame pointer
  pub offset: i32,
  pub size: i32,
}

pub type VarTable<'a> = IndexMap<&'a str, VarInfo<'a>>;

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct MethodInfo<'a> {
  pub ret: Ty<'a>,
  pub param: Vec<Ty<'a>>,
  // params and body locals together
  pub locals: VarTable<'a>,
  // bytes needed by body locals only, params are pushed by the caller
  pub locals_size: i32,
}

pub type MethodTable<'a> = IndexMap<&'a str, MethodInfo<'a>>;

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct ClassInfo<'a> {
  pub parent: Option<&'a str>,
  pub members: VarTable<'a>,
  pub methods: MethodTable<'a>,
  // own fields only, inherited ones are not counted
  pub members_size: i32,
}

impl<'a> ClassInfo<'a> {
  pub fn new(parent: Option<&'a str>) -> ClassInfo<'a> {
    ClassInfo { parent, members: VarTable::default(), methods: MethodTable::default(), members_size: 0 }
  }
}

pub type ClassTable<'a> = IndexMap<&'a str, ClassInfo<'a>>;
