use driver::{CompileCfg, Stage};
use typeck::{ArgPolicy, TypeCkCfg};

#[test]
fn testcases() {
  let cfg = CompileCfg { stage: Stage::Table, ..CompileCfg::default() };
  let results = driver::test_all(concat!(env!("CARGO_MANIFEST_DIR"), "/testcases"), cfg).unwrap();
  for r in &results { println!("{:?}", r); }
  assert!(!results.is_empty());
  assert!(results.iter().all(|r| r.passed()));
}

#[test]
fn kind_policy_accepts_any_object() {
  let cfg = CompileCfg { stage: Stage::Check, typeck: TypeCkCfg { arg_policy: ArgPolicy::Kind } };
  let code = std::fs::read_to_string(concat!(env!("CARGO_MANIFEST_DIR"), "/testcases/arg_subclass.json")).unwrap();
  assert_eq!(driver::compile(&code, cfg).unwrap(), "");
}
