use driver::{Stage, CompileCfg};
use typeck::{ArgPolicy, TypeCkCfg};
use clap::{Arg, App};
use tracing_subscriber::EnvFilter;
use std::{io, fs, process};

fn main() -> io::Result<()> {
  // SEMCK_LOG takes the usual filter syntax, e.g. `SEMCK_LOG=typeck=trace`
  if let Ok(filter) = EnvFilter::try_from_env("SEMCK_LOG") {
    tracing_subscriber::fmt()
      .with_env_filter(filter)
      .with_target(true)
      .with_level(true)
      .with_writer(io::stderr)
      .init();
    tracing::debug!("tracing initialized");
  }
  let matches = App::new("semck")
    .arg(Arg::with_name("input").required(true))
    .arg(Arg::with_name("output").long("output").short("o").takes_value(true))
    .arg(Arg::with_name("target").long("target").short("t").takes_value(true).default_value("check"))
    .arg(Arg::with_name("arg-policy").long("arg-policy").takes_value(true).default_value("subclass"))
    .get_matches();
  let stage = match matches.value_of("target").unwrap() {
    t if t.eq_ignore_ascii_case("check") => Stage::Check,
    t if t.eq_ignore_ascii_case("table") => Stage::Table,
    t => {
      eprintln!("invalid target: `{}`", t);
      process::exit(1);
    }
  };
  let arg_policy = match matches.value_of("arg-policy").unwrap() {
    a if a.eq_ignore_ascii_case("subclass") => ArgPolicy::Subclass,
    a if a.eq_ignore_ascii_case("kind") => ArgPolicy::Kind,
    a => {
      eprintln!("invalid argument policy: `{}`", a);
      process::exit(1);
    }
  };
  let input = matches.value_of("input").unwrap();
  let code = fs::read_to_string(input)?;
  let result = match driver::compile(&code, CompileCfg { stage, typeck: TypeCkCfg { arg_policy } }) {
    Ok(p) => p,
    Err(e) => driver::report(e),
  };
  if let Some(output) = matches.value_of("output") {
    fs::write(output, result)
  } else {
    print!("{}", result);
    Ok(())
  }
}
