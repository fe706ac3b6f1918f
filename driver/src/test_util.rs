use std::{io, fs, fmt, panic, path::{Path, PathBuf}, any::Any, sync::{Arc, Mutex}};
use colored::*;
use crate::CompileCfg;

// every `*.json` in `path` is checked against `path`/result/`name`.result
// what the checker actually printed goes to `path`/out/`name`.result
pub fn test_all(path: impl AsRef<Path>, cfg: CompileCfg) -> io::Result<Vec<TestResult>> {
  #[cfg(target_os = "windows")] let _ = control::set_virtual_terminal(true);

  let path = path.as_ref();
  let ans = path.join("result");
  let out = path.join("out");
  if !out.exists() { fs::create_dir_all(&out)?; }

  let mut files = fs::read_dir(path)?.filter_map(|f| {
    let path = f.ok()?.path();
    let name = path.file_name()?.to_str()?;
    if path.is_file() && name.ends_with(".json") { Some(name.to_owned()) } else { None }
  }).collect::<Vec<_>>();
  // the order of fs::read_dir is unspecified
  files.sort_unstable();
  let ret = files.iter().map(|f| {
    test_one_caught(path.join(f), out.join(f).with_extension("result"), ans.join(f).with_extension("result"), cfg)
  }).collect();
  Ok(ret)
}

pub fn test_one_caught(i: impl AsRef<Path>, o: impl AsRef<Path>, ans: impl AsRef<Path>, cfg: CompileCfg) -> TestResult {
  let loc = Arc::new(Mutex::new(None));
  let loc1 = loc.clone();
  panic::set_hook(Box::new(move |panic_info| if let Some(l) = panic_info.location() {
    if let Ok(mut loc) = loc1.lock() { *loc = Some(PanicLoc { file: l.file().to_owned(), line: l.line(), col: l.column() }); }
  }));
  let ret = panic::catch_unwind(panic::AssertUnwindSafe(|| test_one(&i, &o, &ans, cfg)))
    .unwrap_or_else(|e| {
      let loc = loc.lock().ok().and_then(|l| l.clone());
      TestResult::new(&i, &o, &ans, ResultKind::RuntimeError(PanicInfo { payload: get_payload(e), loc }))
    });
  let _ = panic::take_hook();
  ret
}

pub fn test_one(i: impl AsRef<Path>, o: impl AsRef<Path>, ans: impl AsRef<Path>, cfg: CompileCfg) -> TestResult {
  let kind = match run(&i, &o, cfg).and_then(|out| Ok((out, fs::read_to_string(&ans)?))) {
    Ok((out, ans)) => ResultKind::new(&out, &ans),
    Err(e) => ResultKind::IOError(e),
  };
  TestResult::new(i, o, ans, kind)
}

// a rejected program is not a failed run, its error line is the output to compare
pub fn run(i: impl AsRef<Path>, o: impl AsRef<Path>, cfg: CompileCfg) -> io::Result<String> {
  let out = match crate::compile(&fs::read_to_string(i)?, cfg) {
    Ok(p) => p,
    Err(e) => format!("{:?}", e),
  };
  fs::write(o, &out)?;
  Ok(out)
}

pub struct TestResult {
  pub file: PathBuf,
  pub out: PathBuf,
  pub ans: PathBuf,
  pub kind: ResultKind,
}

impl TestResult {
  pub fn new(file: impl AsRef<Path>, out: impl AsRef<Path>, ans: impl AsRef<Path>, kind: ResultKind) -> TestResult {
    TestResult { file: file.as_ref().into(), out: out.as_ref().into(), ans: ans.as_ref().into(), kind }
  }

  pub fn passed(&self) -> bool { matches!(self.kind, ResultKind::Pass) }
}

pub enum ResultKind {
  Pass,
  Fail { first_diff: usize, out: String, ans: String },
  IOError(io::Error),
  RuntimeError(PanicInfo),
}

impl ResultKind {
  // line by line, the shorter side is padded with empty lines
  pub fn new(out: &str, ans: &str) -> ResultKind {
    let (mut out_lines, mut ans_lines) = (out.lines(), ans.lines());
    let mut first_diff = 1;
    loop {
      match (out_lines.next(), ans_lines.next()) {
        (None, None) => break ResultKind::Pass,
        (out, ans) => {
          let (out, ans) = (out.unwrap_or(""), ans.unwrap_or(""));
          if out != ans {
            break ResultKind::Fail { first_diff, out: out.to_owned(), ans: ans.to_owned() };
          }
        }
      }
      first_diff += 1;
    }
  }
}

impl fmt::Debug for TestResult {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
    write!(f, "{}: ", self.file.display())?;
    match &self.kind {
      ResultKind::Pass => write!(f, "{}", "Pass".green()),
      ResultKind::Fail { first_diff, out, ans } => {
        writeln!(f, "{}: {}", "Fail".red(), format!("first different line on {}", first_diff).yellow())?;
        writeln!(f, "{}", format!("your line: \"{}\" ({}:{})", out, self.out.display(), first_diff).yellow())?;
        write!(f, "{}", format!("ans  line: \"{}\" ({}:{})", ans, self.ans.display(), first_diff).yellow())
      }
      ResultKind::IOError(e) => write!(f, "{}: {}", "IOError".red(), e.to_string().yellow()),
      ResultKind::RuntimeError(e) => {
        write!(f, "{}", "RuntimeError".red())?;
        if let Some(payload) = &e.payload {
          write!(f, ": {}", format!("panicked at `{}`", payload).yellow())?;
        }
        if let Some(loc) = &e.loc {
          write!(f, "{}", format!(", {:?}", loc).yellow())?;
        }
        Ok(())
      }
    }
  }
}

#[derive(Clone)]
pub struct PanicLoc {
  pub file: String,
  pub line: u32,
  pub col: u32,
}

pub struct PanicInfo {
  pub payload: Option<String>,
  pub loc: Option<PanicLoc>,
}

impl fmt::Debug for PanicLoc {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
    write!(f, "{}:{}:{}", self.file, self.line, self.col)
  }
}

// panic payloads are usually a String or a &str
fn get_payload(e: Box<dyn Any + Send>) -> Option<String> {
  e.downcast::<String>().map(|s| *s)
    .or_else(|payload| payload.downcast::<&str>().map(|s| (*s).to_owned()))
    .ok()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn line_diff() {
    assert!(matches!(ResultKind::new("a\nb\n", "a\nb"), ResultKind::Pass));
    match ResultKind::new("a\nc", "a\nb\nd") {
      ResultKind::Fail { first_diff, out, ans } => assert_eq!((first_diff, out.as_str(), ans.as_str()), (2, "c", "b")),
      _ => panic!("expect a failure"),
    }
    assert!(matches!(ResultKind::new("a", "a\nb"), ResultKind::Fail { first_diff: 2, .. }));
  }
}
