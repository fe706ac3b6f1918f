pub mod loc;
pub mod errors;
pub mod indent_printer;
pub mod op;

pub use crate::{loc::*, errors::*, indent_printer::*, op::*};
use hashbrown::hash_map::DefaultHashBuilder;

pub const MAIN_CLASS: &str = "Main";
pub const MAIN_METHOD: &str = "main";
const INDENT_STR: &str = "    ";

// every variable occupies one word, fields/params/locals alike
pub const VAR_SIZE: i32 = 4;
// fields grow upwards from the object pointer
pub const MEMBER_BASE: i32 = 0;
// params sit above the saved frame pointer, return address and `this`
pub const PARAM_BASE: i32 = 12;
// locals grow downwards from the frame pointer
pub const LOCAL_BASE: i32 = -4;

// DefaultHashBuilder is the default hash of hashbrown, seems faster than RandomState (the default hash of IndexMap/Set & std HashMap/Set)
// place these type alias here just for convenience
pub type IndexMap<K, V> = indexmap::IndexMap<K, V, DefaultHashBuilder>;
pub type HashMap<K, V> = hashbrown::HashMap<K, V>;
