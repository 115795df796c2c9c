mod builtin;
mod error;
mod loader;

pub use builtin::{NAICS_RULE_NAME, builtin_rule, naics_2022};
pub use error::{CodesError, Result};
pub use loader::load_code_set_csv;
