//! Typed command-line flags.
//!
//! Long flags (`--name`) carry a typed value (`bool`, `int`, `uint`, `float`,
//! `string`); short flags (`-v`) count how often they appear. Anything else is
//! collected as a positional argument.
//!
//! - `--name=value` and `--name value` attach a value. A flag defined with a
//!   non-bool type always takes the next token, so `--offset -5` works.
//! - `--name` alone is `true` for bool flags and an error for the rest.
//! - `-abc` is `-a -b -c`; `-vvv` counts 3.
//! - `--` ends flag processing.
//!
//! Values are converted strictly: `uint` rejects `-1` and `2.5`, `bool`
//! accepts only `1/t/true` and `0/f/false` (any case).

mod coerce;
mod error;
mod flags;
mod handle;
mod registry;
mod tokenize;
mod usage;
mod value;

pub use coerce::coerce;
pub use error::{ErrorKind, FlagName, ParseError, Result};
pub use flags::{Flags, ParseOptions};
pub use handle::{Flag, Short};
pub use registry::{FlagDef, Registry, ShortDef};
pub use tokenize::{RawValue, Split, split_arguments};
pub use value::{FlagType, FlagValue, Value};
