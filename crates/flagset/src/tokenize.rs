//! Argument tokenizer.
//!
//! Splits raw arguments into long-flag raw values, short-flag counts and
//! positionals in a single left-to-right pass. The registry is consulted only
//! to decide whether `--name value` must take the next token verbatim.

use crate::registry::Registry;
use indexmap::IndexMap;

/// Raw value attached to a long flag before type coercion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawValue {
    /// The flag was given with no value (`--verbose`).
    Present,
    /// `--name=value` or `--name value`.
    Text(String),
}

/// Result of tokenizing an argument list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Split {
    /// Long flag name to raw value; a repeated flag keeps its last value.
    pub longs: IndexMap<String, RawValue>,
    /// Short flag character to number of occurrences.
    pub shorts: IndexMap<char, u64>,
    pub positionals: Vec<String>,
}

impl Split {
    fn resolve_bare(&mut self, name: String) {
        tracing::trace!(flag = %name, "bare long flag");
        self.longs.insert(name, RawValue::Present);
    }

    fn push_positional(&mut self, arg: &str) {
        tracing::trace!(arg, "positional");
        self.positionals.push(arg.to_string());
    }
}

fn clean(arg: &str) -> &str {
    arg.trim_start_matches(['-', ' '])
}

/// Tokenize `argv` (program name already removed).
///
/// - `--` ends flag processing; everything after it is positional.
/// - `--name=value` attaches everything after the first `=`.
/// - `--name` waits for a value. If `name` is defined with a non-bool type the
///   next token is taken verbatim even if it starts with `-` (`--count -5`);
///   otherwise a following flag or the end of input makes it bare.
/// - `-abc` counts one occurrence each of `a`, `b` and `c`. A lone `-` is a
///   positional.
pub fn split_arguments<S: AsRef<str>>(argv: &[S], registry: &Registry) -> Split {
    let mut split = Split::default();
    let mut pending: Option<String> = None;
    let mut force_value = false;
    let mut after_separator = false;

    for arg in argv {
        let arg: &str = arg.as_ref();

        if after_separator {
            split.push_positional(arg);
            continue;
        }

        if arg == "--" {
            if let Some(name) = pending.take() {
                split.resolve_bare(name);
            }
            force_value = false;
            after_separator = true;
            continue;
        }

        if arg.starts_with('-') && !force_value {
            if let Some(name) = pending.take() {
                split.resolve_bare(name);
            }

            if arg.starts_with("--") {
                if let Some((flag, value)) = arg.split_once('=') {
                    tracing::trace!(flag = clean(flag), value, "attached value");
                    split
                        .longs
                        .insert(clean(flag).to_string(), RawValue::Text(value.to_string()));
                } else {
                    let name = clean(arg);
                    force_value = registry.takes_value(name);
                    pending = Some(name.to_string());
                }
                continue;
            }

            let cluster = clean(arg);
            if cluster.is_empty() {
                split.push_positional(arg);
                continue;
            }
            for c in cluster.chars() {
                *split.shorts.entry(c).or_insert(0) += 1;
            }
            tracing::trace!(cluster, "short flags");
            continue;
        }

        // `force_value` is only ever set together with `pending`.
        if let Some(name) = pending.take() {
            tracing::trace!(flag = %name, value = arg, "following value");
            split.longs.insert(name, RawValue::Text(arg.to_string()));
            force_value = false;
            continue;
        }

        split.push_positional(arg);
    }

    if let Some(name) = pending {
        split.resolve_bare(name);
    }

    split
}
