use crate::coerce::coerce;
use crate::error::{FlagName, ParseError, Result};
use crate::handle::{Flag, Short};
use crate::registry::Registry;
use crate::tokenize::split_arguments;
use crate::value::{FlagValue, Value};
use indexmap::IndexMap;
use std::fmt;

/// Per-call parse settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Suppress unknown-flag, invalid-type and missing-required errors and
    /// commit whatever validated.
    pub ignore_errors: bool,
    /// Overrides the [`Flags::skip_first_argument`] setting for this call.
    pub skip_first_argument: Option<bool>,
}

impl ParseOptions {
    pub fn strict() -> Self {
        Self::default()
    }

    pub fn permissive() -> Self {
        Self {
            ignore_errors: true,
            ..Self::default()
        }
    }

    pub fn skip_first_argument(mut self, skip: bool) -> Self {
        self.skip_first_argument = Some(skip);
        self
    }
}

/// Flag definitions, their current values, and the positionals of the last parse.
///
/// ```
/// let mut flags = flagset::Flags::new(["app", "--bar", "3", "-vv", "file.txt"]);
/// let bar = flags.uint("bar", Some(10), "Number of bars");
/// let verbose = flags.short('v', "verbosity");
///
/// flags.parse().unwrap();
/// assert_eq!(flags.get(bar), Some(3));
/// assert_eq!(flags.count(verbose), 2);
/// assert_eq!(flags.arg(0), Some("file.txt"));
/// ```
#[derive(Debug, Clone)]
pub struct Flags {
    argv: Vec<String>,
    skip_first_argument: bool,
    registry: Registry,
    arguments: Vec<String>,
    suppressed: Vec<ParseError>,
    parsed: bool,
}

impl Flags {
    /// Create a flag set that will parse `argv`.
    ///
    /// The first element is treated as the program name and skipped unless
    /// [`skip_first_argument`](Self::skip_first_argument) is turned off.
    pub fn new<I, S>(argv: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            argv: argv.into_iter().map(Into::into).collect(),
            skip_first_argument: true,
            registry: Registry::new(),
            arguments: Vec::new(),
            suppressed: Vec::new(),
            parsed: false,
        }
    }

    pub fn skip_first_argument(mut self, skip: bool) -> Self {
        self.skip_first_argument = skip;
        self
    }

    /// Define a long flag of any supported type. A `None` default makes it required.
    ///
    /// Redefining a name replaces the earlier definition in place.
    ///
    /// # Panics
    ///
    /// Panics if `name` is empty. The same holds for the typed shorthands
    /// ([`bool`](Self::bool), [`int`](Self::int), [`uint`](Self::uint),
    /// [`float`](Self::float), [`string`](Self::string)).
    pub fn define<T: FlagValue>(
        &mut self,
        name: &str,
        default: Option<T>,
        usage: &str,
    ) -> Flag<T> {
        let index = self
            .registry
            .define_long(name, T::TYPE, default.map(T::into_value), usage);
        Flag::new(index)
    }

    /// `--name`, `--name=true`, `--name false`, ...
    pub fn bool(&mut self, name: &str, default: Option<bool>, usage: &str) -> Flag<bool> {
        self.define(name, default, usage)
    }

    /// Integral values only; `1.5` is an error rather than being truncated.
    pub fn int(&mut self, name: &str, default: Option<i64>, usage: &str) -> Flag<i64> {
        self.define(name, default, usage)
    }

    /// Non-negative integral values only.
    pub fn uint(&mut self, name: &str, default: Option<u64>, usage: &str) -> Flag<u64> {
        self.define(name, default, usage)
    }

    pub fn float(&mut self, name: &str, default: Option<f64>, usage: &str) -> Flag<f64> {
        self.define(name, default, usage)
    }

    pub fn string(&mut self, name: &str, default: Option<&str>, usage: &str) -> Flag<String> {
        self.define(name, default.map(str::to_string), usage)
    }

    /// Define a short flag whose value is the number of times it appears
    /// (`-v` => 1, `-vvv` => 3).
    pub fn short(&mut self, c: char, usage: &str) -> Short {
        Short::new(self.registry.define_short(c, usage))
    }

    /// Parse the arguments given to [`Flags::new`], failing on the first error.
    pub fn parse(&mut self) -> Result<()> {
        let argv = self.argv.clone();
        self.parse_with(&argv, ParseOptions::strict())
    }

    /// Parse `argv` instead of the stored arguments, failing on the first error.
    pub fn parse_from<S: AsRef<str>>(&mut self, argv: &[S]) -> Result<()> {
        self.parse_with(argv, ParseOptions::strict())
    }

    /// Parse `argv` with explicit options.
    ///
    /// Every value is validated before anything is stored. In strict mode the
    /// first error (long flags in argument order, then short flags, then
    /// required flags in definition order) is returned and the flag set is
    /// left exactly as it was. With `ignore_errors` each error is recorded in
    /// [`suppressed`](Self::suppressed) instead and everything that validated
    /// is committed.
    pub fn parse_with<S: AsRef<str>>(
        &mut self,
        argv: &[S],
        options: ParseOptions,
    ) -> Result<()> {
        let skip = options
            .skip_first_argument
            .unwrap_or(self.skip_first_argument);
        let argv = if skip { argv.get(1..).unwrap_or(&[]) } else { argv };

        let split = split_arguments(argv, &self.registry);
        let mut suppressed = Vec::new();
        let mut report = |err: ParseError| -> Result<()> {
            if options.ignore_errors {
                tracing::debug!(error = %err, "suppressed parse error");
                suppressed.push(err);
                Ok(())
            } else {
                Err(err)
            }
        };

        let mut longs: IndexMap<String, Value> = IndexMap::new();
        for (name, raw) in &split.longs {
            let Some(def) = self.registry.long(name) else {
                report(ParseError::UnknownFlag(FlagName::Long(name.clone())))?;
                continue;
            };
            match coerce(def.ty, raw) {
                Some(value) => {
                    longs.insert(name.clone(), value);
                }
                None => report(ParseError::InvalidType {
                    name: name.clone(),
                    expected: def.ty,
                })?,
            }
        }

        let mut shorts: Vec<(char, u64)> = Vec::new();
        for (&c, &count) in &split.shorts {
            if self.registry.short(c).is_none() {
                report(ParseError::UnknownFlag(FlagName::Short(c)))?;
                continue;
            }
            shorts.push((c, count));
        }

        for (name, def) in self.registry.longs() {
            if def.value.is_none() && !longs.contains_key(name) {
                report(ParseError::MissingRequired(name.to_string()))?;
            }
        }

        tracing::debug!(
            longs = longs.len(),
            shorts = shorts.len(),
            positionals = split.positionals.len(),
            suppressed = suppressed.len(),
            "parsed arguments"
        );

        for (name, def) in self.registry.longs_mut() {
            def.parsed = false;
            if let Some(value) = longs.swap_remove(name) {
                def.value = Some(value);
                def.parsed = true;
            }
        }
        for (c, count) in shorts {
            if let Some(def) = self.registry.short_mut(c) {
                def.count = count;
            }
        }
        self.arguments = split.positionals;
        self.suppressed = suppressed;
        self.parsed = true;
        Ok(())
    }

    /// Current value of a long flag.
    ///
    /// `None` while a required flag is unset, or if the name has since been
    /// redefined with another type.
    pub fn get<T: FlagValue>(&self, flag: Flag<T>) -> Option<T> {
        self.registry
            .long_at(flag.index())
            .and_then(|(_, def)| def.value.as_ref())
            .and_then(T::from_value)
    }

    /// Whether the last parse assigned this flag from the arguments (as
    /// opposed to it keeping its default).
    pub fn was_parsed<T: FlagValue>(&self, flag: Flag<T>) -> bool {
        self.registry
            .long_at(flag.index())
            .is_some_and(|(_, def)| def.parsed)
    }

    pub fn count(&self, short: Short) -> u64 {
        self.registry
            .short_at(short.index())
            .map_or(0, |(_, def)| def.count)
    }

    /// Current value of a long flag by name.
    pub fn value(&self, name: &str) -> Option<&Value> {
        self.registry.long(name).and_then(|def| def.value.as_ref())
    }

    /// Every long flag's value, in definition order.
    pub fn longs(&self) -> IndexMap<String, Option<Value>> {
        self.registry
            .longs()
            .map(|(name, def)| (name.to_string(), def.value.clone()))
            .collect()
    }

    /// Every short flag's count, in definition order.
    pub fn shorts(&self) -> IndexMap<char, u64> {
        self.registry
            .shorts()
            .map(|(c, def)| (c, def.count))
            .collect()
    }

    /// The `index`th positional argument of the last parse.
    pub fn arg(&self, index: usize) -> Option<&str> {
        self.arguments.get(index).map(String::as_str)
    }

    pub fn args(&self) -> &[String] {
        &self.arguments
    }

    /// Whether a parse has completed (in permissive mode, even with errors).
    pub fn parsed(&self) -> bool {
        self.parsed
    }

    /// Errors ignored by the most recent committed parse. Empty after a
    /// successful strict parse; a failed strict parse leaves it unchanged.
    pub fn suppressed(&self) -> &[ParseError] {
        &self.suppressed
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Usage table of every defined flag.
    pub fn defaults(&self) -> String {
        crate::usage::render(&self.registry)
    }
}

impl fmt::Display for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.defaults())
    }
}
