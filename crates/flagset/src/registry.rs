use crate::value::{FlagType, Value};
use indexmap::IndexMap;

/// Definition of a long flag (`--name`).
#[derive(Debug, Clone, PartialEq)]
pub struct FlagDef {
    pub ty: FlagType,
    pub usage: String,
    /// Fixed at definition time: true iff no default was supplied.
    pub required: bool,
    pub value: Option<Value>,
    /// Whether the last committed parse assigned this flag from the arguments.
    pub parsed: bool,
}

/// Definition of a short flag (`-c`), counted rather than valued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortDef {
    pub usage: String,
    pub count: u64,
}

/// Ordered store of every defined flag.
///
/// Redefining a key replaces its definition in place, so indices handed out
/// earlier keep pointing at the same key.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    longs: IndexMap<String, FlagDef>,
    shorts: IndexMap<char, ShortDef>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Define (or redefine) a long flag and return its index.
    ///
    /// # Panics
    ///
    /// Panics if `name` is empty.
    pub fn define_long(
        &mut self,
        name: &str,
        ty: FlagType,
        default: Option<Value>,
        usage: &str,
    ) -> usize {
        assert!(!name.is_empty(), "flag name must not be empty");
        let def = FlagDef {
            ty,
            usage: usage.to_string(),
            required: default.is_none(),
            value: default,
            parsed: false,
        };
        let (index, prev) = self.longs.insert_full(name.to_string(), def);
        if prev.is_some() {
            tracing::debug!(flag = name, "redefined long flag");
        }
        index
    }

    /// Define (or redefine) a short flag and return its index. The count starts at 0.
    pub fn define_short(&mut self, c: char, usage: &str) -> usize {
        let def = ShortDef {
            usage: usage.to_string(),
            count: 0,
        };
        let (index, prev) = self.shorts.insert_full(c, def);
        if prev.is_some() {
            tracing::debug!(flag = %c, "redefined short flag");
        }
        index
    }

    pub fn long(&self, name: &str) -> Option<&FlagDef> {
        self.longs.get(name)
    }

    pub fn long_at(&self, index: usize) -> Option<(&str, &FlagDef)> {
        self.longs
            .get_index(index)
            .map(|(name, def)| (name.as_str(), def))
    }

    pub fn short(&self, c: char) -> Option<&ShortDef> {
        self.shorts.get(&c)
    }

    pub fn short_mut(&mut self, c: char) -> Option<&mut ShortDef> {
        self.shorts.get_mut(&c)
    }

    pub fn short_at(&self, index: usize) -> Option<(char, &ShortDef)> {
        self.shorts.get_index(index).map(|(c, def)| (*c, def))
    }

    /// Whether `name` is defined with a type that needs an explicit value.
    pub fn takes_value(&self, name: &str) -> bool {
        self.longs
            .get(name)
            .is_some_and(|def| def.ty != FlagType::Bool)
    }

    pub fn longs(&self) -> impl Iterator<Item = (&str, &FlagDef)> {
        self.longs.iter().map(|(name, def)| (name.as_str(), def))
    }

    pub fn longs_mut(&mut self) -> impl Iterator<Item = (&str, &mut FlagDef)> {
        self.longs.iter_mut().map(|(name, def)| (name.as_str(), def))
    }

    pub fn shorts(&self) -> impl Iterator<Item = (char, &ShortDef)> {
        self.shorts.iter().map(|(c, def)| (*c, def))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_follows_default() {
        let mut reg = Registry::new();
        reg.define_long("qux", FlagType::Bool, None, "");
        reg.define_long("bar", FlagType::UInt, Some(Value::UInt(10)), "bars");

        let qux = reg.long("qux").unwrap();
        assert!(qux.required);
        assert_eq!(qux.value, None);

        let bar = reg.long("bar").unwrap();
        assert!(!bar.required);
        assert_eq!(bar.value, Some(Value::UInt(10)));
    }

    #[test]
    fn redefinition_replaces_but_keeps_position() {
        let mut reg = Registry::new();
        let first = reg.define_long("a", FlagType::String, Some(Value::String("x".into())), "");
        reg.define_long("b", FlagType::Bool, Some(Value::Bool(false)), "");
        let again = reg.define_long("a", FlagType::Int, None, "now an int");

        assert_eq!(first, again);
        let (name, def) = reg.long_at(first).unwrap();
        assert_eq!(name, "a");
        assert_eq!(def.ty, FlagType::Int);
        assert!(def.required);
        assert_eq!(def.value, None);
        assert_eq!(def.usage, "now an int");
    }

    #[test]
    fn takes_value_only_for_defined_non_bool() {
        let mut reg = Registry::new();
        reg.define_long("verbose", FlagType::Bool, Some(Value::Bool(false)), "");
        reg.define_long("count", FlagType::Int, None, "");
        assert!(!reg.takes_value("verbose"));
        assert!(reg.takes_value("count"));
        assert!(!reg.takes_value("missing"));
    }

    #[test]
    fn short_redefinition_resets_count() {
        let mut reg = Registry::new();
        let v = reg.define_short('v', "verbosity");
        reg.short_mut('v').unwrap().count = 3;
        assert_eq!(reg.define_short('v', "again"), v);
        assert_eq!(reg.short('v').unwrap().count, 0);
    }

    #[test]
    #[should_panic]
    fn empty_name_is_rejected() {
        Registry::new().define_long("", FlagType::Bool, None, "");
    }
}
