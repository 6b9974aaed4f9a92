use crate::registry::{FlagDef, Registry};
use crate::value::FlagType;

/// Gap between the widest long flag and the column edge.
const MARGIN: usize = 5;
const SEPARATOR: &str = "   ";

fn type_prefix(def: &FlagDef) -> String {
    if def.required {
        format!("<{}> ", def.ty)
    } else if def.ty == FlagType::Bool {
        String::new()
    } else {
        format!("[{}] ", def.ty)
    }
}

/// Render one line per flag: short flags first, then long flags, each in
/// definition order, with the flag right-aligned.
///
/// ```text
///         -v   verbosity
///      --foo   Enable the foo
///      --bar   [uint] Number of bars
///      --qux   <bool> Must be given
/// ```
pub fn render(registry: &Registry) -> String {
    let mut rows: Vec<(String, String)> = registry
        .shorts()
        .map(|(c, def)| (format!("-{c}"), def.usage.clone()))
        .collect();

    let mut max = 0;
    for (name, def) in registry.longs() {
        let flag = format!("--{name}");
        max = max.max(flag.chars().count());
        rows.push((flag, format!("{}{}", type_prefix(def), def.usage)));
    }

    let width = max + MARGIN;
    let mut out = String::new();
    for (flag, usage) in rows {
        out.push_str(&format!("{flag:>width$}{SEPARATOR}{usage}\n"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;

    #[test]
    fn renders_shorts_then_longs_aligned() {
        let mut reg = Registry::new();
        reg.define_long("foo", FlagType::Bool, Some(Value::Bool(false)), "Enable the foo");
        reg.define_long("bar", FlagType::UInt, Some(Value::UInt(10)), "Number of bars");
        reg.define_long(
            "baz",
            FlagType::String,
            Some(Value::String("default".into())),
            "What to name the baz",
        );
        reg.define_short('v', "verbosity");
        reg.define_long("qux", FlagType::Bool, None, "");

        let expected = concat!(
            "        -v   verbosity\n",
            "     --foo   Enable the foo\n",
            "     --bar   [uint] Number of bars\n",
            "     --baz   [string] What to name the baz\n",
            "     --qux   <bool> \n",
        );
        assert_eq!(render(&reg), expected);
    }

    #[test]
    fn width_follows_longest_long_flag() {
        let mut reg = Registry::new();
        reg.define_long("a", FlagType::Int, None, "short");
        reg.define_long("testsuite", FlagType::String, None, "Which suite");

        let text = render(&reg);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "             --a   <int> short");
        assert_eq!(lines[1], "     --testsuite   <string> Which suite");
    }

    #[test]
    fn shorts_only_use_margin_width() {
        let mut reg = Registry::new();
        reg.define_short('h', "help");
        assert_eq!(render(&reg), "   -h   help\n");
    }

    #[test]
    fn empty_registry_renders_nothing() {
        assert_eq!(render(&Registry::new()), "");
    }
}
