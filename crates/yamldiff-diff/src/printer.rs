//! Rendering a diff tree as annotated pseudo-YAML.
//!
//! Every line starts with a marker and a space: `"  "` unchanged, `"- "`
//! left only, `"+ "` right only. Nesting adds two spaces per level.
//! Composite children print their key (or bullet) once and recurse; leaf
//! children print whole values under their own marker.

use std::fmt::{self, Write};

use yamldiff_types::{format_number, TreeValue};

use crate::node::{DiffChildren, DiffNode, DiffStatus};

const INDENT: &str = "  ";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Marker {
    Unchanged,
    Removed,
    Added,
}

impl Marker {
    fn symbol(self) -> char {
        match self {
            Marker::Unchanged => ' ',
            Marker::Removed => '-',
            Marker::Added => '+',
        }
    }
}

/// How a value is introduced on its line.
#[derive(Clone, Copy)]
enum Entry<'k> {
    Root,
    Item,
    Key(&'k str),
}

impl fmt::Display for DiffNode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_node(f, self, self.depth)
    }
}

fn write_node<W: Write>(w: &mut W, node: &DiffNode<'_>, level: usize) -> fmt::Result {
    match &node.children {
        Some(DiffChildren::Sequence(items)) => {
            for child in items {
                if child.is_composite() {
                    line(w, Marker::Unchanged, level, "-")?;
                    write_node(w, child, level + 1)?;
                } else {
                    write_leaf(w, child, level, Entry::Item)?;
                }
            }
            Ok(())
        }
        Some(DiffChildren::Mapping(entries)) => {
            for (key, child) in entries {
                if child.is_composite() {
                    line(w, Marker::Unchanged, level, &format!("{key}:"))?;
                    write_node(w, child, level + 1)?;
                } else {
                    write_leaf(w, child, level, Entry::Key(*key))?;
                }
            }
            Ok(())
        }
        None => write_leaf(w, node, level, Entry::Root),
    }
}

fn write_leaf<W: Write>(
    w: &mut W,
    node: &DiffNode<'_>,
    level: usize,
    entry: Entry<'_>,
) -> fmt::Result {
    match node.status {
        DiffStatus::Same => {
            if let Some(v) = node.a.value().or(node.b.value()) {
                write_entry(w, Marker::Unchanged, level, entry, v)?;
            }
        }
        DiffStatus::Changed => {
            if let Some(v) = node.a.value() {
                write_entry(w, Marker::Removed, level, entry, v)?;
            }
            if let Some(v) = node.b.value() {
                write_entry(w, Marker::Added, level, entry, v)?;
            }
        }
        DiffStatus::OnlyInA => {
            if let Some(v) = node.a.value() {
                write_entry(w, Marker::Removed, level, entry, v)?;
            }
        }
        DiffStatus::OnlyInB => {
            if let Some(v) = node.b.value() {
                write_entry(w, Marker::Added, level, entry, v)?;
            }
        }
    }
    Ok(())
}

fn write_entry<W: Write>(
    w: &mut W,
    marker: Marker,
    level: usize,
    entry: Entry<'_>,
    value: &TreeValue,
) -> fmt::Result {
    if value.is_container() {
        match entry {
            Entry::Root => {}
            Entry::Item => line(w, marker, level, "-")?,
            Entry::Key(key) => line(w, marker, level, &format!("{key}:"))?,
        }
        let inner = match entry {
            Entry::Root => level,
            _ => level + 1,
        };
        return write_value(w, marker, inner, value);
    }

    let content = match (entry, scalar_literal(value)) {
        (Entry::Root, literal) => literal.unwrap_or_default(),
        (Entry::Item, Some(literal)) => format!("- {literal}"),
        (Entry::Item, None) => "-".to_string(),
        (Entry::Key(key), Some(literal)) => format!("{key}: {literal}"),
        (Entry::Key(key), None) => format!("{key}:"),
    };
    line(w, marker, level, &content)
}

/// Dump a whole value under one marker.
fn write_value<W: Write>(
    w: &mut W,
    marker: Marker,
    level: usize,
    value: &TreeValue,
) -> fmt::Result {
    match value {
        TreeValue::Mapping(m) => {
            for (key, v) in m.iter() {
                write_entry(w, marker, level, Entry::Key(key), v)?;
            }
            Ok(())
        }
        TreeValue::Sequence(items) => {
            for v in items {
                write_entry(w, marker, level, Entry::Item, v)?;
            }
            Ok(())
        }
        scalar => write_entry(w, marker, level, Entry::Root, scalar),
    }
}

/// Literal form of a scalar; `None` for null, which prints as nothing.
fn scalar_literal(value: &TreeValue) -> Option<String> {
    match value {
        TreeValue::Null => None,
        TreeValue::Bool(b) => Some(b.to_string()),
        TreeValue::Number(n) => Some(format_number(*n)),
        TreeValue::String(s) => Some(format!("{s:?}")),
        TreeValue::Mapping(_) | TreeValue::Sequence(_) => Some(value.to_string()),
    }
}

fn line<W: Write>(w: &mut W, marker: Marker, level: usize, content: &str) -> fmt::Result {
    if content.is_empty() {
        return writeln!(w, "{}", marker.symbol());
    }
    writeln!(w, "{} {}{}", marker.symbol(), INDENT.repeat(level), content)
}

#[cfg(test)]
mod tests {
    use crate::options::DiffOptions;
    use crate::structural::Differ;
    use yamldiff_types::{load, TreeValue};

    fn yaml(text: &str) -> TreeValue {
        load(text).unwrap().remove(0).into_tree()
    }

    fn render(a: &str, b: &str) -> String {
        let (a, b) = (yaml(a), yaml(b));
        Differ::default().diff(&a, &b).render()
    }

    #[test]
    fn primitive_leaves() {
        assert_eq!(render("1", "1"), "  1\n");
        assert_eq!(render("1", "2"), "- 1\n+ 2\n");
        assert_eq!(render("\"1\"", "\"2\""), "- \"1\"\n+ \"2\"\n");
        assert_eq!(render("false", "true"), "- false\n+ true\n");
    }

    #[test]
    fn one_sided_root() {
        let v = yaml("2");
        assert_eq!(Differ::default().diff_only_in_b(&v).render(), "+ 2\n");
        assert_eq!(Differ::default().diff_only_in_a(&v).render(), "- 2\n");
    }

    #[test]
    fn mapping_leaves() {
        assert_eq!(render("foo: bar", "foo: bar"), "  foo: \"bar\"\n");
        assert_eq!(render("foo: bar", "foo: baz"), "- foo: \"bar\"\n+ foo: \"baz\"\n");
        assert_eq!(render("{}", "foo: baz"), "+ foo: \"baz\"\n");
        assert_eq!(render("foo: bar", "{}"), "- foo: \"bar\"\n");
    }

    #[test]
    fn sequence_leaves() {
        assert_eq!(render("[bar]", "[bar]"), "  - \"bar\"\n");
        assert_eq!(render("[bar]", "[baz]"), "- - \"bar\"\n+ - \"baz\"\n");
        assert_eq!(render("[]", "[baz]"), "+ - \"baz\"\n");
        assert_eq!(render("[bar]", "[]"), "- - \"bar\"\n");
    }

    #[test]
    fn nested_mapping() {
        let got = render(
            "foo:\n  bar: baz\n  baz: 1\n  barr: false\nbar: 1\nbaz: \"1\"\nzoo: 1\n",
            "foo:\n  bar: baz\n  baz:\n    a: b\n  bazz: 1\nbar: \"1\"\nbaz: 1\nboo: 1\n",
        );
        let want = "  foo:
    bar: \"baz\"
-   baz: 1
+   baz:
+     a: \"b\"
-   barr: false
+   bazz: 1
- bar: 1
+ bar: \"1\"
- baz: \"1\"
+ baz: 1
- zoo: 1
+ boo: 1
";
        assert_eq!(got, want);
    }

    #[test]
    fn nested_sequence() {
        let got = render("[1, [2, 3, 4], 5, 6]", "[1, 5, [2]]");
        let want = "  - 1
  - 5
  -
    - 2
-   - 3
-   - 4
- - 6
";
        assert_eq!(got, want);
    }

    #[test]
    fn one_sided_containers_dump_fully() {
        let got = render("a: 1", "a: 1\nbar:\n  - missing\n  - k: v\n");
        let want = "  a: 1
+ bar:
+   - \"missing\"
+   -
+     k: \"v\"
";
        assert_eq!(got, want);
    }

    #[test]
    fn null_prints_as_empty_value() {
        assert_eq!(render("x: 1\nempty:\n", "x: 1\n"), "  x: 1\n- empty:\n");
        let (a, b) = (yaml("x: 1\nempty:\n"), yaml("x: 1\n"));
        let got = Differ::new(DiffOptions::ignore_empty()).diff(&a, &b).render();
        assert_eq!(got, "  x: 1\n  empty:\n");
        assert_eq!(render("[~]", "[]"), "- -\n");
    }

    #[test]
    fn suppressed_right_only_key_prints_right_value() {
        let (a, b) = (yaml("x: 1\n"), yaml("x: 1\ncount: 0\n"));
        let got = Differ::new(DiffOptions::ignore_zero()).diff(&a, &b).render();
        assert_eq!(got, "  x: 1\n  count: 0\n");
    }

    #[test]
    fn null_root_has_no_trailing_space() {
        let null = TreeValue::Null;
        assert_eq!(Differ::default().diff_only_in_a(&null).render(), "-\n");
        let one = TreeValue::from(1);
        assert_eq!(Differ::default().diff(&null, &one).render(), "-\n+ 1\n");
    }

    #[test]
    fn strings_are_escaped() {
        let got = render("config: \"a\\nb\"", "config: \"a\\nc\"");
        assert_eq!(got, "- config: \"a\\nb\"\n+ config: \"a\\nc\"\n");
    }

    #[test]
    fn floats_and_integers() {
        assert_eq!(render("v: 0.5", "v: 3"), "- v: 0.5\n+ v: 3\n");
    }

    #[test]
    fn rendering_is_idempotent() {
        let (a, b) = (yaml("a: [1, 2]\nb: {c: d}\n"), yaml("b: {c: e}\na: [2, 3]\n"));
        let node = Differ::default().diff(&a, &b);
        assert_eq!(node.render(), node.render());
    }
}
