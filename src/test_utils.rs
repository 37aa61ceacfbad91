use std::fmt::{Display, Write};

use proptest::prelude::*;

use crate::node::Node;

const KEY_MAX: usize = 20;

/// Generate arbitrary keys from [0..[`KEY_MAX`]).
///
/// The small domain encourages key collisions between operations.
pub(crate) fn arbitrary_key() -> impl Strategy<Value = usize> {
    0..KEY_MAX
}

#[allow(unused)]
pub(crate) fn print_dot<K, V>(n: &Node<K, V>) -> String
where
    K: Display,
    V: Display,
{
    let mut buf = String::new();

    writeln!(buf, "digraph {{");
    writeln!(buf, r#"bgcolor = "transparent";"#);
    writeln!(
        buf,
        r#"node [shape = record; style = filled; fontcolor = orange4; fillcolor = white;];"#
    );
    recurse(n, &mut buf);
    writeln!(buf, "}}");

    buf
}

#[allow(unused)]
fn recurse<K, V, W>(n: &Node<K, V>, buf: &mut W)
where
    W: std::fmt::Write,
    K: Display,
    V: Display,
{
    writeln!(
        buf,
        r#""{}" [label="{} | {} | h={}"];"#,
        n.key(),
        n.key(),
        n.value(),
        n.height(),
    )
    .unwrap();

    for v in [n.left(), n.right()] {
        match v {
            Some(v) => {
                writeln!(
                    buf,
                    "\"{}\" -> \"{}\" [color = \"orange1\";];",
                    n.key(),
                    v.key()
                )
                .unwrap();
                recurse(v, buf);
            }
            None => {
                writeln!(buf, "\"null_{}\" [shape=point,style=invis];", n.key()).unwrap();
                writeln!(
                    buf,
                    "\"{}\" -> \"null_{}\" [style=invis];",
                    n.key(),
                    n.key()
                )
                .unwrap();
            }
        };
    }
}
