//! Display formatting for condition trees

use super::Condition;
use std::fmt;

/// Render a composite's children joined by an operator, inside parentheses
fn fmt_joined<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    children: &[Condition<T>],
    separator: &str,
) -> fmt::Result {
    write!(f, "(")?;
    for (i, child) in children.iter().enumerate() {
        if i > 0 {
            write!(f, "{}", separator)?;
        }
        write!(f, "{}", child)?;
    }
    write!(f, ")")
}

/// Deterministic, structural rendering
///
/// The output depends only on the tree's shape and the tokens' own `Display`
/// forms, so equal renderings can be used as an equality check in tests:
///
/// - atoms render as their token;
/// - `And`/`Or` render as their children joined by `" && "` / `" || "`,
///   always parenthesized, even with a single child;
/// - `Not` renders as `!` followed by its child (compound children carry
///   their own parentheses);
/// - the constants render as `true` / `false`.
///
/// # Examples
///
/// ```
/// use quine_logic::Condition;
///
/// let a = Condition::atom("a");
/// let b = Condition::atom("b");
/// let c = Condition::atom("c");
///
/// let expr = a.and(&b.or(&c).not());
/// assert_eq!(expr.to_string(), "(a && !(b || c))");
/// ```
impl<T: fmt::Display> fmt::Display for Condition<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::Atom(token) => write!(f, "{}", token),
            Condition::And(children) => fmt_joined(f, children, " && "),
            Condition::Or(children) => fmt_joined(f, children, " || "),
            Condition::Not(inner) => write!(f, "!{}", inner),
            Condition::AlwaysTrue => write!(f, "true"),
            Condition::AlwaysFalse => write!(f, "false"),
        }
    }
}
