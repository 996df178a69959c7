use super::token::Span;

/// A literal or a reference to a bound array.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    /// Array literal. `None` marks a hole, as in `[1, , 3]`.
    Array(Vec<Option<Expr>>),
    Ref(Target),
}

/// A named array as written in a command.
#[derive(Debug, Clone, PartialEq)]
pub struct Target {
    pub name: String,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// `let a = [1, , 3]`
    Let { name: String, value: Expr },
    /// `a.push(4)`
    Call {
        target: Target,
        method: String,
        args: Vec<Expr>,
    },
    /// `a[0]`, `a.length`
    Read { target: Target, key: Expr },
    /// `a[0] = 1`, `a.length = 3`
    Write {
        target: Target,
        key: Expr,
        value: Expr,
    },
    /// `delete a[0]`
    Delete { target: Target, key: Expr },
    /// `0 in a`
    Has { key: Expr, target: Target },
    /// `show a`, or a bare `a`
    Show(Target),
    /// `values a`
    Values(Target),
    /// `keys a`
    Keys(Target),
    /// `json a`
    Json(Target),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub command: Command,
    pub span: Span,
}
