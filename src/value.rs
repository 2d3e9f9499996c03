// ABOUTME: Value types representing the interpreter's tagged tree nodes

use crate::config::FLOAT_PRECISION;
use std::fmt;
use std::sync::Arc;

use crate::eval::BuiltinFn;

/// The tagged tree node every parsed expression and every evaluation result is
/// made of. Atom, List, UserFunc and BuiltinFunc are the four shapes; `is_atom`
/// / `is_list` / `is_func` partition them for dispatch.
#[derive(Debug, Clone)]
pub enum Value {
    Atom(Arc<str>),
    List(Arc<Vec<Value>>),
    UserFunc {
        params: Arc<Vec<String>>,
        body: Arc<Value>,
    },
    BuiltinFunc {
        name: Arc<str>,
        func: BuiltinFn,
    },
}

impl Value {
    pub fn atom(s: impl Into<Arc<str>>) -> Value {
        Value::Atom(s.into())
    }

    pub fn empty_atom() -> Value {
        Value::Atom(Arc::from(""))
    }

    pub fn empty_list() -> Value {
        Value::List(Arc::new(Vec::new()))
    }

    pub fn list(items: Vec<Value>) -> Value {
        Value::List(Arc::new(items))
    }

    pub fn is_atom(&self) -> bool {
        matches!(self, Value::Atom(_))
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Value::List(_))
    }

    pub fn is_func(&self) -> bool {
        matches!(self, Value::UserFunc { .. } | Value::BuiltinFunc { .. })
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Value::Atom(s) => s.is_empty(),
            Value::List(items) => items.is_empty(),
            Value::UserFunc { body, .. } => body.is_empty(),
            Value::BuiltinFunc { .. } => false,
        }
    }

    pub fn as_atom_str(&self) -> Option<&str> {
        match self {
            Value::Atom(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&Arc<Vec<Value>>> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Numeric coercion: parse the atom's text as a C-style `atof`; non-atoms
    /// coerce to zero.
    pub fn as_f64(&self) -> f64 {
        match self {
            Value::Atom(s) => atof(s),
            _ => 0.0,
        }
    }

    /// Boolean coercion: an Atom is truthy if its numeric coercion is nonzero
    /// or its raw text is exactly `"true"`; a List is truthy iff non-empty; a
    /// Func is always truthy.
    pub fn as_bool(&self) -> bool {
        match self {
            Value::Atom(s) => self.as_f64() != 0.0 || s.as_ref() == "true",
            Value::List(items) => !items.is_empty(),
            Value::UserFunc { .. } | Value::BuiltinFunc { .. } => true,
        }
    }

    /// Structural equality: same shape and, recursively, same content. Funcs
    /// never compare equal, not even to themselves.
    pub fn structural_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Atom(a), Value::Atom(b)) => a == b,
            (Value::List(a), Value::List(b)) => {
                a.len() == b.len() && a.iter().zip(b.iter()).all(|(x, y)| x.structural_eq(y))
            }
            (Value::UserFunc { .. } | Value::BuiltinFunc { .. }, _)
            | (_, Value::UserFunc { .. } | Value::BuiltinFunc { .. }) => false,
            _ => false,
        }
    }

    pub fn from_f64(d: f64) -> Value {
        if d.is_nan() {
            return Value::atom("nan");
        }
        if d.is_infinite() {
            return Value::atom(if d > 0.0 { "inf" } else { "-inf" });
        }
        let mut s = format!("{:.*}", FLOAT_PRECISION, d);
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
        Value::atom(s)
    }

    pub fn from_bool(b: bool) -> Value {
        Value::atom(if b { "1" } else { "" })
    }

    pub fn from_i64(n: i64) -> Value {
        Value::atom(n.to_string())
    }

    pub fn from_u64(n: u64) -> Value {
        Value::atom(n.to_string())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Atom(s) => write!(f, "{s}"),
            Value::List(items) => {
                write!(f, "(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, ")")
            }
            Value::UserFunc { .. } => write!(f, "<fn>"),
            Value::BuiltinFunc { name, .. } => write!(f, "{name}"),
        }
    }
}

/// A minimal C-`atof` style numeric-prefix parser: optional leading
/// whitespace, an optional sign, digits with an optional fraction and
/// exponent; anything that isn't a recognizable numeric prefix coerces to
/// `0.0`. Also accepts the `inf`/`infinity`/`nan` literals `strtod` parses.
fn atof(s: &str) -> f64 {
    let bytes = s.as_bytes();
    let n = bytes.len();
    let mut i = 0;
    while i < n && (bytes[i] as char).is_whitespace() {
        i += 1;
    }

    let sign_start = i;
    let negative = i < n && bytes[i] == b'-';
    if i < n && (bytes[i] == b'+' || bytes[i] == b'-') {
        i += 1;
    }

    let rest = &s[i..];
    if rest.len() >= 3 && rest[..3].eq_ignore_ascii_case("nan") {
        return f64::NAN;
    }
    if rest.len() >= 3 && rest[..3].eq_ignore_ascii_case("inf") {
        return if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let start = sign_start;
    let mut seen_digit = false;
    while i < n && bytes[i].is_ascii_digit() {
        i += 1;
        seen_digit = true;
    }
    if i < n && bytes[i] == b'.' {
        i += 1;
        while i < n && bytes[i].is_ascii_digit() {
            i += 1;
            seen_digit = true;
        }
    }
    if seen_digit && i < n && (bytes[i] == b'e' || bytes[i] == b'E') {
        let save = i;
        i += 1;
        if i < n && (bytes[i] == b'+' || bytes[i] == b'-') {
            i += 1;
        }
        let exp_start = i;
        while i < n && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i == exp_start {
            i = save;
        }
    }

    if !seen_digit {
        return 0.0;
    }
    s[start..i].parse::<f64>().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_number_strips_to_integer_text() {
        assert_eq!(format!("{}", Value::from_f64(100.0)), "100");
        assert_eq!(format!("{}", Value::from_f64(0.0)), "0");
    }

    #[test]
    fn fraction_keeps_significant_digits() {
        assert_eq!(format!("{}", Value::from_f64(0.5)), "0.5");
    }

    #[test]
    fn nan_and_infinities_print_literally() {
        assert_eq!(format!("{}", Value::from_f64(f64::NAN)), "nan");
        assert_eq!(format!("{}", Value::from_f64(f64::INFINITY)), "inf");
        assert_eq!(format!("{}", Value::from_f64(f64::NEG_INFINITY)), "-inf");
    }

    #[test]
    fn atom_truthiness_matches_atof_and_literal_true() {
        assert!(!Value::atom("").as_bool());
        assert!(!Value::atom("0").as_bool());
        assert!(Value::atom("1").as_bool());
        assert!(Value::atom("true").as_bool());
        assert!(!Value::atom("false").as_bool());
    }

    #[test]
    fn list_display_uses_single_space_separators() {
        let v = Value::list(vec![Value::atom("1"), Value::atom("2"), Value::atom("3")]);
        assert_eq!(format!("{v}"), "(1 2 3)");
        assert_eq!(format!("{}", Value::empty_list()), "()");
    }

    #[test]
    fn structural_equality_never_equates_funcs() {
        let f = Value::UserFunc {
            params: Arc::new(vec![]),
            body: Arc::new(Value::empty_atom()),
        };
        assert!(!f.structural_eq(&f));
    }

    #[test]
    fn structural_equality_distinguishes_numeric_text() {
        assert!(!Value::atom("3").structural_eq(&Value::atom("3.00001")));
        assert!(Value::atom("1").structural_eq(&Value::atom("1")));
    }
}
