// (C) 2020 Brandon Lewis
//
// The polymorphic scalar carried by every record field.
//
// *Type model*
//
// A value is one of seven things: an error, an absent field, a void
// (present-but-empty) field, a string, a 64-bit integer, a double, or
// a boolean. Errors are in-band: applying an operator to operand types
// it has no semantics for yields Value::Error rather than unwinding.
// Absent and void are distinct, and operators propagate them
// differently -- absent is "the record never had this field", void is
// "the field was there, holding the empty string".
//
// *Dispatch*
//
// Each binary operator is backed by a dense TYPE_DIM x TYPE_DIM table
// of kernel functions indexed by the operand tag ordinals; each unary
// operator by a TYPE_DIM vector. The tables live next to their kernels
// in arith, compare, logic, and concat; the operator entry points are
// methods on Value that do one table lookup and one call. Every slot
// of every table is filled -- disallowed pairings hold an explicit
// error kernel, never an implicit default.
//
// *Print fidelity*
//
// Numbers inferred from input text remember their exact spelling, so a
// field read as "0x1f" prints back as "0x1f" as long as nothing
// recomputes it. Numbers produced by kernels have no spelling and
// print canonically.
//
// *Purity*
//
// Values are immutable once constructed. Kernels take borrowed
// operands and return fresh values; there is no shared state, so the
// algebra can be evaluated from any number of threads at once.

use regex::Regex;
use std::fmt;

// Type tags. The ordinals matter: they index the dispatch tables.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TypeTag {
    Error = 0,
    Absent = 1,
    Void = 2,
    Str = 3,
    Int = 4,
    Float = 5,
    Bool = 6,
}

// Dispatch table dimension: one past the highest tag ordinal.
pub const TYPE_DIM: usize = 7;

// All field values.
//
// Int and Float carry the original input spelling when the value was
// inferred from text, or None when it was produced natively.
#[derive(Clone, Debug)]
pub enum Value {
    Error,
    Absent,
    Void,
    Str(String),
    Int(i64, Option<String>),
    Float(f64, Option<String>),
    Bool(bool),
}

lazy_static! {
    static ref INT_REGEX: Regex = Regex::new(r"^[-+]?[0-9]+$").unwrap();
    static ref HEX_REGEX: Regex = Regex::new(r"^[-+]?0[xX][0-9a-fA-F]+$").unwrap();
    static ref FLOAT_REGEX: Regex =
        Regex::new(r"^[-+]?([0-9]+\.?[0-9]*|\.[0-9]+)([eE][-+]?[0-9]+)?$").unwrap();
}

// Read a hex literal, with the magnitude taken as the 64-bit pattern,
// so "0xffffffffffffffff" comes back as -1.
fn parse_hex(text: &str) -> Option<i64> {
    let (negate, digits) = match text.as_bytes()[0] {
        b'-' => (true, &text[3..]),
        b'+' => (false, &text[3..]),
        _ => (false, &text[2..]),
    };
    let magnitude = u64::from_str_radix(digits, 16).ok()? as i64;
    Some(if negate { magnitude.wrapping_neg() } else { magnitude })
}

impl Value {
    pub fn from_i64(v: i64) -> Value {
        Value::Int(v, None)
    }

    pub fn from_f64(v: f64) -> Value {
        Value::Float(v, None)
    }

    pub fn from_bool(v: bool) -> Value {
        Value::Bool(v)
    }

    // A value that is exactly the given text. Empty text is Void, which
    // keeps the Str variant non-empty by construction.
    pub fn from_text(text: &str) -> Value {
        if text.is_empty() {
            Value::Void
        } else {
            Value::Str(text.to_string())
        }
    }

    // Type-infer a field value from its input text: int, then float,
    // then string, preserving the original spelling for the numeric
    // readings. Decimal integers too wide for 64 bits fall through to
    // the float reading.
    pub fn infer(text: &str) -> Value {
        if text.is_empty() {
            return Value::Void;
        }
        if HEX_REGEX.is_match(text) {
            if let Some(v) = parse_hex(text) {
                return Value::Int(v, Some(text.to_string()));
            }
        } else if INT_REGEX.is_match(text) {
            if let Ok(v) = text.parse::<i64>() {
                return Value::Int(v, Some(text.to_string()));
            }
        }
        if FLOAT_REGEX.is_match(text) {
            if let Ok(v) = text.parse::<f64>() {
                return Value::Float(v, Some(text.to_string()));
            }
        }
        Value::Str(text.to_string())
    }

    pub fn tag(&self) -> TypeTag {
        match self {
            Value::Error => TypeTag::Error,
            Value::Absent => TypeTag::Absent,
            Value::Void => TypeTag::Void,
            Value::Str(_) => TypeTag::Str,
            Value::Int(_, _) => TypeTag::Int,
            Value::Float(_, _) => TypeTag::Float,
            Value::Bool(_) => TypeTag::Bool,
        }
    }

    // Index of this value's row or column in a dispatch table.
    pub(crate) fn ord(&self) -> usize {
        self.tag() as usize
    }

    // Payload readers for kernels reached through the dispatch tables.
    // Each is meaningful only for the tags its table slot guarantees;
    // the fallback arms exist to keep them total.
    pub(crate) fn as_i64(&self) -> i64 {
        match self {
            Value::Int(v, _) => *v,
            _ => 0,
        }
    }

    pub(crate) fn as_f64(&self) -> f64 {
        match self {
            Value::Float(v, _) => *v,
            Value::Int(v, _) => *v as f64,
            _ => 0.0,
        }
    }

    pub(crate) fn as_bool(&self) -> bool {
        match self {
            Value::Bool(v) => *v,
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, out: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Error => write!(out, "(error)"),
            Value::Absent => Ok(()),
            Value::Void => Ok(()),
            Value::Str(text) => write!(out, "{}", text),
            Value::Int(_, Some(spelling)) => write!(out, "{}", spelling),
            Value::Float(_, Some(spelling)) => write!(out, "{}", spelling),
            Value::Int(v, None) => write!(out, "{}", v),
            Value::Float(v, None) => write!(out, "{:.6}", v),
            Value::Bool(v) => write!(out, "{}", v),
        }
    }
}

// Structural identity: same tag, same native payload. Spelling is
// presentation, not identity, so Int(16, "0x10") equals Int(16, "16").
// This is not the semantic == operator -- that is Value::eq in
// compare, with its own coercion rules.
impl PartialEq for Value {
    fn eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Error, Value::Error) => true,
            (Value::Absent, Value::Absent) => true,
            (Value::Void, Value::Void) => true,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Int(a, _), Value::Int(b, _)) => a == b,
            (Value::Float(a, _), Value::Float(b, _)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infer_int() {
        assert_eq!(Value::infer("0"), Value::from_i64(0));
        assert_eq!(Value::infer("37"), Value::from_i64(37));
        assert_eq!(Value::infer("-37"), Value::from_i64(-37));
        assert_eq!(Value::infer("+37"), Value::from_i64(37));
        assert_eq!(Value::infer("0x10"), Value::from_i64(16));
        assert_eq!(Value::infer("0XFF"), Value::from_i64(255));
        assert_eq!(Value::infer("-0x10"), Value::from_i64(-16));
        assert_eq!(Value::infer("0xffffffffffffffff"), Value::from_i64(-1));
    }

    #[test]
    fn test_infer_float() {
        assert_eq!(Value::infer("1.5"), Value::from_f64(1.5));
        assert_eq!(Value::infer("-1.5"), Value::from_f64(-1.5));
        assert_eq!(Value::infer(".5"), Value::from_f64(0.5));
        assert_eq!(Value::infer("5."), Value::from_f64(5.0));
        assert_eq!(Value::infer("1e3"), Value::from_f64(1000.0));
        assert_eq!(Value::infer("2.5e-1"), Value::from_f64(0.25));
        // Too wide for an i64: read as float.
        assert_eq!(
            Value::infer("99999999999999999999"),
            Value::from_f64(1e20)
        );
    }

    #[test]
    fn test_infer_other() {
        assert_eq!(Value::infer(""), Value::Void);
        assert_eq!(Value::infer("abc"), Value::from_text("abc"));
        assert_eq!(Value::infer("1x2"), Value::from_text("1x2"));
        assert_eq!(Value::infer("1.2.3"), Value::from_text("1.2.3"));
        // Booleans are never inferred; "true" stays text.
        assert_eq!(Value::infer("true"), Value::from_text("true"));
        // IEEE spellings are not numeric literals here.
        assert_eq!(Value::infer("NaN"), Value::from_text("NaN"));
        assert_eq!(Value::infer("inf"), Value::from_text("inf"));
    }

    #[test]
    fn test_display_preserves_spelling() {
        assert_eq!(Value::infer("0x10").to_string(), "0x10");
        assert_eq!(Value::infer("007").to_string(), "007");
        assert_eq!(Value::infer("1.50").to_string(), "1.50");
        assert_eq!(Value::infer("1e3").to_string(), "1e3");
    }

    #[test]
    fn test_display_canonical() {
        assert_eq!(Value::from_i64(20).to_string(), "20");
        assert_eq!(Value::from_f64(20.0).to_string(), "20.000000");
        assert_eq!(Value::from_f64(0.25).to_string(), "0.250000");
        assert_eq!(Value::from_bool(true).to_string(), "true");
        assert_eq!(Value::from_bool(false).to_string(), "false");
        assert_eq!(Value::Error.to_string(), "(error)");
        assert_eq!(Value::Absent.to_string(), "");
        assert_eq!(Value::Void.to_string(), "");
        assert_eq!(Value::from_text("abc").to_string(), "abc");
    }

    #[test]
    fn test_from_text_empty_is_void() {
        assert_eq!(Value::from_text(""), Value::Void);
    }

    #[test]
    fn test_structural_identity_ignores_spelling() {
        assert_eq!(Value::infer("0x10"), Value::from_i64(16));
        assert_eq!(Value::infer("1.50"), Value::from_f64(1.5));
        assert_ne!(Value::from_i64(1), Value::from_f64(1.0));
        assert_ne!(Value::Absent, Value::Void);
    }

    #[test]
    fn test_tag_ordinals() {
        assert_eq!(TypeTag::Error as usize, 0);
        assert_eq!(TypeTag::Absent as usize, 1);
        assert_eq!(TypeTag::Void as usize, 2);
        assert_eq!(TypeTag::Str as usize, 3);
        assert_eq!(TypeTag::Int as usize, 4);
        assert_eq!(TypeTag::Float as usize, 5);
        assert_eq!(TypeTag::Bool as usize, 6);
    }
}
