// Kernel shapes and the shared filler kernels used across operator
// dispatch tables.
//
// A binary operator is a dense TYPE_DIM x TYPE_DIM table of BinaryFunc
// and a unary operator is a TYPE_DIM vector of UnaryFunc, both indexed
// by tag ordinal. The fillers below cover the propagation slots that
// recur in every table: absorb to error, pass absent or void through,
// hand back one operand (possibly coerced to its string form), or
// absorb an absent numerator to zero.

use crate::value::Value;

pub type BinaryFunc = fn(&Value, &Value) -> Value;
pub type UnaryFunc = fn(&Value) -> Value;

pub fn erro(_a: &Value, _b: &Value) -> Value {
    Value::Error
}

pub fn absn(_a: &Value, _b: &Value) -> Value {
    Value::Absent
}

pub fn void(_a: &Value, _b: &Value) -> Value {
    Value::Void
}

pub fn first(a: &Value, _b: &Value) -> Value {
    a.clone()
}

pub fn second(_a: &Value, b: &Value) -> Value {
    b.clone()
}

pub fn first_str(a: &Value, _b: &Value) -> Value {
    Value::Str(a.to_string())
}

pub fn second_str(_a: &Value, b: &Value) -> Value {
    Value::Str(b.to_string())
}

pub fn int_zero(_a: &Value, _b: &Value) -> Value {
    Value::from_i64(0)
}

pub fn float_zero(_a: &Value, _b: &Value) -> Value {
    Value::from_f64(0.0)
}

pub fn erro1(_a: &Value) -> Value {
    Value::Error
}

pub fn absn1(_a: &Value) -> Value {
    Value::Absent
}

pub fn void1(_a: &Value) -> Value {
    Value::Void
}

pub fn same(a: &Value) -> Value {
    a.clone()
}
