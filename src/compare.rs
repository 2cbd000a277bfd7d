// Relational operators over field values.
//
// Numbers compare numerically, with an integer operand promoted when
// the other side is a float. A string operand forces lexicographic
// comparison: the numeric side is coerced to its string form first, so
// "10" == 10 holds while "9" < "10" does not. Void takes part as the
// empty string. An absent operand propagates absent rather than
// comparing, booleans are not comparable at all, and error absorbs.
//
// The six operators share one table shape and differ only in the
// relation their kernels apply, so the kernels and table are stamped
// out together per operator.

use crate::dispatch::{absn, erro, BinaryFunc};
use crate::value::{Value, TYPE_DIM};

macro_rules! relational {
    ($kernels:ident, $table:ident, $op:tt) => {
        mod $kernels {
            use crate::value::Value;

            pub fn b_ss(a: &Value, b: &Value) -> Value {
                Value::from_bool(a.to_string() $op b.to_string())
            }

            pub fn b_sx(a: &Value, b: &Value) -> Value {
                Value::from_bool(a.to_string() $op b.to_string())
            }

            pub fn b_xs(a: &Value, b: &Value) -> Value {
                Value::from_bool(a.to_string() $op b.to_string())
            }

            pub fn b_ii(a: &Value, b: &Value) -> Value {
                Value::from_bool(a.as_i64() $op b.as_i64())
            }

            pub fn b_if(a: &Value, b: &Value) -> Value {
                Value::from_bool((a.as_i64() as f64) $op b.as_f64())
            }

            pub fn b_fi(a: &Value, b: &Value) -> Value {
                Value::from_bool(a.as_f64() $op (b.as_i64() as f64))
            }

            pub fn b_ff(a: &Value, b: &Value) -> Value {
                Value::from_bool(a.as_f64() $op b.as_f64())
            }
        }

        static $table: [[BinaryFunc; TYPE_DIM]; TYPE_DIM] = [
            // error absent void str int float bool
            [erro, erro, erro, erro, erro, erro, erro], // error
            [erro, absn, absn, absn, absn, absn, absn], // absent
            [erro, absn, $kernels::b_ss, $kernels::b_ss,
             $kernels::b_sx, $kernels::b_sx, erro], // void
            [erro, absn, $kernels::b_ss, $kernels::b_ss,
             $kernels::b_sx, $kernels::b_sx, erro], // str
            [erro, absn, $kernels::b_xs, $kernels::b_xs,
             $kernels::b_ii, $kernels::b_if, erro], // int
            [erro, absn, $kernels::b_xs, $kernels::b_xs,
             $kernels::b_fi, $kernels::b_ff, erro], // float
            [erro, absn, erro, erro, erro, erro, erro], // bool
        ];
    };
}

relational! { eq_kernels, EQ_TABLE, == }
relational! { ne_kernels, NE_TABLE, != }
relational! { lt_kernels, LT_TABLE, < }
relational! { lte_kernels, LTE_TABLE, <= }
relational! { gt_kernels, GT_TABLE, > }
relational! { gte_kernels, GTE_TABLE, >= }

impl Value {
    pub fn eq(&self, other: &Value) -> Value {
        EQ_TABLE[self.ord()][other.ord()](self, other)
    }

    pub fn ne(&self, other: &Value) -> Value {
        NE_TABLE[self.ord()][other.ord()](self, other)
    }

    pub fn lt(&self, other: &Value) -> Value {
        LT_TABLE[self.ord()][other.ord()](self, other)
    }

    pub fn lte(&self, other: &Value) -> Value {
        LTE_TABLE[self.ord()][other.ord()](self, other)
    }

    pub fn gt(&self, other: &Value) -> Value {
        GT_TABLE[self.ord()][other.ord()](self, other)
    }

    pub fn gte(&self, other: &Value) -> Value {
        GTE_TABLE[self.ord()][other.ord()](self, other)
    }
}
