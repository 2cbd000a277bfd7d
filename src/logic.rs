// Bitwise and boolean operators.
//
// The bitwise family (& | ^ << >> ~) is integer-only. Absent and void
// propagate the way the additive arithmetic operators propagate them;
// a float or boolean operand is an outright error. Shift counts
// outside 0..=63 saturate: left shifts to zero, right shifts to the
// sign fill.
//
// The boolean family (and or xor not) is stricter still: both operands
// must already be booleans, and even absent or void operands are
// errors.

use crate::dispatch::{
    absn, absn1, erro, erro1, first, second, void, void1, BinaryFunc, UnaryFunc,
};
use crate::value::{Value, TYPE_DIM};

fn band_i_ii(a: &Value, b: &Value) -> Value {
    Value::from_i64(a.as_i64() & b.as_i64())
}

fn bor_i_ii(a: &Value, b: &Value) -> Value {
    Value::from_i64(a.as_i64() | b.as_i64())
}

fn bxor_i_ii(a: &Value, b: &Value) -> Value {
    Value::from_i64(a.as_i64() ^ b.as_i64())
}

fn shl_i_ii(a: &Value, b: &Value) -> Value {
    let (x, count) = (a.as_i64(), b.as_i64());
    if count < 0 || count > 63 {
        Value::from_i64(0)
    } else {
        Value::from_i64(x << count)
    }
}

fn shr_i_ii(a: &Value, b: &Value) -> Value {
    let (x, count) = (a.as_i64(), b.as_i64());
    if count < 0 || count > 63 {
        Value::from_i64(if x < 0 { -1 } else { 0 })
    } else {
        Value::from_i64(x >> count)
    }
}

fn bnot_i(a: &Value) -> Value {
    Value::from_i64(!a.as_i64())
}

fn and_b_bb(a: &Value, b: &Value) -> Value {
    Value::from_bool(a.as_bool() && b.as_bool())
}

fn or_b_bb(a: &Value, b: &Value) -> Value {
    Value::from_bool(a.as_bool() || b.as_bool())
}

fn xor_b_bb(a: &Value, b: &Value) -> Value {
    Value::from_bool(a.as_bool() != b.as_bool())
}

fn not_b(a: &Value) -> Value {
    Value::from_bool(!a.as_bool())
}

macro_rules! bitwise_table {
    ($name:ident, $ii:ident) => {
        static $name: [[BinaryFunc; TYPE_DIM]; TYPE_DIM] = [
            // error absent void str int float bool
            [erro, erro,  erro, erro, erro,   erro, erro], // error
            [erro, absn,  absn, erro, second, erro, erro], // absent
            [erro, absn,  void, erro, void,   erro, erro], // void
            [erro, erro,  erro, erro, erro,   erro, erro], // str
            [erro, first, void, erro, $ii,    erro, erro], // int
            [erro, erro,  erro, erro, erro,   erro, erro], // float
            [erro, erro,  erro, erro, erro,   erro, erro], // bool
        ];
    };
}

macro_rules! boolean_table {
    ($name:ident, $bb:ident) => {
        static $name: [[BinaryFunc; TYPE_DIM]; TYPE_DIM] = [
            // error absent void str int float bool
            [erro, erro, erro, erro, erro, erro, erro], // error
            [erro, erro, erro, erro, erro, erro, erro], // absent
            [erro, erro, erro, erro, erro, erro, erro], // void
            [erro, erro, erro, erro, erro, erro, erro], // str
            [erro, erro, erro, erro, erro, erro, erro], // int
            [erro, erro, erro, erro, erro, erro, erro], // float
            [erro, erro, erro, erro, erro, erro, $bb],  // bool
        ];
    };
}

bitwise_table! { BITAND_TABLE, band_i_ii }
bitwise_table! { BITOR_TABLE, bor_i_ii }
bitwise_table! { BITXOR_TABLE, bxor_i_ii }
bitwise_table! { SHL_TABLE, shl_i_ii }
bitwise_table! { SHR_TABLE, shr_i_ii }

boolean_table! { AND_TABLE, and_b_bb }
boolean_table! { OR_TABLE, or_b_bb }
boolean_table! { XOR_TABLE, xor_b_bb }

static BITNOT_TABLE: [UnaryFunc; TYPE_DIM] =
    [erro1, absn1, void1, erro1, bnot_i, erro1, erro1];

static NOT_TABLE: [UnaryFunc; TYPE_DIM] =
    [erro1, erro1, erro1, erro1, erro1, erro1, not_b];

impl Value {
    pub fn bitand(&self, other: &Value) -> Value {
        BITAND_TABLE[self.ord()][other.ord()](self, other)
    }

    pub fn bitor(&self, other: &Value) -> Value {
        BITOR_TABLE[self.ord()][other.ord()](self, other)
    }

    pub fn bitxor(&self, other: &Value) -> Value {
        BITXOR_TABLE[self.ord()][other.ord()](self, other)
    }

    pub fn shl(&self, other: &Value) -> Value {
        SHL_TABLE[self.ord()][other.ord()](self, other)
    }

    pub fn shr(&self, other: &Value) -> Value {
        SHR_TABLE[self.ord()][other.ord()](self, other)
    }

    pub fn bitnot(&self) -> Value {
        BITNOT_TABLE[self.ord()](self)
    }

    pub fn and(&self, other: &Value) -> Value {
        AND_TABLE[self.ord()][other.ord()](self, other)
    }

    pub fn or(&self, other: &Value) -> Value {
        OR_TABLE[self.ord()][other.ord()](self, other)
    }

    pub fn xor(&self, other: &Value) -> Value {
        XOR_TABLE[self.ord()][other.ord()](self, other)
    }

    pub fn not(&self) -> Value {
        NOT_TABLE[self.ord()](self)
    }
}
