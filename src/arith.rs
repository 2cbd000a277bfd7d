// (C) 2020 Brandon Lewis
//
// Arithmetic over record field values.
//
// Integer +, -, and * detect overflow and demote the result to float;
// the dotted forms .+ .- .* ./ .// stay in 64-bit integers and wrap.
// Division and modulus are Pythonic: / returns an integer only when
// the quotient is exact, // floors toward negative infinity, and %
// takes the sign of the divisor. Division by integer zero never traps:
// it falls through to IEEE float division and yields an infinity or a
// NaN.
//
// Each operator's propagation behavior is a dense table indexed by the
// operand tags. Two shapes cover all of them: the additive shape, where
// an absent operand passes the other operand through, and the
// quotient shape, where an absent numerator absorbs to zero.

use crate::dispatch::{
    absn, erro, erro1, first, float_zero, int_zero, second, void, absn1, same, void1,
    BinaryFunc, UnaryFunc,
};
use crate::value::{Value, TYPE_DIM};

// Largest double strictly below 2^63. An integer product or power whose
// magnitude lands beyond this cannot fit in an i64.
const INT_LIMIT: f64 = 9223372036854774784.0;

// ---------------------------------------------------------------- kernels

fn add_n_ii(a: &Value, b: &Value) -> Value {
    let (x, y) = (a.as_i64(), b.as_i64());
    let c = x.wrapping_add(y);
    if (x > 0 && y > 0 && c < 0) || (x < 0 && y < 0 && c >= 0) {
        Value::from_f64(x as f64 + y as f64)
    } else {
        Value::from_i64(c)
    }
}

fn sub_n_ii(a: &Value, b: &Value) -> Value {
    let (x, y) = (a.as_i64(), b.as_i64());
    let c = x.wrapping_sub(y);
    if (x > 0 && y < 0 && c < 0) || (x < 0 && y > 0 && c >= 0) {
        Value::from_f64(x as f64 - y as f64)
    } else {
        Value::from_i64(c)
    }
}

fn mul_n_ii(a: &Value, b: &Value) -> Value {
    let (x, y) = (a.as_i64(), b.as_i64());
    let c = x as f64 * y as f64;
    if c.abs() > INT_LIMIT {
        Value::from_f64(c)
    } else {
        Value::from_i64(x.wrapping_mul(y))
    }
}

fn div_n_ii(a: &Value, b: &Value) -> Value {
    let (x, y) = (a.as_i64(), b.as_i64());
    if y == 0 {
        return Value::from_f64(x as f64 / y as f64);
    }
    if x.wrapping_rem(y) == 0 {
        Value::from_i64(x.wrapping_div(y))
    } else {
        Value::from_f64(x as f64 / y as f64)
    }
}

// Quotient floored toward negative infinity.
fn intdiv_n_ii(a: &Value, b: &Value) -> Value {
    let (x, y) = (a.as_i64(), b.as_i64());
    if y == 0 {
        return Value::from_f64(x as f64 / y as f64);
    }
    let q = x.wrapping_div(y);
    let r = x.wrapping_rem(y);
    if (x < 0) != (y < 0) && r != 0 {
        Value::from_i64(q - 1)
    } else {
        Value::from_i64(q)
    }
}

// Remainder with the sign of the divisor.
fn mod_n_ii(a: &Value, b: &Value) -> Value {
    let (x, y) = (a.as_i64(), b.as_i64());
    if y == 0 {
        return Value::from_f64(x as f64 / y as f64);
    }
    let m = x.wrapping_rem(y);
    if m != 0 && ((x >= 0 && y < 0) || (x < 0 && y >= 0)) {
        Value::from_i64(m + y)
    } else {
        Value::from_i64(m)
    }
}

fn pow_n_ii(a: &Value, b: &Value) -> Value {
    let (x, y) = (a.as_i64(), b.as_i64());
    if y < 0 {
        return Value::from_f64((x as f64).powf(y as f64));
    }
    let c = (x as f64).powf(y as f64);
    if c.abs() > INT_LIMIT {
        Value::from_f64(c)
    } else {
        Value::from_i64(ipow(x, y))
    }
}

// Exact power by squaring. The caller has already established that the
// true result fits in an i64.
fn ipow(base: i64, exponent: i64) -> i64 {
    let mut acc: i64 = 1;
    let mut base = base;
    let mut exponent = exponent;
    while exponent > 0 {
        if exponent & 1 == 1 {
            acc = acc.wrapping_mul(base);
        }
        base = base.wrapping_mul(base);
        exponent >>= 1;
    }
    acc
}

fn dotadd_i_ii(a: &Value, b: &Value) -> Value {
    Value::from_i64(a.as_i64().wrapping_add(b.as_i64()))
}

fn dotsub_i_ii(a: &Value, b: &Value) -> Value {
    Value::from_i64(a.as_i64().wrapping_sub(b.as_i64()))
}

fn dotmul_i_ii(a: &Value, b: &Value) -> Value {
    Value::from_i64(a.as_i64().wrapping_mul(b.as_i64()))
}

// Truncating integer division.
fn dotdiv_i_ii(a: &Value, b: &Value) -> Value {
    let (x, y) = (a.as_i64(), b.as_i64());
    if y == 0 {
        return Value::from_f64(x as f64 / y as f64);
    }
    Value::from_i64(x.wrapping_div(y))
}

// Float kernels. as_f64 promotes an integer operand, so one kernel per
// operator serves the int/float, float/int, and float/float slots.

fn add_f_xx(a: &Value, b: &Value) -> Value {
    Value::from_f64(a.as_f64() + b.as_f64())
}

fn sub_f_xx(a: &Value, b: &Value) -> Value {
    Value::from_f64(a.as_f64() - b.as_f64())
}

fn mul_f_xx(a: &Value, b: &Value) -> Value {
    Value::from_f64(a.as_f64() * b.as_f64())
}

fn div_f_xx(a: &Value, b: &Value) -> Value {
    Value::from_f64(a.as_f64() / b.as_f64())
}

fn intdiv_f_xx(a: &Value, b: &Value) -> Value {
    Value::from_f64((a.as_f64() / b.as_f64()).floor())
}

fn mod_f_xx(a: &Value, b: &Value) -> Value {
    let (x, y) = (a.as_f64(), b.as_f64());
    Value::from_f64(x - y * (x / y).floor())
}

fn pow_f_xx(a: &Value, b: &Value) -> Value {
    Value::from_f64(a.as_f64().powf(b.as_f64()))
}

fn neg_i(a: &Value) -> Value {
    Value::from_i64(a.as_i64().wrapping_neg())
}

fn neg_f(a: &Value) -> Value {
    Value::from_f64(-a.as_f64())
}

// ----------------------------------------------------------------- tables

// Builds one arithmetic dispatch table. `absent_passes` is the additive
// shape (an absent operand hands the other operand through);
// `absent_zeroes` is the quotient shape (an absent numerator absorbs to
// int or float zero).
macro_rules! arith_table {
    ($name:ident, $ii:ident, $xx:ident, absent_passes) => {
        arith_table! { @build $name, $ii, $xx, second, second }
    };
    ($name:ident, $ii:ident, $xx:ident, absent_zeroes) => {
        arith_table! { @build $name, $ii, $xx, int_zero, float_zero }
    };
    (@build $name:ident, $ii:ident, $xx:ident, $abs_int:ident, $abs_float:ident) => {
        static $name: [[BinaryFunc; TYPE_DIM]; TYPE_DIM] = [
            // error  absent  void  str   int        float       bool
            [erro, erro,  erro, erro, erro,      erro,       erro], // error
            [erro, absn,  absn, erro, $abs_int,  $abs_float, erro], // absent
            [erro, absn,  void, erro, void,      void,       erro], // void
            [erro, erro,  erro, erro, erro,      erro,       erro], // str
            [erro, first, void, erro, $ii,       $xx,        erro], // int
            [erro, first, void, erro, $xx,       $xx,        erro], // float
            [erro, erro,  erro, erro, erro,      erro,       erro], // bool
        ];
    };
}

arith_table! { ADD_TABLE, add_n_ii, add_f_xx, absent_passes }
arith_table! { SUB_TABLE, sub_n_ii, sub_f_xx, absent_passes }
arith_table! { MUL_TABLE, mul_n_ii, mul_f_xx, absent_passes }
arith_table! { POW_TABLE, pow_n_ii, pow_f_xx, absent_passes }
arith_table! { DIV_TABLE, div_n_ii, div_f_xx, absent_zeroes }
arith_table! { INTDIV_TABLE, intdiv_n_ii, intdiv_f_xx, absent_zeroes }
arith_table! { MOD_TABLE, mod_n_ii, mod_f_xx, absent_zeroes }
arith_table! { DOTADD_TABLE, dotadd_i_ii, add_f_xx, absent_passes }
arith_table! { DOTSUB_TABLE, dotsub_i_ii, sub_f_xx, absent_passes }
arith_table! { DOTMUL_TABLE, dotmul_i_ii, mul_f_xx, absent_passes }
arith_table! { DOTDIV_TABLE, dotdiv_i_ii, div_f_xx, absent_passes }
arith_table! { DOTINTDIV_TABLE, intdiv_n_ii, intdiv_f_xx, absent_passes }

static POS_TABLE: [UnaryFunc; TYPE_DIM] =
    [erro1, absn1, void1, erro1, same, same, erro1];

static NEG_TABLE: [UnaryFunc; TYPE_DIM] =
    [erro1, absn1, void1, erro1, neg_i, neg_f, erro1];

// ----------------------------------------------------------- entry points

impl Value {
    pub fn add(&self, other: &Value) -> Value {
        ADD_TABLE[self.ord()][other.ord()](self, other)
    }

    pub fn sub(&self, other: &Value) -> Value {
        SUB_TABLE[self.ord()][other.ord()](self, other)
    }

    pub fn mul(&self, other: &Value) -> Value {
        MUL_TABLE[self.ord()][other.ord()](self, other)
    }

    pub fn div(&self, other: &Value) -> Value {
        DIV_TABLE[self.ord()][other.ord()](self, other)
    }

    pub fn intdiv(&self, other: &Value) -> Value {
        INTDIV_TABLE[self.ord()][other.ord()](self, other)
    }

    pub fn modulo(&self, other: &Value) -> Value {
        MOD_TABLE[self.ord()][other.ord()](self, other)
    }

    pub fn pow(&self, other: &Value) -> Value {
        POW_TABLE[self.ord()][other.ord()](self, other)
    }

    pub fn dotadd(&self, other: &Value) -> Value {
        DOTADD_TABLE[self.ord()][other.ord()](self, other)
    }

    pub fn dotsub(&self, other: &Value) -> Value {
        DOTSUB_TABLE[self.ord()][other.ord()](self, other)
    }

    pub fn dotmul(&self, other: &Value) -> Value {
        DOTMUL_TABLE[self.ord()][other.ord()](self, other)
    }

    pub fn dotdiv(&self, other: &Value) -> Value {
        DOTDIV_TABLE[self.ord()][other.ord()](self, other)
    }

    pub fn dotintdiv(&self, other: &Value) -> Value {
        DOTINTDIV_TABLE[self.ord()][other.ord()](self, other)
    }

    pub fn pos(&self) -> Value {
        POS_TABLE[self.ord()](self)
    }

    pub fn neg(&self) -> Value {
        NEG_TABLE[self.ord()](self)
    }
}
