use crate::error;
use crate::lang::{Error, Int, UInt};

type Result<T> = std::result::Result<T, Error>;

/// Binary operators, in the order the evaluator knows them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Noop,
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
    And,
    Or,
    Equal,
    Less,
    Greater,
    LessEqual,
    GreaterEqual,
    NotEqual,
}

impl Op {
    /// Binding strength. Higher binds tighter; `Noop` ends an expression.
    pub fn priority(self) -> u8 {
        use Op::*;
        match self {
            Noop => 0,
            Or => 2,
            And => 3,
            Equal | Less | Greater | LessEqual | GreaterEqual | NotEqual => 5,
            Add | Subtract => 6,
            Divide => 7,
            Multiply => 8,
            Power => 10,
        }
    }
}

pub struct Operation {}

impl Operation {
    pub fn apply(op: Op, lhs: Int, rhs: Int) -> Result<Int> {
        use Op::*;
        match op {
            Add => Operation::sum(lhs, rhs),
            Subtract => Operation::subtract(lhs, rhs),
            Multiply => Operation::multiply(lhs, rhs),
            Divide => Operation::divide(lhs, rhs),
            Power => Operation::power(lhs, rhs),
            And => Ok(lhs & rhs),
            Or => Ok(lhs | rhs),
            Noop => Ok(rhs),
            _ => Ok(Operation::compare(op, lhs, rhs)),
        }
    }

    pub fn sum(lhs: Int, rhs: Int) -> Result<Int> {
        match lhs.checked_add(rhs) {
            Some(n) => Ok(n),
            None => Err(error!(ArithmeticOverflow)),
        }
    }

    pub fn subtract(lhs: Int, rhs: Int) -> Result<Int> {
        match lhs.checked_sub(rhs) {
            Some(n) => Ok(n),
            None => Err(error!(ArithmeticOverflow)),
        }
    }

    /// Products whose operand bit lengths add up to less than the word
    /// size cannot overflow. Others are computed wide and range checked.
    pub fn multiply(lhs: Int, rhs: Int) -> Result<Int> {
        let bits = bit_length(lhs.unsigned_abs()) + bit_length(rhs.unsigned_abs());
        if bits < UInt::BITS {
            return Ok(lhs * rhs);
        }
        let wide = lhs as i64 * rhs as i64;
        if wide < Int::min_value() as i64 || wide > Int::max_value() as i64 {
            Err(error!(ArithmeticOverflow))
        } else {
            Ok(wide as Int)
        }
    }

    pub fn divide(lhs: Int, rhs: Int) -> Result<Int> {
        match lhs.checked_div(rhs) {
            Some(n) => Ok(n),
            None => Err(error!(ArithmeticOverflow)),
        }
    }

    /// Integer power. Negative exponents overflow; `0 ** 0` is 1.
    pub fn power(base: Int, exponent: Int) -> Result<Int> {
        if exponent < 0 {
            return Err(error!(ArithmeticOverflow));
        }
        let top = (UInt::BITS - 1) as Int;
        match base {
            0 => Ok(if exponent == 0 { 1 } else { 0 }),
            1 => Ok(1),
            -1 => Ok(if exponent % 2 == 0 { 1 } else { -1 }),
            2 | -2 => {
                let odd = exponent % 2 == 1;
                if exponent < top {
                    let n: Int = 1 << exponent;
                    Ok(if base < 0 && odd { -n } else { n })
                } else if exponent == top && base < 0 && odd {
                    Ok(Int::min_value())
                } else {
                    Err(error!(ArithmeticOverflow))
                }
            }
            _ => {
                let mut n: Int = 1;
                for _ in 0..exponent {
                    n = Operation::multiply(n, base)?;
                }
                Ok(n)
            }
        }
    }

    /// Comparisons yield -1 for true and 0 for false.
    pub fn compare(op: Op, lhs: Int, rhs: Int) -> Int {
        use Op::*;
        let result = match op {
            Equal => lhs == rhs,
            Less => lhs < rhs,
            Greater => lhs > rhs,
            LessEqual => lhs <= rhs,
            GreaterEqual => lhs >= rhs,
            NotEqual => lhs != rhs,
            _ => false,
        };
        truth(result)
    }

    /// Strings only know `=`, `<` and `>`. Order is by display code, a
    /// prefix sorting first.
    pub fn compare_strings(op: Op, lhs: &[u8], rhs: &[u8]) -> Result<Int> {
        match op {
            Op::Equal => Ok(truth(lhs == rhs)),
            Op::Less => Ok(truth(lhs < rhs)),
            Op::Greater => Ok(truth(lhs > rhs)),
            _ => Err(error!(Syntax)),
        }
    }

    /// `ABS` of the most negative number is left alone.
    pub fn absolute(n: Int) -> Int {
        n.wrapping_abs()
    }
}

fn bit_length(n: UInt) -> u32 {
    UInt::BITS - n.leading_zeros()
}

fn truth(b: bool) -> Int {
    if b {
        -1
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    fn overflows(r: Result<Int>) -> bool {
        matches!(r, Err(e) if e.code() == ErrorCode::ArithmeticOverflow)
    }

    #[test]
    fn test_multiply_edges() {
        assert_eq!(Operation::multiply(-1, Int::max_value()).unwrap(), -Int::max_value());
        assert_eq!(Operation::multiply(Int::min_value(), 1).unwrap(), Int::min_value());
        assert!(overflows(Operation::multiply(Int::min_value(), -1)));
        assert!(overflows(Operation::multiply(Int::max_value(), 2)));
    }

    #[test]
    fn test_divide() {
        assert_eq!(Operation::divide(7, 2).unwrap(), 3);
        assert_eq!(Operation::divide(-7, 2).unwrap(), -3);
        assert!(overflows(Operation::divide(1, 0)));
        assert!(overflows(Operation::divide(Int::min_value(), -1)));
    }

    #[test]
    fn test_power() {
        assert_eq!(Operation::power(0, 0).unwrap(), 1);
        assert_eq!(Operation::power(3, 4).unwrap(), 81);
        assert_eq!(Operation::power(-2, 3).unwrap(), -8);
        assert_eq!(Operation::power(-2, (UInt::BITS - 1) as Int).unwrap(), Int::min_value());
        assert!(overflows(Operation::power(2, (UInt::BITS - 1) as Int)));
        assert!(overflows(Operation::power(2, -1)));
        assert!(overflows(Operation::power(10, 100)));
    }

    #[test]
    fn test_strings() {
        assert_eq!(Operation::compare_strings(Op::Less, &[1, 2], &[1, 2, 3]).unwrap(), -1);
        assert_eq!(Operation::compare_strings(Op::Equal, &[1], &[2]).unwrap(), 0);
        assert!(Operation::compare_strings(Op::NotEqual, &[1], &[2]).is_err());
    }

    #[test]
    fn test_absolute_minimum() {
        assert_eq!(Operation::absolute(-5), 5);
        assert_eq!(Operation::absolute(Int::min_value()), Int::min_value());
    }
}
