use super::operation::{Op, Operation};
use super::scan::IdentKind;
use super::state::Mode;
use super::{Function, Host, Runtime, Val};
use crate::error;
use crate::lang::charset::*;
use crate::lang::token::{Keyword, Token, NOT};
use crate::lang::{Error, Int};

type Result<T> = std::result::Result<T, Error>;

const NEGATE_PRIORITY: u8 = 9;
const NOT_PRIORITY: u8 = 4;

/// An operand waiting for its right hand side.
#[derive(Debug)]
pub struct Pending {
    value: Val,
    op: Op,
    priority: u8,
}

impl Pending {
    fn sentinel() -> Pending {
        Pending {
            value: Val::default(),
            op: Op::Noop,
            priority: 0,
        }
    }
}

/// ## Expression evaluator
///
/// Operator precedence with one stack of pending operands shared by every
/// nested evaluation. Each evaluation opens with a sentinel of priority
/// zero and ends when an operator that does not bind tighter than the
/// sentinel comes up. Unary minus is `0 -` and `NOT x` is `-1 - x`, each
/// pushed with its own priority.
impl<H: Host> Runtime<H> {
    /// Evaluates the expression at the cursor into the accumulator. In
    /// check mode only the types are worked out.
    pub(super) fn evaluate(&mut self, mode: Mode) -> Result<()> {
        if self.depth >= self.config.max_nesting {
            return Err(error!(OutOfMemory));
        }
        let base = self.calc.len();
        self.depth += 1;
        let result = self.expression(mode);
        self.depth -= 1;
        if result.is_err() {
            self.calc.truncate(base);
        }
        result
    }

    /// Evaluates and insists on a number.
    pub(super) fn evaluate_number(&mut self, mode: Mode) -> Result<Int> {
        self.evaluate(mode)?;
        self.require_number()
    }

    pub(super) fn require_number(&self) -> Result<Int> {
        match self.state.result {
            Val::Number(n) => Ok(n),
            Val::Str(_) => Err(error!(Syntax)),
        }
    }

    fn expression(&mut self, mode: Mode) -> Result<()> {
        self.calc.push(Pending::sentinel())?;
        loop {
            self.operand(mode)?;
            let op = self.operator();
            loop {
                let top = match self.calc.last() {
                    Some(pending) => pending.priority,
                    None => 0,
                };
                if op.priority() > top {
                    let value = std::mem::take(&mut self.state.result);
                    self.calc.push(Pending {
                        value,
                        op,
                        priority: op.priority(),
                    })?;
                    break;
                }
                let pending = match self.calc.pop() {
                    Some(pending) if pending.op != Op::Noop => pending,
                    _ => return Ok(()),
                };
                self.fold(mode, pending)?;
            }
        }
    }

    fn fold(&mut self, mode: Mode, pending: Pending) -> Result<()> {
        let rhs = std::mem::take(&mut self.state.result);
        let n = match (pending.value, rhs) {
            (Val::Number(_), Val::Number(_)) if mode.is_check() => 0,
            (Val::Number(l), Val::Number(r)) => Operation::apply(pending.op, l, r)?,
            (Val::Str(l), Val::Str(r)) => {
                let n = Operation::compare_strings(pending.op, &l, &r)?;
                if mode.is_check() {
                    0
                } else {
                    n
                }
            }
            _ => return Err(error!(Syntax)),
        };
        self.state.result = Val::Number(n);
        Ok(())
    }

    fn operator(&mut self) -> Op {
        let op = match self.current_char() {
            PLUS => Op::Add,
            MINUS => Op::Subtract,
            STAR => Op::Multiply,
            SLASH => Op::Divide,
            EQUALS => Op::Equal,
            LESS => Op::Less,
            GREATER => Op::Greater,
            c => match Token::from_code(c) {
                Some(Token::Keyword(Keyword::And)) => Op::And,
                Some(Token::Keyword(Keyword::Or)) => Op::Or,
                Some(Token::Keyword(Keyword::Power)) => Op::Power,
                Some(Token::Keyword(Keyword::LessEqual)) => Op::LessEqual,
                Some(Token::Keyword(Keyword::GreaterEqual)) => Op::GreaterEqual,
                Some(Token::Keyword(Keyword::NotEqual)) => Op::NotEqual,
                _ => Op::Noop,
            },
        };
        if op != Op::Noop {
            self.advance();
        }
        op
    }

    fn operand(&mut self, mode: Mode) -> Result<()> {
        loop {
            let (value, priority) = match self.current_char() {
                MINUS => (0, NEGATE_PRIORITY),
                NOT => (-1, NOT_PRIORITY),
                _ => break,
            };
            self.advance();
            self.calc.push(Pending {
                value: Val::Number(value),
                op: Op::Subtract,
                priority,
            })?;
        }
        let c = self.current_char();
        if is_digit(c) {
            self.parse_signed_number()
        } else if c == QUOTE {
            self.parse_string()
        } else if c == LPAREN {
            self.advance();
            self.evaluate(mode)?;
            self.expect(RPAREN)
        } else if is_letter(c) {
            self.reference(mode)
        } else {
            Err(error!(Syntax))
        }
    }

    /// A variable, array element, or function call.
    fn reference(&mut self, mode: Mode) -> Result<()> {
        let (kind, len) = self.parse_identifier();
        let name = self.name(len)?;
        if let Some(function) = Function::lookup(&name, kind) {
            self.skip(len);
            if kind == IdentKind::StringFunction {
                self.skip(1);
            }
            return self.call(function, mode);
        }
        if Function::is_reserved(&name) {
            return Err(error!(Syntax));
        }
        self.skip(len);
        self.state.result = match kind {
            IdentKind::Number if mode.is_check() => Val::Number(0),
            IdentKind::Number => Val::Number(self.vars.fetch_number(&name)?),
            IdentKind::String => {
                self.skip(1);
                if mode.is_check() {
                    Val::Str(vec![])
                } else {
                    Val::Str(self.vars.fetch_string(&name)?)
                }
            }
            IdentKind::Array => {
                let index = self.subscript(mode)?;
                if mode.is_check() {
                    Val::Number(0)
                } else {
                    Val::Number(self.vars.fetch_element(&name, index)?)
                }
            }
            IdentKind::StringFunction => return Err(error!(Syntax)),
        };
        self.current_char();
        Ok(())
    }

    /// `(n)` after an array name.
    pub(super) fn subscript(&mut self, mode: Mode) -> Result<Int> {
        self.expect(LPAREN)?;
        let index = self.evaluate_number(mode)?;
        self.expect(RPAREN)?;
        Ok(index)
    }

    fn call(&mut self, function: Function, mode: Mode) -> Result<()> {
        let argument = if function.takes_argument() {
            self.expect(LPAREN)?;
            self.evaluate(mode)?;
            self.expect(RPAREN)?;
            let argument = std::mem::take(&mut self.state.result);
            if argument.is_string() != function.takes_string() {
                return Err(error!(Syntax));
            }
            argument
        } else {
            Val::default()
        };
        self.state.result = if mode.is_check() {
            if function.returns_string() {
                Val::Str(vec![])
            } else {
                Val::Number(0)
            }
        } else {
            self.builtin(function, argument)?
        };
        Ok(())
    }
}
