use super::scan::IdentKind;
use super::state::{Cursor, Mode};
use super::syntax::{descriptor, Class};
use super::{Function, Host, Key, Runtime, Status, Val};
use crate::error;
use crate::lang::charset::*;
use crate::lang::token::{Token, Word, AT, TAB, TO};
use crate::lang::{Error, ErrorCode, Int, LineNumber};
use std::convert::TryFrom;

type Result<T> = std::result::Result<T, Error>;

/// What comes after a statement on its line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Done,
    /// A true IF: the rest of the line is another statement.
    Continue,
}

/// Somewhere a value can be stored.
#[derive(Debug, Clone, PartialEq)]
pub enum Target {
    Number(Vec<u8>),
    Element(Vec<u8>, Int),
    String(Vec<u8>),
}

impl Target {
    pub fn is_string(&self) -> bool {
        matches!(self, Target::String(_))
    }
}

#[derive(Debug, Default)]
struct Operands {
    target: Option<Target>,
    values: Vec<Val>,
}

impl Operands {
    fn number(&self) -> Option<Int> {
        self.values.first().and_then(Val::number)
    }
}

/// Where the next READ looks: a line to search from and, once a DATA
/// line is found, the offset of its next item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DataPointer {
    line: LineNumber,
    offset: Option<usize>,
}

impl DataPointer {
    pub fn restore(line: LineNumber) -> DataPointer {
        DataPointer { line, offset: None }
    }
}

/// ## Statement dispatcher
///
/// Every statement is checked against its row in the descriptor table
/// the same way whether the line is being typed or run. Only in execute
/// mode does the handler then act.
impl<H: Host> Runtime<H> {
    /// Checks or runs the line at the cursor. Errors are latched.
    pub(super) fn line(&mut self, mode: Mode) -> Result<()> {
        loop {
            match self.statement(mode) {
                Ok(Flow::Done) => return Ok(()),
                Ok(Flow::Continue) => continue,
                Err(error) => return Err(self.state.latch(error)),
            }
        }
    }

    fn statement(&mut self, mode: Mode) -> Result<Flow> {
        self.calc.clear();
        self.state.flags.keyword_expected = true;
        let c = self.current_char();
        self.state.flags.keyword_expected = false;
        if c == NEWLINE {
            return Ok(Flow::Done);
        }
        let word = match Token::from_code(c) {
            Some(Token::Word(word)) => {
                self.advance();
                word
            }
            _ if is_letter(c) => Word::Let,
            _ => return Err(error!(Syntax)),
        };
        let mut operands = Operands::default();
        for &class in descriptor(word) {
            match class {
                Class::NoOperands => {}
                Class::Literal(code) => self.expect(code)?,
                Class::VariableRequired => operands.target = Some(self.target(mode, false)?),
                Class::IntegerVariableTarget => operands.target = Some(self.target(mode, true)?),
                Class::ExpressionEitherType => {
                    self.evaluate(mode)?;
                    let value = std::mem::take(&mut self.state.result);
                    if let Some(target) = &operands.target {
                        if target.is_string() != value.is_string() {
                            return Err(error!(Syntax));
                        }
                    }
                    operands.values.push(value);
                }
                Class::NumericExpressionRequired => {
                    let n = self.evaluate_number(mode)?;
                    operands.values.push(Val::Number(n));
                }
                Class::OptionalNumericExpression => {
                    if self.current_char() != NEWLINE {
                        let n = self.evaluate_number(mode)?;
                        operands.values.push(Val::Number(n));
                    }
                }
                Class::SelfParsed => return self.self_parsed(word, mode, operands),
            }
        }
        self.end_of_line()?;
        if mode == Mode::Execute {
            self.execute(word, operands)?;
        }
        Ok(Flow::Done)
    }

    /// Reads an assignment target. Builtin names are refused.
    fn target(&mut self, mode: Mode, number_only: bool) -> Result<Target> {
        if !is_letter(self.current_char()) {
            return Err(error!(Syntax));
        }
        let (kind, len) = self.parse_identifier();
        let name = self.name(len)?;
        if Function::is_reserved(&name) {
            return Err(error!(Syntax));
        }
        self.skip(len);
        let target = match kind {
            IdentKind::Number => Target::Number(name),
            IdentKind::String if !number_only => {
                self.skip(1);
                Target::String(name)
            }
            IdentKind::Array if !number_only => {
                let index = self.subscript(mode)?;
                Target::Element(name, index)
            }
            _ => return Err(error!(Syntax)),
        };
        self.current_char();
        Ok(target)
    }

    fn execute(&mut self, word: Word, operands: Operands) -> Result<()> {
        match word {
            Word::List => {
                let from = line_number(operands.number().unwrap_or(0))?;
                self.list(from)
            }
            Word::Run => {
                let from = line_number(operands.number().unwrap_or(1))?;
                self.clear_variables();
                self.goto(from.max(1));
                Ok(())
            }
            Word::New => {
                self.new_program();
                Ok(())
            }
            Word::Clear => {
                self.clear_variables();
                Ok(())
            }
            Word::Cont => {
                if self.cont_line != 0 {
                    self.goto(self.cont_line);
                }
                Ok(())
            }
            Word::Save => self.save(operands.number().unwrap_or(0)),
            Word::Load => self.load(operands.number().unwrap_or(0)),
            Word::Let => match (operands.target, operands.values.into_iter().next()) {
                (Some(target), Some(value)) => self.assign(&target, value),
                _ => Err(error!(Syntax)),
            },
            Word::Input => match operands.target {
                Some(target) => self.input(&target),
                None => Err(error!(Syntax)),
            },
            Word::Goto => {
                let line = line_number(operands.number().unwrap_or(0))?;
                self.goto(line);
                Ok(())
            }
            Word::Gosub => {
                let line = line_number(operands.number().unwrap_or(0))?;
                let resume = self.next_line_number();
                self.gosub.push(resume)?;
                self.goto(line);
                Ok(())
            }
            Word::Return => match self.gosub.pop() {
                Some(line) => {
                    self.goto(line);
                    Ok(())
                }
                None => Err(error!(ReturnWithoutGosub)),
            },
            Word::Next => match operands.target {
                Some(Target::Number(name)) => {
                    if let Some(line) = self.vars.step_for(&name)? {
                        self.goto(line);
                    }
                    Ok(())
                }
                _ => Err(error!(Syntax)),
            },
            Word::Stop => Err(error!(Stopped)),
            Word::Read => match operands.target {
                Some(target) => self.read(&target),
                None => Err(error!(Syntax)),
            },
            Word::Restore => {
                let line = line_number(operands.number().unwrap_or(0))?;
                self.data = DataPointer::restore(line);
                Ok(())
            }
            Word::Wait => {
                let ms = operands.number().unwrap_or(0);
                match u64::try_from(ms) {
                    Ok(ms) => self.pause(ms),
                    Err(_) => Err(error!(ArithmeticOverflow)),
                }
            }
            Word::Cls => {
                self.host.clear();
                Ok(())
            }
            Word::If
            | Word::Print
            | Word::For
            | Word::Rem
            | Word::Dim
            | Word::Data
            | Word::Poke
            | Word::Beep => Err(error!(Syntax)),
        }
    }

    fn self_parsed(&mut self, word: Word, mode: Mode, operands: Operands) -> Result<Flow> {
        match word {
            Word::If => {
                if self.current_char() == NEWLINE {
                    return Err(error!(Syntax));
                }
                match operands.number() {
                    Some(0) if mode == Mode::Execute => Ok(Flow::Done),
                    _ => Ok(Flow::Continue),
                }
            }
            Word::Print => self.print(mode),
            Word::For => self.r#for(mode),
            Word::Rem => {
                self.skip_to_end();
                Ok(Flow::Done)
            }
            Word::Dim => self.dim(mode),
            Word::Data => self.data(mode),
            Word::Poke => {
                let address = self.evaluate_number(mode)?;
                self.expect(COMMA)?;
                let value = self.evaluate_number(mode)?;
                self.end_of_line()?;
                if mode == Mode::Execute {
                    self.poke(address, value)?;
                }
                Ok(Flow::Done)
            }
            Word::Beep => {
                let duration = self.evaluate_number(mode)?;
                self.expect(COMMA)?;
                let pitch = self.evaluate_number(mode)?;
                self.end_of_line()?;
                if mode == Mode::Execute {
                    self.beep(duration, pitch)?;
                }
                Ok(Flow::Done)
            }
            _ => Err(error!(Syntax)),
        }
    }

    fn print(&mut self, mode: Mode) -> Result<Flow> {
        let execute = mode == Mode::Execute;
        let mut newline = true;
        loop {
            let c = self.current_char();
            if c == NEWLINE {
                break;
            }
            newline = true;
            if c == SEMICOLON {
                self.advance();
                newline = false;
                continue;
            }
            if c == COMMA {
                self.advance();
                if execute {
                    self.print_comma()?;
                }
                newline = false;
                continue;
            }
            if c == AT {
                self.advance();
                let row = self.evaluate_number(mode)?;
                self.expect(COMMA)?;
                let column = self.evaluate_number(mode)?;
                if execute {
                    self.print_at(row, column)?;
                }
            } else if c == TAB {
                self.advance();
                let column = self.evaluate_number(mode)?;
                if execute {
                    self.tab_to(column)?;
                }
            } else {
                self.evaluate(mode)?;
                if execute {
                    let value = std::mem::take(&mut self.state.result);
                    self.print_val(&value)?;
                }
            }
            match self.current_char() {
                SEMICOLON | COMMA | NEWLINE => {}
                _ => return Err(error!(Syntax)),
            }
        }
        if execute && newline {
            self.print_newline()?;
        }
        Ok(Flow::Done)
    }

    fn r#for(&mut self, mode: Mode) -> Result<Flow> {
        let target = self.target(mode, true)?;
        self.expect(EQUALS)?;
        let start = self.evaluate_number(mode)?;
        self.expect(TO)?;
        let limit = self.evaluate_number(mode)?;
        self.end_of_line()?;
        if mode == Mode::Execute {
            if let Target::Number(name) = target {
                self.vars.assign_number(&name, start)?;
                let resume = self.next_line_number();
                self.vars.promote_to_for(&name, limit, resume)?;
            }
        }
        Ok(Flow::Done)
    }

    fn dim(&mut self, mode: Mode) -> Result<Flow> {
        if !is_letter(self.current_char()) {
            return Err(error!(Syntax));
        }
        let (kind, len) = self.parse_identifier();
        let name = self.name(len)?;
        if kind != IdentKind::Array || Function::is_reserved(&name) {
            return Err(error!(Syntax));
        }
        self.skip(len);
        let max_index = self.subscript(mode)?;
        self.end_of_line()?;
        if mode == Mode::Execute {
            self.vars.declare_array(&name, max_index)?;
        }
        Ok(Flow::Done)
    }

    /// Items are only checked; READ evaluates them when it gets there.
    fn data(&mut self, mode: Mode) -> Result<Flow> {
        if mode == Mode::Execute {
            self.skip_to_end();
            return Ok(Flow::Done);
        }
        loop {
            self.evaluate(mode)?;
            if self.current_char() != COMMA {
                break;
            }
            self.advance();
        }
        self.end_of_line()?;
        Ok(Flow::Done)
    }

    pub(super) fn assign(&mut self, target: &Target, value: Val) -> Result<()> {
        match (target, value) {
            (Target::Number(name), Val::Number(n)) => self.vars.assign_number(name, n),
            (Target::Element(name, index), Val::Number(n)) => {
                self.vars.assign_element(name, *index, n)
            }
            (Target::String(name), Val::Str(s)) => self.vars.assign_string(name, s),
            _ => Err(error!(Syntax)),
        }
    }

    fn read(&mut self, target: &Target) -> Result<()> {
        let saved = self.state.cursor;
        let value = self.next_data();
        self.state.cursor = saved;
        let value = value?;
        if value.is_string() != target.is_string() {
            return Err(error!(Syntax));
        }
        self.assign(target, value)
    }

    /// Evaluates the next DATA item, moving on through the program.
    fn next_data(&mut self) -> Result<Val> {
        loop {
            let (start, _) = self.program.find_line(self.data.line);
            let number = self.program.line_number_at(start);
            if number == 0 {
                return Err(error!(SubscriptOutOfRange));
            }
            let body = start + 2;
            match self.data.offset {
                None => {
                    let data = Token::Word(Word::Data).code();
                    self.data = if self.program.bytes()[body] == data {
                        DataPointer {
                            line: number,
                            offset: Some(1),
                        }
                    } else {
                        DataPointer::restore(number + 1)
                    };
                }
                Some(offset) => {
                    self.state.cursor = Cursor::program(body + offset);
                    self.evaluate(Mode::Execute)?;
                    let value = std::mem::take(&mut self.state.result);
                    self.data = if self.current_char() == COMMA {
                        self.advance();
                        DataPointer {
                            line: number,
                            offset: Some(self.state.cursor.pos - body),
                        }
                    } else {
                        DataPointer::restore(number + 1)
                    };
                    return Ok(value);
                }
            }
        }
    }

    fn input(&mut self, target: &Target) -> Result<()> {
        if self.status != Status::Running {
            return Err(error!(InputNotInProgram));
        }
        let saved = self.state.cursor;
        self.state.flags.input = true;
        let value = self.input_value(target.is_string());
        self.state.flags.input = false;
        self.state.cursor = saved;
        self.edit.clear();
        self.redraw();
        let value = value?;
        self.assign(target, value)
    }

    /// Reads keys into the edit buffer until a usable value is entered.
    fn input_value(&mut self, string: bool) -> Result<Val> {
        self.edit.clear();
        loop {
            self.redraw();
            let key = match self.host.next_input_char() {
                Some(key) => key,
                None => return Err(error!(Stopped)),
            };
            match key {
                Key::Break => return Err(error!(Stopped)),
                Key::Enter => {
                    self.edit.crunch();
                    if string {
                        match self.edit.text().iter().position(|&c| c == QUOTE) {
                            Some(column) => self.edit.mark_column(column),
                            None => return Ok(Val::Str(self.edit.text().to_vec())),
                        }
                        continue;
                    }
                    self.state.cursor = Cursor::edit(0);
                    let result = self.evaluate(Mode::Execute).and_then(|_| self.input_end());
                    match result {
                        Ok(n) => return Ok(Val::Number(n)),
                        Err(e) if e.code() == ErrorCode::Syntax => {
                            let pos = self.state.cursor.pos;
                            self.edit.mark(pos);
                        }
                        Err(e) => return Err(e),
                    }
                }
                Key::Up | Key::Down => {}
                key => self.edit_key(key),
            }
        }
    }

    fn input_end(&mut self) -> Result<Int> {
        self.end_of_line()?;
        self.require_number()
    }

    /// Waits, checking for break every so often.
    pub(super) fn pause(&mut self, ms: u64) -> Result<()> {
        let end = self.host.current_time() + ms;
        loop {
            let now = self.host.current_time();
            if now >= end {
                return Ok(());
            }
            if self.host.key_held(Key::Break) {
                return Err(error!(Stopped));
            }
            self.host.delay((end - now).min(self.config.break_interval));
        }
    }

    fn beep(&mut self, duration: Int, pitch: Int) -> Result<()> {
        let ms = match u64::try_from(duration) {
            Ok(ms) => ms,
            Err(_) => return Err(error!(ArithmeticOverflow)),
        };
        self.host.tone(Some(pitch));
        let result = self.pause(ms);
        self.host.tone(None);
        result
    }
}

/// Jump targets must be valid line numbers or zero.
fn line_number(n: Int) -> Result<LineNumber> {
    match LineNumber::try_from(n) {
        Ok(line) => Ok(line),
        Err(_) => Err(error!(ArithmeticOverflow)),
    }
}
