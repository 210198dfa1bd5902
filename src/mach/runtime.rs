use super::eval::Pending;
use super::state::{Cursor, Mode, State};
use super::statement::DataPointer;
use super::{Capture, Config, Edit, Host, Key, Program, Stack, Var};
use crate::error;
use crate::lang::{Error, ErrorCode, Int, LineNumber};
use crate::slot::{self, Slots};
use std::convert::TryFrom;

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Editing,
    DirectExec,
    Running,
}

/// ## Virtual machine
///
/// Owns every store and drives the host: keys go to the line editor,
/// direct lines run at once, and a running program advances line by line
/// checking for break after each one.
pub struct Runtime<H: Host> {
    pub(super) config: Config,
    pub(super) state: State,
    pub(super) program: Program,
    pub(super) vars: Var,
    pub(super) edit: Edit,
    pub(super) calc: Stack<Pending>,
    pub(super) gosub: Stack<LineNumber>,
    pub(super) memory: Vec<u8>,
    pub(super) data: DataPointer,
    pub(super) slots: Option<Box<dyn Slots>>,
    pub(super) host: H,
    pub(super) status: Status,
    pub(super) cont_line: LineNumber,
    pub(super) depth: usize,
    pub(super) started: u64,
}

impl Default for Runtime<Capture> {
    fn default() -> Self {
        let config = Config::default();
        let host = Capture::new(&config);
        Runtime::new(config, host)
    }
}

impl<H: Host> Runtime<H> {
    pub fn new(config: Config, host: H) -> Runtime<H> {
        let started = host.current_time();
        let mut runtime = Runtime {
            state: State::default(),
            program: Program::new(config.program_size),
            vars: Var::new(config.variables_size),
            edit: Edit::default(),
            calc: Stack::new(config.calculator_depth),
            gosub: Stack::new(config.program_stack_depth),
            memory: vec![0; config.memory_size],
            data: DataPointer::default(),
            slots: None,
            host,
            status: Status::Editing,
            cont_line: 0,
            depth: 0,
            started,
            config,
        };
        let _ = runtime.check_edit_line();
        runtime.redraw();
        runtime
    }

    /// Attaches storage for SAVE and LOAD.
    pub fn with_slots(mut self, slots: Box<dyn Slots>) -> Runtime<H> {
        self.slots = Some(slots);
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    pub fn vars(&self) -> &Var {
        &self.vars
    }

    pub fn edit(&self) -> &Edit {
        &self.edit
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn memory(&self) -> &[u8] {
        &self.memory
    }

    /// The program as listed, one line per row.
    pub fn listing(&self) -> String {
        self.program
            .lines()
            .map(|line| format!("{}\n", line))
            .collect()
    }

    /// Feeds keys from the host until it has no more.
    pub fn run(&mut self) {
        while let Some(key) = self.host.next_input_char() {
            self.key(key);
        }
    }

    pub(super) fn goto(&mut self, line: LineNumber) {
        self.state.flags.goto = true;
        self.state.jump = line;
    }

    /// The line after the one running, zero if none or if direct.
    pub(super) fn next_line_number(&self) -> LineNumber {
        if self.state.line == 0 {
            return 0;
        }
        let (offset, _) = self.program.find_line(self.state.line + 1);
        self.program.line_number_at(offset)
    }

    pub(super) fn clear_variables(&mut self) {
        self.vars.clear();
        self.gosub.clear();
        self.data = DataPointer::default();
        self.cont_line = 0;
    }

    pub(super) fn new_program(&mut self) {
        self.program.clear();
        self.clear_variables();
        self.goto(0);
    }

    pub(super) fn run_program(&mut self) -> Result<()> {
        loop {
            let number = if self.state.flags.goto {
                self.state.flags.goto = false;
                if self.state.jump == 0 {
                    return Ok(());
                }
                let (offset, _) = self.program.find_line(self.state.jump);
                self.program.line_number_at(offset)
            } else {
                self.next_line_number()
            };
            if number == 0 {
                return Ok(());
            }
            let (offset, _) = self.program.find_line(number);
            self.state.line = number;
            self.state.cursor = Cursor::program(offset + 2);
            self.line(Mode::Execute)?;
            if self.host.key_held(Key::Break) {
                return Err(self.state.raise(ErrorCode::Stopped));
            }
        }
    }

    /// Reports how a direct line or run ended and remembers where CONT
    /// picks up. A stop reports the line it would continue at.
    pub(super) fn finish(&mut self, outcome: Result<()>) {
        let (code, line) = match &outcome {
            Ok(()) => ('0', self.state.line),
            Err(error) if error.code() == ErrorCode::Stopped => {
                (error.code().report_char(), self.next_line_number())
            }
            Err(error) => (error.code().report_char(), self.state.line),
        };
        if outcome.is_err() {
            self.cont_line = line;
        } else if self.status == Status::Running {
            self.cont_line = 0;
        }
        self.report(code, line);
        self.state.clear_error();
        self.state.flags.goto = false;
    }

    fn slot_number(&self, slot: Int) -> Result<u8> {
        let count = self.slots.as_ref().map_or(1, |s| s.slot_count());
        match u8::try_from(slot) {
            Ok(n) if n < count => Ok(n),
            _ => Err(error!(SubscriptOutOfRange)),
        }
    }

    pub(super) fn save(&mut self, slot: Int) -> Result<()> {
        let n = self.slot_number(slot)?;
        let block = slot::encode(&self.program, &self.vars, &self.config);
        let result = match self.slots.as_mut() {
            _ if n == 0 => Err(slot::SlotError::ReadOnly),
            Some(slots) => slots.persist_block(n, &block),
            None => Err(slot::SlotError::NoSuchSlot(n)),
        };
        result.map_err(|e| self.slot_failed(e))
    }

    pub(super) fn load(&mut self, slot: Int) -> Result<()> {
        let n = self.slot_number(slot)?;
        let block = if n == 0 {
            Ok(slot::builtin(&self.config))
        } else {
            match self.slots.as_mut() {
                Some(slots) => slots.read_block(n),
                None => Err(slot::SlotError::NoSuchSlot(n)),
            }
        };
        let (program, vars) = match block.and_then(|b| slot::decode(&b, &self.config)) {
            Ok(pair) => pair,
            Err(e) => return Err(self.slot_failed(e)),
        };
        self.program = program;
        self.vars = vars;
        self.gosub.clear();
        self.data = DataPointer::default();
        self.cont_line = 0;
        self.goto(0);
        Ok(())
    }

    fn slot_failed(&mut self, error: slot::SlotError) -> Error {
        self.host.notice(&error.to_string());
        Error::new(error.code())
    }
}
