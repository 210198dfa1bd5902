/// Machine dimensions. Every store is a fixed-size region sized from
/// here; running out of one is an `OutOfMemory` error.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Display columns.
    pub width: usize,
    /// Display rows available for program output.
    pub height: usize,
    /// Bytes in the program store, terminator included.
    pub program_size: usize,
    /// Bytes in the variable store, terminator included.
    pub variables_size: usize,
    /// Pending operators across all nested expressions.
    pub calculator_depth: usize,
    /// Outstanding GOSUB returns.
    pub program_stack_depth: usize,
    /// Nested expression evaluations.
    pub max_nesting: usize,
    /// Bytes reachable with PEEK and POKE.
    pub memory_size: usize,
    /// Milliseconds between break checks inside WAIT and BEEP.
    pub break_interval: u64,
    /// Save slots, slot 0 being the built-in program.
    pub slot_count: u8,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            width: 32,
            height: 22,
            program_size: 4096,
            variables_size: 2048,
            calculator_depth: 32,
            program_stack_depth: 16,
            max_nesting: 16,
            memory_size: 256,
            break_interval: 20,
            slot_count: 10,
        }
    }
}

impl Config {
    /// Size of a persisted image: program store then variable store.
    pub fn block_size(&self) -> usize {
        self.program_size + self.variables_size
    }
}
