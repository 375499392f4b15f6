//! Execution state and the shared run loop.

use tracing::{debug, instrument, trace};

use crate::error::VmError;

/// Instruction pointer, execution counter, halt flag and register file of a
/// running machine.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Cpu<R> {
    /// Index of the next instruction; may leave the program, which halts.
    pub pointer: i64,
    /// Number of instructions executed since the last reset.
    pub counter: u64,
    pub halted: bool,
    pub registers: R,
}

impl<R> Cpu<R> {
    pub fn new(registers: R) -> Self {
        Self {
            pointer: 0,
            counter: 0,
            halted: false,
            registers,
        }
    }

    /// Stops the machine after the current instruction.
    pub fn halt(&mut self) {
        self.halted = true;
    }
}

/// A machine that executes a loaded program one instruction at a time.
///
/// Implementors provide [`step`](Processor::step); the trait provides the
/// run loop. A machine halts, successfully, when its pointer leaves
/// `[0, program_len())` or its halt flag is set.
pub trait Processor {
    type Registers;

    fn cpu(&self) -> &Cpu<Self::Registers>;

    fn cpu_mut(&mut self) -> &mut Cpu<Self::Registers>;

    fn program_len(&self) -> usize;

    /// Executes the instruction at the pointer, then moves the pointer and
    /// bumps the counter. Does nothing while the pointer is out of bounds.
    fn step(&mut self) -> Result<(), VmError>;

    /// Maximum number of steps [`run`](Processor::run) may take; unbounded by default.
    fn step_limit(&self) -> Option<u64> {
        None
    }

    /// Rewinds to the first instruction and clears the counter and halt flag.
    /// Registers are left as they are.
    fn reset(&mut self) {
        let cpu = self.cpu_mut();
        cpu.pointer = 0;
        cpu.counter = 0;
        cpu.halted = false;
    }

    fn is_running(&self) -> bool {
        let cpu = self.cpu();
        !cpu.halted && usize::try_from(cpu.pointer).is_ok_and(|p| p < self.program_len())
    }

    /// Resets and steps until the machine halts.
    ///
    /// # Errors
    ///
    /// Propagates the first error raised by [`step`](Processor::step), or
    /// [`VmError::StepLimitExceeded`] when a step limit is configured and reached.
    #[instrument(skip_all, name = "vm_run", fields(program_len = self.program_len()))]
    fn run(&mut self) -> Result<(), VmError> {
        self.reset();
        while self.is_running() {
            let cpu = self.cpu();
            if let Some(limit) = self.step_limit()
                && cpu.counter >= limit
            {
                return Err(VmError::StepLimitExceeded(limit));
            }
            trace!(pointer = cpu.pointer, counter = cpu.counter, "step");
            self.step()?;
        }
        let cpu = self.cpu();
        debug!(
            pointer = cpu.pointer,
            counter = cpu.counter,
            halted = cpu.halted,
            "machine halted"
        );
        Ok(())
    }

    fn pointer(&self) -> i64 {
        self.cpu().pointer
    }

    fn counter(&self) -> u64 {
        self.cpu().counter
    }

    fn halted(&self) -> bool {
        self.cpu().halted
    }

    fn registers(&self) -> &Self::Registers {
        &self.cpu().registers
    }
}
