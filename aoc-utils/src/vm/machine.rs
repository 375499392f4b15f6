//! Table-driven register machine.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::hash::Hash;

use num_bigint::BigInt;

use super::cpu::{Cpu, Processor};
use crate::error::VmError;

/// Named, arbitrary-precision registers.
pub type RegisterFile = BTreeMap<String, BigInt>;

/// How the pointer moves after an instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Advance to the next instruction.
    Next,
    /// Move by a signed offset relative to the current instruction.
    Offset(i64),
    /// Jump to an absolute instruction index.
    Goto(i64),
}

/// An instruction handler: receives the machine state and the operands.
pub type Handler<A, R> = Box<dyn Fn(&mut Cpu<R>, &A) -> Result<Control, VmError>>;

/// Opcode to handler mapping.
pub type InstructionTable<O, A, R> = HashMap<O, Handler<A, R>>;

/// A convenience operand type for [`RegisterFile`] machines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    Reg(String),
    Imm(BigInt),
}

impl Operand {
    pub fn reg(name: impl Into<String>) -> Self {
        Operand::Reg(name.into())
    }

    pub fn imm(value: impl Into<BigInt>) -> Self {
        Operand::Imm(value.into())
    }

    /// The operand's value; unset registers read as zero.
    pub fn resolve(&self, registers: &RegisterFile) -> BigInt {
        match self {
            Operand::Reg(name) => registers.get(name).cloned().unwrap_or_default(),
            Operand::Imm(value) => value.clone(),
        }
    }

    /// The register name, or `InvalidOperand` for an immediate.
    pub fn register(&self) -> Result<&str, VmError> {
        match self {
            Operand::Reg(name) => Ok(name.as_str()),
            Operand::Imm(value) => Err(VmError::InvalidOperand(format!(
                "expected a register, found {value}"
            ))),
        }
    }
}

/// A register machine whose instruction set is a table of handlers.
///
/// `O` is the opcode type, `A` the operand type of one instruction and `R`
/// the register file.
///
/// # Example
///
/// ```rust
/// use aoc_utils::vm::{Control, Machine, Operand, Processor, RegisterFile};
/// use num_bigint::BigInt;
///
/// let mut machine = Machine::<&str, Vec<Operand>, RegisterFile>::builder()
///     .instruction("inc", |cpu, args: &Vec<Operand>| {
///         let name = args[0].register()?.to_string();
///         *cpu.registers.entry(name).or_default() += 1;
///         Ok(Control::Next)
///     })
///     .instruction("jlt", |cpu, args: &Vec<Operand>| {
///         let offset = args[2].resolve(&cpu.registers);
///         if args[0].resolve(&cpu.registers) < args[1].resolve(&cpu.registers) {
///             Ok(Control::Offset(i64::try_from(offset).unwrap_or(1)))
///         } else {
///             Ok(Control::Next)
///         }
///     })
///     .build();
///
/// machine.load([
///     ("inc", vec![Operand::reg("x")]),
///     ("jlt", vec![Operand::reg("x"), Operand::imm(5), Operand::imm(-1)]),
/// ]);
/// machine.run().unwrap();
/// assert_eq!(machine.registers()["x"], BigInt::from(5));
/// assert_eq!(machine.counter(), 10);
/// ```
pub struct Machine<O, A, R = RegisterFile> {
    cpu: Cpu<R>,
    table: InstructionTable<O, A, R>,
    program: Vec<(O, A)>,
    step_limit: Option<u64>,
}

impl<O, A, R> Machine<O, A, R>
where
    O: Eq + Hash + fmt::Debug,
{
    /// Creates a machine with initial registers and an instruction table.
    pub fn new(registers: R, table: InstructionTable<O, A, R>) -> Self {
        Self {
            cpu: Cpu::new(registers),
            table,
            program: Vec::new(),
            step_limit: None,
        }
    }

    /// Replaces the program. The state is not reset until the next `run`.
    pub fn load<P: IntoIterator<Item = (O, A)>>(&mut self, program: P) {
        self.program = program.into_iter().collect();
    }

    pub fn program(&self) -> &[(O, A)] {
        &self.program
    }

    pub fn registers_mut(&mut self) -> &mut R {
        &mut self.cpu.registers
    }

    pub fn with_step_limit(mut self, limit: u64) -> Self {
        self.step_limit = Some(limit);
        self
    }
}

impl<O, A, R: Default> Machine<O, A, R> {
    pub fn builder() -> MachineBuilder<O, A, R> {
        MachineBuilder {
            registers: R::default(),
            table: HashMap::new(),
            step_limit: None,
        }
    }
}

impl<O, A, R> Processor for Machine<O, A, R>
where
    O: Eq + Hash + fmt::Debug,
{
    type Registers = R;

    fn cpu(&self) -> &Cpu<R> {
        &self.cpu
    }

    fn cpu_mut(&mut self) -> &mut Cpu<R> {
        &mut self.cpu
    }

    fn program_len(&self) -> usize {
        self.program.len()
    }

    fn step_limit(&self) -> Option<u64> {
        self.step_limit
    }

    fn step(&mut self) -> Result<(), VmError> {
        let Some((opcode, operands)) = usize::try_from(self.cpu.pointer)
            .ok()
            .and_then(|index| self.program.get(index))
        else {
            return Ok(());
        };
        let handler = self
            .table
            .get(opcode)
            .ok_or_else(|| VmError::InvalidOpcode(format!("{opcode:?}")))?;

        let pointer = self.cpu.pointer;
        self.cpu.pointer = match handler(&mut self.cpu, operands)? {
            Control::Next => pointer.saturating_add(1),
            Control::Offset(delta) => pointer.saturating_add(delta),
            Control::Goto(target) => target,
        };
        self.cpu.counter += 1;
        Ok(())
    }
}

/// Builder for [`Machine`].
pub struct MachineBuilder<O, A, R> {
    registers: R,
    table: InstructionTable<O, A, R>,
    step_limit: Option<u64>,
}

impl<O, A, R> MachineBuilder<O, A, R>
where
    O: Eq + Hash + fmt::Debug,
{
    /// Sets the initial register file.
    pub fn registers(mut self, registers: R) -> Self {
        self.registers = registers;
        self
    }

    /// Registers `handler` for `opcode`, replacing any previous handler.
    pub fn instruction<F>(mut self, opcode: O, handler: F) -> Self
    where
        F: Fn(&mut Cpu<R>, &A) -> Result<Control, VmError> + 'static,
    {
        self.table.insert(opcode, Box::new(handler));
        self
    }

    /// Makes `run` fail once this many steps have executed without halting.
    pub fn step_limit(mut self, limit: u64) -> Self {
        self.step_limit = Some(limit);
        self
    }

    pub fn build(self) -> Machine<O, A, R> {
        Machine {
            cpu: Cpu::new(self.registers),
            table: self.table,
            program: Vec::new(),
            step_limit: self.step_limit,
        }
    }
}
