//! Register Virtual Machines
//!
//! Two dialects share one execution model, captured by [`Processor`]: a
//! [`Cpu`] holds the instruction pointer, an execution counter, a halt flag
//! and the registers, and [`Processor::run`] steps until the pointer leaves
//! the program or the halt flag is set. Leaving the program is a successful
//! halt; callers inspect registers and outputs afterwards.
//!
//! # Dialects
//!
//! - [`Machine`]: instructions are `(opcode, operands)` pairs dispatched
//!   through a table of handlers built with [`Machine::builder`]. Handlers
//!   return a [`Control`] telling the machine where to go next.
//! - [`ThreeBitComputer`]: a flat program of 3-bit opcodes and operands over
//!   registers `A`, `B`, `C`, with combo operands and an output buffer.
//!
//! # Step Limits
//!
//! Both dialects accept an optional step limit. When set, `run` fails with
//! [`VmError::StepLimitExceeded`] instead of looping forever.
//!
//! # Example
//!
//! ```rust
//! use aoc_utils::vm::{Processor, ThreeBitComputer};
//!
//! let mut computer = ThreeBitComputer::with_registers(10, 0, 0);
//! computer.load([5, 0, 5, 1, 5, 4]);
//! computer.run().unwrap();
//! assert_eq!(computer.outputs(), &[0, 1, 2]);
//! ```
//!
//! [`VmError::StepLimitExceeded`]: crate::VmError::StepLimitExceeded

mod cpu;
mod machine;
mod three_bit;

pub use cpu::{Cpu, Processor};
pub use machine::{Control, Handler, InstructionTable, Machine, MachineBuilder, Operand, RegisterFile};
pub use three_bit::ThreeBitComputer;
