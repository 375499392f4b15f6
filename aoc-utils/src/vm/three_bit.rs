//! Three-register machine with 3-bit opcodes and combo operands.

use std::fmt;
use std::str::FromStr;

use anyhow::{Context, anyhow, bail};
use num_bigint::BigInt;
use num_traits::{One, Signed, ToPrimitive, Zero};

use super::cpu::{Cpu, Processor};
use crate::error::VmError;

const ADV: u8 = 0;
const BXL: u8 = 1;
const BST: u8 = 2;
const JNZ: u8 = 3;
const BXC: u8 = 4;
const OUT: u8 = 5;
const BDV: u8 = 6;
const CDV: u8 = 7;

/// A machine whose flat program alternates opcode and operand, with
/// registers `A`, `B`, `C` at indices 0, 1, 2.
///
/// | Opcode | Name | Effect |
/// |---|---|---|
/// | 0 | adv | `A = A / 2^combo` |
/// | 1 | bxl | `B = B ^ literal` |
/// | 2 | bst | `B = combo % 8` |
/// | 3 | jnz | if `A != 0`, jump to `literal` |
/// | 4 | bxc | `B = B ^ C` |
/// | 5 | out | output `combo % 8` |
/// | 6 | bdv | `B = A / 2^combo` |
/// | 7 | cdv | `C = A / 2^combo` |
///
/// Combo operands 0 to 3 are literals, 4 to 6 read `A`, `B`, `C`, and 7 is
/// invalid. Divisions truncate.
///
/// # Example
///
/// ```rust
/// use aoc_utils::vm::{Processor, ThreeBitComputer};
///
/// let listing = "Register A: 729\nRegister B: 0\nRegister C: 0\n\nProgram: 0,1,5,4,3,0";
/// let mut computer: ThreeBitComputer = listing.parse().unwrap();
/// computer.run().unwrap();
/// assert_eq!(computer.output_string(), "4,6,3,5,6,3,5,2,1,0");
/// ```
#[derive(Debug, Clone)]
pub struct ThreeBitComputer {
    cpu: Cpu<[BigInt; 3]>,
    program: Vec<u8>,
    outputs: Vec<u8>,
    step_limit: Option<u64>,
}

impl ThreeBitComputer {
    pub fn new(registers: [BigInt; 3]) -> Self {
        Self {
            cpu: Cpu::new(registers),
            program: Vec::new(),
            outputs: Vec::new(),
            step_limit: None,
        }
    }

    pub fn with_registers(a: impl Into<BigInt>, b: impl Into<BigInt>, c: impl Into<BigInt>) -> Self {
        Self::new([a.into(), b.into(), c.into()])
    }

    pub fn with_step_limit(mut self, limit: u64) -> Self {
        self.step_limit = Some(limit);
        self
    }

    /// Replaces the program. Entries are opcode, operand, opcode, operand, ...
    pub fn load<P: IntoIterator<Item = u8>>(&mut self, program: P) {
        self.program = program.into_iter().collect();
    }

    pub fn program(&self) -> &[u8] {
        &self.program
    }

    pub fn registers_mut(&mut self) -> &mut [BigInt; 3] {
        &mut self.cpu.registers
    }

    /// Values emitted by `out` since the last reset.
    pub fn outputs(&self) -> &[u8] {
        &self.outputs
    }

    /// Outputs joined with commas, e.g. `"0,1,2"`.
    pub fn output_string(&self) -> String {
        self.outputs
            .iter()
            .map(u8::to_string)
            .collect::<Vec<_>>()
            .join(",")
    }

    fn combo(&self, operand: u8) -> Result<BigInt, VmError> {
        match operand {
            0..=3 => Ok(BigInt::from(operand)),
            4..=6 => Ok(self.cpu.registers[usize::from(operand - 4)].clone()),
            _ => Err(VmError::InvalidOperand(format!("combo operand {operand}"))),
        }
    }

    /// `A / 2^combo(operand)`, truncated.
    fn divide_a(&self, operand: u8) -> Result<BigInt, VmError> {
        let exponent = self.combo(operand)?;
        if exponent.is_negative() {
            return Err(VmError::InvalidOperand(format!(
                "negative shift {exponent}"
            )));
        }
        let numerator = &self.cpu.registers[0];
        match exponent.to_u64() {
            Some(bits) if bits < numerator.bits() => {
                let shift = usize::try_from(bits)
                    .map_err(|_| VmError::InvalidOperand(format!("shift {bits}")))?;
                Ok(numerator / (BigInt::one() << shift))
            }
            // divisor exceeds |A|
            _ => Ok(BigInt::zero()),
        }
    }
}

/// The value mod 8, taken from the low three bits.
fn low_bits(value: &BigInt) -> u8 {
    (value & BigInt::from(7u8)).to_u8().unwrap_or_default()
}

impl Processor for ThreeBitComputer {
    type Registers = [BigInt; 3];

    fn cpu(&self) -> &Cpu<[BigInt; 3]> {
        &self.cpu
    }

    fn cpu_mut(&mut self) -> &mut Cpu<[BigInt; 3]> {
        &mut self.cpu
    }

    fn program_len(&self) -> usize {
        self.program.len()
    }

    fn step_limit(&self) -> Option<u64> {
        self.step_limit
    }

    /// Also clears the outputs.
    fn reset(&mut self) {
        self.cpu.pointer = 0;
        self.cpu.counter = 0;
        self.cpu.halted = false;
        self.outputs.clear();
    }

    fn step(&mut self) -> Result<(), VmError> {
        let Ok(index) = usize::try_from(self.cpu.pointer) else {
            return Ok(());
        };
        let Some(&opcode) = self.program.get(index) else {
            return Ok(());
        };
        // an opcode without its operand ends the program
        let Some(&operand) = self.program.get(index + 1) else {
            self.cpu.halt();
            return Ok(());
        };

        match opcode {
            ADV => self.cpu.registers[0] = self.divide_a(operand)?,
            BXL => self.cpu.registers[1] ^= BigInt::from(operand),
            BST => self.cpu.registers[1] = BigInt::from(low_bits(&self.combo(operand)?)),
            JNZ if !self.cpu.registers[0].is_zero() => {
                self.cpu.pointer = i64::from(operand);
                self.cpu.counter += 1;
                return Ok(());
            }
            JNZ => {}
            BXC => {
                let c = self.cpu.registers[2].clone();
                self.cpu.registers[1] ^= c;
            }
            OUT => {
                let value = low_bits(&self.combo(operand)?);
                self.outputs.push(value);
            }
            BDV => self.cpu.registers[1] = self.divide_a(operand)?,
            CDV => self.cpu.registers[2] = self.divide_a(operand)?,
            other => return Err(VmError::InvalidOpcode(other.to_string())),
        }
        self.cpu.pointer += 2;
        self.cpu.counter += 1;
        Ok(())
    }
}

impl FromStr for ThreeBitComputer {
    type Err = VmError;

    /// Parses the puzzle listing:
    ///
    /// ```text
    /// Register A: 729
    /// Register B: 0
    /// Register C: 0
    ///
    /// Program: 0,1,5,4,3,0
    /// ```
    ///
    /// Missing registers start at zero; the program line is required.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        parse_listing(input).map_err(|e| VmError::InvalidFormat(e.to_string()))
    }
}

fn parse_listing(input: &str) -> anyhow::Result<ThreeBitComputer> {
    let mut registers: [BigInt; 3] = Default::default();
    let mut program = None;

    for (line_idx, line) in input.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if let Some(rest) = line.strip_prefix("Register ") {
            let (name, value) = rest
                .split_once(':')
                .ok_or_else(|| anyhow!("(line {}) missing ':'", line_idx + 1))?;
            let slot = match name.trim() {
                "A" => 0,
                "B" => 1,
                "C" => 2,
                other => bail!("(line {}) unknown register {other:?}", line_idx + 1),
            };
            registers[slot] = value
                .trim()
                .parse()
                .with_context(|| format!("(line {}) bad register value", line_idx + 1))?;
        } else if let Some(rest) = line.strip_prefix("Program:") {
            let entries = rest
                .split(',')
                .map(|entry| -> anyhow::Result<u8> {
                    let value: u8 = entry.trim().parse()?;
                    if value > 7 {
                        bail!("{value} is not a 3-bit number");
                    }
                    Ok(value)
                })
                .collect::<anyhow::Result<Vec<u8>>>()
                .map_err(|e| anyhow!("(line {}) {}", line_idx + 1, e))?;
            program = Some(entries);
        } else {
            bail!("(line {}) unexpected line {line:?}", line_idx + 1);
        }
    }

    let program = program.context("missing 'Program:' line")?;
    let mut computer = ThreeBitComputer::new(registers);
    computer.load(program);
    Ok(computer)
}

impl fmt::Display for ThreeBitComputer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = &self.cpu.registers;
        writeln!(f, "Register A: {a}")?;
        writeln!(f, "Register B: {b}")?;
        writeln!(f, "Register C: {c}")?;
        writeln!(f)?;
        let program: Vec<String> = self.program.iter().map(u8::to_string).collect();
        write!(f, "Program: {}", program.join(","))
    }
}
