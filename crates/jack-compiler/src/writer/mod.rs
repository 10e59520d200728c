//! VM instruction model and the writer capability the generator emits into.
//!
//! The generator only ever talks to an [`InstructionWriter`]. Two writers
//! ship with the crate:
//! - [`RecordingWriter`]: keeps the [`Instruction`]s for inspection
//! - [`VmTextWriter`]: renders the textual VM format, one instruction per line

mod recording;
mod text;

use std::fmt;

pub use recording::RecordingWriter;
pub use text::VmTextWriter;

/// VM memory segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Read-only immediates
    Constant,
    Argument,
    Local,
    Static,
    /// Fields of the current receiver
    This,
    /// Array element window
    That,
    /// `pointer 0` is the receiver, `pointer 1` the array base
    Pointer,
    Temp,
}

impl Segment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Segment::Constant => "constant",
            Segment::Argument => "argument",
            Segment::Local => "local",
            Segment::Static => "static",
            Segment::This => "this",
            Segment::That => "that",
            Segment::Pointer => "pointer",
            Segment::Temp => "temp",
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stack arithmetic and logic commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Add,
    Sub,
    Neg,
    Eq,
    Gt,
    Lt,
    And,
    Or,
    Not,
}

impl Command {
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::Add => "add",
            Command::Sub => "sub",
            Command::Neg => "neg",
            Command::Eq => "eq",
            Command::Gt => "gt",
            Command::Lt => "lt",
            Command::And => "and",
            Command::Or => "or",
            Command::Not => "not",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single VM instruction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Instruction {
    /// Function entry with its local-variable count.
    Function { name: String, locals: usize },
    Push { segment: Segment, index: usize },
    Pop { segment: Segment, index: usize },
    Call { name: String, args: usize },
    Arithmetic(Command),
    Return,
}

/// Renders the textual VM format, e.g. `push constant 3`.
impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::Function { name, locals } => write!(f, "function {name} {locals}"),
            Instruction::Push { segment, index } => write!(f, "push {segment} {index}"),
            Instruction::Pop { segment, index } => write!(f, "pop {segment} {index}"),
            Instruction::Call { name, args } => write!(f, "call {name} {args}"),
            Instruction::Arithmetic(command) => write!(f, "{command}"),
            Instruction::Return => f.write_str("return"),
        }
    }
}

/// Sink for generated instructions, called strictly in program order.
///
/// Implementors only need [`emit`](Self::emit); the `write_*` methods can be
/// overridden by backends that handle each kind directly.
pub trait InstructionWriter {
    /// Accept the next instruction.
    fn emit(&mut self, instruction: Instruction);

    fn write_function(&mut self, name: &str, locals: usize) {
        self.emit(Instruction::Function {
            name: name.to_string(),
            locals,
        });
    }

    fn write_push(&mut self, segment: Segment, index: usize) {
        self.emit(Instruction::Push { segment, index });
    }

    fn write_pop(&mut self, segment: Segment, index: usize) {
        self.emit(Instruction::Pop { segment, index });
    }

    fn write_call(&mut self, name: &str, args: usize) {
        self.emit(Instruction::Call {
            name: name.to_string(),
            args,
        });
    }

    fn write_arithmetic(&mut self, command: Command) {
        self.emit(Instruction::Arithmetic(command));
    }

    fn write_return(&mut self) {
        self.emit(Instruction::Return);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instruction_text() {
        let cases = [
            (
                Instruction::Function {
                    name: "Main.main".into(),
                    locals: 2,
                },
                "function Main.main 2",
            ),
            (
                Instruction::Push {
                    segment: Segment::Constant,
                    index: 7,
                },
                "push constant 7",
            ),
            (
                Instruction::Pop {
                    segment: Segment::Pointer,
                    index: 0,
                },
                "pop pointer 0",
            ),
            (
                Instruction::Call {
                    name: "Math.multiply".into(),
                    args: 2,
                },
                "call Math.multiply 2",
            ),
            (Instruction::Arithmetic(Command::Sub), "sub"),
            (Instruction::Return, "return"),
        ];
        for (instruction, text) in cases {
            assert_eq!(instruction.to_string(), text);
        }
    }

    #[test]
    fn segment_names() {
        assert_eq!(Segment::This.to_string(), "this");
        assert_eq!(Segment::That.to_string(), "that");
        assert_eq!(Segment::Temp.to_string(), "temp");
        assert_eq!(Segment::Static.to_string(), "static");
    }

    #[test]
    fn default_methods_route_through_emit() {
        struct Counting(usize);
        impl InstructionWriter for Counting {
            fn emit(&mut self, _: Instruction) {
                self.0 += 1;
            }
        }

        let mut writer = Counting(0);
        writer.write_function("A.b", 0);
        writer.write_push(Segment::Local, 1);
        writer.write_pop(Segment::Argument, 0);
        writer.write_call("A.c", 0);
        writer.write_arithmetic(Command::Neg);
        writer.write_return();
        assert_eq!(writer.0, 6);
    }
}
