use super::{Instruction, InstructionWriter};

/// Writer that keeps every instruction in order.
#[derive(Debug, Default, Clone)]
pub struct RecordingWriter {
    instructions: Vec<Instruction>,
}

impl RecordingWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Instructions received so far.
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    pub fn into_instructions(self) -> Vec<Instruction> {
        self.instructions
    }

    /// The recorded program in textual VM form, one instruction per line.
    pub fn to_vm_text(&self) -> String {
        self.instructions
            .iter()
            .map(|instruction| format!("{instruction}\n"))
            .collect()
    }
}

impl InstructionWriter for RecordingWriter {
    fn emit(&mut self, instruction: Instruction) {
        self.instructions.push(instruction);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::writer::{Command, Segment};

    #[test]
    fn records_in_call_order() {
        let mut writer = RecordingWriter::new();
        writer.write_push(Segment::Constant, 1);
        writer.write_push(Segment::Constant, 2);
        writer.write_arithmetic(Command::Add);

        assert_eq!(
            writer.instructions(),
            &[
                Instruction::Push {
                    segment: Segment::Constant,
                    index: 1
                },
                Instruction::Push {
                    segment: Segment::Constant,
                    index: 2
                },
                Instruction::Arithmetic(Command::Add),
            ]
        );
        assert_eq!(writer.to_vm_text(), "push constant 1\npush constant 2\nadd\n");
        assert_eq!(writer.into_instructions().len(), 3);
    }
}
