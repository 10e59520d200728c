use super::{Instruction, InstructionWriter};

/// Writer that renders the textual VM format as it goes.
#[derive(Debug, Default, Clone)]
pub struct VmTextWriter {
    out: String,
}

impl VmTextWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text written so far.
    pub fn as_str(&self) -> &str {
        &self.out
    }

    /// Consume the writer, returning the VM text.
    pub fn finish(self) -> String {
        self.out
    }
}

impl InstructionWriter for VmTextWriter {
    fn emit(&mut self, instruction: Instruction) {
        self.out.push_str(&instruction.to_string());
        self.out.push('\n');
    }
}
