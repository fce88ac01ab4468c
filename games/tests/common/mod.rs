//! Scripted console stand-in shared by the adapter tests.

use freeplay_core::system::{RAM_SIZE, System};

/// A fake console whose 128-byte working RAM the test scripts directly.
pub struct TestConsole {
    ram: [u8; RAM_SIZE],
}

impl TestConsole {
    pub fn new() -> Self {
        Self { ram: [0; RAM_SIZE] }
    }

    pub fn set(&mut self, offset: usize, value: u8) -> &mut Self {
        self.ram[offset] = value;
        self
    }
}

impl System for TestConsole {
    fn ram(&self, offset: usize) -> u8 {
        self.ram[offset]
    }
}
