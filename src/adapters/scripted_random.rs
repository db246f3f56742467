//! Scripted random source for deterministic tests.

use crate::ports::RandomSource;

/// Replays a fixed script of choices, cycling when it runs out.
///
/// Each call returns the next script entry reduced modulo `len`, so a script
/// of zeros always picks the first remaining empty cell.
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    script: Vec<usize>,
    cursor: usize,
}

impl ScriptedRandom {
    pub fn new(script: Vec<usize>) -> Self {
        Self { script, cursor: 0 }
    }

    /// Always choose the first alternative
    pub fn first() -> Self {
        Self::new(vec![0])
    }

    /// Number of choices made so far
    pub fn calls(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedRandom {
    fn choose_index(&mut self, len: usize) -> usize {
        if self.script.is_empty() || len == 0 {
            self.cursor += 1;
            return 0;
        }
        let value = self.script[self.cursor % self.script.len()];
        self.cursor += 1;
        value % len
    }

    /// Rewinds to the start of the script; the seed value is not used.
    fn reseed(&mut self, _seed: u64) {
        self.cursor = 0;
    }
}
