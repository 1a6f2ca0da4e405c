//! Undo log: interleaved square changes with per-move frame markers

use super::PieceColor;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Entry {
    /// Start of one move or pass, with the jump counter before it
    Frame { jumps: u32 },
    /// Padded-buffer index and the color it held before the change
    Changed { idx: usize, prior: PieceColor },
}

/// Stack of square changes, delimited into one frame per applied move.
#[derive(Debug, Clone, Default)]
pub struct UndoLog {
    entries: Vec<Entry>,
    frames: usize,
}

impl UndoLog {
    pub fn new() -> Self {
        Self {
            entries: Vec::with_capacity(256),
            frames: 0,
        }
    }

    /// Open a new frame, remembering the jump counter it started from
    #[inline]
    pub fn start_frame(&mut self, jumps: u32) {
        self.entries.push(Entry::Frame { jumps });
        self.frames += 1;
    }

    /// Record that square `idx` held `prior` before being changed
    #[inline]
    pub fn record(&mut self, idx: usize, prior: PieceColor) {
        debug_assert!(self.frames > 0, "change recorded outside a frame");
        self.entries.push(Entry::Changed { idx, prior });
    }

    /// Number of open frames
    #[inline]
    pub fn depth(&self) -> usize {
        self.frames
    }

    /// Pop the newest frame, handing each change to `restore` newest first.
    ///
    /// # Returns
    /// The jump counter saved with the frame, or `None` if no frame marker
    /// was found.
    pub fn pop_frame(&mut self, mut restore: impl FnMut(usize, PieceColor)) -> Option<u32> {
        while let Some(entry) = self.entries.pop() {
            match entry {
                Entry::Changed { idx, prior } => restore(idx, prior),
                Entry::Frame { jumps } => {
                    self.frames -= 1;
                    return Some(jumps);
                }
            }
        }
        None
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.frames = 0;
    }
}
