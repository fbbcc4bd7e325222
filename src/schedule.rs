/// Coalesces "dirty" signals so layout is recomputed at most once per frame.
///
/// Call [`request_recompute`](Self::request_recompute) from any event; only
/// the first call after a frame returns `true`, telling the caller to queue an
/// animation-frame callback. That callback calls
/// [`begin_frame`](Self::begin_frame) before doing the work.
#[derive(Debug, Default)]
pub struct FrameScheduler {
    pending: bool,
    coalesced: u32,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request_recompute(&mut self) -> bool {
        if self.pending {
            self.coalesced += 1;
            return false;
        }
        self.pending = true;
        true
    }

    /// Clears the pending flag; returns how many requests were folded into this frame.
    pub fn begin_frame(&mut self) -> u32 {
        self.pending = false;
        std::mem::take(&mut self.coalesced)
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }
}
