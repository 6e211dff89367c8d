//! Single latest-frame slot shared between the capture thread and readers.

use std::sync::{Arc, Mutex, MutexGuard};

use super::Frame;

/// Holds the most recent complete frame.
///
/// The writer replaces the whole frame under the lock; readers get an
/// `Arc` to an immutable frame, so they never see a frame being written
/// and can keep it while newer frames are published.
#[derive(Clone, Default)]
pub struct FrameSlot {
    inner: Arc<Mutex<Option<Arc<Frame>>>>,
}

impl FrameSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the slot contents with a new frame
    pub fn publish(&self, frame: Frame) {
        let frame = Arc::new(frame);
        *self.lock() = Some(frame);
    }

    /// Latest frame, or `None` if nothing has been published yet
    pub fn latest(&self) -> Option<Arc<Frame>> {
        self.lock().clone()
    }

    /// Whether at least one frame has been published
    pub fn has_frame(&self) -> bool {
        self.lock().is_some()
    }

    /// Drop the stored frame
    pub fn clear(&self) {
        *self.lock() = None;
    }

    fn lock(&self) -> MutexGuard<'_, Option<Arc<Frame>>> {
        // Slot contents are replaced atomically, so a poisoned lock still
        // holds a complete frame.
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl std::fmt::Debug for FrameSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let dims = self.lock().as_ref().map(|frame| frame.dimensions());
        f.debug_struct("FrameSlot").field("frame", &dims).finish()
    }
}
