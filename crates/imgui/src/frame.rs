//! The [`Frame`] token: proof that a Dear ImGui frame is in flight.

use crate::sys;
use std::marker::PhantomData;

/// Zero-sized token gating every guard factory.
///
/// Dear ImGui keeps its state in a thread-bound global context, and all
/// `Begin*`/`Push*` calls are only valid between `NewFrame()` and `Render()`.
/// Holding a `Frame` asserts both; the factories on it are then safe to call,
/// and every guard they return borrows the frame so it cannot leak past the
/// end of the frame.
///
/// `Frame` is `!Send + !Sync`: the toolkit is usable from one thread at a
/// time per context, and this wrapper makes no attempt to change that.
pub struct Frame {
    _not_send: PhantomData<*mut ()>,
}

impl Frame {
    /// Token for the frame currently being built.
    ///
    /// # Safety
    ///
    /// A Dear ImGui context must be current on this thread, with `NewFrame()`
    /// called and `Render()`/`EndFrame()` not yet called. The token must be
    /// dropped before the frame ends.
    pub unsafe fn current() -> Frame {
        debug_assert!(
            !sys::igGetCurrentContext().is_null(),
            "no current Dear ImGui context"
        );
        Frame {
            _not_send: PhantomData,
        }
    }
}
