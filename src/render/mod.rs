//! Renderer interface.
//!
//! Drawing the overlay is left to implementors of [`Renderer`]; the session
//! hands them the camera frame and a [`WorldView`] snapshot every frame.

pub mod view;
pub mod logger;

pub use view::{BlockInstance, WorldView};
pub use logger::LogRenderer;

use crate::capture::Frame;

/// Consumes one frame of output
pub trait Renderer {
    fn render(&mut self, frame: &Frame, view: &WorldView);
}

impl<R: Renderer + ?Sized> Renderer for Box<R> {
    fn render(&mut self, frame: &Frame, view: &WorldView) {
        (**self).render(frame, view);
    }
}
