//! Host capability interfaces.
//!
//! The fill pipeline talks to its host through three small typed traits
//! instead of stringly-typed action dispatch. Hosts implement these against
//! their own selection, synthesis and undo machinery; tests implement them
//! with recording mocks.

use async_trait::async_trait;
use canvasfill_geometry::Point;

use crate::config::FillMethod;
use crate::error::SynthesisError;

/// Mutates the host's active selection region.
pub trait SelectionCapability: Send {
    /// Replaces (`add_to_existing == false`) or extends the active selection
    /// with the given closed polygon.
    fn create_polygon_selection(&mut self, points: &[Point], add_to_existing: bool);

    /// Clears the active selection.
    fn deselect(&mut self);
}

/// Invokes the external content-synthesis service.
///
/// This is the single asynchronous boundary in the pipeline; the call has
/// unspecified latency and may fail with any [`SynthesisError`].
#[async_trait]
pub trait SynthesisCapability: Send {
    /// Fills the current selection. `pre_dilate` asks the service to grow
    /// its own mask before synthesis (generative expand relies on this
    /// instead of a geometric overlap margin).
    async fn invoke_fill(
        &mut self,
        prompt: &str,
        method: FillMethod,
        pre_dilate: bool,
    ) -> std::result::Result<(), SynthesisError>;
}

/// Groups the selection mutations and the synthesis call into one undoable
/// history entry.
pub trait HistoryCapability: Send {
    /// Opens a named history group; everything until [`end_group`] lands in
    /// a single undo step.
    ///
    /// [`end_group`]: HistoryCapability::end_group
    fn begin_group(&mut self, name: &str);

    /// Closes the current history group.
    fn end_group(&mut self);

    /// Deletes the most recent history entry. Called after a failed fill so
    /// the aborted operation leaves no undo record. Must be called outside
    /// an open group.
    fn delete_current_state(&mut self);
}
