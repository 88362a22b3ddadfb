//! Fill dispatcher.
//!
//! Turns a computed region into selection operations plus exactly one
//! synthesis invocation, wrapped as a single undoable history entry so a
//! mid-failure never leaves partial selection state or multiple undo
//! records.

use canvasfill_core::{
    FillConfig, FillError, FillMethod, HistoryCapability, Result, SelectionCapability,
    SynthesisCapability, SynthesisError,
};
use tracing::{debug, warn};

use crate::Region;

/// How a fill sequence ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FillOutcome {
    /// The synthesis call succeeded.
    Completed,
    /// The region was empty; no selection or synthesis calls were made.
    NothingToFill,
    /// The user cancelled the synthesis; the aborted operation was undone
    /// and nothing is reported.
    Cancelled,
    /// A recoverable synthesis failure; the selection was cleared, the
    /// history record deleted, and `message` should be shown to the user.
    Recovered { message: String },
}

/// Drives one region-fill sequence against the host capabilities.
pub struct FillDispatcher<'a> {
    selection: &'a mut dyn SelectionCapability,
    synthesis: &'a mut dyn SynthesisCapability,
    history: &'a mut dyn HistoryCapability,
}

impl<'a> FillDispatcher<'a> {
    pub fn new(
        selection: &'a mut dyn SelectionCapability,
        synthesis: &'a mut dyn SynthesisCapability,
        history: &'a mut dyn HistoryCapability,
    ) -> Self {
        Self {
            selection,
            synthesis,
            history,
        }
    }

    /// Selects every polygon of `region` (replace on the first, add on the
    /// rest) and invokes one synthesis call for the accumulated selection.
    ///
    /// Everything runs inside a single named history group. On a synthesis
    /// failure of any kind the selection is cleared and the history record
    /// deleted; recoverable failures and cancellation become outcomes,
    /// anything else propagates as [`FillError::Synthesis`].
    pub async fn fill_region(&mut self, region: &Region, config: &FillConfig) -> Result<FillOutcome> {
        if region.is_empty() {
            debug!("empty region, skipping fill");
            return Ok(FillOutcome::NothingToFill);
        }

        self.history.begin_group(config.method.command_name());
        for (i, poly) in region.iter().enumerate() {
            self.selection.create_polygon_selection(poly.points(), i > 0);
        }
        let pre_dilate = config.method == FillMethod::GenerativeExpand;
        let result = self
            .synthesis
            .invoke_fill(&config.prompt, config.method, pre_dilate)
            .await;
        self.history.end_group();

        match result {
            Ok(()) => Ok(FillOutcome::Completed),
            Err(err) => {
                // Leave no trace of the aborted operation.
                self.selection.deselect();
                self.history.delete_current_state();
                match err {
                    SynthesisError::Cancelled => {
                        debug!("synthesis cancelled by user");
                        Ok(FillOutcome::Cancelled)
                    }
                    err if err.is_recoverable() => {
                        warn!(code = err.code(), "recoverable synthesis failure");
                        Ok(FillOutcome::Recovered {
                            message: err.to_string(),
                        })
                    }
                    err => Err(FillError::Synthesis(err)),
                }
            }
        }
    }
}
