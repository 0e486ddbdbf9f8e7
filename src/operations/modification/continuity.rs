use tracing::trace;

use crate::error::Result;
use crate::path::PathStore;

/// Restores C1 continuity around the anchor governing an edited point.
///
/// The side that was edited is kept and the handle on the other side of the
/// anchor is replaced by its mirror image: `enforced = anchor + (anchor - fixed)`.
/// Editing the anchor itself or the handle before it keeps the incoming
/// handle; editing the handle after it keeps the outgoing one. The first and
/// last anchors have a single handle and are left alone.
pub struct EnforceContinuity {
    index: usize,
}

impl EnforceContinuity {
    /// Creates a new `EnforceContinuity` operation for the edited point `index`.
    #[must_use]
    pub fn new(index: usize) -> Self {
        Self { index }
    }

    /// Executes the operation, rewriting at most one handle.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is not a control point of the store.
    pub fn execute(&self, store: &mut PathStore) -> Result<()> {
        store.point(self.index)?;

        let anchor = (self.index + 1) / 3;
        if anchor == 0 || anchor == store.segment_count() {
            return Ok(());
        }

        let middle = anchor * 3;
        let (fixed, enforced) = if self.index <= middle {
            (middle - 1, middle + 1)
        } else {
            (middle + 1, middle - 1)
        };

        let center = store.point(middle)?;
        let tangent = center - store.point(fixed)?;
        store.set_point(enforced, center + tangent)?;
        trace!(edited = self.index, anchor = middle, fixed, enforced, "continuity enforced");
        Ok(())
    }
}
