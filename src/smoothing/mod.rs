//! Temporal smoothing of per-frame lane aggregates.
//!
//! Each side keeps a [`History`] of the last `capacity` raw aggregates. Folding
//! a new aggregate returns the cumulative moving average of the retained
//! samples and the new one, all weighted equally. A side whose bucket was
//! empty is simply not folded that frame; its history does not advance and no
//! estimate is produced, so nothing is carried forward.
//!
//! Both histories live in a [`SequenceContext`] owned by the caller and passed
//! explicitly into the tracker, so independent sequences never share state.

mod context;
mod history;

pub use context::SequenceContext;
pub use history::History;
