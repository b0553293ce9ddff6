//! Sliding window of the most recent writing samples.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use super::WritingSample;

/// The last [`SampleHistory::CAPACITY`] samples, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SampleHistory(VecDeque<WritingSample>);

impl SampleHistory {
    pub const CAPACITY: usize = 50;

    /// Appends a sample, dropping the oldest ones past capacity.
    pub fn push(&mut self, sample: WritingSample) {
        self.0.push_back(sample);
        while self.0.len() > Self::CAPACITY {
            self.0.pop_front();
        }
    }

    pub fn latest(&self) -> Option<&WritingSample> {
        self.0.back()
    }

    pub fn iter(&self) -> impl Iterator<Item = &WritingSample> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
