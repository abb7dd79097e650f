// NLQ Bench - Comparative benchmarking for natural-language query backends
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Deterministic memory samplers.

use nlq_bench::MemorySampler;
use std::cell::Cell;

/// Always reports the same reading, so every delta is zero.
#[derive(Debug, Clone, Copy)]
pub struct FixedSampler {
    mb: f64,
}

impl FixedSampler {
    pub fn new(mb: f64) -> Self {
        Self { mb }
    }
}

impl Default for FixedSampler {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl MemorySampler for FixedSampler {
    fn sample_mb(&self) -> f64 {
        self.mb
    }
}

/// Replays readings in order, wrapping around at the end.
///
/// The wrapper samples twice per call, so `[100.0, 102.5]` gives every call
/// a delta of 2.5 MB.
#[derive(Debug, Clone)]
pub struct SequenceSampler {
    readings: Vec<f64>,
    next: Cell<usize>,
}

impl SequenceSampler {
    /// An empty sequence reads as zero.
    pub fn new(readings: Vec<f64>) -> Self {
        Self {
            readings,
            next: Cell::new(0),
        }
    }

    /// Readings taken so far.
    pub fn samples_taken(&self) -> usize {
        self.next.get()
    }
}

impl MemorySampler for SequenceSampler {
    fn sample_mb(&self) -> f64 {
        if self.readings.is_empty() {
            return 0.0;
        }
        let i = self.next.get();
        self.next.set(i + 1);
        self.readings[i % self.readings.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_wraps() {
        let sampler = SequenceSampler::new(vec![1.0, 2.0]);
        let readings: Vec<f64> = (0..3).map(|_| sampler.sample_mb()).collect();
        assert_eq!(readings, vec![1.0, 2.0, 1.0]);
        assert_eq!(sampler.samples_taken(), 3);
        assert_eq!(SequenceSampler::new(Vec::new()).sample_mb(), 0.0);
    }
}
