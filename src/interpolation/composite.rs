//! Weighted combination of multiple interpolators.

use std::fmt;

use crate::error::InterpolationError;
use crate::interpolation::contract::{interpolate_checked, linear_blend, Interpolator};
use crate::Result;

/// How one member's result folds into the running composite output.
pub trait AccumulationPolicy: Send + Sync {
    /// Fold a member's interpolated `value` into `output`, scaled by
    /// `weight`. Called once per member, in insertion order, after `output`
    /// has been zeroed.
    fn accumulate(&self, output: &mut [f32], value: &[f32], weight: f32);
}

/// The default accumulation policy: `output[i] += value[i] * weight`.
#[derive(Debug, Clone, Default)]
pub struct WeightedSum;

impl AccumulationPolicy for WeightedSum {
    #[inline]
    fn accumulate(&self, output: &mut [f32], value: &[f32], weight: f32) {
        for (out, &v) in output.iter_mut().zip(value) {
            *out += v * weight;
        }
    }
}

/// One member of a composite: an interpolator and its blending weight.
pub struct CompositeEntry {
    interpolator: Box<dyn Interpolator>,
    weight: f32,
}

impl CompositeEntry {
    /// Create an entry from an interpolator and a weight.
    ///
    /// Weights are not validated; zero and negative weights are meaningful
    /// to some accumulation policies.
    pub fn new(interpolator: Box<dyn Interpolator>, weight: f32) -> Self {
        Self {
            interpolator,
            weight,
        }
    }

    /// Get the interpolator.
    pub fn interpolator(&self) -> &dyn Interpolator {
        self.interpolator.as_ref()
    }

    /// Get the weight.
    pub fn weight(&self) -> f32 {
        self.weight
    }

    /// Set the weight.
    pub fn set_weight(&mut self, weight: f32) {
        self.weight = weight;
    }
}

impl fmt::Debug for CompositeEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeEntry")
            .field("interpolator", &self.interpolator.name())
            .field("weight", &self.weight)
            .finish()
    }
}

/// Interpolator that blends the results of weighted member interpolators.
///
/// Each member interpolates the same `from`/`to` pair into a scratch buffer,
/// and the accumulation policy folds that buffer into the output scaled by
/// the member's weight. An empty composite blends linearly. Weights stay
/// mutable through [`get_mut`](Self::get_mut), so members can be crossfaded
/// between calls.
#[derive(Debug)]
pub struct CompositeInterpolator<P: AccumulationPolicy = WeightedSum> {
    entries: Vec<CompositeEntry>,
    policy: P,
}

impl CompositeInterpolator<WeightedSum> {
    /// Create an empty composite with the default weighted-sum policy.
    pub fn new() -> Self {
        Self::with_policy(WeightedSum)
    }
}

impl Default for CompositeInterpolator<WeightedSum> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: AccumulationPolicy> CompositeInterpolator<P> {
    /// Create an empty composite with an explicit accumulation policy.
    pub fn with_policy(policy: P) -> Self {
        Self {
            entries: Vec::new(),
            policy,
        }
    }

    /// Append an interpolator with a weight. Returns the insertion index.
    pub fn add(&mut self, interpolator: Box<dyn Interpolator>, weight: f32) -> usize {
        self.add_entry(CompositeEntry::new(interpolator, weight))
    }

    /// Append an entry. Returns the insertion index.
    pub fn add_entry(&mut self, entry: CompositeEntry) -> usize {
        self.entries.push(entry);
        self.entries.len() - 1
    }

    /// Remove and return the entry at `index`, shifting the entries after it
    /// down by one.
    pub fn remove(&mut self, index: usize) -> Result<CompositeEntry> {
        if index >= self.entries.len() {
            return Err(InterpolationError::IndexOutOfRange {
                index,
                len: self.entries.len(),
            });
        }
        Ok(self.entries.remove(index))
    }

    /// Remove every entry.
    pub fn remove_all(&mut self) {
        self.entries.clear();
    }

    /// Get the entry at `index`.
    pub fn get(&self, index: usize) -> Result<&CompositeEntry> {
        self.entries
            .get(index)
            .ok_or(InterpolationError::IndexOutOfRange {
                index,
                len: self.entries.len(),
            })
    }

    /// Get the entry at `index` for mutation, e.g. to adjust its weight.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut CompositeEntry> {
        let len = self.entries.len();
        self.entries
            .get_mut(index)
            .ok_or(InterpolationError::IndexOutOfRange { index, len })
    }

    /// View all entries in insertion order.
    pub fn entries(&self) -> &[CompositeEntry] {
        &self.entries
    }

    /// The number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the composite has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<P: AccumulationPolicy> Interpolator for CompositeInterpolator<P> {
    fn name(&self) -> &str {
        "composite"
    }

    fn interpolate(
        &self,
        from: Option<&[f32]>,
        to: Option<&[f32]>,
        component_count: usize,
        time_ratio: f32,
        output: &mut [f32],
    ) -> Result<()> {
        interpolate_checked(
            from,
            to,
            component_count,
            time_ratio,
            output,
            |from, to, t, output| {
                if self.entries.is_empty() {
                    linear_blend(from, to, t, output);
                    return Ok(());
                }

                output.fill(0.0);
                let mut work = vec![0.0; component_count];

                for entry in &self.entries {
                    // Members that write fewer than component_count
                    // components must not see a previous member's leftovers.
                    work.fill(0.0);
                    entry.interpolator().interpolate(
                        Some(from),
                        Some(to),
                        component_count,
                        t,
                        &mut work,
                    )?;
                    self.policy.accumulate(output, &work, entry.weight());
                }

                Ok(())
            },
        )
    }
}
