//! Run orchestration: selection, registry loading, then binding.

use camino::Utf8Path;

use crate::binder::bind_steps;
use crate::feature::Feature;
use crate::loader::{LoadError, load_steps};
use crate::registry::StepRegistry;
use crate::select::select_features;
use crate::tags::TagFilter;

/// Select, load, and bind — in that order, with no logic of its own.
///
/// The returned features are what the executor consumes: scenarios filtered
/// by the tag filter, every surviving step carrying its binding.
///
/// # Errors
/// Returns [`LoadError`] when a collected step definition under `steps_dir`
/// carries a malformed pattern.
pub fn run(
    features: Vec<Feature>,
    filter: &TagFilter,
    steps_dir: &Utf8Path,
) -> Result<Vec<Feature>, LoadError> {
    let selected = select_features(features, filter);
    let registry = load_steps(steps_dir)?;
    Ok(bind_steps(selected, &registry))
}

/// The same composition for hosts that assemble their registry by hand.
#[must_use]
pub fn run_with_registry(
    features: Vec<Feature>,
    filter: &TagFilter,
    registry: &StepRegistry,
) -> Vec<Feature> {
    bind_steps(select_features(features, filter), registry)
}
