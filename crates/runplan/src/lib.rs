//! Selection and binding core for behaviour-driven test runs.
//!
//! Given parsed features — tagged scenarios made of Given/When/Then steps —
//! this crate decides which scenarios run (tag projection plus and/or tag
//! filtering) and resolves each step's text to a registered function
//! (exact-text lookup with a pattern-matching fallback). Parsing feature
//! files, executing bound steps, and reporting results are the host
//! runner's business; the seams are [`Feature`] conversion from [`gherkin`]
//! output on the way in and [`StepBinding`] on every step on the way out.
//!
//! The typical flow is a single [`run`] call:
//!
//! ```
//! use camino::Utf8Path;
//! use runplan::{Feature, Scenario, Step, TagFilter, run, tag_set};
//! use runplan_patterns::StepKeyword;
//!
//! let features = vec![Feature::new(
//!     "Monkey care",
//!     tag_set(["animals"]),
//!     vec![Scenario::new(
//!         "Feeding time",
//!         tag_set(["smoke"]),
//!         vec![Step::new(StepKeyword::Given, "a monkey")],
//!     )],
//! )];
//! let bound = run(
//!     features,
//!     &TagFilter::all(["animals", "smoke"]),
//!     Utf8Path::new("tests/steps"),
//! )
//! .expect("step definitions load");
//! assert_eq!(bound[0].scenarios.len(), 1);
//! ```

mod binder;
mod feature;
mod loader;
mod pattern;
mod registry;
mod run;
mod select;
mod tags;
mod types;

pub use binder::bind_steps;
pub use feature::{Feature, Scenario, Step};
pub use loader::{LoadError, StepDef, load_steps};
pub use pattern::StepPattern;
pub use registry::StepRegistry;
pub use run::{run, run_with_registry};
pub use select::select_features;
pub use tags::{TagFilter, matches_all, matches_any, project};
pub use types::{StepBinding, StepContext, StepFn, StepText, Tag, TagSet, tag_set};

// Re-exported for the registration macros, which expand in downstream
// crates and need these paths under `$crate`.
pub use inventory::{iter, submit};
pub use runplan_patterns::StepKeyword;
