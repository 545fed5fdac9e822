//! Link-time step definition collection and per-run registry loading.
//!
//! Step definitions cannot be discovered by reading source files at run
//! time in a compiled language, so they are compiled into the binary and
//! submitted to a distributed [`inventory`] collection by the [`step!`],
//! [`given!`], [`when!`], and [`then!`] macros. [`load_steps`] then builds a
//! fresh [`StepRegistry`] per run from every collected definition whose
//! source file lies under the given directory — the directory locator keeps
//! one test binary able to carry several independent step suites.

use camino::Utf8Path;
use thiserror::Error;

use crate::registry::StepRegistry;
use crate::types::StepFn;
use runplan_patterns::{PatternError, StepKeyword};

/// One step definition submitted to the link-time collection.
#[derive(Debug)]
pub struct StepDef {
    /// The step keyword this definition answers to.
    pub keyword: StepKeyword,
    /// Pattern text matched against step text (exact or `{name}` pattern).
    pub pattern: &'static str,
    /// The function bound to matching steps.
    pub run: StepFn,
    /// Source file where the definition lives.
    pub file: &'static str,
    /// Line number within the source file.
    pub line: u32,
}

inventory::collect!(StepDef);

/// Submit a step definition to the link-time collection.
///
/// The macro hides the underlying `inventory` call and captures the source
/// location automatically; [`load_steps`] uses the location to scope
/// definitions to a directory.
///
/// # Examples
///
/// ```
/// use runplan::{StepContext, step};
/// use runplan_patterns::StepKeyword;
///
/// fn feed(_: &StepContext<'_>) {}
///
/// step!(StepKeyword::Given, "a monkey", feed);
/// ```
#[macro_export]
macro_rules! step {
    ($keyword:expr, $pattern:expr, $handler:path) => {
        $crate::submit! {
            $crate::StepDef {
                keyword: $keyword,
                pattern: $pattern,
                run: $handler,
                file: file!(),
                line: line!(),
            }
        }
    };
}

/// Submit a `Given` step definition.
#[macro_export]
macro_rules! given {
    ($pattern:expr, $handler:path) => {
        $crate::step!($crate::StepKeyword::Given, $pattern, $handler);
    };
}

/// Submit a `When` step definition.
#[macro_export]
macro_rules! when {
    ($pattern:expr, $handler:path) => {
        $crate::step!($crate::StepKeyword::When, $pattern, $handler);
    };
}

/// Submit a `Then` step definition.
#[macro_export]
macro_rules! then {
    ($pattern:expr, $handler:path) => {
        $crate::step!($crate::StepKeyword::Then, $pattern, $handler);
    };
}

/// Errors raised while loading collected step definitions into a registry.
#[derive(Debug, Error)]
pub enum LoadError {
    /// A collected definition carries a malformed pattern.
    #[error("invalid step pattern '{pattern}' at {file}:{line}: {source}")]
    InvalidPattern {
        /// The offending pattern text.
        pattern: String,
        /// Source file of the definition.
        file: &'static str,
        /// Line number of the definition.
        line: u32,
        /// The underlying pattern failure.
        source: PatternError,
    },
}

/// Build a fresh registry from every collected definition under `dir`.
///
/// Each call returns its own [`StepRegistry`], so concurrent runs never
/// share mutable state. Definitions registered later in the collection
/// overwrite earlier ones with the same keyword and pattern text, matching
/// the registry's last-write-wins contract. An empty result is not an
/// error; it is logged as a warning because it usually means the locator
/// does not match the step suite's directory.
///
/// # Errors
/// Returns [`LoadError::InvalidPattern`] when a definition's pattern fails
/// to compile, naming the definition's source location.
pub fn load_steps(dir: &Utf8Path) -> Result<StepRegistry, LoadError> {
    let mut registry = StepRegistry::new();
    for def in inventory::iter::<StepDef> {
        if !Utf8Path::new(def.file).starts_with(dir) {
            continue;
        }
        registry
            .register_pattern(def.keyword, def.pattern, def.run)
            .map_err(|source| LoadError::InvalidPattern {
                pattern: def.pattern.to_string(),
                file: def.file,
                line: def.line,
                source,
            })?;
    }
    if registry.is_empty() {
        log::warn!("no step definitions found under {dir}");
    }
    Ok(registry)
}
