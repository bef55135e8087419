//! Thread-local context tracking for crash reports.
//!
//! Records which pipeline phase and which input file the current thread is
//! working on. Thread-local storage keeps parallel batch runs separate;
//! atomic counters track overall batch progress.

use std::cell::RefCell;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

static INPUTS_PROCESSED: AtomicUsize = AtomicUsize::new(0);
static INPUTS_TOTAL: AtomicUsize = AtomicUsize::new(0);

thread_local! {
    static CURRENT_CONTEXT: RefCell<PipelineContext> = const { RefCell::new(PipelineContext::new()) };
}

/// Snapshot of what the current thread was doing.
#[derive(Debug, Clone, Default)]
pub struct PipelineContext {
    pub phase: Option<PipelinePhase>,
    pub current_input: Option<PathBuf>,
}

impl PipelineContext {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            phase: None,
            current_input: None,
        }
    }
}

/// Stages of a correction run, from loading input to writing output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelinePhase {
    Loading,
    Validation,
    GlobalAnalysis,
    StyleClassification,
    CategoryPositioning,
    Correction,
    Reporting,
    Export,
}

impl std::fmt::Display for PipelinePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Loading => "loading",
            Self::Validation => "validation",
            Self::GlobalAnalysis => "global_analysis",
            Self::StyleClassification => "style_classification",
            Self::CategoryPositioning => "category_positioning",
            Self::Correction => "correction",
            Self::Reporting => "reporting",
            Self::Export => "export",
        };
        // pad honors width and alignment flags used by the crash report
        f.pad(name)
    }
}

/// RAII guard restoring the previous context on drop, so phases nest.
pub struct ContextGuard {
    previous: PipelineContext,
}

impl Drop for ContextGuard {
    fn drop(&mut self) {
        CURRENT_CONTEXT.with(|ctx| {
            *ctx.borrow_mut() = self.previous.clone();
        });
    }
}

/// Set the current pipeline phase until the returned guard drops.
#[must_use]
pub fn set_phase(phase: PipelinePhase) -> ContextGuard {
    CURRENT_CONTEXT.with(|ctx| {
        let previous = ctx.borrow().clone();
        ctx.borrow_mut().phase = Some(phase);
        ContextGuard { previous }
    })
}

/// Set the input file being processed until the returned guard drops.
#[must_use]
pub fn set_current_input(path: impl Into<PathBuf>) -> ContextGuard {
    CURRENT_CONTEXT.with(|ctx| {
        let previous = ctx.borrow().clone();
        ctx.borrow_mut().current_input = Some(path.into());
        ContextGuard { previous }
    })
}

/// Set the progress counters (processed and total inputs).
pub fn set_progress(processed: usize, total: usize) {
    INPUTS_PROCESSED.store(processed, Ordering::Relaxed);
    INPUTS_TOTAL.store(total, Ordering::Relaxed);
}

/// Increment the processed input count. Safe from parallel iterators.
pub fn increment_processed() {
    INPUTS_PROCESSED.fetch_add(1, Ordering::Relaxed);
}

#[must_use]
pub fn get_current_context() -> PipelineContext {
    CURRENT_CONTEXT.with(|ctx| ctx.borrow().clone())
}

/// Current progress as (processed, total).
#[must_use]
pub fn get_progress() -> (usize, usize) {
    (
        INPUTS_PROCESSED.load(Ordering::Relaxed),
        INPUTS_TOTAL.load(Ordering::Relaxed),
    )
}

/// Reset the current thread's context to empty.
pub fn reset_context() {
    CURRENT_CONTEXT.with(|ctx| {
        *ctx.borrow_mut() = PipelineContext::new();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_guard_restores_previous() {
        reset_context();

        let _outer = set_phase(PipelinePhase::Validation);
        assert_eq!(get_current_context().phase, Some(PipelinePhase::Validation));

        {
            let _inner = set_phase(PipelinePhase::Correction);
            assert_eq!(get_current_context().phase, Some(PipelinePhase::Correction));
        }

        assert_eq!(get_current_context().phase, Some(PipelinePhase::Validation));
    }

    #[test]
    fn test_input_and_phase_combine() {
        reset_context();

        let _input = set_current_input("ratings.json");
        let _phase = set_phase(PipelinePhase::Loading);

        let ctx = get_current_context();
        assert_eq!(ctx.current_input, Some(PathBuf::from("ratings.json")));
        assert_eq!(ctx.phase, Some(PipelinePhase::Loading));
    }

    #[test]
    fn test_context_is_thread_local() {
        reset_context();
        let _phase = set_phase(PipelinePhase::Export);

        let other = std::thread::spawn(|| get_current_context().phase)
            .join()
            .unwrap();

        assert_eq!(other, None);
        assert_eq!(get_current_context().phase, Some(PipelinePhase::Export));
    }

    #[test]
    fn test_phase_display_names() {
        assert_eq!(PipelinePhase::GlobalAnalysis.to_string(), "global_analysis");
        assert_eq!(PipelinePhase::StyleClassification.to_string(), "style_classification");
    }

    #[test]
    fn test_phase_display_honors_width() {
        assert_eq!(format!("{:<12}|", PipelinePhase::Export), "export      |");
        assert_eq!(format!("{:>8}", PipelinePhase::Loading), " loading");
    }
}
