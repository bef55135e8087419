//! Observability infrastructure: logging setup, pipeline phase tracking
//! and crash reports.
//!
//! Install the panic hook and subscriber at startup:
//!
//! ```ignore
//! use rescore::observability::{init_tracing, install_panic_hook};
//!
//! fn main() {
//!     install_panic_hook();
//!     init_tracing(0);
//! }
//! ```
//!
//! Pipeline code marks its phase so a crash report can say where it
//! happened:
//!
//! ```ignore
//! let _phase = set_phase(PipelinePhase::Correction);
//! ```

pub mod context;
pub mod panic_hook;
pub mod tracing;

pub use context::{
    get_current_context, get_progress, increment_processed, reset_context, set_current_input,
    set_phase, set_progress, ContextGuard, PipelineContext, PipelinePhase,
};
pub use panic_hook::install_panic_hook;
pub use self::tracing::{filter_for_verbosity, init_tracing, LOG_ENV_VAR};
