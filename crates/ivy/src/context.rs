//! Evaluation context configuration

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Default maximum number of nested method calls.
///
/// Evaluation grows the native stack on demand, so this is a
/// language-level limit rather than a host one.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 1000;

/// Configuration for evaluation.
///
/// Owned by the [`Interpreter`](crate::Interpreter) and consulted on every
/// method call (depth limit) and every node (interruption).
#[derive(Debug, Clone)]
pub struct EvalContext {
    /// Maximum call depth (stack overflow protection)
    pub max_call_depth: usize,

    /// Interrupt flag - set to true to abort evaluation
    pub interrupt: Arc<AtomicBool>,
}

impl Default for EvalContext {
    fn default() -> Self {
        Self {
            max_call_depth: DEFAULT_MAX_CALL_DEPTH,
            interrupt: Arc::new(AtomicBool::new(false)),
        }
    }
}

impl EvalContext {
    /// Create a new context with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context with a custom call depth limit.
    pub fn with_max_call_depth(max_depth: usize) -> Self {
        Self {
            max_call_depth: max_depth,
            ..Default::default()
        }
    }

    /// Check if evaluation has been interrupted.
    pub fn is_interrupted(&self) -> bool {
        self.interrupt.load(Ordering::Relaxed)
    }

    /// Request interruption of evaluation.
    ///
    /// Clones of the context share the flag, so this can be called from
    /// another thread holding a clone.
    pub fn interrupt(&self) {
        self.interrupt.store(true, Ordering::Relaxed);
    }

    /// Reset the interrupt flag.
    pub fn reset_interrupt(&self) {
        self.interrupt.store(false, Ordering::Relaxed);
    }
}
