//! The narrative-generation collaborator contract.
//!
//! The generator is opaque and potentially non-deterministic: text in, text
//! out, bounded length on both sides. The core never retries it or validates
//! its output beyond using it verbatim as the executive summary. A
//! deterministic heuristic fallback keeps report generation available when
//! no external model is wired in.

use crate::error::{ReportError, Result};
use crate::timeout::{with_timeout, TimeoutConfig};
use once_cell::sync::OnceCell;
use std::sync::Arc;
use tracing::{debug, warn};

/// A narrative text generator: accepts one flattened text string, returns
/// one generated text string.
pub trait NarrativeGenerator: Send + Sync {
    fn generate(&self, input: &str) -> Result<String>;
}

/// Input/output character budgets for the generator call.
#[derive(Debug, Clone)]
pub struct GenerationConfig {
    /// Maximum characters fed to the generator; longer input is truncated
    /// deterministically from the end.
    pub max_input_chars: usize,
    /// Maximum characters accepted back from the generator.
    pub max_output_chars: usize,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            max_input_chars: 2048,
            max_output_chars: 512,
        }
    }
}

/// Truncate to at most `max` characters, keeping the head. Deterministic
/// and char-boundary safe.
pub fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Deterministic test double returning fixed text.
#[derive(Debug, Clone)]
pub struct StubNarrativeGenerator {
    text: String,
}

impl StubNarrativeGenerator {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl NarrativeGenerator for StubNarrativeGenerator {
    fn generate(&self, _input: &str) -> Result<String> {
        Ok(self.text.clone())
    }
}

/// Rule-based fallback generator: a deterministic one/two-sentence summary
/// built from the event count and the leading line of the flattened input.
///
/// Stands in for an external model when none is configured, so the pipeline
/// can always produce a narrative for non-empty input.
#[derive(Debug, Clone, Default)]
pub struct HeuristicNarrativeGenerator;

impl NarrativeGenerator for HeuristicNarrativeGenerator {
    fn generate(&self, input: &str) -> Result<String> {
        let mut lines = input.lines().map(str::trim).filter(|ln| !ln.is_empty());
        let Some(first) = lines.next() else {
            return Ok("No security events were observed in the supplied input.".to_string());
        };
        let rest = lines.count();
        let total = rest + 1;
        let lead = truncate_chars(first, 120);
        if total == 1 {
            Ok(format!(
                "One security event was observed, recording \"{}\". \
                 Review the extracted entities and risk assessment for triage priority.",
                lead
            ))
        } else {
            Ok(format!(
                "{} security events were observed, beginning with \"{}\". \
                 Review the extracted entities and risk assessment for triage priority.",
                total, lead
            ))
        }
    }
}

/// Thread-safe, lazily-initialized shared handle to a generator.
///
/// Construction happens at most once under concurrent first use; after a
/// successful load the handle is read-only and safe to share across
/// callers. A failing factory surfaces `GeneratorInit` on every access and
/// leaves extraction/scoring independently usable.
pub struct GeneratorHandle {
    cell: OnceCell<Arc<dyn NarrativeGenerator>>,
    factory: Box<dyn Fn() -> Result<Arc<dyn NarrativeGenerator>> + Send + Sync>,
}

impl GeneratorHandle {
    /// Lazy handle constructed by `factory` on first use.
    pub fn new<F>(factory: F) -> Self
    where
        F: Fn() -> Result<Arc<dyn NarrativeGenerator>> + Send + Sync + 'static,
    {
        Self {
            cell: OnceCell::new(),
            factory: Box::new(factory),
        }
    }

    /// Pre-initialized handle around an existing generator (test doubles,
    /// externally constructed collaborators).
    pub fn with_generator(generator: Arc<dyn NarrativeGenerator>) -> Self {
        let cell = OnceCell::new();
        let _ = cell.set(generator);
        Self {
            cell,
            factory: Box::new(|| {
                Err(ReportError::GeneratorInit(
                    "handle was constructed pre-initialized".to_string(),
                ))
            }),
        }
    }

    /// Handle backed by the in-crate heuristic fallback.
    pub fn heuristic() -> Self {
        Self::new(|| Ok(Arc::new(HeuristicNarrativeGenerator) as Arc<dyn NarrativeGenerator>))
    }

    /// Get the generator, constructing it on first call.
    pub fn get(&self) -> Result<Arc<dyn NarrativeGenerator>> {
        let generator = self.cell.get_or_try_init(|| {
            debug!("Initializing narrative generator");
            (self.factory)()
        })?;
        Ok(Arc::clone(generator))
    }
}

impl std::fmt::Debug for GeneratorHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeneratorHandle")
            .field("initialized", &self.cell.get().is_some())
            .finish()
    }
}

/// Run the blocking narrative call off the async executor with a deadline.
///
/// A timeout degrades to an error for the caller to turn into a degraded
/// report; it never aborts the pipeline.
pub async fn generate_with_timeout(
    generator: Arc<dyn NarrativeGenerator>,
    input: String,
    config: TimeoutConfig,
) -> Result<String> {
    with_timeout(config, async move {
        tokio::task::spawn_blocking(move || generator.generate(&input))
            .await
            .map_err(|e| {
                warn!(error = %e, "Narrative generation task failed to join");
                ReportError::Generation(e.to_string())
            })?
    })
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_is_char_boundary_safe() {
        assert_eq!(truncate_chars("abcdef", 4), "abcd");
        assert_eq!(truncate_chars("abc", 10), "abc");
        assert_eq!(truncate_chars("αβγδ", 2), "αβ");
    }

    #[test]
    fn stub_returns_fixed_text() {
        let stub = StubNarrativeGenerator::new("fixed narrative");
        assert_eq!(stub.generate("anything").unwrap(), "fixed narrative");
        assert_eq!(stub.generate("else").unwrap(), "fixed narrative");
    }

    #[test]
    fn heuristic_is_deterministic_and_counts_events() {
        let fallback = HeuristicNarrativeGenerator;
        let input = "event one\nevent two\nevent three";
        let a = fallback.generate(input).unwrap();
        let b = fallback.generate(input).unwrap();
        assert_eq!(a, b);
        assert!(a.starts_with("3 security events"));
        assert!(a.contains("event one"));

        let single = fallback.generate("only line").unwrap();
        assert!(single.starts_with("One security event"));
    }

    #[test]
    fn handle_initializes_once() {
        use std::sync::atomic::{AtomicUsize, Ordering};
        static CALLS: AtomicUsize = AtomicUsize::new(0);

        let handle = GeneratorHandle::new(|| {
            CALLS.fetch_add(1, Ordering::SeqCst);
            Ok(Arc::new(StubNarrativeGenerator::new("x")) as Arc<dyn NarrativeGenerator>)
        });
        let _ = handle.get().unwrap();
        let _ = handle.get().unwrap();
        assert_eq!(CALLS.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn failing_factory_surfaces_init_error() {
        let handle =
            GeneratorHandle::new(|| Err(ReportError::GeneratorInit("no model".to_string())));
        assert!(matches!(
            handle.get(),
            Err(ReportError::GeneratorInit(_))
        ));
    }

    #[tokio::test]
    async fn generation_respects_timeout() {
        struct SlowGenerator;
        impl NarrativeGenerator for SlowGenerator {
            fn generate(&self, _input: &str) -> Result<String> {
                std::thread::sleep(std::time::Duration::from_secs(2));
                Ok("late".to_string())
            }
        }

        let result = generate_with_timeout(
            Arc::new(SlowGenerator),
            "input".to_string(),
            TimeoutConfig::new(1, "narrative_generation"),
        )
        .await;
        assert!(matches!(result, Err(ReportError::Timeout { .. })));
    }

    #[tokio::test]
    async fn generation_within_deadline_passes_through() {
        let result = generate_with_timeout(
            Arc::new(StubNarrativeGenerator::new("on time")),
            "input".to_string(),
            TimeoutConfig::new(5, "narrative_generation"),
        )
        .await;
        assert_eq!(result.unwrap(), "on time");
    }
}
