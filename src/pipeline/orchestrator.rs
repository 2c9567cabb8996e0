//! Concurrent multi-variant generation.
//!
//! All slots of a batch are dispatched together and awaited to a join
//! barrier: the batch is returned only once every slot reached a terminal
//! state. Sibling slots are independent - one slot failing never cancels
//! or affects another. Collaborators are injected so the orchestrator is
//! testable with fakes.
//!
//! Cancellation of a dispatched batch is intentionally not implemented
//! (the per-slot timeout bounds how long a slot can stay pending).

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinSet;
use tokio::time::timeout;

use super::enhance::{CustomizationOptions, enhance};
use super::error::GenerationError;
use super::variant::{Batch, LogoVariant, VariantId, VariantStatus};
use crate::config::QuotaFailurePolicy;
use crate::gate::QuotaGate;
use crate::history::{HistoryRecord, HistorySink};
use crate::provider::TextProvider;

/// One user-initiated generation request.
#[derive(Debug, Clone)]
pub struct BatchRequest {
    pub prompt: String,
    pub options: CustomizationOptions,
    pub variant_count: usize,
    /// Identity passed to the quota gate.
    pub user: String,
    /// Batch nonce folded into variant ids so distinct runs of the same
    /// prompt name distinct artifacts.
    pub nonce: u64,
}

/// Per-slot settle notifications, fired independently as each slot
/// reaches a terminal state. The final batch return is the join barrier.
pub trait SlotObserver: Send + Sync {
    fn on_settled(&self, slot: usize, status: VariantStatus);
}

/// No-op observer for callers without a progress surface.
impl SlotObserver for () {
    fn on_settled(&self, _slot: usize, _status: VariantStatus) {}
}

pub struct Orchestrator {
    provider: Arc<dyn TextProvider>,
    gate: Arc<dyn QuotaGate>,
    history: Arc<dyn HistorySink>,
    quota_failure: QuotaFailurePolicy,
    slot_timeout: Duration,
}

impl Orchestrator {
    pub fn new(
        provider: Arc<dyn TextProvider>,
        gate: Arc<dyn QuotaGate>,
        history: Arc<dyn HistorySink>,
    ) -> Self {
        Self {
            provider,
            gate,
            history,
            quota_failure: QuotaFailurePolicy::default(),
            slot_timeout: Duration::from_secs(60),
        }
    }

    /// Set the gate-unreachable policy.
    pub fn with_quota_failure(mut self, policy: QuotaFailurePolicy) -> Self {
        self.quota_failure = policy;
        self
    }

    /// Set the per-slot timeout (classified as provider-unavailable).
    pub fn with_slot_timeout(mut self, slot_timeout: Duration) -> Self {
        self.slot_timeout = slot_timeout;
        self
    }

    /// Produce `variant_count` terminal variants for one prompt.
    ///
    /// Returns `Err` only for batch-fatal pre-flight denial: the quota
    /// gate said no (or was unreachable under the fail-closed policy),
    /// and zero provider calls were made. Every post-dispatch failure is
    /// recorded on its slot instead.
    pub async fn generate_batch(
        &self,
        request: &BatchRequest,
        observer: &dyn SlotObserver,
    ) -> Result<Batch, GenerationError> {
        self.preflight(&request.user).await?;

        let enhanced = enhance(&request.prompt, &request.options);
        let mut variants: Vec<LogoVariant> = (0..request.variant_count)
            .map(|slot| {
                LogoVariant::pending(
                    VariantId::derive(&enhanced, slot, request.nonce),
                    slot,
                    request.prompt.clone(),
                )
            })
            .collect();

        // All slots start together; each carries the identical enhanced
        // prompt.
        let mut slots = JoinSet::new();
        for slot in 0..request.variant_count {
            let provider = Arc::clone(&self.provider);
            let prompt = enhanced.clone();
            let slot_timeout = self.slot_timeout;
            slots.spawn(async move { (slot, run_slot(&*provider, &prompt, slot_timeout).await) });
        }

        // Join barrier. No ordering between siblings; settles arrive as
        // they happen and are reported independently.
        while let Some(joined) = slots.join_next().await {
            let Ok((slot, outcome)) = joined else {
                continue;
            };
            match outcome {
                Ok((raw, sanitized)) => variants[slot].succeed(raw, sanitized),
                Err(error) => {
                    crate::debug!("generate"; "slot {slot} failed: {error}");
                    variants[slot].fail(error);
                }
            }
            observer.on_settled(slot, variants[slot].status);
            self.report(&variants[slot]);
        }

        // A panicked slot task loses its result; the slot must still
        // reach a terminal state.
        for variant in &mut variants {
            if !variant.status.is_terminal() {
                variant.fail(GenerationError::ProviderUnavailable(
                    "slot task aborted".to_string(),
                ));
                observer.on_settled(variant.slot, variant.status);
            }
        }

        Ok(Batch {
            prompt: request.prompt.clone(),
            enhanced_prompt: enhanced,
            variants,
        })
    }

    /// Re-run one failed slot, reusing the batch's already-enhanced
    /// prompt. The slot gets a fresh id and settles independently; the
    /// quota gate is not re-checked (the retry belongs to the original
    /// batch's allowance).
    pub async fn retry_slot(
        &self,
        batch: &mut Batch,
        slot: usize,
        nonce: u64,
        observer: &dyn SlotObserver,
    ) -> Result<(), GenerationError> {
        let mut variant = LogoVariant::pending(
            VariantId::derive(&batch.enhanced_prompt, slot, nonce),
            slot,
            batch.prompt.clone(),
        );
        match run_slot(&*self.provider, &batch.enhanced_prompt, self.slot_timeout).await {
            Ok((raw, sanitized)) => variant.succeed(raw, sanitized),
            Err(error) => variant.fail(error),
        }
        observer.on_settled(slot, variant.status);
        self.report(&variant);
        batch.variants[slot] = variant;
        Ok(())
    }

    /// Quota pre-flight. Gate errors resolve per the configured policy.
    async fn preflight(&self, user: &str) -> Result<(), GenerationError> {
        match self.gate.check(user).await {
            Ok(decision) if !decision.allowed => Err(GenerationError::QuotaExceeded),
            Ok(decision) => {
                crate::debug!("generate"; "quota ok, {} remaining", decision.remaining);
                Ok(())
            }
            Err(error) => match self.quota_failure {
                QuotaFailurePolicy::Open => {
                    crate::log!("generate"; "quota gate unreachable ({error}), failing open");
                    Ok(())
                }
                QuotaFailurePolicy::Closed => {
                    crate::log!("generate"; "quota gate unreachable ({error}), failing closed");
                    Err(GenerationError::QuotaExceeded)
                }
            },
        }
    }

    /// Fire-and-forget history write. Failures are logged and swallowed;
    /// they never surface to the caller or affect the variant.
    fn report(&self, variant: &LogoVariant) {
        let history = Arc::clone(&self.history);
        let record = HistoryRecord {
            prompt: variant.prompt.clone(),
            status: match variant.status {
                VariantStatus::Succeeded => "succeeded".to_string(),
                _ => "failed".to_string(),
            },
            error: variant.error.as_ref().map(|e| e.to_string()),
        };
        tokio::spawn(async move {
            if let Err(error) = history.record(record).await {
                crate::debug!("history"; "write failed (ignored): {error}");
            }
        });
    }
}

/// One slot: provider call under timeout, then sanitation. Both
/// failure paths classify into the slot's terminal error.
async fn run_slot(
    provider: &dyn TextProvider,
    prompt: &str,
    slot_timeout: Duration,
) -> Result<(String, String), GenerationError> {
    let raw = match timeout(slot_timeout, provider.complete(prompt)).await {
        Ok(Ok(text)) => text,
        Ok(Err(error)) => return Err(error.into()),
        Err(_) => {
            return Err(GenerationError::ProviderUnavailable(
                "request timed out".to_string(),
            ));
        }
    };
    let sanitized = crate::svg::sanitize::sanitize(&raw)?;
    Ok((raw, sanitized))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gate::{QuotaDecision, Unlimited};
    use crate::history::Noop;
    use crate::provider::ProviderError;
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Scripted provider: pops one canned response per call and counts
    /// calls. Slot-to-response assignment is by arrival order, which is
    /// fine - the tests assert counts, not positions.
    struct FakeProvider {
        responses: Mutex<Vec<Result<String, ProviderError>>>,
        calls: AtomicUsize,
    }

    impl FakeProvider {
        fn new(responses: Vec<Result<String, ProviderError>>) -> Self {
            Self {
                responses: Mutex::new(responses),
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl TextProvider for FakeProvider {
        async fn complete(&self, _prompt: &str) -> Result<String, ProviderError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.responses
                .lock()
                .pop()
                .unwrap_or(Err(ProviderError::Unavailable("script exhausted".into())))
        }
    }

    struct DenyGate;

    #[async_trait]
    impl QuotaGate for DenyGate {
        async fn check(&self, _user: &str) -> anyhow::Result<QuotaDecision> {
            Ok(QuotaDecision {
                allowed: false,
                remaining: 0,
            })
        }
    }

    struct BrokenGate;

    #[async_trait]
    impl QuotaGate for BrokenGate {
        async fn check(&self, _user: &str) -> anyhow::Result<QuotaDecision> {
            anyhow::bail!("gate unreachable")
        }
    }

    struct CapturingHistory {
        records: Mutex<Vec<HistoryRecord>>,
    }

    #[async_trait]
    impl HistorySink for CapturingHistory {
        async fn record(&self, record: HistoryRecord) -> anyhow::Result<()> {
            self.records.lock().push(record);
            Ok(())
        }
    }

    fn request(count: usize) -> BatchRequest {
        BatchRequest {
            prompt: "a fox".to_string(),
            options: CustomizationOptions::default(),
            variant_count: count,
            user: "tester".to_string(),
            nonce: 0,
        }
    }

    const VALID: &str = "<svg viewBox=\"0 0 100 100\"><rect fill=\"#000\"/></svg>";

    #[tokio::test]
    async fn test_batch_independence() {
        // 2 prose + 2 valid responses -> exactly 2 succeeded, 2 failed,
        // regardless of which slot drew which response.
        let provider = Arc::new(FakeProvider::new(vec![
            Ok("Sure, here is your logo!".to_string()),
            Ok(VALID.to_string()),
            Ok("I'm sorry, I can't draw that.".to_string()),
            Ok(VALID.to_string()),
        ]));
        let orchestrator =
            Orchestrator::new(provider, Arc::new(Unlimited), Arc::new(Noop));

        let batch = orchestrator.generate_batch(&request(4), &()).await.unwrap();

        assert_eq!(batch.succeeded().count(), 2);
        assert_eq!(batch.failed().count(), 2);
        assert!(batch.variants.iter().all(|v| v.status.is_terminal()));
        for failed in batch.failed() {
            assert_eq!(failed.error, Some(GenerationError::MalformedOutput));
            assert!(failed.sanitized_markup.is_none());
        }
        assert_eq!(batch.aggregate_failure(), None);
    }

    #[tokio::test]
    async fn test_quota_denial_short_circuits() {
        let provider = Arc::new(FakeProvider::new(vec![Ok(VALID.to_string())]));
        let orchestrator = Orchestrator::new(
            Arc::clone(&provider) as Arc<dyn TextProvider>,
            Arc::new(DenyGate),
            Arc::new(Noop),
        );

        let result = orchestrator.generate_batch(&request(3), &()).await;

        assert!(matches!(result, Err(GenerationError::QuotaExceeded)));
        assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_gate_error_fails_open_by_default() {
        let provider = Arc::new(FakeProvider::new(vec![Ok(VALID.to_string())]));
        let orchestrator = Orchestrator::new(provider, Arc::new(BrokenGate), Arc::new(Noop));

        let batch = orchestrator.generate_batch(&request(1), &()).await.unwrap();
        assert_eq!(batch.succeeded().count(), 1);
    }

    #[tokio::test]
    async fn test_gate_error_fails_closed_under_policy() {
        let provider = Arc::new(FakeProvider::new(vec![Ok(VALID.to_string())]));
        let orchestrator = Orchestrator::new(
            Arc::clone(&provider) as Arc<dyn TextProvider>,
            Arc::new(BrokenGate),
            Arc::new(Noop),
        )
        .with_quota_failure(QuotaFailurePolicy::Closed);

        let result = orchestrator.generate_batch(&request(1), &()).await;
        assert!(matches!(result, Err(GenerationError::QuotaExceeded)));
        assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_all_auth_failures_aggregate() {
        let provider = Arc::new(FakeProvider::new(vec![
            Err(ProviderError::AuthConfiguration),
            Err(ProviderError::AuthConfiguration),
        ]));
        let orchestrator = Orchestrator::new(provider, Arc::new(Unlimited), Arc::new(Noop));

        let batch = orchestrator.generate_batch(&request(2), &()).await.unwrap();
        assert_eq!(
            batch.aggregate_failure(),
            Some(GenerationError::AuthConfiguration)
        );
    }

    #[tokio::test]
    async fn test_sanitized_markup_is_hardened() {
        let provider = Arc::new(FakeProvider::new(vec![Ok(
            "Here you go! <svg width=\"64\" height=\"64\"><script>x</script><rect/></svg> enjoy"
                .to_string(),
        )]));
        let orchestrator = Orchestrator::new(provider, Arc::new(Unlimited), Arc::new(Noop));

        let batch = orchestrator.generate_batch(&request(1), &()).await.unwrap();
        let variant = &batch.variants[0];
        let sanitized = variant.sanitized_markup.as_ref().unwrap();
        assert!(sanitized.starts_with("<svg"));
        assert!(sanitized.contains("width=\"100%\""));
        assert!(!sanitized.contains("<script"));
        // Raw markup is kept unmodified alongside
        assert!(variant.raw_markup.as_ref().unwrap().contains("Here you go!"));
    }

    #[tokio::test]
    async fn test_history_receives_every_settled_slot() {
        let history = Arc::new(CapturingHistory {
            records: Mutex::new(Vec::new()),
        });
        let provider = Arc::new(FakeProvider::new(vec![
            Ok(VALID.to_string()),
            Ok("prose".to_string()),
        ]));
        let orchestrator = Orchestrator::new(
            provider,
            Arc::new(Unlimited),
            Arc::clone(&history) as Arc<dyn HistorySink>,
        );

        orchestrator.generate_batch(&request(2), &()).await.unwrap();

        // Writes are fire-and-forget; give the spawned tasks a tick.
        tokio::time::sleep(Duration::from_millis(50)).await;
        let records = history.records.lock();
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.prompt == "a fox"));
    }

    #[tokio::test]
    async fn test_retry_slot_reuses_enhanced_prompt() {
        let provider = Arc::new(FakeProvider::new(vec![Err(ProviderError::RateLimited)]));
        let orchestrator = Orchestrator::new(
            Arc::clone(&provider) as Arc<dyn TextProvider>,
            Arc::new(Unlimited),
            Arc::new(Noop),
        );

        let mut batch = orchestrator.generate_batch(&request(1), &()).await.unwrap();
        assert_eq!(batch.variants[0].error, Some(GenerationError::RateLimited));
        let failed_id = batch.variants[0].id.clone();

        // Refill the script and retry just that slot
        provider.responses.lock().push(Ok(VALID.to_string()));
        orchestrator
            .retry_slot(&mut batch, 0, 1, &())
            .await
            .unwrap();

        assert_eq!(batch.variants[0].status, VariantStatus::Succeeded);
        assert_ne!(batch.variants[0].id, failed_id);
        assert_eq!(batch.succeeded().count(), 1);
    }

    #[tokio::test]
    async fn test_observer_sees_every_slot() {
        struct CountingObserver(AtomicUsize);
        impl SlotObserver for CountingObserver {
            fn on_settled(&self, _slot: usize, status: VariantStatus) {
                assert!(status.is_terminal());
                self.0.fetch_add(1, Ordering::SeqCst);
            }
        }

        let provider = Arc::new(FakeProvider::new(vec![
            Ok(VALID.to_string()),
            Ok(VALID.to_string()),
            Ok("prose".to_string()),
        ]));
        let orchestrator = Orchestrator::new(provider, Arc::new(Unlimited), Arc::new(Noop));
        let observer = CountingObserver(AtomicUsize::new(0));

        orchestrator
            .generate_batch(&request(3), &observer)
            .await
            .unwrap();
        assert_eq!(observer.0.load(Ordering::SeqCst), 3);
    }
}
