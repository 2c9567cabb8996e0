//! Generate command driver.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result, bail};

use super::GenerateArgs;
use crate::config::LogoConfig;
use crate::gate::Unlimited;
use crate::history::{HistorySink, JsonlHistory, Noop};
use crate::logger::ProgressLine;
use crate::pipeline::enhance::CustomizationOptions;
use crate::pipeline::orchestrator::{BatchRequest, Orchestrator, SlotObserver};
use crate::pipeline::variant::VariantStatus;
use crate::provider::HttpProvider;
use crate::log;
use crate::utils::plural_s;

/// Feeds per-slot settles into the shared progress line.
struct SlotProgress<'a> {
    line: &'a ProgressLine,
}

impl SlotObserver for SlotProgress<'_> {
    fn on_settled(&self, _slot: usize, status: VariantStatus) {
        self.line.inc("slots");
        if status == VariantStatus::Failed {
            self.line.inc("failed");
        }
    }
}

pub fn run_generate(prompt: &str, args: &GenerateArgs, config: &LogoConfig) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new().context("starting async runtime")?;
    runtime.block_on(generate(prompt, args, config))
}

async fn generate(prompt: &str, args: &GenerateArgs, config: &LogoConfig) -> Result<()> {
    let variant_count = args.variants.unwrap_or(config.generate.variants);
    if variant_count == 0 || variant_count > 8 {
        bail!("variant count must be 1-8, got {variant_count}");
    }

    // CLI hints win over config defaults
    let defaults = CustomizationOptions::from_config(&config.generate);
    let options = CustomizationOptions {
        style: args.style.clone().unwrap_or(defaults.style),
        color_scheme: args.color_scheme.clone().unwrap_or(defaults.color_scheme),
        complexity: args.complexity.clone().unwrap_or(defaults.complexity),
        industry: args.industry.clone().unwrap_or(defaults.industry),
    };

    let history: Arc<dyn HistorySink> = match &config.policy.history_file {
        Some(path) => Arc::new(JsonlHistory::new(path.clone())),
        None => Arc::new(Noop),
    };
    let orchestrator = Orchestrator::new(
        Arc::new(HttpProvider::from_config(&config.provider)),
        Arc::new(Unlimited),
        history,
    )
    .with_quota_failure(config.policy.quota_failure)
    .with_slot_timeout(Duration::from_secs(config.provider.timeout_secs));

    let request = BatchRequest {
        prompt: prompt.to_string(),
        options,
        variant_count,
        user: args.user.clone().unwrap_or_else(|| config.generate.user.clone()),
        nonce: batch_nonce(),
    };

    log!("generate"; "dispatching {} slot{}", variant_count, plural_s(variant_count));
    let line = ProgressLine::new(&[("slots", variant_count), ("failed", variant_count)]);
    let observer = SlotProgress { line: &line };
    let result = orchestrator.generate_batch(&request, &observer).await;
    let batch = match result {
        Ok(batch) => {
            line.finish();
            batch
        }
        // The dropped line clears itself from the terminal
        Err(error) => bail!("generation refused: {error}"),
    };

    if let Some(error) = batch.aggregate_failure() {
        bail!(
            "all {} slots failed: {error}",
            batch.variants.len()
        );
    }

    let out_dir = args.out.clone().unwrap_or_else(|| PathBuf::from("."));
    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("creating output directory {}", out_dir.display()))?;

    for variant in batch.succeeded() {
        if let Some(markup) = &variant.sanitized_markup {
            let path = out_dir.join(format!("logo-{}.svg", variant.id));
            std::fs::write(&path, markup)
                .with_context(|| format!("writing {}", path.display()))?;
            log!("generate"; "slot {} -> {}", variant.slot, path.display());
        }
    }
    for variant in batch.failed() {
        let retryable = variant.error.as_ref().is_some_and(|e| e.is_retryable());
        log!("error"; "slot {} failed: {}{}",
            variant.slot,
            variant.error.as_ref().map(|e| e.to_string()).unwrap_or_default(),
            if retryable { " (retry with the same prompt)" } else { "" });
    }

    Ok(())
}

/// Wall-clock nonce folded into variant ids so re-runs of the same
/// prompt produce distinct filenames.
fn batch_nonce() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
