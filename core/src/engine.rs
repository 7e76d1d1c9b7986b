use std::sync::Arc;
use std::time::Duration;

use hybrid::custom::HttpSuggester;
use hybrid::reference::spawn_uci_engine;
use hybrid::{
    FallbackPolicy, HybridAI, HybridConfig, HybridError, ProviderConfig, ReferenceSettings,
};
use search::{Engine, EngineConfig};

use crate::args::{Args, Fallback, Mode};

/// Applies the command line to a fresh engine configuration.
pub fn configure(args: &Args) -> Result<EngineConfig, String> {
    let mut config = EngineConfig::default();

    if let Some(time_ms) = args.time_ms {
        config.set_option("MoveTime", &time_ms.to_string())?;
    }
    if let Some(depth) = args.depth {
        config.set_option("MaxDepth", &depth.to_string())?;
    }

    for option in &args.options {
        let (name, value) = option
            .split_once('=')
            .ok_or_else(|| format!("Expected NAME=VALUE, got '{}'", option))?;
        config.set_option(name.trim(), value.trim())?;
    }

    Ok(config)
}

pub async fn create(args: &Args, config: &EngineConfig) -> Result<HybridAI, HybridError> {
    let hybrid_config = HybridConfig {
        remote_timeout: Duration::from_millis(args.remote_timeout_ms),
        fallback: match args.fallback {
            Fallback::Surface => FallbackPolicy::Surface,
            Fallback::Local => FallbackPolicy::Local,
        },
        ..HybridConfig::default()
    };

    let mut ai = HybridAI::new(Engine::new(config), hybrid_config);

    if let Some(endpoint) = &args.endpoint {
        ai = ai.with_suggester(Arc::new(HttpSuggester::new(endpoint.as_str())));
    }

    match args.mode {
        Mode::Local => ai.set_local_mode(),
        Mode::Custom => ai.set_custom_remote_mode(ProviderConfig {
            api_key: args.api_key.clone(),
            model_name: args.model.clone(),
            provider_name: args.provider.clone(),
        }),
        Mode::Reference => {
            let path = args.reference_path.as_ref().ok_or_else(|| {
                HybridError::ReferenceEngineUnavailable("--reference-path is required".into())
            })?;
            let reference = spawn_uci_engine(path, &args.reference_args).await?;

            ai = ai.with_reference_engine(Arc::new(reference));
            ai.set_reference_mode(ReferenceSettings {
                depth: args.depth.unwrap_or(ReferenceSettings::default().depth),
                time_budget_ms: config.move_time.value,
            });
        }
    }

    Ok(ai)
}
