use std::sync::Arc;
use std::time::Duration;

use log::{info, warn};
use rules::Position;
use search::Engine;
use tokio::time::timeout;

use crate::custom::{classify, MoveSuggester, SuggestionRequest};
use crate::reference::{coordinate_to_san, ReferenceEngine, ReferenceRequest};
use crate::{
    EngineMode, FallbackPolicy, HybridConfig, HybridError, ProviderConfig, ReferenceSettings,
};

/// Which engine actually chose the move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineSource {
    Local,
    CustomRemote,
    ReferenceRemote,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MoveChoice {
    pub mv: String,
    pub source: EngineSource,
    /// Set when the local search answered because the selected source failed.
    pub fallback_reason: Option<HybridError>,
}

/// Routes each move decision to the selected engine and validates the answer.
///
/// One instance per game. The mode only changes through the `set_*_mode`
/// calls, which cannot overlap a running `best_move` since both need
/// `&mut self`.
pub struct HybridAI {
    mode: EngineMode,
    config: HybridConfig,
    engine: Engine,
    suggester: Option<Arc<dyn MoveSuggester>>,
    reference: Option<Arc<dyn ReferenceEngine>>,
}

impl HybridAI {
    pub fn new(engine: Engine, config: HybridConfig) -> Self {
        Self {
            mode: EngineMode::Local,
            config,
            engine,
            suggester: None,
            reference: None,
        }
    }

    pub fn with_suggester(mut self, suggester: Arc<dyn MoveSuggester>) -> Self {
        self.suggester = Some(suggester);
        self
    }

    pub fn with_reference_engine(mut self, reference: Arc<dyn ReferenceEngine>) -> Self {
        self.reference = Some(reference);
        self
    }

    pub fn mode(&self) -> &EngineMode {
        &self.mode
    }

    pub fn set_local_mode(&mut self) {
        self.mode = EngineMode::Local;
    }

    pub fn set_custom_remote_mode(&mut self, provider: ProviderConfig) {
        self.mode = EngineMode::CustomRemote(provider);
    }

    pub fn set_reference_mode(&mut self, settings: ReferenceSettings) {
        self.mode = EngineMode::ReferenceRemote(settings);
    }

    /// Picks a move for `position`, whose FEN is `fen`.
    ///
    /// Remote failures are returned as errors unless the configured fallback
    /// policy lets the local search answer. Any move not in `legal_moves` is
    /// rejected, whichever engine produced it.
    pub async fn best_move(
        &mut self,
        fen: &str,
        legal_moves: &[String],
        position: &mut dyn Position,
    ) -> Result<MoveChoice, HybridError> {
        let legal_moves: Vec<String> = legal_moves.iter().map(|m| m.trim().to_string()).collect();
        if legal_moves.is_empty() {
            return Err(HybridError::NoLegalMoves);
        }

        let (result, source) = match self.mode.clone() {
            EngineMode::Local => return self.local_move(&legal_moves, position, None),
            EngineMode::CustomRemote(provider) => (
                self.custom_move(fen, &legal_moves, position, provider).await,
                EngineSource::CustomRemote,
            ),
            EngineMode::ReferenceRemote(settings) => (
                self.reference_move(fen, &legal_moves, position, settings).await,
                EngineSource::ReferenceRemote,
            ),
        };

        match result {
            Ok(mv) => {
                info!("{:?} chose {}", source, mv);
                Ok(MoveChoice {
                    mv,
                    source,
                    fallback_reason: None,
                })
            }
            Err(err)
                if self.config.fallback == FallbackPolicy::Local && err.allows_local_fallback() =>
            {
                warn!("{:?} failed ({}), falling back to local search", source, err);
                self.local_move(&legal_moves, position, Some(err))
            }
            Err(err) => {
                warn!("{:?} failed: {}", source, err);
                Err(err)
            }
        }
    }

    fn local_move(
        &mut self,
        legal_moves: &[String],
        position: &mut dyn Position,
        fallback_reason: Option<HybridError>,
    ) -> Result<MoveChoice, HybridError> {
        let result = self
            .engine
            .best_move(position)
            .ok_or(HybridError::NoLegalMoves)?;

        ensure_legal(result.best_move.clone(), legal_moves).map(|mv| MoveChoice {
            mv,
            source: EngineSource::Local,
            fallback_reason,
        })
    }

    async fn custom_move(
        &self,
        fen: &str,
        legal_moves: &[String],
        position: &dyn Position,
        provider: ProviderConfig,
    ) -> Result<String, HybridError> {
        let suggester = self
            .suggester
            .as_ref()
            .ok_or_else(|| HybridError::ProviderError("no move suggester configured".into()))?;

        let request = SuggestionRequest {
            fen: fen.to_string(),
            move_history: position.move_history(),
            legal_moves: legal_moves.to_vec(),
            config: provider,
        };

        let response = timeout(self.config.remote_timeout, suggester.suggest(&request))
            .await
            .map_err(|_| HybridError::TimeoutExpired(self.config.remote_timeout))??;

        classify(response, legal_moves)
    }

    async fn reference_move(
        &self,
        fen: &str,
        legal_moves: &[String],
        position: &dyn Position,
        settings: ReferenceSettings,
    ) -> Result<String, HybridError> {
        let reference = self.reference.as_ref().ok_or_else(|| {
            HybridError::ReferenceEngineUnavailable("no reference engine configured".into())
        })?;

        let request = ReferenceRequest {
            fen: fen.to_string(),
            depth: settings.depth,
            time_budget_ms: settings.time_budget_ms,
        };
        let limit = Duration::from_millis(settings.time_budget_ms) + self.config.reference_grace;

        let coordinate = timeout(limit, reference.best_move(request))
            .await
            .map_err(|_| HybridError::TimeoutExpired(limit))??;

        let san = coordinate_to_san(&coordinate, &position.verbose_moves())?;
        ensure_legal(san, legal_moves)
    }
}

fn ensure_legal(mv: String, legal_moves: &[String]) -> Result<String, HybridError> {
    if legal_moves.contains(&mv) {
        Ok(mv)
    } else {
        Err(HybridError::InvalidMoveReturned(mv))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use rules::{CozyPosition, START_FEN};
    use search::EngineConfig;

    use super::*;
    use crate::custom::SuggestionResponse;
    use crate::reference::ChannelEngine;

    const MATE_IN_ONE: &str = "6k1/5ppp/8/8/8/8/5PPP/3R2K1 w - - 0 1";

    struct StubSuggester {
        response: Result<SuggestionResponse, HybridError>,
        delay: Duration,
        calls: AtomicUsize,
    }

    impl StubSuggester {
        fn answering(mv: &str) -> Self {
            Self::returning(Ok(SuggestionResponse {
                mv: Some(mv.to_string()),
                ..Default::default()
            }))
        }

        fn returning(response: Result<SuggestionResponse, HybridError>) -> Self {
            Self {
                response,
                delay: Duration::ZERO,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl MoveSuggester for StubSuggester {
        async fn suggest(&self, request: &SuggestionRequest) -> Result<SuggestionResponse, HybridError> {
            assert!(!request.legal_moves.is_empty());
            self.calls.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(self.delay).await;
            self.response.clone()
        }
    }

    fn provider() -> ProviderConfig {
        ProviderConfig {
            api_key: "key".into(),
            model_name: "model".into(),
            provider_name: "provider".into(),
        }
    }

    fn engine() -> Engine {
        let mut config = EngineConfig::default();
        config.set_option("MaxDepth", "2").unwrap();
        config.set_option("MoveTime", "5000").unwrap();
        Engine::new(&config)
    }

    fn hybrid(fallback: FallbackPolicy) -> HybridAI {
        HybridAI::new(
            engine(),
            HybridConfig {
                remote_timeout: Duration::from_millis(100),
                reference_grace: Duration::from_millis(100),
                fallback,
            },
        )
    }

    async fn decide(ai: &mut HybridAI, fen: &str) -> Result<MoveChoice, HybridError> {
        let mut position = CozyPosition::from_fen(fen).unwrap();
        let legal = position.legal_moves();
        ai.best_move(fen, &legal, &mut position).await
    }

    #[tokio::test]
    async fn test_local_mode() {
        let mut ai = hybrid(FallbackPolicy::Surface);
        let choice = decide(&mut ai, MATE_IN_ONE).await.unwrap();
        assert_eq!(choice.mv, "Rd8#");
        assert_eq!(choice.source, EngineSource::Local);
        assert_eq!(choice.fallback_reason, None);
    }

    #[tokio::test]
    async fn test_no_legal_moves() {
        let mut ai = hybrid(FallbackPolicy::Local);
        let result = decide(&mut ai, "7k/6Q1/6K1/8/8/8/8/8 b - - 0 1").await;
        assert_eq!(result, Err(HybridError::NoLegalMoves));
    }

    #[tokio::test]
    async fn test_custom_move_accepted() {
        let stub = Arc::new(StubSuggester::answering(" e4 "));
        let mut ai = hybrid(FallbackPolicy::Surface).with_suggester(stub.clone());
        ai.set_custom_remote_mode(provider());

        let choice = decide(&mut ai, START_FEN).await.unwrap();
        assert_eq!(choice.mv, "e4");
        assert_eq!(choice.source, EngineSource::CustomRemote);
        assert_eq!(stub.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_rate_limit_never_falls_back() {
        for policy in [FallbackPolicy::Surface, FallbackPolicy::Local] {
            let stub = Arc::new(StubSuggester::returning(Ok(SuggestionResponse {
                is_limit_reached: true,
                ..Default::default()
            })));
            let mut ai = hybrid(policy).with_suggester(stub);
            ai.set_custom_remote_mode(provider());

            assert_eq!(decide(&mut ai, START_FEN).await, Err(HybridError::RateLimited));
        }
    }

    #[tokio::test]
    async fn test_invalid_move_surfaced() {
        let stub = Arc::new(StubSuggester::answering("Ke9"));
        let mut ai = hybrid(FallbackPolicy::Surface).with_suggester(stub);
        ai.set_custom_remote_mode(provider());

        assert_eq!(
            decide(&mut ai, START_FEN).await,
            Err(HybridError::InvalidMoveReturned("Ke9".into()))
        );
    }

    #[tokio::test]
    async fn test_invalid_move_falls_back_when_allowed() {
        let stub = Arc::new(StubSuggester::answering("Rd9"));
        let mut ai = hybrid(FallbackPolicy::Local).with_suggester(stub);
        ai.set_custom_remote_mode(provider());

        let choice = decide(&mut ai, MATE_IN_ONE).await.unwrap();
        assert_eq!(choice.mv, "Rd8#");
        assert_eq!(choice.source, EngineSource::Local);
        assert_eq!(
            choice.fallback_reason,
            Some(HybridError::InvalidMoveReturned("Rd9".into()))
        );
    }

    #[tokio::test]
    async fn test_slow_suggester_times_out() {
        let mut stub = StubSuggester::answering("e4");
        stub.delay = Duration::from_secs(5);
        let mut ai = hybrid(FallbackPolicy::Surface).with_suggester(Arc::new(stub));
        ai.set_custom_remote_mode(provider());

        assert_eq!(
            decide(&mut ai, START_FEN).await,
            Err(HybridError::TimeoutExpired(Duration::from_millis(100)))
        );
    }

    #[tokio::test]
    async fn test_provider_error_and_missing_suggester() {
        let stub = Arc::new(StubSuggester::returning(Err(HybridError::ProviderError(
            "500".into(),
        ))));
        let mut ai = hybrid(FallbackPolicy::Surface).with_suggester(stub);
        ai.set_custom_remote_mode(provider());
        assert_eq!(
            decide(&mut ai, START_FEN).await,
            Err(HybridError::ProviderError("500".into()))
        );

        let mut bare = hybrid(FallbackPolicy::Surface);
        bare.set_custom_remote_mode(provider());
        assert!(matches!(
            decide(&mut bare, START_FEN).await,
            Err(HybridError::ProviderError(_))
        ));
    }

    fn reference_answering(coordinate: &'static str) -> ChannelEngine {
        let (engine, mut jobs) = ChannelEngine::new(1);
        tokio::spawn(async move {
            while let Some(job) = jobs.recv().await {
                let _ = job.reply.send(Ok(coordinate.to_string()));
            }
        });
        engine
    }

    #[tokio::test]
    async fn test_reference_move_mapped_to_san() {
        let mut ai = hybrid(FallbackPolicy::Surface)
            .with_reference_engine(Arc::new(reference_answering("g1f3")));
        ai.set_reference_mode(ReferenceSettings {
            depth: 8,
            time_budget_ms: 100,
        });

        let choice = decide(&mut ai, START_FEN).await.unwrap();
        assert_eq!(choice.mv, "Nf3");
        assert_eq!(choice.source, EngineSource::ReferenceRemote);
    }

    #[tokio::test]
    async fn test_reference_illegal_move_rejected() {
        let mut ai = hybrid(FallbackPolicy::Surface)
            .with_reference_engine(Arc::new(reference_answering("e7e5")));
        ai.set_reference_mode(ReferenceSettings::default());

        assert_eq!(
            decide(&mut ai, START_FEN).await,
            Err(HybridError::InvalidMoveReturned("e7e5".into()))
        );
    }

    #[tokio::test]
    async fn test_reference_unavailable_falls_back() {
        let (engine, jobs) = ChannelEngine::new(1);
        drop(jobs);
        let mut ai = hybrid(FallbackPolicy::Local).with_reference_engine(Arc::new(engine));
        ai.set_reference_mode(ReferenceSettings::default());

        let choice = decide(&mut ai, MATE_IN_ONE).await.unwrap();
        assert_eq!(choice.source, EngineSource::Local);
        assert!(matches!(
            choice.fallback_reason,
            Some(HybridError::ReferenceEngineUnavailable(_))
        ));
    }

    #[tokio::test]
    async fn test_mode_switches() {
        let mut ai = hybrid(FallbackPolicy::Surface);
        assert_eq!(ai.mode(), &EngineMode::Local);
        ai.set_custom_remote_mode(provider());
        assert!(matches!(ai.mode(), EngineMode::CustomRemote(_)));
        ai.set_reference_mode(ReferenceSettings::default());
        assert!(matches!(ai.mode(), EngineMode::ReferenceRemote(_)));
        ai.set_local_mode();
        assert_eq!(ai.mode(), &EngineMode::Local);
    }
}
