use std::ffi::OsStr;
use std::process::Stdio;
use std::time::Duration;

use log::{debug, info, warn};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Lines};
use tokio::process::{Child, ChildStdin, ChildStdout, Command};
use tokio::time::timeout;
use uci::commands::GoParams;
use uci::{Decoder, Encoder, EngineCommand, EngineReply};

use super::{ChannelEngine, ReferenceRequest};
use crate::HybridError;

const HANDSHAKE_TIMEOUT: Duration = Duration::from_secs(10);

struct EngineProcess {
    child: Child,
    stdin: ChildStdin,
    stdout: Lines<BufReader<ChildStdout>>,
    encoder: Encoder,
    decoder: Decoder,
}

fn unavailable<E: ToString>(detail: E) -> HybridError {
    HybridError::ReferenceEngineUnavailable(detail.to_string())
}

impl EngineProcess {
    fn spawn<S: AsRef<OsStr>>(program: S, args: &[String]) -> Result<Self, HybridError> {
        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .map_err(unavailable)?;

        let stdin = child.stdin.take().ok_or_else(|| unavailable("no stdin"))?;
        let stdout = child.stdout.take().ok_or_else(|| unavailable("no stdout"))?;

        Ok(Self {
            child,
            stdin,
            stdout: BufReader::new(stdout).lines(),
            encoder: Encoder,
            decoder: Decoder::new(),
        })
    }

    async fn send(&mut self, command: &EngineCommand) -> Result<(), HybridError> {
        let line = format!("{}\n", self.encoder.encode(command));
        self.stdin.write_all(line.as_bytes()).await.map_err(unavailable)?;
        self.stdin.flush().await.map_err(unavailable)
    }

    async fn read_reply(&mut self) -> Result<EngineReply, HybridError> {
        match self.stdout.next_line().await.map_err(unavailable)? {
            Some(line) => Ok(self.decoder.decode(&line)),
            None => Err(unavailable("engine exited")),
        }
    }

    async fn handshake(&mut self) -> Result<(), HybridError> {
        self.send(&EngineCommand::Uci).await?;
        loop {
            match self.read_reply().await? {
                EngineReply::UciOk => break,
                EngineReply::IdName(name) => info!("reference engine: {}", name),
                EngineReply::IdAuthor(author) => debug!("reference engine author: {}", author),
                EngineReply::Option(line) => debug!("reference engine {}", line),
                _ => {}
            }
        }

        self.send(&EngineCommand::UciNewGame).await?;
        self.send(&EngineCommand::IsReady).await?;
        while self.read_reply().await? != EngineReply::ReadyOk {}
        Ok(())
    }

    async fn search(&mut self, request: &ReferenceRequest) -> Result<String, HybridError> {
        self.send(&EngineCommand::Position {
            fen: request.fen.clone(),
            moves: Vec::new(),
        })
        .await?;
        self.send(&EngineCommand::Go(GoParams {
            depth: Some(request.depth),
            move_time: Some(request.time_budget_ms),
        }))
        .await?;

        loop {
            match self.read_reply().await? {
                EngineReply::BestMove { best_move, .. } => return Ok(best_move),
                EngineReply::Info(info) => debug!("reference: {:?}", info),
                _ => {}
            }
        }
    }

    async fn quit(mut self) {
        if self.send(&EngineCommand::Quit).await.is_err() {
            let _ = self.child.kill().await;
            return;
        }
        // Give the engine a moment to quit gracefully
        if timeout(Duration::from_millis(100), self.child.wait()).await.is_err() {
            let _ = self.child.kill().await;
        }
    }
}

/// Launches a UCI engine, completes the handshake and serves requests on a
/// background task until every `ChannelEngine` clone is dropped.
pub async fn spawn_uci_engine<S: AsRef<OsStr>>(
    program: S,
    args: &[String],
) -> Result<ChannelEngine, HybridError> {
    let mut process = EngineProcess::spawn(program, args)?;

    timeout(HANDSHAKE_TIMEOUT, process.handshake())
        .await
        .map_err(|_| unavailable("no uciok/readyok from engine"))??;

    let (engine, mut jobs) = ChannelEngine::new(1);

    tokio::spawn(async move {
        while let Some(job) = jobs.recv().await {
            let result = process.search(&job.request).await;
            if let Err(err) = &result {
                warn!("reference engine failed: {}", err);
            }
            // The requester may have timed out and gone away.
            let _ = job.reply.send(result);
        }
        process.quit().await;
    });

    Ok(engine)
}
