// Process bootstrap and trace replay: stands in for the platform sampler and the renderer.

use crate::domain::ports::AudioBackend;
use crate::frameworks::config;
use crate::interface_adapters::audio::HeadlessAudioBackend;
use crate::interface_adapters::protocol::{FrameDto, NoticeDto, OutputMessage};
use crate::interface_adapters::trace::{TraceStep, load_trace};
use crate::use_cases::{
    FlightSnapshot, GameHandle, GameNotice, GameSettings, Simulation, spawn_game,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::io::{Error, ErrorKind, Result};
use std::path::PathBuf;
use std::time::Duration;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::sync::{broadcast, watch};
use tokio::time::MissedTickBehavior;

fn init_runtime() {
    let _ = dotenvy::dotenv();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    // stdout carries the frame stream; logs go to stderr.
    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

pub async fn run_with_config() -> Result<()> {
    init_runtime();

    let tuning = config::load_tuning().map_err(|e| {
        tracing::error!(error = %e, "invalid configuration");
        Error::other(e.to_string())
    })?;

    let trace_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .or_else(config::trace_path)
        .ok_or_else(|| {
            Error::new(
                ErrorKind::InvalidInput,
                "no motion trace given (pass a path or set LANDING_TRACE)",
            )
        })?;
    let steps = load_trace(&trace_path).await.inspect_err(|e| {
        tracing::error!(path = %trace_path.display(), error = %e, "failed to read trace");
    })?;

    let rng = match config::rng_seed() {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let assets_dir = config::assets_dir();
    tracing::debug!(
        trace = %trace_path.display(),
        steps = steps.len(),
        assets_dir = %assets_dir.display(),
        screen_width = tuning.arena.screen_width,
        screen_height = tuning.arena.screen_height,
        "runner configured"
    );

    run(
        steps,
        Simulation::new(tuning, rng),
        HeadlessAudioBackend::new(assets_dir),
        config::sample_interval(),
        tokio::io::stdout(),
    )
    .await
    .map(|_| ())
}

/// Replays `steps` into a fresh game and writes every published frame and notice to `out`
/// as JSON lines. Returns the writer once the game has stopped.
pub async fn run<R, B, W>(
    steps: Vec<TraceStep>,
    simulation: Simulation<R>,
    backend: B,
    sample_interval: Duration,
    out: W,
) -> Result<W>
where
    R: Rng + Send + 'static,
    B: AudioBackend + 'static,
    W: AsyncWrite + Unpin,
{
    // A landing near the end of the trace still gets its celebration.
    let settle = simulation.tuning().landing.celebration() + sample_interval;

    let settings = GameSettings {
        input_channel_capacity: config::INPUT_CHANNEL_CAPACITY,
        notice_broadcast_capacity: config::NOTICE_BROADCAST_CAPACITY,
    };
    let GameHandle {
        input_tx,
        frame_rx,
        notice_tx,
        shutdown: _,
        task,
    } = spawn_game(&settings, simulation, backend);
    let notice_rx = notice_tx.subscribe();
    // Only the game task keeps a sender, so the stream closes when it stops.
    drop(notice_tx);

    let replay = async move {
        let mut ticker = tokio::time::interval(sample_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        for step in steps {
            if step.is_sample() {
                ticker.tick().await;
            }
            match step {
                TraceStep::Wait(pause) => tokio::time::sleep(pause).await,
                TraceStep::Send(event) => {
                    if input_tx.send(event).await.is_err() {
                        tracing::warn!("game stopped before the trace finished");
                        return;
                    }
                }
            }
        }

        tokio::time::sleep(settle).await;
        tracing::info!("trace finished");
    };

    let (_, written) = tokio::join!(replay, write_frames(frame_rx, notice_rx, out));

    if let Err(e) = task.await {
        tracing::error!(error = %e, "game task failed");
    }
    written
}

async fn write_line<W: AsyncWrite + Unpin>(out: &mut W, message: &OutputMessage) -> Result<()> {
    let mut line = serde_json::to_vec(message).map_err(Error::other)?;
    line.push(b'\n');
    out.write_all(&line).await
}

fn frame(snapshot: &FlightSnapshot) -> OutputMessage {
    OutputMessage::Frame(FrameDto::from(snapshot))
}

fn notice(notice: &GameNotice) -> OutputMessage {
    OutputMessage::Notice(NoticeDto::from(notice))
}

async fn write_frames<W: AsyncWrite + Unpin>(
    mut frame_rx: watch::Receiver<FlightSnapshot>,
    mut notice_rx: broadcast::Receiver<GameNotice>,
    mut out: W,
) -> Result<W> {
    let mut last = frame_rx.borrow_and_update().clone();
    write_line(&mut out, &frame(&last)).await?;

    let mut notices_open = true;
    loop {
        tokio::select! {
            changed = frame_rx.changed() => {
                if changed.is_err() {
                    break;
                }
                last = frame_rx.borrow_and_update().clone();
                write_line(&mut out, &frame(&last)).await?;
            }
            received = notice_rx.recv(), if notices_open => match received {
                Ok(n) => write_line(&mut out, &notice(&n)).await?,
                Err(broadcast::error::RecvError::Lagged(missed)) => {
                    tracing::warn!(missed, "notice stream lagged");
                }
                Err(broadcast::error::RecvError::Closed) => notices_open = false,
            },
        }
    }

    // Whatever was published right before the game stopped.
    let final_frame = frame_rx.borrow().clone();
    if final_frame != last {
        write_line(&mut out, &frame(&final_frame)).await?;
    }
    while let Ok(n) = notice_rx.try_recv() {
        write_line(&mut out, &notice(&n)).await?;
    }

    out.flush().await?;
    Ok(out)
}
