// dashboard/listener.rs

use crate::dashboard::command_handler::{handle_command, CommandOutcome};
use crate::dashboard::Dashboard;
use std::future::Future;
use std::thread;
use tokio::io::{self, AsyncWrite, AsyncWriteExt};
use tokio::sync::mpsc;
use tracing::{info, warn};

const PROMPT: &str = "🌼 garden> ";
const INPUT_BUFFER: usize = 16;

/// Why the dashboard loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    Quit,
    InputClosed,
    Interrupted,
}

/// Runs the dashboard on stdin/stdout until EOF, `/quit` or Ctrl-C.
pub async fn listen_for_commands(dashboard: &mut Dashboard) -> io::Result<ExitReason> {
    let lines = spawn_stdin_reader()?;
    run_dashboard(dashboard, lines, io::stdout(), tokio::signal::ctrl_c()).await
}

/// Blocking stdin reads live on their own thread so a pending read never holds
/// up runtime shutdown. The thread dies with the process.
fn spawn_stdin_reader() -> io::Result<mpsc::Receiver<io::Result<String>>> {
    let (tx, rx) = mpsc::channel(INPUT_BUFFER);
    thread::Builder::new()
        .name("stdin-reader".to_string())
        .spawn(move || {
            for line in std::io::stdin().lines() {
                let failed = line.is_err();
                if tx.blocking_send(line).is_err() || failed {
                    break;
                }
            }
        })?;
    Ok(rx)
}

/// Dispatches each input line to the command handler and writes the reply.
pub async fn run_dashboard<W, S>(
    dashboard: &mut Dashboard,
    mut lines: mpsc::Receiver<io::Result<String>>,
    mut output: W,
    shutdown: S,
) -> io::Result<ExitReason>
where
    W: AsyncWrite + Unpin,
    S: Future,
{
    tokio::pin!(shutdown);

    let welcome = format!(
        "🌸 The Beauty of Garden\nEnter flower beauties (comma-separated), or /help.\nTry: {}\n",
        dashboard.config.default_input
    );
    output.write_all(welcome.as_bytes()).await?;

    let reason = loop {
        output.write_all(PROMPT.as_bytes()).await?;
        output.flush().await?;

        let line = tokio::select! {
            biased;
            _ = &mut shutdown => {
                info!("Ctrl-C received, leaving dashboard.");
                break ExitReason::Interrupted;
            }
            line = lines.recv() => line,
        };
        let line = match line {
            Some(line) => line?,
            None => {
                info!("Input closed.");
                break ExitReason::InputClosed;
            }
        };

        let outcome = handle_command(&line, dashboard);
        let text = outcome.text();
        if !text.is_empty() {
            output.write_all(text.as_bytes()).await?;
            if !text.ends_with('\n') {
                output.write_all(b"\n").await?;
            }
        }
        if matches!(outcome, CommandOutcome::Quit(_)) {
            break ExitReason::Quit;
        }
    };

    if let Err(e) = output.flush().await {
        warn!("Failed to flush output: {:?}", e);
    }
    info!("🛑 Dashboard ended after {} gardens.", dashboard.history().len());
    Ok(reason)
}
