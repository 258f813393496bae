//! Process signal plumbing
//!
//! SIGINT, SIGTERM and SIGHUP end the run. SIGUSR1 or Enter on an
//! interactive stdin toggles pause.

use std::io::{self, BufRead, IsTerminal};
use tracing::{debug, error, info};

use crate::pause::PauseFlag;

#[cfg(unix)]
use tokio::signal::unix::{signal, Signal, SignalKind};

/// Termination requests, registered up front so none are missed
#[cfg(unix)]
pub struct Shutdown {
    interrupt: Signal,
    terminate: Signal,
    hangup: Signal,
}

#[cfg(unix)]
impl Shutdown {
    pub fn register() -> io::Result<Self> {
        Ok(Self {
            interrupt: signal(SignalKind::interrupt())?,
            terminate: signal(SignalKind::terminate())?,
            hangup: signal(SignalKind::hangup())?,
        })
    }

    /// Wait for the first termination request; returns the signal name
    pub async fn recv(&mut self) -> &'static str {
        tokio::select! {
            name = next(&mut self.interrupt, "SIGINT") => name,
            name = next(&mut self.terminate, "SIGTERM") => name,
            name = next(&mut self.hangup, "SIGHUP") => name,
        }
    }
}

#[cfg(unix)]
async fn next(signal: &mut Signal, name: &'static str) -> &'static str {
    let result = signal
        .recv()
        .await
        .ok_or_else(|| io::Error::other("signal stream closed"));
    delivered(result, name).await
}

#[cfg(not(unix))]
pub struct Shutdown;

#[cfg(not(unix))]
impl Shutdown {
    pub fn register() -> io::Result<Self> {
        Ok(Self)
    }

    pub async fn recv(&mut self) -> &'static str {
        delivered(tokio::signal::ctrl_c().await, "Ctrl-C").await
    }
}

/// Resolve to `name` only for a real delivery; a failed listener parks forever
async fn delivered(result: io::Result<()>, name: &'static str) -> &'static str {
    if let Err(e) = result {
        error!(signal = name, error = %e, "Signal listener failed");
        std::future::pending::<()>().await;
    }
    name
}

/// Start every pause toggle source available to this process.
///
/// Must be called from within a tokio runtime.
pub fn listen_for_pause(pause: PauseFlag) -> io::Result<()> {
    #[cfg(unix)]
    {
        let mut user1 = signal(SignalKind::user_defined1())?;
        let pause = pause.clone();
        tokio::spawn(async move {
            while user1.recv().await.is_some() {
                let paused = pause.toggle();
                info!(paused, "Pause toggled by SIGUSR1");
            }
        });
    }

    if io::stdin().is_terminal() {
        std::thread::spawn(move || {
            for line in io::stdin().lock().lines() {
                if line.is_err() {
                    break;
                }
                let paused = pause.toggle();
                info!(paused, "Pause toggled from keyboard");
            }
            debug!("stdin closed, keyboard pause disabled");
        });
    }

    Ok(())
}
