use crate::VerificationSession;

use std::sync::Arc;
use std::time::Duration;

use log::debug;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::{Instant, interval_at};

const TICK: Duration = Duration::from_secs(1);

/// Background one-second ticker driving a [`VerificationSession`] down to zero.
///
/// The task stops by itself at zero and is aborted when the handle is dropped,
/// so it never touches the session after its owner is gone.
pub struct Countdown {
    handle: JoinHandle<()>,
}

impl Countdown {
    /// Spawn the ticker. Must be called from within a tokio runtime.
    pub fn start(session: Arc<Mutex<VerificationSession>>) -> Self {
        let handle = tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + TICK, TICK);
            loop {
                ticker.tick().await;
                let remaining = session.lock().await.tick();
                if remaining == 0 {
                    debug!("Verification countdown finished");
                    break;
                }
            }
        });

        Self { handle }
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    pub fn cancel(&self) {
        self.handle.abort();
    }
}

impl Drop for Countdown {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
