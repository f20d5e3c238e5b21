//! Lifetime of one command's network work.
//!
//! A `Screen` owns a cancellation token. Every request it runs is raced
//! against that token, so a response arriving after the screen is gone (or
//! after Ctrl-C) is discarded instead of applied.

use crate::errors::{AppError, AppResult};
use std::future::Future;
use tokio_util::sync::{CancellationToken, DropGuard};
use tracing::debug;

pub struct Screen {
    name: &'static str,
    token: CancellationToken,
    _guard: DropGuard,
}

impl Screen {
    pub fn open(name: &'static str) -> Self {
        let token = CancellationToken::new();
        debug!(screen = name, "screen opened");
        Self {
            name,
            _guard: token.clone().drop_guard(),
            token,
        }
    }

    pub fn token(&self) -> CancellationToken {
        self.token.clone()
    }

    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Cancel this screen when the user hits Ctrl-C. The watcher ends with the screen.
    pub fn cancel_on_ctrl_c(&self) {
        let token = self.token.clone();
        let name = self.name;
        tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {}
                res = tokio::signal::ctrl_c() => {
                    if res.is_ok() {
                        debug!(screen = name, "interrupted");
                        token.cancel();
                    }
                }
            }
        });
    }

    /// Run `fut` unless the screen is cancelled first.
    pub async fn run<F, T>(&self, fut: F) -> AppResult<T>
    where
        F: Future<Output = AppResult<T>>,
    {
        if self.token.is_cancelled() {
            return Err(AppError::Cancelled);
        }

        tokio::select! {
            biased;
            _ = self.token.cancelled() => {
                debug!(screen = self.name, "request dropped: screen cancelled");
                Err(AppError::Cancelled)
            }
            res = fut => res,
        }
    }
}
