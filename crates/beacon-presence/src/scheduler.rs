//! Repeating poll loop around a [`PresenceWidget`].

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::widget::PresenceWidget;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerState {
    Idle,
    Polling,
}

/// Requests accepted by a running widget between ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetCommand {
    /// Run an extra tick now. The interval is not reset.
    Refresh,
    /// Apply the centered profile layout.
    CenterProfile,
}

impl PresenceWidget {
    /// Spawn the poll loop on the current tokio runtime.
    ///
    /// The first tick runs immediately. Unless [`PollHandle::stop`] was
    /// called while it ran, the widget then ticks every poll interval.
    pub fn start(self) -> PollHandle {
        let token = CancellationToken::new();
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (state_tx, state_rx) = watch::channel(SchedulerState::Idle);

        let task = tokio::spawn(run(self, token.clone(), command_rx, state_tx));

        PollHandle {
            token,
            commands: command_tx,
            state: state_rx,
            task: Some(task),
        }
    }
}

async fn run(
    mut widget: PresenceWidget,
    token: CancellationToken,
    mut commands: mpsc::UnboundedReceiver<WidgetCommand>,
    state: watch::Sender<SchedulerState>,
) -> PresenceWidget {
    widget.tick().await;
    if token.is_cancelled() {
        debug!("stopped before polling began");
        return widget;
    }

    let period = widget.poll_interval();
    let mut interval = tokio::time::interval_at(Instant::now() + period, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    state.send_replace(SchedulerState::Polling);
    info!(interval_secs = period.as_secs(), "presence polling started");

    loop {
        tokio::select! {
            biased;
            _ = token.cancelled() => break,
            _ = interval.tick() => {
                widget.tick().await;
            }
            Some(command) = commands.recv() => match command {
                WidgetCommand::Refresh => {
                    debug!("refresh requested");
                    widget.tick().await;
                }
                WidgetCommand::CenterProfile => widget.center_profile_content(),
            },
        }
    }

    state.send_replace(SchedulerState::Idle);
    info!("presence polling stopped");
    widget
}

/// Control handle for a started widget. Dropping it stops polling.
pub struct PollHandle {
    token: CancellationToken,
    commands: mpsc::UnboundedSender<WidgetCommand>,
    state: watch::Receiver<SchedulerState>,
    task: Option<JoinHandle<PresenceWidget>>,
}

impl PollHandle {
    /// Cancel the repeating timer. A tick already running still renders.
    pub fn stop(&self) {
        if !self.token.is_cancelled() {
            debug!("stopping presence polling");
            self.token.cancel();
        }
    }

    pub fn state(&self) -> SchedulerState {
        if self.token.is_cancelled() {
            SchedulerState::Idle
        } else {
            *self.state.borrow()
        }
    }

    /// Queue an immediate extra tick. Returns false once the loop has exited.
    pub fn refresh(&self) -> bool {
        self.send(WidgetCommand::Refresh)
    }

    /// Queue the centered profile layout. Returns false once the loop has exited.
    pub fn center_profile(&self) -> bool {
        self.send(WidgetCommand::CenterProfile)
    }

    pub fn send(&self, command: WidgetCommand) -> bool {
        !self.token.is_cancelled() && self.commands.send(command).is_ok()
    }

    /// Wait for the loop to exit and take the widget back.
    ///
    /// Only returns after [`PollHandle::stop`] was called, from this
    /// handle or a clone of its token.
    pub async fn join(mut self) -> Option<PresenceWidget> {
        let task = self.task.take()?;
        task.await.ok()
    }

    /// Stop, then wait for the loop to exit.
    pub async fn shutdown(self) -> Option<PresenceWidget> {
        self.stop();
        self.join().await
    }

    pub fn cancellation_token(&self) -> CancellationToken {
        self.token.clone()
    }
}

impl Drop for PollHandle {
    fn drop(&mut self) {
        self.token.cancel();
    }
}
