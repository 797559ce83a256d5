//! Discord presence widget: Lanyard fetching, page rendering, change
//! notifications and the poll loop.
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use beacon_common::SilentNotifier;
//! use beacon_config::BeaconConfig;
//! use beacon_presence::{LanyardClient, MemoryPage, PresenceWidget, WidgetSettings};
//!
//! # async fn run() -> Result<(), beacon_common::PresenceError> {
//! let config = BeaconConfig::default();
//! let widget = PresenceWidget::new(
//!     Arc::new(LanyardClient::from_config(&config)?),
//!     Box::new(MemoryPage::widget_layout()),
//!     Arc::new(SilentNotifier),
//!     WidgetSettings::from_config(&config),
//! );
//! let handle = widget.start();
//! handle.shutdown().await;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod detector;
pub mod messages;
pub mod page;
pub mod protocol;
pub mod render;
pub mod scheduler;
pub mod snapshot;
pub mod widget;

#[cfg(test)]
pub(crate) mod test_support;

pub use client::{LanyardClient, PresenceSource};
pub use detector::{detect_change, ChangeDetector, Changes};
pub use messages::{Announcement, MessageTemplates};
pub use page::{DomOp, MemoryPage, Page, UiTargets};
pub use protocol::PresenceData;
pub use render::{AvatarSettings, Renderer};
pub use scheduler::{PollHandle, SchedulerState, WidgetCommand};
pub use snapshot::{Activity, ActivityKind, PresenceSnapshot, Status};
pub use widget::{PresenceWidget, TickOutcome, WidgetSettings};
