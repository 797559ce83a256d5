//! The presence widget: one tick is fetch, render, diff, announce.

use std::sync::Arc;
use std::time::Duration;

use beacon_common::Notifier;
use beacon_config::BeaconConfig;
use tracing::{debug, warn};

use crate::client::PresenceSource;
use crate::detector::{ChangeDetector, Changes};
use crate::messages::{Announcement, MessageTemplates};
use crate::page::{Page, UiTargets};
use crate::render::{AvatarSettings, Renderer};
use crate::snapshot::PresenceSnapshot;

/// Everything the widget takes from configuration.
#[derive(Debug, Clone)]
pub struct WidgetSettings {
    pub poll_interval: Duration,
    pub avatar: AvatarSettings,
    pub templates: MessageTemplates,
}

impl WidgetSettings {
    pub fn from_config(config: &BeaconConfig) -> Self {
        Self {
            poll_interval: config.presence.poll_interval(),
            avatar: AvatarSettings::from_config(config),
            templates: MessageTemplates::from_config(config),
        }
    }
}

impl Default for WidgetSettings {
    fn default() -> Self {
        Self::from_config(&BeaconConfig::default())
    }
}

/// Result of one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Fetch succeeded and was rendered.
    Rendered(Changes),
    /// Fetch failed; the offline display is shown.
    Offline,
}

pub struct PresenceWidget {
    source: Arc<dyn PresenceSource>,
    renderer: Renderer,
    detector: ChangeDetector,
    notifier: Arc<dyn Notifier>,
    settings: WidgetSettings,
}

impl PresenceWidget {
    pub fn new(
        source: Arc<dyn PresenceSource>,
        page: Box<dyn Page>,
        notifier: Arc<dyn Notifier>,
        settings: WidgetSettings,
    ) -> Self {
        let renderer = Renderer::new(page, settings.avatar.clone());
        Self {
            source,
            renderer,
            detector: ChangeDetector::new(),
            notifier,
            settings,
        }
    }

    pub fn poll_interval(&self) -> Duration {
        self.settings.poll_interval
    }

    pub fn targets(&self) -> UiTargets {
        self.renderer.targets()
    }

    /// The last successfully fetched presence.
    pub fn last_snapshot(&self) -> Option<&PresenceSnapshot> {
        self.detector.previous()
    }

    /// Fetch once and update the page.
    ///
    /// Failures never escape: they are logged and shown as offline, and
    /// the previous snapshot is kept for the next comparison.
    pub async fn tick(&mut self) -> TickOutcome {
        let payload = match self.source.fetch_presence().await {
            Ok(payload) => payload,
            Err(e) => {
                warn!(error = %e, "presence fetch failed");
                self.renderer.show_offline_status();
                return TickOutcome::Offline;
            }
        };

        let snapshot = PresenceSnapshot::from(&payload);
        self.renderer.render(&snapshot, &payload);

        let changes = self.detector.observe(&snapshot);
        debug!(
            status = snapshot.status.as_str(),
            activity = snapshot.activity.as_ref().map(|a| a.name.as_str()),
            status_changed = changes.status_changed,
            activity_changed = changes.activity_changed,
            "presence tick"
        );
        if !changes.any() {
            return TickOutcome::Rendered(changes);
        }

        if changes.status_changed {
            let announcement = self.settings.templates.status_changed(&snapshot.status);
            self.announce(announcement);
        }
        if changes.activity_changed {
            let announcement = self
                .settings
                .templates
                .activity_changed(snapshot.activity.as_ref());
            self.announce(announcement);
        }

        TickOutcome::Rendered(changes)
    }

    /// Switch the profile container to its centered layout.
    pub fn center_profile_content(&mut self) {
        self.renderer.center_profile_content();
    }

    /// Delivery permission belongs to the notifier; the widget only asks.
    fn announce(&self, announcement: Announcement) {
        if !self.notifier.is_granted() {
            debug!(tag = %announcement.options.tag, "notification not granted, skipped");
            return;
        }
        self.notifier
            .show_notification(&announcement.message, &announcement.options);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::page::{
        MemoryPage, ACTIVITY_ELEMENT, AVATAR_ELEMENT, CENTER_CLASS, PROFILE_ELEMENT,
        STATUS_ELEMENT,
    };
    use crate::test_support::{body, RecordingNotifier, ScriptedSource};
    use beacon_common::PresenceError;

    struct Harness {
        widget: PresenceWidget,
        page: Arc<Mutex<MemoryPage>>,
        source: Arc<ScriptedSource>,
        notifier: Arc<RecordingNotifier>,
    }

    fn harness(page: MemoryPage, granted: bool) -> Harness {
        let page = Arc::new(Mutex::new(page));
        let source = Arc::new(ScriptedSource::new());
        let notifier = Arc::new(RecordingNotifier::new(granted));
        let widget = PresenceWidget::new(
            source.clone(),
            Box::new(Arc::clone(&page)),
            notifier.clone(),
            WidgetSettings::default(),
        );
        Harness {
            widget,
            page,
            source,
            notifier,
        }
    }

    fn status_text(page: &Arc<Mutex<MemoryPage>>) -> String {
        page.lock().unwrap().element(STATUS_ELEMENT).unwrap().text.clone()
    }

    #[tokio::test]
    async fn unsuccessful_payload_renders_offline_and_clears_activity() {
        let mut h = harness(MemoryPage::widget_layout(), true);
        h.source.push_body(&body("online", Some((0, "Minecraft", None))));
        h.source.push_body(r#"{ "success": false }"#);

        h.widget.tick().await;
        assert_eq!(h.widget.tick().await, TickOutcome::Offline);

        let page = h.page.lock().unwrap();
        let status = page.element(STATUS_ELEMENT).unwrap();
        assert_eq!(status.text, "Offline");
        assert_eq!(status.color.as_deref(), Some("#80848e"));
        let activity = page.element(ACTIVITY_ELEMENT).unwrap();
        assert_eq!(activity.text, "");
        assert_eq!(activity.visible, Some(false));
    }

    #[tokio::test]
    async fn first_fetch_never_notifies() {
        let mut h = harness(MemoryPage::widget_layout(), true);
        h.source.push_body(&body("dnd", Some((0, "Minecraft", None))));
        assert_eq!(
            h.widget.tick().await,
            TickOutcome::Rendered(Changes::default())
        );
        assert!(h.notifier.sent().is_empty());
    }

    #[tokio::test]
    async fn identical_fetches_do_not_notify() {
        let mut h = harness(MemoryPage::widget_layout(), true);
        let same = body("online", Some((2, "Spotify", Some("Song"))));
        h.source.push_body(&same);
        h.source.push_body(&same);
        h.widget.tick().await;
        h.widget.tick().await;
        assert!(h.notifier.sent().is_empty());
    }

    #[tokio::test]
    async fn status_change_sends_exactly_one_notification() {
        let mut h = harness(MemoryPage::widget_layout(), true);
        h.source.push_body(&body("online", None));
        h.source.push_body(&body("dnd", None));
        h.widget.tick().await;
        h.widget.tick().await;

        let sent = h.notifier.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, "musukeが取り込み中になりました");
        assert_eq!(sent[0].1.tag, "discord-status-change");
        assert_eq!(status_text(&h.page), "Busy");
    }

    #[tokio::test]
    async fn status_is_announced_before_activity() {
        let mut h = harness(MemoryPage::widget_layout(), true);
        h.source.push_body(&body("online", Some((0, "Minecraft", None))));
        h.source.push_body(&body("idle", Some((1, "Twitch", None))));
        h.widget.tick().await;
        h.widget.tick().await;

        let sent = h.notifier.sent();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0].0, "musukeが離席中になりました");
        assert_eq!(sent[1].0, "musukeが「Twitch」を配信し始めました");
        assert_eq!(sent[1].1.tag, "discord-activity-change");
    }

    #[tokio::test]
    async fn activity_ending_is_announced() {
        let mut h = harness(MemoryPage::widget_layout(), true);
        h.source.push_body(&body("online", Some((0, "Minecraft", None))));
        h.source.push_body(&body("online", None));
        h.widget.tick().await;
        h.widget.tick().await;

        let sent = h.notifier.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, "musukeのアクティビティが終了しました");
    }

    #[tokio::test]
    async fn activity_starting_from_none_is_silent() {
        let mut h = harness(MemoryPage::widget_layout(), true);
        h.source.push_body(&body("online", None));
        h.source.push_body(&body("online", Some((0, "Minecraft", None))));
        h.widget.tick().await;
        h.widget.tick().await;
        assert!(h.notifier.sent().is_empty());
    }

    #[tokio::test]
    async fn denied_notifier_receives_nothing() {
        let mut h = harness(MemoryPage::widget_layout(), false);
        h.source.push_body(&body("online", Some((0, "Minecraft", None))));
        h.source.push_body(&body("offline", None));
        let outcome = h.widget.tick().await;
        assert_eq!(outcome, TickOutcome::Rendered(Changes::default()));
        let outcome = h.widget.tick().await;
        assert_eq!(
            outcome,
            TickOutcome::Rendered(Changes {
                status_changed: true,
                activity_changed: true,
            })
        );
        assert!(h.notifier.sent().is_empty());
    }

    #[tokio::test]
    async fn in_page_switch_does_not_silence_a_granted_notifier() {
        let mut config = BeaconConfig::default();
        config.notifications.enabled = false;
        config.notifications.native = true;

        let page = Arc::new(Mutex::new(MemoryPage::widget_layout()));
        let source = Arc::new(ScriptedSource::new());
        let native = Arc::new(RecordingNotifier::new(config.notifications.native));
        let mut widget = PresenceWidget::new(
            source.clone(),
            Box::new(page),
            native.clone(),
            WidgetSettings::from_config(&config),
        );
        source.push_body(&body("online", None));
        source.push_body(&body("dnd", None));
        widget.tick().await;
        widget.tick().await;

        let sent = native.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, "musukeが取り込み中になりました");
    }

    #[tokio::test]
    async fn failure_keeps_previous_values() {
        let mut h = harness(MemoryPage::widget_layout(), true);
        h.source.push_body(&body("online", None));
        h.source
            .push_error(PresenceError::Network("connection reset".into()));
        h.source.push_body(&body("online", None));

        h.widget.tick().await;
        assert_eq!(h.widget.tick().await, TickOutcome::Offline);
        assert_eq!(status_text(&h.page), "Offline");

        // Still compared against the last successful fetch: no change.
        assert_eq!(
            h.widget.tick().await,
            TickOutcome::Rendered(Changes::default())
        );
        assert!(h.notifier.sent().is_empty());
        assert_eq!(status_text(&h.page), "Online");
    }

    #[tokio::test]
    async fn failure_before_first_success_leaves_no_previous() {
        let mut h = harness(MemoryPage::widget_layout(), true);
        h.source.push_body("not json");
        h.source.push_body(&body("dnd", None));
        assert_eq!(h.widget.tick().await, TickOutcome::Offline);
        assert!(h.widget.last_snapshot().is_none());
        assert_eq!(
            h.widget.tick().await,
            TickOutcome::Rendered(Changes::default())
        );
        assert!(h.notifier.sent().is_empty());
    }

    #[tokio::test]
    async fn avatar_less_payload_uses_placeholder_and_uncenters() {
        let mut h = harness(MemoryPage::widget_layout(), true);
        h.source.push_body(&body("online", None));
        h.widget.tick().await;

        let page = h.page.lock().unwrap();
        assert_eq!(
            page.element(AVATAR_ELEMENT).unwrap().src.as_deref(),
            Some("https://via.placeholder.com/80x80/4A90E2/FFFFFF?text=D")
        );
        assert!(!page.element(PROFILE_ELEMENT).unwrap().has_class(CENTER_CLASS));
    }

    #[tokio::test]
    async fn page_without_widget_elements_gets_no_ops() {
        let mut h = harness(MemoryPage::new(), true);
        h.source.push_body(&body("online", Some((0, "Minecraft", None))));
        h.source.push_body(r#"{ "success": false }"#);
        h.widget.tick().await;
        h.widget.tick().await;
        h.widget.center_profile_content();
        assert!(h.page.lock().unwrap().applied().is_empty());
    }

    #[tokio::test]
    async fn center_profile_content_is_out_of_band() {
        let mut h = harness(MemoryPage::widget_layout(), true);
        h.source.push_body(&body("online", None));
        h.widget.tick().await;
        h.widget.center_profile_content();
        assert!(h
            .page
            .lock()
            .unwrap()
            .element(PROFILE_ELEMENT)
            .unwrap()
            .has_class(CENTER_CLASS));
    }
}
