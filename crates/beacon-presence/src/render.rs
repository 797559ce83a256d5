//! Presence → page element mapping.

use beacon_config::BeaconConfig;
use tracing::trace;

use crate::page::{
    DomOp, Page, UiTargets, ACTIVITY_ELEMENT, AVATAR_ELEMENT, CENTER_CLASS, PROFILE_ELEMENT,
    STATUS_ELEMENT,
};
use crate::protocol::PresenceData;
use crate::snapshot::{Activity, ActivityKind, PresenceSnapshot, Status};

pub const ONLINE_COLOR: &str = "#23a55a";
pub const IDLE_COLOR: &str = "#f0b232";
pub const DND_COLOR: &str = "#f23f43";
pub const OFFLINE_COLOR: &str = "#80848e";

/// Display label for a status.
pub fn status_text(status: &Status) -> &'static str {
    match status {
        Status::Online => "Online",
        Status::Idle => "Away",
        Status::Dnd => "Busy",
        Status::Offline => "Offline",
        Status::Unknown(_) => "Unknown",
    }
}

/// Label colour for a status. Unknown statuses use the offline grey.
pub fn status_color(status: &Status) -> &'static str {
    match status {
        Status::Online => ONLINE_COLOR,
        Status::Idle => IDLE_COLOR,
        Status::Dnd => DND_COLOR,
        Status::Offline | Status::Unknown(_) => OFFLINE_COLOR,
    }
}

pub fn activity_emoji(kind: ActivityKind) -> &'static str {
    match kind {
        ActivityKind::Game => "🎮",
        ActivityKind::Streaming => "🔴",
        ActivityKind::Listening => "🎵",
        ActivityKind::Partying => "👥",
        ActivityKind::Competing => "🏆",
        ActivityKind::Other(_) => "📱",
    }
}

/// `{emoji} {name}` with ` - {details}` appended when there are details.
pub fn format_activity(activity: &Activity) -> String {
    let emoji = activity_emoji(activity.kind);
    match &activity.details {
        Some(details) => format!("{emoji} {} - {details}", activity.name),
        None => format!("{emoji} {}", activity.name),
    }
}

/// Where avatars are fetched from.
#[derive(Debug, Clone)]
pub struct AvatarSettings {
    pub user_id: String,
    pub cdn_base: String,
    pub size: u32,
    pub placeholder_url: String,
}

impl AvatarSettings {
    pub fn from_config(config: &BeaconConfig) -> Self {
        Self {
            user_id: config.presence.user_id.clone(),
            cdn_base: config.avatar.cdn_base.clone(),
            size: config.avatar.size,
            placeholder_url: config.avatar.placeholder_url.clone(),
        }
    }

    pub fn avatar_url(&self, hash: &str) -> String {
        format!(
            "{}/avatars/{}/{hash}.png?size={}",
            self.cdn_base, self.user_id, self.size
        )
    }
}

impl Default for AvatarSettings {
    fn default() -> Self {
        Self::from_config(&BeaconConfig::default())
    }
}

/// Writes presence state into the widget's page elements.
pub struct Renderer {
    page: Box<dyn Page>,
    targets: UiTargets,
    avatar: AvatarSettings,
}

impl Renderer {
    /// Resolve the widget's elements on `page` once, up front.
    pub fn new(page: Box<dyn Page>, avatar: AvatarSettings) -> Self {
        let targets = UiTargets::resolve(page.as_ref());
        Self {
            page,
            targets,
            avatar,
        }
    }

    pub fn targets(&self) -> UiTargets {
        self.targets
    }

    /// Render a successful fetch: avatar, then activity, then status.
    pub fn render(&mut self, snapshot: &PresenceSnapshot, payload: &PresenceData) {
        self.render_avatar(payload.avatar_hash());
        match &snapshot.activity {
            Some(activity) => self.render_activity(activity),
            None => self.clear_activity(),
        }
        self.render_status(&snapshot.status);
    }

    /// The display used whenever no presence could be fetched.
    pub fn show_offline_status(&mut self) {
        if self.targets.status {
            self.apply(DomOp::SetText {
                id: STATUS_ELEMENT,
                text: status_text(&Status::Offline).into(),
            });
            self.apply(DomOp::SetColor {
                id: STATUS_ELEMENT,
                color: OFFLINE_COLOR.into(),
            });
        }
        self.clear_activity();
    }

    /// Switch the profile container to its centered layout.
    ///
    /// Polling never calls this; the next avatar update undoes it.
    pub fn center_profile_content(&mut self) {
        if self.targets.profile {
            self.apply(DomOp::AddClass {
                id: PROFILE_ELEMENT,
                class: CENTER_CLASS,
            });
        }
    }

    fn render_avatar(&mut self, hash: Option<&str>) {
        if !self.targets.avatar {
            return;
        }

        let uncenter = DomOp::RemoveClass {
            id: PROFILE_ELEMENT,
            class: CENTER_CLASS,
        };

        match hash {
            Some(hash) => {
                let on_settle = if self.targets.profile {
                    vec![
                        DomOp::SetVisible {
                            id: AVATAR_ELEMENT,
                            visible: true,
                        },
                        uncenter,
                    ]
                } else {
                    vec![DomOp::SetVisible {
                        id: AVATAR_ELEMENT,
                        visible: true,
                    }]
                };
                self.apply(DomOp::SetImage {
                    id: AVATAR_ELEMENT,
                    src: self.avatar.avatar_url(hash),
                    fallback: Some(self.avatar.placeholder_url.clone()),
                    on_settle,
                });
                self.apply(DomOp::SetVisible {
                    id: AVATAR_ELEMENT,
                    visible: true,
                });
            }
            None => {
                self.apply(DomOp::SetImage {
                    id: AVATAR_ELEMENT,
                    src: self.avatar.placeholder_url.clone(),
                    fallback: None,
                    on_settle: Vec::new(),
                });
                self.apply(DomOp::SetVisible {
                    id: AVATAR_ELEMENT,
                    visible: true,
                });
                if self.targets.profile {
                    self.apply(uncenter);
                }
            }
        }
    }

    fn render_activity(&mut self, activity: &Activity) {
        if !self.targets.activity {
            return;
        }
        self.apply(DomOp::SetText {
            id: ACTIVITY_ELEMENT,
            text: format_activity(activity),
        });
        self.apply(DomOp::SetVisible {
            id: ACTIVITY_ELEMENT,
            visible: true,
        });
    }

    fn clear_activity(&mut self) {
        if !self.targets.activity {
            return;
        }
        self.apply(DomOp::SetText {
            id: ACTIVITY_ELEMENT,
            text: String::new(),
        });
        self.apply(DomOp::SetVisible {
            id: ACTIVITY_ELEMENT,
            visible: false,
        });
    }

    fn render_status(&mut self, status: &Status) {
        if !self.targets.status {
            return;
        }
        self.apply(DomOp::SetText {
            id: STATUS_ELEMENT,
            text: status_text(status).into(),
        });
        self.apply(DomOp::SetColor {
            id: STATUS_ELEMENT,
            color: status_color(status).into(),
        });
    }

    fn apply(&mut self, op: DomOp) {
        trace!(?op, "dom op");
        self.page.apply(op);
    }
}
