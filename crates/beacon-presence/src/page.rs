//! The page surface the widget writes into.
//!
//! Rendering produces [`DomOp`]s against element ids. A [`Page`] applies
//! them: the webview page turns them into JavaScript, [`MemoryPage`]
//! keeps element state in memory for headless runs and tests.

use std::collections::{BTreeSet, HashMap, HashSet};
use std::sync::{Arc, Mutex};

pub const STATUS_ELEMENT: &str = "discordStatus";
pub const ACTIVITY_ELEMENT: &str = "discordActivity";
pub const AVATAR_ELEMENT: &str = "discordAvatar";
pub const PROFILE_ELEMENT: &str = "discordProfile";

/// Class on the profile container that centers its content.
pub const CENTER_CLASS: &str = "center-content";

pub const WIDGET_ELEMENTS: [&str; 4] = [
    STATUS_ELEMENT,
    ACTIVITY_ELEMENT,
    AVATAR_ELEMENT,
    PROFILE_ELEMENT,
];

/// One mutation of one page element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomOp {
    SetText {
        id: &'static str,
        text: String,
    },
    SetColor {
        id: &'static str,
        color: String,
    },
    SetVisible {
        id: &'static str,
        visible: bool,
    },
    /// Point an image at `src`. If loading fails the page switches to
    /// `fallback`. `on_settle` runs once loading succeeded or fell back.
    SetImage {
        id: &'static str,
        src: String,
        fallback: Option<String>,
        on_settle: Vec<DomOp>,
    },
    AddClass {
        id: &'static str,
        class: &'static str,
    },
    RemoveClass {
        id: &'static str,
        class: &'static str,
    },
}

impl DomOp {
    pub fn target(&self) -> &'static str {
        match self {
            DomOp::SetText { id, .. }
            | DomOp::SetColor { id, .. }
            | DomOp::SetVisible { id, .. }
            | DomOp::SetImage { id, .. }
            | DomOp::AddClass { id, .. }
            | DomOp::RemoveClass { id, .. } => id,
        }
    }
}

pub trait Page: Send {
    /// Whether an element with this id exists on the page.
    fn has_element(&self, id: &str) -> bool;

    fn apply(&mut self, op: DomOp);
}

impl<P: Page> Page for Arc<Mutex<P>> {
    fn has_element(&self, id: &str) -> bool {
        match self.lock() {
            Ok(page) => page.has_element(id),
            Err(poisoned) => poisoned.into_inner().has_element(id),
        }
    }

    fn apply(&mut self, op: DomOp) {
        match self.lock() {
            Ok(mut page) => page.apply(op),
            Err(poisoned) => poisoned.into_inner().apply(op),
        }
    }
}

// ---------------------------------------------------------------------------
// Target resolution
// ---------------------------------------------------------------------------

/// Which of the four widget elements the page actually has.
///
/// Resolved once when the widget is built; absent elements are skipped
/// for the widget's whole lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiTargets {
    pub status: bool,
    pub activity: bool,
    pub avatar: bool,
    pub profile: bool,
}

impl UiTargets {
    pub fn resolve(page: &dyn Page) -> Self {
        Self {
            status: page.has_element(STATUS_ELEMENT),
            activity: page.has_element(ACTIVITY_ELEMENT),
            avatar: page.has_element(AVATAR_ELEMENT),
            profile: page.has_element(PROFILE_ELEMENT),
        }
    }

    pub fn all() -> Self {
        Self {
            status: true,
            activity: true,
            avatar: true,
            profile: true,
        }
    }
}

// ---------------------------------------------------------------------------
// In-memory page
// ---------------------------------------------------------------------------

/// Observable state of one element in a [`MemoryPage`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementState {
    pub text: String,
    pub color: Option<String>,
    pub visible: Option<bool>,
    pub src: Option<String>,
    pub classes: BTreeSet<String>,
}

impl ElementState {
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }
}

/// A page held in memory.
///
/// Images load instantly unless [`MemoryPage::fail_image_loads`] was
/// called for that element, in which case the fallback is used.
#[derive(Debug, Default)]
pub struct MemoryPage {
    elements: HashMap<String, ElementState>,
    broken_images: HashSet<String>,
    log: Vec<DomOp>,
}

impl MemoryPage {
    /// A page with no elements at all.
    pub fn new() -> Self {
        Self::default()
    }

    /// A page with the given element ids.
    pub fn with_elements(ids: &[&str]) -> Self {
        let mut page = Self::new();
        for id in ids {
            page.elements.insert(id.to_string(), ElementState::default());
        }
        page
    }

    /// The markup the widget ships with: all four elements, profile centered.
    pub fn widget_layout() -> Self {
        let mut page = Self::with_elements(&WIDGET_ELEMENTS);
        if let Some(profile) = page.elements.get_mut(PROFILE_ELEMENT) {
            profile.classes.insert(CENTER_CLASS.to_string());
        }
        page
    }

    pub fn element(&self, id: &str) -> Option<&ElementState> {
        self.elements.get(id)
    }

    /// Make every future load of this image fail.
    pub fn fail_image_loads(&mut self, id: &str) {
        self.broken_images.insert(id.to_string());
    }

    /// Every op applied so far, in order. Settle ops appear after their image.
    pub fn applied(&self) -> &[DomOp] {
        &self.log
    }
}

impl Page for MemoryPage {
    fn has_element(&self, id: &str) -> bool {
        self.elements.contains_key(id)
    }

    fn apply(&mut self, op: DomOp) {
        self.log.push(op.clone());

        let Some(element) = self.elements.get_mut(op.target()) else {
            return;
        };

        match op {
            DomOp::SetText { text, .. } => element.text = text,
            DomOp::SetColor { color, .. } => element.color = Some(color),
            DomOp::SetVisible { visible, .. } => element.visible = Some(visible),
            DomOp::AddClass { class, .. } => {
                element.classes.insert(class.to_string());
            }
            DomOp::RemoveClass { class, .. } => {
                element.classes.remove(class);
            }
            DomOp::SetImage {
                id,
                src,
                fallback,
                on_settle,
            } => {
                let loaded = if self.broken_images.contains(id) {
                    fallback
                } else {
                    Some(src)
                };
                element.src = loaded;
                for settle in on_settle {
                    self.apply(settle);
                }
            }
        }
    }
}
