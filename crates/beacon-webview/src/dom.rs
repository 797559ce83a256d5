//! DOM ops rendered as JavaScript for a live webview.

use std::collections::HashSet;
use std::sync::Arc;

use beacon_presence::page::WIDGET_ELEMENTS;
use beacon_presence::{DomOp, Page};
use tracing::trace;

/// Where generated scripts go. The app forwards them to the UI thread
/// and `evaluate_script`s them there.
pub type ScriptSink = Arc<dyn Fn(String) + Send + Sync>;

/// Encode a string as a JavaScript string literal.
pub(crate) fn js_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string())
}

/// Build a self-contained script applying `op`.
///
/// Every script looks its element up by id and does nothing if it is
/// missing, so a stale or edited page never throws.
pub fn script_for(op: &DomOp) -> String {
    let id = js_string(op.target());
    let body = match op {
        DomOp::SetText { text, .. } => format!("el.textContent = {};", js_string(text)),
        DomOp::SetColor { color, .. } => format!("el.style.color = {};", js_string(color)),
        DomOp::SetVisible { visible, .. } => format!(
            "el.style.display = {};",
            if *visible { "\"block\"" } else { "\"none\"" }
        ),
        DomOp::AddClass { class, .. } => format!("el.classList.add({});", js_string(class)),
        DomOp::RemoveClass { class, .. } => {
            format!("el.classList.remove({});", js_string(class))
        }
        DomOp::SetImage {
            src,
            fallback,
            on_settle,
            ..
        } => {
            let settle: String = on_settle.iter().map(script_for).collect();
            let fallback = fallback
                .as_deref()
                .map(js_string)
                .unwrap_or_else(|| "null".to_string());
            format!(
                "var fallback = {fallback}; \
                 var settle = function() {{ {settle} }}; \
                 el.onload = function() {{ settle(); }}; \
                 el.onerror = function() {{ el.onerror = null; if (fallback !== null) {{ el.src = fallback; }} settle(); }}; \
                 el.src = {};",
                js_string(src)
            )
        }
    };
    format!("(function() {{ var el = document.getElementById({id}); if (!el) {{ return; }} {body} }})();")
}

/// The widget page inside a webview.
///
/// Element presence is known up front from the markup the webview was
/// loaded with; ops are turned into scripts and handed to the sink.
pub struct WebviewPage {
    elements: HashSet<String>,
    sink: ScriptSink,
}

impl WebviewPage {
    /// A page loaded from [`crate::widget_html`], which has every widget element.
    pub fn new(sink: ScriptSink) -> Self {
        Self::with_elements(&WIDGET_ELEMENTS, sink)
    }

    /// A page whose markup has only the given element ids.
    pub fn with_elements(ids: &[&str], sink: ScriptSink) -> Self {
        Self {
            elements: ids.iter().map(|id| id.to_string()).collect(),
            sink,
        }
    }
}

impl Page for WebviewPage {
    fn has_element(&self, id: &str) -> bool {
        self.elements.contains(id)
    }

    fn apply(&mut self, op: DomOp) {
        let script = script_for(&op);
        trace!(target_id = op.target(), bytes = script.len(), "dom script");
        (self.sink)(script);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use beacon_presence::page::{AVATAR_ELEMENT, CENTER_CLASS, PROFILE_ELEMENT, STATUS_ELEMENT};
    use beacon_presence::UiTargets;

    fn collecting_sink() -> (ScriptSink, Arc<Mutex<Vec<String>>>) {
        let scripts = Arc::new(Mutex::new(Vec::new()));
        let captured = Arc::clone(&scripts);
        let sink: ScriptSink = Arc::new(move |script| captured.lock().unwrap().push(script));
        (sink, scripts)
    }

    #[test]
    fn set_text_is_escaped() {
        let script = script_for(&DomOp::SetText {
            id: STATUS_ELEMENT,
            text: "</script><script>alert(\"x\")".into(),
        });
        assert!(script.contains(r#"document.getElementById("discordStatus")"#));
        assert!(script.contains(r#"el.textContent = "</script><script>alert(\"x\")";"#));
        assert!(script.contains("if (!el) { return; }"));
    }

    #[test]
    fn visibility_uses_display_block_or_none() {
        let shown = script_for(&DomOp::SetVisible {
            id: AVATAR_ELEMENT,
            visible: true,
        });
        let hidden = script_for(&DomOp::SetVisible {
            id: AVATAR_ELEMENT,
            visible: false,
        });
        assert!(shown.contains(r#"el.style.display = "block";"#));
        assert!(hidden.contains(r#"el.style.display = "none";"#));
    }

    #[test]
    fn image_script_wires_fallback_and_settle() {
        let script = script_for(&DomOp::SetImage {
            id: AVATAR_ELEMENT,
            src: "https://cdn.discordapp.com/avatars/1/abc.png?size=128".into(),
            fallback: Some("https://placeholder".into()),
            on_settle: vec![DomOp::RemoveClass {
                id: PROFILE_ELEMENT,
                class: CENTER_CLASS,
            }],
        });
        assert!(script.contains(r#"var fallback = "https://placeholder";"#));
        assert!(script.contains("el.onerror"));
        assert!(script.contains("el.onload"));
        assert!(script.contains(r#"document.getElementById("discordProfile")"#));
        assert!(script.contains(r#"el.classList.remove("center-content");"#));
        assert!(script.ends_with(r#"el.src = "https://cdn.discordapp.com/avatars/1/abc.png?size=128"; })();"#));
    }

    #[test]
    fn image_without_fallback_uses_null() {
        let script = script_for(&DomOp::SetImage {
            id: AVATAR_ELEMENT,
            src: "https://placeholder".into(),
            fallback: None,
            on_settle: Vec::new(),
        });
        assert!(script.contains("var fallback = null;"));
    }

    #[test]
    fn page_sends_one_script_per_op() {
        let (sink, scripts) = collecting_sink();
        let mut page = WebviewPage::new(sink);
        page.apply(DomOp::SetColor {
            id: STATUS_ELEMENT,
            color: "#23a55a".into(),
        });
        page.apply(DomOp::AddClass {
            id: PROFILE_ELEMENT,
            class: CENTER_CLASS,
        });
        let scripts = scripts.lock().unwrap();
        assert_eq!(scripts.len(), 2);
        assert!(scripts[0].contains(r##"el.style.color = "#23a55a";"##));
        assert!(scripts[1].contains(r#"el.classList.add("center-content");"#));
    }

    #[test]
    fn default_page_has_every_widget_element() {
        let (sink, _) = collecting_sink();
        let page = WebviewPage::new(sink);
        assert_eq!(UiTargets::resolve(&page), UiTargets::all());
    }

    #[test]
    fn partial_page_reports_missing_elements() {
        let (sink, _) = collecting_sink();
        let page = WebviewPage::with_elements(&[STATUS_ELEMENT], sink);
        let targets = UiTargets::resolve(&page);
        assert!(targets.status);
        assert!(!targets.avatar);
    }
}
