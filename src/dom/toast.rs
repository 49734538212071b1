//! Auto-dismissing toast notifications.
//!
//! A toast slides in at the top right, stays for [`TOAST_VISIBLE_MS`], slides
//! out, and is removed from the document once the exit animation ends.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use crate::consts::{
    TOAST_ENTER_ANIMATION, TOAST_ERROR_BACKGROUND, TOAST_EXIT_MS, TOAST_SUCCESS_BACKGROUND,
    TOAST_VISIBLE_MS,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastKind {
    #[default]
    Success,
    Error,
}

impl ToastKind {
    /// Read a kind name as page scripts pass it. Anything other than
    /// `"success"` is shown as an error.
    pub fn from_name(name: &str) -> Self {
        if name == "success" {
            Self::Success
        } else {
            Self::Error
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }

    pub const fn background(self) -> &'static str {
        match self {
            Self::Success => TOAST_SUCCESS_BACKGROUND,
            Self::Error => TOAST_ERROR_BACKGROUND,
        }
    }

    pub fn class_name(self) -> String {
        format!("toast toast-{}", self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastPhase {
    Enter,
    Exit,
    Remove,
}

/// When each phase starts, in milliseconds after the toast is shown.
pub const fn toast_timeline() -> [(u32, ToastPhase); 3] {
    [
        (0, ToastPhase::Enter),
        (TOAST_VISIBLE_MS, ToastPhase::Exit),
        (TOAST_VISIBLE_MS + TOAST_EXIT_MS, ToastPhase::Remove),
    ]
}

/// The two timer delays behind [`toast_timeline`]: showing to exit, then
/// exit to removal.
pub const fn toast_delays() -> (u32, u32) {
    let [_, (exit_at, _), (remove_at, _)] = toast_timeline();
    (exit_at, remove_at - exit_at)
}

/// Inline style for a toast of the given kind.
pub fn toast_css(kind: ToastKind) -> String {
    format!(
        "position: fixed; top: 20px; right: 20px; padding: 1rem 2rem; \
         background: {}; color: white; border-radius: 8px; \
         box-shadow: 0 5px 15px rgba(0,0,0,0.3); z-index: 1000; animation: {};",
        kind.background(),
        TOAST_ENTER_ANIMATION,
    )
}

/// Append a toast to `<body>` and schedule its exit and removal.
#[cfg(feature = "hydrate")]
pub fn show_toast(message: &str, kind: ToastKind) {
    use gloo_timers::callback::Timeout;
    use wasm_bindgen::JsCast;

    use crate::consts::TOAST_EXIT_ANIMATION;

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Some(body) = document.body() else {
        return;
    };
    let toast = match document.create_element("div") {
        Ok(el) => el,
        Err(e) => {
            leptos::logging::warn!("toast create failed: {e:?}");
            return;
        }
    };
    toast.set_class_name(&kind.class_name());
    toast.set_text_content(Some(message));
    if let Some(el) = toast.dyn_ref::<web_sys::HtmlElement>() {
        el.style().set_css_text(&toast_css(kind));
    }
    if let Err(e) = body.append_child(&toast) {
        leptos::logging::warn!("toast append failed: {e:?}");
        return;
    }

    let (exit_delay, remove_delay) = toast_delays();
    Timeout::new(exit_delay, move || {
        if let Some(el) = toast.dyn_ref::<web_sys::HtmlElement>() {
            let _ = el.style().set_property("animation", TOAST_EXIT_ANIMATION);
        }
        Timeout::new(remove_delay, move || toast.remove()).forget();
    })
    .forget();
}
