//! Leptos Focus Trap Utilities
//!
//! Keeps keyboard focus inside a dialog while it is mounted.
//! Tab at the last focusable element wraps to the first (and Shift+Tab the
//! other way), Escape runs a close callback.

use leptos::ev;
use leptos::html::Div;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Elements considered focusable inside the trap
pub const FOCUSABLE_SELECTOR: &str =
    r#"button, [href], input, select, textarea, [tabindex]:not([tabindex="-1"])"#;

/// Delay before moving focus into a freshly mounted container
const FOCUS_DELAY_MS: i32 = 50;

/// Decide where focus should wrap to, if anywhere.
///
/// `active` is the index of the focused element among `len` focusables
/// (`None` when focus is elsewhere). Only the boundary elements wrap.
pub fn wrap_target(len: usize, active: Option<usize>, shift: bool) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let last = len - 1;
    match (active, shift) {
        (Some(0), true) => Some(last),
        (Some(i), false) if i == last => Some(0),
        _ => None,
    }
}

/// Focusable descendants of `container`, in document order
pub fn focusable_elements(container: &web_sys::Element) -> Vec<web_sys::HtmlElement> {
    let Ok(list) = container.query_selector_all(FOCUSABLE_SELECTOR) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web_sys::HtmlElement>().ok())
        .collect()
}

/// Handle a Tab keydown: wrap focus at the boundaries of `container`
pub fn trap_tab(container: &web_sys::Element, ev: &web_sys::KeyboardEvent) {
    let focusables = focusable_elements(container);
    let active = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.active_element());
    let active_index = active.and_then(|active| {
        let active: &web_sys::Node = active.as_ref();
        focusables.iter().position(|el| el.is_same_node(Some(active)))
    });

    if let Some(target) = wrap_target(focusables.len(), active_index, ev.shift_key()) {
        ev.prevent_default();
        let _ = focusables[target].focus();
    }
}

/// Focus `el` after `delay_ms`, once the browser has painted it
pub fn focus_after(el: web_sys::HtmlElement, delay_ms: i32) {
    if let Some(win) = web_sys::window() {
        let cb: Closure<dyn FnMut()> = Closure::once(move || {
            let _ = el.focus();
        });
        let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(
            cb.as_ref().unchecked_ref(),
            delay_ms,
        );
        cb.forget();
    }
}

/// Trap focus inside `container` for the lifetime of the calling component.
///
/// Binds a window keydown listener (removed on cleanup) and moves focus
/// into the container once it mounts.
pub fn use_focus_trap(container: NodeRef<Div>, on_escape: Callback<()>) {
    let handle = window_event_listener(ev::keydown, move |ev: web_sys::KeyboardEvent| {
        match ev.key().as_str() {
            "Escape" => on_escape.run(()),
            "Tab" => {
                if let Some(el) = container.get_untracked() {
                    trap_tab(&el, &ev);
                }
            }
            _ => {}
        }
    });
    on_cleanup(move || handle.remove());

    Effect::new(move |_| {
        if let Some(el) = container.get() {
            focus_after(el.into(), FOCUS_DELAY_MS);
        }
    });
}
