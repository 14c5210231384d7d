use std::{cell::RefCell, rc::Rc};

use dioxus::prelude::*;
use tracing::{error, trace};
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::common::state::FocusTracker;
use crate::components::icons::SearchIcon;

// shared handle to the mounted search <input>
//
// the keyboard shortcut holds a clone of this, so it must tolerate the field
// not existing yet (first render) or anymore (teardown)
#[derive(Clone, Default)]
pub struct SearchInputRef(Rc<RefCell<Option<HtmlElement>>>);

impl PartialEq for SearchInputRef {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl SearchInputRef {
    pub fn set(&self, element: HtmlElement) {
        *self.0.borrow_mut() = Some(element);
    }

    pub fn clear(&self) {
        self.0.borrow_mut().take();
    }

    pub fn is_mounted(&self) -> bool {
        self.0.borrow().is_some()
    }

    /// Moves keyboard focus to the search field, returning whether it did.
    pub fn focus(&self) -> bool {
        let element = self.0.borrow();

        let Some(element) = element.as_ref() else {
            trace!("search field is not mounted, ignoring focus request");
            return false;
        };

        match element.focus() {
            Ok(()) => true,
            Err(err) => {
                error!("failed to focus search field: {err:?}");
                false
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct SearchBarProps {
    search_ref: SearchInputRef,
    hint: String,
}

#[component]
pub fn SearchBar(props: SearchBarProps) -> Element {
    let search_ref = props.search_ref;
    let hint = props.hint;

    // fresh on every mount, never persisted
    let mut focus = use_signal(FocusTracker::default);

    use_drop({
        let search_ref = search_ref.clone();
        move || search_ref.clear()
    });

    rsx! {
        div { class: "search-bar",
            input {
                class: "{focus().input_class()}",
                r#type: "text",
                placeholder: "{focus().placeholder()}",
                onfocus: move |_| focus.write().focus(),
                onblur: move |_| focus.write().blur(),
                onmounted: move |evt: MountedEvent| {
                    let data = evt.data();
                    match data.downcast::<web_sys::Element>().and_then(|el| el.dyn_ref::<HtmlElement>()) {
                        Some(element) => search_ref.set(element.clone()),
                        None => error!("search field is not an html element"),
                    }
                },
            }
            SearchIcon { class: "search-icon" }
            if focus().shows_hint() {
                kbd { class: "search-hint", "{hint}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_without_field_is_noop() {
        let search_ref = SearchInputRef::default();
        assert!(!search_ref.is_mounted());

        // repeated shortcut presses before mount or after teardown
        assert!(!search_ref.focus());
        assert!(!search_ref.focus());

        search_ref.clear();
        assert!(!search_ref.focus());
        assert!(!search_ref.is_mounted());
    }

    #[test]
    fn clones_share_the_field() {
        let search_ref = SearchInputRef::default();
        let handle = search_ref.clone();

        assert!(search_ref == handle);
        assert!(search_ref != SearchInputRef::default());
    }
}
