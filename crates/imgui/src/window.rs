//! Windows, child windows, popups, and tooltips.
//!
//! Windows and child windows are the toolkit's two "end required regardless"
//! regions: `End()`/`EndChild()` must run even when begin reports the window
//! collapsed, closed, or clipped. Every popup and tooltip variant is
//! conditional -- no end call after a failed begin.

use crate::{text, Frame, Scoped};
use crate::sys;
use std::ptr;

fn p_open(open: Option<&mut bool>) -> *mut bool {
    open.map_or(ptr::null_mut(), |b| b as *mut bool)
}

impl Frame {
    // Begin(), End()

    /// `igBegin` -- `open` mirrors the optional close-button state slot.
    pub fn window(
        &self,
        name: &str,
        open: Option<&mut bool>,
        flags: sys::ImGuiWindowFlags,
    ) -> Scoped<impl FnOnce() + '_> {
        let name = text::scratch(name);
        let visible = unsafe { sys::igBegin(text::as_ptr(&name), p_open(open), flags) };
        Scoped::required(visible, || unsafe { sys::igEnd() })
    }

    // BeginChild(), EndChild()

    pub fn child_window(
        &self,
        str_id: &str,
        size: impl Into<sys::ImVec2>,
        child_flags: sys::ImGuiChildFlags,
        window_flags: sys::ImGuiWindowFlags,
    ) -> Scoped<impl FnOnce() + '_> {
        let str_id = text::scratch(str_id);
        let visible = unsafe {
            sys::igBeginChild_Str(text::as_ptr(&str_id), size.into(), child_flags, window_flags)
        };
        Scoped::required(visible, || unsafe { sys::igEndChild() })
    }

    pub fn child_window_id(
        &self,
        id: sys::ImGuiID,
        size: impl Into<sys::ImVec2>,
        child_flags: sys::ImGuiChildFlags,
        window_flags: sys::ImGuiWindowFlags,
    ) -> Scoped<impl FnOnce() + '_> {
        let visible =
            unsafe { sys::igBeginChild_ID(id, size.into(), child_flags, window_flags) };
        Scoped::required(visible, || unsafe { sys::igEndChild() })
    }

    // BeginTooltip(), EndTooltip()

    pub fn tooltip(&self) -> Scoped<impl FnOnce() + '_> {
        let open = unsafe { sys::igBeginTooltip() };
        Scoped::when_open(open, || unsafe { sys::igEndTooltip() })
    }

    // BeginItemTooltip() -- shares EndTooltip() with the plain variant.

    pub fn item_tooltip(&self) -> Scoped<impl FnOnce() + '_> {
        let open = unsafe { sys::igBeginItemTooltip() };
        Scoped::when_open(open, || unsafe { sys::igEndTooltip() })
    }

    // BeginPopup(), EndPopup()

    pub fn popup(
        &self,
        str_id: &str,
        flags: sys::ImGuiWindowFlags,
    ) -> Scoped<impl FnOnce() + '_> {
        let str_id = text::scratch(str_id);
        let open = unsafe { sys::igBeginPopup(text::as_ptr(&str_id), flags) };
        Scoped::when_open(open, || unsafe { sys::igEndPopup() })
    }

    pub fn popup_modal(
        &self,
        name: &str,
        open: Option<&mut bool>,
        flags: sys::ImGuiWindowFlags,
    ) -> Scoped<impl FnOnce() + '_> {
        let name = text::scratch(name);
        let visible = unsafe { sys::igBeginPopupModal(text::as_ptr(&name), p_open(open), flags) };
        Scoped::when_open(visible, || unsafe { sys::igEndPopup() })
    }

    /// `igBeginPopupContextItem` -- `str_id = None` uses the last item's ID.
    pub fn popup_context_item(
        &self,
        str_id: Option<&str>,
        popup_flags: sys::ImGuiPopupFlags,
    ) -> Scoped<impl FnOnce() + '_> {
        let str_id = str_id.map(text::scratch);
        let id_ptr = str_id.as_ref().map_or(ptr::null(), text::as_ptr);
        let open = unsafe { sys::igBeginPopupContextItem(id_ptr, popup_flags) };
        Scoped::when_open(open, || unsafe { sys::igEndPopup() })
    }

    pub fn popup_context_window(
        &self,
        str_id: Option<&str>,
        popup_flags: sys::ImGuiPopupFlags,
    ) -> Scoped<impl FnOnce() + '_> {
        let str_id = str_id.map(text::scratch);
        let id_ptr = str_id.as_ref().map_or(ptr::null(), text::as_ptr);
        let open = unsafe { sys::igBeginPopupContextWindow(id_ptr, popup_flags) };
        Scoped::when_open(open, || unsafe { sys::igEndPopup() })
    }

    pub fn popup_context_void(
        &self,
        str_id: Option<&str>,
        popup_flags: sys::ImGuiPopupFlags,
    ) -> Scoped<impl FnOnce() + '_> {
        let str_id = str_id.map(text::scratch);
        let id_ptr = str_id.as_ref().map_or(ptr::null(), text::as_ptr);
        let open = unsafe { sys::igBeginPopupContextVoid(id_ptr, popup_flags) };
        Scoped::when_open(open, || unsafe { sys::igEndPopup() })
    }
}
