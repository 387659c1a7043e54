//! Push/pop stack primitives: font, style, ID, layout, and clipping state.
//!
//! None of these can fail; every guard here is unconditionally armed and the
//! matching pop always runs.

use crate::{Frame, Scoped};
use crate::sys;
use std::ffi::c_void;

impl Frame {
    // PushFont(), PopFont()

    /// # Safety
    ///
    /// `font` must point to a font owned by the current context's atlas (or
    /// be null for the default font).
    pub unsafe fn font(
        &self,
        font: *mut sys::ImFont,
        font_size_base_unscaled: f32,
    ) -> Scoped<impl FnOnce() + '_> {
        unsafe { sys::igPushFont(font, font_size_base_unscaled) };
        Scoped::always(|| unsafe { sys::igPopFont() })
    }

    // PushStyleColor(), PopStyleColor()

    pub fn style_color(
        &self,
        idx: sys::ImGuiCol,
        color: impl Into<sys::ImVec4>,
    ) -> Scoped<impl FnOnce() + '_> {
        unsafe { sys::igPushStyleColor_Vec4(idx, color.into()) };
        Scoped::always(|| unsafe { sys::igPopStyleColor(1) })
    }

    pub fn style_color_u32(
        &self,
        idx: sys::ImGuiCol,
        color: sys::ImU32,
    ) -> Scoped<impl FnOnce() + '_> {
        unsafe { sys::igPushStyleColor_U32(idx, color) };
        Scoped::always(|| unsafe { sys::igPopStyleColor(1) })
    }

    // PushStyleVar(), PopStyleVar()

    pub fn style_var(&self, idx: sys::ImGuiStyleVar, value: f32) -> Scoped<impl FnOnce() + '_> {
        unsafe { sys::igPushStyleVar_Float(idx, value) };
        Scoped::always(|| unsafe { sys::igPopStyleVar(1) })
    }

    pub fn style_var_vec2(
        &self,
        idx: sys::ImGuiStyleVar,
        value: impl Into<sys::ImVec2>,
    ) -> Scoped<impl FnOnce() + '_> {
        unsafe { sys::igPushStyleVar_Vec2(idx, value.into()) };
        Scoped::always(|| unsafe { sys::igPopStyleVar(1) })
    }

    pub fn style_var_x(&self, idx: sys::ImGuiStyleVar, value: f32) -> Scoped<impl FnOnce() + '_> {
        unsafe { sys::igPushStyleVarX(idx, value) };
        Scoped::always(|| unsafe { sys::igPopStyleVar(1) })
    }

    pub fn style_var_y(&self, idx: sys::ImGuiStyleVar, value: f32) -> Scoped<impl FnOnce() + '_> {
        unsafe { sys::igPushStyleVarY(idx, value) };
        Scoped::always(|| unsafe { sys::igPopStyleVar(1) })
    }

    // PushItemFlag(), PopItemFlag()

    pub fn item_flag(
        &self,
        option: sys::ImGuiItemFlags,
        enabled: bool,
    ) -> Scoped<impl FnOnce() + '_> {
        unsafe { sys::igPushItemFlag(option, enabled) };
        Scoped::always(|| unsafe { sys::igPopItemFlag() })
    }

    // PushItemWidth(), PopItemWidth()

    pub fn item_width(&self, item_width: f32) -> Scoped<impl FnOnce() + '_> {
        unsafe { sys::igPushItemWidth(item_width) };
        Scoped::always(|| unsafe { sys::igPopItemWidth() })
    }

    // PushTextWrapPos(), PopTextWrapPos()

    pub fn text_wrap_pos(&self, wrap_local_pos_x: f32) -> Scoped<impl FnOnce() + '_> {
        unsafe { sys::igPushTextWrapPos(wrap_local_pos_x) };
        Scoped::always(|| unsafe { sys::igPopTextWrapPos() })
    }

    // PushID(), PopID()

    /// `igPushID_StrStr` over the string's byte range; no NUL termination
    /// needed, so this also covers the C API's begin/end sub-range form.
    pub fn id(&self, str_id: &str) -> Scoped<impl FnOnce() + '_> {
        let range = str_id.as_bytes();
        unsafe {
            sys::igPushID_StrStr(
                range.as_ptr().cast(),
                range.as_ptr().add(range.len()).cast(),
            )
        };
        Scoped::always(|| unsafe { sys::igPopID() })
    }

    pub fn id_ptr(&self, ptr_id: *const c_void) -> Scoped<impl FnOnce() + '_> {
        unsafe { sys::igPushID_Ptr(ptr_id) };
        Scoped::always(|| unsafe { sys::igPopID() })
    }

    pub fn id_int(&self, int_id: i32) -> Scoped<impl FnOnce() + '_> {
        unsafe { sys::igPushID_Int(int_id) };
        Scoped::always(|| unsafe { sys::igPopID() })
    }

    // BeginDisabled(), EndDisabled()

    pub fn disabled(&self, disabled: bool) -> Scoped<impl FnOnce() + '_> {
        unsafe { sys::igBeginDisabled(disabled) };
        Scoped::always(|| unsafe { sys::igEndDisabled() })
    }

    // PushClipRect(), PopClipRect()

    pub fn clip_rect(
        &self,
        clip_rect_min: impl Into<sys::ImVec2>,
        clip_rect_max: impl Into<sys::ImVec2>,
        intersect_with_current_clip_rect: bool,
    ) -> Scoped<impl FnOnce() + '_> {
        unsafe {
            sys::igPushClipRect(
                clip_rect_min.into(),
                clip_rect_max.into(),
                intersect_with_current_clip_rect,
            )
        };
        Scoped::always(|| unsafe { sys::igPopClipRect() })
    }

    // Indent(), Unindent() -- the cleanup captures the width so both sides
    // shift by the same amount (0.0 means the style's default spacing).

    pub fn indent(&self, indent_w: f32) -> Scoped<impl FnOnce() + '_> {
        unsafe { sys::igIndent(indent_w) };
        Scoped::always(move || unsafe { sys::igUnindent(indent_w) })
    }
}
