//! Conditional widget regions: combos, trees, selection, menus, tables,
//! tabs, and drag-and-drop.
//!
//! All of these follow the toolkit's "do not call end on failure" contract.

use crate::{text, Frame, Scoped};
use crate::sys;
use std::ffi::c_void;
use std::fmt;

impl Frame {
    // BeginCombo(), EndCombo()

    pub fn combo(
        &self,
        label: &str,
        preview_value: &str,
        flags: sys::ImGuiComboFlags,
    ) -> Scoped<impl FnOnce() + '_> {
        let label = text::scratch(label);
        let preview = text::scratch(preview_value);
        let open =
            unsafe { sys::igBeginCombo(text::as_ptr(&label), text::as_ptr(&preview), flags) };
        Scoped::when_open(open, || unsafe { sys::igEndCombo() })
    }

    // TreeNode()/TreeNodeEx(), TreePop()

    pub fn tree_node(&self, label: &str) -> Scoped<impl FnOnce() + '_> {
        let label = text::scratch(label);
        let open = unsafe { sys::igTreeNode_Str(text::as_ptr(&label)) };
        Scoped::when_open(open, || unsafe { sys::igTreePop() })
    }

    /// ID and display label split apart; the label is formatted through the
    /// toolkit's `%s` path like the C API's varargs overloads.
    pub fn tree_node_with_id(
        &self,
        str_id: &str,
        label: fmt::Arguments<'_>,
    ) -> Scoped<impl FnOnce() + '_> {
        let str_id = text::scratch(str_id);
        let label = text::format(label);
        let open = unsafe {
            sys::igTreeNode_StrStr(
                text::as_ptr(&str_id),
                c"%s".as_ptr(),
                text::as_ptr(&label),
            )
        };
        Scoped::when_open(open, || unsafe { sys::igTreePop() })
    }

    pub fn tree_node_with_ptr(
        &self,
        ptr_id: *const c_void,
        label: fmt::Arguments<'_>,
    ) -> Scoped<impl FnOnce() + '_> {
        let label = text::format(label);
        let open =
            unsafe { sys::igTreeNode_Ptr(ptr_id, c"%s".as_ptr(), text::as_ptr(&label)) };
        Scoped::when_open(open, || unsafe { sys::igTreePop() })
    }

    pub fn tree_node_ex(
        &self,
        label: &str,
        flags: sys::ImGuiTreeNodeFlags,
    ) -> Scoped<impl FnOnce() + '_> {
        let label = text::scratch(label);
        let open = unsafe { sys::igTreeNodeEx_Str(text::as_ptr(&label), flags) };
        Scoped::when_open(open, || unsafe { sys::igTreePop() })
    }

    pub fn tree_node_ex_with_id(
        &self,
        str_id: &str,
        flags: sys::ImGuiTreeNodeFlags,
        label: fmt::Arguments<'_>,
    ) -> Scoped<impl FnOnce() + '_> {
        let str_id = text::scratch(str_id);
        let label = text::format(label);
        let open = unsafe {
            sys::igTreeNodeEx_StrStr(
                text::as_ptr(&str_id),
                flags,
                c"%s".as_ptr(),
                text::as_ptr(&label),
            )
        };
        Scoped::when_open(open, || unsafe { sys::igTreePop() })
    }

    pub fn tree_node_ex_with_ptr(
        &self,
        ptr_id: *const c_void,
        flags: sys::ImGuiTreeNodeFlags,
        label: fmt::Arguments<'_>,
    ) -> Scoped<impl FnOnce() + '_> {
        let label = text::format(label);
        let open = unsafe {
            sys::igTreeNodeEx_Ptr(ptr_id, flags, c"%s".as_ptr(), text::as_ptr(&label))
        };
        Scoped::when_open(open, || unsafe { sys::igTreePop() })
    }

    /// Plain-ID tree node, same begin primitive as [`Frame::tree_node`] with
    /// the argument read as an ID rather than a display label.
    pub fn tree(&self, str_id: &str) -> Scoped<impl FnOnce() + '_> {
        self.tree_node(str_id)
    }

    // BeginMultiSelect(), EndMultiSelect()

    /// The begin call hands back the frame's selection IO block; the guard is
    /// open (and the end call armed) only when that block is non-null.
    pub fn multi_select(
        &self,
        flags: sys::ImGuiMultiSelectFlags,
        selection_size: i32,
        items_count: i32,
    ) -> (Scoped<impl FnOnce() + '_>, *mut sys::ImGuiMultiSelectIO) {
        let io = unsafe { sys::igBeginMultiSelect(flags, selection_size, items_count) };
        let guard = Scoped::when_open(!io.is_null(), || unsafe {
            let _ = sys::igEndMultiSelect();
        });
        (guard, io)
    }

    // BeginListBox(), EndListBox()

    pub fn list_box(
        &self,
        label: &str,
        size: impl Into<sys::ImVec2>,
    ) -> Scoped<impl FnOnce() + '_> {
        let label = text::scratch(label);
        let open = unsafe { sys::igBeginListBox(text::as_ptr(&label), size.into()) };
        Scoped::when_open(open, || unsafe { sys::igEndListBox() })
    }

    // BeginMenuBar(), EndMenuBar()

    pub fn menu_bar(&self) -> Scoped<impl FnOnce() + '_> {
        let open = unsafe { sys::igBeginMenuBar() };
        Scoped::when_open(open, || unsafe { sys::igEndMenuBar() })
    }

    // BeginMainMenuBar(), EndMainMenuBar()

    pub fn main_menu_bar(&self) -> Scoped<impl FnOnce() + '_> {
        let open = unsafe { sys::igBeginMainMenuBar() };
        Scoped::when_open(open, || unsafe { sys::igEndMainMenuBar() })
    }

    // BeginMenu(), EndMenu()

    pub fn menu(&self, label: &str, enabled: bool) -> Scoped<impl FnOnce() + '_> {
        let label = text::scratch(label);
        let open = unsafe { sys::igBeginMenu(text::as_ptr(&label), enabled) };
        Scoped::when_open(open, || unsafe { sys::igEndMenu() })
    }

    // BeginTable(), EndTable()

    pub fn table(
        &self,
        str_id: &str,
        columns: i32,
        flags: sys::ImGuiTableFlags,
        outer_size: impl Into<sys::ImVec2>,
        inner_width: f32,
    ) -> Scoped<impl FnOnce() + '_> {
        let str_id = text::scratch(str_id);
        let open = unsafe {
            sys::igBeginTable(
                text::as_ptr(&str_id),
                columns,
                flags,
                outer_size.into(),
                inner_width,
            )
        };
        Scoped::when_open(open, || unsafe { sys::igEndTable() })
    }

    // BeginTabBar(), EndTabBar()

    pub fn tab_bar(
        &self,
        str_id: &str,
        flags: sys::ImGuiTabBarFlags,
    ) -> Scoped<impl FnOnce() + '_> {
        let str_id = text::scratch(str_id);
        let open = unsafe { sys::igBeginTabBar(text::as_ptr(&str_id), flags) };
        Scoped::when_open(open, || unsafe { sys::igEndTabBar() })
    }

    // BeginTabItem(), EndTabItem()

    pub fn tab_item(
        &self,
        label: &str,
        open: Option<&mut bool>,
        flags: sys::ImGuiTabItemFlags,
    ) -> Scoped<impl FnOnce() + '_> {
        let label = text::scratch(label);
        let p_open = open.map_or(std::ptr::null_mut(), |b| b as *mut bool);
        let selected = unsafe { sys::igBeginTabItem(text::as_ptr(&label), p_open, flags) };
        Scoped::when_open(selected, || unsafe { sys::igEndTabItem() })
    }

    // BeginDragDropSource(), EndDragDropSource()

    pub fn drag_drop_source(
        &self,
        flags: sys::ImGuiDragDropFlags,
    ) -> Scoped<impl FnOnce() + '_> {
        let active = unsafe { sys::igBeginDragDropSource(flags) };
        Scoped::when_open(active, || unsafe { sys::igEndDragDropSource() })
    }

    // BeginDragDropTarget(), EndDragDropTarget()

    pub fn drag_drop_target(&self) -> Scoped<impl FnOnce() + '_> {
        let active = unsafe { sys::igBeginDragDropTarget() };
        Scoped::when_open(active, || unsafe { sys::igEndDragDropTarget() })
    }
}
