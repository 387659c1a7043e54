//! Scope guards for Dear ImGui.
//!
//! Every paired `Begin*`/`End*` and `Push*`/`Pop*` call of the toolkit is
//! exposed as one factory method on [`Frame`], returning a [`Scoped`] guard
//! that fires the matching closing call exactly once when it leaves scope --
//! on fall-through, early return, or panic unwind alike.
//!
//! Three arming policies cover the toolkit's per-primitive contracts:
//!
//! - windows and child windows require their end call even when begin
//!   reported the region collapsed or clipped ([`Scoped::required`]);
//! - conditional regions (combos, trees, popups, tooltips, menus, tables,
//!   tab bars/items, drag-and-drop, list boxes, multi-select) must *not* be
//!   ended after a failed begin ([`Scoped::when_open`]);
//! - stack pushes (font, style, ID, clip rect, indent, disabled, ...) have no
//!   failure concept and always pop ([`Scoped::always`]).
//!
//! ```no_run
//! use imscope::Frame;
//!
//! // Inside a NewFrame()/Render() cycle driven by your backend:
//! let frame = unsafe { Frame::current() };
//!
//! let window = frame.window("Inspector", None, 0);
//! if window.is_open() {
//!     let _id = frame.id("left-pane");
//!     let tree = frame.tree_node("Entities");
//!     if tree.is_open() {
//!         // ... emit tree contents ...
//!     }
//!     // tree and _id drop here: TreePop (if the node was open), then PopID
//! }
//! // window drops here: End(), required even for a collapsed window
//! ```

pub mod frame;
mod text;

mod stacks;
mod widgets;
mod window;

pub use frame::Frame;
pub use imscope_core::{defer, Scoped};

/// Raw toolkit bindings, re-exported for flag constants and types.
pub use dear_imgui_sys as sys;
