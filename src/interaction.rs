//! Pointer interaction shared between the pickers of one page.
//!
//! A drag may start in one picker and end anywhere in the document, so the
//! drag flag does not belong to a single picker. The page owns one
//! [`InputCoordinator`] and hands a clone of it to every picker; a
//! document-level pointer-up goes straight to the coordinator.

use std::cell::Cell;
use std::rc::Rc;

use bitflags::bitflags;

use crate::{Channel, Error, Field, Result};

bitflags! {
    /// Classes an adapter reports for the element under the pointer.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct TargetClasses : u8 {
        /// The gradient overlay of the saturation/brightness pad.
        const OVERLAY = 1 << 0;
        /// The frame around the saturation/brightness pad.
        const PICKER_WRAP = 1 << 1;
        /// The thumb of the saturation/brightness pad.
        const PICKER = 1 << 2;
        /// The hue gradient.
        const HUE_BAR = 1 << 3;
        /// The track holding the hue thumb.
        const HUE_TRACK = 1 << 4;
        /// A numeric field that can be adjusted by dragging vertically.
        const DRAGABLE = 1 << 5;
        /// The preview swatch of the current color.
        const CURRENT = 1 << 6;

        /// Any part of the saturation/brightness pad.
        const PAD = Self::OVERLAY.bits() | Self::PICKER_WRAP.bits() | Self::PICKER.bits();
        /// Any part of the hue bar.
        const HUE = Self::HUE_BAR.bits() | Self::HUE_TRACK.bits();
    }
}

impl Default for TargetClasses {
    fn default() -> Self {
        Self::empty()
    }
}

impl TargetClasses {
    const NAMES: [(&'static str, TargetClasses); 7] = [
        ("overlay", TargetClasses::OVERLAY),
        ("picker-wrap", TargetClasses::PICKER_WRAP),
        ("picker", TargetClasses::PICKER),
        ("huebar", TargetClasses::HUE_BAR),
        ("picker-h", TargetClasses::HUE_TRACK),
        ("dragable", TargetClasses::DRAGABLE),
        ("current", TargetClasses::CURRENT),
    ];

    /// Look up a single class name.
    pub fn from_class_name(name: &str) -> Result<Self> {
        Self::NAMES
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, flag)| *flag)
            .ok_or_else(|| Error::UnknownClass(name.to_owned()))
    }

    /// Collect the known classes of a whitespace separated class list.
    /// Classes that mean nothing to the picker are skipped.
    pub fn from_class_list(list: &str) -> Self {
        list.split_whitespace()
            .filter_map(|name| Self::from_class_name(name).ok())
            .fold(Self::empty(), |acc, flag| acc | flag)
    }
}

/// What a drag is adjusting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragTarget {
    /// The saturation/brightness pad.
    Pad,
    /// The hue bar.
    HueBar,
    /// Fine adjustment of a numeric field, one unit per pixel.
    Field(Channel),
}

/// The element a pointer event landed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Target {
    /// Classes of the element.
    pub classes: TargetClasses,
    /// The field the element is tagged with, if any.
    pub field: Option<Field>,
}

impl Target {
    /// Create a target from a class list and an optional field tag. An
    /// unknown field tag is treated as no tag.
    pub fn new(class_list: &str, field_tag: Option<&str>) -> Self {
        Self {
            classes: TargetClasses::from_class_list(class_list),
            field: field_tag.and_then(|tag| tag.parse().ok()),
        }
    }

    /// The drag started by pressing on this target. The pad wins over the
    /// hue bar, which wins over a dragable field.
    pub fn drag_target(&self) -> Option<DragTarget> {
        if self.classes.intersects(TargetClasses::PAD) {
            Some(DragTarget::Pad)
        } else if self.classes.intersects(TargetClasses::HUE) {
            Some(DragTarget::HueBar)
        } else if self.classes.contains(TargetClasses::DRAGABLE) {
            match self.field {
                Some(Field::Channel(channel)) => Some(DragTarget::Field(channel)),
                _ => None,
            }
        } else {
            None
        }
    }

    /// Whether pressing on this target selects the hex text.
    pub fn selects_hex(&self) -> bool {
        self.field == Some(Field::Hex) || self.classes.contains(TargetClasses::CURRENT)
    }
}

/// State of a picker's drag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragState {
    /// No drag in progress.
    Idle,
    /// A drag adjusting the given target.
    Dragging(DragTarget),
}

/// Cursor the adapter should show over the whole document.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Cursor {
    /// Whatever the element under the pointer asks for.
    #[default]
    Auto,
    /// Vertical resize, shown while dragging along one axis.
    VerticalResize,
}

/// Identifies one drag. Every [`InputCoordinator::begin_drag`] hands out a
/// new id, so a picker whose drag ended never mistakes a later drag for its
/// own.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DragId(u64);

#[derive(Debug, Default)]
struct Shared {
    dragging: Cell<bool>,
    generation: Cell<u64>,
    cursor: Cell<Cursor>,
}

/// Drag state shared by all pickers on a page.
///
/// Cloning returns another handle to the same state.
#[derive(Clone, Debug, Default)]
pub struct InputCoordinator {
    shared: Rc<Shared>,
}

impl InputCoordinator {
    /// Create a coordinator with no drag in progress.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a drag as started. Text selection stays suppressed until the
    /// next pointer-up.
    ///
    /// Any drag started before is over once this returns.
    pub fn begin_drag(&self) -> DragId {
        let generation = self.shared.generation.get().wrapping_add(1);
        self.shared.generation.set(generation);
        self.shared.dragging.set(true);
        DragId(generation)
    }

    /// Handle a pointer-up anywhere in the document.
    pub fn pointer_up(&self) {
        if self.shared.dragging.replace(false) {
            log::debug!("drag ended");
        }
        self.shared.cursor.set(Cursor::Auto);
    }

    /// Whether a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.shared.dragging.get()
    }

    /// Whether `id` is the drag in progress.
    pub fn is_live(&self, id: DragId) -> bool {
        self.is_dragging() && self.shared.generation.get() == id.0
    }

    /// Whether the adapter should prevent document text selection.
    pub fn selection_suppressed(&self) -> bool {
        self.is_dragging()
    }

    /// The document cursor hint.
    pub fn cursor(&self) -> Cursor {
        self.shared.cursor.get()
    }

    pub(crate) fn set_cursor(&self, cursor: Cursor) {
        self.shared.cursor.set(cursor);
    }
}
