//! The picker controller: one color, mutated from fields and pointer
//! gestures, rendered after every change.

use crate::color::{MAX_HUE, MAX_PERCENT};
use crate::input::decode_hex;
use crate::interaction::{Cursor, DragId, DragState, DragTarget, InputCoordinator, Target};
use crate::math::{clamp, invert};
use crate::render::{PagePoint, Render, Snapshot};
use crate::{Channel, Color, Component, Field, Input, PickerConfig, Rgb};

/// Page positions of the parts of a picker that react to the pointer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    /// Top left corner of the saturation/brightness pad.
    pub pad: PagePoint,
    /// Top left corner of the hue bar.
    pub hue_bar: PagePoint,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            pad: PagePoint::origin(),
            hue_bar: PagePoint::origin(),
        }
    }
}

/// A color picker widget.
///
/// Every mutation goes through [`ColorPicker::set_input`] or one of the
/// pointer handlers and ends with a fresh [`Snapshot`] handed to the
/// renderer.
pub struct ColorPicker<R: Render> {
    color: Color,
    config: PickerConfig,
    layout: Layout,
    coordinator: InputCoordinator,
    renderer: R,
    active: Option<(DragId, DragTarget)>,
    prev_y: Option<Component>,
    snapshot: Snapshot,
}

impl<R: Render> ColorPicker<R> {
    /// Create a picker with the default geometry and render it once.
    pub fn new(renderer: R, coordinator: InputCoordinator) -> Self {
        Self::with_config(renderer, coordinator, PickerConfig::default(), Layout::default())
    }

    /// Create a picker and render it once.
    pub fn with_config(
        renderer: R,
        coordinator: InputCoordinator,
        config: PickerConfig,
        layout: Layout,
    ) -> Self {
        let color = Color::default();
        let snapshot = Snapshot::new(&color, &config);

        let mut picker = Self {
            color,
            config,
            layout,
            coordinator,
            renderer,
            active: None,
            prev_y: None,
            snapshot,
        };
        picker.renderer.render(&picker.snapshot);
        picker
    }

    /// The current color.
    pub fn color(&self) -> &Color {
        &self.color
    }

    /// The last rendered snapshot.
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// The geometry of the picker.
    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    /// The renderer the picker draws to.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// The renderer the picker draws to.
    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Update the page positions of the pad and the hue bar, for example
    /// after the page scrolled.
    pub fn set_layout(&mut self, layout: Layout) {
        self.layout = layout;
    }

    /// Whether this picker is being dragged, and what the drag adjusts.
    pub fn drag_state(&self) -> DragState {
        match self.live_target() {
            Some(target) => DragState::Dragging(target),
            None => DragState::Idle,
        }
    }

    /// The target of this picker's drag, unless the drag has ended or been
    /// replaced by a press elsewhere.
    fn live_target(&self) -> Option<DragTarget> {
        self.active
            .filter(|(id, _)| self.coordinator.is_live(*id))
            .map(|(_, target)| target)
    }

    /// Apply a value to one of the fields and render.
    ///
    /// Red, green and blue are combined with the other two channels as
    /// currently displayed, so the rounding of the previous color is kept.
    pub fn set_input(&mut self, input: Input) {
        match input {
            Input::Hex(text) => self.color.set_rgb(&Rgb::from_bytes(decode_hex(&text))),
            Input::Channel(channel, value) => {
                let (min, max) = channel.range();
                let value = clamp(min, max, value as Component);
                let [red, green, blue] = self.snapshot.rgb.map(Component::from);

                match channel {
                    Channel::Red => self.color.set_rgb(&Rgb::new(value, green, blue)),
                    Channel::Green => self.color.set_rgb(&Rgb::new(red, value, blue)),
                    Channel::Blue => self.color.set_rgb(&Rgb::new(red, green, value)),
                    Channel::Hue => self.color.set_hue(value),
                    Channel::Saturation => self.color.set_saturation(value),
                    Channel::Brightness => self.color.set_brightness(value),
                }
            }
        }

        self.update();
    }

    /// Apply raw text for the field named `tag`. Unknown tags are ignored.
    pub fn set_input_raw(&mut self, tag: &str, raw: &str) {
        match tag.parse::<Field>() {
            Ok(field) => self.set_input(Input::from_text(field, raw)),
            Err(err) => log::debug!("ignoring input: {}", err),
        }
    }

    /// Handle the text of a field changing. The hex field only applies on
    /// [`ColorPicker::commit_hex`].
    pub fn edit_field(&mut self, field: Field, raw: &str) {
        if field == Field::Hex {
            return;
        }
        self.set_input(Input::from_text(field, raw));
    }

    /// Handle the hex field losing focus or Enter being pressed in it.
    pub fn commit_hex(&mut self, raw: &str) {
        self.set_input(Input::Hex(raw.to_owned()));
    }

    /// Handle a pointer press inside the picker.
    pub fn pointer_down(&mut self, position: PagePoint, target: Target) {
        let id = self.coordinator.begin_drag();
        self.renderer.clear_selection();

        if target.selects_hex() {
            self.renderer.select_hex();
        }

        let target = target.drag_target();
        self.active = target.map(|target| (id, target));
        match target {
            Some(DragTarget::Pad) => self.move_pad(position),
            Some(DragTarget::HueBar) => {
                self.move_hue(position);
                self.coordinator.set_cursor(Cursor::VerticalResize);
            }
            Some(DragTarget::Field(_)) => self.coordinator.set_cursor(Cursor::VerticalResize),
            None => {}
        }

        if let Some(target) = target {
            log::debug!("drag started on {:?}", target);
        }
    }

    /// Handle the pointer moving anywhere in the document.
    pub fn pointer_move(&mut self, position: PagePoint) {
        match self.live_target() {
            Some(DragTarget::Pad) => {
                self.renderer.clear_selection();
                self.move_pad(position);
            }
            Some(DragTarget::HueBar) => {
                self.renderer.clear_selection();
                self.move_hue(position);
            }
            Some(DragTarget::Field(channel)) => {
                if let Some(prev_y) = self.prev_y {
                    let adjust = clamp(-1.0, 1.0, prev_y - position.y);
                    // Sub-pixel motion accumulates against the last
                    // position that moved the value.
                    if adjust == 0.0 {
                        return;
                    }
                    let value = self.snapshot.value(channel) + adjust as i64;
                    log::trace!("fine adjust {} to {}", channel.name(), value);
                    self.set_input(Input::Channel(channel, value));
                }
            }
            None => {}
        }
        self.prev_y = Some(position.y);
    }

    /// Handle a pointer release over the picker. The release also ends the
    /// drag for the whole document.
    pub fn pointer_up(&mut self) {
        self.active = None;
        self.coordinator.pointer_up();
    }

    /// Handle a wheel event over `target`. Numeric fields step by one in the
    /// direction of `delta`.
    pub fn wheel(&mut self, target: Target, delta: Component) {
        let Some(Field::Channel(channel)) = target.field else {
            return;
        };

        let adjust = if delta > 0.0 { 1 } else { -1 };
        self.set_input(Input::Channel(channel, self.snapshot.value(channel) + adjust));
        self.renderer.focus(channel.into());
    }

    fn move_pad(&mut self, position: PagePoint) {
        let offset = position - self.layout.pad;
        let size = self.config.size;

        self.color.set_saturation((offset.x + 1.0) / size * MAX_PERCENT);
        self.color.set_brightness(invert((offset.y - 1.0) / size) * MAX_PERCENT);
        log::trace!(
            "pad moved to s={} b={}",
            self.color.saturation(),
            self.color.brightness()
        );
        self.update();
    }

    fn move_hue(&mut self, position: PagePoint) {
        let offset = position - self.layout.hue_bar;
        let size = self.config.size;

        self.color
            .set_hue(invert((offset.y - self.config.hue_thumb_offset) / size) * MAX_HUE);
        log::trace!("hue moved to {}", self.color.hue());
        self.update();
    }

    fn update(&mut self) {
        self.snapshot = Snapshot::new(&self.color, &self.config);
        self.renderer.render(&self.snapshot);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::TextColor;

    #[derive(Default)]
    struct Recorder {
        snapshots: Vec<Snapshot>,
        hex_selections: usize,
        focused: Vec<Field>,
        selection_clears: usize,
    }

    impl Render for Recorder {
        fn render(&mut self, snapshot: &Snapshot) {
            self.snapshots.push(snapshot.clone());
        }

        fn select_hex(&mut self) {
            self.hex_selections += 1;
        }

        fn focus(&mut self, field: Field) {
            self.focused.push(field);
        }

        fn clear_selection(&mut self) {
            self.selection_clears += 1;
        }
    }

    fn layout() -> Layout {
        Layout {
            pad: PagePoint::new(20.0, 40.0),
            hue_bar: PagePoint::new(230.0, 40.0),
        }
    }

    fn picker() -> ColorPicker<Recorder> {
        picker_with(InputCoordinator::new())
    }

    fn picker_with(coordinator: InputCoordinator) -> ColorPicker<Recorder> {
        ColorPicker::with_config(
            Recorder::default(),
            coordinator,
            PickerConfig::default(),
            layout(),
        )
    }

    fn within_one(actual: Component, expected: Component) -> bool {
        (actual - expected).abs() <= 1.0
    }

    #[test]
    fn renders_on_creation() {
        let picker = picker();
        assert_eq!(picker.renderer().snapshots.len(), 1);
        assert_eq!(picker.snapshot().hex, "#FF0000");
        assert_eq!(picker.drag_state(), DragState::Idle);
    }

    #[test]
    fn hue_is_clamped() {
        let mut picker = picker();
        picker.set_input(Input::Channel(Channel::Hue, 400));
        assert_eq!(picker.color().hue(), 360.0);
        assert_eq!(picker.snapshot().text(Channel::Hue.into()), "360");

        picker.set_input(Input::Channel(Channel::Hue, -1));
        assert_eq!(picker.snapshot().hue, 0);
        assert_eq!(picker.renderer().snapshots.len(), 3);
    }

    #[test]
    fn rgb_channel_combines_with_displayed_channels() {
        let mut picker = picker();
        picker.set_input(Input::Channel(Channel::Green, 255));
        assert_eq!(picker.snapshot().hex, "#FFFF00");
        assert!(within_one(picker.color().hue(), 60.0));

        picker.set_input(Input::Channel(Channel::Blue, 300));
        assert_eq!(picker.snapshot().rgb, [255, 255, 255]);
        assert_eq!(picker.color().saturation(), 0.0);
        assert_eq!(picker.color().hue(), 0.0);

        picker.set_input(Input::Channel(Channel::Red, -20));
        assert_eq!(picker.snapshot().rgb, [0, 255, 255]);
    }

    #[test]
    fn hex_commit() {
        let mut picker = picker();
        picker.commit_hex("#00F");
        assert_eq!(picker.snapshot().rgb, [0, 0, 255]);
        assert!(within_one(picker.color().hue(), 240.0));

        picker.commit_hex("ZZZ");
        assert_eq!(picker.snapshot().hex, "#FFFFFF");
        assert_eq!(picker.snapshot().text_color, TextColor::Black);
    }

    #[test]
    fn hex_field_edits_wait_for_commit() {
        let mut picker = picker();
        picker.edit_field(Field::Hex, "#00FF00");
        assert_eq!(picker.snapshot().hex, "#FF0000");
        assert_eq!(picker.renderer().snapshots.len(), 1);

        picker.edit_field(Channel::Saturation.into(), "25%");
        assert_eq!(picker.color().saturation(), 25.0);
    }

    #[test]
    fn raw_input_by_tag() {
        let mut picker = picker();
        picker.set_input_raw("brightness", "abc");
        assert_eq!(picker.color().brightness(), 0.0);
        assert_eq!(picker.snapshot().hex, "#000000");

        picker.set_input_raw("alpha", "10");
        assert_eq!(picker.renderer().snapshots.len(), 2);
    }

    #[test]
    fn text_color_follows_brightness() {
        let mut picker = picker();
        picker.set_input(Input::Channel(Channel::Brightness, 76));
        assert_eq!(picker.snapshot().text_color, TextColor::Black);
        picker.set_input(Input::Channel(Channel::Brightness, 75));
        assert_eq!(picker.snapshot().text_color, TextColor::White);
    }

    #[test]
    fn pad_drag_released_outside() {
        let coordinator = InputCoordinator::new();
        let mut picker = picker_with(coordinator.clone());

        // 50% across and 30% down the pad.
        let press = PagePoint::new(20.0 + 97.0, 40.0 + 59.8);
        picker.pointer_down(press, Target::new("overlay", None));
        assert_eq!(picker.drag_state(), DragState::Dragging(DragTarget::Pad));
        assert!(coordinator.selection_suppressed());

        // Released somewhere else in the document.
        coordinator.pointer_up();
        assert_eq!(picker.drag_state(), DragState::Idle);
        assert!(!coordinator.selection_suppressed());
        assert!(within_one(picker.color().saturation(), 50.0));
        assert!(within_one(picker.color().brightness(), 70.0));

        // Moving after the release changes nothing.
        let before = *picker.color();
        picker.pointer_move(PagePoint::new(20.0, 40.0));
        assert_eq!(*picker.color(), before);
    }

    #[test]
    fn layout_moves_with_the_page() {
        let mut picker = picker();
        picker.set_layout(Layout {
            pad: PagePoint::new(20.0, 240.0),
            hue_bar: PagePoint::new(230.0, 240.0),
        });
        picker.pointer_down(PagePoint::new(20.0 + 195.0, 240.0 + 1.0), Target::new("overlay", None));
        assert_eq!(picker.color().saturation(), 100.0);
        assert_eq!(picker.color().brightness(), 100.0);
    }

    #[test]
    fn pad_drag_clamps_outside_bounds() {
        let mut picker = picker();
        picker.pointer_down(PagePoint::new(100.0, 100.0), Target::new("picker", None));
        picker.pointer_move(PagePoint::new(-500.0, 900.0));
        assert_eq!(picker.color().saturation(), 0.0);
        assert_eq!(picker.color().brightness(), 0.0);
        picker.pointer_move(PagePoint::new(900.0, -500.0));
        assert_eq!(picker.color().saturation(), 100.0);
        assert_eq!(picker.color().brightness(), 100.0);
        assert!(picker.renderer().selection_clears >= 3);
    }

    #[test]
    fn hue_drag() {
        let coordinator = InputCoordinator::new();
        let mut picker = picker_with(coordinator.clone());

        picker.pointer_down(PagePoint::new(235.0, 40.0 + 8.5 + 98.0), Target::new("huebar", None));
        assert_eq!(picker.drag_state(), DragState::Dragging(DragTarget::HueBar));
        assert_eq!(picker.color().hue(), 180.0);
        assert_eq!(coordinator.cursor(), Cursor::VerticalResize);

        picker.pointer_move(PagePoint::new(400.0, 40.0 + 8.5));
        assert_eq!(picker.color().hue(), 360.0);

        picker.pointer_move(PagePoint::new(235.0, 1000.0));
        assert_eq!(picker.color().hue(), 0.0);

        picker.pointer_up();
        assert_eq!(picker.drag_state(), DragState::Idle);
        assert_eq!(coordinator.cursor(), Cursor::Auto);

        picker.pointer_move(PagePoint::new(235.0, 40.0));
        assert_eq!(picker.color().hue(), 0.0);
    }

    #[test]
    fn fine_adjust_drag() {
        let mut picker = picker();
        picker.set_input(Input::Channel(Channel::Saturation, 50));

        picker.pointer_down(
            PagePoint::new(300.0, 100.0),
            Target::new("dragable", Some("saturation")),
        );
        assert_eq!(
            picker.drag_state(),
            DragState::Dragging(DragTarget::Field(Channel::Saturation))
        );

        // The first move only records the position.
        picker.pointer_move(PagePoint::new(300.0, 100.0));
        assert_eq!(picker.color().saturation(), 50.0);

        // Large motion still steps by one.
        picker.pointer_move(PagePoint::new(300.0, 95.0));
        assert_eq!(picker.color().saturation(), 51.0);

        // Half a pixel is not enough and is measured from 95 again.
        picker.pointer_move(PagePoint::new(300.0, 95.5));
        assert_eq!(picker.color().saturation(), 51.0);
        picker.pointer_move(PagePoint::new(300.0, 96.2));
        assert_eq!(picker.color().saturation(), 50.0);
    }

    #[test]
    fn drag_in_one_picker_leaves_others_alone() {
        let coordinator = InputCoordinator::new();
        let mut first = picker_with(coordinator.clone());
        let mut second = picker_with(coordinator.clone());

        first.pointer_down(PagePoint::new(230.0, 100.0), Target::new("picker-h", None));
        second.pointer_move(PagePoint::new(230.0, 150.0));
        assert_eq!(second.drag_state(), DragState::Idle);
        assert_eq!(*second.color(), Color::default());
        assert_eq!(second.renderer().snapshots.len(), 1);

        coordinator.pointer_up();
        assert_eq!(first.drag_state(), DragState::Idle);
    }

    #[test]
    fn released_drag_does_not_resume_when_another_picker_is_pressed() {
        let coordinator = InputCoordinator::new();
        let mut first = picker_with(coordinator.clone());
        let mut second = picker_with(coordinator.clone());

        first.pointer_down(PagePoint::new(20.0 + 97.0, 40.0 + 59.8), Target::new("overlay", None));
        assert_eq!(first.drag_state(), DragState::Dragging(DragTarget::Pad));

        // Released outside both pickers.
        coordinator.pointer_up();
        assert_eq!(first.drag_state(), DragState::Idle);
        let released = *first.color();
        let renders = first.renderer().snapshots.len();

        second.pointer_down(PagePoint::new(235.0, 100.0), Target::new("huebar", None));
        assert_eq!(second.drag_state(), DragState::Dragging(DragTarget::HueBar));
        assert_eq!(first.drag_state(), DragState::Idle);

        first.pointer_move(PagePoint::new(20.0, 236.0));
        second.pointer_move(PagePoint::new(235.0, 1000.0));
        assert_eq!(*first.color(), released);
        assert_eq!(first.renderer().snapshots.len(), renders);
        assert_eq!(second.color().hue(), 0.0);
    }

    #[test]
    fn pressing_another_picker_takes_over_the_drag() {
        let coordinator = InputCoordinator::new();
        let mut first = picker_with(coordinator.clone());
        let mut second = picker_with(coordinator.clone());

        // The release of the first drag is never seen.
        first.pointer_down(PagePoint::new(235.0, 100.0), Target::new("huebar", None));
        second.pointer_down(PagePoint::new(100.0, 100.0), Target::new("picker", None));
        assert_eq!(first.drag_state(), DragState::Idle);

        let hue = first.color().hue();
        first.pointer_move(PagePoint::new(235.0, 236.0));
        assert_eq!(first.color().hue(), hue);
    }

    #[test]
    fn borrowed_renderer() {
        let mut recorder = Recorder::default();
        {
            let mut picker = ColorPicker::new(&mut recorder, InputCoordinator::new());
            picker.commit_hex("#00FF00");
            picker.pointer_down(PagePoint::new(0.0, 0.0), Target::new("current", None));
        }
        assert_eq!(recorder.snapshots.len(), 2);
        assert_eq!(recorder.snapshots[1].hex, "#00FF00");
        assert_eq!(recorder.hex_selections, 1);
    }

    #[test]
    fn pressing_hex_or_preview_selects_hex() {
        let coordinator = InputCoordinator::new();
        let mut picker = picker_with(coordinator.clone());

        picker.pointer_down(PagePoint::new(0.0, 0.0), Target::new("current", None));
        picker.pointer_down(PagePoint::new(0.0, 0.0), Target::new("", Some("hex")));
        assert_eq!(picker.renderer().hex_selections, 2);
        assert_eq!(picker.drag_state(), DragState::Idle);
        assert!(coordinator.is_dragging());
        assert_eq!(picker.renderer().snapshots.len(), 1);
    }

    #[test]
    fn wheel_steps_numeric_fields() {
        let mut picker = picker();

        picker.wheel(Target::new("", Some("red")), -120.0);
        assert_eq!(picker.snapshot().rgb[0], 254);
        assert_eq!(picker.renderer().focused, vec![Field::Channel(Channel::Red)]);

        picker.wheel(Target::new("", Some("hue")), 3.0);
        assert_eq!(picker.snapshot().hue, 1);

        picker.wheel(Target::new("", Some("saturation")), 0.0);
        assert_eq!(picker.snapshot().saturation, 99);
    }

    #[test]
    fn wheel_ignores_hex_and_untagged() {
        let mut picker = picker();
        picker.wheel(Target::new("", Some("hex")), 1.0);
        picker.wheel(Target::new("current", None), 1.0);
        assert_eq!(picker.renderer().snapshots.len(), 1);
        assert!(picker.renderer().focused.is_empty());
    }
}
