// Feeds pointer events into the window state, which splits them between the
// toolbar and the canvas.
use log::debug;
use smithay_client_toolkit::seat::pointer::{
    BTN_LEFT, BTN_MIDDLE, BTN_RIGHT, PointerEvent, PointerEventKind, PointerHandler,
};
use wayland_client::{Connection, QueueHandle, protocol::wl_pointer};

use crate::input::{DrawingState, MouseButton};

use super::super::state::WaylandState;

fn map_button(button: u32) -> Option<MouseButton> {
    match button {
        BTN_LEFT => Some(MouseButton::Left),
        BTN_MIDDLE => Some(MouseButton::Middle),
        BTN_RIGHT => Some(MouseButton::Right),
        _ => None,
    }
}

impl PointerHandler for WaylandState {
    fn pointer_frame(
        &mut self,
        _conn: &Connection,
        _qh: &QueueHandle<Self>,
        _pointer: &wl_pointer::WlPointer,
        events: &[PointerEvent],
    ) {
        for event in events {
            let (x, y) = event.position;
            match event.kind {
                PointerEventKind::Enter { .. } => {
                    debug!("Pointer entered at ({:.0}, {:.0})", x, y);
                    self.pointer_motion(x, y);
                }
                PointerEventKind::Leave { .. } => {
                    debug!("Pointer left surface");
                    if !matches!(self.input_state.state, DrawingState::Drawing { .. }) {
                        self.input_state.clear_preview();
                    }
                }
                PointerEventKind::Motion { .. } => {
                    self.pointer_motion(x, y);
                }
                PointerEventKind::Press { button, .. } => {
                    debug!("Button {} pressed at ({:.0}, {:.0})", button, x, y);
                    let Some(mb) = map_button(button) else {
                        continue;
                    };
                    self.pointer_press(mb, x, y);
                    self.input_state.needs_redraw = true;
                }
                PointerEventKind::Release { button, .. } => {
                    debug!("Button {} released", button);
                    let Some(mb) = map_button(button) else {
                        continue;
                    };
                    self.pointer_release(mb, x, y);
                    self.input_state.needs_redraw = true;
                }
                PointerEventKind::Axis { vertical, .. } => {
                    let delta = if vertical.discrete != 0 {
                        vertical.discrete as f64
                    } else if vertical.absolute.abs() > 0.1 {
                        vertical.absolute.signum()
                    } else {
                        0.0
                    };

                    if delta != 0.0 {
                        self.input_state.on_scroll(delta);
                        debug!(
                            "Thickness now {:.0}px",
                            self.input_state.current_thickness
                        );
                    }
                }
            }
        }
    }
}
