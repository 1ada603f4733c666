use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};

/// Pixels of trackpad scroll equivalent to one wheel notch
const PIXELS_PER_LINE: f32 = 50.0;

/// Mouse state for camera controls, accumulated between frames
#[derive(Debug, Default, Clone)]
pub struct PointerState {
    rotating: bool,
    panning: bool,
    position: Option<(f32, f32)>,
    drag_delta: (f32, f32),
    scroll: f32,
}

impl PointerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update from a winit window event
    pub fn process_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::MouseInput { state, button, .. } => {
                let pressed = *state == ElementState::Pressed;
                match button {
                    MouseButton::Left => self.rotating = pressed,
                    MouseButton::Right | MouseButton::Middle => self.panning = pressed,
                    _ => {}
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.move_to((position.x as f32, position.y as f32));
            }
            WindowEvent::CursorLeft { .. } => {
                self.position = None;
            }
            WindowEvent::MouseWheel { delta, .. } => {
                self.scroll += match delta {
                    MouseScrollDelta::LineDelta(_, y) => *y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / PIXELS_PER_LINE,
                };
            }
            _ => {}
        }
    }

    fn move_to(&mut self, new_pos: (f32, f32)) {
        if let Some(old_pos) = self.position {
            if self.rotating || self.panning {
                self.drag_delta.0 += new_pos.0 - old_pos.0;
                self.drag_delta.1 += new_pos.1 - old_pos.1;
            }
        }
        self.position = Some(new_pos);
    }

    pub fn is_rotating(&self) -> bool {
        self.rotating
    }

    pub fn is_panning(&self) -> bool {
        self.panning
    }

    pub fn position(&self) -> Option<(f32, f32)> {
        self.position
    }

    /// Cursor travel while a button was held, since the last reset
    pub fn drag_delta(&self) -> (f32, f32) {
        self.drag_delta
    }

    /// Wheel notches since the last reset, positive away from the user
    pub fn scroll(&self) -> f32 {
        self.scroll
    }

    /// Call once per frame after the camera consumed the deltas
    pub fn reset_deltas(&mut self) {
        self.drag_delta = (0.0, 0.0);
        self.scroll = 0.0;
    }

    /// Forget held buttons
    pub fn release(&mut self) {
        self.rotating = false;
        self.panning = false;
    }

    /// An event egui consumed; a click on the panel ends any camera drag
    pub fn captured_by_panel(&mut self, event: &WindowEvent) {
        if let WindowEvent::MouseInput { .. } = event {
            self.release();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::event::DeviceId;

    fn mouse_input(state: ElementState, button: MouseButton) -> WindowEvent {
        WindowEvent::MouseInput {
            device_id: unsafe { DeviceId::dummy() },
            state,
            button,
        }
    }

    #[test]
    fn test_new_state_is_idle() {
        let state = PointerState::new();
        assert!(!state.is_rotating());
        assert!(!state.is_panning());
        assert_eq!(state.position(), None);
        assert_eq!(state.drag_delta(), (0.0, 0.0));
    }

    #[test]
    fn test_motion_without_button_is_not_a_drag() {
        let mut state = PointerState::new();
        state.move_to((10.0, 10.0));
        state.move_to((30.0, 15.0));
        assert_eq!(state.drag_delta(), (0.0, 0.0));
        assert_eq!(state.position(), Some((30.0, 15.0)));
    }

    #[test]
    fn test_drag_accumulates_until_reset() {
        let mut state = PointerState::new();
        state.move_to((10.0, 10.0));
        state.rotating = true;
        state.move_to((15.0, 12.0));
        state.move_to((20.0, 20.0));
        assert_eq!(state.drag_delta(), (10.0, 10.0));

        state.reset_deltas();
        assert_eq!(state.drag_delta(), (0.0, 0.0));
        assert_eq!(state.position(), Some((20.0, 20.0)));
    }

    #[test]
    fn test_release_clears_buttons() {
        let mut state = PointerState::new();
        state.rotating = true;
        state.panning = true;
        state.release();
        assert!(!state.is_rotating());
        assert!(!state.is_panning());
    }

    #[test]
    fn test_panel_click_ends_drag() {
        let mut state = PointerState::new();
        state.process_event(&mouse_input(ElementState::Pressed, MouseButton::Left));
        assert!(state.is_rotating());

        state.captured_by_panel(&mouse_input(ElementState::Pressed, MouseButton::Left));
        assert!(!state.is_rotating());
        assert!(!state.is_panning());
    }

    #[test]
    fn test_release_over_panel_stops_pan() {
        let mut state = PointerState::new();
        state.process_event(&mouse_input(ElementState::Pressed, MouseButton::Right));
        assert!(state.is_panning());

        state.captured_by_panel(&mouse_input(ElementState::Released, MouseButton::Right));
        assert!(!state.is_panning());
    }

    #[test]
    fn test_other_captured_events_keep_drag() {
        let mut state = PointerState::new();
        state.process_event(&mouse_input(ElementState::Pressed, MouseButton::Left));
        state.captured_by_panel(&WindowEvent::CursorLeft {
            device_id: unsafe { DeviceId::dummy() },
        });
        assert!(state.is_rotating());
    }
}
