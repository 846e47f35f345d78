use log::info;

/// Per-frame input written by the windowing collaborator.
///
/// The simulation only reads this; it never touches particles directly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Input {
    /// Pointer position in world x/y.
    pub pointer: [f64; 2],
    /// True while the pointer button is held.
    pub pointer_active: bool,
    /// Gravity switch, on at startup.
    pub gravity_enabled: bool,
}

impl Default for Input {
    fn default() -> Self {
        Self {
            pointer: [0.0, 0.0],
            pointer_active: false,
            gravity_enabled: true,
        }
    }
}

impl Input {
    /// Map raw window coordinates (origin top-left, y down) onto the world
    /// x/y range `[box_min, box_max]` with y pointing up.
    pub fn pointer_from_window(
        xpos: f64,
        ypos: f64,
        width: f64,
        height: f64,
        box_min: f64,
        box_max: f64,
    ) -> [f64; 2] {
        let span = box_max - box_min;
        [
            box_min + (xpos / width) * span,
            box_max - (ypos / height) * span,
        ]
    }

    pub fn set_pointer(&mut self, x: f64, y: f64) {
        self.pointer = [x, y];
    }

    pub fn press_pointer(&mut self) {
        self.pointer_active = true;
        info!("pointer pressed at {:?}", self.pointer);
    }

    pub fn release_pointer(&mut self) {
        self.pointer_active = false;
        info!("pointer released");
    }

    /// Flip the gravity switch and return its new state.
    pub fn toggle_gravity(&mut self) -> bool {
        self.gravity_enabled = !self.gravity_enabled;
        info!(
            "gravity {}",
            if self.gravity_enabled { "enabled" } else { "disabled" }
        );
        self.gravity_enabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::{Level, Log, Metadata, Record};
    use std::sync::Mutex;

    /// Records every message so tests can check the level input changes log at.
    struct Capture(Mutex<Vec<(Level, String)>>);

    impl Log for Capture {
        fn enabled(&self, _: &Metadata) -> bool {
            true
        }
        fn log(&self, record: &Record) {
            if let Ok(mut lines) = self.0.lock() {
                lines.push((record.level(), record.args().to_string()));
            }
        }
        fn flush(&self) {}
    }

    static CAPTURE: Capture = Capture(Mutex::new(Vec::new()));

    fn level_of(prefix: &str) -> Option<Level> {
        let lines = CAPTURE.0.lock().ok()?;
        lines
            .iter()
            .find(|(_, msg)| msg.starts_with(prefix))
            .map(|(level, _)| *level)
    }

    #[test]
    fn default_has_gravity_on_pointer_off() {
        let input = Input::default();
        assert!(input.gravity_enabled);
        assert!(!input.pointer_active);
    }

    #[test]
    fn window_corners_map_to_box_corners() {
        let tl = Input::pointer_from_window(0.0, 0.0, 640.0, 480.0, -10.0, 10.0);
        assert_eq!(tl, [-10.0, 10.0]);
        let br = Input::pointer_from_window(640.0, 480.0, 640.0, 480.0, -10.0, 10.0);
        assert_eq!(br, [10.0, -10.0]);
        let mid = Input::pointer_from_window(320.0, 240.0, 640.0, 480.0, -10.0, 10.0);
        assert_eq!(mid, [0.0, 0.0]);
    }

    #[test]
    fn toggles_flip_state() {
        let mut input = Input::default();
        assert!(!input.toggle_gravity());
        assert!(input.toggle_gravity());
        input.press_pointer();
        assert!(input.pointer_active);
        input.release_pointer();
        assert!(!input.pointer_active);
    }

    #[test]
    fn input_changes_log_at_info() {
        // Only this test installs a logger in the unit-test binary.
        let _ = log::set_logger(&CAPTURE);
        log::set_max_level(log::LevelFilter::Trace);

        let mut input = Input::default();
        input.press_pointer();
        input.release_pointer();
        input.toggle_gravity();

        assert_eq!(level_of("pointer pressed"), Some(Level::Info));
        assert_eq!(level_of("pointer released"), Some(Level::Info));
        assert_eq!(level_of("gravity disabled"), Some(Level::Info));
    }
}
