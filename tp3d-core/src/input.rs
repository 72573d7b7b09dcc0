/// Mapping from discrete directional key events to per-frame motion
/// scalars consumed by the camera

/// Logical movement directions delivered by the input frontend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    YawLeft,
    YawRight,
    Forward,
    Back,
    Up,
    Down,
}

/// Per-frame camera motion: three linear velocities and three angular
/// velocities. Written by input handlers, read once per tick.
///
/// Motion is instantaneous on/off: a press sets the scalar to a fixed
/// magnitude and the matching release zeroes it, with no acceleration
/// curve in between.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MotionState {
    pub vx: f32,
    pub vy: f32,
    pub vz: f32,
    pub rx: f32,
    pub ry: f32,
    pub rz: f32,
}

/// Yaw rate applied while a turn key is held (radians per frame)
const YAW_RATE: f32 = 0.01;
/// Forward/back velocity while held (units per frame)
const MOVE_RATE: f32 = 1.0;
/// Vertical velocity while held (units per frame)
const LIFT_RATE: f32 = 0.1;

impl MotionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, direction: Direction) {
        match direction {
            Direction::YawLeft => self.ry = YAW_RATE,
            Direction::YawRight => self.ry = -YAW_RATE,
            Direction::Forward => self.vz = MOVE_RATE,
            Direction::Back => self.vz = -MOVE_RATE,
            Direction::Up => self.vy = LIFT_RATE,
            Direction::Down => self.vy = -LIFT_RATE,
        }
    }

    pub fn release(&mut self, direction: Direction) {
        match direction {
            Direction::YawLeft | Direction::YawRight => self.ry = 0.0,
            Direction::Forward | Direction::Back => self.vz = 0.0,
            Direction::Up | Direction::Down => self.vy = 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_sets_fixed_magnitudes() {
        let mut motion = MotionState::new();
        motion.press(Direction::Forward);
        assert_eq!(motion.vz, 1.0);
        motion.press(Direction::YawLeft);
        assert_eq!(motion.ry, 0.01);
        motion.press(Direction::Up);
        assert_eq!(motion.vy, 0.1);
    }

    #[test]
    fn test_release_zeroes_the_paired_axis() {
        let mut motion = MotionState::new();
        motion.press(Direction::Back);
        motion.press(Direction::YawRight);
        motion.release(Direction::Forward);
        motion.release(Direction::YawLeft);
        assert_eq!(motion.vz, 0.0);
        assert_eq!(motion.ry, 0.0);
    }

    #[test]
    fn test_opposite_press_overwrites() {
        let mut motion = MotionState::new();
        motion.press(Direction::Up);
        motion.press(Direction::Down);
        assert_eq!(motion.vy, -0.1);
    }

    #[test]
    fn test_unrelated_axes_are_untouched() {
        let mut motion = MotionState::new();
        motion.press(Direction::Forward);
        motion.release(Direction::Up);
        assert_eq!(motion.vz, 1.0);
        assert_eq!(motion.vx, 0.0);
        assert_eq!(motion.rx, 0.0);
        assert_eq!(motion.rz, 0.0);
    }
}
