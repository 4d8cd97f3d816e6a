use std::collections::{HashMap, VecDeque};

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DirectionKey {
    Up,
    Down,
    Left,
    Right,
}

impl DirectionKey {
    pub const fn direction(self) -> Direction {
        match self {
            DirectionKey::Up => Direction::UP,
            DirectionKey::Down => Direction::DOWN,
            DirectionKey::Left => Direction::LEFT,
            DirectionKey::Right => Direction::RIGHT,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Direction {
    dx: i8,
    dy: i8,
}

impl Direction {
    pub const NONE: Self = Self { dx: 0, dy: 0 };
    pub const UP: Self = Self { dx: 0, dy: -1 };
    pub const DOWN: Self = Self { dx: 0, dy: 1 };
    pub const LEFT: Self = Self { dx: -1, dy: 0 };
    pub const RIGHT: Self = Self { dx: 1, dy: 0 };

    pub const fn dx(self) -> i8 {
        self.dx
    }

    pub const fn dy(self) -> i8 {
        self.dy
    }
}

// Most recently pressed first. A repeat press keeps its position.
#[derive(Debug, Clone, Default)]
pub struct InputDirector {
    held: VecDeque<DirectionKey>,
}

impl InputDirector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: DirectionKey) {
        if !self.held.contains(&key) {
            self.held.push_front(key);
        }
    }

    pub fn release(&mut self, key: DirectionKey) {
        self.held.retain(|held| *held != key);
    }

    pub fn active_direction(&self) -> Direction {
        self.held
            .front()
            .map(|key| key.direction())
            .unwrap_or(Direction::NONE)
    }

    pub fn held_keys(&self) -> impl Iterator<Item = DirectionKey> + '_ {
        self.held.iter().copied()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    ToggleDebug,
}

impl KeyAction {
    pub const fn direction_key(self) -> Option<DirectionKey> {
        match self {
            KeyAction::MoveUp => Some(DirectionKey::Up),
            KeyAction::MoveDown => Some(DirectionKey::Down),
            KeyAction::MoveLeft => Some(DirectionKey::Left),
            KeyAction::MoveRight => Some(DirectionKey::Right),
            KeyAction::ToggleDebug => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("unrecognized key name: {name}")]
    UnrecognizedKey { name: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct KeyBindings {
    actions: HashMap<String, KeyAction>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let actions = [
            ("ArrowUp", KeyAction::MoveUp),
            ("ArrowDown", KeyAction::MoveDown),
            ("ArrowLeft", KeyAction::MoveLeft),
            ("ArrowRight", KeyAction::MoveRight),
            ("d", KeyAction::ToggleDebug),
        ]
        .into_iter()
        .map(|(name, action)| (name.to_string(), action))
        .collect();
        Self { actions }
    }
}

impl KeyBindings {
    pub fn action_for(&self, name: &str) -> Result<KeyAction, InputError> {
        self.actions
            .get(name)
            .copied()
            .ok_or_else(|| InputError::UnrecognizedKey {
                name: name.to_string(),
            })
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Press(DirectionKey),
    Release(DirectionKey),
    ToggleDebug,
}

#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    bindings: KeyBindings,
    pending: VecDeque<InputEvent>,
}

impl InputQueue {
    pub fn new(bindings: KeyBindings) -> Self {
        Self {
            bindings,
            pending: VecDeque::new(),
        }
    }

    pub fn push(&mut self, event: InputEvent) {
        self.pending.push_back(event);
    }

    pub fn push_key_down(&mut self, name: &str) -> Result<(), InputError> {
        if let Some(key) = self.bindings.action_for(name)?.direction_key() {
            self.push(InputEvent::Press(key));
        }
        Ok(())
    }

    // The debug toggle fires on key-up.
    pub fn push_key_up(&mut self, name: &str) -> Result<(), InputError> {
        match self.bindings.action_for(name)? {
            KeyAction::ToggleDebug => self.push(InputEvent::ToggleDebug),
            action => {
                if let Some(key) = action.direction_key() {
                    self.push(InputEvent::Release(key));
                }
            }
        }
        Ok(())
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    pub fn drain(&mut self) -> impl Iterator<Item = InputEvent> + '_ {
        self.pending.drain(..)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_director_has_no_direction() {
        let director = InputDirector::new();
        assert_eq!(director.active_direction(), Direction::NONE);
    }

    #[test]
    fn each_key_maps_to_its_axis() {
        for (key, expected) in [
            (DirectionKey::Left, Direction { dx: -1, dy: 0 }),
            (DirectionKey::Right, Direction { dx: 1, dy: 0 }),
            (DirectionKey::Up, Direction { dx: 0, dy: -1 }),
            (DirectionKey::Down, Direction { dx: 0, dy: 1 }),
        ] {
            let mut director = InputDirector::new();
            director.press(key);
            assert_eq!(director.active_direction(), expected);
        }
    }

    #[test]
    fn every_direction_moves_along_one_unit_axis() {
        for direction in [
            Direction::NONE,
            Direction::UP,
            Direction::DOWN,
            Direction::LEFT,
            Direction::RIGHT,
        ] {
            let (dx, dy) = (direction.dx(), direction.dy());
            assert!((-1..=1).contains(&dx) && (-1..=1).contains(&dy));
            assert!(dx == 0 || dy == 0, "{direction:?}");
        }
    }

    #[test]
    fn releasing_latest_key_falls_back_to_earlier_held_key() {
        let mut director = InputDirector::new();
        director.press(DirectionKey::Left);
        director.press(DirectionKey::Right);
        assert_eq!(director.active_direction(), Direction::RIGHT);
        director.release(DirectionKey::Right);
        assert_eq!(director.active_direction(), Direction::LEFT);
        director.release(DirectionKey::Left);
        assert_eq!(director.active_direction(), Direction::NONE);
    }

    #[test]
    fn repeat_press_does_not_reorder() {
        let mut director = InputDirector::new();
        director.press(DirectionKey::Up);
        director.press(DirectionKey::Down);
        director.press(DirectionKey::Up);
        assert_eq!(director.active_direction(), Direction::DOWN);
        assert_eq!(
            director.held_keys().collect::<Vec<_>>(),
            vec![DirectionKey::Down, DirectionKey::Up]
        );
    }

    #[test]
    fn releasing_unheld_key_is_a_no_op() {
        let mut director = InputDirector::new();
        director.press(DirectionKey::Left);
        director.release(DirectionKey::Down);
        assert_eq!(director.active_direction(), Direction::LEFT);
    }

    #[test]
    fn releasing_non_front_key_keeps_front_active() {
        let mut director = InputDirector::new();
        director.press(DirectionKey::Left);
        director.press(DirectionKey::Up);
        director.release(DirectionKey::Left);
        assert_eq!(director.active_direction(), Direction::UP);
    }

    #[test]
    fn unknown_key_names_are_reported() {
        let mut queue = InputQueue::default();
        let err = queue.push_key_down("F13").expect_err("err");
        assert_eq!(
            err,
            InputError::UnrecognizedKey {
                name: "F13".to_string()
            }
        );
        assert_eq!(queue.pending_len(), 0);
    }

    #[test]
    fn debug_toggle_fires_on_key_up_only() {
        let mut queue = InputQueue::default();
        queue.push_key_down("d").expect("bound");
        assert_eq!(queue.pending_len(), 0);
        queue.push_key_up("d").expect("bound");
        assert_eq!(queue.drain().collect::<Vec<_>>(), vec![InputEvent::ToggleDebug]);
    }

    #[test]
    fn queue_preserves_delivery_order_and_empties_on_drain() {
        let mut queue = InputQueue::default();
        queue.push_key_down("ArrowLeft").expect("bound");
        queue.push_key_down("ArrowUp").expect("bound");
        queue.push_key_up("ArrowLeft").expect("bound");
        let events = queue.drain().collect::<Vec<_>>();
        assert_eq!(
            events,
            vec![
                InputEvent::Press(DirectionKey::Left),
                InputEvent::Press(DirectionKey::Up),
                InputEvent::Release(DirectionKey::Left),
            ]
        );
        assert_eq!(queue.pending_len(), 0);
    }

    #[test]
    fn custom_bindings_replace_defaults() {
        let bindings: KeyBindings =
            serde_json::from_str(r#"{ "w": "move_up", "F3": "toggle_debug" }"#).expect("parse");
        assert_eq!(bindings.len(), 2);
        assert_eq!(bindings.action_for("w"), Ok(KeyAction::MoveUp));
        assert_eq!(bindings.action_for("F3"), Ok(KeyAction::ToggleDebug));
        assert!(bindings.action_for("ArrowUp").is_err());
    }
}
