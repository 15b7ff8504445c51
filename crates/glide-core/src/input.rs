//! Keyboard input: key bindings and the navigation throttle.
//!
//! The handler is a pure state machine fed with key names and timestamps, so
//! the browser adapter only translates events and applies the returned
//! [`KeyAction`].

use crate::config::KeyBindings;
use crate::direction::Direction;
use crate::error::ConfigError;
use std::collections::HashMap;

/// Modifier keys held during a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
    /// Control key.
    pub ctrl: bool,
    /// Alt key (Option on Mac).
    pub alt: bool,
    /// Shift key.
    pub shift: bool,
    /// Meta key (Windows key, Cmd on Mac).
    pub meta: bool,
}

impl Modifiers {
    /// No modifiers.
    pub const NONE: Self = Self {
        ctrl: false,
        alt: false,
        shift: false,
        meta: false,
    };

    /// Create custom modifiers.
    pub const fn new(ctrl: bool, alt: bool, shift: bool, meta: bool) -> Self {
        Self {
            ctrl,
            alt,
            shift,
            meta,
        }
    }

    /// Whether a chording modifier is held. Shift alone does not count.
    pub const fn is_chord(&self) -> bool {
        self.ctrl || self.alt || self.meta
    }
}

/// Action a bound key triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Binding {
    /// Move focus in a direction
    Move(Direction),
    /// Navigate history back
    Back,
}

impl Binding {
    const fn name(self) -> &'static str {
        match self {
            Self::Move(Direction::Up) => "up",
            Self::Move(Direction::Down) => "down",
            Self::Move(Direction::Left) => "left",
            Self::Move(Direction::Right) => "right",
            Self::Back => "back",
        }
    }
}

/// Lookup table from key name to [`Binding`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMap {
    keys: HashMap<String, Binding>,
}

impl KeyMap {
    /// Build the table, rejecting empty bindings and keys bound twice.
    pub fn new(bindings: &KeyBindings) -> Result<Self, ConfigError> {
        let groups = [
            (&bindings.up, Binding::Move(Direction::Up)),
            (&bindings.down, Binding::Move(Direction::Down)),
            (&bindings.left, Binding::Move(Direction::Left)),
            (&bindings.right, Binding::Move(Direction::Right)),
            (&bindings.back, Binding::Back),
        ];

        let mut keys = HashMap::new();
        for (names, binding) in groups {
            if names.is_empty() {
                return Err(ConfigError::EmptyBinding(binding.name()));
            }
            for name in names {
                if let Some(existing) = keys.insert(name.clone(), binding) {
                    if existing != binding {
                        return Err(ConfigError::DuplicateKey {
                            key: name.clone(),
                            first: existing.name(),
                            second: binding.name(),
                        });
                    }
                }
            }
        }
        Ok(Self { keys })
    }

    /// Binding for a key, if any.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<Binding> {
        self.keys.get(key).copied()
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        let mut keys = HashMap::new();
        keys.insert("ArrowUp".to_string(), Binding::Move(Direction::Up));
        keys.insert("ArrowDown".to_string(), Binding::Move(Direction::Down));
        keys.insert("ArrowLeft".to_string(), Binding::Move(Direction::Left));
        keys.insert("ArrowRight".to_string(), Binding::Move(Direction::Right));
        keys.insert("BrowserBack".to_string(), Binding::Back);
        Self { keys }
    }
}

/// What the adapter should do with a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Run the directional selector, suppress the default
    Navigate(Direction),
    /// Throttled navigation key: suppress the default, do nothing else
    Suppress,
    /// Go back in history, suppress the default
    Back,
    /// Not ours: let the page handle it
    Pass,
}

impl KeyAction {
    /// Whether the event's default handling and propagation must be stopped.
    pub const fn prevents_default(self) -> bool {
        !matches!(self, Self::Pass)
    }
}

/// Navigation throttle state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ThrottleState {
    /// Next navigation key-down is accepted immediately
    #[default]
    Idle,
    /// A navigation was accepted at `since` (ms)
    Throttled {
        /// Timestamp of the accepted navigation
        since: f64,
    },
}

/// Maps key events to actions and throttles held-down navigation keys.
#[derive(Debug, Clone)]
pub struct InputHandler {
    keymap: KeyMap,
    throttle_ms: f64,
    state: ThrottleState,
}

impl InputHandler {
    /// Create a handler with the given key map and throttle window (ms).
    #[must_use]
    pub fn new(keymap: KeyMap, throttle_ms: f64) -> Self {
        Self {
            keymap,
            throttle_ms,
            state: ThrottleState::Idle,
        }
    }

    /// Current throttle state.
    #[must_use]
    pub const fn state(&self) -> ThrottleState {
        self.state
    }

    /// Handle a key-down at `now` (ms).
    pub fn on_key_down(&mut self, key: &str, modifiers: Modifiers, now: f64) -> KeyAction {
        if modifiers.is_chord() {
            return KeyAction::Pass;
        }
        match self.keymap.lookup(key) {
            None => KeyAction::Pass,
            Some(Binding::Back) => KeyAction::Back,
            Some(Binding::Move(direction)) => {
                let accept = match self.state {
                    ThrottleState::Idle => true,
                    ThrottleState::Throttled { since } => now - since > self.throttle_ms,
                };
                if accept {
                    self.state = ThrottleState::Throttled { since: now };
                    KeyAction::Navigate(direction)
                } else {
                    KeyAction::Suppress
                }
            }
        }
    }

    /// Handle a key-up. Releasing any navigation key re-arms the throttle.
    pub fn on_key_up(&mut self, key: &str) {
        if matches!(self.keymap.lookup(key), Some(Binding::Move(_))) {
            self.state = ThrottleState::Idle;
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new(KeyMap::default(), 100.0)
    }
}
