//! Button identities and input sources
//!
//! Raw key indices coming from the board are classified into stable logical
//! buttons through a [`ButtonMap`]. The scheduler only ever sees
//! [`ButtonEvent`]s.

use crate::log::log;

const BUTTON_NAME_ADVANCE: &str = "advance";
const BUTTON_NAME_TOGGLE_PAUSE: &str = "toggle_pause";
const BUTTON_NAME_DISABLE: &str = "disable";
const BUTTON_NAME_ENABLE: &str = "enable";

const BUTTON_ID_ADVANCE: u8 = 0;
const BUTTON_ID_TOGGLE_PAUSE: u8 = 1;
const BUTTON_ID_DISABLE: u8 = 2;
const BUTTON_ID_ENABLE: u8 = 3;

/// Number of physical buttons
pub const BUTTON_COUNT: usize = 4;

/// Logical button identity
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ButtonId {
    /// Switch to the next effect
    Advance = BUTTON_ID_ADVANCE,
    /// Pause or resume the animation
    TogglePause = BUTTON_ID_TOGGLE_PAUSE,
    /// Turn the LED output off
    Disable = BUTTON_ID_DISABLE,
    /// Turn the LED output on
    Enable = BUTTON_ID_ENABLE,
}

impl ButtonId {
    /// All buttons in default key order
    pub const ALL: [Self; BUTTON_COUNT] = [
        Self::Advance,
        Self::TogglePause,
        Self::Disable,
        Self::Enable,
    ];

    pub const fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            BUTTON_ID_ADVANCE => Self::Advance,
            BUTTON_ID_TOGGLE_PAUSE => Self::TogglePause,
            BUTTON_ID_DISABLE => Self::Disable,
            BUTTON_ID_ENABLE => Self::Enable,
            _ => return None,
        })
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Advance => BUTTON_NAME_ADVANCE,
            Self::TogglePause => BUTTON_NAME_TOGGLE_PAUSE,
            Self::Disable => BUTTON_NAME_DISABLE,
            Self::Enable => BUTTON_NAME_ENABLE,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            BUTTON_NAME_ADVANCE => Some(Self::Advance),
            BUTTON_NAME_TOGGLE_PAUSE => Some(Self::TogglePause),
            BUTTON_NAME_DISABLE => Some(Self::Disable),
            BUTTON_NAME_ENABLE => Some(Self::Enable),
            _ => None,
        }
    }
}

/// Edge of a button transition
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventKind {
    Pressed,
    Released,
}

/// Classified button transition
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ButtonEvent {
    pub id: ButtonId,
    pub kind: EventKind,
}

impl ButtonEvent {
    pub const fn pressed(id: ButtonId) -> Self {
        Self {
            id,
            kind: EventKind::Pressed,
        }
    }

    pub const fn released(id: ButtonId) -> Self {
        Self {
            id,
            kind: EventKind::Released,
        }
    }

    pub const fn is_pressed(&self) -> bool {
        matches!(self.kind, EventKind::Pressed)
    }
}

/// Raw key transition as reported by the button hardware
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyEvent {
    /// Hardware key index
    pub key: u8,
    pub pressed: bool,
}

/// Mapping from hardware key index to logical button
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ButtonMap([ButtonId; BUTTON_COUNT]);

impl Default for ButtonMap {
    fn default() -> Self {
        Self(ButtonId::ALL)
    }
}

impl ButtonMap {
    /// `map[key]` is the button wired to hardware key `key`
    pub const fn new(map: [ButtonId; BUTTON_COUNT]) -> Self {
        Self(map)
    }

    /// Logical button for a hardware key index
    pub fn resolve(&self, key: u8) -> Option<ButtonId> {
        self.0.get(usize::from(key)).copied()
    }

    /// Classify a raw key transition
    pub fn classify(&self, event: KeyEvent) -> Option<ButtonEvent> {
        let id = self.resolve(event.key)?;
        Some(if event.pressed {
            ButtonEvent::pressed(id)
        } else {
            ButtonEvent::released(id)
        })
    }

    /// First button that is wired to more than one key
    pub fn duplicate(&self) -> Option<ButtonId> {
        self.0
            .iter()
            .enumerate()
            .find(|&(i, id)| self.0[..i].contains(id))
            .map(|(_, id)| *id)
    }

    pub const fn as_array(&self) -> &[ButtonId; BUTTON_COUNT] {
        &self.0
    }
}

/// Source of classified button events
///
/// Implementations must not block and return at most one event per call.
pub trait InputSource {
    fn poll_event(&mut self) -> Option<ButtonEvent>;
}

impl<T: InputSource + ?Sized> InputSource for &mut T {
    fn poll_event(&mut self) -> Option<ButtonEvent> {
        (**self).poll_event()
    }
}

/// Source of raw, unclassified key transitions
///
/// Implement this for the board's key scanner (shift register, GPIO
/// matrix, ...).
pub trait KeySource {
    fn poll_key(&mut self) -> Option<KeyEvent>;
}

/// Input source that classifies raw keys through a [`ButtonMap`]
#[derive(Debug)]
pub struct MappedInput<K> {
    keys: K,
    map: ButtonMap,
}

impl<K: KeySource> MappedInput<K> {
    pub const fn new(keys: K, map: ButtonMap) -> Self {
        Self { keys, map }
    }

    pub fn keys_mut(&mut self) -> &mut K {
        &mut self.keys
    }

    pub fn into_inner(self) -> K {
        self.keys
    }
}

impl<K: KeySource> InputSource for MappedInput<K> {
    fn poll_event(&mut self) -> Option<ButtonEvent> {
        let key = self.keys.poll_key()?;
        let event = self.map.classify(key);
        if event.is_none() {
            log!("[MappedInput] ignoring unknown key {}", key.key);
        }
        event
    }
}
