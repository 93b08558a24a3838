//! Effect system with compile-time known effect variants
//!
//! All built-in effects are stored in an enum to avoid heap allocations.
//! Each effect implements the `Effect` trait: a finite, restartable sequence
//! of steps. The runner flushes and sleeps after every step and checks for
//! interruption, so an effect never has to know about buttons.

mod bounce;
mod color_chase;
mod color_wipe;
mod confetti;
mod fire_flicker;
mod lightning;
mod meteor_rain;
mod pulse;
mod rainbow_cycle;
mod theater_chase;
mod twinkle;

use embassy_time::Duration;

pub use bounce::BounceEffect;
pub use color_chase::ColorChaseEffect;
pub use color_wipe::ColorWipeEffect;
pub use confetti::ConfettiEffect;
pub use fire_flicker::FireFlickerEffect;
pub use lightning::LightningEffect;
pub use meteor_rain::MeteorRainEffect;
pub use pulse::PulseEffect;
pub use rainbow_cycle::RainbowCycleEffect;
pub use theater_chase::TheaterChaseEffect;
pub use twinkle::TwinkleEffect;

use crate::color::{Rgb, rgb_from_u32};

const EFFECT_NAME_COLOR_WIPE: &str = "color_wipe";
const EFFECT_NAME_RAINBOW_CYCLE: &str = "rainbow_cycle";
const EFFECT_NAME_THEATER_CHASE: &str = "theater_chase";
const EFFECT_NAME_TWINKLE: &str = "twinkle";
const EFFECT_NAME_PULSE: &str = "pulse";
const EFFECT_NAME_COLOR_CHASE: &str = "color_chase";
const EFFECT_NAME_FIRE_FLICKER: &str = "fire_flicker";
const EFFECT_NAME_CONFETTI: &str = "confetti";
const EFFECT_NAME_LIGHTNING: &str = "lightning";
const EFFECT_NAME_BOUNCE: &str = "bounce";
const EFFECT_NAME_METEOR_RAIN: &str = "meteor_rain";

const EFFECT_ID_COLOR_WIPE: u8 = 0;
const EFFECT_ID_RAINBOW_CYCLE: u8 = 1;
const EFFECT_ID_THEATER_CHASE: u8 = 2;
const EFFECT_ID_TWINKLE: u8 = 3;
const EFFECT_ID_PULSE: u8 = 4;
const EFFECT_ID_COLOR_CHASE: u8 = 5;
const EFFECT_ID_FIRE_FLICKER: u8 = 6;
const EFFECT_ID_CONFETTI: u8 = 7;
const EFFECT_ID_LIGHTNING: u8 = 8;
const EFFECT_ID_BOUNCE: u8 = 9;
const EFFECT_ID_METEOR_RAIN: u8 = 10;

/// Number of built-in effects
pub const BUILTIN_EFFECT_COUNT: usize = 11;

#[allow(clippy::unreadable_literal)]
const WIPE_COLOR: Rgb = rgb_from_u32(0xFF0000);
#[allow(clippy::unreadable_literal)]
const THEATER_COLOR: Rgb = rgb_from_u32(0x00FF00);
#[allow(clippy::unreadable_literal)]
const PULSE_COLOR: Rgb = rgb_from_u32(0x0000FF);
#[allow(clippy::unreadable_literal)]
const CHASE_COLOR: Rgb = rgb_from_u32(0xFFFF00);
#[allow(clippy::unreadable_literal)]
const BOUNCE_COLOR: Rgb = rgb_from_u32(0xFF00FF);

pub trait Effect {
    /// Rewind to the first step for a strip of `pixel_count` LEDs
    fn reset(&mut self, pixel_count: usize);

    /// Render the next step into `leds`
    ///
    /// Returns how long the rendered frame should be held. Must return in
    /// bounded time and must not be called once [`Effect::is_complete`].
    fn step(&mut self, leds: &mut [Rgb]) -> Duration;

    /// Check if all steps of the current run were rendered
    fn is_complete(&self) -> bool;

    /// Clean up the buffer once the run is over, completed or not
    ///
    /// Changes made here are not flushed; they only keep stale pixels out
    /// of the next effect's buffer.
    fn finish(&mut self, _leds: &mut [Rgb]) {}
}

impl<T: Effect + ?Sized> Effect for &mut T {
    fn reset(&mut self, pixel_count: usize) {
        (**self).reset(pixel_count);
    }

    fn step(&mut self, leds: &mut [Rgb]) -> Duration {
        (**self).step(leds)
    }

    fn is_complete(&self) -> bool {
        (**self).is_complete()
    }

    fn finish(&mut self, leds: &mut [Rgb]) {
        (**self).finish(leds);
    }
}

/// Effect slot - enum containing all built-in effects
#[derive(Debug, Clone)]
pub enum EffectSlot {
    ColorWipe(ColorWipeEffect),
    RainbowCycle(RainbowCycleEffect),
    TheaterChase(TheaterChaseEffect),
    Twinkle(TwinkleEffect),
    Pulse(PulseEffect),
    ColorChase(ColorChaseEffect),
    FireFlicker(FireFlickerEffect),
    Confetti(ConfettiEffect),
    Lightning(LightningEffect),
    Bounce(BounceEffect),
    MeteorRain(MeteorRainEffect),
}

/// Known effect ids, in catalog order
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum EffectId {
    ColorWipe = EFFECT_ID_COLOR_WIPE,
    RainbowCycle = EFFECT_ID_RAINBOW_CYCLE,
    TheaterChase = EFFECT_ID_THEATER_CHASE,
    Twinkle = EFFECT_ID_TWINKLE,
    Pulse = EFFECT_ID_PULSE,
    ColorChase = EFFECT_ID_COLOR_CHASE,
    FireFlicker = EFFECT_ID_FIRE_FLICKER,
    Confetti = EFFECT_ID_CONFETTI,
    Lightning = EFFECT_ID_LIGHTNING,
    Bounce = EFFECT_ID_BOUNCE,
    MeteorRain = EFFECT_ID_METEOR_RAIN,
}

impl EffectId {
    /// Catalog order of the built-in library
    pub const ALL: [Self; BUILTIN_EFFECT_COUNT] = [
        Self::ColorWipe,
        Self::RainbowCycle,
        Self::TheaterChase,
        Self::Twinkle,
        Self::Pulse,
        Self::ColorChase,
        Self::FireFlicker,
        Self::Confetti,
        Self::Lightning,
        Self::Bounce,
        Self::MeteorRain,
    ];

    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            EFFECT_ID_COLOR_WIPE => Self::ColorWipe,
            EFFECT_ID_RAINBOW_CYCLE => Self::RainbowCycle,
            EFFECT_ID_THEATER_CHASE => Self::TheaterChase,
            EFFECT_ID_TWINKLE => Self::Twinkle,
            EFFECT_ID_PULSE => Self::Pulse,
            EFFECT_ID_COLOR_CHASE => Self::ColorChase,
            EFFECT_ID_FIRE_FLICKER => Self::FireFlicker,
            EFFECT_ID_CONFETTI => Self::Confetti,
            EFFECT_ID_LIGHTNING => Self::Lightning,
            EFFECT_ID_BOUNCE => Self::Bounce,
            EFFECT_ID_METEOR_RAIN => Self::MeteorRain,
            _ => return None,
        })
    }

    /// Build the effect, `step_delay` is used by the effects without a
    /// fixed pace of their own
    pub fn to_slot(self, step_delay: Duration) -> EffectSlot {
        match self {
            Self::ColorWipe => {
                EffectSlot::ColorWipe(ColorWipeEffect::new(WIPE_COLOR, step_delay))
            }
            Self::RainbowCycle => EffectSlot::RainbowCycle(RainbowCycleEffect::new(step_delay)),
            Self::TheaterChase => {
                EffectSlot::TheaterChase(TheaterChaseEffect::new(THEATER_COLOR, step_delay))
            }
            Self::Twinkle => EffectSlot::Twinkle(TwinkleEffect::new(step_delay)),
            Self::Pulse => EffectSlot::Pulse(PulseEffect::new(PULSE_COLOR, step_delay)),
            Self::ColorChase => {
                EffectSlot::ColorChase(ColorChaseEffect::new(CHASE_COLOR, step_delay))
            }
            Self::FireFlicker => EffectSlot::FireFlicker(FireFlickerEffect::new()),
            Self::Confetti => EffectSlot::Confetti(ConfettiEffect::new(step_delay)),
            Self::Lightning => EffectSlot::Lightning(LightningEffect::new()),
            Self::Bounce => EffectSlot::Bounce(BounceEffect::new(BOUNCE_COLOR, step_delay)),
            Self::MeteorRain => EffectSlot::MeteorRain(MeteorRainEffect::new()),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ColorWipe => EFFECT_NAME_COLOR_WIPE,
            Self::RainbowCycle => EFFECT_NAME_RAINBOW_CYCLE,
            Self::TheaterChase => EFFECT_NAME_THEATER_CHASE,
            Self::Twinkle => EFFECT_NAME_TWINKLE,
            Self::Pulse => EFFECT_NAME_PULSE,
            Self::ColorChase => EFFECT_NAME_COLOR_CHASE,
            Self::FireFlicker => EFFECT_NAME_FIRE_FLICKER,
            Self::Confetti => EFFECT_NAME_CONFETTI,
            Self::Lightning => EFFECT_NAME_LIGHTNING,
            Self::Bounce => EFFECT_NAME_BOUNCE,
            Self::MeteorRain => EFFECT_NAME_METEOR_RAIN,
        }
    }

    /// Human readable name for the status display
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::ColorWipe => "Color Wipe",
            Self::RainbowCycle => "Rainbow Cycle",
            Self::TheaterChase => "Theater Chase",
            Self::Twinkle => "Twinkle",
            Self::Pulse => "Pulse",
            Self::ColorChase => "Color Chase",
            Self::FireFlicker => "Fire Flicker",
            Self::Confetti => "Confetti",
            Self::Lightning => "Lightning",
            Self::Bounce => "Bounce",
            Self::MeteorRain => "Meteor Rain",
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.as_str() == s)
    }
}

impl EffectSlot {
    /// Get the effect ID for external observation
    pub fn id(&self) -> EffectId {
        match self {
            Self::ColorWipe(_) => EffectId::ColorWipe,
            Self::RainbowCycle(_) => EffectId::RainbowCycle,
            Self::TheaterChase(_) => EffectId::TheaterChase,
            Self::Twinkle(_) => EffectId::Twinkle,
            Self::Pulse(_) => EffectId::Pulse,
            Self::ColorChase(_) => EffectId::ColorChase,
            Self::FireFlicker(_) => EffectId::FireFlicker,
            Self::Confetti(_) => EffectId::Confetti,
            Self::Lightning(_) => EffectId::Lightning,
            Self::Bounce(_) => EffectId::Bounce,
            Self::MeteorRain(_) => EffectId::MeteorRain,
        }
    }

    fn as_effect_mut(&mut self) -> &mut dyn Effect {
        match self {
            Self::ColorWipe(effect) => effect,
            Self::RainbowCycle(effect) => effect,
            Self::TheaterChase(effect) => effect,
            Self::Twinkle(effect) => effect,
            Self::Pulse(effect) => effect,
            Self::ColorChase(effect) => effect,
            Self::FireFlicker(effect) => effect,
            Self::Confetti(effect) => effect,
            Self::Lightning(effect) => effect,
            Self::Bounce(effect) => effect,
            Self::MeteorRain(effect) => effect,
        }
    }

    fn as_effect(&self) -> &dyn Effect {
        match self {
            Self::ColorWipe(effect) => effect,
            Self::RainbowCycle(effect) => effect,
            Self::TheaterChase(effect) => effect,
            Self::Twinkle(effect) => effect,
            Self::Pulse(effect) => effect,
            Self::ColorChase(effect) => effect,
            Self::FireFlicker(effect) => effect,
            Self::Confetti(effect) => effect,
            Self::Lightning(effect) => effect,
            Self::Bounce(effect) => effect,
            Self::MeteorRain(effect) => effect,
        }
    }
}

impl Effect for EffectSlot {
    fn reset(&mut self, pixel_count: usize) {
        self.as_effect_mut().reset(pixel_count);
    }

    fn step(&mut self, leds: &mut [Rgb]) -> Duration {
        self.as_effect_mut().step(leds)
    }

    fn is_complete(&self) -> bool {
        self.as_effect().is_complete()
    }

    fn finish(&mut self, leds: &mut [Rgb]) {
        self.as_effect_mut().finish(leds);
    }
}
