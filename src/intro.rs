//! Splash sequence shown once per mount before the site itself.

use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum IntroPhase {
    Greeting,
    GreetingFading,
    Welcome,
    WelcomeFading,
    Main,
}

impl IntroPhase {
    pub fn greeting_visible(self) -> bool {
        matches!(self, Self::Greeting | Self::GreetingFading)
    }

    pub fn welcome_visible(self) -> bool {
        matches!(self, Self::Welcome | Self::WelcomeFading)
    }

    pub fn is_fading(self) -> bool {
        matches!(self, Self::GreetingFading | Self::WelcomeFading)
    }

    pub fn is_terminal(self) -> bool {
        self == Self::Main
    }
}

pub const GREETING_TEXT: &str = "Hi !";
pub const WELCOME_TEXT: &str = "Welcome To My Portfolio !";

pub struct IntroSequence;

impl IntroSequence {
    /// Offset from mount in milliseconds at which each phase begins.
    pub const STEPS: [(u32, IntroPhase); 5] = [
        (0, IntroPhase::Greeting),
        (1_500, IntroPhase::GreetingFading),
        (2_000, IntroPhase::Welcome),
        (5_000, IntroPhase::WelcomeFading),
        (5_500, IntroPhase::Main),
    ];

    pub fn initial() -> IntroPhase {
        Self::STEPS[0].1
    }

    /// Phases that need a timer, i.e. everything after the initial one.
    pub fn timed_steps() -> &'static [(u32, IntroPhase)] {
        &Self::STEPS[1..]
    }

    pub fn phase_at(elapsed_ms: u32) -> IntroPhase {
        Self::STEPS
            .iter()
            .rev()
            .find(|(start, _)| elapsed_ms >= *start)
            .map(|(_, phase)| *phase)
            .unwrap_or_else(Self::initial)
    }

    /// Phase to show when the timer armed for `scheduled_at` fires after
    /// `elapsed_ms` on the page clock. Throttled timers fire late and catch
    /// up to wherever the clock already is; they never step back.
    pub fn phase_when_fired(scheduled_at: u32, elapsed_ms: f64) -> IntroPhase {
        let elapsed = elapsed_ms.max(0.0).min(f64::from(u32::MAX)) as u32;
        Self::phase_at(elapsed.max(scheduled_at))
    }
}
