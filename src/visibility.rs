//! Debounced enter/exit animation flag shared by every content panel.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PanelTimings {
    pub enter_ms: u32,
    pub exit_ms: u32,
}

impl PanelTimings {
    pub const HERO: Self = Self {
        enter_ms: 300,
        exit_ms: 220,
    };
    pub const ABOUT: Self = Self {
        enter_ms: 260,
        exit_ms: 220,
    };
    pub const PROJECTS: Self = Self {
        enter_ms: 220,
        exit_ms: 220,
    };
    pub const CONTACT: Self = Self {
        enter_ms: 220,
        exit_ms: 220,
    };
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Hidden,
    Appearing { token: u64 },
    Visible,
    Disappearing { token: u64 },
}

/// A timer the caller must arm. Firing it with a stale token is a no-op.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Scheduled {
    pub token: u64,
    pub delay_ms: u32,
}

#[derive(Debug)]
pub struct PanelVisibility {
    phase: Phase,
    next_token: u64,
    timings: PanelTimings,
}

impl PanelVisibility {
    pub fn new(timings: PanelTimings) -> Self {
        Self {
            phase: Phase::Hidden,
            next_token: 1,
            timings,
        }
    }

    /// Whether the panel content should currently be in its animated-in state.
    pub fn should_animate(&self) -> bool {
        matches!(self.phase, Phase::Visible | Phase::Disappearing { .. })
    }

    pub fn set_visible(&mut self, visible: bool) -> Option<Scheduled> {
        match (self.phase, visible) {
            (Phase::Hidden, true) => {
                let token = self.issue_token();
                self.phase = Phase::Appearing { token };
                Some(Scheduled {
                    token,
                    delay_ms: self.timings.enter_ms,
                })
            }
            (Phase::Visible, false) => {
                let token = self.issue_token();
                self.phase = Phase::Disappearing { token };
                Some(Scheduled {
                    token,
                    delay_ms: self.timings.exit_ms,
                })
            }
            (Phase::Appearing { .. }, false) => {
                self.phase = Phase::Hidden;
                None
            }
            (Phase::Disappearing { .. }, true) => {
                self.phase = Phase::Visible;
                None
            }
            _ => None,
        }
    }

    /// Commits a scheduled transition. Returns the new animate flag when the
    /// token was still current.
    pub fn fire(&mut self, token: u64) -> Option<bool> {
        match self.phase {
            Phase::Appearing { token: current } if current == token => {
                self.phase = Phase::Visible;
                Some(true)
            }
            Phase::Disappearing { token: current } if current == token => {
                self.phase = Phase::Hidden;
                Some(false)
            }
            _ => None,
        }
    }

    fn issue_token(&mut self) -> u64 {
        let token = self.next_token;
        self.next_token += 1;
        token
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    impl PanelVisibility {
        fn phase(&self) -> Phase {
            self.phase
        }
    }

    #[test]
    fn enter_commits_after_delay() {
        let mut panel = PanelVisibility::new(PanelTimings::PROJECTS);

        let scheduled = panel.set_visible(true).expect("enter scheduled");
        assert_eq!(scheduled.delay_ms, 220);
        assert!(!panel.should_animate());

        assert_eq!(panel.fire(scheduled.token), Some(true));
        assert!(panel.should_animate());
        assert_eq!(panel.phase(), Phase::Visible);
    }

    #[test]
    fn flicker_inside_enter_window_is_invisible() {
        let mut panel = PanelVisibility::new(PanelTimings::HERO);

        let scheduled = panel.set_visible(true).expect("enter scheduled");
        assert_eq!(panel.set_visible(false), None);

        assert_eq!(panel.fire(scheduled.token), None);
        assert!(!panel.should_animate());
        assert_eq!(panel.phase(), Phase::Hidden);
    }

    #[test]
    fn reversal_during_exit_keeps_panel_animated() {
        let mut panel = PanelVisibility::new(PanelTimings::CONTACT);
        let enter = panel.set_visible(true).expect("enter scheduled");
        panel.fire(enter.token);

        let exit = panel.set_visible(false).expect("exit scheduled");
        assert!(panel.should_animate());
        assert_eq!(panel.set_visible(true), None);

        assert_eq!(panel.fire(exit.token), None);
        assert!(panel.should_animate());
    }

    #[test]
    fn superseded_token_is_rejected_after_rearm() {
        let mut panel = PanelVisibility::new(PanelTimings::ABOUT);

        let first = panel.set_visible(true).expect("enter scheduled");
        panel.set_visible(false);
        let second = panel.set_visible(true).expect("enter scheduled again");

        assert_ne!(first.token, second.token);
        assert_eq!(panel.fire(first.token), None);
        assert_eq!(panel.fire(second.token), Some(true));
    }

    #[test]
    fn repeated_flag_is_a_no_op() {
        let mut panel = PanelVisibility::new(PanelTimings::ABOUT);

        assert_eq!(panel.set_visible(false), None);
        let scheduled = panel.set_visible(true).expect("enter scheduled");
        assert_eq!(panel.set_visible(true), None);
        assert_eq!(panel.fire(scheduled.token), Some(true));
    }

    #[test]
    fn exit_commits_after_delay() {
        let mut panel = PanelVisibility::new(PanelTimings::PROJECTS);
        let enter = panel.set_visible(true).expect("enter scheduled");
        panel.fire(enter.token);

        let exit = panel.set_visible(false).expect("exit scheduled");
        assert_eq!(exit.delay_ms, 220);
        assert_eq!(panel.fire(exit.token), Some(false));
        assert_eq!(panel.phase(), Phase::Hidden);
    }
}
