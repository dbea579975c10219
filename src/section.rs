//! Section navigation: which full-viewport panel is active and how wheel,
//! touch and header input move between them.

use serde::Serialize;

pub const WHEEL_DEBOUNCE_MS: u32 = 120;
pub const TRANSITION_LOCK_MS: f64 = 1_400.0;
pub const SWIPE_THRESHOLD_PX: f64 = 50.0;
pub const PANEL_TRANSITION: &str = "transform 1.5s cubic-bezier(0.65, 0, 0.35, 1)";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Section {
    Hero,
    About,
    Projects,
    Contact,
}

impl Section {
    pub const ALL: [Section; 4] = [Self::Hero, Self::About, Self::Projects, Self::Contact];

    pub fn index(self) -> usize {
        match self {
            Self::Hero => 0,
            Self::About => 1,
            Self::Projects => 2,
            Self::Contact => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Element id of the panel, also accepted as a URL fragment.
    pub fn anchor(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::About => "about-me",
            Self::Projects => "projects",
            Self::Contact => "contact",
        }
    }

    pub fn from_anchor(value: &str) -> Option<Self> {
        let value = value.trim().trim_start_matches('#');
        Self::ALL
            .into_iter()
            .find(|section| section.anchor().eq_ignore_ascii_case(value))
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Hero => "Home",
            Self::About => "About me",
            Self::Projects => "Projects",
            Self::Contact => "Contact",
        }
    }

    pub fn next(self) -> Self {
        Self::from_index(self.index() + 1).unwrap_or(self)
    }

    pub fn previous(self) -> Self {
        self.index()
            .checked_sub(1)
            .and_then(Self::from_index)
            .unwrap_or(self)
    }

    fn stepped(self, step: Step) -> Self {
        match step {
            Step::Next => self.next(),
            Step::Previous => self.previous(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Step {
    Next,
    Previous,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Transition {
    pub from: Section,
    pub to: Section,
}

/// Vertical placement of an always-mounted panel relative to the active one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelOffset {
    Above,
    Active,
    Below,
}

impl PanelOffset {
    pub fn viewport_heights(self) -> i32 {
        match self {
            Self::Above => -100,
            Self::Active => 0,
            Self::Below => 100,
        }
    }

    pub fn style(self) -> String {
        format!(
            "transform: translateY({}vh); transition: {PANEL_TRANSITION};",
            self.viewport_heights()
        )
    }
}

pub fn panel_offset(panel: Section, active: Section) -> PanelOffset {
    match panel.index().cmp(&active.index()) {
        std::cmp::Ordering::Less => PanelOffset::Above,
        std::cmp::Ordering::Equal => PanelOffset::Active,
        std::cmp::Ordering::Greater => PanelOffset::Below,
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavTimings {
    pub wheel_debounce_ms: u32,
    pub lock_ms: f64,
    pub swipe_threshold_px: f64,
}

impl Default for NavTimings {
    fn default() -> Self {
        Self {
            wheel_debounce_ms: WHEEL_DEBOUNCE_MS,
            lock_ms: TRANSITION_LOCK_MS,
            swipe_threshold_px: SWIPE_THRESHOLD_PX,
        }
    }
}

/// Handed out for every wheel event that survives the lock check. Only the
/// most recent ticket is honored when its timer fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WheelTicket {
    pub token: u64,
    pub delay_ms: u32,
}

#[derive(Clone, Copy, Debug)]
struct PendingWheel {
    token: u64,
    step: Step,
}

/// Owns the active section. All times are milliseconds on one monotonic clock.
#[derive(Debug)]
pub struct SectionController {
    current: Section,
    locked_until: Option<f64>,
    pending_wheel: Option<PendingWheel>,
    next_token: u64,
    touch_start_y: Option<f64>,
    timings: NavTimings,
}

impl SectionController {
    pub fn new(initial: Section, timings: NavTimings) -> Self {
        Self {
            current: initial,
            locked_until: None,
            pending_wheel: None,
            next_token: 1,
            touch_start_y: None,
            timings,
        }
    }

    pub fn current(&self) -> Section {
        self.current
    }

    pub fn is_locked(&self, now: f64) -> bool {
        self.locked_until.is_some_and(|until| now < until)
    }

    pub fn on_wheel(&mut self, delta_y: f64, now: f64) -> Option<WheelTicket> {
        let step = if delta_y > 0.0 {
            Step::Next
        } else if delta_y < 0.0 {
            Step::Previous
        } else {
            return None;
        };

        if self.is_locked(now) {
            return None;
        }

        let token = self.next_token;
        self.next_token += 1;
        self.pending_wheel = Some(PendingWheel { token, step });

        Some(WheelTicket {
            token,
            delay_ms: self.timings.wheel_debounce_ms,
        })
    }

    pub fn fire_wheel(&mut self, ticket: WheelTicket, now: f64) -> Option<Transition> {
        let pending = self.pending_wheel?;
        if pending.token != ticket.token {
            return None;
        }

        self.pending_wheel = None;
        self.accept(self.current.stepped(pending.step), now)
    }

    pub fn on_touch_start(&mut self, y: f64) {
        self.touch_start_y = Some(y);
    }

    pub fn on_touch_end(&mut self, y: f64, now: f64) -> Option<Transition> {
        let start = self.touch_start_y.take()?;
        let displacement = start - y;

        if displacement.abs() <= self.timings.swipe_threshold_px {
            return None;
        }

        let step = if displacement > 0.0 {
            Step::Next
        } else {
            Step::Previous
        };
        self.accept(self.current.stepped(step), now)
    }

    pub fn navigate_to(&mut self, target: Section, now: f64) -> Option<Transition> {
        self.accept(target, now)
    }

    fn accept(&mut self, target: Section, now: f64) -> Option<Transition> {
        if self.is_locked(now) || target == self.current {
            return None;
        }

        let transition = Transition {
            from: self.current,
            to: target,
        };
        self.current = target;
        self.locked_until = Some(now + self.timings.lock_ms);
        self.pending_wheel = None;
        Some(transition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Replays wheel tickets at their due time, the way the browser fires
    /// the debounce timers.
    struct Harness {
        controller: SectionController,
        queue: Vec<(f64, WheelTicket)>,
    }

    impl Harness {
        fn new(initial: Section) -> Self {
            Self {
                controller: SectionController::new(initial, NavTimings::default()),
                queue: Vec::new(),
            }
        }

        fn wheel(&mut self, at: f64, delta_y: f64) -> Vec<Transition> {
            let fired = self.advance(at);
            self.queue_wheel(at, delta_y);
            fired
        }

        fn queue_wheel(&mut self, at: f64, delta_y: f64) {
            if let Some(ticket) = self.controller.on_wheel(delta_y, at) {
                self.queue.push((at + f64::from(ticket.delay_ms), ticket));
            }
        }

        fn advance(&mut self, to: f64) -> Vec<Transition> {
            self.advance_timed(to)
                .into_iter()
                .map(|(_, transition)| transition)
                .collect()
        }

        /// Fires every ticket due by `to`, returning each change with the
        /// time it happened.
        fn advance_timed(&mut self, to: f64) -> Vec<(f64, Transition)> {
            let mut fired = Vec::new();
            self.queue.sort_by(|a, b| a.0.total_cmp(&b.0));
            let (due, rest): (Vec<_>, Vec<_>) =
                self.queue.drain(..).partition(|(at, _)| *at <= to);
            self.queue = rest;
            for (at, ticket) in due {
                if let Some(transition) = self.controller.fire_wheel(ticket, at) {
                    fired.push((at, transition));
                }
            }
            fired
        }
    }

    #[test]
    fn anchors_round_trip_with_optional_hash() {
        for section in Section::ALL {
            assert_eq!(Section::from_anchor(section.anchor()), Some(section));
        }
        assert_eq!(Section::from_anchor("#Projects"), Some(Section::Projects));
        assert_eq!(Section::from_anchor("#blog"), None);
        assert_eq!(Section::from_index(4), None);
    }

    #[test]
    fn steps_clamp_at_both_ends() {
        assert_eq!(Section::Hero.previous(), Section::Hero);
        assert_eq!(Section::Contact.next(), Section::Contact);
        assert_eq!(Section::About.next(), Section::Projects);
    }

    // Follow-up wheel times count from the accepted move at 120 ms, not from
    // the first wheel event.
    #[test]
    fn wheel_down_advances_after_debounce_and_then_locks() {
        let mut harness = Harness::new(Section::Hero);

        assert!(harness.wheel(0.0, 80.0).is_empty());
        assert_eq!(harness.controller.current(), Section::Hero);

        let fired = harness.advance(120.0);
        assert_eq!(
            fired,
            vec![Transition {
                from: Section::Hero,
                to: Section::About,
            }]
        );

        harness.wheel(220.0, 80.0);
        harness.advance(600.0);
        assert_eq!(harness.controller.current(), Section::About);

        harness.wheel(1_620.0, 80.0);
        harness.advance(1_800.0);
        assert_eq!(harness.controller.current(), Section::Projects);
    }

    #[test]
    fn lock_runs_from_the_accepted_move_not_the_first_event() {
        let mut harness = Harness::new(Section::Hero);

        harness.wheel(0.0, 80.0);
        harness.wheel(100.0, 80.0);
        harness.advance(220.0);
        assert_eq!(harness.controller.current(), Section::About);

        // Accepted at 220 ms, so the lock holds until 1620 ms.
        harness.wheel(1_500.0, 80.0);
        harness.advance(1_800.0);
        assert_eq!(harness.controller.current(), Section::About);
    }

    #[test]
    fn only_last_wheel_event_of_a_burst_counts() {
        let mut harness = Harness::new(Section::About);

        harness.wheel(0.0, 30.0);
        harness.wheel(40.0, 30.0);
        harness.wheel(80.0, -30.0);
        let fired = harness.advance(500.0);

        assert_eq!(
            fired,
            vec![Transition {
                from: Section::About,
                to: Section::Hero,
            }]
        );
    }

    #[test]
    fn zero_delta_is_ignored() {
        let mut controller = SectionController::new(Section::Hero, NavTimings::default());
        assert_eq!(controller.on_wheel(0.0, 0.0), None);
    }

    #[test]
    fn clamped_step_does_not_engage_lock() {
        let mut harness = Harness::new(Section::Contact);

        harness.wheel(0.0, 10.0);
        assert!(harness.advance(200.0).is_empty());
        assert!(!harness.controller.is_locked(200.0));

        harness.wheel(300.0, -10.0);
        harness.advance(500.0);
        assert_eq!(harness.controller.current(), Section::Projects);
    }

    #[test]
    fn swipe_up_moves_to_next_section() {
        let mut controller = SectionController::new(Section::Hero, NavTimings::default());

        controller.on_touch_start(400.0);
        assert_eq!(
            controller.on_touch_end(300.0, 0.0),
            Some(Transition {
                from: Section::Hero,
                to: Section::About,
            })
        );

        controller.on_touch_start(300.0);
        assert_eq!(controller.on_touch_end(500.0, 100.0), None);

        controller.on_touch_start(300.0);
        assert_eq!(
            controller.on_touch_end(500.0, 1_500.0),
            Some(Transition {
                from: Section::About,
                to: Section::Hero,
            })
        );
    }

    #[test]
    fn short_swipe_and_orphan_touch_end_are_ignored() {
        let mut controller = SectionController::new(Section::Hero, NavTimings::default());

        controller.on_touch_start(400.0);
        assert_eq!(controller.on_touch_end(350.0, 0.0), None);
        assert_eq!(controller.on_touch_end(0.0, 0.0), None);
        assert_eq!(controller.current(), Section::Hero);
    }

    #[test]
    fn click_jumps_directly_and_respects_lock() {
        let mut controller = SectionController::new(Section::Contact, NavTimings::default());

        assert_eq!(
            controller.navigate_to(Section::Projects, 0.0),
            Some(Transition {
                from: Section::Contact,
                to: Section::Projects,
            })
        );
        assert_eq!(controller.navigate_to(Section::Hero, 1_000.0), None);
        assert_eq!(controller.navigate_to(Section::Projects, 2_000.0), None);
        assert!(!controller.is_locked(2_000.0));
        assert!(controller.navigate_to(Section::Hero, 2_000.0).is_some());
    }

    #[test]
    fn accepted_change_drops_pending_wheel() {
        let mut controller = SectionController::new(Section::Hero, NavTimings::default());

        let ticket = controller.on_wheel(50.0, 0.0).expect("accepted");
        controller.navigate_to(Section::Contact, 10.0);

        assert_eq!(controller.fire_wheel(ticket, 2_000.0), None);
        assert_eq!(controller.current(), Section::Contact);
    }

    #[test]
    fn mixed_input_never_leaves_range_or_breaks_lock() {
        let mut harness = Harness::new(Section::Hero);
        let mut changes: Vec<(f64, Transition)> = Vec::new();
        let mut seed: u64 = 0x9e37_79b9_7f4a_7c15;

        for tick in 0..4_000u32 {
            seed ^= seed << 13;
            seed ^= seed >> 7;
            seed ^= seed << 17;
            let now = f64::from(tick) * 17.0;

            changes.extend(harness.advance_timed(now));
            assert!(harness.controller.current().index() <= 3);

            match seed % 4 {
                0 => harness.queue_wheel(now, if seed & 16 == 0 { 40.0 } else { -40.0 }),
                1 => {
                    harness.controller.on_touch_start(500.0);
                    let end_y = if seed & 16 == 0 { 400.0 } else { 600.0 };
                    if let Some(transition) = harness.controller.on_touch_end(end_y, now) {
                        changes.push((now, transition));
                    }
                }
                2 => {
                    let index = ((seed >> 8) % 4) as usize;
                    let target = Section::from_index(index).expect("index in range");
                    if let Some(transition) = harness.controller.navigate_to(target, now) {
                        changes.push((now, transition));
                    }
                }
                _ => {}
            }

            assert!(harness.controller.current().index() <= 3);
        }
        changes.extend(harness.advance_timed(f64::INFINITY));

        assert!(!changes.is_empty());
        assert!(changes.windows(2).all(|pair| pair[0].0 <= pair[1].0));
        for (_, transition) in &changes {
            assert_ne!(transition.from, transition.to);
        }
        for pair in changes.windows(2) {
            assert!(pair[1].0 - pair[0].0 >= TRANSITION_LOCK_MS);
            assert_eq!(pair[0].1.to, pair[1].1.from);
        }
    }

    #[test]
    fn panel_offsets_follow_active_index() {
        assert_eq!(panel_offset(Section::Hero, Section::Projects), PanelOffset::Above);
        assert_eq!(panel_offset(Section::Projects, Section::Projects), PanelOffset::Active);
        assert_eq!(panel_offset(Section::Contact, Section::Projects), PanelOffset::Below);
        assert_eq!(PanelOffset::Above.viewport_heights(), -100);
        assert!(PanelOffset::Below.style().contains("translateY(100vh)"));

        for active in Section::ALL {
            let active_panels = Section::ALL
                .into_iter()
                .filter(|panel| panel_offset(*panel, active) == PanelOffset::Active)
                .count();
            assert_eq!(active_panels, 1);
        }
    }
}
