use serde::Serialize;

pub const MODE_FADE_MS: u32 = 350;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AboutMode {
    Developer,
    Business,
}

impl AboutMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Developer => Self::Business,
            Self::Business => Self::Developer,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Developer => "Developer",
            Self::Business => "Business",
        }
    }
}

/// Cross-fade between the two About content sets. The displayed mode only
/// changes once the fade-out timer fires.
#[derive(Debug)]
pub struct ModeFade {
    displayed: AboutMode,
    requested: AboutMode,
    pending_token: Option<u64>,
    next_token: u64,
}

impl ModeFade {
    pub fn new(initial: AboutMode) -> Self {
        Self {
            displayed: initial,
            requested: initial,
            pending_token: None,
            next_token: 1,
        }
    }

    pub fn displayed(&self) -> AboutMode {
        self.displayed
    }

    pub fn is_fading(&self) -> bool {
        self.pending_token.is_some()
    }

    /// Returns the token and delay of a fade to arm, or `None` when `mode` is
    /// already what the panel shows and nothing else is pending.
    pub fn request(&mut self, mode: AboutMode) -> Option<(u64, u32)> {
        self.requested = mode;

        if mode == self.displayed && self.pending_token.is_none() {
            return None;
        }

        let token = self.next_token;
        self.next_token += 1;
        self.pending_token = Some(token);
        Some((token, MODE_FADE_MS))
    }

    pub fn fire(&mut self, token: u64) -> Option<AboutMode> {
        if self.pending_token != Some(token) {
            return None;
        }

        self.pending_token = None;
        self.displayed = self.requested;
        Some(self.displayed)
    }
}
