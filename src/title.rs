pub const HERO_TITLES: &[&str] = &["A Developer", "A Business Owner"];
pub const ROTATE_EVERY_MS: u32 = 12_000;
/// Length of the slide-out before the next title is swapped in.
pub const SWAP_DELAY_MS: u32 = 2_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TitleRotation {
    titles: &'static [&'static str],
    index: usize,
    swapping: bool,
}

impl TitleRotation {
    pub fn new(titles: &'static [&'static str]) -> Self {
        Self {
            titles,
            index: 0,
            swapping: false,
        }
    }

    pub fn current(&self) -> &'static str {
        self.titles.get(self.index).copied().unwrap_or_default()
    }

    pub fn is_swapping(&self) -> bool {
        self.swapping
    }

    pub fn begin_swap(self) -> Self {
        Self {
            swapping: self.titles.len() > 1,
            ..self
        }
    }

    pub fn finish_swap(self) -> Self {
        if !self.swapping {
            return self;
        }

        Self {
            index: (self.index + 1) % self.titles.len(),
            swapping: false,
            ..self
        }
    }
}

impl Default for TitleRotation {
    fn default() -> Self {
        Self::new(HERO_TITLES)
    }
}
