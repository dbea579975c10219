use crate::section::Section;

/// Cosmetic logo state: the full name is shown only on the hero panel. The
/// generation changes whenever that flips so the logo animation can replay.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LogoState {
    pub on_hero: bool,
    pub generation: u32,
}

impl LogoState {
    pub fn new(active: Section) -> Self {
        Self {
            on_hero: active == Section::Hero,
            generation: 0,
        }
    }

    pub fn synced(self, active: Section) -> Self {
        let on_hero = active == Section::Hero;
        if on_hero == self.on_hero {
            return self;
        }

        Self {
            on_hero,
            generation: self.generation.wrapping_add(1),
        }
    }
}

pub fn nav_is_active(nav: Section, active: Section) -> bool {
    nav == active
}
