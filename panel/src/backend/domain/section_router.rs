use log::info;
use shared::SectionKey;

/// Which dashboard section is on screen. Starts on the gallery; keeps no history.
#[derive(Debug, Clone, Default)]
pub struct SectionRouter {
    current: SectionKey,
}

impl SectionRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, section: SectionKey) {
        if section != self.current {
            info!("Switching section: {} -> {}", self.current, section);
        }
        self.current = section;
    }

    pub fn current(&self) -> SectionKey {
        self.current
    }
}
