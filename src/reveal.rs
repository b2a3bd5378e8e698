/// Delay between consecutive blocks fading in.
pub const STAGGER_MS: usize = 200;

const HIDDEN_CLASS: &str = "transition-all duration-500 ease-out opacity-0 translate-y-5";
const SHOWN_CLASS: &str = "transition-all duration-500 ease-out opacity-100 translate-y-0";

/// Entrance animation state. Hidden until the page mounts, then visible for
/// the rest of the session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reveal {
    visible: bool,
}

impl Reveal {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Marks the page as mounted. Returns `true` only for the call that made
    /// the page visible.
    pub fn mount(&mut self) -> bool {
        let changed = !self.visible;
        self.visible = true;
        changed
    }

    pub fn class(&self) -> &'static str {
        if self.visible {
            SHOWN_CLASS
        } else {
            HIDDEN_CLASS
        }
    }
}

pub fn stagger_style(index: usize) -> String {
    format!("transition-delay: {}ms", index * STAGGER_MS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_until_mounted() {
        let mut reveal = Reveal::default();
        assert!(!reveal.is_visible());
        assert_eq!(reveal.class(), HIDDEN_CLASS);

        assert!(reveal.mount());
        assert!(reveal.is_visible());
        assert_eq!(reveal.class(), SHOWN_CLASS);
    }

    #[test]
    fn test_mount_is_one_shot() {
        let mut reveal = Reveal::default();
        reveal.mount();
        assert!(!reveal.mount());
        assert!(reveal.is_visible());
    }

    #[test]
    fn test_stagger() {
        assert_eq!(stagger_style(0), "transition-delay: 0ms");
        assert_eq!(stagger_style(3), "transition-delay: 600ms");
    }
}
