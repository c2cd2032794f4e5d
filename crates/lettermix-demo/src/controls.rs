//! Button control shared by both board panels.
//!
//! A button has a label, a variant that sets its frame, a size that sets its
//! padding, and a disabled flag. Disabled buttons still render, marked with
//! tildes, but pressing them does nothing.

/// Visual weight of a button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Variant {
    /// Main action: `[ label ]`.
    #[default]
    Primary,
    /// Alternative action: `< label >`.
    Secondary,
    /// Low-emphasis action, no frame.
    Ghost,
    /// Destructive action: `! label !`.
    Danger,
}

impl Variant {
    fn frame(self) -> (&'static str, &'static str) {
        match self {
            Self::Primary => ("[", "]"),
            Self::Secondary => ("<", ">"),
            Self::Ghost => ("", ""),
            Self::Danger => ("!", "!"),
        }
    }
}

/// Padding of a button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Size {
    /// One cell each side.
    Sm,
    /// Two cells each side.
    #[default]
    Md,
    /// Three cells each side.
    Lg,
}

impl Size {
    fn padding(self) -> usize {
        match self {
            Self::Sm => 1,
            Self::Md => 2,
            Self::Lg => 3,
        }
    }
}

/// A labelled button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    label: String,
    variant: Variant,
    size: Size,
    disabled: bool,
}

impl Button {
    /// Creates an enabled primary, medium button.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            variant: Variant::default(),
            size: Size::default(),
            disabled: false,
        }
    }

    /// Sets the variant.
    #[must_use]
    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    /// Sets the size.
    #[must_use]
    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    /// Sets the disabled flag.
    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Whether the button is disabled.
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Renders the button as a single line.
    #[must_use]
    pub fn render(&self) -> String {
        let (open, close) = self.variant.frame();
        let pad = " ".repeat(self.size.padding());
        let label = if self.disabled {
            format!("~{}~", self.label)
        } else {
            self.label.clone()
        };
        format!("{open}{pad}{label}{pad}{close}")
    }

    /// Runs `action` unless the button is disabled. Returns whether it ran.
    pub fn press(&self, action: impl FnOnce()) -> bool {
        if self.disabled {
            return false;
        }
        action();
        true
    }
}

/// Renders buttons side by side, separated by a space.
#[must_use]
pub fn render_row(buttons: &[Button]) -> String {
    buttons
        .iter()
        .map(Button::render)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_primary_medium_enabled() {
        let button = Button::new("Go");

        assert_eq!(button.render(), "[  Go  ]");
        assert!(!button.is_disabled());
    }

    #[test]
    fn test_variant_sets_frame_and_size_sets_padding() {
        assert_eq!(
            Button::new("x").variant(Variant::Secondary).size(Size::Sm).render(),
            "< x >"
        );
        assert_eq!(
            Button::new("x").variant(Variant::Ghost).size(Size::Lg).render(),
            "   x   "
        );
        assert_eq!(Button::new("x").variant(Variant::Danger).render(), "!  x  !");
    }

    #[test]
    fn test_disabled_button_renders_marked_and_ignores_press() {
        let button = Button::new("-").variant(Variant::Ghost).size(Size::Sm).disabled(true);
        let mut pressed = false;

        let ran = button.press(|| pressed = true);

        assert_eq!(button.render(), " ~-~ ");
        assert!(!ran);
        assert!(!pressed);
    }

    #[test]
    fn test_enabled_button_runs_action() {
        let mut count = 0;

        let ran = Button::new("+").press(|| count += 1);

        assert!(ran);
        assert_eq!(count, 1);
    }

    #[test]
    fn test_render_row_joins_with_space() {
        let row = render_row(&[Button::new("a").size(Size::Sm), Button::new("b").size(Size::Sm)]);

        assert_eq!(row, "[ a ] [ b ]");
    }
}
