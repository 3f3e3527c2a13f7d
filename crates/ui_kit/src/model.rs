//! Pure attribute-to-rendering mapping for the button component.
//!
//! Everything observable about a rendered button (class list, derived
//! native-disabled flag, `aria-busy` token, label visibility) is a function
//! of a [`ButtonState`] value. The component layer re-evaluates these
//! functions whenever a reactive field changes; no state is cached between
//! renders.

/// Base class carried by the inner control in every state.
pub const BUTTON_BASE_CLASS: &str = "ig-button";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Visual button variants. Exactly one variant class is rendered.
pub enum ButtonVariant {
    /// Solid primary-color button.
    Filled,
    /// Transparent button with an outline border.
    Outlined,
    /// Borderless, background-free button.
    Text,
    /// Raised surface-colored button.
    Elevated,
    /// Secondary-container tonal button.
    Tonal,
}

impl Default for ButtonVariant {
    fn default() -> Self {
        Self::Filled
    }
}

impl ButtonVariant {
    /// Stable class/attribute token for this variant.
    pub fn token(self) -> &'static str {
        match self {
            Self::Filled => "filled",
            Self::Outlined => "outlined",
            Self::Text => "text",
            Self::Elevated => "elevated",
            Self::Tonal => "tonal",
        }
    }

    /// Permissive string-boundary parser. Unknown tokens are `None`; the
    /// caller decides the fallback instead of this layer raising an error.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "filled" => Some(Self::Filled),
            "outlined" => Some(Self::Outlined),
            "text" => Some(Self::Text),
            "elevated" => Some(Self::Elevated),
            "tonal" => Some(Self::Tonal),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Button sizing tokens. Exactly one size class is rendered.
pub enum ButtonSize {
    /// Dense button.
    Sm,
    /// Default button.
    Md,
    /// Large button.
    Lg,
}

impl Default for ButtonSize {
    fn default() -> Self {
        Self::Md
    }
}

impl ButtonSize {
    /// Stable attribute token for this size.
    pub fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }

    /// Class applied to the inner control for this size.
    pub fn class(self) -> &'static str {
        match self {
            Self::Sm => "size-sm",
            Self::Md => "size-md",
            Self::Lg => "size-lg",
        }
    }

    /// Permissive string-boundary parser; unknown tokens are `None`.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "sm" => Some(Self::Sm),
            "md" => Some(Self::Md),
            "lg" => Some(Self::Lg),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Native `type` attribute forwarded to the inner control. Only meaningful
/// inside a form context.
pub enum ButtonType {
    /// Plain button (default).
    Button,
    /// Form submit button.
    Submit,
    /// Form reset button.
    Reset,
}

impl Default for ButtonType {
    fn default() -> Self {
        Self::Button
    }
}

impl ButtonType {
    /// Stable attribute token for this type.
    pub fn token(self) -> &'static str {
        match self {
            Self::Button => "button",
            Self::Submit => "submit",
            Self::Reset => "reset",
        }
    }

    /// Permissive string-boundary parser; unknown tokens are `None`.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "button" => Some(Self::Button),
            "submit" => Some(Self::Submit),
            "reset" => Some(Self::Reset),
            _ => None,
        }
    }
}

/// Snapshot of the fields that feed the rendering functions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonState {
    /// Visual variant.
    pub variant: ButtonVariant,
    /// Size token.
    pub size: ButtonSize,
    /// Author-set disabled flag.
    pub disabled: bool,
    /// Busy/loading flag.
    pub loading: bool,
}

impl ButtonState {
    /// Ordered class list for the inner control: base class, one variant
    /// class, one size class, and `loading` while loading.
    pub fn class_list(&self) -> Vec<&'static str> {
        let mut classes = vec![BUTTON_BASE_CLASS, self.variant.token(), self.size.class()];
        if self.loading {
            classes.push("loading");
        }
        classes
    }

    /// Space-joined form of [`ButtonState::class_list`] for the DOM `class`
    /// attribute.
    pub fn classes(&self) -> String {
        self.class_list().join(" ")
    }

    /// Derived native-disabled value for the inner control. Loading buttons
    /// suppress interaction exactly like disabled ones, but `disabled` and
    /// `loading` stay independently readable.
    pub fn native_disabled(&self) -> bool {
        self.disabled || self.loading
    }

    /// Whether a native activation should be suppressed instead of emitting
    /// the semantic click event.
    pub fn suppresses_activation(&self) -> bool {
        self.native_disabled()
    }

    /// Whether the default label slot renders. Icon slots render regardless.
    pub fn renders_label(&self) -> bool {
        !self.loading
    }

    /// `aria-busy` is always rendered, as `"true"` or `"false"`.
    pub fn aria_busy(&self) -> &'static str {
        if self.loading {
            "true"
        } else {
            "false"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_VARIANTS: [ButtonVariant; 5] = [
        ButtonVariant::Filled,
        ButtonVariant::Outlined,
        ButtonVariant::Text,
        ButtonVariant::Elevated,
        ButtonVariant::Tonal,
    ];
    const ALL_SIZES: [ButtonSize; 3] = [ButtonSize::Sm, ButtonSize::Md, ButtonSize::Lg];

    #[test]
    fn defaults_match_component_contract() {
        let state = ButtonState::default();
        assert_eq!(state.variant, ButtonVariant::Filled);
        assert_eq!(state.size, ButtonSize::Md);
        assert!(!state.disabled);
        assert!(!state.loading);
        assert_eq!(ButtonType::default().token(), "button");
        assert_eq!(state.classes(), "ig-button filled size-md");
    }

    #[test]
    fn each_variant_renders_exactly_one_variant_class() {
        for variant in ALL_VARIANTS {
            let state = ButtonState {
                variant,
                ..ButtonState::default()
            };
            let classes = state.class_list();
            let matches: Vec<_> = ALL_VARIANTS
                .iter()
                .filter(|other| classes.contains(&other.token()))
                .collect();
            assert_eq!(matches, vec![&variant], "variant {variant:?}");
        }
    }

    #[test]
    fn each_size_renders_exactly_one_size_class() {
        for size in ALL_SIZES {
            let state = ButtonState {
                size,
                ..ButtonState::default()
            };
            let classes = state.class_list();
            let matches: Vec<_> = ALL_SIZES
                .iter()
                .filter(|other| classes.contains(&other.class()))
                .collect();
            assert_eq!(matches, vec![&size], "size {size:?}");
        }
    }

    #[test]
    fn loading_adds_the_loading_class() {
        let idle = ButtonState::default();
        assert!(!idle.class_list().contains(&"loading"));

        let loading = ButtonState {
            loading: true,
            ..ButtonState::default()
        };
        assert!(loading.class_list().contains(&"loading"));
        assert_eq!(loading.classes(), "ig-button filled size-md loading");
    }

    #[test]
    fn native_disabled_derives_from_disabled_or_loading() {
        let mut state = ButtonState::default();
        assert!(!state.native_disabled());

        state.disabled = true;
        assert!(state.native_disabled());
        assert!(state.suppresses_activation());

        state.disabled = false;
        state.loading = true;
        assert!(state.native_disabled());
        assert!(state.suppresses_activation());
        // The stored fields stay independent of the derived value.
        assert!(!state.disabled);
        assert!(state.loading);
    }

    #[test]
    fn loading_suppresses_label_but_reports_busy() {
        let state = ButtonState {
            loading: true,
            ..ButtonState::default()
        };
        assert!(!state.renders_label());
        assert_eq!(state.aria_busy(), "true");

        let idle = ButtonState::default();
        assert!(idle.renders_label());
        assert_eq!(idle.aria_busy(), "false");
    }

    #[test]
    fn tokens_round_trip_through_the_string_boundary() {
        for variant in ALL_VARIANTS {
            assert_eq!(ButtonVariant::from_token(variant.token()), Some(variant));
        }
        for size in ALL_SIZES {
            assert_eq!(ButtonSize::from_token(size.token()), Some(size));
        }
        for button_type in [ButtonType::Button, ButtonType::Submit, ButtonType::Reset] {
            assert_eq!(
                ButtonType::from_token(button_type.token()),
                Some(button_type)
            );
        }
    }

    #[test]
    fn unknown_tokens_are_rejected_without_error() {
        assert_eq!(ButtonVariant::from_token("ghost"), None);
        assert_eq!(ButtonSize::from_token("xl"), None);
        assert_eq!(ButtonType::from_token("menu"), None);
        assert_eq!(ButtonVariant::from_token(""), None);
    }
}
