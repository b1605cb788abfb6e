//! Pointer-hover tracking shared by the hover wrapper component.
//!
//! The wrapper owns a [`HoverState`] and hands the flag to the wrapped
//! component through its [`Hoverable`] props. A value the caller already put in
//! the props wins over the tracked one.

pub const DEFAULT_HOVER_INPUT: &str = "hovering";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEvent {
    Enter,
    Leave,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HoverState {
    hovering: bool,
}

impl HoverState {
    #[must_use]
    pub fn apply(self, event: PointerEvent) -> Self {
        Self {
            hovering: matches!(event, PointerEvent::Enter),
        }
    }

    pub fn is_hovering(self) -> bool {
        self.hovering
    }
}

/// Props of a component that accepts the tracked hover flag.
///
/// [`hover_input`](Self::hover_input) selects the field that receives the flag.
/// [`HOVER_INPUT`](Self::HOVER_INPUT) only labels that field (the wrapper writes
/// it to a `data-hover-input` attribute) and has no effect on injection.
pub trait Hoverable: Clone {
    /// Label of the field returned by `hover_input`.
    const HOVER_INPUT: &'static str = DEFAULT_HOVER_INPUT;

    /// The field the wrapper fills with the tracked flag.
    fn hover_input(&mut self) -> &mut Option<bool>;

    /// Fills the hover input unless the caller supplied one.
    #[must_use]
    fn with_hover(mut self, state: HoverState) -> Self {
        let slot = self.hover_input();
        *slot = Some(resolve_hovering(*slot, state));
        self
    }
}

fn resolve_hovering(explicit: Option<bool>, state: HoverState) -> bool {
    explicit.unwrap_or(state.is_hovering())
}
