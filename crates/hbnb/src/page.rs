//! Page-mode selection.
//!
//! Every page of the site shows exactly one of four behaviors. The hosting
//! application picks the [`PageMode`], either from its route or, for plain
//! multi-page markup, from the root element present in the document.

/// The four page behaviors, in dispatch priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageMode {
    Login,
    Index,
    Details,
    AddReview,
}

impl PageMode {
    pub const PRIORITY: [PageMode; 4] = [
        PageMode::Login,
        PageMode::Index,
        PageMode::Details,
        PageMode::AddReview,
    ];

    /// Id of the element marking a page of this mode.
    pub fn root_id(self) -> &'static str {
        match self {
            PageMode::Login => "login-form",
            PageMode::Index => "places-list",
            PageMode::Details => "place-details",
            PageMode::AddReview => "review-form",
        }
    }

    /// First mode, in priority order, whose root element `probe` reports as
    /// present.
    pub fn detect(probe: impl Fn(&str) -> bool) -> Option<Self> {
        Self::PRIORITY
            .into_iter()
            .find(|mode| probe(mode.root_id()))
    }
}

/// Detects the page mode and hands it to `mount` once. Idle pages mount
/// nothing.
pub fn dispatch(probe: impl Fn(&str) -> bool, mount: impl FnOnce(PageMode)) -> Option<PageMode> {
    let mode = PageMode::detect(probe)?;
    mount(mode);
    Some(mode)
}

/// Load-time behavior shared by the page controllers.
#[async_trait::async_trait(?Send)]
pub trait PageController {
    /// What the page renders once activation settled.
    type View;

    async fn activate(&self) -> Self::View;
}
