//! navshell-core - headless navigation shell for a content browsing site
//!
//! This library owns every piece of non-trivial state behind the site's
//! chrome, independent of how it is painted:
//! - Menu template (immutable tree of top-level entries and sub-entries)
//! - Menu controller (panel open/close, accordion exclusivity, dismissal)
//! - Animation plans (panel slide, staggered collapse/reveal of sub-items)
//! - Async driver that awaits animations before applying continuations
//! - Image carousel with cross-fade layers
//!
//! ## Example
//! ```rust
//! use navshell_core::prelude::*;
//!
//! let mut controller = MenuController::new(MenuTemplate::default(), AnimationConfig::default());
//!
//! // Open the panel: the controller asks for a slide-in
//! let effects = controller.update(MenuEvent::OpenPanel).unwrap();
//! let id = effects[0].animation().unwrap().id;
//! controller.update(MenuEvent::AnimationFinished(id)).unwrap();
//! assert!(controller.is_menu_open());
//!
//! // Expanding "About" reveals its sub-items
//! let effects = controller.update(MenuEvent::ToggleAccordion(1)).unwrap();
//! assert!(matches!(effects[0].animation(), Some(a) if a.is_reveal()));
//! assert_eq!(controller.menu_state().expanded(), Some(1));
//! ```

pub mod animation;
pub mod carousel;
pub mod config;
pub mod controller;
pub mod driver;
pub mod error;
pub mod interaction;
pub mod menu;

// Re-export common types
pub mod prelude {
    pub use crate::animation::{Animation, AnimationId, AnimationKind, SlideDirection, StaggerPlan, StaggeredItem};
    pub use crate::carousel::{Carousel, CarouselLayer, Fade};
    pub use crate::config::{AnimationConfig, GalleryConfig, ShellConfig};
    pub use crate::controller::{CollapseReason, Effect, MenuController, MenuEvent, MenuSnapshot, PanelPhase};
    pub use crate::driver::{MenuDriver, Presenter, Router};
    pub use crate::error::{NavError, NavResult};
    pub use crate::interaction::{InteractionTarget, Point, Rect};
    pub use crate::menu::{MenuEntry, MenuRecord, MenuState, MenuTemplate};

    #[cfg(feature = "native")]
    pub use crate::driver::TimedPresenter;
}
