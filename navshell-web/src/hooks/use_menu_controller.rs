use dioxus::logger::tracing::debug;
use dioxus::prelude::*;
use navshell_core::driver::Router as MenuRouter;
use navshell_core::prelude::{
    Animation, AnimationConfig, InteractionTarget, MenuController, MenuDriver, MenuEvent,
    MenuSnapshot, MenuTemplate, Presenter,
};

use crate::dom;

/// Paints the menu by writing snapshots into a signal; animations are CSS
/// driven, so playing one just means waiting out its window.
struct SignalPresenter {
    snapshot: Signal<MenuSnapshot>,
}

impl Presenter for SignalPresenter {
    fn render(&mut self, snapshot: &MenuSnapshot) {
        self.snapshot.set(snapshot.clone());
    }

    async fn animate(&mut self, animation: &Animation) {
        dom::sleep(animation.total_duration()).await;
    }
}

/// Routes leaf selections through the Dioxus router
struct NavigatorRouter(Navigator);

impl MenuRouter for NavigatorRouter {
    fn navigate_to(&mut self, pathname: &str) {
        debug!(pathname, "router push");
        self.0.push(pathname.to_string());
    }
}

/// Handle to the running menu driver
#[derive(Clone, Copy)]
pub struct MenuHandle {
    pub snapshot: Signal<MenuSnapshot>,
    pub animation: Signal<AnimationConfig>,
    events: Coroutine<MenuEvent>,
}

impl MenuHandle {
    pub fn send(&self, event: MenuEvent) {
        self.events.send(event);
    }

    pub fn toggle_panel(&self) {
        self.send(MenuEvent::TogglePanel);
    }

    pub fn toggle_accordion(&self, index: usize) {
        self.send(MenuEvent::ToggleAccordion(index));
    }

    pub fn select_leaf(&self, pathname: String) {
        self.send(MenuEvent::SelectLeaf(pathname));
    }

    pub fn outside_interaction(&self, within_panel: bool) {
        self.send(MenuEvent::OutsideInteraction(InteractionTarget::Resolved { within_panel }));
    }
}

/// Spawn the menu driver for this mount and expose it through context.
///
/// Events are processed one after another by a single coroutine, so a
/// transition never starts before the previous one has settled.
pub fn use_menu_controller(template: MenuTemplate, config: AnimationConfig) -> MenuHandle {
    let navigator = navigator();
    let snapshot = {
        let template = template.clone();
        use_signal(move || MenuController::new(template, config).snapshot())
    };
    let animation = use_signal(move || config);

    let events = use_coroutine(move |rx: UnboundedReceiver<MenuEvent>| {
        let controller = MenuController::new(template.clone(), config);
        async move {
            let presenter = SignalPresenter { snapshot };
            let mut driver = MenuDriver::new(controller, presenter, NavigatorRouter(navigator));
            driver.run(rx).await;
        }
    });

    use_context_provider(|| MenuHandle {
        snapshot,
        animation,
        events,
    })
}
