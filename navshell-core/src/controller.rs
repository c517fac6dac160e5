//! Menu controller - sole owner of panel and accordion state.
//!
//! The controller is a synchronous state machine. User events go in through
//! [`MenuController::update`] and come out as [`Effect`]s: navigations to
//! perform and animations to play. State changes that must wait for an
//! animation are held back until the matching
//! [`MenuEvent::AnimationFinished`] arrives.
//!
//! Transitions are serialized. A user event that arrives while an animation
//! is in flight is validated straight away, then parked and replayed once the
//! machine is idle again. Repeating the most recently parked event is
//! dropped, which absorbs double clicks.

use std::collections::VecDeque;

use serde::Serialize;
use tracing::debug;

use crate::animation::{Animation, AnimationId, AnimationKind, SlideDirection, StaggerPlan};
use crate::config::AnimationConfig;
use crate::error::NavResult;
use crate::interaction::{InteractionTarget, Rect};
use crate::menu::{validate_pathname, MenuEntry, MenuRecord, MenuState, MenuTemplate};

/// Why visible sub-items are being collapsed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CollapseReason {
    /// Hand-off to another accordion entry
    SwitchAccordion(usize),
    /// The panel is closing
    ClosePanel,
}

/// Panel lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum PanelPhase {
    #[default]
    Closed,
    Opening,
    Open,
    ClosingSubitems(CollapseReason),
    Closing,
}

/// Inputs to the controller
#[derive(Debug, Clone, PartialEq)]
pub enum MenuEvent {
    OpenPanel,
    ClosePanel,
    /// Hamburger / close button
    TogglePanel,
    ToggleAccordion(usize),
    SelectLeaf(String),
    OutsideInteraction(InteractionTarget),
    /// Layout report from the view, used to hit-test outside interactions
    SetPanelBounds(Rect),
    AnimationFinished(AnimationId),
}

/// Work the controller hands back to its collaborators
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Navigate(String),
    Animate(Animation),
}

impl Effect {
    pub fn animation(&self) -> Option<&Animation> {
        match self {
            Effect::Animate(animation) => Some(animation),
            Effect::Navigate(_) => None,
        }
    }

    pub fn navigation(&self) -> Option<&str> {
        match self {
            Effect::Navigate(pathname) => Some(pathname),
            Effect::Animate(_) => None,
        }
    }
}

/// Read-only view of the controller for rendering
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuSnapshot {
    pub phase: PanelPhase,
    pub is_menu_open: bool,
    /// One record per template entry, in template order
    pub records: Vec<MenuRecord>,
    /// Index of the expanded accordion, if any
    pub expanded: Option<usize>,
    /// Sub-items currently in the render tree
    pub visible_items: Vec<MenuEntry>,
    /// Animation currently playing
    pub animation: Option<Animation>,
}

/// Navigation menu state machine
#[derive(Debug, Clone)]
pub struct MenuController {
    config: AnimationConfig,
    state: MenuState,
    is_menu_open: bool,
    phase: PanelPhase,
    panel_bounds: Option<Rect>,
    in_flight: Option<Animation>,
    deferred: VecDeque<MenuEvent>,
    next_animation: u64,
}

impl MenuController {
    /// Create a controller with the panel closed
    pub fn new(template: MenuTemplate, config: AnimationConfig) -> Self {
        Self {
            config,
            state: MenuState::closed(&template),
            is_menu_open: false,
            phase: PanelPhase::Closed,
            panel_bounds: None,
            in_flight: None,
            deferred: VecDeque::new(),
            next_animation: 0,
        }
    }

    pub fn phase(&self) -> PanelPhase {
        self.phase
    }

    pub fn is_menu_open(&self) -> bool {
        self.is_menu_open
    }

    pub fn menu_state(&self) -> &MenuState {
        &self.state
    }

    pub fn template(&self) -> &MenuTemplate {
        self.state.template()
    }

    pub fn config(&self) -> &AnimationConfig {
        &self.config
    }

    pub fn panel_bounds(&self) -> Option<Rect> {
        self.panel_bounds
    }

    /// Animation whose completion the controller is waiting for
    pub fn in_flight(&self) -> Option<&Animation> {
        self.in_flight.as_ref()
    }

    /// No animation in flight and nothing parked
    pub fn is_idle(&self) -> bool {
        self.in_flight.is_none() && self.deferred.is_empty()
    }

    /// Number of user events waiting for the current transition to settle
    pub fn deferred_len(&self) -> usize {
        self.deferred.len()
    }

    pub fn snapshot(&self) -> MenuSnapshot {
        MenuSnapshot {
            phase: self.phase,
            is_menu_open: self.is_menu_open,
            records: self.state.records(),
            expanded: self.state.expanded(),
            visible_items: self.state.visible_sub_entries().to_vec(),
            animation: self.in_flight.clone(),
        }
    }

    /// Feed one event into the machine.
    ///
    /// Invalid input is rejected with an error and leaves every piece of
    /// state untouched.
    pub fn update(&mut self, event: MenuEvent) -> NavResult<Vec<Effect>> {
        match event {
            MenuEvent::AnimationFinished(id) => Ok(self.finish_animation(id)),
            MenuEvent::SetPanelBounds(bounds) => {
                self.panel_bounds = Some(bounds);
                Ok(Vec::new())
            }
            event => {
                self.validate(&event)?;
                if self.in_flight.is_some() {
                    self.defer(event);
                    return Ok(Vec::new());
                }
                Ok(self.apply(event))
            }
        }
    }

    fn validate(&self, event: &MenuEvent) -> NavResult<()> {
        match event {
            MenuEvent::ToggleAccordion(index) => self.state.toggled(*index).map(|_| ()),
            MenuEvent::SelectLeaf(pathname) => validate_pathname(pathname),
            _ => Ok(()),
        }
    }

    fn defer(&mut self, event: MenuEvent) {
        if self.deferred.back() == Some(&event) {
            debug!(?event, "dropping repeated menu event");
            return;
        }
        debug!(?event, phase = ?self.phase, "deferring menu event until transition settles");
        self.deferred.push_back(event);
    }

    fn apply(&mut self, event: MenuEvent) -> Vec<Effect> {
        match event {
            MenuEvent::OpenPanel => self.open_panel(),
            MenuEvent::ClosePanel => self.close_panel(),
            MenuEvent::TogglePanel => {
                if self.phase == PanelPhase::Closed {
                    self.open_panel()
                } else {
                    self.close_panel()
                }
            }
            MenuEvent::ToggleAccordion(index) => {
                if self.phase != PanelPhase::Open {
                    debug!(index, "ignoring accordion toggle while panel is closed");
                    return Vec::new();
                }
                self.begin_collapse(CollapseReason::SwitchAccordion(index))
            }
            MenuEvent::SelectLeaf(pathname) => {
                debug!(%pathname, "leaf selected");
                let mut effects = vec![Effect::Navigate(pathname)];
                effects.extend(self.close_panel());
                effects
            }
            MenuEvent::OutsideInteraction(target) => {
                if self.is_menu_open && !target.is_within(self.panel_bounds) {
                    debug!(?target, "interaction outside panel");
                    self.close_panel()
                } else {
                    Vec::new()
                }
            }
            MenuEvent::SetPanelBounds(_) | MenuEvent::AnimationFinished(_) => Vec::new(),
        }
    }

    fn open_panel(&mut self) -> Vec<Effect> {
        if self.phase != PanelPhase::Closed {
            return Vec::new();
        }
        self.is_menu_open = true;
        self.state.reset();
        self.phase = PanelPhase::Opening;
        debug!("opening panel");
        vec![self.start(AnimationKind::Slide {
            direction: SlideDirection::In,
            duration: self.config.panel_slide(),
        })]
    }

    fn close_panel(&mut self) -> Vec<Effect> {
        if self.phase == PanelPhase::Closed {
            return Vec::new();
        }
        self.begin_collapse(CollapseReason::ClosePanel)
    }

    /// Collapse whatever sub-items are on screen, then continue with `reason`
    fn begin_collapse(&mut self, reason: CollapseReason) -> Vec<Effect> {
        self.phase = PanelPhase::ClosingSubitems(reason);

        let Some(expanded) = self.state.expanded() else {
            return self.after_collapse(reason);
        };
        let plan = StaggerPlan::new(expanded, self.state.visible_sub_entries(), &self.config);
        if plan.is_empty() {
            return self.after_collapse(reason);
        }

        debug!(expanded, items = plan.len(), ?reason, "collapsing sub-items");
        vec![self.start(AnimationKind::Collapse(plan))]
    }

    fn after_collapse(&mut self, reason: CollapseReason) -> Vec<Effect> {
        match reason {
            CollapseReason::SwitchAccordion(index) => {
                self.state = match self.state.toggled(index) {
                    Ok(next) => next,
                    Err(err) => {
                        debug!(%err, "accordion target vanished, collapsing all");
                        MenuState::closed(self.state.template())
                    }
                };
                self.phase = PanelPhase::Open;

                let Some(expanded) = self.state.expanded() else {
                    return Vec::new();
                };
                let plan = StaggerPlan::new(expanded, self.state.visible_sub_entries(), &self.config);
                debug!(expanded, items = plan.len(), "revealing sub-items");
                vec![self.start(AnimationKind::Reveal(plan))]
            }
            CollapseReason::ClosePanel => {
                self.is_menu_open = false;
                self.state.reset();
                self.phase = PanelPhase::Closing;
                debug!("closing panel");
                vec![self.start(AnimationKind::Slide {
                    direction: SlideDirection::Out,
                    duration: self.config.panel_slide(),
                })]
            }
        }
    }

    fn finish_animation(&mut self, id: AnimationId) -> Vec<Effect> {
        let finished = match self.in_flight.take() {
            Some(animation) if animation.id == id => animation,
            other => {
                debug!(id = id.value(), "ignoring completion of stale animation");
                self.in_flight = other;
                return Vec::new();
            }
        };

        let mut effects = match self.phase {
            PanelPhase::Opening => {
                self.phase = PanelPhase::Open;
                Vec::new()
            }
            PanelPhase::ClosingSubitems(reason) => self.after_collapse(reason),
            PanelPhase::Closing => {
                self.phase = PanelPhase::Closed;
                Vec::new()
            }
            PanelPhase::Open | PanelPhase::Closed => Vec::new(),
        };
        debug!(id = finished.id.value(), phase = ?self.phase, "animation settled");

        while self.in_flight.is_none() {
            let Some(event) = self.deferred.pop_front() else {
                break;
            };
            effects.extend(self.apply(event));
        }
        effects
    }

    fn start(&mut self, kind: AnimationKind) -> Effect {
        self.next_animation += 1;
        let animation = Animation {
            id: AnimationId(self.next_animation),
            kind,
        };
        self.in_flight = Some(animation.clone());
        Effect::Animate(animation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NavError;
    use crate::interaction::Point;

    fn controller() -> MenuController {
        MenuController::new(MenuTemplate::site_menu(), AnimationConfig::default())
    }

    /// Play every animation to completion, collecting all effects
    fn settle(controller: &mut MenuController, mut effects: Vec<Effect>) -> Vec<Effect> {
        let mut seen = Vec::new();
        while !effects.is_empty() {
            let mut next = Vec::new();
            for effect in effects {
                if let Some(animation) = effect.animation() {
                    next.extend(controller.update(MenuEvent::AnimationFinished(animation.id)).unwrap());
                }
                seen.push(effect);
            }
            effects = next;
        }
        seen
    }

    fn send(controller: &mut MenuController, event: MenuEvent) -> Vec<Effect> {
        let effects = controller.update(event).unwrap();
        settle(controller, effects)
    }

    fn open_flags(controller: &MenuController) -> Vec<bool> {
        controller.snapshot().records.iter().map(|r| r.is_open).collect()
    }

    #[test]
    fn test_open_runs_slide_in() {
        let mut c = controller();
        let effects = c.update(MenuEvent::OpenPanel).unwrap();
        assert_eq!(c.phase(), PanelPhase::Opening);
        assert!(c.is_menu_open());
        let animation = effects[0].animation().unwrap();
        assert_eq!(animation.slide_direction(), Some(SlideDirection::In));

        c.update(MenuEvent::AnimationFinished(animation.id)).unwrap();
        assert_eq!(c.phase(), PanelPhase::Open);
        assert!(c.is_idle());
    }

    #[test]
    fn test_open_when_open_is_noop() {
        let mut c = controller();
        send(&mut c, MenuEvent::OpenPanel);
        assert!(c.update(MenuEvent::OpenPanel).unwrap().is_empty());
        assert_eq!(c.phase(), PanelPhase::Open);
    }

    #[test]
    fn test_close_without_subitems_flips_immediately() {
        let mut c = controller();
        send(&mut c, MenuEvent::OpenPanel);
        let effects = c.update(MenuEvent::ClosePanel).unwrap();
        assert_eq!(c.phase(), PanelPhase::Closing);
        assert!(!c.is_menu_open());
        assert_eq!(effects.len(), 1);
        assert_eq!(effects[0].animation().unwrap().slide_direction(), Some(SlideDirection::Out));

        settle(&mut c, effects);
        assert_eq!(c.phase(), PanelPhase::Closed);
    }

    #[test]
    fn test_close_with_subitems_collapses_first() {
        let mut c = controller();
        send(&mut c, MenuEvent::OpenPanel);
        send(&mut c, MenuEvent::ToggleAccordion(2));

        let effects = c.update(MenuEvent::ClosePanel).unwrap();
        let collapse = effects[0].animation().unwrap().clone();
        assert!(collapse.is_collapse());
        assert_eq!(c.phase(), PanelPhase::ClosingSubitems(CollapseReason::ClosePanel));
        // still open until the collapse settles
        assert!(c.is_menu_open());
        assert_eq!(c.menu_state().expanded(), Some(2));
        assert_eq!(c.snapshot().visible_items.len(), 6);

        let next = c.update(MenuEvent::AnimationFinished(collapse.id)).unwrap();
        assert!(!c.is_menu_open());
        assert!(c.menu_state().is_all_closed());
        assert_eq!(next[0].animation().unwrap().slide_direction(), Some(SlideDirection::Out));
    }

    #[test]
    fn test_close_when_closed_is_noop() {
        let mut c = controller();
        assert!(c.update(MenuEvent::ClosePanel).unwrap().is_empty());
        assert_eq!(c.phase(), PanelPhase::Closed);
    }

    #[test]
    fn test_toggle_panel_opens_and_closes() {
        let mut c = controller();
        send(&mut c, MenuEvent::TogglePanel);
        assert_eq!(c.phase(), PanelPhase::Open);
        send(&mut c, MenuEvent::TogglePanel);
        assert_eq!(c.phase(), PanelPhase::Closed);
    }

    #[test]
    fn test_accordion_exclusivity() {
        let mut c = controller();
        send(&mut c, MenuEvent::OpenPanel);
        send(&mut c, MenuEvent::ToggleAccordion(1));
        assert_eq!(open_flags(&c), vec![false, true, false]);

        let effects = send(&mut c, MenuEvent::ToggleAccordion(2));
        assert_eq!(open_flags(&c), vec![false, false, true]);
        assert!(effects[0].animation().unwrap().is_collapse());
        assert!(effects[1].animation().unwrap().is_reveal());
    }

    #[test]
    fn test_switch_waits_for_collapse() {
        let mut c = controller();
        send(&mut c, MenuEvent::OpenPanel);
        send(&mut c, MenuEvent::ToggleAccordion(1));

        let effects = c.update(MenuEvent::ToggleAccordion(2)).unwrap();
        assert_eq!(c.phase(), PanelPhase::ClosingSubitems(CollapseReason::SwitchAccordion(2)));
        assert_eq!(c.menu_state().expanded(), Some(1));

        let collapse = effects[0].animation().unwrap().clone();
        let plan = collapse.stagger_plan().unwrap();
        let names: Vec<&str> = plan.items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Intro", "Privacy", "Terms"]);

        c.update(MenuEvent::AnimationFinished(collapse.id)).unwrap();
        assert_eq!(c.menu_state().expanded(), Some(2));
        assert_eq!(c.phase(), PanelPhase::Open);
    }

    #[test]
    fn test_toggle_leaf_entry_collapses_open_accordion() {
        let mut c = controller();
        send(&mut c, MenuEvent::OpenPanel);
        send(&mut c, MenuEvent::ToggleAccordion(1));
        let effects = send(&mut c, MenuEvent::ToggleAccordion(0));
        assert_eq!(effects.len(), 1);
        assert!(effects[0].animation().unwrap().is_collapse());
        assert_eq!(open_flags(&c), vec![false, false, false]);
        assert_eq!(c.phase(), PanelPhase::Open);
    }

    #[test]
    fn test_toggle_while_closed_is_ignored() {
        let mut c = controller();
        assert!(c.update(MenuEvent::ToggleAccordion(1)).unwrap().is_empty());
        assert!(c.menu_state().is_all_closed());
    }

    #[test]
    fn test_invalid_index_is_rejected_without_change() {
        let mut c = controller();
        send(&mut c, MenuEvent::OpenPanel);
        send(&mut c, MenuEvent::ToggleAccordion(1));
        let before = c.snapshot();
        let result = c.update(MenuEvent::ToggleAccordion(9));
        assert!(matches!(result, Err(NavError::InvalidEntryIndex(9))));
        assert_eq!(c.snapshot(), before);
    }

    #[test]
    fn test_invalid_leaf_is_rejected_without_change() {
        let mut c = controller();
        send(&mut c, MenuEvent::OpenPanel);
        let result = c.update(MenuEvent::SelectLeaf(String::new()));
        assert!(matches!(result, Err(NavError::InvalidLeafTarget(_))));
        assert_eq!(c.phase(), PanelPhase::Open);
    }

    #[test]
    fn test_leaf_select_navigates_before_closing() {
        let mut c = controller();
        send(&mut c, MenuEvent::OpenPanel);
        send(&mut c, MenuEvent::ToggleAccordion(1));
        let effects = send(&mut c, MenuEvent::SelectLeaf("/about/terms".to_string()));
        assert_eq!(effects[0].navigation(), Some("/about/terms"));
        assert!(effects[1].animation().unwrap().is_collapse());
        assert_eq!(effects[2].animation().unwrap().slide_direction(), Some(SlideDirection::Out));
        assert_eq!(effects.iter().filter(|e| e.navigation().is_some()).count(), 1);
        assert_eq!(c.phase(), PanelPhase::Closed);
    }

    #[test]
    fn test_outside_interaction_uses_bounds() {
        let mut c = controller();
        c.update(MenuEvent::SetPanelBounds(Rect::new(0.0, 0.0, 300.0, 900.0))).unwrap();
        send(&mut c, MenuEvent::OpenPanel);

        let inside = InteractionTarget::Point(Point::new(120.0, 40.0));
        assert!(send(&mut c, MenuEvent::OutsideInteraction(inside)).is_empty());
        assert_eq!(c.phase(), PanelPhase::Open);

        let outside = InteractionTarget::Point(Point::new(640.0, 40.0));
        send(&mut c, MenuEvent::OutsideInteraction(outside));
        assert_eq!(c.phase(), PanelPhase::Closed);

        assert!(send(&mut c, MenuEvent::OutsideInteraction(outside)).is_empty());
        assert_eq!(c.phase(), PanelPhase::Closed);
    }

    #[test]
    fn test_events_during_transition_are_serialized() {
        let mut c = controller();
        let open = c.update(MenuEvent::OpenPanel).unwrap();
        let open_id = open[0].animation().unwrap().id;

        // arrives mid slide-in
        assert!(c.update(MenuEvent::ToggleAccordion(1)).unwrap().is_empty());
        assert_eq!(c.deferred_len(), 1);
        assert!(c.menu_state().is_all_closed());

        let effects = c.update(MenuEvent::AnimationFinished(open_id)).unwrap();
        assert!(effects[0].animation().unwrap().is_reveal());
        assert_eq!(c.menu_state().expanded(), Some(1));
        assert_eq!(c.deferred_len(), 0);
    }

    #[test]
    fn test_repeated_deferred_event_is_dropped() {
        let mut c = controller();
        c.update(MenuEvent::OpenPanel).unwrap();
        c.update(MenuEvent::ClosePanel).unwrap();
        c.update(MenuEvent::ClosePanel).unwrap();
        assert_eq!(c.deferred_len(), 1);
    }

    #[test]
    fn test_stale_completion_is_ignored() {
        let mut c = controller();
        let open = c.update(MenuEvent::OpenPanel).unwrap();
        let id = open[0].animation().unwrap().id;
        assert!(c.update(MenuEvent::AnimationFinished(AnimationId(id.value() + 40))).unwrap().is_empty());
        assert_eq!(c.phase(), PanelPhase::Opening);
    }

    #[test]
    fn test_reopen_starts_all_closed() {
        let mut c = controller();
        send(&mut c, MenuEvent::OpenPanel);
        send(&mut c, MenuEvent::ToggleAccordion(2));
        send(&mut c, MenuEvent::ClosePanel);
        send(&mut c, MenuEvent::OpenPanel);
        assert!(c.menu_state().is_all_closed());
        assert!(c.snapshot().visible_items.is_empty());
    }
}
