//! Animation plans emitted by the menu controller.
//!
//! The controller never runs animations itself. It describes them here and
//! waits for the presenter to report completion.

use std::time::Duration;

use serde::Serialize;

use crate::config::AnimationConfig;
use crate::menu::MenuEntry;

/// Identifies one emitted animation so its completion can be matched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct AnimationId(pub(crate) u64);

impl AnimationId {
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// Panel slide direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SlideDirection {
    /// From fully off-screen to fully on-screen
    In,
    /// From on-screen to fully off-screen
    Out,
}

impl SlideDirection {
    /// Horizontal translation of the panel once the slide has finished
    pub fn target_translate_percent(&self) -> f64 {
        match self {
            SlideDirection::In => 0.0,
            SlideDirection::Out => -100.0,
        }
    }
}

/// A sub-item taking part in a staggered animation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StaggeredItem {
    /// Top-level entry the item belongs to
    pub entry_index: usize,
    /// Position within the entry's sub-entries
    pub sub_index: usize,
    pub name: String,
    pub pathname: String,
    /// Start offset relative to the beginning of the animation
    pub delay: Duration,
}

/// Per-item height animation with a fixed stagger between items
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StaggerPlan {
    /// Items in template order; delays increase strictly with position
    pub items: Vec<StaggeredItem>,
    pub item_duration: Duration,
    pub stagger: Duration,
}

impl StaggerPlan {
    /// Plan for the sub-entries of top-level entry `entry_index`
    pub fn new(entry_index: usize, sub_entries: &[MenuEntry], config: &AnimationConfig) -> Self {
        let stagger = config.item_stagger();
        let items = sub_entries
            .iter()
            .enumerate()
            .map(|(position, sub)| StaggeredItem {
                entry_index,
                sub_index: sub.index,
                name: sub.name.clone(),
                pathname: sub.pathname.clone(),
                delay: stagger * position as u32,
            })
            .collect();

        Self {
            items,
            item_duration: config.item_duration(),
            stagger,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Start offsets in item order
    pub fn offsets(&self) -> Vec<Duration> {
        self.items.iter().map(|item| item.delay).collect()
    }

    /// Time until the last item has finished
    pub fn total_duration(&self) -> Duration {
        self.items
            .last()
            .map(|last| last.delay + self.item_duration)
            .unwrap_or(Duration::ZERO)
    }
}

/// What an animation does
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum AnimationKind {
    Slide {
        direction: SlideDirection,
        duration: Duration,
    },
    /// Visible sub-items shrink to zero height
    Collapse(StaggerPlan),
    /// Newly visible sub-items grow from zero to their natural height
    Reveal(StaggerPlan),
}

/// An animation request tagged with its completion id
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Animation {
    pub id: AnimationId,
    pub kind: AnimationKind,
}

impl Animation {
    /// Time from start until the animation has settled
    pub fn total_duration(&self) -> Duration {
        match &self.kind {
            AnimationKind::Slide { duration, .. } => *duration,
            AnimationKind::Collapse(plan) | AnimationKind::Reveal(plan) => plan.total_duration(),
        }
    }

    pub fn stagger_plan(&self) -> Option<&StaggerPlan> {
        match &self.kind {
            AnimationKind::Collapse(plan) | AnimationKind::Reveal(plan) => Some(plan),
            AnimationKind::Slide { .. } => None,
        }
    }

    pub fn slide_direction(&self) -> Option<SlideDirection> {
        match self.kind {
            AnimationKind::Slide { direction, .. } => Some(direction),
            _ => None,
        }
    }

    pub fn is_collapse(&self) -> bool {
        matches!(self.kind, AnimationKind::Collapse(_))
    }

    pub fn is_reveal(&self) -> bool {
        matches!(self.kind, AnimationKind::Reveal(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::MenuTemplate;

    #[test]
    fn test_stagger_offsets_follow_template_order() {
        let template = MenuTemplate::site_menu();
        let plan = StaggerPlan::new(1, &template[1].sub_entries, &AnimationConfig::default());
        assert_eq!(
            plan.offsets(),
            vec![Duration::ZERO, Duration::from_millis(100), Duration::from_millis(200)]
        );
        let names: Vec<&str> = plan.items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Intro", "Privacy", "Terms"]);
        assert_eq!(plan.total_duration(), Duration::from_millis(500));
    }

    #[test]
    fn test_empty_plan_has_no_duration() {
        let plan = StaggerPlan::new(0, &[], &AnimationConfig::default());
        assert!(plan.is_empty());
        assert_eq!(plan.total_duration(), Duration::ZERO);
    }

    #[test]
    fn test_slide_duration() {
        let animation = Animation {
            id: AnimationId(1),
            kind: AnimationKind::Slide {
                direction: SlideDirection::Out,
                duration: Duration::from_millis(500),
            },
        };
        assert_eq!(animation.total_duration(), Duration::from_millis(500));
        assert_eq!(animation.slide_direction(), Some(SlideDirection::Out));
        assert!(animation.stagger_plan().is_none());
    }
}
