//! Drag-and-drop gesture state.

use log::debug;

use super::TaskList;
use crate::models::StepId;

/// State of one in-flight drag gesture.
///
/// Owned by whoever renders the list; nothing about the gesture lives in
/// the [`TaskList`] itself. A gesture ends on [`drop_on`](Self::drop_on) or
/// [`end`](Self::end), both of which reset it.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DragGesture {
    dragged: Option<StepId>,
    hovered: Option<StepId>,
}

impl DragGesture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin dragging `id`, abandoning any previous gesture.
    pub fn start(&mut self, id: StepId) {
        self.dragged = Some(id);
        self.hovered = None;
    }

    pub fn dragged(&self) -> Option<StepId> {
        self.dragged
    }

    /// The step currently highlighted as drop target.
    pub fn hovered(&self) -> Option<StepId> {
        self.hovered
    }

    pub fn is_active(&self) -> bool {
        self.dragged.is_some()
    }

    /// Pointer moved over `target`. Returns whether it should be highlighted:
    /// only while a drag is active and never for the dragged step itself.
    pub fn hover(&mut self, target: StepId) -> bool {
        match self.dragged {
            Some(dragged) if dragged != target => {
                self.hovered = Some(target);
                true
            }
            _ => {
                self.hovered = None;
                false
            }
        }
    }

    /// Pointer left the highlighted step.
    pub fn leave(&mut self) {
        self.hovered = None;
    }

    /// Drop onto `target`: moves the dragged step to the target's position
    /// and ends the gesture. Returns whether the list changed.
    pub fn drop_on(&mut self, target: StepId, list: &mut TaskList) -> bool {
        let dragged = self.dragged;
        self.end();
        match dragged {
            Some(dragged) if dragged != target => list.reorder(dragged, target),
            _ => {
                debug!("drop_on: nothing to move onto {target}");
                false
            }
        }
    }

    /// Abandon the gesture without moving anything.
    pub fn end(&mut self) {
        self.dragged = None;
        self.hovered = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list() -> (TaskList, Vec<StepId>) {
        let mut list = TaskList::new();
        list.replace(["a", "b", "c"]).unwrap();
        let ids = list.iter().map(|s| s.id).collect();
        (list, ids)
    }

    #[test]
    fn test_drop_reorders_and_resets() {
        let (mut list, ids) = list();
        let mut gesture = DragGesture::new();

        gesture.start(ids[2]);
        assert!(gesture.is_active());
        assert!(gesture.hover(ids[0]));
        assert_eq!(gesture.hovered(), Some(ids[0]));

        assert!(gesture.drop_on(ids[0], &mut list));
        assert_eq!(list.position(ids[2]), Some(0));
        assert_eq!(gesture, DragGesture::default());
    }

    #[test]
    fn test_hover_over_self_is_not_highlighted() {
        let (_, ids) = list();
        let mut gesture = DragGesture::new();
        gesture.start(ids[1]);
        assert!(!gesture.hover(ids[1]));
        assert_eq!(gesture.hovered(), None);
    }

    #[test]
    fn test_hover_without_drag_is_not_highlighted() {
        let (_, ids) = list();
        let mut gesture = DragGesture::new();
        assert!(!gesture.hover(ids[0]));
        gesture.start(ids[0]);
        assert!(gesture.hover(ids[1]));
        gesture.leave();
        assert_eq!(gesture.hovered(), None);
        assert!(gesture.is_active());
    }

    #[test]
    fn test_drop_on_self_or_after_end_is_noop() {
        let (mut list, ids) = list();
        let before: Vec<StepId> = list.iter().map(|s| s.id).collect();
        let mut gesture = DragGesture::new();

        gesture.start(ids[0]);
        assert!(!gesture.drop_on(ids[0], &mut list));
        assert!(!gesture.is_active());

        gesture.start(ids[0]);
        gesture.end();
        assert!(!gesture.drop_on(ids[2], &mut list));

        let after: Vec<StepId> = list.iter().map(|s| s.id).collect();
        assert_eq!(before, after);
    }
}
