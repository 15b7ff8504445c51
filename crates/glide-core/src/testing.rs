//! In-memory page for exercising the selector and animator without a browser.
//!
//! Targets share state with the page that created them, so a handle kept by
//! the animator sees later rect changes, detachment and focus.

use crate::directory::{FocusTarget, Page};
use crate::geometry::{CornerRadius, Rect, Size};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

#[derive(Debug, Default)]
struct PageState {
    active: Option<usize>,
    focus_attempts: Vec<usize>,
    scrolled: Vec<usize>,
}

#[derive(Debug)]
struct NodeState {
    rect: Option<Rect>,
    radii: CornerRadius,
    visible: bool,
    refuses_focus: bool,
}

/// A synthetic focusable element.
#[derive(Clone)]
pub struct MemoryTarget {
    id: usize,
    node: Rc<RefCell<NodeState>>,
    page: Rc<RefCell<PageState>>,
}

impl MemoryTarget {
    /// Document-order index of this element.
    #[must_use]
    pub const fn id(&self) -> usize {
        self.id
    }

    /// Move or resize the element.
    pub fn set_rect(&self, rect: Rect) {
        self.node.borrow_mut().rect = Some(rect);
    }

    /// Remove the element's geometry, as if it were detached from the page.
    pub fn detach(&self) {
        self.node.borrow_mut().rect = None;
    }

    /// Set the rendered corner radii.
    pub fn set_radii(&self, radii: CornerRadius) {
        self.node.borrow_mut().radii = radii;
    }

    /// Show or hide the element.
    pub fn set_visible(&self, visible: bool) {
        self.node.borrow_mut().visible = visible;
    }

    /// Make focus requests on this element silently fail.
    pub fn refuse_focus(&self, refuse: bool) {
        self.node.borrow_mut().refuses_focus = refuse;
    }
}

impl PartialEq for MemoryTarget {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && Rc::ptr_eq(&self.page, &other.page)
    }
}

impl fmt::Debug for MemoryTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryTarget")
            .field("id", &self.id)
            .field("rect", &self.node.borrow().rect)
            .finish()
    }
}

impl FocusTarget for MemoryTarget {
    fn rect(&self) -> Option<Rect> {
        self.node.borrow().rect
    }

    fn corner_radii(&self) -> CornerRadius {
        self.node.borrow().radii
    }

    fn is_visible(&self) -> bool {
        self.node.borrow().visible
    }

    fn try_focus(&self) -> bool {
        let refuses = self.node.borrow().refuses_focus;
        let mut page = self.page.borrow_mut();
        page.focus_attempts.push(self.id);
        if !refuses {
            page.active = Some(self.id);
        }
        page.active == Some(self.id)
    }

    fn scroll_into_view(&self) {
        self.page.borrow_mut().scrolled.push(self.id);
    }
}

/// A synthetic page holding [`MemoryTarget`]s in document order.
#[derive(Debug)]
pub struct MemoryPage {
    viewport: Size,
    state: Rc<RefCell<PageState>>,
    targets: RefCell<Vec<MemoryTarget>>,
}

impl MemoryPage {
    /// Create an empty page with the given viewport.
    #[must_use]
    pub fn new(viewport: Size) -> Self {
        Self {
            viewport,
            state: Rc::new(RefCell::new(PageState::default())),
            targets: RefCell::new(Vec::new()),
        }
    }

    /// Append a visible, focusable element.
    pub fn add(&self, rect: Rect) -> MemoryTarget {
        let mut targets = self.targets.borrow_mut();
        let target = MemoryTarget {
            id: targets.len(),
            node: Rc::new(RefCell::new(NodeState {
                rect: Some(rect),
                radii: CornerRadius::ZERO,
                visible: true,
                refuses_focus: false,
            })),
            page: Rc::clone(&self.state),
        };
        targets.push(target.clone());
        target
    }

    /// Set the active element directly, bypassing `try_focus`.
    pub fn set_active(&self, target: Option<&MemoryTarget>) {
        self.state.borrow_mut().active = target.map(MemoryTarget::id);
    }

    /// Id of the active element.
    #[must_use]
    pub fn active(&self) -> Option<usize> {
        self.state.borrow().active
    }

    /// Ids passed to `try_focus`, in call order.
    #[must_use]
    pub fn focus_attempts(&self) -> Vec<usize> {
        self.state.borrow().focus_attempts.clone()
    }

    /// Ids scrolled into view, in call order.
    #[must_use]
    pub fn scrolled(&self) -> Vec<usize> {
        self.state.borrow().scrolled.clone()
    }
}

impl Page for MemoryPage {
    type Target = MemoryTarget;

    fn active_element(&self) -> Option<MemoryTarget> {
        let active = self.state.borrow().active?;
        self.targets.borrow().get(active).cloned()
    }

    fn interactive_elements(&self) -> Vec<MemoryTarget> {
        self.targets.borrow().clone()
    }

    fn viewport(&self) -> Size {
        self.viewport
    }
}
