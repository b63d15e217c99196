//! A geometry provider backed by uniform fixture cards.

use std::cell::RefCell;
use std::rc::Rc;

use filmstrip_core::{GeometryProvider, Measurements};

struct Inner {
    container_width: f32,
    card_width: f32,
    card_height: f32,
    margin: f32,
    count: usize,
}

/// Describes `count` uniform cards inside a container of fixed width.
///
/// Offsets ascend by `card_width + margin` and the content width is the
/// sum of all card slots. The provider is a cheap handle: clones share one
/// set of dimensions, so a test can keep a handle, hand another to the
/// controller, and reshape the geometry before triggering a resize.
#[derive(Clone)]
pub struct UniformCards {
    inner: Rc<RefCell<Inner>>,
}

impl UniformCards {
    /// Cards of 150x90 with a 10 px trailing margin, so each slot spans
    /// 160 px.
    pub fn new(count: usize, container_width: f32) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                container_width,
                card_width: 150.0,
                card_height: 90.0,
                margin: 10.0,
                count,
            })),
        }
    }

    pub fn set_container_width(&self, width: f32) {
        self.inner.borrow_mut().container_width = width;
    }

    pub fn set_card_width(&self, width: f32) {
        self.inner.borrow_mut().card_width = width;
    }

    pub fn set_count(&self, count: usize) {
        self.inner.borrow_mut().count = count;
    }
}

impl GeometryProvider for UniformCards {
    fn measure(&self) -> Measurements {
        let inner = self.inner.borrow();
        let spacing = inner.card_width + inner.margin;
        Measurements {
            container_width: inner.container_width,
            content_width: spacing * inner.count as f32,
            card_left_offsets: (0..inner.count).map(|i| i as f32 * spacing).collect(),
            card_width: inner.card_width,
            card_height: inner.card_height,
            card_margin: inner.margin,
        }
    }
}
