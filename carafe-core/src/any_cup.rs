use std::fmt;

use crate::{Cup, Liquid};

/// Object-safe view of a cup, parameterized only by its liquid.
///
/// Private to this module so the only implementor is [`CupWrapper`].
trait ErasedCup<L> {
    fn liquid(&self) -> Option<&L>;
    fn fill(&mut self, liquid: L);
}

/// Owns a concrete cup and forwards to it unchanged.
struct CupWrapper<C> {
    cup: C,
}

impl<C: Cup> ErasedCup<C::Liquid> for CupWrapper<C> {
    fn liquid(&self) -> Option<&C::Liquid> {
        self.cup.liquid()
    }

    fn fill(&mut self, liquid: C::Liquid) {
        self.cup.fill(liquid);
    }
}

/// A cup whose concrete type has been erased, leaving only its liquid type.
///
/// An `AnyCup<L>` takes ownership of the cup it wraps and forwards every call
/// to it, so its contents after any sequence of fills are exactly what the
/// wrapped cup would hold had it been filled directly. Because the type no
/// longer mentions the implementation, cups of different kinds holding the
/// same liquid can share a collection.
///
/// `AnyCup<L>` is itself a [`Cup`].
pub struct AnyCup<L> {
    inner: Box<dyn ErasedCup<L>>,
}

impl<L: Liquid> AnyCup<L> {
    /// Wraps `cup`, taking exclusive ownership of it.
    #[must_use]
    pub fn new<C>(cup: C) -> Self
    where
        C: Cup<Liquid = L> + 'static,
    {
        Self {
            inner: Box::new(CupWrapper { cup }),
        }
    }
}

impl<L: Liquid> Cup for AnyCup<L> {
    type Liquid = L;

    fn liquid(&self) -> Option<&L> {
        self.inner.liquid()
    }

    fn fill(&mut self, liquid: L) {
        self.inner.fill(liquid);
    }

    /// Already erased, so no second layer is added.
    fn into_any(self) -> AnyCup<L>
    where
        Self: Sized + 'static,
    {
        self
    }
}

impl<L: fmt::Debug> fmt::Debug for AnyCup<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnyCup")
            .field("liquid", &self.inner.liquid())
            .finish()
    }
}
