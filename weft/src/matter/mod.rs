//! # Matters
//!
//! The corecursive half of the interaction algebra: an always-available
//! responder. A matter holds a current observable value and a total response
//! function from any position of its signature to a direction, together with
//! the comonadic views: inspect now ([`extract`](Matter::extract)), inspect
//! the whole context ([`duplicate`](Matter::duplicate)), rebuild the focus
//! from the context ([`extend`](Matter::extend)).
//!
//! ## Representation
//!
//! A matter is conceptually infinite (it must answer *any* position), so it
//! is a closure-backed corecursive object, never a materialized tree. The
//! handle is a cheap [`Rc`] clone; the responder is shared by reference, not
//! copied.
//!
//! ## Lazy self-reference
//!
//! `duplicate` returns a matter whose focal value is the matter itself.
//! Eager construction of that object diverges (duplicating the duplicate,
//! forever), so the result lives in a write-once slot computed on first
//! access. The slot is type-erased: a typed field would name
//! `Matter<S, Matter<S, B>>` inside `Matter<S, B>` and recurse in its own
//! type parameter, which the compiler cannot monomorphize. The accessor
//! downcasts back to the one type ever stored.
//!
//! ## Threading
//!
//! `Rc` + [`OnceCell`] make matters single-threaded by design; the algebra
//! has no scheduling model and no suspension points.

use std::any::Any;
use std::cell::OnceCell;
use std::fmt;
use std::rc::Rc;

use crate::signature::Signature;

/// Shared responder: a pure, total answer function over `S`'s positions.
///
/// Purity and totality are the responder contract: the pairing engine may
/// query the same position more than once along different branches and must
/// observe the same direction each time.
pub type Responder<S> =
    Rc<dyn Fn(&<S as Signature>::Position) -> <S as Signature>::Direction>;

/// A corecursive responder over signature `S`, focused on a value `B`.
pub struct Matter<S: Signature, B> {
    inner: Rc<Inner<S, B>>,
}

struct Inner<S: Signature, B> {
    value: B,
    respond: Responder<S>,
    /// Write-once memo for `duplicate`; holds a `Matter<S, Matter<S, B>>`.
    duplicated: OnceCell<Box<dyn Any>>,
}

impl<S: Signature, B> Clone for Matter<S, B> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<S, B> Matter<S, B>
where
    S: Signature + 'static,
    B: 'static,
{
    /// Construct a matter from a seed value and a responder.
    ///
    /// `respond` must be total over the signature's position set and pure:
    /// the same position yields the same direction for the life of this
    /// matter. Partiality here is a contract violation surfaced by whatever
    /// checked path first queries the missing position.
    pub fn cofree(seed: B, respond: impl Fn(&S::Position) -> S::Direction + 'static) -> Self {
        Self::from_parts(seed, Rc::new(respond))
    }

    fn from_parts(value: B, respond: Responder<S>) -> Self {
        Self {
            inner: Rc::new(Inner {
                value,
                respond,
                duplicated: OnceCell::new(),
            }),
        }
    }

    /// The current observable value.
    pub fn extract(&self) -> &B {
        &self.inner.value
    }

    /// Answer one position.
    pub fn respond(&self, position: &S::Position) -> S::Direction {
        (*self.inner.respond)(position)
    }

    /// Share this matter's responder.
    pub fn responder(&self) -> Responder<S> {
        Rc::clone(&self.inner.respond)
    }

    /// The matter focused on itself, with the same responder.
    ///
    /// Computed once per instance and cached: repeated calls return the same
    /// object, not merely an equal one. `duplicate(duplicate(w))` and
    /// `map(duplicate, duplicate(w))` both observe this cache, which is what
    /// makes the comonad associativity law hold on the nose.
    pub fn duplicate(&self) -> Matter<S, Matter<S, B>> {
        let cached = self.inner.duplicated.get_or_init(|| {
            Box::new(Matter::<S, Matter<S, B>>::from_parts(
                self.clone(),
                Rc::clone(&self.inner.respond),
            ))
        });
        match cached.downcast_ref::<Matter<S, Matter<S, B>>>() {
            Some(duplicated) => duplicated.clone(),
            // The slot is written exactly once, by the closure above.
            None => unreachable!("duplicate slot holds a single type per instance"),
        }
    }

    /// Rebuild the focus from the whole context: `cofree(f(w), w.respond)`.
    ///
    /// Equivalent to `duplicate` followed by a value-level transform, without
    /// materializing the intermediate layer.
    pub fn extend<C: 'static>(&self, f: impl FnOnce(&Matter<S, B>) -> C) -> Matter<S, C> {
        Matter::from_parts(f(self), Rc::clone(&self.inner.respond))
    }

    /// Map the focal value, keeping the responder.
    pub fn map<C: 'static>(&self, f: impl FnOnce(&B) -> C) -> Matter<S, C> {
        Matter::from_parts(f(self.extract()), Rc::clone(&self.inner.respond))
    }

    /// Allocation identity: both handles point at the same node.
    pub fn same_instance(a: &Self, b: &Self) -> bool {
        Rc::ptr_eq(&a.inner, &b.inner)
    }

    /// Whether two matters share one responder.
    pub fn same_responder<C: 'static>(a: &Self, b: &Matter<S, C>) -> bool {
        Rc::ptr_eq(&a.inner.respond, &b.inner.respond)
    }

    /// Observable identity: equal values answered by the same responder.
    ///
    /// This is the `(value, respond)` identity of a matter; responders are
    /// closures and admit no structural comparison, so pointer identity
    /// stands in for the response surface.
    pub fn observably_eq(a: &Self, b: &Self) -> bool
    where
        B: PartialEq,
    {
        a.extract() == b.extract() && Self::same_responder(a, b)
    }
}

impl<S: Signature, B: fmt::Debug> fmt::Debug for Matter<S, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Matter")
            .field("value", &self.inner.value)
            .finish_non_exhaustive()
    }
}
