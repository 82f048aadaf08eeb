//! The case list and the resolution loop shared by every matcher.
//!
//! A matcher is a thin typed facade over a [`CaseList`]: it owns the input
//! and the ordered cases, and [`CaseList::resolve`] walks the cases once,
//! in registration order, stopping at the first case that accepts the input.
//!
//! Cases take the input by value and hand it back when they decline. This
//! lets the firing action own the input (or the value extracted from it)
//! without cloning, and lets a narrowing case test and convert the input in
//! a single step.
//!
//! Registering a case costs one boxed closure per capturing guard and one
//! per capturing action; zero-sized closures are not allocated. Testing
//! cases fuse the test and the action into a single box, which is what the
//! primitive literal and tolerance guards use.

use smallvec::SmallVec;

use super::Guard;

/// Number of cases stored inline before the case list spills to the heap.
const INLINE_CASES: usize = 4;

/// The result of offering the input to a single case.
pub(crate) enum Attempt<T, P> {
    /// The case did not apply; the input is handed back untouched.
    Declined(T),
    /// The case applied and its action produced `P`.
    Fired(P),
}

/// The result of resolving a whole case list.
pub(crate) enum Resolution<T, P> {
    /// A case fired with payload `P`.
    Fired(P),
    /// No case fired; the input is handed back for the fallback.
    Unmatched(T),
}

/// A single registered case.
///
/// A guarded case is decided by its [`Guard`] and its action receives the
/// input unchanged. An extracting case is decided by whether its extractor
/// yields a value, and its action receives that value; extractor and action
/// are fused in one closure because the extracted type is erased here. A
/// testing case fuses a borrowed test with its action.
pub(crate) enum Case<'a, T, P> {
    Guarded {
        guard: Guard<'a, T>,
        action: Box<dyn FnOnce(T) -> P + 'a>,
    },
    Extracting {
        attempt: Box<dyn FnOnce(T) -> Attempt<T, P> + 'a>,
    },
    Testing {
        attempt: Box<dyn FnOnce(T) -> Attempt<T, P> + 'a>,
    },
}

impl<'a, T, P> Case<'a, T, P> {
    pub(crate) fn guarded<F>(guard: Guard<'a, T>, action: F) -> Self
    where
        F: FnOnce(T) -> P + 'a,
    {
        Self::Guarded {
            guard,
            action: Box::new(action),
        }
    }

    /// A case applying when `test` accepts the input, stored as one closure.
    pub(crate) fn testing<Q, F>(test: Q, action: F) -> Self
    where
        Q: FnOnce(&T) -> bool + 'a,
        F: FnOnce(T) -> P + 'a,
    {
        Self::Testing {
            attempt: Box::new(move |input: T| {
                if test(&input) {
                    Attempt::Fired(action(input))
                } else {
                    Attempt::Declined(input)
                }
            }),
        }
    }

    /// A case applying when `extract` finds a value in the borrowed input.
    pub(crate) fn extracting<X, E, F>(extract: E, action: F) -> Self
    where
        E: FnOnce(&T) -> Option<X> + 'a,
        F: FnOnce(X) -> P + 'a,
    {
        Self::Extracting {
            attempt: Box::new(move |input: T| match extract(&input) {
                Some(value) => Attempt::Fired(action(value)),
                None => Attempt::Declined(input),
            }),
        }
    }

    /// A case applying when `narrow` converts the owned input.
    pub(crate) fn narrowing<X, N, F>(narrow: N, action: F) -> Self
    where
        N: FnOnce(T) -> Result<X, T> + 'a,
        F: FnOnce(X) -> P + 'a,
    {
        Self::Extracting {
            attempt: Box::new(move |input: T| match narrow(input) {
                Ok(value) => Attempt::Fired(action(value)),
                Err(input) => Attempt::Declined(input),
            }),
        }
    }

    #[cfg(feature = "tracing")]
    const fn kind_name(&self) -> &'static str {
        match self {
            Self::Guarded { guard, .. } => guard.kind().name(),
            Self::Extracting { .. } => "extractor",
            Self::Testing { .. } => "test",
        }
    }

    fn attempt(self, input: T) -> Attempt<T, P> {
        match self {
            Self::Guarded { guard, action } => {
                if guard.test(&input) {
                    Attempt::Fired(action(input))
                } else {
                    Attempt::Declined(input)
                }
            }
            Self::Extracting { attempt } | Self::Testing { attempt } => attempt(input),
        }
    }
}

/// The input together with its ordered cases.
pub(crate) struct CaseList<'a, T, P> {
    input: T,
    cases: SmallVec<[Case<'a, T, P>; INLINE_CASES]>,
}

impl<'a, T, P> CaseList<'a, T, P> {
    pub(crate) fn new(input: T) -> Self {
        Self {
            input,
            cases: SmallVec::new(),
        }
    }

    pub(crate) fn push(&mut self, case: Case<'a, T, P>) {
        self.cases.push(case);
    }

    pub(crate) fn len(&self) -> usize {
        self.cases.len()
    }

    pub(crate) const fn input(&self) -> &T {
        &self.input
    }

    /// Offers the input to each case in registration order.
    ///
    /// Stops at the first case that fires; the cases after it are dropped
    /// without their guards, extractors or actions ever running. A panic
    /// raised by a guard or an action unwinds straight out of this loop.
    pub(crate) fn resolve(self) -> Resolution<T, P> {
        let Self { mut input, cases } = self;
        for (index, case) in cases.into_iter().enumerate() {
            #[cfg(feature = "tracing")]
            let kind = case.kind_name();
            match case.attempt(input) {
                Attempt::Fired(payload) => {
                    trace_event!(case = index, kind, "case fired");
                    return Resolution::Fired(payload);
                }
                Attempt::Declined(returned) => input = returned,
            }
            #[cfg(not(feature = "tracing"))]
            let _ = index;
        }
        trace_event!("no case fired");
        Resolution::Unmatched(input)
    }
}
