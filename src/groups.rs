use std::fmt;
use std::marker::PhantomData;

pub trait Magma {
    type Elem: Clone;

    fn op(&self, lhs: Self::Elem, rhs: Self::Elem) -> Self::Elem;
}

/// Marker: `op(op(a, b), c) == op(a, op(b, c))`.
pub trait Associativity: Magma {}
pub trait Identity: Magma {
    /// Identity
    fn id(&self) -> Self::Elem;
}

pub trait Monoid: Magma + Associativity + Identity {}
impl<M: Magma + Associativity + Identity> Monoid for M {}

macro_rules! marker_monoid {
    ($($(#[$attr:meta])* $name:ident;)*) => {$(
        $(#[$attr])*
        #[derive(Clone, Copy, Debug)]
        pub struct $name<T>(PhantomData<T>);

        impl<T> Default for $name<T> {
            fn default() -> Self {
                Self::new()
            }
        }

        impl<T> $name<T> {
            pub const fn new() -> Self {
                Self(PhantomData)
            }
        }
    )*};
}

marker_monoid! {
    /// `+` with identity `0`.
    Sum;
    /// `*` with identity `1`.
    Product;
    /// `min` with identity `T::max_value()`.
    Min;
    /// `max` with identity `T::min_value()`.
    Max;
    /// Float `min` with identity `+inf`.
    FloatMin;
    /// Float `max` with identity `-inf`.
    FloatMax;
    /// `Vec` concatenation with identity `[]`. Not commutative.
    Concat;
}

impl<T: num::Num + Clone> Magma for Sum<T> {
    type Elem = T;

    #[inline]
    fn op(&self, lhs: T, rhs: T) -> T {
        lhs + rhs
    }
}
impl<T: num::Num + Clone> Identity for Sum<T> {
    #[inline]
    fn id(&self) -> T {
        T::zero()
    }
}
impl<T: num::Num + Clone> Associativity for Sum<T> {}

impl<T: num::Num + Clone> Magma for Product<T> {
    type Elem = T;

    #[inline]
    fn op(&self, lhs: T, rhs: T) -> T {
        lhs * rhs
    }
}
impl<T: num::Num + Clone> Identity for Product<T> {
    #[inline]
    fn id(&self) -> T {
        T::one()
    }
}
impl<T: num::Num + Clone> Associativity for Product<T> {}

impl<T: Ord + num::Bounded + Clone> Magma for Min<T> {
    type Elem = T;

    #[inline]
    fn op(&self, lhs: T, rhs: T) -> T {
        lhs.min(rhs)
    }
}
impl<T: Ord + num::Bounded + Clone> Identity for Min<T> {
    #[inline]
    fn id(&self) -> T {
        T::max_value()
    }
}
impl<T: Ord + num::Bounded + Clone> Associativity for Min<T> {}

impl<T: Ord + num::Bounded + Clone> Magma for Max<T> {
    type Elem = T;

    #[inline]
    fn op(&self, lhs: T, rhs: T) -> T {
        lhs.max(rhs)
    }
}
impl<T: Ord + num::Bounded + Clone> Identity for Max<T> {
    #[inline]
    fn id(&self) -> T {
        T::min_value()
    }
}
impl<T: Ord + num::Bounded + Clone> Associativity for Max<T> {}

// `Float::min`/`max` ignore a NaN operand, so NaN leaves never win.
impl<T: num::Float> Magma for FloatMin<T> {
    type Elem = T;

    #[inline]
    fn op(&self, lhs: T, rhs: T) -> T {
        lhs.min(rhs)
    }
}
impl<T: num::Float> Identity for FloatMin<T> {
    #[inline]
    fn id(&self) -> T {
        T::infinity()
    }
}
impl<T: num::Float> Associativity for FloatMin<T> {}

impl<T: num::Float> Magma for FloatMax<T> {
    type Elem = T;

    #[inline]
    fn op(&self, lhs: T, rhs: T) -> T {
        lhs.max(rhs)
    }
}
impl<T: num::Float> Identity for FloatMax<T> {
    #[inline]
    fn id(&self) -> T {
        T::neg_infinity()
    }
}
impl<T: num::Float> Associativity for FloatMax<T> {}

impl<T: Clone> Magma for Concat<T> {
    type Elem = Vec<T>;

    #[inline]
    fn op(&self, mut lhs: Vec<T>, rhs: Vec<T>) -> Vec<T> {
        lhs.extend(rhs);
        lhs
    }
}
impl<T: Clone> Identity for Concat<T> {
    #[inline]
    fn id(&self) -> Vec<T> {
        Vec::new()
    }
}
impl<T: Clone> Associativity for Concat<T> {}

/// `String` concatenation with identity `""`. Not commutative.
#[derive(Clone, Copy, Debug, Default)]
pub struct StrConcat;

impl Magma for StrConcat {
    type Elem = String;

    #[inline]
    fn op(&self, mut lhs: String, rhs: String) -> String {
        lhs.push_str(&rhs);
        lhs
    }
}
impl Identity for StrConcat {
    #[inline]
    fn id(&self) -> String {
        String::new()
    }
}
impl Associativity for StrConcat {}

/// A monoid made of a closure and its identity element.
///
/// The closure is trusted to be associative and `identity` to be neutral for it;
/// neither can be checked.
#[derive(Clone)]
pub struct FnMonoid<T, F> {
    op: F,
    identity: T,
}

impl<T, F> FnMonoid<T, F>
where
    T: Clone,
    F: Fn(T, T) -> T,
{
    #[inline]
    pub fn new(op: F, identity: T) -> Self {
        Self { op, identity }
    }
}

impl<T: fmt::Debug, F> fmt::Debug for FnMonoid<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnMonoid")
            .field("identity", &self.identity)
            .finish_non_exhaustive()
    }
}

impl<T: Clone, F: Fn(T, T) -> T> Magma for FnMonoid<T, F> {
    type Elem = T;

    #[inline]
    fn op(&self, lhs: T, rhs: T) -> T {
        (self.op)(lhs, rhs)
    }
}
impl<T: Clone, F: Fn(T, T) -> T> Identity for FnMonoid<T, F> {
    #[inline]
    fn id(&self) -> T {
        self.identity.clone()
    }
}
impl<T: Clone, F: Fn(T, T) -> T> Associativity for FnMonoid<T, F> {}
