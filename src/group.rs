//! The group element seam
//!
//! The pipeline never looks inside a point. Anything that has an identity
//! (`Zero::zero`), a commutative and associative `+`, and equality can be
//! clustered and packed. Curve libraries typically already provide these
//! impls for their projective point types.

use num_traits::Zero;

/// An opaque element of an additive abelian group
///
/// `Zero::zero()` is the identity and `Add` is the group operation. The
/// operation must be commutative and associative; the merge pipeline relies
/// on that to sum clusters in whatever order its forward chains dictate.
pub trait GroupElement: Clone + PartialEq + Zero {}

impl<T> GroupElement for T where T: Clone + PartialEq + Zero {}

/// Sum a sequence of group elements, starting from the identity
pub fn sum_points<P, I>(points: I) -> P
where
    P: GroupElement,
    I: IntoIterator<Item = P>,
{
    points.into_iter().fold(P::zero(), |acc, p| acc + p)
}
