/// Implement the value-consuming combinations of a binary operator by
/// forwarding to the `&T op &T` implementation.
macro_rules! forward_binop_to_ref_ref {
    (impl $tr:ident for $t:ty, $method:ident) => {
        impl $tr<$t> for $t {
            type Output = $t;

            #[inline]
            fn $method(self, rhs: $t) -> $t {
                (&self).$method(&rhs)
            }
        }

        impl $tr<&$t> for $t {
            type Output = $t;

            #[inline]
            fn $method(self, rhs: &$t) -> $t {
                (&self).$method(rhs)
            }
        }

        impl $tr<$t> for &$t {
            type Output = $t;

            #[inline]
            fn $method(self, rhs: $t) -> $t {
                self.$method(&rhs)
            }
        }
    };
}

/// Implement the assigning operator by taking the left operand out and
/// delegating to the consuming operator.
macro_rules! forward_binop_assign_by_take {
    (impl $tr:ident for $t:ty, $method:ident, $binop:ident) => {
        impl $tr<$t> for $t {
            #[inline]
            fn $method(&mut self, rhs: $t) {
                *self = core::mem::take(self).$binop(rhs);
            }
        }

        impl $tr<&$t> for $t {
            #[inline]
            fn $method(&mut self, rhs: &$t) {
                *self = core::mem::take(self).$binop(rhs);
            }
        }
    };
}

/// Implement `T op prim` and `&T op prim` by lifting the primitive operand.
macro_rules! forward_binop_with_primitive {
    (impl $tr:ident<$t2:ty> for $t:ty, $method:ident) => {
        impl $tr<$t2> for $t {
            type Output = $t;

            #[inline]
            fn $method(self, rhs: $t2) -> $t {
                self.$method(<$t>::from(rhs))
            }
        }

        impl $tr<$t2> for &$t {
            type Output = $t;

            #[inline]
            fn $method(self, rhs: $t2) -> $t {
                self.$method(<$t>::from(rhs))
            }
        }
    };
}

pub(crate) use forward_binop_assign_by_take;
pub(crate) use forward_binop_to_ref_ref;
pub(crate) use forward_binop_with_primitive;
