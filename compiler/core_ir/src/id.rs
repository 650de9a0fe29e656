//! Strongly-typed, 1-based arena identifiers.
//!
//! Every id type below shares the same shape: a `NonZeroU32`-free `u32`
//! wrapper where `0` is the universal "none" sentinel and any other value
//! is a 1-based index into the matching arena. This is the opposite
//! convention from a 0-based/`u32::MAX`-sentinel scheme: it was chosen so
//! `id == 0` reads as "none" at every call site without a side table.

use std::fmt;

/// Generate a zero-sentinel, 1-based id newtype.
macro_rules! define_id {
    ($name:ident) => {
        #[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
        #[repr(transparent)]
        pub struct $name(u32);

        impl $name {
            /// The sentinel "none" id. Never a valid arena index.
            pub const NONE: $name = $name(0);

            /// Wrap a raw 1-based index. `0` is reserved for `NONE`.
            #[inline]
            pub const fn from_raw(raw: u32) -> Self {
                $name(raw)
            }

            /// The raw 1-based index, or `0` for `NONE`.
            #[inline]
            pub const fn raw(self) -> u32 {
                self.0
            }

            /// `true` unless this is the `NONE` sentinel.
            #[inline]
            pub const fn is_valid(self) -> bool {
                self.0 != 0
            }

            /// Convert to a 0-based array index.
            ///
            /// # Panics
            /// Panics if called on `NONE`.
            #[inline]
            #[track_caller]
            pub const fn index(self) -> usize {
                assert!(self.0 != 0, "index() called on a NONE id");
                (self.0 - 1) as usize
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                if self.is_valid() {
                    write!(f, "{}({})", stringify!($name), self.0)
                } else {
                    write!(f, "{}::NONE", stringify!($name))
                }
            }
        }
    };
}

define_id!(FileID);
define_id!(ItemID);
define_id!(StmtID);
define_id!(ExprID);
define_id!(TypeID);
define_id!(PayloadID);
define_id!(FnParamID);
define_id!(TypeParamID);
define_id!(TypeParamBoundID);
define_id!(AttrID);
define_id!(ContractItemID);
define_id!(ContractFieldID);
define_id!(ContractFnID);
define_id!(ExternMemberID);
define_id!(ExternFieldID);
define_id!(TypeFieldID);
define_id!(TypeUnionMemberID);
define_id!(EnumVariantID);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_is_zero_and_invalid() {
        assert_eq!(ItemID::NONE.raw(), 0);
        assert!(!ItemID::NONE.is_valid());
        assert_eq!(ItemID::default(), ItemID::NONE);
    }

    #[test]
    fn first_allocated_id_is_one() {
        let id = ItemID::from_raw(1);
        assert!(id.is_valid());
        assert_eq!(id.index(), 0);
    }

    #[test]
    #[should_panic(expected = "NONE")]
    fn index_panics_on_none() {
        let _ = ItemID::NONE.index();
    }

    #[test]
    fn distinct_id_types_do_not_mix() {
        // This is a static-type property: ItemID and StmtID are distinct
        // types, so the following would not compile if uncommented:
        // let _: ItemID = StmtID::from_raw(1);
        let item = ItemID::from_raw(1);
        let stmt = StmtID::from_raw(1);
        assert_eq!(item.raw(), stmt.raw());
    }
}
