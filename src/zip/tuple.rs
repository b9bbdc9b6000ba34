use super::{Cursors, Lockstep, Slot, Step, Zip};
use crate::cursor::{Cursor, ReadCursor};
use crate::{private_impl, Sequence};

/// Implement `Slot<$idx>` for a tuple of cursors.
///
/// The full list of tuple members comes in as a single `[..]` token tree so it
/// can be repeated once per index.
macro_rules! impl_slot {
    ([$($All:ident)+] $S:ident $idx:tt) => {
        impl<$($All: Cursor),+> Slot<$idx> for ($($All,)+) {
            type Cursor = $S;

            fn slot(&self) -> &$S {
                &self.$idx
            }

            fn slot_mut(&mut self) -> &mut $S {
                &mut self.$idx
            }
        }
    };
}

macro_rules! impl_lockstep_tuple {
    (@slots $all:tt $($S:ident=$idx:tt)+) => {
        $( impl_slot! { $all $S $idx } )+
    };
    ($($S:ident=$idx:tt)+) => {
        impl_lockstep_tuple! { @slots [$($S)+] $($S=$idx)+ }

        impl<$($S),+> Cursors for ($($S,)+)
        where $(
            $S: Cursor,
        )+ {
            private_impl! {}

            fn advance(&mut self) {
                $( self.$idx.advance(); )+
            }

            fn all_differ(&self, other: &Self) -> bool {
                $( self.$idx != other.$idx )&&+
            }
        }

        impl<$($S),+> Lockstep for ($($S,)+)
        where $(
            $S: Sequence,
        )+ {
            type Cursors = ($($S::Cursor,)+);

            fn lockstep(self) -> Zip<Self::Cursors> {
                let ($($S,)+) = self;
                let ($($S,)+) = ($($S.bounds(),)+);
                Zip::new(($($S.0,)+), ($($S.1,)+))
            }
        }

        impl<$($S),+> Step<($($S,)+)>
        where $(
            $S: Cursor,
        )+ {
            /// Call `f` with the current element of every slot, in slot order.
            ///
            /// Each argument is what its slot's sequence allows: `&mut T` for
            /// sequences bound mutably, `&T` for sequences bound read-only.
            /// Returns whatever `f` returns.
            pub fn apply<'s, Func, R>(&'s mut self, f: Func) -> R
            where
                $( $S: 's, )+
                Func: FnOnce($($S::Item<'s>),+) -> R,
            {
                let ($($S,)+) = &mut self.cursors;
                f($($S.get()),+)
            }

            /// Call `f` with a read-only view of the current element of every
            /// slot, in slot order.
            ///
            /// Every argument is `&T`, including for slots whose sequence was
            /// bound mutably. Returns whatever `f` returns.
            pub fn apply_ref<'s, Func, R>(&'s self, f: Func) -> R
            where
                $( $S: ReadCursor + 's, )+
                Func: FnOnce($(&'s $S::Target),+) -> R,
            {
                let ($($S,)+) = &self.cursors;
                f($($S.current()),+)
            }
        }
    };
}

impl_lockstep_tuple! { A=0 }
impl_lockstep_tuple! { A=0 B=1 }
impl_lockstep_tuple! { A=0 B=1 C=2 }
impl_lockstep_tuple! { A=0 B=1 C=2 D=3 }
impl_lockstep_tuple! { A=0 B=1 C=2 D=3 E=4 }
impl_lockstep_tuple! { A=0 B=1 C=2 D=3 E=4 F=5 }
impl_lockstep_tuple! { A=0 B=1 C=2 D=3 E=4 F=5 G=6 }
impl_lockstep_tuple! { A=0 B=1 C=2 D=3 E=4 F=5 G=6 H=7 }
impl_lockstep_tuple! { A=0 B=1 C=2 D=3 E=4 F=5 G=6 H=7 I=8 }
impl_lockstep_tuple! { A=0 B=1 C=2 D=3 E=4 F=5 G=6 H=7 I=8 J=9 }
impl_lockstep_tuple! { A=0 B=1 C=2 D=3 E=4 F=5 G=6 H=7 I=8 J=9 K=10 }
impl_lockstep_tuple! { A=0 B=1 C=2 D=3 E=4 F=5 G=6 H=7 I=8 J=9 K=10 L=11 }
