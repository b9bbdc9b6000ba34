use core::mem::{self, MaybeUninit};

/// Extracts the values from an array of `MaybeUninit` containers.
///
/// # Safety
///
/// It is up to the caller to guarantee that all elements of the array are
/// in an initialized state.
///
/// Inlined version of: <https://doc.rust-lang.org/std/mem/union.MaybeUninit.html#method.array_assume_init>
pub(crate) unsafe fn array_assume_init<T, const N: usize>(array: [MaybeUninit<T>; N]) -> [T; N] {
    // SAFETY:
    // * The caller guarantees that all elements of the array are initialized
    // * `MaybeUninit<T>` and T are guaranteed to have the same layout
    // * `MaybeUninit` does not drop, so there are no double-frees
    // And thus the conversion is safe
    let ret = unsafe { (&array as *const _ as *const [T; N]).read() };
    mem::forget(array);
    ret
}

/// Split an array of pairs into a pair of arrays, visiting elements in order.
pub(crate) fn unzip_array<A, B, const N: usize>(pairs: [(A, B); N]) -> ([A; N], [B; N]) {
    let mut seconds: [MaybeUninit<B>; N] = core::array::from_fn(|_| MaybeUninit::uninit());
    let mut index = 0;
    let firsts = pairs.map(|(a, b)| {
        seconds[index].write(b);
        index += 1;
        a
    });
    debug_assert_eq!(index, N);

    // SAFETY: `map` visited every pair, so every slot of `seconds` was written.
    let seconds = unsafe { array_assume_init(seconds) };
    (firsts, seconds)
}
