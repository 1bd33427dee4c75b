#[cfg(feature = "parallel")]
pub use rayon::prelude;

/// Sequential stand-ins for the slice entry points of rayon. Everything after
/// `par_iter`/`par_iter_mut` is a plain std iterator, so `zip`, `filter`,
/// `map`, `for_each` and `collect` keep the same meaning and order.
#[cfg(not(feature = "parallel"))]
pub mod prelude {
    pub trait IntoParallelRefIterator<'data> {
        type Iter: Iterator;

        fn par_iter(&'data self) -> Self::Iter;
    }

    impl<'data, T: 'data> IntoParallelRefIterator<'data> for [T] {
        type Iter = std::slice::Iter<'data, T>;

        fn par_iter(&'data self) -> Self::Iter {
            self.iter()
        }
    }

    pub trait IntoParallelRefMutIterator<'data> {
        type Iter: Iterator;

        fn par_iter_mut(&'data mut self) -> Self::Iter;
    }

    impl<'data, T: 'data> IntoParallelRefMutIterator<'data> for [T] {
        type Iter = std::slice::IterMut<'data, T>;

        fn par_iter_mut(&'data mut self) -> Self::Iter {
            self.iter_mut()
        }
    }
}
