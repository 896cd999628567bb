use super::Targets;
use ndarray::{ArrayBase, ArrayView2, Axis, Data, Ix1, Ix2};

impl<F, S: Data<Elem = F>> Targets for ArrayBase<S, Ix2> {
    type Elem = F;

    fn n_samples(&self) -> usize {
        self.len_of(Axis(0))
    }

    fn n_dimensions(&self) -> usize {
        self.len_of(Axis(1))
    }

    fn as_multi_dimensions(&self) -> ArrayView2<F> {
        self.view()
    }
}

impl<F, S: Data<Elem = F>> Targets for ArrayBase<S, Ix1> {
    type Elem = F;

    fn n_samples(&self) -> usize {
        self.len_of(Axis(0))
    }

    fn n_dimensions(&self) -> usize {
        1
    }

    fn as_multi_dimensions(&self) -> ArrayView2<F> {
        self.view().insert_axis(Axis(1))
    }
}

impl<T: Targets> Targets for &T {
    type Elem = T::Elem;

    fn n_samples(&self) -> usize {
        (*self).n_samples()
    }

    fn n_dimensions(&self) -> usize {
        (*self).n_dimensions()
    }

    fn as_multi_dimensions(&self) -> ArrayView2<Self::Elem> {
        (*self).as_multi_dimensions()
    }
}
