use ::quickcheck::{Arbitrary, Gen};
use compare::Compare;

use super::{AvlSet, RbSet};

impl<T, C> Arbitrary for AvlSet<T, C>
where
    T: Arbitrary,
    C: 'static + Clone + Compare<T> + Default + Send,
{
    fn arbitrary(g: &mut Gen) -> Self {
        Vec::<T>::arbitrary(g).into_iter().collect()
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let vec: Vec<T> = self.iter().cloned().collect();
        Box::new(vec.shrink().map(|vec| vec.into_iter().collect()))
    }
}

impl<T, C> Arbitrary for RbSet<T, C>
where
    T: Arbitrary,
    C: 'static + Clone + Compare<T> + Default + Send,
{
    fn arbitrary(g: &mut Gen) -> Self {
        Vec::<T>::arbitrary(g).into_iter().collect()
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let vec: Vec<T> = self.iter().cloned().collect();
        Box::new(vec.shrink().map(|vec| vec.into_iter().collect()))
    }
}
