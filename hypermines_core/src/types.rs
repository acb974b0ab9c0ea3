use ndarray::ArrayD;
use smallvec::{SmallVec, smallvec};

/// Single coordinate axis component.
pub type Axis = usize;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = usize;

/// N-dimensional coordinate, one component per axis.
///
/// Inline up to four axes so common boards never touch the heap.
pub type Coord = SmallVec<[Axis; 4]>;

/// Board shape, one extent per axis.
pub type Shape = SmallVec<[Axis; 4]>;

/// Saturating product of all axis extents.
pub fn total_cells(shape: &[Axis]) -> CellCount {
    shape.iter().copied().fold(1, CellCount::saturating_mul)
}

/// Iterator over every coordinate of a board shape, row-major, last axis
/// varying fastest. The sequence is the same on every call for a shape.
#[derive(Debug)]
pub struct CoordIter {
    shape: Shape,
    next: Option<Coord>,
}

pub fn iter_coords(shape: &[Axis]) -> CoordIter {
    let next = shape
        .iter()
        .all(|&extent| extent > 0)
        .then(|| smallvec![0; shape.len()]);
    CoordIter {
        shape: Shape::from_slice(shape),
        next,
    }
}

impl Iterator for CoordIter {
    type Item = Coord;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        let mut succ = current.clone();
        for axis in (0..succ.len()).rev() {
            succ[axis] += 1;
            if succ[axis] < self.shape[axis] {
                self.next = Some(succ);
                break;
            }
            succ[axis] = 0;
        }
        Some(current)
    }
}

/// Applies the offsets encoded by `code` (one base-3 digit per axis, digit
/// minus one giving the shift) to `center`, returning a value only when
/// every axis remains in bounds.
fn apply_offsets(center: &[Axis], bounds: &[Axis], mut code: usize) -> Option<Coord> {
    let mut next = Coord::from_slice(center);
    for axis in (0..center.len()).rev() {
        let delta = (code % 3) as isize - 1;
        code /= 3;

        let shifted = center[axis].checked_add_signed(delta)?;
        if shifted >= bounds[axis] {
            return None;
        }
        next[axis] = shifted;
    }
    Some(next)
}

/// Iterator over the Moore neighborhood of `center` clipped to `bounds`:
/// every coordinate reachable by shifting each axis by -1, 0 or +1,
/// the center itself included.
#[derive(Debug)]
pub struct NeighborIter {
    center: Coord,
    bounds: Shape,
    index: usize,
    total: usize,
}

pub fn iter_neighbors(center: &[Axis], bounds: &[Axis]) -> NeighborIter {
    NeighborIter {
        center: Coord::from_slice(center),
        bounds: Shape::from_slice(bounds),
        index: 0,
        total: 3usize.pow(center.len() as u32),
    }
}

impl Iterator for NeighborIter {
    type Item = Coord;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.index >= self.total {
                return None;
            }

            let next_item = apply_offsets(&self.center, &self.bounds, self.index);
            self.index += 1;

            if next_item.is_some() {
                return next_item;
            }
        }
    }
}

pub trait NeighborIterExt {
    fn iter_neighbors(&self, center: &[Axis]) -> NeighborIter;
}

impl<T> NeighborIterExt for ArrayD<T> {
    fn iter_neighbors(&self, center: &[Axis]) -> NeighborIter {
        iter_neighbors(center, self.shape())
    }
}
