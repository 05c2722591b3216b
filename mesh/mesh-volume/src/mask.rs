//! Binary inclusion masks built from voxel labels.

use crate::grid::ScalarGrid;
use crate::volume::LabelVolume;

/// Build a binary mask selecting voxels by label.
///
/// With no labels (or an empty list) every non-background voxel is
/// included. Otherwise a voxel is included when its label equals one of
/// `labels` exactly. Included voxels are 1.0, the rest 0.0.
///
/// # Example
///
/// ```
/// use mesh_volume::{build_mask, LabelVolume};
///
/// let volume = LabelVolume::from_vec((4, 1, 1), vec![0u8, 1, 2, 3]).unwrap();
///
/// let all = build_mask(&volume, None);
/// assert_eq!(all.as_slice(), &[0.0, 1.0, 1.0, 1.0]);
///
/// let some = build_mask(&volume, Some(&[1, 3]));
/// assert_eq!(some.as_slice(), &[0.0, 1.0, 0.0, 1.0]);
/// ```
#[must_use]
pub fn build_mask<T>(volume: &LabelVolume<T>, labels: Option<&[T]>) -> ScalarGrid
where
    T: Copy + PartialEq + Default,
{
    let background = T::default();
    let included = |v: T| match labels {
        Some(set) if !set.is_empty() => set.contains(&v),
        _ => v != background,
    };

    let mut mask = ScalarGrid::new(volume.dimensions());
    for (out, &v) in mask.as_mut_slice().iter_mut().zip(volume.as_slice()) {
        if included(v) {
            *out = 1.0;
        }
    }
    mask
}

/// Number of mask voxels above one half.
#[must_use]
pub fn count_included(mask: &ScalarGrid) -> usize {
    mask.as_slice().iter().filter(|&&v| v > 0.5).count()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn default_selects_non_background() {
        let volume = LabelVolume::from_vec((3, 1, 1), vec![0i16, -2, 7]).unwrap();
        let mask = build_mask(&volume, None);
        assert_eq!(mask.as_slice(), &[0.0, 1.0, 1.0]);
        assert_eq!(count_included(&mask), 2);
    }

    #[test]
    fn empty_label_list_behaves_like_none() {
        let volume = LabelVolume::from_vec((3, 1, 1), vec![0u8, 4, 0]).unwrap();
        assert_eq!(build_mask(&volume, Some(&[])), build_mask(&volume, None));
    }

    #[test]
    fn labels_match_exactly() {
        let volume = LabelVolume::from_vec((4, 1, 1), vec![1.0f32, 1.5, 2.0, 0.0]).unwrap();
        let mask = build_mask(&volume, Some(&[1.5, 0.0]));
        assert_eq!(mask.as_slice(), &[0.0, 1.0, 0.0, 1.0]);
    }

    #[test]
    fn shape_preserved_and_input_untouched() {
        let volume = LabelVolume::from_fn((2, 3, 4), |i, j, k| u8::from((i + j + k) % 2 == 0));
        let before = volume.clone();
        let mask = build_mask(&volume, Some(&[1]));
        assert_eq!(mask.dimensions(), (2, 3, 4));
        assert_eq!(volume, before);
        assert_eq!(count_included(&mask), 12);
    }
}
