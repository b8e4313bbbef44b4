use morpho_image::Image;

use super::{ChamferValue, ChamferWeights};
use crate::progress::ProgressSink;

/// Kind of step between a pixel and one of its neighbors.
#[derive(Clone, Copy, Debug)]
enum StepKind {
    Orthogonal,
    Diagonal,
}

/// Causal neighbor offsets for the forward raster order: left, up, up-left,
/// up-right. The backward pass negates the offsets and reverses the
/// traversal, which reflects the set through 180 degrees.
///
/// Offsets that fall outside the grid are skipped, which yields exactly the
/// reduced neighbor sets of the first row, first column, and last column.
const CAUSAL_2D: [(i32, i32, StepKind); 4] = [
    (-1, 0, StepKind::Orthogonal),
    (0, -1, StepKind::Orthogonal),
    (-1, -1, StepKind::Diagonal),
    (1, -1, StepKind::Diagonal),
];

/// Traversal direction of one relaxation pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ScanDirection {
    /// Rows top to bottom, each row left to right.
    Forward,
    /// Rows bottom to top, each row right to left.
    Backward,
}

/// Run one relaxation pass over the distance buffer.
///
/// Every pixel whose mask value equals `mask_label` is updated from its
/// causal neighbors if that strictly decreases its value. Neighbor reads
/// are unconditional: a neighbor outside the mask still contributes its
/// value. Returns whether any pixel changed.
///
/// `dist` and `mask` must have the same size; the caller checks this before
/// the first pass.
pub(crate) fn relax_pass<T, P>(
    dist: &mut Image<T, 1>,
    mask: &Image<u8, 1>,
    mask_label: u8,
    weights: &ChamferWeights<T>,
    direction: ScanDirection,
    progress: &mut P,
) -> bool
where
    T: ChamferValue,
    P: ProgressSink,
{
    let width = dist.width() as i32;
    let height = dist.height() as i32;
    let sign = match direction {
        ScanDirection::Forward => 1,
        ScanDirection::Backward => -1,
    };

    let dist_buf = dist.as_slice_mut();
    let mask_buf = mask.as_slice();

    let mut modified = false;

    for row in 0..height {
        let y = match direction {
            ScanDirection::Forward => row,
            ScanDirection::Backward => height - 1 - row,
        };

        for col in 0..width {
            let x = match direction {
                ScanDirection::Forward => col,
                ScanDirection::Backward => width - 1 - col,
            };

            // only pixels inside the propagation domain are written
            let idx = (y * width + x) as usize;
            if mask_buf[idx] != mask_label {
                continue;
            }

            let current = dist_buf[idx];
            let mut best = current;

            for (dx, dy, kind) in CAUSAL_2D {
                let nx = x + sign * dx;
                let ny = y + sign * dy;
                if nx < 0 || nx >= width || ny < 0 || ny >= height {
                    continue;
                }

                let cost = match kind {
                    StepKind::Orthogonal => weights.orthogonal(),
                    StepKind::Diagonal => weights.diagonal(),
                };
                let candidate = dist_buf[(ny * width + nx) as usize].add_cost(cost);
                if candidate < best {
                    best = candidate;
                }
            }

            if best < current {
                dist_buf[idx] = best;
                modified = true;
            }
        }

        progress.progress((row + 1) as usize, height as usize);
    }

    modified
}

#[cfg(test)]
mod tests {
    use super::{relax_pass, ScanDirection};
    use crate::geodesic::ChamferWeights;
    use crate::progress::NoProgress;
    use morpho_image::{Image, ImageSize};

    const FG: u8 = 255;

    fn full_mask(width: usize, height: usize) -> Image<u8, 1> {
        Image::from_size_val(ImageSize { width, height }, FG).unwrap()
    }

    fn seeded_field(width: usize, height: usize, seed: (usize, usize)) -> Image<f32, 1> {
        let mut dist = Image::from_size_val(ImageSize { width, height }, f32::MAX).unwrap();
        dist.set_pixel(seed.0, seed.1, 0, 0.0).unwrap();
        dist
    }

    #[test]
    fn forward_pass_propagates_down_right_only() {
        let mask = full_mask(3, 3);
        let mut dist = seeded_field(3, 3, (1, 1));
        let weights = ChamferWeights::<f32>::chessboard();

        let modified = relax_pass(
            &mut dist,
            &mask,
            FG,
            &weights,
            ScanDirection::Forward,
            &mut NoProgress,
        );
        assert!(modified);

        // causal flow reaches the pixels after the seed in raster order
        assert_eq!(dist.get_pixel(2, 1, 0).unwrap(), 1.0);
        assert_eq!(dist.get_pixel(0, 2, 0).unwrap(), 1.0);
        assert_eq!(dist.get_pixel(1, 2, 0).unwrap(), 1.0);
        assert_eq!(dist.get_pixel(2, 2, 0).unwrap(), 1.0);
        // pixels before the seed are untouched by a single forward pass
        assert_eq!(dist.get_pixel(0, 0, 0).unwrap(), f32::MAX);
        assert_eq!(dist.get_pixel(1, 0, 0).unwrap(), f32::MAX);
        assert_eq!(dist.get_pixel(0, 1, 0).unwrap(), f32::MAX);
    }

    #[test]
    fn backward_pass_completes_the_field() {
        let mask = full_mask(3, 3);
        let mut dist = seeded_field(3, 3, (1, 1));
        let weights = ChamferWeights::<f32>::chessboard();

        relax_pass(
            &mut dist,
            &mask,
            FG,
            &weights,
            ScanDirection::Forward,
            &mut NoProgress,
        );
        relax_pass(
            &mut dist,
            &mask,
            FG,
            &weights,
            ScanDirection::Backward,
            &mut NoProgress,
        );

        for y in 0..3 {
            for x in 0..3 {
                let expected = if (x, y) == (1, 1) { 0.0 } else { 1.0 };
                assert_eq!(dist.get_pixel(x, y, 0).unwrap(), expected);
            }
        }
    }

    #[test]
    fn quiet_pass_reports_no_modification() {
        let mask = full_mask(3, 3);
        let mut dist = seeded_field(3, 3, (1, 1));
        let weights = ChamferWeights::<f32>::chessboard();

        for direction in [
            ScanDirection::Forward,
            ScanDirection::Backward,
            ScanDirection::Forward,
        ] {
            relax_pass(&mut dist, &mask, FG, &weights, direction, &mut NoProgress);
        }
        let modified = relax_pass(
            &mut dist,
            &mask,
            FG,
            &weights,
            ScanDirection::Backward,
            &mut NoProgress,
        );
        assert!(!modified);
    }

    #[test]
    fn passes_never_increase_values() {
        let mask = full_mask(4, 4);
        let mut dist = Image::from_size_val(ImageSize { width: 4, height: 4 }, 0.0f32).unwrap();
        let weights = ChamferWeights::<f32>::borgefors();

        for direction in [ScanDirection::Forward, ScanDirection::Backward] {
            let modified = relax_pass(&mut dist, &mask, FG, &weights, direction, &mut NoProgress);
            assert!(!modified);
        }
        assert!(dist.as_slice().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn non_domain_pixels_are_never_written() {
        let mut mask = full_mask(3, 1);
        mask.set_pixel(1, 0, 0, 0).unwrap();
        let mut dist = seeded_field(3, 1, (0, 0));
        let weights = ChamferWeights::<f32>::chessboard();

        relax_pass(
            &mut dist,
            &mask,
            FG,
            &weights,
            ScanDirection::Forward,
            &mut NoProgress,
        );

        // the hole keeps the sentinel, and its right neighbor reads it
        assert_eq!(dist.get_pixel(1, 0, 0).unwrap(), f32::MAX);
        assert_eq!(dist.get_pixel(2, 0, 0).unwrap(), f32::MAX);
    }
}
