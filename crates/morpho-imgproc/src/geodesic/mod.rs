//! Chamfer geodesic distance transform.
//!
//! Given a binary mask describing the propagation domain and a marker image
//! whose nonzero pixels act as seeds, computes for every domain pixel an
//! approximate geodesic distance to the nearest seed. Distances are
//! propagated by alternating forward and backward raster sweeps over a
//! 3-by-3 chamfer neighborhood until a full cycle changes nothing, so
//! arbitrarily shaped domains (concavities, corridors, disconnected parts)
//! converge to the true fixpoint.

/// Error types used for geodesic distance transforms.
pub mod error;
pub use error::GeodesicError;

/// Numeric domain abstraction for distance values.
pub mod value;
pub use value::ChamferValue;

/// Chamfer weight pairs and presets.
pub mod weights;
pub use weights::ChamferWeights;

mod scan;

use morpho_image::{Image, ImageError};
use rayon::prelude::*;

use crate::progress::{NoProgress, ProgressSink};
use scan::{relax_pass, ScanDirection};

/// Default mask label marking pixels that belong to the propagation domain.
pub const DEFAULT_MASK_LABEL: u8 = 255;

/// Parameters of the geodesic distance transform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeodesicDistanceParams<T> {
    /// Divide the final map by the orthogonal weight, turning chamfer units
    /// into approximate pixel units.
    pub normalize: bool,
    /// Mask pixels equal to this label belong to the propagation domain.
    pub mask_label: u8,
    /// The value assigned to pixels not (yet) reached by the propagation.
    pub background: T,
}

impl<T> Default for GeodesicDistanceParams<T>
where
    T: ChamferValue,
{
    fn default() -> Self {
        Self {
            normalize: true,
            mask_label: DEFAULT_MASK_LABEL,
            background: T::max_value(),
        }
    }
}

/// Summary of one geodesic distance computation.
///
/// The iteration count and the maximum reached distance are observational:
/// callers use them for convergence diagnostics and display-range
/// calibration, they are not part of the numeric contract.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeodesicDistanceReport<T> {
    /// Number of forward/backward cycles that changed at least one pixel.
    pub iterations: usize,
    /// Maximum distance among domain pixels, excluding unreached ones.
    pub max_within_mask: T,
}

/// Compute the chamfer geodesic distance map of a marker image within a mask.
///
/// Every pixel of `dst` whose mask value equals `params.mask_label` receives
/// the approximate geodesic distance to the nearest nonzero marker pixel,
/// measured with the given chamfer weights. Domain pixels that no path of
/// domain pixels connects to a seed keep `params.background` (divided by the
/// orthogonal weight when `params.normalize` is set). Pixels outside the
/// domain are never written, but their values are read as neighbor
/// contributions, so a seed placed outside the domain still feeds adjacent
/// domain pixels.
///
/// # Arguments
///
/// * `marker` - The seed image; nonzero pixels start at distance zero.
/// * `mask` - The label image backing the propagation domain.
/// * `dst` - The output distance map, overwritten entirely.
/// * `weights` - The chamfer weight pair.
/// * `params` - Normalization flag, mask label, and background value.
///
/// # Returns
///
/// A report with the modifying-cycle count and the maximum distance reached
/// within the mask.
///
/// # Errors
///
/// Returns an error if `marker`, `mask`, and `dst` do not share the same
/// size. The relaxation itself cannot fail.
///
/// # Example
///
/// ```
/// use morpho_image::{Image, ImageSize};
/// use morpho_imgproc::geodesic::{
///     geodesic_distance_transform, ChamferWeights, GeodesicDistanceParams,
/// };
///
/// let size = ImageSize { width: 3, height: 3 };
/// let mut marker = Image::<u8, 1>::from_size_val(size, 0).unwrap();
/// marker.set_pixel(1, 1, 0, 255).unwrap();
/// let mask = Image::<u8, 1>::from_size_val(size, 255).unwrap();
/// let mut dst = Image::<f32, 1>::from_size_val(size, 0.0).unwrap();
///
/// let report = geodesic_distance_transform(
///     &marker,
///     &mask,
///     &mut dst,
///     &ChamferWeights::<f32>::chessboard(),
///     &GeodesicDistanceParams::default(),
/// )
/// .unwrap();
///
/// assert_eq!(dst.get_pixel(0, 0, 0).unwrap(), 1.0);
/// assert_eq!(report.max_within_mask, 1.0);
/// ```
pub fn geodesic_distance_transform<T>(
    marker: &Image<u8, 1>,
    mask: &Image<u8, 1>,
    dst: &mut Image<T, 1>,
    weights: &ChamferWeights<T>,
    params: &GeodesicDistanceParams<T>,
) -> Result<GeodesicDistanceReport<T>, GeodesicError>
where
    T: ChamferValue,
{
    geodesic_distance_transform_with_progress(marker, mask, dst, weights, params, &mut NoProgress)
}

/// Compute the chamfer geodesic distance map, reporting progress.
///
/// Same operation as [`geodesic_distance_transform`], with phase and row
/// progress events sent to `progress`. Events never affect the output; they
/// are the only observation point between passes, so a caller wishing to
/// abort can only do so at pass granularity.
pub fn geodesic_distance_transform_with_progress<T, P>(
    marker: &Image<u8, 1>,
    mask: &Image<u8, 1>,
    dst: &mut Image<T, 1>,
    weights: &ChamferWeights<T>,
    params: &GeodesicDistanceParams<T>,
    progress: &mut P,
) -> Result<GeodesicDistanceReport<T>, GeodesicError>
where
    T: ChamferValue,
    P: ProgressSink,
{
    if marker.size() != mask.size() {
        return Err(ImageError::InvalidImageSize(
            mask.width(),
            mask.height(),
            marker.width(),
            marker.height(),
        )
        .into());
    }
    if dst.size() != mask.size() {
        return Err(ImageError::InvalidImageSize(
            mask.width(),
            mask.height(),
            dst.width(),
            dst.height(),
        )
        .into());
    }

    // seeds are marker-driven only, the mask is not consulted here
    progress.phase("Initialization");
    for (dst_val, marker_val) in dst.as_slice_mut().iter_mut().zip(marker.as_slice().iter()) {
        *dst_val = if *marker_val == 0 {
            params.background
        } else {
            T::zero()
        };
    }

    let mut iterations = 0;
    loop {
        progress.phase(&format!("Forward iteration {}", iterations));
        let forward = relax_pass(
            dst,
            mask,
            params.mask_label,
            weights,
            ScanDirection::Forward,
            progress,
        );

        progress.phase(&format!("Backward iteration {}", iterations));
        let backward = relax_pass(
            dst,
            mask,
            params.mask_label,
            weights,
            ScanDirection::Backward,
            progress,
        );

        if !forward && !backward {
            break;
        }
        iterations += 1;
    }

    log::debug!(
        "geodesic distance transform converged after {} modifying cycles",
        iterations
    );

    let mut unreached = params.background;
    if params.normalize {
        progress.phase("Normalize map");
        let w0 = weights.orthogonal();
        dst.as_slice_mut()
            .par_iter_mut()
            .for_each(|val| *val = val.div_by(w0));
        unreached = unreached.div_by(w0);
    }

    progress.phase("Compute max within mask");
    let max = max_within_mask(dst, mask, params.mask_label, unreached)?;

    Ok(GeodesicDistanceReport {
        iterations,
        max_within_mask: max,
    })
}

/// Find the maximum value of a distance map within a mask.
///
/// Pixels whose mask value differs from `mask_label` and pixels holding the
/// `unreached` background value are skipped. Returns zero when the mask
/// selects no reached pixel. Used for display-range calibration.
///
/// # Errors
///
/// Returns an error if `dist` and `mask` do not share the same size.
pub fn max_within_mask<T>(
    dist: &Image<T, 1>,
    mask: &Image<u8, 1>,
    mask_label: u8,
    unreached: T,
) -> Result<T, GeodesicError>
where
    T: ChamferValue,
{
    if dist.size() != mask.size() {
        return Err(ImageError::InvalidImageSize(
            mask.width(),
            mask.height(),
            dist.width(),
            dist.height(),
        )
        .into());
    }

    let mut max = T::zero();
    for (val, label) in dist.as_slice().iter().zip(mask.as_slice().iter()) {
        if *label != mask_label || *val == unreached {
            continue;
        }
        if *val > max {
            max = *val;
        }
    }

    Ok(max)
}
