use morpho_image::{Image, ImageSize};
use morpho_imgproc::geodesic::{
    geodesic_distance_transform_with_progress, ChamferWeights, GeodesicDistanceParams,
};
use morpho_imgproc::progress::LogProgress;

/// Computes a geodesic distance map around a wall and prints it. Run with
/// `RUST_LOG=debug` to see the pass schedule.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let size = ImageSize {
        width: 24,
        height: 9,
    };

    // full-frame domain with a vertical wall leaving a gap at the bottom
    let mut mask = Image::<u8, 1>::from_size_val(size, 255)?;
    for y in 0..7 {
        mask.set_pixel(12, y, 0, 0)?;
    }

    let mut marker = Image::<u8, 1>::from_size_val(size, 0)?;
    marker.set_pixel(2, 4, 0, 255)?;

    let mut dst = Image::<f32, 1>::from_size_val(size, 0.0)?;
    let report = geodesic_distance_transform_with_progress(
        &marker,
        &mask,
        &mut dst,
        &ChamferWeights::<f32>::borgefors(),
        &GeodesicDistanceParams::default(),
        &mut LogProgress,
    )?;

    println!(
        "converged after {} modifying cycles, max distance {:.1}",
        report.iterations, report.max_within_mask
    );
    for y in 0..size.height {
        for x in 0..size.width {
            if mask.get_pixel(x, y, 0)? == 0 {
                print!("  ##");
            } else {
                print!("{:4.0}", dst.get_pixel(x, y, 0)?);
            }
        }
        println!();
    }

    Ok(())
}
