use anyhow::{Context, Result};
use strided_vector::{view_array_mut, Strided, StridedMut, Vector, VectorView};

fn main() -> Result<()> {
    env_logger::init();

    // Owned buffer, then a window into it.
    let mut v: Vector<i32> = Vector::calloc(5).context("allocating demo vector")?;
    for (i, x) in [10, 20, 30, 40, 50].into_iter().enumerate() {
        v.set(i, x);
    }
    v.subvector_mut(1, 3).scale(2);
    log::info!("after scaling the window: {:?}", v.to_vec());
    v.print()?;

    // Every other element of an interleaved buffer.
    let interleaved = [1.0, -1.0, 2.0, -1.0, 3.0, -1.0, 4.0];
    let evens = VectorView::with_stride(&interleaved, 4, 2).context("building view")?;

    let mut buffer = [0.5f64; 4];
    let mut dense = view_array_mut(&mut buffer, 4);
    dense.add(&evens);
    dense.add_constant(1.0);
    dense.print()?;

    log::info!("NaN present: {}", dense.any_is_nan());
    v.release();
    Ok(())
}
