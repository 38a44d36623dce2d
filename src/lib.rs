#![doc = r#"
aspectfit — crop-and-resize images to a fixed target box.

Every image is brought to exactly `width x height` pixels without distortion: it is
scaled uniformly until it covers the target box, the axis that overshoots is cropped
around its center, and the crop is resampled to the final size. The default box is
500x300. The crate powers the `aspectfit` CLI and can be embedded in your own Rust
applications.

Add dependency
--------------
```toml
[dependencies]
aspectfit = "0.1"
```

Quick start: fit a file to a file
---------------------------------
```rust,no_run
use std::path::Path;
use aspectfit::{fit_file, FitParams, ResampleFilter, TargetSpec};

fn main() -> aspectfit::Result<()> {
    let params = FitParams {
        target: TargetSpec::new(500, 300)?,
        filter: ResampleFilter::Bilinear,
        jpeg_quality: 90,
    };

    let report = fit_file(Path::new("photo.jpg"), Path::new("card.png"), &params)?;
    println!("{} -> {:?}", report.plan.mode, report.output);
    Ok(())
}
```

Fit in memory
-------------
```rust
use aspectfit::{fit_image, CropMode, FitParams};
use image::{Rgb, RgbImage};

fn main() -> aspectfit::Result<()> {
    let wide = RgbImage::from_pixel(1000, 400, Rgb([0, 128, 255]));
    let (fitted, plan) = fit_image(&wide, &FitParams::default())?;

    assert_eq!(fitted.dimensions(), (500, 300));
    assert_eq!(plan.mode, CropMode::CutWidth);
    assert_eq!((plan.scaled_width, plan.scaled_height), (750, 300));
    Ok(())
}
```

Error handling
--------------
All public functions return `aspectfit::Result<T>`; match on `aspectfit::Error` to
tell input problems from output problems.

```rust,no_run
use std::path::Path;
use aspectfit::{fit_file, Error, FitParams};

fn main() {
    match fit_file(Path::new("/missing.png"), Path::new("/out.png"), &FitParams::default()) {
        Ok(_) => {}
        Err(Error::Decode { path, .. }) => eprintln!("cannot read {:?}", path),
        Err(Error::Encode { path, message }) => eprintln!("cannot write {:?}: {}", path, message),
        Err(other) => eprintln!("Other error: {other}"),
    }
}
```

Useful modules
--------------
- [`api`] — high-level entry points.
- [`core`] — parameters, fit planning, resize/crop/save primitives.
- [`types`] — enums (`CropMode`, `ResampleFilter`, `OutputFormat`).
- [`io`] — decoding and format-specific writers.
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
// Types
pub use core::params::{FitParams, TargetSpec};
pub use core::processing::plan::{CropRect, FitPlan, plan_fit};
pub use error::{Error, Result};
pub use types::{CropMode, OutputFormat, ResampleFilter};

// High-level API re-exports
pub use api::{FitReport, fit_dynamic, fit_file, fit_image};
