use tracing::info;

use aspectfit::{FitParams, fit_file};

use super::args::CliArgs;
use super::errors::AppError;

/// Preset (or defaults) first, then explicit flags on top.
fn resolve_params(args: &CliArgs) -> Result<FitParams, AppError> {
    let mut params = match &args.preset {
        Some(path) => FitParams::load_preset(path).map_err(|source| AppError::Preset {
            path: path.clone(),
            source,
        })?,
        None => FitParams::default(),
    };

    if let Some(width) = args.width {
        params.target.width = width;
    }
    if let Some(height) = args.height {
        params.target.height = height;
    }
    if let Some(filter) = args.filter {
        params.filter = filter;
    }
    if let Some(quality) = args.quality {
        params.jpeg_quality = quality;
    }

    params.validate()?;
    Ok(params)
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(std::io::stderr)
            .init();
    }

    let params = resolve_params(&args)?;
    info!(
        "Target {}x{}, filter {}, JPEG quality {}",
        params.target.width, params.target.height, params.filter, params.jpeg_quality
    );

    let report = fit_file(&args.input, &args.output, &params).map_err(AppError::from)?;
    info!(
        "Successfully processed: {:?} -> {:?} ({})",
        report.input, report.output, report.format
    );

    println!("Complete!");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use aspectfit::{ResampleFilter, TargetSpec};
    use clap::Parser;

    fn parse(extra: &[&str]) -> CliArgs {
        let mut argv = vec!["aspectfit", "in.png", "out.png"];
        argv.extend_from_slice(extra);
        CliArgs::try_parse_from(argv).unwrap()
    }

    #[test]
    fn defaults_without_flags() {
        assert_eq!(resolve_params(&parse(&[])).unwrap(), FitParams::default());
    }

    #[test]
    fn flags_override_preset() {
        let dir = tempfile::tempdir().unwrap();
        let preset = dir.path().join("card.json");
        let stored = FitParams {
            target: TargetSpec::new(800, 600).unwrap(),
            filter: ResampleFilter::Lanczos3,
            jpeg_quality: 70,
        };
        std::fs::write(&preset, stored.to_preset_string().unwrap()).unwrap();

        let preset_arg = preset.to_str().unwrap();
        let params = resolve_params(&parse(&["--preset", preset_arg, "--height", "450"])).unwrap();
        assert_eq!(params.target, TargetSpec::new(800, 450).unwrap());
        assert_eq!(params.filter, ResampleFilter::Lanczos3);
        assert_eq!(params.jpeg_quality, 70);
    }

    #[test]
    fn missing_preset_is_reported_with_its_path() {
        let err = resolve_params(&parse(&["--preset", "/no/such/preset.json"])).unwrap_err();
        assert!(matches!(err, AppError::Preset { .. }));
        assert!(err.to_string().contains("preset.json"));
    }

    #[test]
    fn degenerate_target_from_flags_is_rejected() {
        let err = resolve_params(&parse(&["--width", "1"])).unwrap_err();
        assert!(matches!(
            err,
            AppError::Fit(aspectfit::Error::InvalidTarget { width: 1, height: 300 })
        ));
    }
}
