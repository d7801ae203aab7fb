use clap::Parser;
use serde_json::json;

use crate::formats::{read_raster, write_raster};
use crate::model::{EditorConfig, visible_pixel_count};
use crate::script::{load_script, run_script, save_report};
use crate::session::{EditSession, MaskFileSegmenter, Segmenter, apply_mask};

use super::types::{Cli, Commands, RasterInfo};

pub fn run_cli() -> Result<(), String> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Info { input } => {
            let raster = read_raster(&input).map_err(|error| error.to_string())?;
            let (width, height) = raster.dimensions();
            let visible_pixels = visible_pixel_count(&raster);
            let info = RasterInfo {
                width,
                height,
                visible_pixels,
                transparent_pixels: (width as usize * height as usize) - visible_pixels,
                source: input.display().to_string(),
            };
            println!(
                "{}",
                serde_json::to_string_pretty(&info).map_err(|error| error.to_string())?
            );
        }
        Commands::Apply {
            original,
            mask,
            output,
        } => {
            let original = read_raster(&original).map_err(|error| error.to_string())?;
            let mask = MaskFileSegmenter::new(mask)
                .segment(&original)
                .map_err(|error| error.to_string())?;
            let masked = apply_mask(&original, &mask).map_err(|error| error.to_string())?;
            write_raster(&output, &masked).map_err(|error| error.to_string())?;
            println!("{}", json!({"status": "ok", "output": output}));
        }
        Commands::Edit {
            original,
            mask,
            script,
            output,
            report,
            config,
        } => {
            let config = match config {
                Some(path) => EditorConfig::load(&path).map_err(|error| error.to_string())?,
                None => EditorConfig::default(),
            };
            let script = load_script(&script).map_err(|error| error.to_string())?;
            let original = read_raster(&original).map_err(|error| error.to_string())?;
            let segmenter = MaskFileSegmenter::new(mask);
            let mut session = EditSession::from_segmenter(original, &segmenter, config)
                .map_err(|error| error.to_string())?;
            let run_report =
                run_script(&script, &mut session).map_err(|error| error.to_string())?;
            session
                .export_png(&output)
                .map_err(|error| error.to_string())?;
            if let Some(report_path) = report {
                save_report(report_path, &run_report).map_err(|error| error.to_string())?;
            }
            println!(
                "{}",
                serde_json::to_string_pretty(&run_report).map_err(|error| error.to_string())?
            );
        }
    }

    Ok(())
}
