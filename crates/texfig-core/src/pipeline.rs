// File: crates/texfig-core/src/pipeline.rs
// Summary: End-to-end sequence: dataset, figure, bounds, layout, margins, export.

use std::path::PathBuf;

use tracing::{info_span, debug};

use crate::bounds::{date_to_num, DataBounds};
use crate::config::FigureConfig;
use crate::dataset::{parse_time_zone, Dataset};
use crate::error::Result;
use crate::export::ExportBackend;
use crate::figure::Figure;
use crate::ticks::{Formatter, Locator};

/// Build the sample figure described by `config`, laid out and ready to export.
pub fn build_figure(config: &FigureConfig) -> Result<Figure> {
    let section = &config.figure;
    let tz = parse_time_zone(&section.time_zone)?;
    let dataset = Dataset::sample(tz)?;
    let bounds = DataBounds::from_dataset(&dataset)?;

    let mut fig = Figure::new(section.width_in, section.height_in, config.style.clone());
    let xs: Vec<f64> = dataset.index().iter().map(date_to_num).collect();
    {
        let ax = fig.axes_mut();
        let col1 = dataset.column("col1")?;
        let col2 = dataset.column("col2")?;
        let line = ax.plot(&xs, &col1.values);
        if section.legend {
            line.set_label(col1.name.as_str());
        }
        let points = ax.scatter(&xs, &col2.values);
        if section.legend {
            points.set_label(col2.name.as_str());
            ax.legend(section.legend_title.clone());
        }
        ax.set_xlabel(section.x_label.as_str());
        ax.set_ylabel(section.y_label.as_str());
        ax.set_title(section.title.as_str());
        ax.x_axis.set_date_ticks(
            Locator::days(section.day_interval, tz),
            Formatter::date(section.date_format.as_str(), tz),
        );
        ax.apply_bounds(&bounds);
    }
    if let Some(sup) = &section.suptitle {
        fig.set_suptitle(sup.as_str());
    }

    fig.tight_layout(section.tight_pad);
    debug!(params = ?fig.subplot, "auto layout");
    fig.eliminate_whitespace();
    Ok(fig)
}

/// Build the figure and write it with `backend` into the configured output directory.
pub fn export(config: &FigureConfig, backend: &ExportBackend) -> Result<PathBuf> {
    let span = info_span!("export", backend = ?backend.kind());
    let _guard = span.enter();
    let fig = build_figure(config)?;
    let path = config.output_path(backend);
    backend.save(&fig, &path)?;
    Ok(path)
}
