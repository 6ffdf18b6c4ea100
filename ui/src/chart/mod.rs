mod view;
pub use view::ChartPanel;

mod table;
pub use table::DataTablePanel;

mod export;
pub use export::ChartExportPanel;

pub mod svg;

use crate::core::config::ChartConfig;
use crate::core::dataset::Dataset;
use crate::core::geometry::ChartGeometry;
use crate::core::palette::CategoryPalette;

/// Everything derived from one submitted dataset. Rebuilt from scratch on
/// every submission; the serialized markup is the single source of truth
/// for both the inline view and the SVG download.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartModel {
    pub dataset: Dataset,
    pub config: ChartConfig,
    pub geometry: ChartGeometry,
    pub palette: CategoryPalette,
    pub markup: String,
}

impl ChartModel {
    pub fn build(dataset: Dataset, config: ChartConfig) -> Self {
        let geometry = ChartGeometry::compute(&dataset, &config);
        let palette =
            CategoryPalette::from_categories(dataset.records.iter().map(|r| r.category.as_str()));
        let markup = svg::render(&dataset, &geometry, &palette, &config);
        Self {
            dataset,
            config,
            geometry,
            palette,
            markup,
        }
    }

    /// Markup with an opaque background, for raster capture.
    pub fn markup_with_background(&self, color: &str) -> String {
        svg::render_with_background(
            &self.dataset,
            &self.geometry,
            &self.palette,
            &self.config,
            Some(color),
        )
    }
}
