//! Application state and logic.

use std::path::{Path, PathBuf};

use crate::data::Point;
use crate::error::{PlotError, Result};
use crate::parser::RecordParser;
use crate::plot::{PixelRect, Scene};
use crate::util::LayoutConfig;

/// Application state.
#[derive(Debug)]
pub struct App {
    /// Loaded file path.
    pub file_path: PathBuf,
    /// Axis and points to draw.
    pub scene: Scene,
    /// Layout configuration.
    pub layout: LayoutConfig,
    /// Status message.
    pub status: String,
    /// Set when the user asks to quit.
    pub should_quit: bool,
}

impl App {
    /// Create an application around already parsed points.
    pub fn new(file_path: PathBuf, points: Vec<Point>, layout: LayoutConfig) -> Self {
        let scene = Scene::new(points, &layout.axis);
        let mut app = Self {
            file_path,
            scene,
            layout,
            status: String::new(),
            should_quit: false,
        };
        app.status = format!("{} loaded", app.file_name());
        app
    }

    /// Read and parse `path` once. Any failure aborts the load.
    pub fn load(path: &Path, parser: &RecordParser, layout: LayoutConfig) -> Result<Self> {
        tracing::info!("Loading {}", path.display());

        let bytes = std::fs::read(path).map_err(|e| PlotError::file_open(path.to_path_buf(), e))?;
        let content = String::from_utf8(bytes).map_err(|e| {
            tracing::error!("{} is not UTF-8 text: {}", path.display(), e);
            PlotError::invalid_encoding(path.to_path_buf(), e)
        })?;
        let points = parser.parse(&content).map_err(|e| {
            tracing::error!("Error loading {}: {}", path.display(), e);
            e
        })?;

        let app = Self::new(path.to_path_buf(), points, layout);
        tracing::info!("{}", app.summary());
        Ok(app)
    }

    /// The file name for titles.
    pub fn file_name(&self) -> String {
        self.file_path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "file".to_string())
    }

    /// One-line description of the loaded plot.
    pub fn summary(&self) -> String {
        let axis = self.scene.axis();
        format!(
            "{} points, x max {} (scale {}), y max {} (scale {})",
            self.scene.point_count(),
            axis.x_max,
            axis.x_scale,
            axis.y_max,
            axis.y_scale
        )
    }

    /// Pixel bounds of a plot area of `columns` x `rows` terminal cells.
    pub fn surface_bounds(&self, columns: u16, rows: u16) -> PixelRect {
        let canvas = &self.layout.canvas;
        PixelRect::new(
            0.0,
            0.0,
            f64::from(columns) * f64::from(canvas.dots_per_column),
            f64::from(rows) * f64::from(canvas.dots_per_row),
        )
    }

    /// Request exit from the event loop.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Rgb;
    use crate::parser::ParserConfig;
    use std::io::Write;

    #[test]
    fn load_builds_scene_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "3 5\n10 2 {{255,0,0}} [3]").unwrap();

        let app = App::load(file.path(), &RecordParser::default(), LayoutConfig::default()).unwrap();
        assert_eq!(app.scene.point_count(), 2);
        assert_eq!(
            app.summary(),
            "2 points, x max 10 (scale 1), y max 5 (scale 1)"
        );
    }

    #[test]
    fn load_reports_missing_file() {
        let err = App::load(
            Path::new("/definitely/not/here.txt"),
            &RecordParser::default(),
            LayoutConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(err, PlotError::FileNotFound { .. }));
    }

    #[test]
    fn load_fails_whole_file_on_bad_record() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "1 2\n3 oops").unwrap();

        let err = App::load(file.path(), &RecordParser::default(), LayoutConfig::default()).unwrap_err();
        assert!(matches!(err, PlotError::MalformedFile { record: 2, .. }));
    }

    #[test]
    fn load_reports_binary_input_as_malformed() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[b'1', b' ', 0xff, 0xfe, b' ', b'2']).unwrap();

        let err = App::load(file.path(), &RecordParser::default(), LayoutConfig::default()).unwrap_err();
        assert!(matches!(err, PlotError::InvalidEncoding { .. }));
        assert!(err.to_string().starts_with("Malformed file"));
    }

    #[test]
    fn cli_defaults_apply_until_the_file_overrides_them() {
        let config = ParserConfig::from_options(Some(3), Some(Rgb::new(1, 2, 3)), None).unwrap();
        let parser = RecordParser::new(config);

        let mut plain = tempfile::NamedTempFile::new().unwrap();
        writeln!(plain, "1 1\n2 2 {{9,9,9}} [4]").unwrap();
        let app = App::load(plain.path(), &parser, LayoutConfig::default()).unwrap();
        let styles: Vec<_> = app.scene.points().map(|p| (p.size, p.color)).collect();
        assert_eq!(styles, vec![(3, Rgb::new(1, 2, 3)), (4, Rgb::new(9, 9, 9))]);

        let mut headed = tempfile::NamedTempFile::new().unwrap();
        writeln!(headed, "##SIZEDEFAULT: 11\n##COLORDEFAULT: {{5,5,5}}\n1 1").unwrap();
        let app = App::load(headed.path(), &parser, LayoutConfig::default()).unwrap();
        let styles: Vec<_> = app.scene.points().map(|p| (p.size, p.color)).collect();
        assert_eq!(styles, vec![(11, Rgb::new(5, 5, 5))]);
    }

    #[test]
    fn surface_is_two_by_four_dots_per_cell() {
        let app = App::new(PathBuf::from("p.txt"), Vec::new(), LayoutConfig::default());
        assert_eq!(app.surface_bounds(80, 20), PixelRect::new(0.0, 0.0, 160.0, 80.0));
        assert_eq!(app.status, "p.txt loaded");
    }
}
