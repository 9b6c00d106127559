// Render module: chart layout data and the backends that draw it.

pub mod layout;
pub mod svg;

pub use layout::ChartLayout;
pub use svg::SvgRenderer;

use crate::model::RenderError;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

pub trait Renderer {
    fn render(&self, layout: &ChartLayout, path: &Path) -> Result<(), RenderError>;
}

/// File name that carries the highest mr value of the run.
pub fn artifact_name(highest_mr: u64) -> String {
    format!("class_mr_{}_visualization.svg", highest_mr)
}

/// Renders into `dir`, creating it if needed, and returns the written path.
pub fn render_to_dir<R: Renderer>(
    renderer: &R,
    layout: &ChartLayout,
    dir: &Path,
) -> Result<PathBuf, RenderError> {
    fs::create_dir_all(dir)?;
    let path = dir.join(artifact_name(layout.highest_mr));
    renderer.render(layout, &path)?;
    info!("Chart saved as: {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::BatchAnalyzer;
    use crate::config::AppConfig;
    use std::cell::RefCell;

    struct Recording(RefCell<Vec<PathBuf>>);

    impl Renderer for Recording {
        fn render(&self, _layout: &ChartLayout, path: &Path) -> Result<(), RenderError> {
            self.0.borrow_mut().push(path.to_path_buf());
            Ok(())
        }
    }

    struct Broken;

    impl Renderer for Broken {
        fn render(&self, _layout: &ChartLayout, _path: &Path) -> Result<(), RenderError> {
            Err(RenderError::Backend("disk on fire".into()))
        }
    }

    fn layout_for(numbers: &[u64]) -> ChartLayout {
        let summary = BatchAnalyzer::new().analyze(numbers).unwrap();
        ChartLayout::build(&summary, &AppConfig::default()).unwrap()
    }

    #[test]
    fn name_encodes_highest_mr() {
        assert_eq!(artifact_name(3), "class_mr_3_visualization.svg");
        assert_eq!(artifact_name(0), "class_mr_0_visualization.svg");
    }

    #[test]
    fn renders_into_a_created_directory() {
        let dir = std::env::temp_dir().join(format!("mr_classes_render_{}", std::process::id()));
        let renderer = Recording(RefCell::new(Vec::new()));
        let path = render_to_dir(&renderer, &layout_for(&[3, 7]), &dir).unwrap();
        assert_eq!(path, dir.join("class_mr_3_visualization.svg"));
        assert!(dir.is_dir());
        assert_eq!(renderer.0.borrow().as_slice(), &[path]);
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn backend_failure_is_propagated() {
        let err = render_to_dir(&Broken, &layout_for(&[3]), &std::env::temp_dir()).unwrap_err();
        assert!(matches!(err, RenderError::Backend(_)));
    }
}
