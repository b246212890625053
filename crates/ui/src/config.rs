use std::path::{Path, PathBuf};

use quiz_core::model::ImageRef;

use crate::layout::Layout;

/// Presentation settings built once at startup and shared through context.
///
/// The quiz logic never sees any of this.
#[derive(Clone, Debug, PartialEq)]
pub struct UiConfig {
    pub window_title: String,
    pub start_title: String,
    pub width: u32,
    pub height: u32,
    pub assets_dir: PathBuf,
    pub font_file: String,
    pub background_file: String,
    /// Directory question image paths are resolved against.
    pub image_root: PathBuf,
    /// Open directly on the first question instead of the start screen.
    pub skip_start: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            window_title: "Chumash Vocabulary Quiz".to_string(),
            start_title: "Hebrew Grammar Quiz".to_string(),
            width: 800,
            height: 600,
            assets_dir: PathBuf::from("assets"),
            font_file: "PressStart2P-Regular.ttf".to_string(),
            background_file: "background.png".to_string(),
            image_root: PathBuf::from("."),
            skip_start: false,
        }
    }
}

impl UiConfig {
    #[must_use]
    pub fn layout(&self) -> Layout {
        Layout::new(f64::from(self.width), f64::from(self.height))
    }

    #[must_use]
    pub fn font_path(&self) -> PathBuf {
        self.assets_dir.join(&self.font_file)
    }

    #[must_use]
    pub fn background_path(&self) -> PathBuf {
        self.assets_dir.join(&self.background_file)
    }

    /// Source attribute for a question image.
    #[must_use]
    pub fn image_src(&self, image: &ImageRef) -> String {
        path_to_src(&image.resolve(&self.image_root))
    }

    /// `@font-face` rule registering the configured font as `QuizFont`.
    #[must_use]
    pub fn font_face_css(&self) -> String {
        format!(
            "@font-face {{ font-family: \"QuizFont\"; src: url(\"{}\"); }}",
            path_to_src(&self.font_path())
        )
    }

    /// Inline style for the quiz stage: fixed size and background image.
    #[must_use]
    pub fn stage_css(&self) -> String {
        format!(
            "width: {}px; height: {}px; background-image: url(\"{}\");",
            self.width,
            self.height,
            path_to_src(&self.background_path())
        )
    }
}

fn path_to_src(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}
