use std::path::PathBuf;

use mcad_core::metadata::ImageMetadata;

/// Tabs of the details panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DetailsTab {
    #[default]
    Metadata,
    Analysis,
}

/// Browsing state: open data tree, selection and loaded image.
#[derive(Default)]
pub struct UIState {
    pub data_dir: Option<PathBuf>,
    pub folders: Vec<String>,
    pub selected_folder: Option<String>,

    /// Images of `images_folder`, which may lag `selected_folder` while loading.
    pub images: Vec<String>,
    pub images_folder: Option<String>,
    pub selected_image: Option<String>,

    /// Image currently shown, as (folder, file).
    pub loaded_image: Option<(String, String)>,
    pub metadata: Option<ImageMetadata>,
    pub metadata_text: String,

    pub details_tab: DetailsTab,

    /// Description of the running worker request (None = idle).
    pub busy: Option<String>,

    /// Log messages.
    pub log_messages: Vec<String>,
}

impl UIState {
    pub fn is_busy(&self) -> bool {
        self.busy.is_some()
    }

    pub fn add_log(&mut self, msg: String) {
        self.log_messages.push(msg);
    }

    /// Forget everything below the data directory (e.g. after opening a new one).
    pub fn clear_selection(&mut self) {
        self.selected_folder = None;
        self.images.clear();
        self.images_folder = None;
        self.selected_image = None;
        self.loaded_image = None;
        self.metadata = None;
        self.metadata_text.clear();
    }
}
