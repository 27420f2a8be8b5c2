//! The [`Mapper`] entry point.

use tagwright_core::{ScriptDetector, WeightedScriptDetector};

use crate::config::Settings;

/// Maps MusicBrainz JSON nodes onto metadata records.
///
/// A mapper owns the user [`Settings`] and the script detector consulted
/// for script-based translation exceptions. It holds no other state, so a
/// single mapper can serve any number of documents.
#[derive(Debug)]
pub struct Mapper {
    settings: Settings,
    scripts: Box<dyn ScriptDetector + Send + Sync>,
}

impl Mapper {
    /// Create a mapper using the block-table script detector.
    pub fn new(settings: Settings) -> Self {
        Self::with_script_detector(settings, WeightedScriptDetector::default())
    }

    /// Create a mapper with a custom script detector.
    pub fn with_script_detector<D>(settings: Settings, detector: D) -> Self
    where
        D: ScriptDetector + Send + Sync + 'static,
    {
        Self {
            settings,
            scripts: Box::new(detector),
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub(crate) fn script_detector(&self) -> &dyn ScriptDetector {
        self.scripts.as_ref()
    }
}

impl Default for Mapper {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}
