use serde_json::Value;
use tagwright_core::Metadata;

use crate::mapper::Mapper;
use crate::node::{array_field, str_field};
use crate::relations::DjMixIndex;

impl Mapper {
    /// Map a work node: ID, languages, title, disambiguation, and the
    /// work's own relations (composers, lyricists, ...).
    pub fn work_to_metadata(&self, work: &Value, m: &mut Metadata) -> DjMixIndex {
        let mut dj_mix = DjMixIndex::default();
        self.map_work(work, m, &mut dj_mix);
        dj_mix
    }

    pub(crate) fn map_work(&self, work: &Value, m: &mut Metadata, dj_mix: &mut DjMixIndex) {
        if let Some(id) = str_field(work, "id") {
            m.add_unique("musicbrainz_workid", id);
        }
        match work.get("languages") {
            Some(Value::Array(languages)) => {
                for language in languages.iter().filter_map(Value::as_str) {
                    m.add_unique("language", language);
                }
            }
            _ => {
                if let Some(language) = str_field(work, "language") {
                    m.add_unique("language", language);
                }
            }
        }
        if let Some(title) = str_field(work, "title") {
            m.add_unique("work", title);
        }
        if let Some(comment) = str_field(work, "disambiguation") {
            m.add_unique("~workcomment", comment);
        }
        self.map_relations(array_field(work, "relations"), m, dj_mix);
    }
}
