//! Plain-text build records.
//!
//! One record per built version, named like the scene snapshot. The field
//! order is fixed and consumed by people, not parsers - keep it stable.

use std::fs;
use std::path::Path;

use chrono::Local;

use crate::util::Result;

/// Contents of one notes record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotesRecord {
    pub date: String,
    pub time: String,
    pub artist: String,
    /// Mesh names from the scene, whether or not this run exported them.
    pub meshes: Vec<String>,
    /// Filenames present in the version's texture folder after copying -
    /// including leftovers from earlier builds.
    pub textures: Vec<String>,
}

impl NotesRecord {
    /// Record stamped with the local date and time.
    pub fn now(artist: impl Into<String>, meshes: Vec<String>, textures: Vec<String>) -> Self {
        let now = Local::now();
        Self {
            date: now.format("%Y-%m-%d").to_string(),
            time: now.format("%H:%M:%S%.6f").to_string(),
            artist: artist.into(),
            meshes,
            textures,
        }
    }

    /// Render the fixed field order:
    /// date, time, artist, mesh count and names, texture count and names,
    /// separated by the blank lines the studio format expects.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("Date: {}\n", self.date));
        out.push('\n');
        out.push_str(&format!("Time: {}\n", self.time));
        out.push('\n');
        out.push_str(&format!("Artist: {}\n", self.artist));
        out.push('\n');
        out.push_str(&format!(
            "Number of meshes exported to OBJ format = {}:\n",
            self.meshes.len()
        ));
        for mesh in &self.meshes {
            out.push_str(mesh);
            out.push('\n');
        }
        out.push_str("\n\n\n");
        out.push_str(&format!(
            "Number of textures exported from scene = {}:\n",
            self.textures.len()
        ));
        for tex in &self.textures {
            out.push_str(tex);
            out.push('\n');
        }
        out.push('\n');
        out
    }

    /// Write the record, overwriting any previous one of the same name.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        fs::write(path, self.render())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> NotesRecord {
        NotesRecord {
            date: "2015-09-28".into(),
            time: "10:30:00.000000".into(),
            artist: "jordan".into(),
            meshes: vec!["bodyShape".into(), "headShape".into()],
            textures: vec!["body_diff.tif".into()],
        }
    }

    #[test]
    fn test_render_field_order() {
        let text = record().render();
        let expected = "Date: 2015-09-28\n\
                        \n\
                        Time: 10:30:00.000000\n\
                        \n\
                        Artist: jordan\n\
                        \n\
                        Number of meshes exported to OBJ format = 2:\n\
                        bodyShape\n\
                        headShape\n\
                        \n\
                        \n\
                        \n\
                        Number of textures exported from scene = 1:\n\
                        body_diff.tif\n\
                        \n";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_render_empty_lists_keep_headers() {
        let mut rec = record();
        rec.meshes.clear();
        rec.textures.clear();
        let text = rec.render();
        assert!(text.contains("Number of meshes exported to OBJ format = 0:"));
        assert!(text.contains("Number of textures exported from scene = 0:"));
    }

    #[test]
    fn test_now_stamps_dates() {
        let rec = NotesRecord::now("jordan", vec![], vec![]);
        // YYYY-MM-DD and HH:MM:SS.ffffff
        assert_eq!(rec.date.len(), 10);
        assert!(rec.time.contains(':'));
        assert!(rec.time.contains('.'));
    }
}
