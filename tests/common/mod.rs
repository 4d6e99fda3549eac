// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use chrono::{Duration, NaiveDateTime};
use geolife_ingest::Config;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Standard 6-line PLT header.
pub const PLT_HEADER: &str = "Geolife trajectory\n\
    WGS 84\n\
    Altitude is in Feet\n\
    Reserved 3\n\
    0,2,255,My Track,0,0,2,8421376\n\
    0\n";

/// Builds a GeoLife-style dataset layout inside a temp directory:
/// `Data/<user>/Trajectory/*.plt`, optional `Data/<user>/labels.txt` and the
/// top-level `labeled_ids.txt` manifest.
pub struct DatasetBuilder {
    root: TempDir,
    labeled_ids: Vec<String>,
}

#[allow(dead_code)]
impl DatasetBuilder {
    pub fn new() -> Self {
        Self {
            root: TempDir::new().expect("failed to create temp dir"),
            labeled_ids: Vec::new(),
        }
    }

    pub fn root(&self) -> &Path {
        self.root.path()
    }

    /// Add a user directory with an empty Trajectory subdirectory.
    pub fn add_user(&self, user_id: &str) -> PathBuf {
        let dir = self.root.path().join("Data").join(user_id);
        fs::create_dir_all(dir.join("Trajectory")).expect("failed to create user dirs");
        dir
    }

    /// Write one PLT file from (lat, lon, altitude, date, time) rows.
    pub fn add_plt(&self, user_id: &str, name: &str, rows: &[(f64, f64, f64, &str, &str)]) {
        let mut content = String::from(PLT_HEADER);
        for (lat, lon, alt, date, time) in rows {
            content.push_str(&format!("{},{},0,{},39744.12,{},{}\n", lat, lon, alt, date, time));
        }
        self.write_plt(user_id, name, &content);
    }

    /// Write a PLT file with `count` synthetic rows one second apart,
    /// starting at `start` (strict `YYYY-MM-DD HH:MM:SS`).
    pub fn add_plt_with_count(&self, user_id: &str, name: &str, start: &str, count: usize) {
        let base = NaiveDateTime::parse_from_str(start, "%Y-%m-%d %H:%M:%S")
            .expect("bad start timestamp in test fixture");
        let mut content = String::from(PLT_HEADER);
        for i in 0..count {
            let ts = base + Duration::seconds(i as i64);
            content.push_str(&format!(
                "{},{},0,492,39744.12,{},{}\n",
                39.9 + i as f64 * 1e-5,
                116.3 + i as f64 * 1e-5,
                ts.format("%Y-%m-%d"),
                ts.format("%H:%M:%S"),
            ));
        }
        self.write_plt(user_id, name, &content);
    }

    fn write_plt(&self, user_id: &str, name: &str, content: &str) {
        let path = self
            .root
            .path()
            .join("Data")
            .join(user_id)
            .join("Trajectory")
            .join(name);
        fs::write(path, content).expect("failed to write plt file");
    }

    /// Write a user's labels.txt (tab-separated, with header) and flag the
    /// user in the manifest written by [`finish`].
    pub fn add_labels(&mut self, user_id: &str, rows: &[(&str, &str, &str)]) {
        let mut content = String::from("Start Time\tEnd Time\tTransportation Mode\n");
        for (start, end, mode) in rows {
            content.push_str(&format!("{}\t{}\t{}\n", start, end, mode));
        }
        fs::write(
            self.root.path().join("Data").join(user_id).join("labels.txt"),
            content,
        )
        .expect("failed to write labels file");
        self.labeled_ids.push(user_id.to_string());
    }

    /// Flag a user in the manifest without writing a labels.txt.
    pub fn flag_labeled(&mut self, user_id: &str) {
        self.labeled_ids.push(user_id.to_string());
    }

    /// Write the labeled-IDs manifest and return the dataset root.
    pub fn finish(&self) -> PathBuf {
        let mut manifest = self.labeled_ids.join("\n");
        manifest.push('\n');
        fs::write(self.root.path().join("labeled_ids.txt"), manifest)
            .expect("failed to write manifest");
        self.root.path().to_path_buf()
    }
}

/// Config pointed at a fixture dataset, defaults otherwise.
#[allow(dead_code)]
pub fn test_config(root: &Path) -> Config {
    Config {
        dataset_root: root.to_path_buf(),
        ..Config::default()
    }
}
