use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::Serialize;

pub const SURAHS_DIR: &str = "surahs";
pub const COMPLETE_FILE: &str = "quran_complete.json";
pub const FAILED_FILE: &str = "failed_surahs.json";

/// Writes pretty-printed JSON, creating parent directories. Overwrites.
pub fn write_json<T>(path: &Path, value: &T) -> anyhow::Result<()>
where
    T: Serialize + ?Sized,
{
    if let Some(parent_dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent_dir)
            .with_context(|| format!("create output dir: {}", parent_dir.display()))?;
    }

    let mut json = serde_json::to_string_pretty(value).context("serialize json")?;
    json.push('\n');
    std::fs::write(path, json).with_context(|| format!("write json: {}", path.display()))?;

    tracing::info!(path = %path.display(), "saved");
    Ok(())
}

pub fn surah_path(out_dir: &Path, id: u32, transliteration: &str) -> PathBuf {
    out_dir
        .join(SURAHS_DIR)
        .join(surah_file_name(id, transliteration))
}

/// `surah_<3-digit id>_<slug>.json`
pub fn surah_file_name(id: u32, transliteration: &str) -> String {
    format!("surah_{id:03}_{}.json", slug(transliteration))
}

/// Lowercase, `[a-z0-9-]` kept, everything else folded into single `_`.
pub fn slug(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.to_lowercase().chars() {
        let keep = ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-';
        if keep {
            out.push(ch);
        } else if !out.ends_with('_') {
            out.push('_');
        }
    }
    out.trim_matches('_').to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_folds_punctuation() {
        assert_eq!(slug("Al-A'Raf"), "al-a_raf");
        assert_eq!(slug("Ar-Ra'd"), "ar-ra_d");
        assert_eq!(slug("  Ya-Sin!! "), "ya-sin");
        assert_eq!(slug("Al Fatihah"), "al_fatihah");
    }

    #[test]
    fn surah_file_name_pads_id() {
        assert_eq!(surah_file_name(1, "Al-Fatihah"), "surah_001_al-fatihah.json");
        assert_eq!(surah_file_name(114, "An-Nas"), "surah_114_an-nas.json");
    }

    #[test]
    fn write_json_creates_parents_and_overwrites() -> anyhow::Result<()> {
        let temp = tempfile::TempDir::new()?;
        let path = temp.path().join("nested").join("data.json");

        write_json(&path, &vec![1, 2])?;
        write_json(&path, &vec![3])?;

        let written: Vec<u32> = serde_json::from_str(&std::fs::read_to_string(&path)?)?;
        assert_eq!(written, vec![3]);
        Ok(())
    }
}
