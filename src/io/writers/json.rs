use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::error::Result;

/// Writes `value` as indented JSON (two spaces), creating parent directories.
pub fn write_pretty_json<T: Serialize + ?Sized>(output: &Path, value: &T) -> Result<()> {
    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let text = serde_json::to_string_pretty(value)?;
    fs::write(output, text)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_indented_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("a.png.json");
        let value = serde_json::json!({"label": "caries", "score": 0.87});

        write_pretty_json(&path, &value).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text, "{\n  \"label\": \"caries\",\n  \"score\": 0.87\n}");
    }
}
