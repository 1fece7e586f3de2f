use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::warn;

pub const EMPLOYEES_KEY: &str = "employees";
pub const RECORDS_KEY: &str = "dailyRecords";
pub const THEME_KEY: &str = "theme";

/// File-per-key JSON store under one data directory. The trivial get/set
/// contract mirrors the browser storage the original data lived in.
#[derive(Clone)]
pub struct FileKv {
    dir: PathBuf,
}

impl FileKv {
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .with_context(|| format!("creating data dir {}", dir.display()))?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    pub fn get(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).with_context(|| format!("reading key {key}")),
        }
    }

    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        // Write-then-rename: a failed write must not clobber the last
        // good snapshot.
        let path = self.path_for(key);
        let tmp = self.dir.join(format!("{key}.json.tmp"));
        fs::write(&tmp, value).with_context(|| format!("writing key {key}"))?;
        fs::rename(&tmp, &path).with_context(|| format!("committing key {key}"))?;
        Ok(())
    }
}

/// Loads one persisted store, falling back to the default when the key is
/// missing or its contents do not deserialize. Corrupt data is logged and
/// replaced, never propagated (the service still starts).
pub fn load_or_default<T: DeserializeOwned + Default>(kv: &FileKv, key: &str) -> T {
    match kv.get(key) {
        Ok(Some(raw)) => match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                warn!(error = %e, key, "Corrupt persisted data, starting from default");
                T::default()
            }
        },
        Ok(None) => T::default(),
        Err(e) => {
            warn!(error = %e, key, "Failed to read persisted data, starting from default");
            T::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::employee::Employee;
    use crate::model::record::DailyRecords;

    #[test]
    fn set_then_get_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let kv = FileKv::open(dir.path()).unwrap();

        kv.set(EMPLOYEES_KEY, r#"[{"id":"1","name":"John","phone":""}]"#)
            .unwrap();
        let employees: Vec<Employee> = load_or_default(&kv, EMPLOYEES_KEY);
        assert_eq!(employees.len(), 1);
        assert_eq!(employees[0].name, "John");
    }

    #[test]
    fn missing_key_reads_as_absent() {
        let dir = tempfile::tempdir().unwrap();
        let kv = FileKv::open(dir.path()).unwrap();
        assert_eq!(kv.get("nothing").unwrap(), None);

        let records: DailyRecords = load_or_default(&kv, RECORDS_KEY);
        assert!(records.is_empty());
    }

    #[test]
    fn corrupt_payload_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        let kv = FileKv::open(dir.path()).unwrap();
        kv.set(RECORDS_KEY, "{not json").unwrap();

        let records: DailyRecords = load_or_default(&kv, RECORDS_KEY);
        assert!(records.is_empty());
    }

    #[test]
    fn set_overwrites_previous_value() {
        let dir = tempfile::tempdir().unwrap();
        let kv = FileKv::open(dir.path()).unwrap();
        kv.set(THEME_KEY, "\"light\"").unwrap();
        kv.set(THEME_KEY, "\"dark\"").unwrap();
        assert_eq!(kv.get(THEME_KEY).unwrap().as_deref(), Some("\"dark\""));
    }
}
