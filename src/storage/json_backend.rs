use chrono::{DateTime, NaiveDateTime, Utc};
use std::{
    fs::{self, File, OpenOptions},
    io::{BufRead, BufReader, Write},
    path::{Path, PathBuf},
};

use crate::{
    catalog::{Article, StaffRate},
    errors::OpsError,
    pricing::PriceHistoryEntry,
};

use super::{CatalogStore, Result};

const BACKUP_EXTENSION: &str = "json";
const BACKUP_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M";
const TMP_SUFFIX: &str = "tmp";
const DEFAULT_RETENTION: usize = 5;

const ARTICLES_CATALOG: &str = "articulos_erp";
const STAFF_RATES_CATALOG: &str = "tipos_personal";
const HISTORY_FILE: &str = "historico_precios.jsonl";

/// JSON-file repository: one file per catalog, a JSON-lines append file for
/// the price history, timestamped backups of overwritten catalogs.
#[derive(Clone)]
pub struct JsonStorage {
    root: PathBuf,
    catalogs_dir: PathBuf,
    backups_dir: PathBuf,
    history_file: PathBuf,
    retention: usize,
}

impl JsonStorage {
    pub fn new(root: Option<PathBuf>, retention: Option<usize>) -> Result<Self> {
        let app_root = resolve_base(root);
        ensure_dir(&app_root)?;
        let catalogs_dir = app_root.join("catalogs");
        let backups_dir = app_root.join("backups");
        ensure_dir(&catalogs_dir)?;
        ensure_dir(&backups_dir)?;
        let history_file = app_root.join(HISTORY_FILE);
        Ok(Self {
            root: app_root,
            catalogs_dir,
            backups_dir,
            history_file,
            retention: retention.unwrap_or(DEFAULT_RETENTION).max(1),
        })
    }

    pub fn new_default() -> Result<Self> {
        Self::new(None, None)
    }

    pub fn base_dir(&self) -> &Path {
        &self.root
    }

    pub fn catalog_path(&self, name: &str) -> PathBuf {
        self.catalogs_dir
            .join(format!("{}.json", canonical_name(name)))
    }

    fn backup_dir(&self, name: &str) -> PathBuf {
        self.backups_dir.join(canonical_name(name))
    }

    fn save_catalog<T: serde::Serialize>(&self, name: &str, rows: &[T]) -> Result<()> {
        let path = self.catalog_path(name);
        if path.exists() {
            self.backup_existing_file(name, &path)?;
        }
        let json = serde_json::to_string_pretty(rows)?;
        let tmp = tmp_path(&path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn load_catalog<T: serde::de::DeserializeOwned>(&self, name: &str) -> Result<Vec<T>> {
        let path = self.catalog_path(name);
        if !path.exists() {
            return Ok(Vec::new());
        }
        let data = fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&data)?)
    }

    fn backup_existing_file(&self, name: &str, path: &Path) -> Result<()> {
        if !path.exists() {
            return Ok(());
        }
        let dir = self.backup_dir(name);
        ensure_dir(&dir)?;
        let timestamp = Utc::now().format(BACKUP_TIMESTAMP_FORMAT).to_string();
        let backup_name = format!(
            "{}_{}.{}",
            canonical_name(name),
            timestamp,
            BACKUP_EXTENSION
        );
        fs::copy(path, dir.join(&backup_name))?;
        self.prune_backups(name)?;
        Ok(())
    }

    fn prune_backups(&self, name: &str) -> Result<()> {
        let backups = self.list_backups(name)?;
        if backups.len() <= self.retention {
            return Ok(());
        }
        for entry in backups.iter().skip(self.retention) {
            let _ = fs::remove_file(self.backup_path(name, entry));
        }
        Ok(())
    }

    pub fn backup_path(&self, name: &str, backup_name: &str) -> PathBuf {
        self.backup_dir(name).join(backup_name)
    }

    /// Backups for a catalog, newest first.
    pub fn list_backups(&self, name: &str) -> Result<Vec<String>> {
        let dir = self.backup_dir(name);
        if !dir.exists() {
            return Ok(Vec::new());
        }
        let mut entries = Vec::new();
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(BACKUP_EXTENSION) {
                continue;
            }
            let file_name = match path.file_name().and_then(|stem| stem.to_str()) {
                Some(name) => name.to_string(),
                None => continue,
            };
            entries.push(file_name);
        }
        entries.sort_by(|a, b| parse_backup_timestamp(b).cmp(&parse_backup_timestamp(a)));
        Ok(entries)
    }

    /// Restores a catalog backup over the live file and reloads it.
    pub fn restore_articles(&self, backup_name: &str) -> Result<Vec<Article>> {
        let backup_path = self.backup_path(ARTICLES_CATALOG, backup_name);
        if !backup_path.exists() {
            return Err(OpsError::Storage(format!(
                "backup `{}` not found",
                backup_name
            )));
        }
        fs::copy(&backup_path, self.catalog_path(ARTICLES_CATALOG))?;
        self.load_articles()
    }
}

impl CatalogStore for JsonStorage {
    fn save_articles(&self, articles: &[Article]) -> Result<()> {
        self.save_catalog(ARTICLES_CATALOG, articles)
    }

    fn load_articles(&self) -> Result<Vec<Article>> {
        self.load_catalog(ARTICLES_CATALOG)
    }

    fn save_staff_rates(&self, rates: &[StaffRate]) -> Result<()> {
        self.save_catalog(STAFF_RATES_CATALOG, rates)
    }

    fn load_staff_rates(&self) -> Result<Vec<StaffRate>> {
        self.load_catalog(STAFF_RATES_CATALOG)
    }

    fn append_history(&self, entries: &[PriceHistoryEntry]) -> Result<usize> {
        if entries.is_empty() {
            return Ok(0);
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.history_file)?;
        for entry in entries {
            let line = serde_json::to_string(entry)?;
            writeln!(file, "{}", line)?;
        }
        file.flush()?;
        Ok(entries.len())
    }

    fn load_history(&self) -> Result<Vec<PriceHistoryEntry>> {
        if !self.history_file.exists() {
            return Ok(Vec::new());
        }
        let reader = BufReader::new(File::open(&self.history_file)?);
        let mut entries = Vec::new();
        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            entries.push(serde_json::from_str(&line)?);
        }
        Ok(entries)
    }
}

fn resolve_base(root: Option<PathBuf>) -> PathBuf {
    match root {
        Some(path) => path,
        None => dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("mice_core"),
    }
}

fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

fn canonical_name(name: &str) -> String {
    let sanitized: String = name
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'a'..='z' | '0'..='9' => c,
            _ => '_',
        })
        .collect();
    if sanitized.trim_matches('_').is_empty() {
        "catalog".into()
    } else {
        sanitized
    }
}

fn parse_backup_timestamp(name: &str) -> Option<DateTime<Utc>> {
    let parts: Vec<&str> = name.split('_').collect();
    if parts.len() < 3 {
        return None;
    }
    let date_part = parts.get(parts.len() - 2)?;
    let time_part = parts.last()?;
    if !is_digits(date_part, 8) || !time_part.ends_with(".json") {
        return None;
    }
    let time_digits = &time_part[..time_part.len() - 5];
    if !is_digits(time_digits, 4) {
        return None;
    }
    let raw = format!("{}{}", date_part, time_digits);
    NaiveDateTime::parse_from_str(&raw, "%Y%m%d%H%M")
        .ok()
        .map(|naive| DateTime::from_naive_utc_and_offset(naive, Utc))
}

fn is_digits(value: &str, len: usize) -> bool {
    value.len() == len && value.chars().all(|c| c.is_ascii_digit())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
