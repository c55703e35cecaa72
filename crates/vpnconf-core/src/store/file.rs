// # File Config Store
//
// File-based implementation of ConfigStore with crash recovery.
//
// ## Purpose
//
// Persists user settings across client restarts. Every read goes back to
// the file, so edits made by another process are reflected on the next
// read.
//
// ## Crash Recovery
//
// - Atomic writes: Uses write-then-rename for atomicity
// - Corruption detection: Validates JSON on load
// - Automatic backup: Keeps .backup of last known good settings
// - Recovery: Falls back to backup, then to defaults
//
// ## File Format
//
// ```json
// {
//   "version": "1.0",
//   "last_modified": "2026-08-30T12:00:00Z",
//   "settings": {
//     "protocol": "udp",
//     "killswitch": "disabled",
//     "dns_mode": "automatic",
//     "custom_dns": [],
//     "netshield": "disabled"
//   }
// }
// ```

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

use crate::settings::{DnsMode, KillswitchMode, NetshieldLevel, Protocol, UserSettings};
use crate::traits::ConfigStore;
use crate::Error;

/// Settings file format version
/// Used for future migration if format changes
const SETTINGS_FILE_VERSION: &str = "1.0";

/// File-based config store with crash recovery
///
/// Writes are serialized through an internal mutex and performed as
/// read-modify-write transactions against the file, so the file stays the
/// single source of truth and per-field updates are last-writer-wins.
///
/// # Example
///
/// ```rust,no_run
/// use vpnconf_core::store::FileConfigStore;
/// use vpnconf_core::traits::ConfigStore;
/// use vpnconf_core::Protocol;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let store = FileConfigStore::new("/home/user/.config/vpnconf/settings.json").await?;
///
///     store.update_protocol(Protocol::OpenVpnTcp).await?;
///     assert_eq!(store.get().await?.protocol, Protocol::OpenVpnTcp);
///
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct FileConfigStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

/// Serializable settings file format
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
struct SettingsFileFormat {
    version: String,
    last_modified: chrono::DateTime<chrono::Utc>,
    settings: UserSettings,
}

impl SettingsFileFormat {
    fn now(settings: UserSettings) -> Self {
        Self {
            version: SETTINGS_FILE_VERSION.to_string(),
            last_modified: chrono::Utc::now(),
            settings,
        }
    }
}

impl FileConfigStore {
    /// Create or open a file config store
    ///
    /// This will:
    /// 1. Create parent directories if needed
    /// 2. Validate an existing settings file, recovering from backup if
    ///    it is corrupted
    /// 3. Write the default settings if no file exists yet
    pub async fn new<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).await.map_err(|e| {
                    Error::persistence(format!(
                        "Failed to create settings directory {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }

        let store = Self {
            path,
            write_lock: Mutex::new(()),
        };

        if store.path.exists() {
            // Validates the file and repairs it from backup if needed
            store.load_with_recovery().await?;
        } else {
            store.write_settings(UserSettings::default()).await?;
            tracing::debug!(
                "Initialized settings file with defaults: {}",
                store.path.display()
            );
        }

        Ok(store)
    }

    /// Load settings with automatic recovery
    ///
    /// Recovery strategy:
    /// 1. Try to load the main settings file
    /// 2. If JSON parse error, try loading the backup
    /// 3. If the backup also fails, fall back to defaults
    async fn load_with_recovery(&self) -> Result<UserSettings, Error> {
        match Self::load(&self.path).await {
            Ok(settings) => Ok(settings),
            Err(e) if is_corruption(&e) => {
                tracing::warn!(
                    "Settings file appears corrupted: {}. Attempting recovery from backup.",
                    e
                );

                let backup_path = Self::backup_path(&self.path);
                if backup_path.exists() {
                    match Self::load(&backup_path).await {
                        Ok(settings) => {
                            tracing::info!("Recovered settings from backup");
                            if let Err(restore_err) = fs::copy(&backup_path, &self.path).await {
                                tracing::error!(
                                    "Failed to restore settings file from backup: {}",
                                    restore_err
                                );
                            }
                            Ok(settings)
                        }
                        Err(backup_err) => {
                            tracing::error!(
                                "Backup also corrupted: {}. Falling back to defaults.",
                                backup_err
                            );
                            let defaults = UserSettings::default();
                            self.write_settings(defaults.clone()).await?;
                            Ok(defaults)
                        }
                    }
                } else {
                    tracing::warn!("No backup file found. Falling back to defaults.");
                    let defaults = UserSettings::default();
                    self.write_settings(defaults.clone()).await?;
                    Ok(defaults)
                }
            }
            Err(e) => Err(e),
        }
    }

    /// Load settings from a file
    async fn load(path: &Path) -> Result<UserSettings, Error> {
        let content = fs::read_to_string(path).await.map_err(|e| {
            Error::persistence(format!(
                "Failed to read settings file {}: {}",
                path.display(),
                e
            ))
        })?;

        let file: SettingsFileFormat = serde_json::from_str(&content)?;

        if file.version != SETTINGS_FILE_VERSION {
            tracing::warn!(
                "Settings file version mismatch: expected {}, got {}. Attempting to load anyway.",
                SETTINGS_FILE_VERSION,
                file.version
            );
        }

        Ok(file.settings)
    }

    /// Write settings to the file atomically
    async fn write_settings(&self, settings: UserSettings) -> Result<(), Error> {
        let json = serde_json::to_string_pretty(&SettingsFileFormat::now(settings))?;

        // Write to temporary file first
        let temp_path = self.temp_path();
        {
            let mut file = fs::File::create(&temp_path).await.map_err(|e| {
                Error::persistence(format!(
                    "Failed to create temp file {}: {}",
                    temp_path.display(),
                    e
                ))
            })?;

            file.write_all(json.as_bytes()).await.map_err(|e| {
                Error::persistence(format!(
                    "Failed to write to temp file {}: {}",
                    temp_path.display(),
                    e
                ))
            })?;

            file.flush().await.map_err(|e| {
                Error::persistence(format!(
                    "Failed to flush temp file {}: {}",
                    temp_path.display(),
                    e
                ))
            })?;
        }

        // Keep a backup of the current file (if it exists)
        if self.path.exists() {
            let backup_path = Self::backup_path(&self.path);
            if let Err(e) = fs::copy(&self.path, &backup_path).await {
                tracing::warn!("Failed to create backup: {}", e);
            }
        }

        // Atomic rename (temp -> actual)
        fs::rename(&temp_path, &self.path).await.map_err(|e| {
            Error::persistence(format!(
                "Failed to rename {} to {}: {}",
                temp_path.display(),
                self.path.display(),
                e
            ))
        })?;

        tracing::trace!("Settings written to file: {}", self.path.display());
        Ok(())
    }

    /// Read-modify-write transaction over the settings file
    async fn update_with<F>(&self, apply: F) -> Result<(), Error>
    where
        F: FnOnce(&mut UserSettings),
    {
        let _guard = self.write_lock.lock().await;
        let mut settings = self.load_with_recovery().await?;
        apply(&mut settings);
        self.write_settings(settings).await
    }

    /// Get path to temporary file for atomic writes
    fn temp_path(&self) -> PathBuf {
        let mut temp = self.path.clone();
        temp.set_extension("tmp");
        temp
    }

    /// Get path to backup file
    fn backup_path(path: &Path) -> PathBuf {
        let mut backup = path.to_path_buf();
        backup.set_extension("backup");
        backup
    }
}

#[async_trait]
impl ConfigStore for FileConfigStore {
    async fn get(&self) -> Result<UserSettings, Error> {
        self.load_with_recovery().await
    }

    async fn update_protocol(&self, protocol: Protocol) -> Result<(), Error> {
        self.update_with(|s| s.protocol = protocol).await
    }

    async fn update_killswitch(&self, mode: KillswitchMode) -> Result<(), Error> {
        self.update_with(|s| s.killswitch = mode).await
    }

    async fn update_netshield(&self, level: NetshieldLevel) -> Result<(), Error> {
        self.update_with(|s| s.netshield = level).await
    }

    async fn update_dns(&self, mode: DnsMode, servers: Vec<String>) -> Result<(), Error> {
        self.update_with(|s| {
            s.dns_mode = mode;
            s.custom_dns = servers;
        })
        .await
    }

    async fn reset_defaults(&self) -> Result<(), Error> {
        let _guard = self.write_lock.lock().await;
        self.write_settings(UserSettings::default()).await
    }
}

/// Whether an error indicates a corrupted settings file
fn is_corruption(err: &Error) -> bool {
    matches!(err, Error::Json(_))
}
