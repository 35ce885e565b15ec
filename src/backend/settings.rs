use std::default::Default;
use std::ffi::OsStr;
use std::fs::read_to_string;
use std::path::Path;
use std::str::FromStr;

use tracing::Level;

pub const DEFAULT_DATABASE_FILE: &str = "music_organizer.db";

/// `database` names a file inside the data directory. Values that carry a
/// directory part are ignored and the default file is used.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub database_file: String,
    pub log_level: Level,
}

enum Setting {
    Database,
    LogLevel,
}

impl Setting {
    fn from_string(string: &str) -> Option<Setting> {
        match string.to_lowercase().as_str() {
            "database" => Some(Setting::Database),
            "log_level" => Some(Setting::LogLevel),
            _ => None,
        }
    }
}

struct ConfigLine {
    target_setting: Setting,
    value: String,
}

impl ConfigLine {
    fn parse(line: &str) -> Option<ConfigLine> {
        let (key, value) = line.split_once('=')?;
        let target_setting = Setting::from_string(key.trim())?;
        Some(ConfigLine { target_setting, value: value.trim().to_string() })
    }
}

impl Settings {
    /// Read `.conf` from the data directory, falling back to defaults for
    /// anything missing or unreadable.
    pub fn load(directory: &Path) -> Settings {
        match read_to_string(directory.join(".conf")) {
            Ok(contents) => Settings::parse(&contents),
            Err(_) => Settings::default(),
        }
    }

    pub fn parse(contents: &str) -> Settings {
        let mut settings = Settings::default();

        contents.lines().filter_map(ConfigLine::parse).for_each(|line| match line.target_setting {
            Setting::Database => {
                if is_bare_file_name(&line.value) {
                    settings.database_file = line.value
                }
            }
            Setting::LogLevel => {
                if let Ok(level) = Level::from_str(&line.value) {
                    settings.log_level = level
                }
            }
        });

        settings
    }
}

fn is_bare_file_name(value: &str) -> bool {
    !value.contains(['/', '\\']) && Path::new(value).file_name() == Some(OsStr::new(value))
}

impl Default for Settings {
    fn default() -> Settings {
        Settings {
            database_file: DEFAULT_DATABASE_FILE.to_string(),
            log_level: Level::INFO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::write;
    use tempfile::TempDir;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        assert_eq!(Settings::load(dir.path()), Settings::default());
    }

    #[test]
    fn reads_known_keys() {
        let dir = TempDir::new().unwrap();
        write(dir.path().join(".conf"), "database = other.db\nLOG_LEVEL=debug\n").unwrap();

        let settings = Settings::load(dir.path());
        assert_eq!(settings.database_file, "other.db");
        assert_eq!(settings.log_level, Level::DEBUG);
    }

    #[test]
    fn ignores_junk() {
        let settings = Settings::parse("colour = #ff0000\nno equals here\nlog_level = loud\ndatabase =   \n");
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn database_must_be_a_bare_file_name() {
        for value in ["/tmp/elsewhere.db", "sub/dir/x.db", "..\\up.db", ".."] {
            let settings = Settings::parse(&format!("database = {value}\n"));
            assert_eq!(settings.database_file, DEFAULT_DATABASE_FILE, "{value}");
        }
        assert_eq!(Settings::parse("database = mine.db").database_file, "mine.db");
    }
}
