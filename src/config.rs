use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use ini::configparser::ini::Ini;

pub const DEFAULT_CONFIG_PATH: &str = "ipv4-check.ini";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format
{
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Config
{
    pub log_path: Option<PathBuf>,
    pub input: Format,
    pub output: Format,
}

type Sections = HashMap<String, HashMap<String, Option<String>>>;

impl Config
{
    /// Loads the ini file at `path`. A missing file is only an error when
    /// `required` is set, otherwise the defaults are returned.
    pub fn load(path: &Path, required: bool) -> Result<Config, String>
    {
        if !path.exists()
        {
            if required
            {
                return Err(format!("Config file '{}' does not exist", path.display()));
            }

            return Ok(Config::default());
        }

        let text = fs::read_to_string(path)
            .map_err(|e| format!("Could not read config '{}': {}", path.display(), e))?;

        Config::parse(&text).map_err(|e| format!("{} ({})", e, path.display()))
    }

    pub fn parse(text: &str) -> Result<Config, String>
    {
        let mut ini = Ini::new();
        let map = ini.read(text.to_string())
            .map_err(|e| format!("Could not parse config: {}", e))?;

        Config::from_sections(&map)
    }

    fn from_sections(map: &Sections) -> Result<Config, String>
    {
        let log_path = get(map, "log", "path")
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);

        let input = match get(map, "input", "format")
        {
            Some(value) => parse_format("input", &value)?,
            None => Format::Text,
        };

        let output = match get(map, "output", "format")
        {
            Some(value) => parse_format("output", &value)?,
            None => Format::Text,
        };

        Ok(Config { log_path, input, output })
    }
}

fn get(map: &Sections, section: &str, key: &str) -> Option<String>
{
    map.get(section)?.get(key)?.clone()
}

fn parse_format(section: &str, value: &str) -> Result<Format, String>
{
    match value.trim().to_ascii_lowercase().as_str()
    {
        "text" => Ok(Format::Text),
        "json" => Ok(Format::Json),
        _ => Err(format!("[{}] Unknown format '{}', expected 'text' or 'json'", section, value)),
    }
}
