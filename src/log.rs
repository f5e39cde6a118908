use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use chrono::Local;

pub struct Logger
{
    file: File
}

impl Logger
{
    pub fn new(path: &Path) -> Result<Logger, std::io::Error>
    {
        Ok(Logger {
            file: OpenOptions::new().append(true).create(true).open(path)?
        })
    }

    fn current_time(&self) -> String
    {
        Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
    }

    fn write(&mut self, level: &str, msg: &str) -> Result<(), std::io::Error>
    {
        self.file.write_all(format!("[{}][{}] {}\n", self.current_time(), level, msg).as_bytes())
    }

    pub fn info(&mut self, msg: &str) -> Result<(), std::io::Error>
    {
        self.write("INFO", msg)
    }

    pub fn error(&mut self, msg: &str) -> Result<(), std::io::Error>
    {
        self.write("ERROR", msg)
    }
}
