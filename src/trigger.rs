use std::fs;
use std::path::PathBuf;

use log::debug;


/// Whether maintenance mode is switched on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Trigger {
    /// Maintenance mode is off, regardless of any trigger file.
    Disabled,
    /// Maintenance mode is always on.
    Always,
    /// Maintenance mode is on while the file exists.
    File(PathBuf),
}

impl Trigger {
    /// # Arguments
    /// * `enabled` - The master switch.
    /// * `trigger_filename` - The optional trigger file. An empty name means no trigger.
    pub fn new(enabled: bool, trigger_filename: Option<&str>) -> Trigger {
        if !enabled {
            return Trigger::Disabled;
        }
        match trigger_filename {
            Some(filename) if !filename.is_empty() => Trigger::File(PathBuf::from(filename)),
            _ => Trigger::Always,
        }
    }

    /// Evaluate the trigger. The file is probed on every call.
    pub fn is_active(&self) -> bool {
        match self {
            Trigger::Disabled => false,
            Trigger::Always => true,
            Trigger::File(path) => match fs::metadata(path) {
                Ok(_) => true,
                Err(err) => {
                    debug!("Trigger {} is not active: {}", path.display(), err);
                    false
                }
            },
        }
    }
}
