// src/models/mode.rs
use anyhow::{Error, anyhow};
use clap::ValueEnum;
use std::fmt;
use std::str::FromStr;

/// What to do with trace lines for the whole run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Uncomment trace statements
    On,
    /// Comment trace statements out
    Off,
    /// Drop live standard calls and comment out the monitor init
    Remove,
    /// Drop every standard call, commented or not, and comment out the monitor init
    #[value(name = "removeall")]
    RemoveAll,
}

impl Mode {
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::On => "on",
            Self::Off => "off",
            Self::Remove => "remove",
            Self::RemoveAll => "removeall",
        }
    }
}

impl fmt::Display for Mode {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = Error;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "on" => Ok(Self::On),
            "off" => Ok(Self::Off),
            "remove" => Ok(Self::Remove),
            "removeall" => Ok(Self::RemoveAll),
            other => Err(anyhow!("Unrecognized option \"{other}\"")),
        }
    }
}
