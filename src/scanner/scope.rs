use crate::catalog::Subsystem;
use crate::error::ScanError;
use std::fmt;
use std::str::FromStr;

static EVERY_SUBSYSTEM: [Subsystem; 5] = Subsystem::ALL;

/// Which subsystems a scan evaluates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Scope {
    Kvdb,
    Dmthin,
    Nfs,
    Lic,
    Install,
    #[default]
    All,
}

impl Scope {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::All => "all",
            Scope::Kvdb => "kvdb",
            Scope::Dmthin => "dmthin",
            Scope::Nfs => "nfs",
            Scope::Lic => "lic",
            Scope::Install => "install",
        }
    }

    /// Subsystems evaluated for every line under this scope.
    pub fn subsystems(&self) -> &'static [Subsystem] {
        match self {
            Scope::All => &EVERY_SUBSYSTEM,
            Scope::Kvdb => &[Subsystem::Kvdb],
            Scope::Dmthin => &[Subsystem::Dmthin],
            Scope::Nfs => &[Subsystem::Nfs],
            Scope::Lic => &[Subsystem::Lic],
            Scope::Install => &[Subsystem::Install],
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Scope::All)
    }

    /// Name used in the "Starting ... scan" banner.
    pub fn banner_label(&self) -> &'static str {
        match self {
            Scope::All => "full",
            other => other.as_str(),
        }
    }
}

impl From<Subsystem> for Scope {
    fn from(subsystem: Subsystem) -> Self {
        match subsystem {
            Subsystem::Kvdb => Scope::Kvdb,
            Subsystem::Dmthin => Scope::Dmthin,
            Subsystem::Nfs => Scope::Nfs,
            Subsystem::Lic => Scope::Lic,
            Subsystem::Install => Scope::Install,
        }
    }
}

impl FromStr for Scope {
    type Err = ScanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Scope::All),
            "kvdb" => Ok(Scope::Kvdb),
            "dmthin" => Ok(Scope::Dmthin),
            "nfs" => Ok(Scope::Nfs),
            "lic" => Ok(Scope::Lic),
            "install" => Ok(Scope::Install),
            other => Err(ScanError::InvalidScope(other.to_string())),
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
