use std::fmt;

/// A Portworx component whose known failure signatures share one runbook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Subsystem {
    Kvdb,
    Dmthin,
    Nfs,
    Lic,
    Install,
}

impl Subsystem {
    /// Every subsystem, in report order.
    pub const ALL: [Subsystem; 5] = [
        Subsystem::Kvdb,
        Subsystem::Dmthin,
        Subsystem::Nfs,
        Subsystem::Lic,
        Subsystem::Install,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Subsystem::Kvdb => "kvdb",
            Subsystem::Dmthin => "dmthin",
            Subsystem::Nfs => "nfs",
            Subsystem::Lic => "lic",
            Subsystem::Install => "install",
        }
    }

    /// Position of this subsystem in [`Subsystem::ALL`].
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Subsystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single log pattern describing one known anomaly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Signature {
    pub id: &'static str,
    pub name: &'static str,
    pub subsystem: Subsystem,
    pub pattern: &'static str,
}

/// The signatures of one subsystem together with its runbook.
#[derive(Debug, Clone)]
pub struct SignatureSet {
    pub subsystem: Subsystem,
    pub remediation: &'static str,
    pub signatures: Vec<Signature>,
}
