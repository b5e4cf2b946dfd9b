use crate::catalog::types::{Signature, SignatureSet, Subsystem};

const RUNBOOK: &str =
    "https://portworx.atlassian.net/wiki/spaces/PE/pages/2469396955/Runbook+Dmthin";

pub fn signature_set() -> SignatureSet {
    SignatureSet {
        subsystem: Subsystem::Dmthin,
        remediation: RUNBOOK,
        signatures: vec![dm_001(), dm_002(), dm_003()],
    }
}

fn dm_001() -> Signature {
    Signature {
        id: "DM-001",
        name: "Volume group out of extents",
        subsystem: Subsystem::Dmthin,
        pattern: r"Insufficient free extents \(\S*\) in volume group \S*: \S* required",
    }
}

fn dm_002() -> Signature {
    Signature {
        id: "DM-002",
        name: "Thin pool transaction id mismatch",
        subsystem: Subsystem::Dmthin,
        pattern: r"Thin pool pwx0-pxpool-tpool \(\S*\) transaction_id is \S*, while expected \S*",
    }
}

fn dm_003() -> Signature {
    Signature {
        id: "DM-003",
        name: "Missing physical volume",
        subsystem: Subsystem::Dmthin,
        pattern: r"Couldn't find device with uuid(.*)",
    }
}
