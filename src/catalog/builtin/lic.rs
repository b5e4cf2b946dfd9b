use crate::catalog::types::{Signature, SignatureSet, Subsystem};

const RUNBOOK: &str =
    "https://portworx.atlassian.net/wiki/spaces/PE/pages/1913847912/Runbook+PX+Licensing";

pub fn signature_set() -> SignatureSet {
    SignatureSet {
        subsystem: Subsystem::Lic,
        remediation: RUNBOOK,
        signatures: vec![lic_001()],
    }
}

fn lic_001() -> Signature {
    Signature {
        id: "LIC-001",
        name: "License bound to another cluster",
        subsystem: Subsystem::Lic,
        pattern: r"INVALID LICENSE \(ERROR: License does not match PX Cluster identity\)",
    }
}
