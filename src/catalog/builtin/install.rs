use crate::catalog::types::{Signature, SignatureSet, Subsystem};

const RUNBOOK: &str = "https://portworx.atlassian.net/wiki/spaces/PE/pages/2143486077/Runbook+PX+kernel+modules+and+other+package+installs";

pub fn signature_set() -> SignatureSet {
    SignatureSet {
        subsystem: Subsystem::Install,
        remediation: RUNBOOK,
        signatures: vec![in_001(), in_002(), in_003()],
    }
}

// Covers the find/parse/extract/execute variants, local and remote.
fn in_001() -> Signature {
    Signature {
        id: "IN-001",
        name: "Patch fs dependency failure",
        subsystem: Subsystem::Install,
        pattern: r"Failed to (find|parse|extract|execute) (patch|remote.*) fs(.*) kernel(.*)",
    }
}

fn in_002() -> Signature {
    Signature {
        id: "IN-002",
        name: "Kernel module insert failure",
        subsystem: Subsystem::Install,
        pattern: r"insmod: WARNING: could not insert module \S* \S*. Check dmesg for more information",
    }
}

fn in_003() -> Signature {
    Signature {
        id: "IN-003",
        name: "PX filesystem dependencies not loaded",
        subsystem: Subsystem::Install,
        pattern: r"Failed to load PX filesystem dependencies for kernel \S*",
    }
}
