use crate::catalog::types::{Signature, SignatureSet, Subsystem};

const RUNBOOK: &str = "https://purestorage.stackenterprise.co/questions/2437";

pub fn signature_set() -> SignatureSet {
    SignatureSet {
        subsystem: Subsystem::Nfs,
        remediation: RUNBOOK,
        signatures: vec![nfs_001()],
    }
}

fn nfs_001() -> Signature {
    Signature {
        id: "NFS-001",
        name: "Volume attach/mount timeout",
        subsystem: Subsystem::Nfs,
        pattern: r"timeout expired waiting for volumes to attach or mount for pod",
    }
}
