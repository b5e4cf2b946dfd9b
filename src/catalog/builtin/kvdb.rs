use crate::catalog::types::{Signature, SignatureSet, Subsystem};

const RUNBOOK: &str =
    "https://portworx.atlassian.net/wiki/spaces/PE/pages/392757249/ETCD+Troubleshooting";

pub fn signature_set() -> SignatureSet {
    SignatureSet {
        subsystem: Subsystem::Kvdb,
        remediation: RUNBOOK,
        signatures: vec![kv_001(), kv_002(), kv_003(), kv_004(), kv_005()],
    }
}

fn kv_001() -> Signature {
    Signature {
        id: "KV-001",
        name: "etcd peer unreachable",
        subsystem: Subsystem::Kvdb,
        pattern: r"etcdserver: failed to reach the peerURL(.*) of member \S*",
    }
}

fn kv_002() -> Signature {
    Signature {
        id: "KV-002",
        name: "etcd member version unknown",
        subsystem: Subsystem::Kvdb,
        pattern: r"etcdserver: cannot get the version of member",
    }
}

fn kv_003() -> Signature {
    Signature {
        id: "KV-003",
        name: "slow WAL sync",
        subsystem: Subsystem::Kvdb,
        pattern: r"wal: sync duration of",
    }
}

fn kv_004() -> Signature {
    Signature {
        id: "KV-004",
        name: "etcd database space exceeded",
        subsystem: Subsystem::Kvdb,
        pattern: r"etcdserver: mvcc: database space exceeded",
    }
}

fn kv_005() -> Signature {
    Signature {
        id: "KV-005",
        name: "kvdb request timeout",
        subsystem: Subsystem::Kvdb,
        pattern: r"kvdb error: etcdserver: request timed out, retry count",
    }
}
