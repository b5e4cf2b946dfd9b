mod dmthin;
mod install;
mod kvdb;
mod lic;
mod nfs;

use crate::catalog::types::SignatureSet;

/// Built-in signature sets, in report order.
pub fn all_sets() -> Vec<SignatureSet> {
    vec![
        kvdb::signature_set(),
        dmthin::signature_set(),
        nfs::signature_set(),
        lic::signature_set(),
        install::signature_set(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::types::Subsystem;
    use std::collections::HashSet;

    #[test]
    fn test_every_subsystem_has_one_set() {
        let sets = all_sets();
        let subsystems: Vec<Subsystem> = sets.iter().map(|s| s.subsystem).collect();
        assert_eq!(subsystems, Subsystem::ALL.to_vec());
    }

    #[test]
    fn test_signature_ids_are_unique() {
        let mut seen = HashSet::new();
        for set in all_sets() {
            for signature in set.signatures {
                assert!(seen.insert(signature.id), "duplicate id {}", signature.id);
            }
        }
        assert_eq!(seen.len(), 13);
    }

    #[test]
    fn test_remediation_links_are_urls() {
        for set in all_sets() {
            assert!(
                set.remediation.starts_with("https://"),
                "{} has no https runbook",
                set.subsystem
            );
        }
    }
}
