//! Memory synchronisation information attached to memory instructions and
//! barriers.

use bitflags::bitflags;
use std::fmt;

bitflags! {
    /// Memory storage classes an access may touch.
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
    pub struct StorageClass: u8 {
        const BUFFER = 1 << 0;
        const ATOMIC_COUNTER = 1 << 1;
        const IMAGE = 1 << 2;
        const SHARED = 1 << 3;
        const VMEM_OUTPUT = 1 << 4;
        const SCRATCH = 1 << 5;
        const VGPR_SPILL = 1 << 6;
    }
}

/// Number of slots in per-storage barrier tables.
pub const STORAGE_COUNT: usize = 8;

bitflags! {
    /// Ordering semantics of an access or barrier.
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
    pub struct Semantics: u8 {
        const ACQUIRE = 1 << 0;
        const RELEASE = 1 << 1;
        const VOLATILE = 1 << 2;
        /// Only visible to the invocation itself.
        const PRIVATE = 1 << 3;
        const CAN_REORDER = 1 << 4;
        const ATOMIC = 1 << 5;
        const RMW = 1 << 6;

        const ACQREL = Self::ACQUIRE.bits() | Self::RELEASE.bits();
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum SyncScope {
    #[default]
    Invocation,
    Subgroup,
    Workgroup,
    QueueFamily,
    Device,
}

impl SyncScope {
    pub const ALL: [SyncScope; 5] = [
        SyncScope::Invocation,
        SyncScope::Subgroup,
        SyncScope::Workgroup,
        SyncScope::QueueFamily,
        SyncScope::Device,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SyncScope::Invocation => "invocation",
            SyncScope::Subgroup => "subgroup",
            SyncScope::Workgroup => "workgroup",
            SyncScope::QueueFamily => "queuefamily",
            SyncScope::Device => "device",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        SyncScope::ALL.into_iter().find(|scope| scope.name() == name)
    }
}

impl fmt::Display for SyncScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Storage, semantics and scope of a memory access.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct MemorySyncInfo {
    pub storage: StorageClass,
    pub semantics: Semantics,
    pub scope: SyncScope,
}

impl MemorySyncInfo {
    pub fn new(storage: StorageClass, semantics: Semantics, scope: SyncScope) -> Self {
        Self {
            storage,
            semantics,
            scope,
        }
    }

    pub fn storage(storage: StorageClass) -> Self {
        Self {
            storage,
            ..Self::default()
        }
    }

    /// Whether the access may be freely reordered with other memory accesses.
    pub fn can_reorder(&self) -> bool {
        if self.semantics.intersects(Semantics::ACQREL) {
            return false;
        }
        (self.storage.is_empty() || self.semantics.contains(Semantics::CAN_REORDER))
            && !self.semantics.contains(Semantics::VOLATILE)
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty() && self.semantics.is_empty() && self.scope == SyncScope::Invocation
    }
}

pub(crate) const STORAGE_NAMES: [(&str, StorageClass); 7] = [
    ("buffer", StorageClass::BUFFER),
    ("atomic_counter", StorageClass::ATOMIC_COUNTER),
    ("image", StorageClass::IMAGE),
    ("shared", StorageClass::SHARED),
    ("vmem_output", StorageClass::VMEM_OUTPUT),
    ("scratch", StorageClass::SCRATCH),
    ("vgpr_spill", StorageClass::VGPR_SPILL),
];

pub(crate) const SEMANTICS_NAMES: [(&str, Semantics); 7] = [
    ("acquire", Semantics::ACQUIRE),
    ("release", Semantics::RELEASE),
    ("volatile", Semantics::VOLATILE),
    ("private", Semantics::PRIVATE),
    ("reorder", Semantics::CAN_REORDER),
    ("atomic", Semantics::ATOMIC),
    ("rmw", Semantics::RMW),
];

fn join_names<T: Copy>(names: &[(&'static str, T)], has: impl Fn(T) -> bool) -> String {
    names
        .iter()
        .filter(|(_, flag)| has(*flag))
        .map(|(name, _)| *name)
        .collect::<Vec<_>>()
        .join("+")
}

impl fmt::Display for MemorySyncInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if !self.storage.is_empty() {
            parts.push(format!(
                "storage:{}",
                join_names(&STORAGE_NAMES, |s| self.storage.contains(s))
            ));
        }
        if !self.semantics.is_empty() {
            parts.push(format!(
                "semantics:{}",
                join_names(&SEMANTICS_NAMES, |s| self.semantics.contains(s))
            ));
        }
        if self.scope != SyncScope::Invocation {
            parts.push(format!("scope:{}", self.scope));
        }
        f.write_str(&parts.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_can_reorder() {
        assert!(MemorySyncInfo::default().can_reorder());
        assert!(!MemorySyncInfo::storage(StorageClass::BUFFER).can_reorder());
        assert!(MemorySyncInfo::new(
            StorageClass::BUFFER,
            Semantics::CAN_REORDER,
            SyncScope::Invocation
        )
        .can_reorder());
        assert!(!MemorySyncInfo::new(
            StorageClass::BUFFER,
            Semantics::CAN_REORDER | Semantics::ACQUIRE,
            SyncScope::Device
        )
        .can_reorder());
        assert!(!MemorySyncInfo::new(
            StorageClass::empty(),
            Semantics::VOLATILE,
            SyncScope::Invocation
        )
        .can_reorder());
    }

    #[test]
    fn test_display() {
        let sync = MemorySyncInfo::new(
            StorageClass::BUFFER | StorageClass::IMAGE,
            Semantics::ACQREL,
            SyncScope::Device,
        );
        assert_eq!(
            sync.to_string(),
            "storage:buffer+image semantics:acquire+release scope:device"
        );
        assert_eq!(MemorySyncInfo::default().to_string(), "");
    }
}
