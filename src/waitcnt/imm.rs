//! Wait immediates, counters and the events that drive them.

use crate::ir::ChipClass;
use bitflags::bitflags;
use std::fmt;

bitflags! {
    /// Hardware counters tracking outstanding asynchronous operations.
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
    pub struct Counter: u8 {
        const EXP = 1 << 0;
        const LGKM = 1 << 1;
        const VM = 1 << 2;
        const VS = 1 << 3;
    }
}

bitflags! {
    /// Asynchronous operations that bump one or more counters.
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
    pub struct WaitEvent: u16 {
        const SMEM = 1 << 0;
        const LDS = 1 << 1;
        const GDS = 1 << 2;
        const VMEM = 1 << 3;
        const VMEM_STORE = 1 << 4;
        const FLAT = 1 << 5;
        const EXP_POS = 1 << 6;
        const EXP_PARAM = 1 << 7;
        const EXP_MRT_NULL = 1 << 8;
        const GDS_GPR_LOCK = 1 << 9;
        const VMEM_GPR_LOCK = 1 << 10;
        const SENDMSG = 1 << 11;
    }
}

impl WaitEvent {
    pub const EXP_EVENTS: WaitEvent = WaitEvent::EXP_POS
        .union(WaitEvent::EXP_PARAM)
        .union(WaitEvent::EXP_MRT_NULL)
        .union(WaitEvent::GDS_GPR_LOCK)
        .union(WaitEvent::VMEM_GPR_LOCK);
    pub const LGKM_EVENTS: WaitEvent = WaitEvent::SMEM
        .union(WaitEvent::LDS)
        .union(WaitEvent::GDS)
        .union(WaitEvent::FLAT)
        .union(WaitEvent::SENDMSG);
    pub const VM_EVENTS: WaitEvent = WaitEvent::VMEM.union(WaitEvent::FLAT);
    pub const VS_EVENTS: WaitEvent = WaitEvent::VMEM_STORE;

    /// Counters incremented by these events.
    pub fn counters(self) -> Counter {
        let mut counters = Counter::empty();
        if self.intersects(Self::EXP_EVENTS) {
            counters |= Counter::EXP;
        }
        if self.intersects(Self::LGKM_EVENTS) {
            counters |= Counter::LGKM;
        }
        if self.intersects(Self::VM_EVENTS) {
            counters |= Counter::VM;
        }
        if self.intersects(Self::VS_EVENTS) {
            counters |= Counter::VS;
        }
        counters
    }
}

impl Counter {
    /// Events counted by a single counter.
    pub fn events(self) -> WaitEvent {
        let mut events = WaitEvent::empty();
        if self.contains(Counter::EXP) {
            events |= WaitEvent::EXP_EVENTS;
        }
        if self.contains(Counter::LGKM) {
            events |= WaitEvent::LGKM_EVENTS;
        }
        if self.contains(Counter::VM) {
            events |= WaitEvent::VM_EVENTS;
        }
        if self.contains(Counter::VS) {
            events |= WaitEvent::VS_EVENTS;
        }
        events
    }
}

/// Upper bound per counter: how many operations may still be outstanding.
///
/// Smaller is stricter. [`WaitImm::UNSET`] means no bound.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct WaitImm {
    pub vm: u8,
    pub exp: u8,
    pub lgkm: u8,
    pub vs: u8,
}

impl Default for WaitImm {
    fn default() -> Self {
        Self::new()
    }
}

impl WaitImm {
    pub const UNSET: u8 = 0xff;

    pub const fn new() -> Self {
        Self {
            vm: Self::UNSET,
            exp: Self::UNSET,
            lgkm: Self::UNSET,
            vs: Self::UNSET,
        }
    }

    pub const fn from_counts(vm: u8, exp: u8, lgkm: u8, vs: u8) -> Self {
        Self { vm, exp, lgkm, vs }
    }

    /// A bound of zero on every counter in `counters`.
    pub fn zero(counters: Counter) -> Self {
        let mut imm = Self::new();
        for counter in counters.iter() {
            imm.set(counter, 0);
        }
        imm
    }

    /// Decode an `s_waitcnt` immediate.
    pub fn unpack(chip: ChipClass, packed: u16) -> Self {
        let packed = packed as u32;
        let mut vm = packed & 0xf;
        if chip >= ChipClass::Gfx9 {
            vm |= (packed >> 10) & 0x30;
        }
        let exp = (packed >> 4) & 0x7;
        let mut lgkm = (packed >> 8) & 0xf;
        if chip >= ChipClass::Gfx10 {
            lgkm |= (packed >> 8) & 0x30;
        }
        Self {
            vm: vm as u8,
            exp: exp as u8,
            lgkm: lgkm as u8,
            vs: Self::UNSET,
        }
    }

    /// Encode as an `s_waitcnt` immediate. `vs` is not part of it.
    pub fn pack(&self, chip: ChipClass) -> u16 {
        let vm = self.vm as u32;
        let exp = self.exp as u32;
        let lgkm = self.lgkm as u32;
        let mut imm = match chip {
            ChipClass::Gfx10 | ChipClass::Gfx10_3 => {
                ((vm & 0x30) << 10) | ((lgkm & 0x3f) << 8) | ((exp & 0x7) << 4) | (vm & 0xf)
            }
            ChipClass::Gfx9 => {
                ((vm & 0x30) << 10) | ((lgkm & 0xf) << 8) | ((exp & 0x7) << 4) | (vm & 0xf)
            }
            _ => ((lgkm & 0xf) << 8) | ((exp & 0x7) << 4) | (vm & 0xf),
        };
        // Fill the bits older chips ignore so the value reads the same everywhere.
        if chip < ChipClass::Gfx9 && self.vm == Self::UNSET {
            imm |= 0xc000;
        }
        if chip < ChipClass::Gfx10 && self.lgkm == Self::UNSET {
            imm |= 0x3000;
        }
        imm as u16
    }

    /// Take the stricter bound of each field. Returns whether anything changed.
    pub fn combine(&mut self, other: &WaitImm) -> bool {
        let before = *self;
        self.vm = self.vm.min(other.vm);
        self.exp = self.exp.min(other.exp);
        self.lgkm = self.lgkm.min(other.lgkm);
        self.vs = self.vs.min(other.vs);
        before != *self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::new()
    }

    /// Field of a single counter.
    pub fn get(&self, counter: Counter) -> u8 {
        if counter == Counter::EXP {
            self.exp
        } else if counter == Counter::LGKM {
            self.lgkm
        } else if counter == Counter::VM {
            self.vm
        } else if counter == Counter::VS {
            self.vs
        } else {
            Self::UNSET
        }
    }

    pub fn set(&mut self, counter: Counter, value: u8) {
        if counter == Counter::EXP {
            self.exp = value;
        } else if counter == Counter::LGKM {
            self.lgkm = value;
        } else if counter == Counter::VM {
            self.vm = value;
        } else if counter == Counter::VS {
            self.vs = value;
        }
    }

    pub fn is_set(&self, counter: Counter) -> bool {
        self.get(counter) != Self::UNSET
    }
}

impl fmt::Display for WaitImm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (name, value) in [
            ("vmcnt", self.vm),
            ("expcnt", self.exp),
            ("lgkmcnt", self.lgkm),
            ("vscnt", self.vs),
        ] {
            if value == Self::UNSET {
                continue;
            }
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{name}({value})")?;
            first = false;
        }
        if first {
            f.write_str("none")?;
        }
        Ok(())
    }
}
