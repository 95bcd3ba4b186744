//! Per-block wait state: outstanding counts, the register scoreboard and
//! the barrier table.

use super::imm::{Counter, WaitEvent, WaitImm};
use crate::ir::sync::STORAGE_COUNT;
use crate::ir::{
    ChipClass, MemorySyncInfo, PhysReg, Program, RegClass, Semantics, StorageClass, SyncScope,
};
use std::collections::BTreeMap;

/// Scoreboard entry for one register slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitEntry {
    /// Bound that guarantees the pending write (or read) has completed.
    pub imm: WaitImm,
    pub events: WaitEvent,
    pub counters: Counter,
    /// Reads of the register must wait too, not only overwrites.
    pub wait_on_read: bool,
    /// Tracked along logical edges only.
    pub logical: bool,
    pub has_vmem_nosampler: bool,
    pub has_vmem_sampler: bool,
}

impl WaitEntry {
    pub fn new(event: WaitEvent, imm: WaitImm, logical: bool, wait_on_read: bool) -> Self {
        Self {
            imm,
            events: event,
            counters: event.counters(),
            wait_on_read,
            logical,
            has_vmem_nosampler: false,
            has_vmem_sampler: false,
        }
    }

    /// Merge another entry for the same slot. Returns whether anything changed.
    pub fn join(&mut self, other: &WaitEntry) -> bool {
        let before = *self;
        self.events |= other.events;
        self.counters |= other.counters;
        self.wait_on_read |= other.wait_on_read;
        self.has_vmem_nosampler |= other.has_vmem_nosampler;
        self.has_vmem_sampler |= other.has_vmem_sampler;
        self.imm.combine(&other.imm);
        before != *self
    }

    /// Forget everything tracked by `counter` after a wait satisfied it.
    pub fn remove_counter(&mut self, counter: Counter) {
        self.counters.remove(counter);
        if counter == Counter::LGKM {
            self.imm.lgkm = WaitImm::UNSET;
            self.events
                .remove(WaitEvent::SMEM | WaitEvent::LDS | WaitEvent::GDS | WaitEvent::SENDMSG);
        } else if counter == Counter::VM {
            self.imm.vm = WaitImm::UNSET;
            self.events.remove(WaitEvent::VMEM);
            self.has_vmem_nosampler = false;
            self.has_vmem_sampler = false;
        } else if counter == Counter::EXP {
            self.imm.exp = WaitImm::UNSET;
            self.events.remove(WaitEvent::EXP_EVENTS);
        } else if counter == Counter::VS {
            self.imm.vs = WaitImm::UNSET;
            self.events.remove(WaitEvent::VMEM_STORE);
        }
        if !self.counters.intersects(Counter::LGKM | Counter::VM) {
            self.events.remove(WaitEvent::FLAT);
        }
    }
}

/// Program parameters the pass consults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Target {
    pub chip: ChipClass,
    pub wave_size: u32,
    pub workgroup_size: u32,
    pub wgp_mode: bool,
    pub early_rast: bool,
}

impl Target {
    pub fn of(program: &Program) -> Self {
        Self {
            chip: program.chip_class,
            wave_size: program.wave_size,
            workgroup_size: program.workgroup_size,
            wgp_mode: program.wgp_mode,
            early_rast: program.early_rast,
        }
    }
}

/// Wait state at one program point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaitCtx {
    pub target: Target,

    pub max_vm_cnt: u8,
    pub max_exp_cnt: u8,
    pub max_lgkm_cnt: u8,
    pub max_vs_cnt: u8,
    /// Events that may complete out of issue order.
    pub unordered_events: WaitEvent,

    pub vm_cnt: u8,
    pub exp_cnt: u8,
    pub lgkm_cnt: u8,
    pub vs_cnt: u8,
    pub pending_flat_lgkm: bool,
    pub pending_flat_vm: bool,
    pub pending_s_buffer_store: bool,

    pub barrier_imm: [WaitImm; STORAGE_COUNT],
    pub barrier_events: [WaitEvent; STORAGE_COUNT],

    pub gpr_map: BTreeMap<PhysReg, WaitEntry>,
}

impl WaitCtx {
    pub fn new(target: Target) -> Self {
        let chip = target.chip;
        let mut unordered_events = WaitEvent::SMEM;
        if chip < ChipClass::Gfx10 {
            unordered_events |= WaitEvent::FLAT;
        }
        Self {
            target,
            max_vm_cnt: if chip >= ChipClass::Gfx9 { 62 } else { 14 },
            max_exp_cnt: 6,
            max_lgkm_cnt: if chip >= ChipClass::Gfx10 { 62 } else { 14 },
            max_vs_cnt: if chip >= ChipClass::Gfx10 { 62 } else { 0 },
            unordered_events,
            vm_cnt: 0,
            exp_cnt: 0,
            lgkm_cnt: 0,
            vs_cnt: 0,
            pending_flat_lgkm: false,
            pending_flat_vm: false,
            pending_s_buffer_store: false,
            barrier_imm: [WaitImm::new(); STORAGE_COUNT],
            barrier_events: [WaitEvent::empty(); STORAGE_COUNT],
            gpr_map: BTreeMap::new(),
        }
    }

    pub fn count(&self, counter: Counter) -> u8 {
        if counter == Counter::EXP {
            self.exp_cnt
        } else if counter == Counter::LGKM {
            self.lgkm_cnt
        } else if counter == Counter::VM {
            self.vm_cnt
        } else if counter == Counter::VS {
            self.vs_cnt
        } else {
            0
        }
    }

    fn count_mut(&mut self, counter: Counter) -> Option<&mut u8> {
        if counter == Counter::EXP {
            Some(&mut self.exp_cnt)
        } else if counter == Counter::LGKM {
            Some(&mut self.lgkm_cnt)
        } else if counter == Counter::VM {
            Some(&mut self.vm_cnt)
        } else if counter == Counter::VS {
            Some(&mut self.vs_cnt)
        } else {
            None
        }
    }

    pub fn max_count(&self, counter: Counter) -> u8 {
        if counter == Counter::EXP {
            self.max_exp_cnt
        } else if counter == Counter::LGKM {
            self.max_lgkm_cnt
        } else if counter == Counter::VM {
            self.max_vm_cnt
        } else if counter == Counter::VS {
            self.max_vs_cnt
        } else {
            0
        }
    }

    fn bump(&mut self, counter: Counter) {
        let max = self.max_count(counter);
        if let Some(count) = self.count_mut(counter) {
            *count = count.saturating_add(1).min(max);
        }
    }

    /// Merge the state at the end of a predecessor. Only scoreboard entries
    /// whose `logical` flag matches are taken. Returns whether anything changed.
    pub fn join(&mut self, other: &WaitCtx, logical: bool) -> bool {
        let mut changed = other.exp_cnt > self.exp_cnt
            || other.vm_cnt > self.vm_cnt
            || other.lgkm_cnt > self.lgkm_cnt
            || other.vs_cnt > self.vs_cnt
            || (other.pending_flat_lgkm && !self.pending_flat_lgkm)
            || (other.pending_flat_vm && !self.pending_flat_vm)
            || (other.pending_s_buffer_store && !self.pending_s_buffer_store);

        self.exp_cnt = self.exp_cnt.max(other.exp_cnt);
        self.vm_cnt = self.vm_cnt.max(other.vm_cnt);
        self.lgkm_cnt = self.lgkm_cnt.max(other.lgkm_cnt);
        self.vs_cnt = self.vs_cnt.max(other.vs_cnt);
        self.pending_flat_lgkm |= other.pending_flat_lgkm;
        self.pending_flat_vm |= other.pending_flat_vm;
        self.pending_s_buffer_store |= other.pending_s_buffer_store;

        for (reg, entry) in other.gpr_map.iter().filter(|(_, e)| e.logical == logical) {
            match self.gpr_map.get_mut(reg) {
                Some(existing) => changed |= existing.join(entry),
                None => {
                    self.gpr_map.insert(*reg, *entry);
                    changed = true;
                }
            }
        }

        for i in 0..STORAGE_COUNT {
            changed |= self.barrier_imm[i].combine(&other.barrier_imm[i]);
            changed |= !(other.barrier_events[i] - self.barrier_events[i]).is_empty();
            self.barrier_events[i] |= other.barrier_events[i];
        }

        changed
    }

    /// Scope at or below which all invocations of the workgroup run in one
    /// wave and see each other's accesses in order.
    fn subgroup_scope(&self) -> SyncScope {
        if self.target.workgroup_size <= self.target.wave_size {
            SyncScope::Workgroup
        } else {
            SyncScope::Subgroup
        }
    }

    /// Wait needed to honour a barrier with `semantics` on the storage
    /// classes named by `sync`.
    pub fn perform_barrier(&self, sync: MemorySyncInfo, semantics: Semantics) -> WaitImm {
        let mut imm = WaitImm::new();
        let subgroup_scope = self.subgroup_scope();
        if !sync.semantics.intersects(semantics) || sync.scope <= subgroup_scope {
            return imm;
        }

        for idx in (0..STORAGE_COUNT).filter(|&i| sync.storage.bits() & (1 << i) != 0) {
            let mut events = self.barrier_events[idx];

            // Shared memory never leaves the workgroup.
            if sync.scope.min(SyncScope::Workgroup) <= subgroup_scope {
                events.remove(WaitEvent::LDS);
            }

            // Outside WGP mode the per-CU cache keeps a workgroup's accesses in order.
            if !self.target.wgp_mode && sync.scope <= SyncScope::Workgroup {
                events.remove(WaitEvent::VMEM | WaitEvent::VMEM_STORE | WaitEvent::SMEM);
            }

            if !events.is_empty() {
                imm.combine(&self.barrier_imm[idx]);
            }
        }
        imm
    }

    fn update_barrier_imm(&mut self, counters: Counter, event: WaitEvent, sync: MemorySyncInfo) {
        for i in 0..STORAGE_COUNT {
            let touched = StorageClass::from_bits_truncate(1 << i);
            let bar_ev = self.barrier_events[i];
            if sync.storage.intersects(touched) && !sync.semantics.contains(Semantics::PRIVATE) {
                self.barrier_events[i] |= event;
                for counter in counters.iter() {
                    self.barrier_imm[i].set(counter, 0);
                }
            } else if !bar_ev.intersects(self.unordered_events)
                && !self.unordered_events.intersects(event)
            {
                for counter in counters.iter() {
                    let bar = self.barrier_imm[i].get(counter);
                    if bar != WaitImm::UNSET && (bar_ev & counter.events()) == event {
                        let max = self.max_count(counter);
                        self.barrier_imm[i].set(counter, bar.saturating_add(1).min(max));
                    }
                }
            }
        }
    }

    /// Account for a newly issued `event`.
    pub fn update_counters(&mut self, event: WaitEvent, sync: MemorySyncInfo) {
        let mut counters = event.counters();
        for counter in counters.iter() {
            self.bump(counter);
        }

        self.update_barrier_imm(counters, event, sync);

        if self.unordered_events.intersects(event) {
            return;
        }

        if self.pending_flat_lgkm {
            counters.remove(Counter::LGKM);
        }
        if self.pending_flat_vm {
            counters.remove(Counter::VM);
        }

        let unordered = self.unordered_events;
        let maxima = [
            (Counter::EXP, self.max_exp_cnt),
            (Counter::LGKM, self.max_lgkm_cnt),
            (Counter::VM, self.max_vm_cnt),
            (Counter::VS, self.max_vs_cnt),
        ];
        for entry in self.gpr_map.values_mut() {
            if entry.events.intersects(unordered) {
                continue;
            }
            for (counter, max) in maxima {
                let value = entry.imm.get(counter);
                if counters.contains(counter)
                    && (entry.events & counter.events()) == event
                    && value < max
                {
                    entry.imm.set(counter, value + 1);
                }
            }
        }
    }

    /// A flat load before GFX10 may return through either path, so both
    /// counters go up and any later wait on them must drain completely.
    pub fn update_counters_for_flat_load(&mut self, sync: MemorySyncInfo) {
        self.bump(Counter::LGKM);
        self.bump(Counter::VM);
        self.update_barrier_imm(Counter::VM | Counter::LGKM, WaitEvent::FLAT, sync);
        self.pending_flat_lgkm = true;
        self.pending_flat_vm = true;
    }

    /// Start tracking `rc.size()` slots at `reg` for `event`.
    pub fn insert_wait_entry(
        &mut self,
        reg: PhysReg,
        rc: RegClass,
        event: WaitEvent,
        wait_on_read: bool,
        has_sampler: bool,
    ) {
        let imm = WaitImm::zero(event.counters());
        let mut entry = WaitEntry::new(event, imm, !rc.is_linear(), wait_on_read);
        let vmem = event.intersects(WaitEvent::VMEM);
        entry.has_vmem_nosampler = vmem && !has_sampler;
        entry.has_vmem_sampler = vmem && has_sampler;

        for i in 0..rc.size() {
            self.gpr_map
                .entry(reg.offset(i))
                .and_modify(|existing| {
                    existing.join(&entry);
                })
                .or_insert(entry);
        }
    }

    /// Shrink the state to what is left after a wait with `imm` retires.
    pub fn apply_wait(&mut self, imm: &mut WaitImm) {
        if !imm.is_empty() {
            if self.pending_flat_vm && imm.vm != WaitImm::UNSET {
                imm.vm = 0;
            }
            if self.pending_flat_lgkm && imm.lgkm != WaitImm::UNSET {
                imm.lgkm = 0;
            }

            self.exp_cnt = self.exp_cnt.min(imm.exp);
            self.vm_cnt = self.vm_cnt.min(imm.vm);
            self.lgkm_cnt = self.lgkm_cnt.min(imm.lgkm);
            self.vs_cnt = self.vs_cnt.min(imm.vs);

            for (bar, bar_ev) in self.barrier_imm.iter_mut().zip(&mut self.barrier_events) {
                for counter in Counter::all().iter() {
                    let limit = bar.get(counter);
                    if limit != WaitImm::UNSET && imm.get(counter) <= limit {
                        bar.set(counter, WaitImm::UNSET);
                        bar_ev.remove(counter.events() - WaitEvent::FLAT);
                    }
                }
                if !bar.is_set(Counter::VM) && !bar.is_set(Counter::LGKM) {
                    bar_ev.remove(WaitEvent::FLAT);
                }
            }

            self.gpr_map.retain(|_, entry| {
                for counter in Counter::all().iter() {
                    let wait = imm.get(counter);
                    if wait != WaitImm::UNSET && wait <= entry.imm.get(counter) {
                        entry.remove_counter(counter);
                    }
                }
                !entry.counters.is_empty()
            });
        }

        if imm.vm == 0 {
            self.pending_flat_vm = false;
        }
        if imm.lgkm == 0 {
            self.pending_flat_lgkm = false;
            self.pending_s_buffer_store = false;
        }
    }

    /// Zero bound on every counter with operations outstanding.
    pub fn wait_for_all(&self) -> WaitImm {
        let mut imm = WaitImm::new();
        for counter in Counter::all().iter() {
            if self.count(counter) > 0 {
                imm.set(counter, 0);
            }
        }
        imm
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target(chip: ChipClass) -> Target {
        Target {
            chip,
            wave_size: 64,
            workgroup_size: 256,
            wgp_mode: false,
            early_rast: false,
        }
    }

    #[test]
    fn test_maxima() {
        let ctx = WaitCtx::new(target(ChipClass::Gfx8));
        assert_eq!((ctx.max_vm_cnt, ctx.max_lgkm_cnt, ctx.max_vs_cnt), (14, 14, 0));
        assert!(ctx.unordered_events.contains(WaitEvent::FLAT));
        let ctx = WaitCtx::new(target(ChipClass::Gfx10));
        assert_eq!((ctx.max_vm_cnt, ctx.max_lgkm_cnt, ctx.max_vs_cnt), (62, 62, 62));
        assert_eq!(ctx.unordered_events, WaitEvent::SMEM);
    }

    #[test]
    fn test_in_order_loads_age() {
        let mut ctx = WaitCtx::new(target(ChipClass::Gfx9));
        let sync = MemorySyncInfo::default();
        ctx.update_counters(WaitEvent::VMEM, sync);
        ctx.insert_wait_entry(PhysReg::vgpr(0), RegClass::V1, WaitEvent::VMEM, true, false);
        ctx.update_counters(WaitEvent::VMEM, sync);
        ctx.insert_wait_entry(PhysReg::vgpr(1), RegClass::V1, WaitEvent::VMEM, true, false);

        assert_eq!(ctx.vm_cnt, 2);
        assert_eq!(ctx.gpr_map[&PhysReg::vgpr(0)].imm.vm, 1);
        assert_eq!(ctx.gpr_map[&PhysReg::vgpr(1)].imm.vm, 0);

        let mut imm = WaitImm::from_counts(1, WaitImm::UNSET, WaitImm::UNSET, WaitImm::UNSET);
        ctx.apply_wait(&mut imm);
        assert_eq!(ctx.vm_cnt, 1);
        assert!(!ctx.gpr_map.contains_key(&PhysReg::vgpr(0)));
        assert!(ctx.gpr_map.contains_key(&PhysReg::vgpr(1)));
    }

    #[test]
    fn test_unordered_smem_does_not_age() {
        let mut ctx = WaitCtx::new(target(ChipClass::Gfx10));
        let sync = MemorySyncInfo::default();
        ctx.update_counters(WaitEvent::SMEM, sync);
        ctx.insert_wait_entry(PhysReg::new(4), RegClass::S2, WaitEvent::SMEM, true, false);
        ctx.update_counters(WaitEvent::SMEM, sync);
        assert_eq!(ctx.lgkm_cnt, 2);
        assert_eq!(ctx.gpr_map[&PhysReg::new(4)].imm.lgkm, 0);
        assert_eq!(ctx.gpr_map[&PhysReg::new(5)].imm.lgkm, 0);
        assert!(!ctx.gpr_map[&PhysReg::new(4)].logical);
    }

    #[test]
    fn test_flat_load_pending() {
        let mut ctx = WaitCtx::new(target(ChipClass::Gfx9));
        ctx.update_counters_for_flat_load(MemorySyncInfo::default());
        assert!(ctx.pending_flat_vm && ctx.pending_flat_lgkm);
        let mut imm = WaitImm::from_counts(3, WaitImm::UNSET, WaitImm::UNSET, WaitImm::UNSET);
        ctx.apply_wait(&mut imm);
        assert_eq!(imm.vm, 0);
        assert!(!ctx.pending_flat_vm);
        assert!(ctx.pending_flat_lgkm);
    }

    #[test]
    fn test_join_logical_filter() {
        let mut a = WaitCtx::new(target(ChipClass::Gfx10));
        let mut b = a.clone();
        b.update_counters(WaitEvent::VMEM, MemorySyncInfo::default());
        b.insert_wait_entry(PhysReg::vgpr(2), RegClass::V1, WaitEvent::VMEM, true, false);
        b.insert_wait_entry(PhysReg::new(8), RegClass::S1, WaitEvent::SMEM, true, false);

        assert!(a.join(&b, false));
        assert_eq!(a.vm_cnt, 1);
        assert!(a.gpr_map.contains_key(&PhysReg::new(8)));
        assert!(!a.gpr_map.contains_key(&PhysReg::vgpr(2)));

        assert!(a.join(&b, true));
        assert!(a.gpr_map.contains_key(&PhysReg::vgpr(2)));
        assert!(!a.join(&b, true));
        assert!(!a.join(&b, false));
    }

    #[test]
    fn test_barrier_table() {
        let mut ctx = WaitCtx::new(target(ChipClass::Gfx10));
        let buffer = MemorySyncInfo::storage(StorageClass::BUFFER);
        ctx.update_counters(WaitEvent::VMEM_STORE, buffer);
        assert_eq!(ctx.barrier_imm[0].vs, 0);
        assert_eq!(ctx.barrier_events[0], WaitEvent::VMEM_STORE);

        let release = MemorySyncInfo::new(StorageClass::BUFFER, Semantics::RELEASE, SyncScope::Device);
        let imm = ctx.perform_barrier(release, Semantics::RELEASE);
        assert_eq!(imm.vs, 0);

        // Stores stay ordered within a workgroup outside WGP mode.
        let workgroup =
            MemorySyncInfo::new(StorageClass::BUFFER, Semantics::RELEASE, SyncScope::Workgroup);
        assert!(ctx.perform_barrier(workgroup, Semantics::RELEASE).is_empty());
        assert!(ctx.perform_barrier(release, Semantics::ACQUIRE).is_empty());

        let mut imm = imm;
        ctx.apply_wait(&mut imm);
        assert!(ctx.barrier_events[0].is_empty());
        assert!(ctx.perform_barrier(release, Semantics::RELEASE).is_empty());
    }
}
