// This module contains the knobs that steer the backend. DebugFlags mirrors the debug options a
// driver can set through the GCN_DEBUG environment variable: FORCE_WAITCNT makes the wait-count
// pass drain every counter after each instruction, which is the first thing to try when chasing
// a suspected memory ordering bug, and VALIDATE_IR runs the structural validator before any pass
// touches the program. EmitOptions bundles the flags with the switch that disables wait
// insertion entirely for callers that produce fully synchronised code themselves.

//! Backend options.

use bitflags::bitflags;

bitflags! {
    /// Debug behaviour of the backend passes.
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
    pub struct DebugFlags: u32 {
        /// Wait for every outstanding counter after each instruction.
        const FORCE_WAITCNT = 1 << 0;
        /// Validate the program before running any pass.
        const VALIDATE_IR = 1 << 1;
    }
}

/// Environment variable read by [`DebugFlags::from_env`].
pub const DEBUG_ENV: &str = "GCN_DEBUG";

impl DebugFlags {
    /// Parse a comma separated list such as `force-waitcnt,validate-ir`.
    /// Unknown names are reported and skipped.
    pub fn parse(list: &str) -> Self {
        let mut flags = DebugFlags::empty();
        for name in list.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            match name {
                "force-waitcnt" | "force_waitcnt" => flags |= DebugFlags::FORCE_WAITCNT,
                "validate-ir" | "validate_ir" | "validate" => flags |= DebugFlags::VALIDATE_IR,
                _ => log::warn!("unknown {} option `{}`", DEBUG_ENV, name),
            }
        }
        flags
    }

    pub fn from_env() -> Self {
        std::env::var(DEBUG_ENV)
            .map(|list| Self::parse(&list))
            .unwrap_or_default()
    }
}

/// Options for a backend run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmitOptions {
    pub debug: DebugFlags,
    /// Run the wait-count pass before assembly.
    pub insert_waits: bool,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            debug: DebugFlags::empty(),
            insert_waits: true,
        }
    }
}

impl EmitOptions {
    /// Default options with debug flags taken from the environment.
    pub fn from_env() -> Self {
        Self {
            debug: DebugFlags::from_env(),
            ..Self::default()
        }
    }

    pub fn force_waitcnt(&self) -> bool {
        self.debug.contains(DebugFlags::FORCE_WAITCNT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        let _ = env_logger::builder().is_test(true).try_init();
        assert_eq!(
            DebugFlags::parse("force-waitcnt, validate-ir"),
            DebugFlags::FORCE_WAITCNT | DebugFlags::VALIDATE_IR
        );
        assert_eq!(DebugFlags::parse("bogus,,"), DebugFlags::empty());
        assert_eq!(DebugFlags::parse(""), DebugFlags::empty());
    }

    #[test]
    fn test_default_options() {
        let options = EmitOptions::default();
        assert!(options.insert_waits);
        assert!(!options.force_waitcnt());
    }
}
