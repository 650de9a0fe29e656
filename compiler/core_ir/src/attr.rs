//! Attribute catalog: known-attribute lookup, target masks and flags.
//!
//! A read-only, process-wide table initialized once from literal data and
//! never mutated (spec.md §9, "global mutable state"). `LookupAttr` is
//! case-insensitive on the attribute's last path segment only.

use bitflags::bitflags;

bitflags! {
    /// AST positions an attribute may legally be attached to.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct TargetMask: u16 {
        const FN     = 1 << 0;
        const BLOCK  = 1 << 1;
        const TYPE   = 1 << 2;
        const FIELD  = 1 << 3;
        const PARAM  = 1 << 4;
        const STMT   = 1 << 5;
        const LET    = 1 << 6;
    }
}

bitflags! {
    /// Ancillary properties of a known attribute.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct AttrFlags: u8 {
        /// Only legal inside an `extern` block.
        const EXTERN_ONLY = 1 << 0;
        /// Only legal on a function *declaration* (no body), e.g. `extern fn`.
        const FN_DECL_ONLY = 1 << 1;
    }
}

/// A known attribute name with its allowed targets and flags.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum KnownAttr {
    Override,
    Deprecated,
    Inline,
    Cold,
    MustUse,
    ExternLink,
    Test,
}

/// Static catalog entry for one [`KnownAttr`].
#[derive(Copy, Clone, Debug)]
pub struct AttrInfo {
    pub attr: KnownAttr,
    pub name: &'static str,
    pub targets: TargetMask,
    pub flags: AttrFlags,
}

impl AttrInfo {
    /// `true` if this attribute may be attached to any target in `mask`.
    pub const fn allows(&self, mask: TargetMask) -> bool {
        self.targets.intersects(mask)
    }

    pub const fn has_flag(&self, flag: AttrFlags) -> bool {
        self.flags.intersects(flag)
    }
}

const CATALOG: &[AttrInfo] = &[
    AttrInfo {
        attr: KnownAttr::Override,
        name: "override",
        targets: TargetMask::FN,
        flags: AttrFlags::EXTERN_ONLY,
    },
    AttrInfo {
        attr: KnownAttr::Deprecated,
        name: "deprecated",
        targets: TargetMask::FN
            .union(TargetMask::TYPE)
            .union(TargetMask::FIELD)
            .union(TargetMask::LET),
        flags: AttrFlags::empty(),
    },
    AttrInfo {
        attr: KnownAttr::Inline,
        name: "inline",
        targets: TargetMask::FN,
        flags: AttrFlags::empty(),
    },
    AttrInfo {
        attr: KnownAttr::Cold,
        name: "cold",
        targets: TargetMask::FN,
        flags: AttrFlags::empty(),
    },
    AttrInfo {
        attr: KnownAttr::MustUse,
        name: "must_use",
        targets: TargetMask::FN.union(TargetMask::TYPE),
        flags: AttrFlags::empty(),
    },
    AttrInfo {
        attr: KnownAttr::ExternLink,
        name: "link",
        targets: TargetMask::FN.union(TargetMask::FIELD),
        flags: AttrFlags::EXTERN_ONLY.union(AttrFlags::FN_DECL_ONLY),
    },
    AttrInfo {
        attr: KnownAttr::Test,
        name: "test",
        targets: TargetMask::FN,
        flags: AttrFlags::empty(),
    },
];

/// Read-only handle to the attribute catalog.
#[derive(Copy, Clone, Debug, Default)]
pub struct AttrCatalog;

impl AttrCatalog {
    pub const fn new() -> Self {
        AttrCatalog
    }

    /// Look up a known attribute by name. Matches the exact spelling first,
    /// then the lowercased form, against only the attribute's last path
    /// segment (e.g. `ns::Override` is looked up as `override`).
    pub fn lookup(&self, name: &str) -> Option<&'static AttrInfo> {
        let last_segment = name.rsplit("::").next().unwrap_or(name);
        if let Some(info) = CATALOG.iter().find(|info| info.name == last_segment) {
            return Some(info);
        }
        let lowered = last_segment.to_lowercase();
        CATALOG.iter().find(|info| info.name == lowered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive_on_last_segment() {
        let catalog = AttrCatalog::new();
        let info = catalog.lookup("Override").expect("known attribute");
        assert_eq!(info.attr, KnownAttr::Override);
        assert!(info.allows(TargetMask::FN));
        assert!(info.has_flag(AttrFlags::EXTERN_ONLY));
    }

    #[test]
    fn lookup_uses_last_path_segment_only() {
        let catalog = AttrCatalog::new();
        let info = catalog.lookup("ns::deep::OVERRIDE").expect("known attribute");
        assert_eq!(info.attr, KnownAttr::Override);
    }

    #[test]
    fn unknown_attribute_is_none() {
        let catalog = AttrCatalog::new();
        assert!(catalog.lookup("not_a_real_attribute").is_none());
    }

    #[test]
    fn wrong_target_is_disallowed() {
        let catalog = AttrCatalog::new();
        let info = catalog.lookup("inline").unwrap();
        assert!(!info.allows(TargetMask::FIELD));
    }
}
