use std::collections::BTreeMap;

/// Erodes the alpha of pixels whose red channel matches `red`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct AlphaRule {
    pub red: u8,
    pub reduce_by: u8,
}

impl AlphaRule {
    pub const RED_EDGE: AlphaRule = AlphaRule {
        red: 255,
        reduce_by: 38,
    };

    pub fn apply(&self, red: u8, alpha: u8) -> u8 {
        if red == self.red {
            alpha.saturating_sub(self.reduce_by)
        } else {
            alpha
        }
    }
}

// Artwork whose red outline is softened when embedded.
const BUILTIN: &[(&str, AlphaRule)] = &[
    ("claw1", AlphaRule::RED_EDGE),
    ("claw2", AlphaRule::RED_EDGE),
    ("run1", AlphaRule::RED_EDGE),
    ("run2", AlphaRule::RED_EDGE),
    ("run3", AlphaRule::RED_EDGE),
    ("run4", AlphaRule::RED_EDGE),
    ("scratch1", AlphaRule::RED_EDGE),
    ("scratch2", AlphaRule::RED_EDGE),
    ("sit", AlphaRule::RED_EDGE),
    ("tail", AlphaRule::RED_EDGE),
];

/// Per-asset alpha adjustments, keyed by asset short name.
#[derive(Clone, PartialEq, Debug)]
pub struct AlphaRules {
    rules: BTreeMap<String, AlphaRule>,
}

impl AlphaRules {
    pub fn empty() -> AlphaRules {
        AlphaRules {
            rules: BTreeMap::new(),
        }
    }

    pub fn insert(&mut self, name: impl Into<String>, rule: AlphaRule) -> Option<AlphaRule> {
        self.rules.insert(name.into(), rule)
    }

    pub fn get(&self, name: &str) -> Option<AlphaRule> {
        self.rules.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for AlphaRules {
    fn default() -> AlphaRules {
        let mut rules = AlphaRules::empty();
        for (name, rule) in BUILTIN {
            rules.insert(*name, *rule);
        }
        rules
    }
}
