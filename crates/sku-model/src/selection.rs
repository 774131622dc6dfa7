use std::collections::BTreeMap;

use crate::SpecId;

/// A row's chosen value labels, keyed by specification id.
///
/// Keys need not cover the whole catalog; a missing key simply omits that
/// specification's fragment. The map carries no ordering semantics of its
/// own — generation order always comes from [`crate::Specification::order`].
/// Values are display labels, not value ids; renaming a label orphans
/// selections still holding the old one (surfaced by validation).
pub type SelectedValues = BTreeMap<SpecId, String>;
