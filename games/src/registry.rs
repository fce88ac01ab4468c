//! Title registry for automatic driver discovery.
//!
//! Each adapter self-registers via [`inventory::submit!`] with a [`RomEntry`]
//! containing its canonical name and a factory function. The driver
//! discovers supported titles at runtime without any central list.

use freeplay_core::rom::Rom;
use freeplay_core::settings::RomSettings;

/// Describes one supported title.
pub struct RomEntry {
    /// Canonical title identifier; always equals the adapter's `rom()` name.
    pub name: &'static str,
    /// Factory: construct the adapter in its pre-reset default state.
    pub create: fn() -> Box<dyn RomSettings>,
}

impl RomEntry {
    pub const fn new(name: &'static str, create: fn() -> Box<dyn RomSettings>) -> Self {
        Self { name, create }
    }
}

inventory::collect!(RomEntry);

/// Return all registered titles, sorted by name.
pub fn all() -> Vec<&'static RomEntry> {
    let mut entries: Vec<_> = inventory::iter::<RomEntry>.into_iter().collect();
    entries.sort_by_key(|e| e.name);
    entries
}

/// Look up a title by its canonical name.
pub fn find(name: &str) -> Option<&'static RomEntry> {
    inventory::iter::<RomEntry>
        .into_iter()
        .find(|e| e.name == name)
}

/// Instantiate a ready-to-drive [`Rom`] for `name`.
pub fn create(name: &str) -> Option<Rom> {
    let entry = find(name)?;
    log::debug!("instantiating rom support for {}", entry.name);
    Some(Rom::new((entry.create)()))
}
