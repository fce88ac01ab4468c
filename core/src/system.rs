/// Bytes of console working RAM visible to title adapters.
pub const RAM_SIZE: usize = 128;

/// Read-only view of the emulator's machine state for one frame.
///
/// A fresh accessor is handed to [`crate::settings::RomSettings::step`] once
/// per emulated frame. Adapters read whatever cells their title's memory map
/// names and must not retain the reference beyond the call.
pub trait System {
    /// Working-RAM byte at `offset`, `0..RAM_SIZE`.
    fn ram(&self, offset: usize) -> u8;
}
