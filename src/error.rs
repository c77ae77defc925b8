/// Errors reported by radio software
#[derive(Debug, Eq, PartialEq)]
#[cfg_attr(feature = "nrf52840", derive(defmt::Format))]
pub enum Error {
    /// The module is busy with ongoing operation
    WouldBlock,
    /// The vendor stack returned a non-zero status code
    StackError(i32),
    /// Two front-end module signals were assigned the same exclusive resource
    ResourceConflict,
    /// The one-shot initialization step was attempted again
    AlreadyInitialized,
    /// The operation requires a completed initialization sequence
    NotInitialized,
}
