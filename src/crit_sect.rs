// TODO: Implement own mutex abstraction instead of relying on cortex_m blocking IRQs
//       It should block only the radio stack IRQs which can enter this function

/// Proof that the current context cannot be preempted by radio stack IRQs
pub struct CriticalSection<'a> {
    #[cfg(feature = "nrf52840")]
    _internal_cs: &'a cortex_m::interrupt::CriticalSection,
    #[cfg(feature = "mocked_platform")]
    _internal_cs: core::marker::PhantomData<&'a ()>,
}

#[cfg(feature = "nrf52840")]
impl<'a> CriticalSection<'a> {
    fn new(internal_cs: &'a cortex_m::interrupt::CriticalSection) -> Self {
        Self {
            _internal_cs: internal_cs,
        }
    }
}

#[cfg(feature = "mocked_platform")]
impl<'a> CriticalSection<'a> {
    fn new() -> Self {
        Self {
            _internal_cs: core::marker::PhantomData,
        }
    }
}

/// Runs the passed closure with radio stack IRQs disabled
#[cfg(feature = "nrf52840")]
pub fn locked<F, R>(f: F) -> R
where
    F: FnOnce(&CriticalSection) -> R,
{
    // TODO: instead of disabling all interrupts, disable only relevant
    cortex_m::interrupt::free(|cs| f(&CriticalSection::new(cs)))
}

/// Runs the passed closure with radio stack IRQs disabled
///
/// The mocked platform has no IRQs. Tests verify run-time (through the
/// `RefCell` in [`Mutex`](crate::mutex::Mutex)) that no closure runs
/// concurrently with another one.
#[cfg(feature = "mocked_platform")]
pub fn locked<F, R>(f: F) -> R
where
    F: FnOnce(&CriticalSection) -> R,
{
    f(&CriticalSection::new())
}
