// Logging facade. On hardware builds the statements go through defmt; on the
// mocked platform there is no log transport, so the macros only consume their
// arguments. Adapted from the facade used by the nrf-sdc bindings.

#![allow(unused_macros)]

macro_rules! info {
    ($s:literal $(, $x:expr)* $(,)?) => {{
        #[cfg(feature = "nrf52840")]
        ::defmt::info!($s $(, $x)*);
        #[cfg(not(feature = "nrf52840"))]
        let _ = ($( & $x ),*);
    }};
}

macro_rules! error {
    ($s:literal $(, $x:expr)* $(,)?) => {{
        #[cfg(feature = "nrf52840")]
        ::defmt::error!($s $(, $x)*);
        #[cfg(not(feature = "nrf52840"))]
        let _ = ($( & $x ),*);
    }};
}
