//! Hardware access helpers required by the glue layer

pub mod irq;
