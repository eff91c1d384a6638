pub mod assembler;
pub mod data;

pub use assembler::{AssemblerState, ChartAssembler, ChartError};
pub use data::{Angles, BodyPlacement, Chart, ChartMeta, ChartMetadata, HouseCusp};
