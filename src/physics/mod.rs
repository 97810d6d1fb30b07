//! 물리 공식 모음. 모든 각도는 도(degree) 단위로 받는다.

pub mod dynamics;
pub mod electromagnetism;
pub mod energy;
pub mod kinematics;
pub mod modern;
pub mod optics;
pub mod thermo;
pub mod waves;

pub use dynamics::*;
pub use electromagnetism::*;
pub use energy::*;
pub use kinematics::*;
pub use modern::*;
pub use optics::*;
pub use thermo::*;
pub use waves::*;
