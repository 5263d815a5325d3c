mod employee;
mod general;
mod rota;
mod shift;

pub use employee::*;
pub use general::*;
pub use rota::*;
pub use shift::*;
