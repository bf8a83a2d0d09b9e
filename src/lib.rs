pub mod characteristics;
pub mod initialization;
pub mod io;
pub mod solver;
