pub mod show;
pub mod tabulate;
