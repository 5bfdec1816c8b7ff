pub mod completion;
pub mod launch;
