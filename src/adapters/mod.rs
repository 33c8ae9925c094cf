// Adapters layer: concrete CourseStore backends behind the domain port.

pub mod memory;
pub mod mongo;
