pub mod deserialize;
pub mod serialize;

pub use deserialize::read_students;
pub use serialize::unload_data;
