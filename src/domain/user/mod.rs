// User domain module

pub mod value_objects;
