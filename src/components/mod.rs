pub mod ambient_field;
pub mod sections;
