pub mod batch_ops;
pub mod convert_ops;
